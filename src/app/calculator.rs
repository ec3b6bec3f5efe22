use std::fs::File;
use std::io::{self, BufRead};

use log::error;

use crate::analysis::analyze;
use crate::mcr::{score_completed_hand_with, WinFlags};
use crate::model::*;
use crate::text::Locale;
use crate::util::misc::*;
use crate::util::string::*;

#[derive(Debug)]
pub struct CalculatorApp {
    args: Vec<String>,
    mode: GameMode,
    detail: bool,
}

impl CalculatorApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            mode: GameMode::Mcr,
            detail: false,
        }
    }

    pub fn run(&mut self) {
        let mut file_path = "".to_string();
        let mut exp = "".to_string();
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-d" => self.detail = true,
                "-f" => file_path = next_value(&mut it, s),
                "-m" => self.mode = mode_from_str(&next_value::<String>(&mut it, s)).unwrap_or_else(error_exit),
                _ => {
                    if s.starts_with('-') {
                        error!("unknown option: {}", s);
                        return;
                    }
                    if !exp.is_empty() {
                        error!("multiple expression is not allowed");
                        return;
                    }
                    exp = s.clone();
                }
            }
        }

        if file_path.is_empty() == exp.is_empty() {
            print_usage();
            return;
        }

        if !exp.is_empty() {
            if let Err(e) = self.process_expression(&exp) {
                error!("{}", e);
                return;
            }
        }

        if !file_path.is_empty() {
            if let Err(e) = self.run_from_file(&file_path) {
                error!("{}", e);
            }
        }
    }

    fn run_from_file(&self, file_path: &str) -> Res {
        let file = File::open(file_path)?;
        let lines = io::BufReader::new(file).lines();
        for exp in lines.map_while(Result::ok) {
            let e = exp.replace(' ', "");
            if e.is_empty() || e.starts_with('#') {
                // 空行とコメント行はスキップ
                println!("> {}", exp);
            } else if let Err(e) = self.process_expression(&exp) {
                error!("{}", e);
            }
            println!();
        }
        Ok(())
    }

    fn process_expression(&self, exp: &str) -> Res {
        let mut calculator = Calculator::new(self.mode, self.detail);
        calculator.parse(exp)?;
        calculator.run();
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Verify {
    Ok,
    Error,
    Skip,
}

// 式: 手牌,副露,副露.../オプション/検証値
// オプション: m=mcr|sichuan, w=牌山の残り, v=m|p|s(四川麻雀の定缺), l=en|zh
//             ts(自摸), wt=和了牌, pw=圏風, sw=門風, f=花牌の数
//             hd(妙手回春), hc(海底捞月), rp(杠上开花), rk(抢杠和), lk(和绝张)
// 検証値: 向聴数 または 向聴数,番数
#[derive(Debug)]
struct Calculator {
    detail: bool,
    state: GameState,
    locale: Locale,
    flags: WinFlags,
    // verify
    verify: bool,
    shanten: i32,
    fan: Option<usize>,
}

impl Calculator {
    fn new(mode: GameMode, detail: bool) -> Self {
        Self {
            detail,
            state: GameState::new(mode, vec![], vec![]),
            locale: Locale::En,
            flags: WinFlags::default(),
            verify: false,
            shanten: 0,
            fan: None,
        }
    }

    fn parse(&mut self, input: &str) -> Res {
        println!("> {}", input);

        let input = input.replace(' ', "");
        let input = input.split('#').next().unwrap_or(""); // コメント削除
        let exps: Vec<&str> = input.split('/').collect();
        let len = exps.len();
        if len > 0 {
            self.parse_hand_meld(exps[0])?;
        }
        if len > 1 {
            self.parse_options(exps[1])?;
        }
        if len > 2 {
            self.parse_verify(exps[2])?;
        }

        if self.detail {
            println!("{:?}", self);
        }

        Ok(())
    }

    fn run(&self) -> Verify {
        let res = analyze(&self.state, self.locale);
        if self.detail {
            println!("{}", serde_json::to_string(&res).unwrap_or_default());
        }
        println!("{}", res);

        // 国標麻雀の和了形は役の条件を加えて点数を再計算
        let mut fan = res.score_estimate;
        if res.status == HandStatus::Won && self.state.mode == GameMode::Mcr {
            let score = score_completed_hand_with(&self.state.hand, &self.state.melds, &self.flags, self.locale);
            println!("fan: {} [{}]", score.total_fan, score.details.join(", "));
            fan = score.total_fan;
        }

        let verify = if self.verify {
            if res.shanten == self.shanten && self.fan.map_or(true, |f| f == fan) {
                Verify::Ok
            } else {
                Verify::Error
            }
        } else {
            Verify::Skip
        };
        println!("verify: {:?}", verify);
        verify
    }

    fn parse_hand_meld(&mut self, input: &str) -> Res {
        let mut exps = input.split(',');
        let hand = tiles_from_string(exps.next().unwrap_or(""))?;
        let mut melds = vec![];
        for exp in exps {
            melds.push(meld_from_string(exp)?);
        }
        self.state.hand = hand;
        self.state.melds = melds;
        self.state.validate()?;
        Ok(())
    }

    fn parse_options(&mut self, input: &str) -> Res {
        for opt in input.split(',') {
            let (key, value) = match opt.split_once('=') {
                Some((k, v)) => (k, v),
                None => (opt, ""),
            };
            match key {
                "m" => {
                    self.state.mode = mode_from_str(value)?;
                    if self.state.mode == GameMode::Sichuan {
                        self.state.wall_count = INITIAL_WALL_SICHUAN;
                    }
                }
                "w" => self.state.wall_count = value.parse()?,
                "v" => self.state.void_suit = Some(suit_from_str(value)?),
                "l" => self.locale = value.parse()?,
                "ts" => self.flags.self_drawn = true,
                "wt" => self.flags.winning_tile = Some(Tile::from_symbol(value)?),
                "pw" => self.flags.prevalent_wind = Some(wind_from_str(value)?),
                "sw" => self.flags.seat_wind = Some(wind_from_str(value)?),
                "f" => self.flags.flowers = value.parse()?,
                "hd" => self.flags.last_tile_draw = true,
                "hc" => self.flags.last_tile_claim = true,
                "rp" => self.flags.replacement_tile = true,
                "rk" => self.flags.robbing_kong = true,
                "lk" => self.flags.last_of_kind = true,
                "" => {}
                _ => Err(format!("invalid option: {}", opt))?,
            }
        }
        Ok(())
    }

    fn parse_verify(&mut self, input: &str) -> Res {
        let exps: Vec<&str> = input.split(',').collect();
        match exps.as_slice() {
            [s] => self.shanten = s.parse()?,
            [s, f] => {
                self.shanten = s.parse()?;
                self.fan = Some(f.parse()?);
            }
            _ => Err(format!("invalid verify info: {}", input))?,
        }
        self.verify = true;
        Ok(())
    }
}

fn mode_from_str(s: &str) -> Result<GameMode, String> {
    match s {
        "mcr" | "guobiao" => Ok(GameMode::Mcr),
        "sichuan" => Ok(GameMode::Sichuan),
        _ => Err(format!("invalid mode: {}", s)),
    }
}

fn suit_from_str(s: &str) -> Result<Suit, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => tile_type_from_char(ch).ok().and_then(Suit::from_type_index),
        _ => None,
    }
    .ok_or_else(|| format!("invalid void suit: {}", s))
}

fn wind_from_str(s: &str) -> Result<Tnum, String> {
    match s.parse::<Tnum>() {
        Ok(n) if (WE..=WN).contains(&n) => Ok(n),
        _ => Err(format!("invalid wind: {}", s)),
    }
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ mahjong-advisor C EXPRESSION [-m mcr|sichuan] [-d]
    $ mahjong-advisor C -f FILE [-m mcr|sichuan] [-d]
Expression
    HAND,MELD,MELD.../OPTIONS/VERIFY
    ex) m111222333444m55/w=40/-1,137
Options
    -d: print debug info
    -f: read expresisons from file instead of a commandline expression
    -m: rule (default: mcr)
"
    );
}

#[test]
fn test_parse() {
    let mut calc = Calculator::new(GameMode::Mcr, false);
    calc.parse("z66,s222,s444,s666,s888/w=3,l=zh,ts,pw=1,sw=2/-1,88").unwrap();
    assert_eq!(calc.state.hand.len(), 2);
    assert_eq!(calc.state.melds.len(), 4);
    assert_eq!(calc.state.wall_count, 3);
    assert_eq!(calc.locale, Locale::Zh);
    assert!(calc.flags.self_drawn);
    assert_eq!((calc.flags.prevalent_wind, calc.flags.seat_wind), (Some(WE), Some(WS)));
    assert_eq!(calc.flags.winning_tile, None);
    assert_eq!((calc.shanten, calc.fan), (-1, Some(88)));

    let mut calc = Calculator::new(GameMode::Mcr, false);
    calc.parse("m123456789p1122s5/m=sichuan,v=s").unwrap();
    assert_eq!(calc.state.mode, GameMode::Sichuan);
    assert_eq!(calc.state.void_suit, Some(Suit::Sou));
    assert_eq!(calc.state.wall_count, INITIAL_WALL_SICHUAN);
    assert!(!calc.verify);

    let mut calc = Calculator::new(GameMode::Mcr, false);
    calc.parse("m345p678s234z111z22/wt=m5,f=2,hd").unwrap();
    assert_eq!(calc.flags.winning_tile, Some(Tile(TM, 5)));
    assert_eq!(calc.flags.flowers, 2);
    assert!(calc.flags.last_tile_draw);

    let mut calc = Calculator::new(GameMode::Mcr, false);
    assert!(calc.parse("m123/v=z").is_err());
    let mut calc = Calculator::new(GameMode::Mcr, false);
    assert!(calc.parse("m123/x=1").is_err());
    let mut calc = Calculator::new(GameMode::Mcr, false);
    assert!(calc.parse("m11111").is_err());
}

#[test]
fn test_calculator() {
    let file = File::open("tests/win_hands.txt").unwrap();
    let lines = io::BufReader::new(file).lines();
    for exp in lines.map_while(Result::ok) {
        let e = exp.replace(' ', "");
        if e.is_empty() || e.starts_with('#') {
            // 空行とコメント行はスキップ
            println!("> {}", exp);
        } else {
            let mut calculator = Calculator::new(GameMode::Mcr, false);
            calculator.parse(&e).unwrap();
            assert_eq!(Verify::Ok, calculator.run());
        }
    }
}
