use std::fs;
use std::io::{self, Read};

use log::{error, info};

use crate::analysis::analyze;
use crate::error::MahjongResult;
use crate::model::*;
use crate::text::Locale;
use crate::util::misc::*;

// JSONで渡された局面を解析して結果をJSONで出力
#[derive(Debug)]
pub struct AnalyzerApp {
    args: Vec<String>,
    locale: Locale,
    pretty: bool,
}

impl AnalyzerApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            locale: Locale::En,
            pretty: false,
        }
    }

    pub fn run(&mut self) {
        let mut file_path = "".to_string();
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-l" => self.locale = next_value(&mut it, s),
                "-p" => self.pretty = true,
                "-" => file_path = s.clone(),
                _ => {
                    if s.starts_with('-') {
                        error!("unknown option: {}", s);
                        return;
                    }
                    file_path = s.clone();
                }
            }
        }

        if file_path.is_empty() {
            print_usage();
            return;
        }

        if let Err(e) = self.run_from_path(&file_path) {
            error!("{}", e);
        }
    }

    fn run_from_path(&self, file_path: &str) -> Res {
        let input = if file_path == "-" {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(file_path)?
        };

        let states = parse_states(&input)?;
        info!("{} state(s) loaded from {}", states.len(), file_path);
        for state in &states {
            println!("{}", self.process_state(state)?);
        }
        Ok(())
    }

    fn process_state(&self, state: &GameState) -> MahjongResult<String> {
        state.validate()?;
        let res = analyze(state, self.locale);
        let json = if self.pretty {
            serde_json::to_string_pretty(&res)?
        } else {
            serde_json::to_string(&res)?
        };
        Ok(json)
    }
}

// 単一の局面またはその配列
fn parse_states(input: &str) -> MahjongResult<Vec<GameState>> {
    if input.trim_start().starts_with('[') {
        Ok(serde_json::from_str(input)?)
    } else {
        Ok(vec![serde_json::from_str(input)?])
    }
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ mahjong-advisor A FILE [-l en|zh] [-p]
    $ mahjong-advisor A - [-l en|zh] [-p]
Options
    -: read a game state from stdin
    -l: language of names and messages (default: en)
    -p: pretty-print the result
"
    );
}

#[test]
fn test_parse_states() {
    let json = r#"{"mode":"mcr","wallCount":40,"hand":["m1","m1","m1"]}"#;
    let states = parse_states(json).unwrap();
    assert_eq!(states.len(), 1);
    assert_eq!(states[0].hand, vec![Tile(TM, 1); 3]);

    let json = r#"[{"mode":"mcr","wallCount":40}, {"mode":"sichuan","wallCount":20,"voidSuit":"p"}]"#;
    let states = parse_states(json).unwrap();
    assert_eq!(states.len(), 2);
    assert_eq!(states[1].void_suit, Some(Suit::Pin));

    assert!(parse_states(r#"{"mode":"riichi"}"#).is_err());
}

#[test]
fn test_process_state() {
    let app = AnalyzerApp::new(vec![]);
    let json = r#"{"mode":"mcr","wallCount":50,"hand":["m1","m1","m1","m2","m3","m4","m5","m6","m7","m8","m9","m9","m9"]}"#;
    let state: GameState = serde_json::from_str(json).unwrap();
    let out = app.process_state(&state).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["status"], "ready");
    assert_eq!(v["shanten"], 0);
    assert_eq!(v["waitingTiles"].as_array().unwrap().len(), 9);
    assert_eq!(v["waitingTiles"][0]["tile"], "m1");

    let mut state = state;
    state.discards = vec![Tile(TM, 1), Tile(TM, 1)];
    assert!(app.process_state(&state).is_err());
}
