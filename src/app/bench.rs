use std::sync::atomic::{AtomicUsize, Ordering};

use log::{error, info, warn};
use rand::prelude::*;
use rayon::prelude::*;

use crate::analysis::analyze;
use crate::hand::is_winning;
use crate::model::*;
use crate::text::Locale;
use crate::util::misc::*;
use crate::util::string::tiles_to_string;

// 無作為な配牌を大量に解析して処理時間と結果の整合性を確認
#[derive(Debug)]
pub struct BenchApp {
    seed: u64,
    mode: GameMode,
    n_hand: usize,
    hand_len: usize,
}

#[derive(Debug, Default)]
struct BenchStat {
    won: AtomicUsize,
    ready: AtomicUsize,
    not_ready: AtomicUsize,
    error: AtomicUsize,
}

impl BenchApp {
    pub fn new(args: Vec<String>) -> Self {
        let mut app = Self {
            seed: 0,
            mode: GameMode::Mcr,
            n_hand: 1000,
            hand_len: HAND_MAX,
        };

        let mut it = args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-s" => app.seed = next_value(&mut it, s),
                "-n" => app.n_hand = next_value(&mut it, s),
                "-l" => app.hand_len = next_value(&mut it, s),
                "-m" => {
                    let m: String = next_value(&mut it, s);
                    app.mode = match m.as_str() {
                        "mcr" => GameMode::Mcr,
                        "sichuan" => GameMode::Sichuan,
                        _ => error_exit(format!("invalid mode: {}", m)),
                    };
                }
                opt => {
                    error!("unknown option: {}", opt);
                    std::process::exit(0);
                }
            }
        }

        if app.seed == 0 {
            app.seed = unixtime_now();
            info!(
                "Random seed is not specified. Unix timestamp '{}' is used as seed.",
                app.seed
            );
        }

        if app.hand_len == 0 || app.hand_len > HAND_MAX {
            error_exit::<_, ()>(format!("hand length must be 1..={}", HAND_MAX));
        }

        app
    }

    pub fn run(self) {
        println!("seed: {}, mode: {:?}, hands: {}", self.seed, self.mode, self.n_hand);

        let mut rng = StdRng::seed_from_u64(self.seed);
        let states: Vec<GameState> = (0..self.n_hand).map(|_| self.deal(&mut rng)).collect();

        let stat = BenchStat::default();
        let start = std::time::Instant::now();
        states.par_iter().for_each(|state| {
            let res = analyze(state, Locale::En);
            if let Err(e) = check_result(state, &res) {
                warn!("{}: {}", tiles_to_string(&state.hand), e);
                stat.error.fetch_add(1, Ordering::Relaxed);
            }
            let counter = match res.status {
                HandStatus::Won => &stat.won,
                HandStatus::Ready => &stat.ready,
                HandStatus::NotReady => &stat.not_ready,
            };
            counter.fetch_add(1, Ordering::Relaxed);
        });
        let elapsed = start.elapsed().as_nanos() as f32 / 1000000000.0;

        println!(
            "won: {}, ready: {}, not ready: {}, error: {}",
            stat.won.load(Ordering::Relaxed),
            stat.ready.load(Ordering::Relaxed),
            stat.not_ready.load(Ordering::Relaxed),
            stat.error.load(Ordering::Relaxed),
        );
        println!("total elapsed time: {:8.3}sec", elapsed);
        if self.n_hand > 0 {
            println!("average: {:8.3}ms/hand", elapsed * 1000.0 / self.n_hand as f32);
        }
    }

    // 136枚の牌山から先頭の牌を配る (四川麻雀は字牌を除く108枚)
    fn deal(&self, rng: &mut StdRng) -> GameState {
        let mut wall: Vec<Tile> = all_tiles()
            .filter(|t| self.mode == GameMode::Mcr || t.is_suit())
            .flat_map(|t| std::iter::repeat(t).take(TILE))
            .collect();
        wall.shuffle(rng);

        let mut hand: Vec<Tile> = wall.drain(..self.hand_len).collect();
        hand.sort();
        let mut state = GameState::new(self.mode, hand, vec![]);
        state.wall_count = rng.gen_range(0..=state.wall_count);
        state
    }
}

// 解析結果と和了判定の整合性
fn check_result(state: &GameState, res: &AnalysisResult) -> Res {
    let hand = state.hand_table();
    let won = is_winning(&hand, state.melds.len());
    if won != (res.shanten == -1) {
        Err(format!("shanten {} but is_winning {}", res.shanten, won))?;
    }
    if let Some(d) = &res.best_discard {
        if d.shanten > res.shanten {
            Err(format!("discard {} leads to shanten {} (hand: {})", d.tile, d.shanten, res.shanten))?;
        }
        if count_tile(&hand, d.tile) == 0 {
            Err(format!("discard {} is not in hand", d.tile))?;
        }
    }
    if res.is_ready != (res.shanten <= 0) {
        Err(format!("is_ready {} with shanten {}", res.is_ready, res.shanten))?;
    }
    Ok(())
}

#[test]
fn test_deal() {
    let app = BenchApp::new(vec!["-s".into(), "7".into(), "-m".into(), "sichuan".into()]);
    let mut rng = StdRng::seed_from_u64(app.seed);
    for _ in 0..20 {
        let state = app.deal(&mut rng);
        assert_eq!(state.hand.len(), HAND_MAX);
        assert!(state.hand.iter().all(|t| t.is_suit()));
        assert!(state.wall_count <= INITIAL_WALL_SICHUAN);
        assert!(state.validate().is_ok());
    }
}

#[test]
fn test_check_result() {
    let app = BenchApp::new(vec!["-s".into(), "42".into(), "-l".into(), "13".into()]);
    let mut rng = StdRng::seed_from_u64(app.seed);
    for _ in 0..30 {
        let state = app.deal(&mut rng);
        assert_eq!(state.hand.len(), 13);
        check_result(&state, &analyze(&state, Locale::En)).unwrap();
    }

    let app = BenchApp::new(vec!["-s".into(), "42".into()]);
    let mut rng = StdRng::seed_from_u64(app.seed);
    for _ in 0..30 {
        let state = app.deal(&mut rng);
        check_result(&state, &analyze(&state, Locale::En)).unwrap();
    }
}
