// 1手ごとの解析 (向聴数, 待ち, 打牌, 役の候補, 警告)
use log::{debug, warn};

use crate::hand::{calc_discard_candidates, calc_shanten, calc_winning_tiles, winning_hand_len, DiscardCandidate};
use crate::mcr::{score_completed_hand_with, suggest_mcr, WinFlags, MIN_FAN_TO_WIN};
use crate::model::*;
use crate::sichuan::{classify_sichuan_with, display_name, suggest_sichuan};
use crate::text::{self, Locale};
use crate::util::misc::percent_string;

// 牌山の残りがこの枚数以下なら警告
pub const WALL_LOW: usize = 10;
// 国標麻雀で海底の案内を出す牌山の残り枚数
pub const WALL_LAST_TILE: usize = 4;

pub fn analyze(state: &GameState, locale: Locale) -> AnalysisResult {
    let hand = state.hand_table();
    let meld_count = state.melds.len();
    let len = table_len(&hand);
    let full_len = winning_hand_len(meld_count);
    if len > HAND_MAX {
        warn!("too many tiles in hand: {}", len);
    }

    let shanten = calc_shanten(&hand, meld_count);
    let status = HandStatus::from_shanten(shanten);
    debug!("mode: {:?}, hand: {} tiles, melds: {}, shanten: {}", state.mode, len, meld_count, shanten);

    let visible = state.visible_table();
    let waiting_tiles = if status == HandStatus::Ready && len + 1 == full_len {
        calc_waits(&hand, meld_count, &visible, state.wall_count)
    } else {
        vec![]
    };

    let mut warnings = vec![];
    let void_in_hand = has_void_tile_in_hand(state);
    let best_discard = if len == full_len && (status != HandStatus::Won || void_in_hand) {
        select_discard(state, &hand, &visible, locale)
    } else {
        None
    };
    if let Some(d) = &best_discard {
        debug!("best discard: {} (shanten: {}, ukeire: {})", d.tile, d.shanten, d.ukeire);
    }

    let suggestions = if status == HandStatus::Won && !has_void_tile(state) {
        won_suggestion(state, locale, &mut warnings)
    } else {
        match state.mode {
            GameMode::Mcr => suggest_mcr(&state.hand, &state.melds, state.wall_count, locale),
            GameMode::Sichuan => suggest_sichuan(&state.hand, &state.melds, state.void_suit, locale),
        }
    };
    debug!("suggestions: {}", suggestions.len());

    warnings.extend(wall_warnings(state, locale));
    let score_estimate = suggestions.first().map_or(0, |s| s.fan);

    AnalysisResult {
        status,
        is_ready: shanten <= 0,
        shanten,
        waiting_tiles,
        best_discard,
        suggestions,
        score_estimate,
        warnings,
    }
}

// 和了牌と残り枚数, 牌山から引ける確率
fn calc_waits(hand: &TileTable, meld_count: usize, visible: &TileTable, wall_count: usize) -> Vec<WaitingTile> {
    calc_winning_tiles(hand, meld_count)
        .into_iter()
        .map(|tile| {
            let remaining = TILE.saturating_sub(count_tile(visible, tile));
            WaitingTile {
                tile,
                remaining,
                probability: percent_string(remaining, wall_count),
            }
        })
        .collect()
}

// 副露を含めて欠けている色の牌があるか
fn has_void_tile(state: &GameState) -> bool {
    match (state.mode, state.void_suit) {
        (GameMode::Sichuan, Some(vs)) => {
            state.hand.iter().chain(melds_to_tiles(&state.melds).iter()).any(|&t| vs.contains(t))
        }
        _ => false,
    }
}

// 手牌に欠けている色の牌があるか (打牌候補は手牌のみ)
fn has_void_tile_in_hand(state: &GameState) -> bool {
    match (state.mode, state.void_suit) {
        (GameMode::Sichuan, Some(vs)) => state.hand.iter().any(|&t| vs.contains(t)),
        _ => false,
    }
}

// 四川麻雀で欠けている色の牌がある場合は有効牌によらずその牌を打つ
fn select_discard(state: &GameState, hand: &TileTable, visible: &TileTable, locale: Locale) -> Option<DiscardAdvice> {
    let t = locale.text();
    let cands = calc_discard_candidates(hand, state.melds.len(), visible);
    if has_void_tile_in_hand(state) {
        let vs = state.void_suit?;
        let c = cands.into_iter().find(|c| vs.contains(c.tile))?;
        return Some(to_advice(c, t.hua_zhu));
    }
    cands.into_iter().next().map(|c| to_advice(c, t.discard_hint))
}

fn to_advice(c: DiscardCandidate, reason: &str) -> DiscardAdvice {
    DiscardAdvice {
        tile: c.tile,
        reason: reason.to_string(),
        shanten: c.shanten,
        ukeire: c.ukeire,
        ukeire_tiles: c.ukeire_tiles,
        waiting_tiles: c.waiting_tiles,
    }
}

// 和了形の場合は候補ではなく実際の点数を返す
fn won_suggestion(state: &GameState, locale: Locale, warnings: &mut Vec<String>) -> Vec<FanSuggestion> {
    match state.mode {
        GameMode::Mcr => {
            let score = score_completed_hand_with(&state.hand, &state.melds, &WinFlags::default(), locale);
            if !score.meets_minimum {
                warnings.push(text::below_minimum(locale, score.total_fan, MIN_FAN_TO_WIN));
            }
            let (name, base_fan) = match score.patterns.first() {
                Some(r) => (r.fan.name(locale).to_string(), r.fan.fan()),
                None => (String::new(), 0),
            };
            vec![FanSuggestion {
                name,
                fan: score.total_fan,
                base_fan,
                probability: 100,
                missing_tiles: vec![],
                pattern_details: score.details,
                multiplier: None,
                illegal: false,
            }]
        }
        GameMode::Sichuan => match classify_sichuan_with(&state.hand, &state.melds, locale) {
            Some(score) => vec![FanSuggestion {
                name: display_name(score.pattern, score.roots, locale),
                fan: score.fan,
                base_fan: score.base_fan,
                probability: 100,
                missing_tiles: vec![],
                pattern_details: score.details,
                multiplier: Some(score.multiplier),
                illegal: false,
            }],
            None => suggest_sichuan(&state.hand, &state.melds, state.void_suit, locale),
        },
    }
}

fn wall_warnings(state: &GameState, locale: Locale) -> Vec<String> {
    let n = state.wall_count;
    let mut res = vec![];
    if n == 0 {
        res.push(locale.text().wall_empty.to_string());
    } else if n <= WALL_LOW {
        res.push(text::wall_low(locale, n));
        if state.mode == GameMode::Mcr && n <= WALL_LAST_TILE {
            res.push(locale.text().last_tile_hint.to_string());
        }
    }
    res
}

#[cfg(test)]
fn state(mode: GameMode, hand: &str, wall_count: usize) -> GameState {
    let hand = crate::util::string::tiles_from_string(hand).unwrap();
    GameState {
        wall_count,
        ..GameState::new(mode, hand, vec![])
    }
}

#[test]
fn test_analyze_won() {
    let st = state(GameMode::Mcr, "m111222333444m55", 50);
    let res = analyze(&st, Locale::En);
    assert_eq!(res.status, HandStatus::Won);
    assert_eq!(res.shanten, -1);
    assert!(res.is_ready);
    assert!(res.best_discard.is_none());
    assert!(res.waiting_tiles.is_empty());
    assert_eq!(res.suggestions.len(), 1);
    assert_eq!(res.suggestions[0].fan, 137);
    assert_eq!(res.suggestions[0].name, "Four Concealed Pungs");
    assert_eq!(res.score_estimate, 137);
    assert!(res.warnings.is_empty());

    // 8番に満たない (门前清 + 平和 + 连六)
    let st = state(GameMode::Mcr, "m123456p234s678s55", 50);
    let res = analyze(&st, Locale::En);
    assert_eq!(res.status, HandStatus::Won);
    assert_eq!(res.score_estimate, 5);
    assert_eq!(res.warnings.len(), 1);
    assert!(res.warnings[0].contains("below the 8 fan minimum"));
}

#[test]
fn test_analyze_ready() {
    let st = state(GameMode::Mcr, "m1112345678999", 50);
    let res = analyze(&st, Locale::En);
    assert_eq!(res.status, HandStatus::Ready);
    assert_eq!(res.waiting_tiles.len(), 9);
    assert!(res.best_discard.is_none());

    let w1 = &res.waiting_tiles[0];
    assert_eq!((w1.tile, w1.remaining), (Tile(TM, 1), 1));
    assert_eq!(w1.probability, "2.0%");
    let w5 = res.waiting_tiles.iter().find(|w| w.tile == Tile(TM, 5)).unwrap();
    assert_eq!((w5.remaining, w5.probability.as_str()), (3, "6.0%"));

    // 牌山が空
    let st = state(GameMode::Mcr, "m1112345678999", 0);
    let res = analyze(&st, Locale::En);
    assert!(res.waiting_tiles.iter().all(|w| w.probability == "0%"));
    assert_eq!(res.warnings, vec!["Wall is empty"]);
}

#[test]
fn test_analyze_discard() {
    let st = state(GameMode::Mcr, "m123456789p111s5z1", 50);
    let res = analyze(&st, Locale::En);
    assert_eq!(res.status, HandStatus::Ready);
    assert!(res.waiting_tiles.is_empty());
    let d = res.best_discard.unwrap();
    assert!(d.tile == Tile(TS, 5) || d.tile == Tile(TZ, 1));
    assert_eq!(d.shanten, 0);
    assert_eq!(d.reason, "Discard this to improve efficiency");
    assert_eq!(res.score_estimate, res.suggestions[0].fan);
}

#[test]
fn test_analyze_void() {
    let mut st = state(GameMode::Sichuan, "m123456789p1122s5", 30);
    st.void_suit = Some(Suit::Sou);
    let res = analyze(&st, Locale::En);
    let d = res.best_discard.unwrap();
    assert_eq!(d.tile, Tile(TS, 5));
    assert_eq!(d.reason, "Flower Pig");
    assert_eq!(res.suggestions.len(), 1);
    assert!(res.suggestions[0].illegal);
    assert_eq!(res.score_estimate, 0);
    assert_eq!(res.warnings, Vec::<String>::new());

    let res = analyze(&st, Locale::Zh);
    assert_eq!(res.best_discard.unwrap().reason, "花猪");
}

#[test]
fn test_analyze_void_in_meld() {
    // 欠けている色の牌が副露のみにある和了形
    let mut st = state(GameMode::Sichuan, "m123456p789p11", 30);
    st.melds = vec![Meld::Pong { tile: Tile(TS, 5) }];
    st.void_suit = Some(Suit::Sou);
    let res = analyze(&st, Locale::En);
    assert_eq!(res.status, HandStatus::Won);
    assert!(res.best_discard.is_none());
    assert_eq!(res.suggestions.len(), 1);
    assert!(res.suggestions[0].illegal);
    assert_eq!(res.suggestions[0].fan, 0);
    assert_eq!(res.score_estimate, 0);

    // 副露が欠けている色でなければ通常の点数
    st.void_suit = Some(Suit::Man);
    let res = analyze(&st, Locale::En);
    assert!(res.suggestions[0].illegal);
    st.melds = vec![Meld::Pong { tile: Tile(TP, 5) }];
    st.hand = crate::util::string::tiles_from_string("m123456p789p11").unwrap();
    st.void_suit = Some(Suit::Sou);
    let res = analyze(&st, Locale::En);
    assert!(!res.suggestions[0].illegal);
    assert_eq!(res.suggestions[0].name, "Basic Win");
}

#[test]
fn test_analyze_sichuan_won() {
    let st = state(GameMode::Sichuan, "m11223344556677", 30);
    let res = analyze(&st, Locale::En);
    assert_eq!(res.status, HandStatus::Won);
    assert_eq!(res.suggestions[0].fan, 8);
    assert_eq!(res.suggestions[0].multiplier, Some(256));
    assert_eq!(res.score_estimate, 8);
}

#[test]
fn test_wall_warnings() {
    let st = state(GameMode::Mcr, "m1112345678999", 3);
    let res = analyze(&st, Locale::En);
    assert_eq!(res.warnings[0], "Wall is running low: 3 tiles left");
    assert_eq!(res.warnings[1], Locale::En.text().last_tile_hint);

    let st = state(GameMode::Sichuan, "m1112345678999", 3);
    let res = analyze(&st, Locale::En);
    assert_eq!(res.warnings.len(), 1);

    let st = state(GameMode::Mcr, "m1112345678999", 11);
    assert!(analyze(&st, Locale::En).warnings.is_empty());
}
