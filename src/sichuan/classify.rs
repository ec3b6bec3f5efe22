use serde::Serialize;

use super::{multiplier, SichuanPattern};
use crate::hand::{is_seven_pairs_win, is_winning, parse_into_sets, winning_hand_len, SetPairType};
use crate::model::*;
use crate::text::{fan_detail, root_detail, Locale};

use SichuanPattern::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SichuanScore {
    pub base_fan: usize,
    pub roots: usize,
    pub fan: usize, // base_fan + roots
    pub multiplier: u64,
    pub pattern: SichuanPattern,
    pub details: Vec<String>,
}

// 根: 4枚揃っている牌の種類数 (槓の宣言の有無は問わない)
pub fn calc_roots(all: &TileTable) -> usize {
    all_tiles().filter(|&t| count_tile(all, t) == TILE).count()
}

#[derive(Debug)]
struct Shape {
    flush: bool,
    all_pungs: bool,
    seven_pairs: bool,
    golden_hook: bool, // 碰,槓が4つで単騎
    all_258: bool,
    all_ends: bool,
    no_ends: bool,
    roots: usize,
}

impl Shape {
    fn new(hand: &TileTable, melds: &[Meld]) -> Self {
        let mut all = *hand;
        for t in melds_to_tiles(melds) {
            inc_tile(&mut all, t);
        }
        let tiles = tiles_from_tile_table(&all);

        let suits = [TM, TP, TS].iter().filter(|&&ti| all[ti].iter().any(|&c| c > 0)).count();
        let honors = all[TZ].iter().any(|&c| c > 0);
        let melds_pung = melds.iter().all(|m| m.is_pung());
        let all_pungs = melds_pung
            && parse_into_sets(hand, melds.len())
                .iter()
                .any(|ph| ph.iter().all(|sp| sp.0 != SetPairType::Chow));

        Self {
            flush: suits == 1 && !honors,
            all_pungs,
            seven_pairs: melds.is_empty() && is_seven_pairs_win(hand),
            golden_hook: melds.len() == SET && melds_pung,
            all_258: all_pungs && tiles.iter().all(|t| t.is_suit() && matches!(t.1, 2 | 5 | 8)),
            all_ends: tiles.iter().all(|t| t.is_end()),
            no_ends: tiles.iter().all(|t| t.is_simple()),
            roots: calc_roots(&all),
        }
    }

    // 上位の役が成立する場合は下位の役を見ない
    fn pattern(&self) -> SichuanPattern {
        let seven = if self.roots > 0 { LongQiDui } else { QiDui };
        if self.flush && self.golden_hook {
            QingJinGou
        } else if self.flush && self.seven_pairs {
            if self.roots > 0 {
                QingLongQiDui
            } else {
                QingQiDui
            }
        } else if self.flush && self.all_pungs {
            QingDui
        } else if self.all_258 {
            JiangDui
        } else if self.flush {
            QingYiSe
        } else if self.golden_hook {
            JinGouDiao
        } else if self.seven_pairs {
            seven
        } else if self.all_pungs && self.all_ends {
            QingYaoJiu
        } else if self.no_ends {
            DuanYaoJiu
        } else if self.all_pungs {
            DuiDuiHu
        } else {
            PingHu
        }
    }
}

pub fn classify_sichuan(hand: &[Tile], melds: &[Meld]) -> Option<SichuanScore> {
    classify_sichuan_with(hand, melds, Locale::En)
}

// 和了形の場合のみ役と番数を返却
pub fn classify_sichuan_with(hand: &[Tile], melds: &[Meld], locale: Locale) -> Option<SichuanScore> {
    let tt = tiles_to_tile_table(hand);
    if table_len(&tt) != winning_hand_len(melds.len()) || !is_winning(&tt, melds.len()) {
        return None;
    }

    let shape = Shape::new(&tt, melds);
    let pattern = shape.pattern();
    let base_fan = pattern.base_fan();
    let roots = shape.roots;
    let fan = base_fan + roots;

    let mut details = vec![fan_detail(locale, pattern.name(locale), base_fan, 1)];
    if roots > 0 {
        details.push(root_detail(locale, roots));
    }

    Some(SichuanScore {
        base_fan,
        roots,
        fan,
        multiplier: multiplier(fan),
        pattern,
        details,
    })
}

#[cfg(test)]
fn classify(hand: &str, melds: &[Meld]) -> Option<SichuanScore> {
    classify_sichuan(&crate::util::string::tiles_from_string(hand).unwrap(), melds)
}

#[test]
fn test_classify_root() {
    let melds = vec![Meld::Kong {
        tile: Tile(TM, 1),
        concealed: false,
    }];
    let s = classify("m999p222p333p55", &melds).unwrap();
    assert_eq!(s.pattern, DuiDuiHu);
    assert_eq!((s.base_fan, s.roots, s.fan, s.multiplier), (2, 1, 3, 8));
    assert_eq!(s.details, vec!["All Pungs (2)", "Root x1 (+1)"]);
}

#[test]
fn test_classify_seven_pairs() {
    let s = classify("m11223344556677", &[]).unwrap();
    assert_eq!(s.pattern, QingQiDui);
    assert_eq!((s.fan, s.multiplier), (8, 256));

    let s = classify("m11112233445566", &[]).unwrap();
    assert_eq!(s.pattern, QingLongQiDui);
    assert_eq!((s.roots, s.fan, s.multiplier), (1, 9, 512));

    let s = classify("m1122p3344s556677", &[]).unwrap();
    assert_eq!(s.pattern, QiDui);
    assert_eq!(s.fan, 4);
}

#[test]
fn test_classify_golden_hook() {
    let melds = vec![
        Meld::Pong { tile: Tile(TM, 1) },
        Meld::Pong { tile: Tile(TP, 2) },
        Meld::Pong { tile: Tile(TS, 3) },
        Meld::Kong {
            tile: Tile(TS, 9),
            concealed: false,
        },
    ];
    let s = classify("m55", &melds).unwrap();
    assert_eq!(s.pattern, JinGouDiao);
    assert_eq!((s.base_fan, s.roots, s.fan), (4, 1, 5));

    let melds: Vec<Meld> = [1, 3, 5, 7].iter().map(|&n| Meld::Pong { tile: Tile(TP, n) }).collect();
    let s = classify("p99", &melds).unwrap();
    assert_eq!(s.pattern, QingJinGou);
    assert_eq!(s.fan, 8);
}

#[test]
fn test_classify_basic() {
    assert_eq!(classify("m222555p888s222s55", &[]).unwrap().pattern, JiangDui);
    assert_eq!(classify("m123456p789s123s55", &[]).unwrap().pattern, PingHu);
    assert_eq!(classify("m123456p789s123s55", &[]).unwrap().multiplier, 2);
    assert_eq!(classify("m234456p678s345s55", &[]).unwrap().pattern, DuanYaoJiu);
    assert_eq!(classify("m123456789m111m99", &[]).unwrap().pattern, QingYiSe);
    assert_eq!(classify("m111999p111s999s11", &[]).unwrap().pattern, QingYaoJiu);
    assert_eq!(classify("m111999p111s999s22", &[]).unwrap().pattern, DuiDuiHu);
    assert_eq!(classify("m111999p111s999p22", &[]).unwrap().pattern, DuiDuiHu);
    assert!(classify("m123456p789s123s5", &[]).is_none());
}

#[test]
fn test_classify_locale() {
    let hand = crate::util::string::tiles_from_string("m123456p789s123s55").unwrap();
    let s = classify_sichuan_with(&hand, &[], Locale::Zh).unwrap();
    assert_eq!(s.details, vec!["基本和 (1番)"]);
}
