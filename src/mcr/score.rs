use std::collections::HashSet;

use serde::Serialize;

use super::recognize::{build_contexts, RecognizedFan, WinFlags};
use crate::model::*;
use crate::text::{fan_detail, Locale};

// 和了に必要な最低番数
pub const MIN_FAN_TO_WIN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanTotal {
    pub total_fan: usize,
    pub patterns: Vec<RecognizedFan>, // 不計を適用した後の番種
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct McrScore {
    pub total_fan: usize,
    pub details: Vec<String>,
    pub meets_minimum: bool,
    pub patterns: Vec<RecognizedFan>,
    pub recognized: Vec<RecognizedFan>, // 不計を適用する前の番種
}

// 番数を合計
// 1. 番数の高い順に並べる
// 2. すべての番種の不計を集めて除外
// 3. 残った番種の"另計"に含まれるものは除外されていても戻す
pub fn calculate_total_fan(recognized: &[RecognizedFan], locale: Locale) -> FanTotal {
    let mut sorted = recognized.to_vec();
    sorted.sort_by(|a, b| b.fan.fan().cmp(&a.fan.fan())); // stable

    let mut excluded = HashSet::new();
    for r in &sorted {
        excluded.extend(r.fan.def().excludes.iter().copied());
    }

    let mut patterns: Vec<RecognizedFan> = sorted.iter().copied().filter(|r| !excluded.contains(&r.fan)).collect();

    let mut included = HashSet::new();
    for r in &patterns {
        included.extend(r.fan.def().includes.iter().copied());
    }
    for r in &sorted {
        if excluded.contains(&r.fan) && included.contains(&r.fan) {
            patterns.push(*r);
        }
    }

    let mut total_fan = 0;
    let mut details = vec![];
    for r in &patterns {
        total_fan += r.fan.fan() * r.count;
        details.push(fan_detail(locale, r.fan.name(locale), r.fan.fan(), r.count));
    }

    FanTotal {
        total_fan,
        patterns,
        details,
    }
}

// 面子分解ごとに番種を判定し,合計番数が最大のものを返却 (同点は先に見つかったもの)
fn best_recognition(hand: &[Tile], melds: &[Meld], flags: &WinFlags) -> Vec<RecognizedFan> {
    let mut best: Option<(usize, Vec<RecognizedFan>)> = None;
    for ctx in build_contexts(hand, melds, flags) {
        let rec = ctx.recognize();
        let total = calculate_total_fan(&rec, Locale::En).total_fan;
        match &best {
            Some((t, _)) if *t >= total => {}
            _ => best = Some((total, rec)),
        }
    }
    best.map(|(_, rec)| rec).unwrap_or_default()
}

// 手牌(未完成でもよい)と副露から成立している番種
pub fn recognize_fans(hand: &[Tile], melds: &[Meld], flags: &WinFlags) -> Vec<RecognizedFan> {
    best_recognition(hand, melds, flags)
}

pub fn score_completed_hand(hand: &[Tile], melds: &[Meld]) -> McrScore {
    score_completed_hand_with(hand, melds, &WinFlags::default(), Locale::En)
}

pub fn score_completed_hand_with(hand: &[Tile], melds: &[Meld], flags: &WinFlags, locale: Locale) -> McrScore {
    let recognized = best_recognition(hand, melds, flags);
    let FanTotal {
        total_fan,
        patterns,
        details,
    } = calculate_total_fan(&recognized, locale);

    McrScore {
        total_fan,
        details,
        meets_minimum: total_fan >= MIN_FAN_TO_WIN,
        patterns,
        recognized,
    }
}

#[cfg(test)]
use super::fan::Fan;

#[cfg(test)]
fn rf(fan: Fan, count: usize) -> RecognizedFan {
    RecognizedFan { fan, count }
}

#[cfg(test)]
fn hand(s: &str) -> Vec<Tile> {
    crate::util::string::tiles_from_string(s).unwrap()
}

#[test]
fn test_total_fan_exclude() {
    // 大四喜は碰碰和と幺九刻を不計, 字一色は另計
    let rec = vec![
        rf(Fan::AllPungs, 1),
        rf(Fan::PungOfTerminalsOrHonors, 4),
        rf(Fan::BigFourWinds, 1),
        rf(Fan::AllHonors, 1),
    ];
    let t = calculate_total_fan(&rec, Locale::En);
    assert_eq!(t.total_fan, 88 + 64);
    assert_eq!(t.patterns[0].fan, Fan::BigFourWinds);

    // 字一色も碰碰和を不計にするため戻らない
    assert!(!t.patterns.iter().any(|r| r.fan == Fan::AllPungs));
}

#[test]
fn test_total_fan_include() {
    // 互いに除外しない番種はそのまま加算
    let rec = vec![
        rf(Fan::BigFourWinds, 1),
        rf(Fan::AllTerminalsAndHonors, 1),
        rf(Fan::HalfFlush, 1),
    ];
    let t = calculate_total_fan(&rec, Locale::En);
    assert_eq!(t.total_fan, 88 + 32 + 6);

    // 除外された番種が另計で戻る場合は後ろに並ぶ
    let rec = vec![rf(Fan::FullFlush, 1), rf(Fan::AllGreen, 1)];
    let t = calculate_total_fan(&rec, Locale::En);
    assert_eq!(t.total_fan, 88 + 24);
    assert_eq!(t.patterns[0].fan, Fan::AllGreen);
    assert_eq!(t.patterns[1].fan, Fan::FullFlush);
}

#[test]
fn test_total_fan_details() {
    let rec = vec![rf(Fan::DragonPung, 2), rf(Fan::AllPungs, 1)];
    let t = calculate_total_fan(&rec, Locale::En);
    assert_eq!(t.total_fan, 10);
    assert_eq!(t.details, vec!["All Pungs (6)", "Dragon Pung x2 (4)"]);

    let t = calculate_total_fan(&rec, Locale::Zh);
    assert_eq!(t.details, vec!["碰碰和 (6番)", "箭刻 x2 (4番)"]);
    assert!(calculate_total_fan(&[], Locale::En).details.is_empty());
}

#[test]
fn test_score_four_shifted_pungs() {
    // 1111,2222,3333,4444萬 + 55萬
    let s = score_completed_hand(&hand("m111222333444m55"), &[]);
    let fans: Vec<Fan> = s.patterns.iter().map(|r| r.fan).collect();
    assert_eq!(
        fans,
        vec![
            Fan::FourConcealedPungs,
            Fan::FourPureShiftedPungs,
            Fan::FullFlush,
            Fan::PungOfTerminalsOrHonors
        ]
    );
    assert_eq!(s.total_fan, 64 + 48 + 24 + 1);
    assert!(s.meets_minimum);
    assert!(s.recognized.iter().any(|r| r.fan == Fan::AllPungs));
    assert!(!s.recognized.iter().any(|r| r.fan == Fan::AllSimples));
}

#[test]
fn test_score_all_green() {
    let melds: Vec<Meld> = [2, 4, 6, 8].iter().map(|&n| Meld::Pong { tile: Tile(TS, n) }).collect();
    let s = score_completed_hand(&hand("z66"), &melds);
    assert_eq!(s.total_fan, 88);
    assert_eq!(s.details, vec!["All Green (88)"]);
    assert!(s.recognized.iter().any(|r| r.fan == Fan::AllPungs));

    // 發の刻子は箭刻を加算しない
    let melds: Vec<Meld> = [Tile(TS, 2), Tile(TS, 4), Tile(TS, 6), Tile(TZ, DG)]
        .iter()
        .map(|&tile| Meld::Pong { tile })
        .collect();
    let s = score_completed_hand(&hand("s88"), &melds);
    assert_eq!(s.total_fan, 88);
    assert_eq!(s.details, vec!["All Green (88)"]);
    assert!(s.recognized.iter().any(|r| r.fan == Fan::DragonPung));
}

#[test]
fn test_score_minimum() {
    // 门前清 + 平和 + 连六
    let s = score_completed_hand(&hand("m123456p234s678s55"), &[]);
    assert_eq!(s.total_fan, 5);
    assert_eq!(s.details, vec!["Concealed Hand (2)", "All Chows (2)", "Short Straight (1)"]);
    assert!(!s.meets_minimum);

    // 花龙は8番
    let s = score_completed_hand(&hand("m123m123p456s789s55"), &[]);
    assert!(s.patterns.iter().any(|r| r.fan == Fan::MixedStraight));
    assert!(s.meets_minimum);

    let s = score_completed_hand(&hand("m123456789p123z11"), &[]);
    assert!(s.patterns.iter().any(|r| r.fan == Fan::PureStraight));
    assert!(s.meets_minimum);
}

#[test]
fn test_score_seven_pairs() {
    // 面子分解(一般高x2)より七対の方が高い
    let s = score_completed_hand(&hand("m112233p112233z11"), &[]);
    assert!(s.patterns.iter().any(|r| r.fan == Fan::SevenPairs));
    assert!(!s.patterns.iter().any(|r| r.fan == Fan::ConcealedHand));
}

#[test]
fn test_score_with_flags() {
    let flags = WinFlags {
        self_drawn: true,
        prevalent_wind: Some(WE),
        seat_wind: Some(WS),
        winning_tile: Some(Tile(TM, 5)),
        flowers: 1,
        ..Default::default()
    };
    let s = score_completed_hand_with(&hand("m345p678s234z111z22"), &[], &flags, Locale::En);
    let fans: Vec<Fan> = s.patterns.iter().map(|r| r.fan).collect();
    assert!(fans.contains(&Fan::PrevalentWind));
    assert!(!fans.contains(&Fan::SingleWait)); // 両面待ち
    assert!(fans.contains(&Fan::FullyConcealedHand));
    assert!(!fans.contains(&Fan::SelfDrawn));
    assert!(!fans.contains(&Fan::PungOfTerminalsOrHonors));
    assert!(fans.contains(&Fan::FlowerTiles));
}
