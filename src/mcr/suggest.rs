// 未完成の手牌から狙える番種と成立確率の見積もり
use std::collections::HashSet;

use super::fan::Fan;
use super::recognize::{RecognizedFan, WinFlags, SUIT_PERMS};
use super::score::{calculate_total_fan, recognize_fans};
use crate::hand::{compute_shanten, winning_hand_len};
use crate::model::*;
use crate::text::{self, fan_detail, Locale};

use Fan::*;

// 表示する不足牌の最大数
pub const MAX_MISSING: usize = 6;

// 同じ牌の組み合わせを別の番種として解釈したもの (番数の高い方のみ残す)
const EXCLUSIVE_GROUPS: [[Fan; 2]; 5] = [
    [QuadrupleChow, PureTripleChow],
    [FourPureShiftedPungs, PureShiftedPungs],
    [PureTripleChow, PureShiftedPungs],
    [QuadrupleChow, FourPureShiftedPungs],
    [MixedTripleChow, MixedShiftedPungs],
];

const SUITS: [Type; 3] = [TM, TP, TS];

struct Suggester<'a> {
    hand: &'a [Tile],
    hand_tt: TileTable,
    all: TileTable,
    melds: &'a [Meld],
    locale: Locale,
    recognized: Vec<RecognizedFan>,
    list: Vec<FanSuggestion>,
}

impl<'a> Suggester<'a> {
    fn new(hand: &'a [Tile], melds: &'a [Meld], locale: Locale) -> Self {
        let hand_tt = tiles_to_tile_table(hand);
        let mut all = hand_tt;
        for t in melds_to_tiles(melds) {
            inc_tile(&mut all, t);
        }
        Self {
            hand,
            hand_tt,
            all,
            melds,
            locale,
            recognized: recognize_fans(hand, melds, &WinFlags::default()),
            list: vec![],
        }
    }

    #[inline]
    fn all_count(&self, ti: Type, ni: Tnum) -> usize {
        self.all[ti][ni]
    }

    #[inline]
    fn all_len(&self) -> usize {
        table_len(&self.all)
    }

    // 順子(ni, ni+1, ni+2)を作るのに足りない牌の種類数 (副露を含めて判定)
    fn seq_cost(&self, ti: Type, ni: Tnum) -> usize {
        (ni..ni + 3).filter(|&n| self.all[ti][n] == 0).count()
    }

    // 順子を作るのに手牌に足りない牌
    fn seq_missing(&self, ti: Type, ni: Tnum) -> Vec<Tile> {
        (ni..ni + 3).filter(|&n| self.hand_tt[ti][n] == 0).map(|n| Tile(ti, n)).collect()
    }

    fn seqs_cost(&self, seqs: &[(Type, Tnum)]) -> usize {
        seqs.iter().map(|&(ti, ni)| self.seq_cost(ti, ni)).sum()
    }

    fn seqs_missing(&self, seqs: &[(Type, Tnum)]) -> Vec<Tile> {
        seqs.iter().flat_map(|&(ti, ni)| self.seq_missing(ti, ni)).take(4).collect()
    }

    // 刻子を作るのにn枚に届かない牌
    fn short_of(&self, tiles: &[Tile], n: usize) -> Vec<Tile> {
        tiles.iter().copied().filter(|&t| count_tile(&self.all, t) < n).collect()
    }

    // 主となる番種と同時に成立している番種 (主番種の系統と不計の番種は除く)
    fn extras(&self, main: Fan, family: &[Fan]) -> (usize, Vec<String>) {
        let mut skip: HashSet<Fan> = family.iter().copied().collect();
        skip.insert(main);
        skip.extend(main.def().excludes.iter().copied());
        for g in &EXCLUSIVE_GROUPS {
            if g.contains(&main) {
                skip.extend(g.iter().copied());
            }
        }

        let rest: Vec<RecognizedFan> = self.recognized.iter().copied().filter(|r| !skip.contains(&r.fan)).collect();
        let total = calculate_total_fan(&rest, self.locale);
        (total.total_fan, total.details)
    }

    // familyがNoneの場合は付随する番種を加算しない
    fn push(&mut self, fan: Fan, prob: i32, missing: Vec<Tile>, notes: Vec<String>, family: Option<&[Fan]>) {
        let base_fan = fan.fan();
        let name = fan.name(self.locale);
        let (extra, extra_details) = match family {
            Some(f) => self.extras(fan, f),
            None => (0, vec![]),
        };

        let mut pattern_details = vec![fan_detail(self.locale, name, base_fan, 1)];
        pattern_details.extend(notes);
        pattern_details.extend(extra_details);

        self.list.push(FanSuggestion {
            name: name.to_string(),
            fan: base_fan + extra,
            base_fan,
            probability: clamp_prob(prob),
            missing_tiles: missing.into_iter().take(MAX_MISSING).collect(),
            pattern_details,
            multiplier: None,
            illegal: false,
        });
    }

    fn achieved(&self) -> Vec<String> {
        vec![self.locale.text().achieved.to_string()]
    }

    // [48番]

    fn quadruple_chow(&mut self) {
        for ti in SUITS {
            for ni in 1..=7 {
                let tiles: Vec<Tile> = (ni..ni + 3).map(|n| Tile(ti, n)).collect();
                let min = tiles.iter().map(|&t| count_tile(&self.all, t)).min().unwrap_or(0);
                let family = [QuadrupleChow, PureTripleChow, PureDoubleChow, TileHog];
                if min >= 4 {
                    self.push(QuadrupleChow, 95, vec![], vec![], Some(&family));
                } else if min >= 3 {
                    let missing = self.short_of(&tiles, 4);
                    self.push(QuadrupleChow, 70, missing, vec![], Some(&family));
                }
            }
        }
    }

    fn four_pure_shifted_pungs(&mut self) {
        for ti in SUITS {
            for ni in 1..=6 {
                let tiles: Vec<Tile> = (ni..ni + 4).map(|n| Tile(ti, n)).collect();
                let min = tiles.iter().map(|&t| count_tile(&self.all, t)).min().unwrap_or(0);
                let family = [FourPureShiftedPungs, PureShiftedPungs, AllPungs];
                if min >= 3 {
                    self.push(FourPureShiftedPungs, 95, vec![], vec![], Some(&family));
                } else if min >= 2 {
                    let missing = self.short_of(&tiles, 3);
                    let prob = 80 - missing.len() as i32 * 10;
                    self.push(FourPureShiftedPungs, prob.max(40), missing, vec![], Some(&family));
                }
            }
        }
    }

    // [24番]

    fn pure_triple_chow(&mut self) {
        for ti in SUITS {
            for ni in 1..=7 {
                let tiles: Vec<Tile> = (ni..ni + 3).map(|n| Tile(ti, n)).collect();
                let min = tiles.iter().map(|&t| count_tile(&self.all, t)).min().unwrap_or(0);
                if min >= 3 {
                    self.push(PureTripleChow, 90, vec![], vec![], Some(&[PureTripleChow]));
                } else if min >= 2 {
                    let missing = self.short_of(&tiles, 3);
                    self.push(PureTripleChow, 70, missing, vec![], Some(&[PureTripleChow]));
                }
            }
        }
    }

    fn pure_shifted_pungs(&mut self) {
        for ti in SUITS {
            for ni in 1..=7 {
                let tiles: Vec<Tile> = (ni..ni + 3).map(|n| Tile(ti, n)).collect();
                let min = tiles.iter().map(|&t| count_tile(&self.all, t)).min().unwrap_or(0);
                if min >= 3 {
                    self.push(PureShiftedPungs, 90, vec![], vec![], Some(&[PureShiftedPungs]));
                } else if min >= 2 {
                    let missing = self.short_of(&tiles, 3);
                    let prob = 80 - missing.len() as i32 * 15;
                    self.push(PureShiftedPungs, prob.max(40), missing, vec![], Some(&[PureShiftedPungs]));
                }
            }
        }
    }

    // [16番]

    fn pure_shifted_chows(&mut self) {
        for ti in SUITS {
            // 1つずつ, 2つずつずれた順子
            let starts = (1..=5).map(|ni| [ni, ni + 1, ni + 2]).chain((1..=3).map(|ni| [ni, ni + 2, ni + 4]));
            for s in starts {
                let seqs: Vec<(Type, Tnum)> = s.iter().map(|&ni| (ti, ni)).collect();
                let cost = self.seqs_cost(&seqs);
                if cost <= 4 {
                    let missing = self.seqs_missing(&seqs);
                    let prob = 80 - cost as i32 * 15;
                    self.push(PureShiftedChows, prob.max(20), missing, vec![], Some(&[PureShiftedChows]));
                }
            }
        }
    }

    fn triple_pung(&mut self) {
        for ni in 1..=9 {
            let tiles: Vec<Tile> = SUITS.iter().map(|&ti| Tile(ti, ni)).collect();
            let min = tiles.iter().map(|&t| count_tile(&self.all, t)).min().unwrap_or(0);
            if min >= 3 {
                self.push(TriplePung, 90, vec![], vec![], Some(&[TriplePung]));
            } else if min >= 2 {
                let missing = self.short_of(&tiles, 3);
                let prob = 75 - missing.len() as i32 * 15;
                self.push(TriplePung, prob.max(30), missing, vec![], Some(&[TriplePung]));
            }
        }
    }

    fn pure_straight(&mut self) {
        for ti in SUITS {
            let seqs = [(ti, 1), (ti, 4), (ti, 7)];
            let cost = self.seqs_cost(&seqs);
            if cost <= 5 {
                let missing = self.seqs_missing(&seqs);
                self.push(PureStraight, 80 - cost as i32 * 10, missing, vec![], None);
            }
        }
    }

    // [8番]

    fn mixed_straight(&mut self) {
        for p in &SUIT_PERMS {
            let seqs = [(p[0], 1), (p[1], 4), (p[2], 7)];
            let cost = self.seqs_cost(&seqs);
            if cost <= 5 {
                let missing = self.seqs_missing(&seqs);
                let prob = 75 - cost as i32 * 12;
                self.push(MixedStraight, prob.max(15), missing, vec![], Some(&[MixedStraight]));
            }
        }
    }

    fn mixed_triple_chow(&mut self) {
        for ni in 1..=7 {
            let seqs: Vec<(Type, Tnum)> = SUITS.iter().map(|&ti| (ti, ni)).collect();
            let cost = self.seqs_cost(&seqs);
            if cost <= 5 {
                let missing = self.seqs_missing(&seqs);
                let prob = 80 - cost as i32 * 15;
                self.push(MixedTripleChow, prob.max(10), missing, vec![], Some(&[MixedTripleChow]));
            }
        }
    }

    fn mixed_shifted_pungs(&mut self) {
        for ni in 1..=7 {
            for p in &SUIT_PERMS {
                let tiles = [Tile(p[0], ni), Tile(p[1], ni + 1), Tile(p[2], ni + 2)];
                let min = tiles.iter().map(|&t| count_tile(&self.all, t)).min().unwrap_or(0);
                if min >= 3 {
                    self.push(MixedShiftedPungs, 90, vec![], vec![], Some(&[MixedShiftedPungs]));
                    break;
                } else if min >= 2 {
                    let missing = self.short_of(&tiles, 3);
                    let prob = 70 - missing.len() as i32 * 15;
                    self.push(MixedShiftedPungs, prob.max(30), missing, vec![], Some(&[MixedShiftedPungs]));
                }
            }
        }
    }

    // [6番]

    fn mixed_shifted_chows(&mut self) {
        for ni in 1..=5 {
            for p in &SUIT_PERMS {
                let seqs = [(p[0], ni), (p[1], ni + 1), (p[2], ni + 2)];
                let cost = self.seqs_cost(&seqs);
                if cost <= 4 {
                    let missing = self.seqs_missing(&seqs);
                    let prob = 75 - cost as i32 * 15;
                    self.push(MixedShiftedChows, prob.max(10), missing, vec![], Some(&[MixedShiftedChows]));
                }
            }
        }
    }

    fn all_types(&mut self) {
        let has_suit = |ti: Type| self.all[ti][1..TNUM].iter().any(|&c| c > 0);
        let gates = [
            (has_suit(TM), Tile(TM, 5)),
            (has_suit(TP), Tile(TP, 5)),
            (has_suit(TS), Tile(TS, 5)),
            ((WE..=WN).any(|n| self.all[TZ][n] > 0), Tile(TZ, WE)),
            ((DW..=DR).any(|n| self.all[TZ][n] > 0), Tile(TZ, DW)),
        ];
        let n_gates = gates.iter().filter(|g| g.0).count();
        let shanten = compute_shanten(self.hand, self.melds).max(0);

        if n_gates == 5 && shanten <= 2 {
            let notes = vec![text::shanten_note(self.locale, shanten)];
            self.push(AllTypes, (70 - shanten * 20).max(20), vec![], notes, Some(&[AllTypes]));
        } else if n_gates == 4 && shanten <= 1 {
            let missing: Vec<Tile> = gates.iter().filter(|g| !g.0).map(|g| g.1).collect();
            let notes = vec![text::missing_types(self.locale, missing.len(), shanten)];
            self.push(AllTypes, (50 - shanten * 15).max(15), missing, notes, Some(&[AllTypes]));
        }
    }

    // 清一色, 混一色
    fn flush(&mut self) {
        let suit_max = SUITS.iter().map(|&ti| self.all[ti].iter().sum::<usize>()).max().unwrap_or(0);
        let honors: usize = self.all[TZ].iter().sum();
        let others = self.all_len() - suit_max - honors;

        if suit_max >= 8 && others + honors <= 4 {
            let need = others + honors;
            if need == 0 {
                self.push(FullFlush, 95, vec![], self.achieved(), None);
            } else {
                let prob = (suit_max as i32 * 7 - need as i32 * 10).clamp(20, 90);
                let notes = vec![text::discard_others(self.locale, need)];
                self.push(FullFlush, prob, vec![], notes, None);
            }
        }

        if suit_max >= 7 && honors >= 1 && others <= 4 {
            if others == 0 {
                self.push(HalfFlush, 90, vec![], self.achieved(), Some(&[HalfFlush]));
            } else {
                let prob = ((suit_max + honors) as i32 * 5).clamp(20, 85);
                let notes = vec![text::discard_others(self.locale, others)];
                self.push(HalfFlush, prob, vec![], notes, Some(&[HalfFlush]));
            }
        }
    }

    // [1, 2番] 付随する番種の確認用
    fn small_patterns(&mut self) {
        let len = self.all_len();

        for ti in SUITS {
            for ni in 1..=7 {
                if (ni..ni + 3).all(|n| self.all_count(ti, n) >= 2) {
                    self.push(PureDoubleChow, 95, vec![], vec![], None);
                }
            }
        }

        for ti in SUITS {
            for ni in 1..=4 {
                if (ni..ni + 6).all(|n| self.all_count(ti, n) > 0) {
                    self.push(ShortStraight, 95, vec![], vec![], None);
                }
            }
        }

        for ti in SUITS {
            if self.seq_cost(ti, 1) == 0 && self.seq_cost(ti, 7) == 0 {
                self.push(TwoTerminalChows, 95, vec![], vec![], None);
            }
        }

        if len >= 10 {
            let ends: usize = all_tiles().filter(|t| t.is_end()).map(|t| count_tile(&self.all, t)).sum();
            if ends == 0 {
                self.push(AllSimples, 90, vec![], self.achieved(), None);
            } else if ends <= 3 {
                let notes = vec![text::discard_terminals(self.locale, ends)];
                self.push(AllSimples, (70 - ends as i32 * 15).max(20), vec![], notes, None);
            }

            if self.all[TZ].iter().all(|&c| c == 0) {
                self.push(NoHonors, 95, vec![], self.achieved(), None);
            }

            let suits = SUITS.iter().filter(|&&ti| self.all[ti].iter().any(|&c| c > 0)).count();
            if suits == 2 {
                self.push(OneVoidedSuit, 95, vec![], self.achieved(), None);
            }
        }
    }

    fn seven_pairs(&mut self) {
        if !self.melds.is_empty() {
            return;
        }

        let pairs = all_tiles().filter(|&t| count_tile(&self.all, t) >= 2).count();
        let singles: Vec<Tile> = all_tiles().filter(|&t| count_tile(&self.all, t) == 1).collect();
        let need = 7_usize.saturating_sub(pairs);
        if pairs < 3 || singles.len() < need {
            return;
        }

        let base = match pairs {
            6.. => 90,
            5 => 75,
            4 => 55,
            _ => 35,
        };
        let missing = singles.into_iter().take(need.min(4)).collect();
        let notes = vec![text::pairs_progress(self.locale, pairs, need)];
        self.push(SevenPairs, (base - need as i32 * 8).max(10), missing, notes, None);
    }

    // 手牌の刻子と暗槓
    fn concealed_pungs(&self) -> usize {
        let in_hand = all_tiles().filter(|&t| count_tile(&self.hand_tt, t) >= 3).count();
        in_hand + self.melds.iter().filter(|m| m.is_concealed()).count()
    }

    fn hand_pairs(&self) -> Vec<Tile> {
        all_tiles().filter(|&t| count_tile(&self.hand_tt, t) == 2).collect()
    }

    fn has_melded_pung(&self) -> bool {
        self.melds.iter().any(|m| m.is_pung() && !m.is_concealed())
    }

    fn four_concealed_pungs(&mut self) {
        if self.has_melded_pung() {
            return;
        }

        let family = [
            FourConcealedPungs,
            AllPungs,
            ConcealedHand,
            FullyConcealedHand,
            ThreeConcealedPungs,
            TwoConcealedPungs,
        ];
        let n = self.concealed_pungs();
        if n >= 4 {
            let notes = vec![text::pungs_progress(self.locale, n, 0)];
            self.push(FourConcealedPungs, 95, vec![], notes, Some(&family));
        } else if n >= 3 {
            if let Some(&t) = self.hand_pairs().first() {
                let notes = vec![text::pungs_progress(self.locale, n, 1)];
                self.push(FourConcealedPungs, 60, vec![t], notes, Some(&family));
            }
        }
    }

    fn all_pungs(&mut self) {
        let in_hand = all_tiles().filter(|&t| count_tile(&self.hand_tt, t) >= 3).count();
        let pungs = in_hand + self.melds.iter().filter(|m| m.is_pung()).count();
        let pairs = self.hand_pairs();

        // 四暗刻が成立する場合は不要
        if self.concealed_pungs() >= 4 && !self.has_melded_pung() {
            return;
        }
        if pungs < 2 && pairs.len() < 4 {
            return;
        }

        let need = SET.saturating_sub(pungs);
        let prob = match pungs {
            3.. => 80,
            2 => 55,
            _ => 35,
        };
        let missing = pairs.into_iter().take(need.min(4)).collect();
        let notes = vec![text::pungs_progress(self.locale, pungs, need)];
        self.push(AllPungs, prob, missing, notes, Some(&[AllPungs]));
    }

    // 牌山が残りわずかの場合の妙手回春, 海底捞月
    fn last_tile(&mut self, wall_count: usize) {
        if !(1..=4).contains(&wall_count) || self.hand.len() + 1 < winning_hand_len(self.melds.len()) {
            return;
        }

        let t = self.locale.text();
        let name = if wall_count == 1 { t.last_tile_both } else { t.last_tile_chance };
        let prob = if wall_count == 1 { 90 } else { (60 - (wall_count as i32 - 1) * 15).max(10) };
        let both = format!("{} / {}", LastTileDraw.name(self.locale), LastTileClaim.name(self.locale));
        self.list.push(FanSuggestion {
            name: name.to_string(),
            fan: LastTileDraw.fan(),
            base_fan: LastTileDraw.fan(),
            probability: clamp_prob(prob),
            missing_tiles: vec![],
            pattern_details: vec![
                fan_detail(self.locale, &both, LastTileDraw.fan(), 1),
                text::tiles_left(self.locale, wall_count),
                t.last_tile_hint.to_string(),
            ],
            multiplier: None,
            illegal: false,
        });
    }

    // 同名は番数, 確率の高いものを残し, 互いに排他な番種は番数の高い方を残す
    fn finish(self) -> Vec<FanSuggestion> {
        let mut uniq: Vec<FanSuggestion> = vec![];
        for s in self.list {
            match uniq.iter_mut().find(|u| u.name == s.name) {
                Some(u) => {
                    if s.fan > u.fan || (s.fan == u.fan && s.probability > u.probability) {
                        *u = s;
                    }
                }
                None => uniq.push(s),
            }
        }

        for g in &EXCLUSIVE_GROUPS {
            let names: Vec<&str> = g.iter().map(|f| f.name(self.locale)).collect();
            let mut best: Option<&FanSuggestion> = None;
            for s in uniq.iter().filter(|s| names.contains(&s.name.as_str())) {
                match best {
                    Some(b) if (b.fan, b.probability) >= (s.fan, s.probability) => {}
                    _ => best = Some(s),
                }
            }
            if let Some(best) = best.map(|s| s.name.clone()) {
                uniq.retain(|s| s.name == best || !names.contains(&s.name.as_str()));
            }
        }

        uniq.sort_by(|a, b| b.fan.cmp(&a.fan).then(b.probability.cmp(&a.probability)));
        uniq
    }
}

#[inline]
fn clamp_prob(p: i32) -> u32 {
    p.clamp(0, 100) as u32
}

// 国標麻雀の番種候補 (番数の高い順, 同番数は確率の高い順)
pub fn suggest_mcr(hand: &[Tile], melds: &[Meld], wall_count: usize, locale: Locale) -> Vec<FanSuggestion> {
    let mut s = Suggester::new(hand, melds, locale);
    s.quadruple_chow();
    s.four_pure_shifted_pungs();
    s.pure_triple_chow();
    s.pure_shifted_pungs();
    s.pure_shifted_chows();
    s.triple_pung();
    s.mixed_straight();
    s.mixed_triple_chow();
    s.mixed_shifted_pungs();
    s.mixed_shifted_chows();
    s.all_types();
    s.pure_straight();
    s.flush();
    s.small_patterns();
    s.seven_pairs();
    s.four_concealed_pungs();
    s.all_pungs();
    s.last_tile(wall_count);
    s.finish()
}

#[cfg(test)]
fn suggest(hand: &str, wall_count: usize) -> Vec<FanSuggestion> {
    let hand = crate::util::string::tiles_from_string(hand).unwrap();
    suggest_mcr(&hand, &[], wall_count, Locale::En)
}

#[cfg(test)]
fn find<'a>(list: &'a [FanSuggestion], name: &str) -> Option<&'a FanSuggestion> {
    list.iter().find(|s| s.name == name)
}

#[test]
fn test_suggest_order() {
    let list = suggest("m111222333444m5", 50);
    assert!(!list.is_empty());
    for w in list.windows(2) {
        assert!((w[0].fan, w[0].probability) >= (w[1].fan, w[1].probability));
    }
    for s in &list {
        assert!(s.probability <= 100);
        assert!(s.missing_tiles.len() <= MAX_MISSING);
        assert!(s.fan >= s.base_fan);
    }

    // 名前の重複なし
    let names: HashSet<&str> = list.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names.len(), list.len());
}

#[test]
fn test_suggest_exclusive() {
    // 同じ牌を四同順と四節高の両方に解釈できるがどちらか一方のみ
    let list = suggest("m111222333444m5", 50);
    let quad = find(&list, "Quadruple Chow").is_some();
    let shifted = find(&list, "Four Pure Shifted Pungs").is_some();
    assert!(quad != shifted);
    assert!(find(&list, "Pure Triple Chow").is_none() || find(&list, "Pure Shifted Pungs").is_none());
}

#[test]
fn test_suggest_flush() {
    let list = suggest("m1234567899p1z12", 50);

    let s = find(&list, "Full Flush").unwrap();
    assert_eq!(s.fan, 24);
    assert_eq!(s.probability, 40);
    assert_eq!(s.pattern_details, vec!["Full Flush (24)", "Discard 3 tile(s) of other suits"]);

    let s = find(&list, "Half Flush").unwrap();
    assert_eq!(s.base_fan, 6);
    assert_eq!(s.probability, 60);

    let s = find(&list, "Pure Straight").unwrap();
    assert_eq!(s.fan, 16);
    assert_eq!(s.probability, 80);
    assert!(s.missing_tiles.is_empty());
}

#[test]
fn test_suggest_seven_pairs() {
    let list = suggest("m1133p2255s779z12", 50);
    let s = find(&list, "Seven Pairs").unwrap();
    assert_eq!(s.fan, 24);
    assert_eq!(s.probability, 75 - 2 * 8);
    assert_eq!(s.missing_tiles, vec![Tile(TS, 9), Tile(TZ, 1)]);
    assert_eq!(s.pattern_details[1], "5 pairs, 2 more needed");
}

#[test]
fn test_suggest_last_tile() {
    let list = suggest("m123456789p1z123", 1);
    let s = find(&list, "Last Tile Draw/Claim").unwrap();
    assert_eq!((s.fan, s.probability), (8, 90));

    let list = suggest("m123456789p1z123", 3);
    assert!(find(&list, "Last Tile Draw/Claim").is_none());
    assert_eq!(find(&list, "Last Tile Chance").unwrap().probability, 30);

    let list = suggest("m123456789p1z123", 5);
    assert!(find(&list, "Last Tile Chance").is_none());
}

#[test]
fn test_suggest_locale() {
    let hand = crate::util::string::tiles_from_string("m1234567899p1z12").unwrap();
    let list = suggest_mcr(&hand, &[], 50, Locale::Zh);
    let s = list.iter().find(|s| s.name == "清一色").unwrap();
    assert_eq!(s.pattern_details[0], "清一色 (24番)");
    assert_eq!(s.probability, 40);
}
