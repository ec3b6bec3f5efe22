// 四川麻雀の役候補
use super::classify::calc_roots;
use super::{display_name, multiplier, SichuanPattern};
use crate::model::*;
use crate::text::{fan_detail, root_detail, Locale};

use SichuanPattern::*;

struct Suggester<'a> {
    hand: TileTable,
    all: TileTable,
    melds: &'a [Meld],
    locale: Locale,
    roots: usize,
    list: Vec<FanSuggestion>,
}

impl<'a> Suggester<'a> {
    fn new(hand: &[Tile], melds: &'a [Meld], locale: Locale) -> Self {
        let hand = tiles_to_tile_table(hand);
        let mut all = hand;
        for t in melds_to_tiles(melds) {
            inc_tile(&mut all, t);
        }
        Self {
            hand,
            all,
            melds,
            locale,
            roots: calc_roots(&all),
            list: vec![],
        }
    }

    // 根の数を番数に加算し, 倍率を付与
    fn push(&mut self, pattern: SichuanPattern, prob: u32, missing: Vec<Tile>) {
        let base_fan = pattern.base_fan();
        let fan = base_fan + self.roots;
        let mut pattern_details = vec![fan_detail(self.locale, pattern.name(self.locale), base_fan, 1)];
        if self.roots > 0 {
            pattern_details.push(root_detail(self.locale, self.roots));
        }

        self.list.push(FanSuggestion {
            name: display_name(pattern, self.roots, self.locale),
            fan,
            base_fan,
            probability: prob.min(100),
            missing_tiles: missing,
            pattern_details,
            multiplier: Some(multiplier(fan)),
            illegal: false,
        });
    }

    // 萬子, 筒子, 索子の種類数が1かつ字牌なし
    fn is_flush(&self) -> bool {
        let suits = [TM, TP, TS].iter().filter(|&&ti| self.all[ti].iter().any(|&c| c > 0)).count();
        suits == 1 && self.all[TZ].iter().all(|&c| c == 0)
    }

    fn pairs(&self) -> usize {
        all_tiles().filter(|&t| count_tile(&self.all, t) >= 2).count()
    }

    fn pungs(&self) -> usize {
        let in_hand = all_tiles().filter(|&t| count_tile(&self.hand, t) >= 3).count();
        in_hand + self.melds.iter().filter(|m| m.is_pung()).count()
    }

    fn flush(&mut self) {
        if self.is_flush() {
            if self.pairs() >= 5 && self.melds.is_empty() {
                self.push(QingQiDui, 80, vec![]);
            } else if self.pungs() >= 3 {
                self.push(QingDui, 85, vec![]);
            } else {
                self.push(QingYiSe, 90, vec![]);
            }
            return;
        }

        // 最も多い数牌の色に染める
        let (ti_max, suit_max) = [TM, TP, TS]
            .iter()
            .map(|&ti| (ti, self.all[ti].iter().sum::<usize>()))
            .fold((TM, 0), |acc, x| if x.1 > acc.1 { x } else { acc });
        let others = table_len(&self.all) - suit_max;
        if suit_max >= 8 || others <= 4 {
            let missing = tiles_from_tile_table(&self.all).into_iter().filter(|t| t.0 != ti_max).take(4).collect();
            self.push(QingYiSe, (suit_max as u32 * 7).min(90), missing);
        }
    }

    fn seven_pairs(&mut self) {
        if !self.melds.is_empty() {
            return;
        }

        let pairs = self.pairs();
        let singles: Vec<Tile> = all_tiles().filter(|&t| count_tile(&self.all, t) == 1).collect();
        let need = 7_usize.saturating_sub(pairs);
        if pairs < 3 || singles.len() < need {
            return;
        }

        let base: u32 = match pairs {
            6.. => 90,
            5 => 75,
            4 => 55,
            _ => 35,
        };
        let prob = base.saturating_sub(need as u32 * 8).max(10);
        let pattern = if self.roots > 0 { LongQiDui } else { QiDui };
        self.push(pattern, prob, singles.into_iter().take(need.min(4)).collect());
    }

    fn all_pungs(&mut self) {
        let pungs = self.pungs();
        let pair_tiles: Vec<Tile> = all_tiles().filter(|&t| count_tile(&self.hand, t) == 2).collect();
        if pungs < 2 && pair_tiles.len() < 4 {
            return;
        }

        let need = SET.saturating_sub(pungs);
        let prob = match pungs {
            3.. => 80,
            2 => 60,
            _ => 40,
        };
        let suit_max = [TM, TP, TS].iter().map(|&ti| self.all[ti].iter().sum::<usize>()).max().unwrap_or(0);
        let pattern = if self.is_flush() || suit_max >= 10 { QingDui } else { DuiDuiHu };
        self.push(pattern, prob, pair_tiles.into_iter().take(need.min(4)).collect());
    }

    // 平和は候補が他にない場合も必ず返す
    fn ping_hu(&mut self) {
        if !self.is_flush() && self.pairs() < 4 && self.melds.iter().all(|m| m.is_chi()) {
            self.push(PingHu, 95, vec![]);
        } else if self.list.is_empty() {
            self.push(PingHu, 60, vec![]);
        }
    }
}

// 四川麻雀の役候補 (番数の高い順)
// 欠けている色(void_suit)の牌がある場合は花猪として1件のみ返却
pub fn suggest_sichuan(hand: &[Tile], melds: &[Meld], void_suit: Option<Suit>, locale: Locale) -> Vec<FanSuggestion> {
    if let Some(vs) = void_suit {
        if hand.iter().chain(melds_to_tiles(melds).iter()).any(|&t| vs.contains(t)) {
            let t = locale.text();
            return vec![FanSuggestion {
                name: t.hua_zhu.to_string(),
                fan: 0,
                base_fan: 0,
                probability: 0,
                missing_tiles: vec![],
                pattern_details: vec![t.illegal.to_string()],
                multiplier: None,
                illegal: true,
            }];
        }
    }

    let mut s = Suggester::new(hand, melds, locale);
    s.flush();
    s.seven_pairs();
    s.all_pungs();
    s.ping_hu();

    let mut list = s.list;
    list.sort_by(|a, b| b.fan.cmp(&a.fan));
    list
}

#[cfg(test)]
fn suggest(hand: &str, melds: &[Meld], void_suit: Option<Suit>) -> Vec<FanSuggestion> {
    let hand = crate::util::string::tiles_from_string(hand).unwrap();
    suggest_sichuan(&hand, melds, void_suit, Locale::En)
}

#[test]
fn test_suggest_void() {
    let list = suggest("m123456p789p11s1", &[], Some(Suit::Sou));
    assert_eq!(list.len(), 1);
    assert!(list[0].illegal);
    assert_eq!(list[0].fan, 0);
    assert_eq!(list[0].name, "Flower Pig");
    assert_eq!(list[0].pattern_details, vec!["Illegal"]);

    // 副露に含まれる場合も同様
    let melds = vec![Meld::Pong { tile: Tile(TS, 5) }];
    let list = suggest("m123456p789p1", &melds, Some(Suit::Sou));
    assert_eq!(list.len(), 1);
    assert!(list[0].illegal);

    let list = suggest("m123456p789p11p1", &[], Some(Suit::Sou));
    assert!(!list.is_empty());
    assert!(list.iter().all(|s| !s.illegal));
}

#[test]
fn test_suggest_flush() {
    let list = suggest("m1234567899m1", &[], None);
    assert_eq!(list[0].name, "Full Flush");
    assert_eq!(list[0].probability, 90);
    assert_eq!(list[0].multiplier, Some(16));

    // 他の色が少なければ清一色の候補
    let list = suggest("m123456789m1p23", &[], None);
    let s = list.iter().find(|s| s.name == "Full Flush").unwrap();
    assert_eq!(s.probability, 70);
    assert_eq!(s.missing_tiles, vec![Tile(TP, 2), Tile(TP, 3)]);
}

#[test]
fn test_suggest_roots() {
    let list = suggest("m1111p22s33s44s567", &[], None);
    let s = list.iter().find(|s| s.base_fan == 4 && s.name.starts_with("Seven Pairs + Root")).unwrap();
    assert_eq!(s.name, "Seven Pairs + Root");
    assert_eq!(s.fan, 5);
    assert_eq!(s.multiplier, Some(32));
    assert_eq!(s.pattern_details, vec!["Seven Pairs + Root (4)", "Root x1 (+1)"]);
}

#[test]
fn test_suggest_baseline() {
    // 平和は常に含まれる
    let list = suggest("m135p246s1357z1", &[], None);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Basic Win");
    assert_eq!(list[0].multiplier, Some(2));

    let list = suggest("m123p456s789s1122", &[], None);
    assert!(list.iter().any(|s| s.name == "Basic Win" && s.probability == 95));
    for w in list.windows(2) {
        assert!(w[0].fan >= w[1].fan);
    }
}
