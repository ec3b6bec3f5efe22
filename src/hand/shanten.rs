use std::ops::{Deref, DerefMut};

use super::win::{is_winning, winning_hand_len};
use crate::model::*;

// 手牌なし&副露なしの場合の値
pub const SHANTEN_MAX: i32 = 8;

// [探索用の一時的な牌の取り出し]
// 取り出した牌はdrop時に必ず手牌に戻す
pub(super) struct Taken<'a> {
    tt: &'a mut TileTable,
    ti: Type,
    nis: [Tnum; 3],
    len: usize,
}

impl<'a> Taken<'a> {
    // 指定の牌が揃っていない場合はNone (手牌は変更しない)
    pub(super) fn new(tt: &'a mut TileTable, ti: Type, nis: &[Tnum]) -> Option<Self> {
        let mut need = [0; TNUM];
        for &ni in nis {
            if ni >= TNUM {
                return None;
            }
            need[ni] += 1;
        }
        for ni in 1..TNUM {
            if tt[ti][ni] < need[ni] {
                return None;
            }
        }

        let mut buf = [0; 3];
        for (i, &ni) in nis.iter().enumerate() {
            tt[ti][ni] -= 1;
            buf[i] = ni;
        }
        Some(Self {
            tt,
            ti,
            nis: buf,
            len: nis.len(),
        })
    }
}

impl Deref for Taken<'_> {
    type Target = TileTable;

    fn deref(&self) -> &TileTable {
        self.tt
    }
}

impl DerefMut for Taken<'_> {
    fn deref_mut(&mut self) -> &mut TileTable {
        self.tt
    }
}

impl Drop for Taken<'_> {
    fn drop(&mut self) {
        for &ni in &self.nis[..self.len] {
            self.tt[self.ti][ni] += 1;
        }
    }
}

// [通常形の向聴数]
// 面子と塔子(対子,両面,嵌張)の組み合わせを全探索し
// 2 * (面子数) + (塔子数) の最大値を求める

struct SetSearch {
    need: usize, // 手牌から作る必要のある面子数
    best: usize,
}

impl SetSearch {
    fn run(tt: &mut TileTable, need: usize) -> usize {
        let rest = table_len(tt);
        let mut s = Self { need, best: 0 };
        s.search(tt, 0, 0, 0, rest);
        s.best
    }

    #[inline]
    fn score(&self, sets: usize, partials: usize) -> usize {
        2 * sets + partials.min(self.need - sets)
    }

    fn search(&mut self, tt: &mut TileTable, start: Index, sets: usize, partials: usize, rest: usize) {
        let current = self.score(sets, partials);
        if current > self.best {
            self.best = current;
        }
        // 残りの牌は1枚あたり最大2/3の寄与
        let bound = (current + 2 * rest / 3).min(2 * self.need);
        if bound <= self.best {
            return;
        }

        let mut i = start;
        while i < KIND {
            match Tile::from_index(i) {
                Some(t) if count_tile(tt, t) > 0 => break,
                _ => i += 1,
            }
        }
        let t = match Tile::from_index(i) {
            Some(t) => t,
            None => return,
        };
        let Tile(ti, ni) = t;

        if sets < self.need {
            // 刻子
            if let Some(mut tk) = Taken::new(tt, ti, &[ni, ni, ni]) {
                self.search(&mut tk, i, sets + 1, partials, rest - 3);
            }
            // 順子
            if t.is_suit() && ni <= 7 {
                if let Some(mut tk) = Taken::new(tt, ti, &[ni, ni + 1, ni + 2]) {
                    self.search(&mut tk, i, sets + 1, partials, rest - 3);
                }
            }
        }

        if sets + partials < self.need {
            // 対子
            if let Some(mut tk) = Taken::new(tt, ti, &[ni, ni]) {
                self.search(&mut tk, i, sets, partials + 1, rest - 2);
            }
            if t.is_suit() {
                // 両面, 辺張
                if ni <= 8 {
                    if let Some(mut tk) = Taken::new(tt, ti, &[ni, ni + 1]) {
                        self.search(&mut tk, i, sets, partials + 1, rest - 2);
                    }
                }
                // 嵌張
                if ni <= 7 {
                    if let Some(mut tk) = Taken::new(tt, ti, &[ni, ni + 2]) {
                        self.search(&mut tk, i, sets, partials + 1, rest - 2);
                    }
                }
            }
        }

        // 孤立牌として1枚外す
        if let Some(mut tk) = Taken::new(tt, ti, &[ni]) {
            self.search(&mut tk, i, sets, partials, rest - 1);
        }
    }
}

// 通常形 (面子 * (4 - 副露数) + 雀頭)
pub fn calc_standard_shanten(hand: &TileTable, meld_count: usize) -> i32 {
    let need = SET.saturating_sub(meld_count);
    let mut tt = *hand;

    // 雀頭なし
    let mut shanten = (2 * need - SetSearch::run(&mut tt, need)) as i32;

    // 雀頭あり
    for t in all_tiles() {
        if let Some(mut tk) = Taken::new(&mut tt, t.0, &[t.1, t.1]) {
            let s = (2 * need - SetSearch::run(&mut tk, need)) as i32 - 1;
            shanten = shanten.min(s);
        }
    }

    shanten.min(SHANTEN_MAX)
}

// 面子優先の貪欲法による通常形の向聴数
// 全探索より悪い(大きい)値になることはあっても小さくなることはない
pub fn calc_greedy_shanten(hand: &TileTable, meld_count: usize) -> i32 {
    let need = SET.saturating_sub(meld_count);
    let mut shanten = SHANTEN_MAX;
    for t in all_tiles() {
        if count_tile(hand, t) >= 2 {
            let mut tt = *hand;
            tt[t.0][t.1] -= 2;
            shanten = shanten.min(greedy_min(&tt, need));
        }
    }
    shanten.min(greedy_min(hand, need) + 1)
}

fn greedy_min(tt: &TileTable, need: usize) -> i32 {
    greedy(*tt, need, true).min(greedy(*tt, need, false))
}

fn greedy(mut tt: TileTable, need: usize, pung_first: bool) -> i32 {
    let mut sets = 0;
    let take_pungs = |tt: &mut TileTable, sets: &mut usize| {
        for t in all_tiles() {
            while tt[t.0][t.1] >= 3 && *sets < need {
                tt[t.0][t.1] -= 3;
                *sets += 1;
            }
        }
    };
    let take_chows = |tt: &mut TileTable, sets: &mut usize| {
        for ti in 0..TZ {
            for ni in 1..=7 {
                while tt[ti][ni] > 0 && tt[ti][ni + 1] > 0 && tt[ti][ni + 2] > 0 && *sets < need {
                    tt[ti][ni] -= 1;
                    tt[ti][ni + 1] -= 1;
                    tt[ti][ni + 2] -= 1;
                    *sets += 1;
                }
            }
        }
    };
    if pung_first {
        take_pungs(&mut tt, &mut sets);
        take_chows(&mut tt, &mut sets);
    } else {
        take_chows(&mut tt, &mut sets);
        take_pungs(&mut tt, &mut sets);
    }

    let max_partials = need - sets;
    let mut partials = 0;
    for t in all_tiles() {
        while tt[t.0][t.1] >= 2 && partials < max_partials {
            tt[t.0][t.1] -= 2;
            partials += 1;
        }
    }
    for d in [1, 2] {
        for ti in 0..TZ {
            for ni in 1..=(9 - d) {
                while tt[ti][ni] > 0 && tt[ti][ni + d] > 0 && partials < max_partials {
                    tt[ti][ni] -= 1;
                    tt[ti][ni + d] -= 1;
                    partials += 1;
                }
            }
        }
    }

    let remaining = (need - sets) as i32;
    (remaining * 2 - partials as i32 - 1).max(-1)
}

// 七対子
pub fn calc_seven_pairs_shanten(hand: &TileTable) -> i32 {
    let mut pairs = 0;
    let mut singles = 0;
    for t in all_tiles() {
        let n = count_tile(hand, t) as i32;
        pairs += n / 2;
        singles += n % 2;
    }
    // 残りの対子数より孤立牌が多い場合はその分を加算
    6 - pairs + (singles - (7 - pairs)).max(0)
}

// 十三幺
pub fn calc_thirteen_orphans_shanten(hand: &TileTable) -> i32 {
    let mut kinds = 0;
    let mut has_pair = false;
    for t in ORPHANS {
        let n = count_tile(hand, t);
        if n >= 1 {
            kinds += 1;
        }
        if n >= 2 {
            has_pair = true;
        }
    }
    13 - kinds - has_pair as i32
}

// 向聴数 (-1: 和了, 0: 聴牌)
// 七対子と十三幺は副露なし&13枚以上の場合のみ考慮
pub fn calc_shanten(hand: &TileTable, meld_count: usize) -> i32 {
    let total = table_len(hand);
    if total == 0 && meld_count == 0 {
        return SHANTEN_MAX;
    }

    if total == winning_hand_len(meld_count) && is_winning(hand, meld_count) {
        return -1;
    }

    let mut shanten = calc_standard_shanten(hand, meld_count);
    if meld_count == 0 && total >= 13 {
        shanten = shanten
            .min(calc_seven_pairs_shanten(hand))
            .min(calc_thirteen_orphans_shanten(hand));
    }

    // 和了形でない手牌(枚数超過など)は聴牌扱いを下限とする
    shanten.max(0)
}

#[cfg(test)]
fn table(s: &str) -> TileTable {
    tiles_to_tile_table(&crate::util::string::tiles_from_string(s).unwrap())
}

#[test]
fn test_taken_restore() {
    let mut tt = table("m123");
    let before = tt;
    {
        let tk = Taken::new(&mut tt, TM, &[1, 2, 3]).unwrap();
        assert_eq!(table_len(&tk), 0);
    }
    assert_eq!(tt, before);
    assert!(Taken::new(&mut tt, TM, &[1, 1]).is_none());
    assert_eq!(tt, before);
}

#[test]
fn test_shanten() {
    assert_eq!(calc_shanten(&TileTable::default(), 0), SHANTEN_MAX);
    assert_eq!(calc_shanten(&table("m123456789p11z111"), 0), -1);
    assert_eq!(calc_shanten(&table("m123456789p1z111"), 0), 0);
    assert_eq!(calc_shanten(&table("m123456789p19z11"), 0), 1);
    assert_eq!(calc_shanten(&table("m1112345678999"), 0), 0);
    // 副露あり
    assert_eq!(calc_shanten(&table("m1"), 4), 0);
    assert_eq!(calc_shanten(&table("m11"), 4), -1);
    assert_eq!(calc_shanten(&table("m13z1"), 3), 1);
    // バラバラの手牌は十三幺の向聴数が最小
    assert_eq!(calc_shanten(&table("m147p258s369z1234"), 0), 7);
}

#[test]
fn test_seven_pairs_shanten() {
    // 6対子+1枚
    let tt = table("m1122p3344s5566z7");
    assert_eq!(calc_seven_pairs_shanten(&tt), 0);
    assert_eq!(calc_shanten(&tt, 0), 0);
    assert_eq!(calc_seven_pairs_shanten(&table("m1122p3344s5566z77")), -1);
}

#[test]
fn test_thirteen_orphans_shanten() {
    assert_eq!(calc_thirteen_orphans_shanten(&table("m19p19s19z1234567")), 0);
    assert_eq!(calc_thirteen_orphans_shanten(&table("m19p19s19z1234566")), 0);
    assert_eq!(calc_thirteen_orphans_shanten(&table("m19p19s19z12345m5")), 2);
    assert_eq!(calc_shanten(&table("m19p19s19z12345677"), 0), -1);
}

#[test]
fn test_standard_not_worse_than_greedy() {
    for s in [
        "m1234567p123s456z1",
        "m112233p445566s7",
        "m1113335557779",
        "m2345678p234s3456",
        "m13579p2468s1357",
    ] {
        let tt = table(s);
        assert!(calc_standard_shanten(&tt, 0) <= calc_greedy_shanten(&tt, 0), "{}", s);
    }
}
