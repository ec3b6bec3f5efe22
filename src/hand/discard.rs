use rayon::prelude::*;

use super::shanten::calc_shanten;
use super::win::{calc_winning_tiles, winning_hand_len};
use crate::model::*;

// 打牌候補の評価結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardCandidate {
    pub tile: Tile,
    pub shanten: i32,             // 打牌後の向聴数
    pub ukeire: usize,            // 有効牌の残り枚数の合計
    pub ukeire_tiles: usize,      // 有効牌の種類数
    pub waiting_tiles: Vec<Tile>, // 打牌後に聴牌の場合の待ち
}

// 1枚打牌した場合の向聴数と有効牌を計算
// visibleは手牌+副露+捨て牌で見えている枚数 (打牌する牌を含む)
pub fn evaluate_discard(
    hand: &TileTable,
    meld_count: usize,
    visible: &TileTable,
    discard: Tile,
) -> DiscardCandidate {
    let mut hand = *hand;
    dec_tile(&mut hand, discard);
    let shanten = calc_shanten(&hand, meld_count);

    let mut ukeire = 0;
    let mut ukeire_tiles = 0;
    for t in all_tiles() {
        // 打牌する1枚は残り枚数に戻す
        let used = count_tile(visible, t).saturating_sub((t == discard) as usize);
        let remaining = TILE.saturating_sub(used);
        if remaining == 0 {
            continue;
        }

        inc_tile(&mut hand, t);
        let s = calc_shanten(&hand, meld_count);
        dec_tile(&mut hand, t);
        if s < shanten {
            ukeire_tiles += 1;
            ukeire += remaining;
        }
    }

    let waiting_tiles = if shanten == 0 {
        calc_winning_tiles(&hand, meld_count)
    } else {
        vec![]
    };

    DiscardCandidate {
        tile: discard,
        shanten,
        ukeire,
        ukeire_tiles,
        waiting_tiles,
    }
}

// 手牌に含まれる牌の種類ごとに打牌を評価し,良い順に並べて返却
// 向聴数が小さい順 > 有効牌の枚数が多い順 > 待ちの種類が多い順 (同順位は牌の順番)
// 打牌前の枚数(副露なしで14枚)でない場合は空
pub fn calc_discard_candidates(hand: &TileTable, meld_count: usize, visible: &TileTable) -> Vec<DiscardCandidate> {
    let len = table_len(hand);
    if len == 0 || len != winning_hand_len(meld_count) {
        return vec![];
    }

    let kinds: Vec<Tile> = all_tiles().filter(|&t| count_tile(hand, t) > 0).collect();
    let mut res: Vec<DiscardCandidate> = kinds
        .par_iter()
        .map(|&t| evaluate_discard(hand, meld_count, visible, t))
        .collect();

    res.sort_by(|a, b| {
        a.shanten
            .cmp(&b.shanten)
            .then(b.ukeire.cmp(&a.ukeire))
            .then(b.waiting_tiles.len().cmp(&a.waiting_tiles.len()))
    });
    res
}

pub fn calc_best_discard(hand: &TileTable, meld_count: usize, visible: &TileTable) -> Option<DiscardCandidate> {
    calc_discard_candidates(hand, meld_count, visible).into_iter().next()
}

#[cfg(test)]
fn table(s: &str) -> TileTable {
    tiles_to_tile_table(&crate::util::string::tiles_from_string(s).unwrap())
}

#[test]
fn test_best_discard() {
    // 孤立牌のどちらかを切れば単騎待ちの聴牌
    let hand = table("m123456789p111s5z1");
    let best = calc_best_discard(&hand, 0, &hand).unwrap();
    assert_eq!(best.shanten, 0);
    assert!(best.tile == Tile(TZ, 1) || best.tile == Tile(TS, 5));
    assert_eq!(best.waiting_tiles.len(), 1);
    assert_eq!(best.ukeire_tiles, best.waiting_tiles.len());
}

#[test]
fn test_discard_candidates_order() {
    let hand = table("m1234567p1239s99z7");
    let cands = calc_discard_candidates(&hand, 0, &hand);
    assert_eq!(cands.len(), 13);
    for w in cands.windows(2) {
        assert!(w[0].shanten <= w[1].shanten);
        if w[0].shanten == w[1].shanten {
            assert!(w[0].ukeire >= w[1].ukeire);
        }
    }
    // 13枚では評価しない
    assert!(calc_discard_candidates(&table("m1234567p1239s99"), 0, &hand).is_empty());
}

#[test]
fn test_ukeire_remaining() {
    // 見えている牌は残り枚数から除外
    let hand = table("m11123456789z111");
    let mut visible = hand;
    let c = evaluate_discard(&hand, 0, &visible, Tile(TZ, 1));
    assert_eq!(c.shanten, 0);
    assert_eq!(c.waiting_tiles, vec![Tile(TM, 1), Tile(TM, 4), Tile(TM, 7), Tile(TZ, 1)]);
    visible[TM][7] = 4;
    let c2 = evaluate_discard(&hand, 0, &visible, Tile(TZ, 1));
    assert!(c2.ukeire < c.ukeire);
}

#[test]
fn test_visible_without_hand() {
    // 見えている牌に手牌が含まれていない場合も残り枚数は4枚まで
    let hand = table("m123456789p111s5z1");
    let c = evaluate_discard(&hand, 0, &TileTable::default(), Tile(TZ, 1));
    assert_eq!(c.shanten, 0);
    assert_eq!(c.waiting_tiles, vec![Tile(TS, 5)]);
    assert_eq!(c.ukeire, 4);

    let c = evaluate_discard(&hand, 0, &hand, Tile(TZ, 1));
    assert_eq!(c.ukeire, 3);
}
