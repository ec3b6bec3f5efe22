// 向聴数, 和了判定, 打牌評価を行うモジュール
mod discard;
mod parse;
mod shanten;
mod win;

use crate::model::*;

pub use self::{
    discard::{calc_best_discard, calc_discard_candidates, evaluate_discard, DiscardCandidate},
    parse::{parse_into_sets, parse_melds, ParsedHand, SetPair, SetPairType},
    shanten::{
        calc_greedy_shanten, calc_seven_pairs_shanten, calc_shanten, calc_standard_shanten,
        calc_thirteen_orphans_shanten, SHANTEN_MAX,
    },
    win::{
        calc_possible_pairs, calc_winning_tiles, is_normal_win, is_seven_pairs_win,
        is_thirteen_orphans_win, is_winning, winning_hand_len,
    },
};

// 手牌と副露から向聴数を計算 (-1: 和了, 0: 聴牌)
pub fn compute_shanten(hand: &[Tile], melds: &[Meld]) -> i32 {
    calc_shanten(&tiles_to_tile_table(hand), melds.len())
}

// 聴牌の場合の和了牌 (聴牌でない場合は空)
pub fn compute_winning_tiles(hand: &[Tile], melds: &[Meld]) -> Vec<Tile> {
    calc_winning_tiles(&tiles_to_tile_table(hand), melds.len())
}

#[test]
fn test_compute() {
    use crate::util::string::tiles_from_string;
    let hand = tiles_from_string("m1112345678999").unwrap();
    assert_eq!(compute_shanten(&hand, &[]), 0);
    assert_eq!(compute_winning_tiles(&hand, &[]).len(), 9);

    let hand = tiles_from_string("p23z11").unwrap();
    let melds = vec![
        Meld::Pong { tile: Tile(TM, 1) },
        Meld::Chi { tile: Tile(TS, 4) },
        Meld::Kong {
            tile: Tile(TZ, DR),
            concealed: true,
        },
    ];
    assert_eq!(compute_shanten(&hand, &melds), 0);
    assert_eq!(compute_winning_tiles(&hand, &melds), vec![Tile(TP, 1), Tile(TP, 4)]);
}
