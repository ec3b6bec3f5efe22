//! Property-based invariants of the hand analysis.
//!
//! Random hands are drawn from a full set of tiles so that no tile appears
//! more than four times.

use mahjong_advisor::analyze;
use mahjong_advisor::hand::{
    calc_discard_candidates, calc_greedy_shanten, calc_shanten, calc_standard_shanten, calc_winning_tiles,
    is_winning, SHANTEN_MAX,
};
use mahjong_advisor::model::*;
use mahjong_advisor::text::Locale;
use proptest::prelude::*;
use proptest::sample::subsequence;

fn full_set(honors: bool) -> Vec<Tile> {
    all_tiles()
        .filter(|t| honors || t.is_suit())
        .flat_map(|t| std::iter::repeat(t).take(TILE))
        .collect()
}

fn hand_strategy(len: usize) -> impl Strategy<Value = Vec<Tile>> {
    subsequence(full_set(true), len).prop_shuffle()
}

fn sichuan_hand_strategy(len: usize) -> impl Strategy<Value = Vec<Tile>> {
    subsequence(full_set(false), len).prop_shuffle()
}

// 0から4個の刻子の副露と残りの手牌 (14 - 3 * 副露数)
fn hand_with_pongs_strategy() -> impl Strategy<Value = (Vec<Tile>, Vec<Meld>)> {
    (0usize..=4)
        .prop_flat_map(|n| subsequence(all_tiles().collect::<Vec<_>>(), n))
        .prop_flat_map(|pongs| {
            let mut pool = full_set(true);
            for p in &pongs {
                for _ in 0..3 {
                    if let Some(i) = pool.iter().position(|t| t == p) {
                        pool.remove(i);
                    }
                }
            }
            let melds: Vec<Meld> = pongs.iter().map(|&tile| Meld::Pong { tile }).collect();
            let len = 14 - 3 * melds.len();
            (subsequence(pool, len).prop_shuffle(), Just(melds))
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn shanten_is_deterministic_and_bounded(hand in hand_strategy(14)) {
        let tt = tiles_to_tile_table(&hand);
        let s = calc_shanten(&tt, 0);
        prop_assert_eq!(s, calc_shanten(&tt, 0));
        prop_assert!((-1..=SHANTEN_MAX).contains(&s), "shanten {} out of range", s);
    }

    #[test]
    fn winning_iff_shanten_minus_one(hand in hand_strategy(14)) {
        let tt = tiles_to_tile_table(&hand);
        prop_assert_eq!(is_winning(&tt, 0), calc_shanten(&tt, 0) == -1);
    }

    #[test]
    fn drawing_a_tile_improves_by_at_most_one(hand in hand_strategy(14)) {
        let before = tiles_to_tile_table(&hand[..13]);
        let after = tiles_to_tile_table(&hand);
        let s13 = calc_standard_shanten(&before, 0);
        let s14 = calc_standard_shanten(&after, 0);
        prop_assert!(s14 <= s13, "{} -> {}", s13, s14);
        prop_assert!(s14 >= s13 - 1, "{} -> {}", s13, s14);
    }

    #[test]
    fn ready_hand_has_winning_tiles(hand in hand_strategy(13)) {
        let tt = tiles_to_tile_table(&hand);
        let waits = calc_winning_tiles(&tt, 0);
        // 4枚使いの牌のみを待つ形は聴牌でも和了牌がない
        if !waits.is_empty() {
            prop_assert_eq!(calc_shanten(&tt, 0), 0);
        }
        for w in waits {
            let mut t14 = tt;
            inc_tile(&mut t14, w);
            prop_assert!(is_winning(&t14, 0));
        }
    }

    #[test]
    fn winning_iff_shanten_minus_one_with_melds((hand, melds) in hand_with_pongs_strategy()) {
        let tt = tiles_to_tile_table(&hand);
        let n = melds.len();
        prop_assert_eq!(is_winning(&tt, n), calc_shanten(&tt, n) == -1);
    }

    #[test]
    fn winning_tiles_complete_the_hand_with_melds((hand, melds) in hand_with_pongs_strategy()) {
        let n = melds.len();
        let tt = tiles_to_tile_table(&hand[1..]);
        let waits = calc_winning_tiles(&tt, n);
        if !waits.is_empty() {
            prop_assert_eq!(calc_shanten(&tt, n), 0);
        }
        for w in waits {
            let mut t14 = tt;
            inc_tile(&mut t14, w);
            prop_assert!(is_winning(&t14, n));
        }
    }

    #[test]
    fn exhaustive_not_worse_than_greedy(hand in hand_strategy(14)) {
        let tt = tiles_to_tile_table(&hand);
        prop_assert!(calc_standard_shanten(&tt, 0) <= calc_greedy_shanten(&tt, 0));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn best_discard_is_never_worse(hand in hand_strategy(14)) {
        let tt = tiles_to_tile_table(&hand);
        let s = calc_shanten(&tt, 0);
        prop_assume!(s >= 0);
        let cands = calc_discard_candidates(&tt, 0, &tt);
        prop_assert!(!cands.is_empty());
        prop_assert!(cands[0].shanten <= s);
        prop_assert!(cands.iter().all(|c| c.shanten >= cands[0].shanten));
    }

    #[test]
    fn analysis_is_locale_independent(hand in hand_strategy(14), wall_count in 0usize..=83) {
        let state = GameState {
            wall_count,
            ..GameState::new(GameMode::Mcr, hand, vec![])
        };
        let en = analyze(&state, Locale::En);
        let zh = analyze(&state, Locale::Zh);
        prop_assert_eq!(en.status, zh.status);
        prop_assert_eq!(en.shanten, zh.shanten);
        prop_assert_eq!(&en.waiting_tiles, &zh.waiting_tiles);
        prop_assert_eq!(en.best_discard.as_ref().map(|d| d.tile), zh.best_discard.as_ref().map(|d| d.tile));
        prop_assert_eq!(en.score_estimate, zh.score_estimate);
        prop_assert_eq!(en.warnings.len(), zh.warnings.len());
        let fans = |r: &AnalysisResult| r.suggestions.iter().map(|s| (s.fan, s.probability)).collect::<Vec<_>>();
        prop_assert_eq!(fans(&en), fans(&zh));
    }

    #[test]
    fn sichuan_void_tile_is_discarded(hand in sichuan_hand_strategy(14), void in 0usize..3) {
        let suit = Suit::from_type_index(void).unwrap();
        let state = GameState {
            void_suit: Some(suit),
            ..GameState::new(GameMode::Sichuan, hand.clone(), vec![])
        };
        let res = analyze(&state, Locale::En);
        if hand.iter().any(|&t| suit.contains(t)) {
            let d = res.best_discard.unwrap();
            prop_assert!(suit.contains(d.tile));
            prop_assert_eq!(res.suggestions.len(), 1);
            prop_assert!(res.suggestions[0].illegal);
            prop_assert_eq!(res.score_estimate, 0);
        } else {
            prop_assert!(res.suggestions.iter().all(|s| !s.illegal));
            prop_assert!(res.suggestions.iter().all(|s| s.multiplier == Some(1u64 << s.fan)));
        }
    }
}
