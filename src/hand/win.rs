use crate::model::*;

// [完成形判定 (面子, 雀頭)]

// それぞれの牌種について"枚数を3で割った余り"と"余り数の集計"を返却
pub fn calc_mods_cnts(hand: &TileTable) -> ([usize; TYPE], [usize; 3]) {
    let mut mods = [0; TYPE];
    for ti in 0..TYPE {
        mods[ti] = hand[ti][1..TNUM].iter().sum();
        mods[ti] %= 3;
    }

    let mut cnts = [0; 3];
    for ti in 0..TYPE {
        cnts[mods[ti]] += 1;
    }

    (mods, cnts)
}

// 面子のみで構成されているかの判定
pub fn is_sets(tr: &TileRow, ti: Type) -> bool {
    let (mut n0, mut n1, mut n2);
    n0 = tr[1];
    n1 = tr[2];
    for i in 1..8 {
        n2 = tr[i + 2];
        let n = n0 % 3;
        if (ti == TZ && n != 0) || (n1 < n || n2 < n) {
            return false;
        }
        n0 = n1 - n;
        n1 = n2 - n;
    }
    n0 % 3 == 0 && n1 % 3 == 0
}

// 牌種が完成面子+雀頭の場合において雀頭候補となる数字を返す
// [1,4,7], [2,5,8], [3,6,9] のいずれか
pub fn calc_pair_candidate_index(tr: &TileRow) -> [Tnum; 3] {
    // 面子の和は3で割り切れるので余りの値によって雀頭候補を絞り込める
    let mut sum = 0;
    for i in 1..TNUM {
        sum += i * tr[i];
    }
    // 雀頭の数字nについて 2n ≡ sum (mod 3) すなわち n ≡ 2*sum (mod 3)
    let r = (2 * sum) % 3;
    let first = if r == 0 { 3 } else { r };
    [first, first + 3, first + 6]
}

// 牌種が完成面子+雀頭のみで構成されている場合,雀頭のリストを返す.
// 基本的に1つだが,3113,3111113のような形の場合2つ
pub fn calc_pair_candidate(tr: &TileRow, ti: Type) -> Vec<Tile> {
    // 雀頭候補それぞれについて外してみた結果が完成面子になっているかをチェック
    let mut tr = *tr;
    let mut res = vec![];
    for ni in calc_pair_candidate_index(&tr) {
        if tr[ni] < 2 {
            continue;
        }
        tr[ni] -= 2;
        if is_sets(&tr, ti) {
            res.push(Tile(ti, ni));
        }
        tr[ni] += 2;
    }

    res
}

// 3n+2枚の手牌において和了形である場合,雀頭候補のリストを返却
pub fn calc_possible_pairs(hand: &TileTable) -> Vec<Tile> {
    let (mods, cnts) = calc_mods_cnts(hand);
    let mut res = vec![];

    if cnts[1] != 0 || cnts[2] != 1 {
        return vec![];
    }

    for ti in 0..TYPE {
        if mods[ti] == 2 {
            let pairs = calc_pair_candidate(&hand[ti], ti);
            if pairs.is_empty() {
                return vec![];
            }
            res = pairs;
        } else if !is_sets(&hand[ti], ti) {
            return vec![];
        }
    }

    res
}

// 副露数から和了に必要な手牌の枚数
#[inline]
pub fn winning_hand_len(meld_count: usize) -> usize {
    SET.saturating_sub(meld_count) * 3 + 2
}

// [和了形判定]

// 通常形
pub fn is_normal_win(hand: &TileTable, meld_count: usize) -> bool {
    table_len(hand) == winning_hand_len(meld_count) && !calc_possible_pairs(hand).is_empty()
}

// 七対子 (同じ牌4枚は2対として扱う)
pub fn is_seven_pairs_win(hand: &TileTable) -> bool {
    let mut n_pair = 0;
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            match hand[ti][ni] {
                0 => {}
                2 => n_pair += 1,
                4 => n_pair += 2,
                _ => return false,
            }
        }
    }
    n_pair == 7
}

// 十三幺
pub fn is_thirteen_orphans_win(hand: &TileTable) -> bool {
    let mut count = 0;
    for t in ORPHANS {
        let n = count_tile(hand, t);
        if n == 0 {
            return false;
        }
        count += n;
    }
    count == 14 && table_len(hand) == 14
}

// 和了判定 (通常形, 七対子, 十三幺)
pub fn is_winning(hand: &TileTable, meld_count: usize) -> bool {
    if is_normal_win(hand, meld_count) {
        return true;
    }
    if meld_count == 0 && table_len(hand) == 14 {
        return is_seven_pairs_win(hand) || is_thirteen_orphans_win(hand);
    }
    false
}

// [和了牌判定]
// 34種の牌を順に加えて和了形になる牌を返却
// 既に4枚使用している牌は対象外
pub fn calc_winning_tiles(hand: &TileTable, meld_count: usize) -> Vec<Tile> {
    let mut hand = *hand;
    let mut res = vec![];
    for t in all_tiles() {
        if count_tile(&hand, t) >= TILE {
            continue;
        }
        inc_tile(&mut hand, t);
        if is_winning(&hand, meld_count) {
            res.push(t);
        }
        dec_tile(&mut hand, t);
    }
    res
}

#[test]
fn test_pair_candidate() {
    let tt = tiles_to_tile_table(&crate::util::string::tiles_from_string("m11123").unwrap());
    let pairs = calc_pair_candidate(&tt[TM], TM);
    assert_eq!(pairs, vec![Tile(TM, 1)]);

    // 3113 の形は雀頭候補が2つ
    let tt = tiles_to_tile_table(&crate::util::string::tiles_from_string("p11123444").unwrap());
    let pairs = calc_pair_candidate(&tt[TP], TP);
    assert_eq!(pairs.len(), 2);
}

#[test]
fn test_is_winning() {
    use crate::util::string::tiles_from_string;
    let win = |s: &str, m: usize| is_winning(&tiles_to_tile_table(&tiles_from_string(s).unwrap()), m);

    assert!(win("m123456789p11z111", 0));
    assert!(win("m111222333444m55", 0));
    assert!(!win("m123456789p12z111", 0));
    // 七対子 (4枚使いを含む)
    assert!(win("m1122p3344s5566z77", 0));
    assert!(win("m1111p3344s5566z77", 0));
    assert!(!win("m1112p3344s5566z77", 0));
    // 十三幺
    assert!(win("m19p19s19z12345677", 0));
    assert!(!win("m19p19s19z1234567", 0));
    // 副露あり
    assert!(win("m123z55", 3));
    assert!(win("z55", 4));
    assert!(!win("m123z55", 2));
    // 字牌は順子にならない
    assert!(!win("z123m11", 3));
    // 数牌の境界をまたいだ順子は不可
    assert!(!win("m89p1s55", 3));
}

#[test]
fn test_winning_tiles() {
    use crate::util::string::tiles_from_string;
    let hand = tiles_to_tile_table(&tiles_from_string("m1112345678999").unwrap());
    assert_eq!(calc_winning_tiles(&hand, 0).len(), 9); // 純正九蓮宝燈

    let hand = tiles_to_tile_table(&tiles_from_string("m19p19s19z1234567").unwrap());
    assert_eq!(calc_winning_tiles(&hand, 0).len(), 13);

    // 自分で4枚使っている牌は待ちにならない (5枚目があれば和了形)
    let hand = tiles_to_tile_table(&tiles_from_string("m1111").unwrap());
    assert!(calc_winning_tiles(&hand, 3).is_empty());

    let hand = tiles_to_tile_table(&tiles_from_string("m1112").unwrap());
    assert_eq!(calc_winning_tiles(&hand, 3), vec![Tile(TM, 2), Tile(TM, 3)]);
}
