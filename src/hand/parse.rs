use super::shanten::Taken;
use super::win::{calc_possible_pairs, winning_hand_len};
use crate::model::*;
use crate::util::misc::cartesian_product;

use SetPairType::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetPairType {
    Pair,          // 雀頭
    Chow,          // 順子
    Pung,          // 暗刻
    MeldedChow,    // 吃
    MeldedPung,    // 碰
    MeldedKong,    // 明槓
    ConcealedKong, // 暗槓
}

impl SetPairType {
    #[inline]
    pub fn is_chow(self) -> bool {
        matches!(self, Chow | MeldedChow)
    }

    // 刻子または槓子
    #[inline]
    pub fn is_pung(self) -> bool {
        matches!(self, Pung | MeldedPung | MeldedKong | ConcealedKong)
    }

    #[inline]
    pub fn is_kong(self) -> bool {
        matches!(self, MeldedKong | ConcealedKong)
    }

    // 暗刻として数えるもの (暗槓を含む)
    #[inline]
    pub fn is_concealed_pung(self) -> bool {
        matches!(self, Pung | ConcealedKong)
    }

    // 副露による面子 (暗槓は含まない)
    #[inline]
    pub fn is_melded(self) -> bool {
        matches!(self, MeldedChow | MeldedPung | MeldedKong)
    }
}

// Tileは順子の場合は先頭の牌
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPair(pub SetPairType, pub Tile);

impl SetPair {
    // 面子を構成する牌
    pub fn tiles(&self) -> Vec<Tile> {
        let SetPair(tp, t) = *self;
        match tp {
            Pair => vec![t; 2],
            Chow | MeldedChow => (0..3).map(|d| Tile(t.0, t.1 + d)).collect(),
            Pung | MeldedPung => vec![t; 3],
            MeldedKong | ConcealedKong => vec![t; 4],
        }
    }
}

pub type ParsedHand = Vec<SetPair>;

// 副露をSetPairに変換したリストを返却
pub fn parse_melds(melds: &[Meld]) -> ParsedHand {
    melds
        .iter()
        .map(|m| match *m {
            Meld::Chi { tile } => SetPair(MeldedChow, tile),
            Meld::Pong { tile } => SetPair(MeldedPung, tile),
            Meld::Kong {
                tile,
                concealed: false,
            } => SetPair(MeldedKong, tile),
            Meld::Kong {
                tile,
                concealed: true,
            } => SetPair(ConcealedKong, tile),
        })
        .collect()
}

// 牌種を順子と刻子に分解するすべての組み合わせ
// 先頭の牌から刻子または順子を取り出して再帰的に探索
// TileRowが空の場合は[[]]を返却, 分解できない場合は空
fn parse_row_into_sets(tt: &mut TileTable, ti: Type) -> Vec<ParsedHand> {
    let mut res = vec![];
    let mut cur = vec![];
    parse_row_rec(tt, ti, 1, &mut cur, &mut res);
    res
}

fn parse_row_rec(tt: &mut TileTable, ti: Type, start: Tnum, cur: &mut ParsedHand, res: &mut Vec<ParsedHand>) {
    let mut ni = start;
    while ni < TNUM && tt[ti][ni] == 0 {
        ni += 1;
    }
    if ni == TNUM {
        res.push(cur.clone());
        return;
    }

    // 刻子
    if let Some(mut tk) = Taken::new(tt, ti, &[ni, ni, ni]) {
        cur.push(SetPair(Pung, Tile(ti, ni)));
        parse_row_rec(&mut tk, ti, ni, cur, res);
        cur.pop();
    }

    // 順子 (字牌は除く)
    if ti != TZ && ni <= 7 {
        if let Some(mut tk) = Taken::new(tt, ti, &[ni, ni + 1, ni + 2]) {
            cur.push(SetPair(Chow, Tile(ti, ni)));
            parse_row_rec(&mut tk, ti, ni, cur, res);
            cur.pop();
        }
    }
}

// 手牌が完成形(七対子・十三幺は除く)なら面子+雀頭に分解して返却
// 副露分の面子は含まない
pub fn parse_into_sets(hand: &TileTable, meld_count: usize) -> Vec<ParsedHand> {
    if table_len(hand) != winning_hand_len(meld_count) {
        return vec![];
    }
    let pairs = calc_possible_pairs(hand);
    if pairs.is_empty() {
        return vec![];
    }

    let mut tt = *hand;
    let mut res = vec![];
    for pair in pairs {
        let mut phs_list = vec![];
        if let Some(mut tk) = Taken::new(&mut tt, pair.0, &[pair.1, pair.1]) {
            for ti in 0..TYPE {
                phs_list.push(parse_row_into_sets(&mut tk, ti));
            }
        }

        for v in cartesian_product(&phs_list) {
            let mut ph = vec![SetPair(Pair, pair)];
            for v2 in v {
                ph.extend(v2);
            }
            res.push(ph);
        }
    }

    res
}

#[test]
fn test_parse_into_sets() {
    use crate::util::string::tiles_from_string;
    let tt = |s: &str| tiles_to_tile_table(&tiles_from_string(s).unwrap());

    let phs = parse_into_sets(&tt("m123456789p11z111"), 0);
    assert_eq!(phs.len(), 1);
    assert_eq!(phs[0].len(), 5);
    assert_eq!(phs[0][0], SetPair(Pair, Tile(TP, 1)));

    // 三連刻は刻子3つと順子3つの2通り
    let phs = parse_into_sets(&tt("m111222333444m55"), 0);
    assert!(phs.len() >= 2);
    assert!(phs.iter().any(|ph| ph.iter().filter(|sp| sp.0 == Pung).count() == 4));
    assert!(phs.iter().any(|ph| ph.iter().filter(|sp| sp.0 == Chow).count() == 3));

    // 雀頭候補が2つ
    let phs = parse_into_sets(&tt("m11123444z111"), 1);
    assert_eq!(phs.len(), 2);

    assert!(parse_into_sets(&tt("m123456789p12z111"), 0).is_empty());
    assert!(parse_into_sets(&tt("m123z55"), 0).is_empty());
}

#[test]
fn test_parse_melds() {
    let melds = vec![
        Meld::Chi { tile: Tile(TM, 3) },
        Meld::Kong {
            tile: Tile(TZ, DR),
            concealed: true,
        },
        Meld::Kong {
            tile: Tile(TS, 2),
            concealed: false,
        },
    ];
    let ph = parse_melds(&melds);
    assert_eq!(ph[0], SetPair(MeldedChow, Tile(TM, 3)));
    assert!(ph[1].0.is_concealed_pung() && !ph[1].0.is_melded());
    assert!(ph[2].0.is_kong() && ph[2].0.is_melded());
    assert_eq!(ph[0].tiles(), vec![Tile(TM, 3), Tile(TM, 4), Tile(TM, 5)]);
}
