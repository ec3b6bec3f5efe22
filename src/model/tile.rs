use std::str::FromStr;

use serde::{de, ser};

use super::*;
use crate::error::{MahjongError, MahjongResult};
use crate::util::string::{tile_number_from_char, tile_type_from_char, tile_type_to_char};

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(pub Type, pub Tnum); // (type index, number index)

impl Tile {
    // 通し番号(0~33)から牌を生成 範囲外はNone
    pub fn from_index(i: Index) -> Option<Self> {
        if i < 27 {
            Some(Self(i / 9, i % 9 + 1))
        } else if i < KIND {
            Some(Self(TZ, i - 27 + 1))
        } else {
            None
        }
    }

    // 通し番号 (萬子:0~8, 筒子:9~17, 索子:18~26, 字牌:27~33)
    #[inline]
    pub fn index(&self) -> Index {
        self.0 * 9 + self.1 - 1
    }

    pub fn from_symbol(s: &str) -> MahjongResult<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(MahjongError::parse(s, "tile symbol must be 2 chars"));
        }
        let t = tile_type_from_char(chars[0]).map_err(|e| MahjongError::parse(s, e))?;
        let n = tile_number_from_char(chars[1]).map_err(|e| MahjongError::parse(s, e))?;
        let tile = Self(t, n);
        if !tile.is_valid() {
            return Err(MahjongError::parse(s, "tile number out of range"));
        }
        Ok(tile)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        match self.0 {
            TM | TP | TS => (1..=9).contains(&self.1),
            TZ => (1..=7).contains(&self.1),
            _ => false,
        }
    }

    // 数牌
    #[inline]
    pub fn is_suit(&self) -> bool {
        self.0 != TZ
    }

    // 字牌
    #[inline]
    pub fn is_honor(&self) -> bool {
        self.0 == TZ
    }

    // 1,9牌
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.0 != TZ && (self.1 == 1 || self.1 == 9)
    }

    // 么九牌
    #[inline]
    pub fn is_end(&self) -> bool {
        self.0 == TZ || self.1 == 1 || self.1 == 9
    }

    // 中張牌
    #[inline]
    pub fn is_simple(&self) -> bool {
        !self.is_end()
    }

    // 風牌
    #[inline]
    pub fn is_wind(&self) -> bool {
        self.0 == TZ && self.1 <= WN
    }

    // 三元牌
    #[inline]
    pub fn is_dragon(&self) -> bool {
        self.0 == TZ && DW <= self.1 && self.1 <= DR
    }

    // 緑一色の構成牌 (索子23468, 發)
    #[inline]
    pub fn is_green(&self) -> bool {
        match self.0 {
            TS => matches!(self.1, 2 | 3 | 4 | 6 | 8),
            TZ => self.1 == DG,
            _ => false,
        }
    }

    // 推不倒の構成牌 (筒子1234589, 索子245689, 白)
    #[inline]
    pub fn is_reversible(&self) -> bool {
        match self.0 {
            TP => matches!(self.1, 1 | 2 | 3 | 4 | 5 | 8 | 9),
            TS => matches!(self.1, 2 | 4 | 5 | 6 | 8 | 9),
            TZ => self.1 == DW,
            _ => false,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", tile_type_to_char(self.0), self.1)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Tile {
    type Err = MahjongError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Tile::from_symbol(v).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

// [TileTable]
// 探索中に直接書き換えるため固定長の配列で管理 (各列の0番目は未使用)
pub type TileRow = [usize; TNUM];
pub type TileTable = [TileRow; TYPE];

#[inline]
pub fn count_tile(tt: &TileTable, t: Tile) -> usize {
    tt[t.0][t.1]
}

#[inline]
pub fn inc_tile(tt: &mut TileTable, t: Tile) {
    tt[t.0][t.1] += 1;
}

#[inline]
pub fn dec_tile(tt: &mut TileTable, t: Tile) {
    assert!(tt[t.0][t.1] > 0, "no tile to remove: {}", t);
    tt[t.0][t.1] -= 1;
}

pub fn tiles_to_tile_table(tiles: &[Tile]) -> TileTable {
    let mut tt = TileTable::default();
    for &t in tiles {
        inc_tile(&mut tt, t);
    }
    tt
}

pub fn tiles_from_tile_table(tt: &TileTable) -> Vec<Tile> {
    let mut tiles = vec![];
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            for _ in 0..tt[ti][ni] {
                tiles.push(Tile(ti, ni));
            }
        }
    }
    tiles
}

pub fn table_to_counts(tt: &TileTable) -> [usize; KIND] {
    let mut counts = [0; KIND];
    for (i, c) in counts.iter_mut().enumerate() {
        if let Some(t) = Tile::from_index(i) {
            *c = count_tile(tt, t);
        }
    }
    counts
}

pub fn counts_to_table(counts: &[usize; KIND]) -> TileTable {
    let mut tt = TileTable::default();
    for (i, &c) in counts.iter().enumerate() {
        if let Some(t) = Tile::from_index(i) {
            tt[t.0][t.1] = c;
        }
    }
    tt
}

pub fn table_len(tt: &TileTable) -> usize {
    tt.iter().map(|tr| tr.iter().sum::<usize>()).sum()
}

// 全34種の牌
pub fn all_tiles() -> impl Iterator<Item = Tile> {
    (0..KIND).filter_map(Tile::from_index)
}

// 么九牌13種
pub const ORPHANS: [Tile; 13] = [
    Tile(TM, 1),
    Tile(TM, 9),
    Tile(TP, 1),
    Tile(TP, 9),
    Tile(TS, 1),
    Tile(TS, 9),
    Tile(TZ, WE),
    Tile(TZ, WS),
    Tile(TZ, WW),
    Tile(TZ, WN),
    Tile(TZ, DW),
    Tile(TZ, DG),
    Tile(TZ, DR),
];

#[test]
fn test_tile_index() {
    for i in 0..KIND {
        let t = Tile::from_index(i).unwrap();
        assert!(t.is_valid());
        assert_eq!(t.index(), i);
    }
    assert_eq!(Tile::from_index(KIND), None);
    assert_eq!(Tile::from_index(8), Some(Tile(TM, 9)));
    assert_eq!(Tile::from_index(9), Some(Tile(TP, 1)));
    assert_eq!(Tile::from_index(33), Some(Tile(TZ, DR)));
}

#[test]
fn test_tile_symbol() {
    assert_eq!(Tile::from_symbol("p7").unwrap(), Tile(TP, 7));
    assert_eq!("z7".parse::<Tile>().unwrap(), Tile(TZ, DR));
    assert!(Tile::from_symbol("z8").is_err());
    assert!(Tile::from_symbol("m0").is_err());
    assert!(Tile::from_symbol("x1").is_err());
    assert_eq!(Tile(TS, 3).to_string(), "s3");

    let json = serde_json::to_string(&Tile(TM, 5)).unwrap();
    assert_eq!(json, "\"m5\"");
    let t: Tile = serde_json::from_str("\"z6\"").unwrap();
    assert!(t.is_green());
    assert!(serde_json::from_str::<Tile>("\"s0\"").is_err());
}

#[test]
fn test_tiletable() {
    let tiles = vec![Tile(TM, 1), Tile(TM, 1), Tile(TP, 9), Tile(TZ, DG)];
    let tt = tiles_to_tile_table(&tiles);
    assert_eq!(count_tile(&tt, Tile(TM, 1)), 2);
    assert_eq!(table_len(&tt), 4);
    assert_eq!(tiles_from_tile_table(&tt), tiles);

    let counts = table_to_counts(&tt);
    assert_eq!(counts[0], 2);
    assert_eq!(counts[17], 1);
    assert_eq!(counts[32], 1);
    assert_eq!(counts_to_table(&counts), tt);
}
