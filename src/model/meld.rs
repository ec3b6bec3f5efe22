use super::*;

// 副露 (暗槓を含む)
// Chiのtileは順子の先頭の牌
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Meld {
    Chi {
        tile: Tile,
    },
    Pong {
        tile: Tile,
    },
    #[serde(rename = "gang")]
    Kong {
        tile: Tile,
        #[serde(default)]
        concealed: bool,
    },
}

impl Meld {
    // 面子を代表する牌 (順子の場合は先頭)
    #[inline]
    pub fn tile(&self) -> Tile {
        match *self {
            Meld::Chi { tile } | Meld::Pong { tile } | Meld::Kong { tile, .. } => tile,
        }
    }

    pub fn tiles(&self) -> Vec<Tile> {
        match *self {
            Meld::Chi { tile } => (0..3).map(|d| Tile(tile.0, tile.1 + d)).collect(),
            Meld::Pong { tile } => vec![tile; 3],
            Meld::Kong { tile, .. } => vec![tile; 4],
        }
    }

    #[inline]
    pub fn is_chi(&self) -> bool {
        matches!(self, Meld::Chi { .. })
    }

    // 刻子または槓子
    #[inline]
    pub fn is_pung(&self) -> bool {
        !self.is_chi()
    }

    #[inline]
    pub fn is_kong(&self) -> bool {
        matches!(self, Meld::Kong { .. })
    }

    // 暗槓のみtrue
    #[inline]
    pub fn is_concealed(&self) -> bool {
        matches!(self, Meld::Kong { concealed: true, .. })
    }

    // 牌の組み合わせとして成立しているか
    pub fn is_valid(&self) -> bool {
        match *self {
            Meld::Chi { tile } => tile.is_valid() && tile.is_suit() && tile.1 <= 7,
            Meld::Pong { tile } | Meld::Kong { tile, .. } => tile.is_valid(),
        }
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::util::string::meld_to_string(self))
    }
}

pub fn melds_to_tiles(melds: &[Meld]) -> Vec<Tile> {
    melds.iter().flat_map(|m| m.tiles()).collect()
}

#[test]
fn test_meld_tiles() {
    let m = Meld::Chi { tile: Tile(TP, 3) };
    assert_eq!(m.tiles(), vec![Tile(TP, 3), Tile(TP, 4), Tile(TP, 5)]);
    assert!(m.is_chi() && !m.is_pung());

    let m = Meld::Kong {
        tile: Tile(TZ, DR),
        concealed: true,
    };
    assert_eq!(m.tiles().len(), 4);
    assert!(m.is_pung() && m.is_kong() && m.is_concealed());

    assert!(!Meld::Chi { tile: Tile(TM, 8) }.is_valid());
    assert!(!Meld::Chi { tile: Tile(TZ, 1) }.is_valid());
}

#[test]
fn test_meld_serde() {
    let m: Meld = serde_json::from_str(r#"{"type":"gang","tile":"s2"}"#).unwrap();
    assert_eq!(
        m,
        Meld::Kong {
            tile: Tile(TS, 2),
            concealed: false
        }
    );
    let json = serde_json::to_string(&Meld::Pong { tile: Tile(TZ, 5) }).unwrap();
    assert_eq!(json, r#"{"type":"pong","tile":"z5"}"#);
}
