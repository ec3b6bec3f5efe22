use super::*;
use crate::error::{MahjongError, MahjongResult};

// ルール
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    #[serde(alias = "guobiao")]
    Mcr, // 国標麻雀
    Sichuan, // 四川麻雀 (血戦到底)
}

// 数牌の種別 (四川麻雀の定缺に使用)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "m")]
    Man,
    #[serde(rename = "p")]
    Pin,
    #[serde(rename = "s")]
    Sou,
}

impl Suit {
    #[inline]
    pub fn type_index(self) -> Type {
        match self {
            Suit::Man => TM,
            Suit::Pin => TP,
            Suit::Sou => TS,
        }
    }

    pub fn from_type_index(ti: Type) -> Option<Self> {
        match ti {
            TM => Some(Suit::Man),
            TP => Some(Suit::Pin),
            TS => Some(Suit::Sou),
            _ => None,
        }
    }

    #[inline]
    pub fn contains(self, t: Tile) -> bool {
        t.0 == self.type_index()
    }
}

// 解析の入力 UIから毎回そのまま渡される
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub mode: GameMode,
    pub wall_count: usize,
    #[serde(default)]
    pub void_suit: Option<Suit>,
    #[serde(default)]
    pub hand: Vec<Tile>,
    #[serde(default)]
    pub melds: Vec<Meld>,
    #[serde(default)]
    pub discards: Vec<Tile>,
}

impl GameState {
    pub fn new(mode: GameMode, hand: Vec<Tile>, melds: Vec<Meld>) -> Self {
        let wall_count = match mode {
            GameMode::Mcr => INITIAL_WALL_MCR,
            GameMode::Sichuan => INITIAL_WALL_SICHUAN,
        };
        Self {
            mode,
            wall_count,
            void_suit: None,
            hand,
            melds,
            discards: vec![],
        }
    }

    pub fn hand_table(&self) -> TileTable {
        tiles_to_tile_table(&self.hand)
    }

    // 手牌+副露+捨て牌で見えている枚数
    pub fn visible_table(&self) -> TileTable {
        let mut tt = self.hand_table();
        for t in melds_to_tiles(&self.melds).into_iter().chain(self.discards.iter().copied()) {
            inc_tile(&mut tt, t);
        }
        tt
    }

    // 卓上に存在し得ない状態をエラーとして返却
    pub fn validate(&self) -> MahjongResult<()> {
        if self.hand.len() > HAND_MAX {
            return Err(MahjongError::invalid_state(format!(
                "too many tiles in hand: {}",
                self.hand.len()
            )));
        }
        if self.melds.len() > SET {
            return Err(MahjongError::invalid_state(format!(
                "too many melds: {}",
                self.melds.len()
            )));
        }
        if self.hand.len() + self.melds.len() * 3 > HAND_MAX {
            return Err(MahjongError::invalid_state(format!(
                "hand and melds exceed {} tiles",
                HAND_MAX
            )));
        }
        for t in self.hand.iter().chain(&self.discards) {
            if !t.is_valid() {
                return Err(MahjongError::invalid_state(format!("invalid tile: {:?}", t)));
            }
        }
        for m in &self.melds {
            if !m.is_valid() {
                return Err(MahjongError::invalid_state(format!("invalid meld: {:?}", m)));
            }
        }

        let tt = self.visible_table();
        for t in all_tiles() {
            let n = count_tile(&tt, t);
            if n > TILE {
                return Err(MahjongError::invalid_state(format!(
                    "{} copies of {} are visible",
                    n, t
                )));
            }
        }
        Ok(())
    }
}

#[test]
fn test_game_state_json() {
    let json = r#"{
        "mode": "sichuan",
        "wallCount": 30,
        "voidSuit": "s",
        "hand": ["m1", "m2", "m3"],
        "melds": [{"type": "pong", "tile": "p5"}],
        "discards": ["s9"]
    }"#;
    let state: GameState = serde_json::from_str(json).unwrap();
    assert_eq!(state.mode, GameMode::Sichuan);
    assert_eq!(state.void_suit, Some(Suit::Sou));
    assert_eq!(state.wall_count, 30);
    assert_eq!(state.melds, vec![Meld::Pong { tile: Tile(TP, 5) }]);
    assert!(state.validate().is_ok());

    let state: GameState = serde_json::from_str(r#"{"mode":"guobiao","wallCount":0}"#).unwrap();
    assert_eq!(state.mode, GameMode::Mcr);
    assert!(state.hand.is_empty());
}

#[test]
fn test_game_state_validate() {
    let mut state = GameState::new(GameMode::Mcr, vec![Tile(TM, 1); 4], vec![]);
    assert!(state.validate().is_ok());
    state.discards.push(Tile(TM, 1));
    assert!(matches!(
        state.validate(),
        Err(MahjongError::InvalidState { .. })
    ));

    let state = GameState::new(GameMode::Mcr, vec![Tile(TP, 2); 2], vec![Meld::Pong { tile: Tile(TP, 2) }]);
    assert!(state.validate().is_err());

    let hand = all_tiles().take(12).collect();
    let state = GameState::new(GameMode::Mcr, hand, vec![Meld::Pong { tile: Tile(TZ, 1) }]);
    assert!(state.validate().is_err());
}
