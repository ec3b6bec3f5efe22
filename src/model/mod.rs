// 麻雀のデータモデル
mod define;
mod game_state;
mod meld;
mod result;
mod tile;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::misc::vec_to_string;

pub use define::*;
pub use game_state::*;
pub use meld::*;
pub use result::*;
pub use tile::*;
