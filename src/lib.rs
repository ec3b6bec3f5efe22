#![warn(rust_2018_idioms)]
// 構造的な意味合いや一貫性を保つために以下の警告は無効化
#![allow(clippy::useless_format)]
#![allow(clippy::get_first)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::single_match)]
#![allow(clippy::vec_init_then_push)]
#![allow(clippy::ptr_arg)]
#![allow(clippy::too_many_arguments)]

pub mod analysis;
pub mod app;
pub mod error;
pub mod hand;
pub mod mcr;
pub mod model;
pub mod sichuan;
pub mod text;
pub mod util;

pub use analysis::analyze;
pub use error::{MahjongError, MahjongResult};
pub use hand::{compute_shanten, compute_winning_tiles};
pub use mcr::{score_completed_hand, suggest_mcr};
pub use sichuan::{classify_sichuan, suggest_sichuan};
pub use text::Locale;
