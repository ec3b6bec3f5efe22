use std::fmt;

/// Errors raised at the fallible edges of the engine: text parsing,
/// JSON decoding and validation of a supplied `GameState`.
///
/// The analysis functions themselves are total and never return this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MahjongError {
    /// Tile, meld or expression text could not be parsed.
    Parse { input: String, message: String },
    /// The game state describes something that cannot exist at a table.
    InvalidState { message: String },
    /// JSON encoding or decoding failed.
    Serialization { message: String },
}

impl MahjongError {
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        MahjongError::Parse {
            input: input.into(),
            message: message.into(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        MahjongError::InvalidState {
            message: message.into(),
        }
    }
}

impl fmt::Display for MahjongError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MahjongError::Parse { input, message } => {
                write!(f, "parse error on '{}': {}", input, message)
            }
            MahjongError::InvalidState { message } => write!(f, "invalid state: {}", message),
            MahjongError::Serialization { message } => {
                write!(f, "serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for MahjongError {}

impl From<serde_json::Error> for MahjongError {
    fn from(e: serde_json::Error) -> Self {
        MahjongError::Serialization {
            message: e.to_string(),
        }
    }
}

pub type MahjongResult<T> = Result<T, MahjongError>;

#[test]
fn test_error_display() {
    let e = MahjongError::parse("m1x", "invalid char: 'x'");
    assert_eq!(e.to_string(), "parse error on 'm1x': invalid char: 'x'");

    let e = MahjongError::invalid_state("too many tiles");
    assert_eq!(e.to_string(), "invalid state: too many tiles");

    let e: MahjongError = serde_json::from_str::<u32>("\"a\"").unwrap_err().into();
    assert!(matches!(e, MahjongError::Serialization { .. }));
}
