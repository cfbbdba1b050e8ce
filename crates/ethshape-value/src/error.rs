/// Errors that can occur while decoding JSON input into a [`Value`](crate::Value).
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input exceeds the configured maximum size.
    #[error("input too large ({size} bytes, max {max})")]
    InputTooLarge { size: usize, max: usize },

    /// The input is not valid JSON.
    #[error("input is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The input nests arrays/objects deeper than allowed.
    #[error("input nests deeper than {max} levels")]
    TooDeep { max: usize },

    /// An integer literal has more digits than allowed.
    #[error("integer literal too long ({digits} digits, max {max})")]
    IntegerTooLong { digits: usize, max: usize },

    /// A `0x` string is not valid hex.
    #[error("invalid hex string {text:?}: {source}")]
    InvalidHex {
        text: String,
        #[source]
        source: hex::FromHexError,
    },

    /// A JSON number could not be represented.
    #[error("unrepresentable number: {0}")]
    InvalidNumber(String),
}

/// An integer literal could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid integer literal: {0:?}")]
pub struct ParseIntegerError(pub(crate) String);

pub type Result<T> = std::result::Result<T, DecodeError>;
