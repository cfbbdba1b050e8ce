/// A record or value failed validation.
///
/// There is a single failure kind. The message names the offending value and,
/// where relevant, the measured and expected length or bound.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A record kind name did not match any known schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown record kind {0:?} (expected \"block\" or \"log-entry\")")]
pub struct UnknownRecordKind(pub String);

pub type Result<T> = std::result::Result<T, ValidationError>;
