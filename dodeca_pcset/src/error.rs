// Error type shared by the pitch-class set engine and the row crate.
//
// Every failure is raised at the point of detection and returned to the
// caller; nothing here is retried or downgraded to a best guess. The two
// kinds callers care about most are `InvalidRow` (malformed input) and
// `UnknownSet` (a prime form missing from the reference table).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerialError {
    /// Malformed row or pitch-class input: empty, duplicated pitch classes
    /// where a bijection is required, wrong length for strict serial
    /// analysis, a segment size that does not fit, or an unparsable token.
    #[error("invalid row: {reason}")]
    InvalidRow { reason: String },

    /// The prime form is not catalogued in the set-class reference table.
    #[error("no catalogued set class has prime form {prime:?}")]
    UnknownSet { prime: Vec<u8> },

    /// A reference table listing the same prime form twice.
    #[error("prime form {prime:?} is catalogued more than once")]
    DuplicateSetClass { prime: Vec<u8> },

    /// A table lookup was asked for a cardinality outside 2-10.
    #[error("cardinality {0} is outside the catalogued range 2-10")]
    InvalidCardinality(usize),

    /// An interval vector that belongs to no catalogued set class.
    #[error("{0:?} is not the interval vector of a catalogued set class")]
    InvalidIntervalVector([u8; 6]),

    /// Malformed JSON for the reference table or an analysis config.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SerialError {
    pub fn invalid_row(reason: impl Into<String>) -> Self {
        SerialError::InvalidRow {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SerialError>;
