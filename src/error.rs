/// Hard coercion failure raised by `serialize` and `parse_value`.
///
/// The rendered messages are part of the scalar's contract: hosts surface
/// them verbatim to clients, so the wording must not drift.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CoerceError {
    #[error("Int53 cannot represent non-integer value: {display}")]
    NonInteger { display: String },

    /// Covers everything outside the safe-integer contract: NaN, ±Infinity,
    /// finite integers past 2^53 - 1, unparseable strings and the empty
    /// string (rendered as `(empty string)`).
    #[error("Int53 cannot represent non 53-bit signed integer value: {display}")]
    OutOfRange { display: String },
}

impl CoerceError {
    pub fn display(&self) -> &str {
        match self {
            CoerceError::NonInteger { display } | CoerceError::OutOfRange { display } => display,
        }
    }
}
