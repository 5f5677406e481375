use crate::error::CoerceError;
use crate::literal::{self, Literal};
use crate::number::{Int53Check, check_int53};
use crate::value::{Canonical, InputValue, display, to_number};

/// The Int53 scalar: the three hooks a schema framework binds for a custom
/// scalar type, each applying the same canonicalize-then-validate pipeline
/// with its own failure policy.
///
/// * [`Int53::serialize`] (outbound) always raises on invalid input — a bad
///   resolver value is a server-side bug that must not be swallowed.
/// * [`Int53::parse_value`] (variables path) behaves like serialize except
///   for a raw NaN number, which returns the absent sentinel.
/// * [`Int53::parse_literal`] (inline syntax path) never raises; every
///   rejection is the absent sentinel, and the host reports its own
///   invalid-literal diagnostic.
pub struct Int53;

impl Int53 {
    /// Scalar type name as it appears in a schema document.
    pub const NAME: &'static str = "Int53";

    /// Coerce a resolver-produced value for output. Every invalid case is a
    /// raised [`CoerceError`].
    pub fn serialize(value: &InputValue) -> Result<i64, CoerceError> {
        coerce(value)
    }

    /// Coerce a query-variable value.
    ///
    /// A raw NaN number returns `Ok(None)` rather than an error: the host's
    /// own variable-coercion layer rejects the absent value, and this hook
    /// defers to it. That exemption is for the NaN *number* only — a string
    /// that merely parses to NaN (`"one"`) still raises, as does the empty
    /// string and ±Infinity.
    pub fn parse_value(value: &InputValue) -> Result<Option<i64>, CoerceError> {
        if let InputValue::Number(n) = value
            && n.is_nan()
        {
            log::debug!("parse_value: NaN deferred to host variable coercion");
            return Ok(None);
        }
        coerce(value).map(Some)
    }

    /// Coerce an inline literal node. Wrong kind, malformed payload, or a
    /// payload outside the 53-bit range all return `None`; this hook never
    /// raises.
    pub fn parse_literal(node: &Literal) -> Option<i64> {
        match node {
            Literal::Int(digits) => literal::int_payload_to_i53(digits),
            other => {
                log::debug!("parse_literal: non-int literal kind {}", other.kind());
                None
            }
        }
    }
}

/// Shared canonicalize-then-validate pipeline. The adapters map its tags to
/// their own failure conventions instead of duplicating the checks.
fn coerce(value: &InputValue) -> Result<i64, CoerceError> {
    let n = match to_number(value) {
        Canonical::Num(n) => n,
        // Structurally invalid before numeric conversion (the empty string).
        Canonical::Invalid => {
            return Err(CoerceError::OutOfRange { display: display(value) });
        }
    };
    match check_int53(n) {
        Int53Check::Ok(i) => Ok(i),
        Int53Check::NonInteger => Err(CoerceError::NonInteger { display: display(value) }),
        Int53Check::OutOfRange => Err(CoerceError::OutOfRange { display: display(value) }),
    }
}
