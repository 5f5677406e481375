use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::number::{INT53_MAX, INT53_MIN};

/// A const-value node from a parsed query document.
///
/// Only `Int` carries the payload the Int53 literal path reads (a decimal
/// digit string: optional leading `-`, no decimal point, no exponent). The
/// remaining kinds exist so a host can hand any literal over and get the
/// absent sentinel back instead of a kind-mismatch error.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(String),
    Float(String),
    String(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(Vec<Literal>),
    Object(Vec<(String, Literal)>),
}

impl Literal {
    pub fn int(digits: impl Into<String>) -> Self {
        Literal::Int(digits.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Int(_) => "IntValue",
            Literal::Float(_) => "FloatValue",
            Literal::String(_) => "StringValue",
            Literal::Boolean(_) => "BooleanValue",
            Literal::Null => "NullValue",
            Literal::Enum(_) => "EnumValue",
            Literal::List(_) => "ListValue",
            Literal::Object(_) => "ObjectValue",
        }
    }
}

/// Range-check an INT payload without going through f64.
///
/// The payload may hold 40+ digits, far past what a double parses exactly,
/// so the comparison runs on a `BigInt` and only the in-range result is
/// narrowed to i64.
pub(crate) fn int_payload_to_i53(digits: &str) -> Option<i64> {
    let n: BigInt = digits.parse().ok()?;
    if n > BigInt::from(INT53_MAX) || n < BigInt::from(INT53_MIN) {
        log::debug!("int literal out of 53-bit range: {digits}");
        return None;
    }
    n.to_i64()
}
