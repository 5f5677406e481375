//! Int53: a custom scalar for query-language schemas covering the signed
//! integers that survive an IEEE-754 double round-trip exactly
//! (|n| <= 2^53 - 1, i.e. up to `Number.MAX_SAFE_INTEGER`).
//!
//! The crate is the coercion engine only. A host schema framework binds the
//! three hooks on [`Int53`] — [`Int53::serialize`], [`Int53::parse_value`]
//! and [`Int53::parse_literal`] — and supplies the raw values; everything
//! else (type registration, field resolution, document parsing) stays on the
//! host's side.

pub(crate) mod error;
pub(crate) mod int53;
pub(crate) mod literal;
pub(crate) mod number;
pub(crate) mod value;

pub use error::CoerceError;
pub use int53::Int53;
pub use literal::Literal;
pub use number::{INT53_MAX, INT53_MIN};
pub use value::InputValue;
