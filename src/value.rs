use crate::number::{format_number, string_to_number};

/// A raw host value arriving at `serialize` or `parse_value`: whatever a
/// field resolver returned, or one entry of a decoded JSON variables payload.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Number(f64),
    Boolean(bool),
    String(String),
    Null,
    List(Vec<InputValue>),
    Object(Vec<(String, InputValue)>),
}

impl From<f64> for InputValue {
    fn from(n: f64) -> Self {
        InputValue::Number(n)
    }
}

impl From<i64> for InputValue {
    fn from(n: i64) -> Self {
        InputValue::Number(n as f64)
    }
}

impl From<bool> for InputValue {
    fn from(b: bool) -> Self {
        InputValue::Boolean(b)
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::String(s.to_string())
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        InputValue::String(s)
    }
}

/// Variables arrive as JSON; map the decoded document into the engine's
/// input model. JSON numbers go through `as_f64`, which is exact for every
/// integer inside the safe bound.
impl From<serde_json::Value> for InputValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => InputValue::Null,
            serde_json::Value::Bool(b) => InputValue::Boolean(b),
            serde_json::Value::Number(n) => InputValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => InputValue::String(s),
            serde_json::Value::Array(items) => InputValue::List(items.into_iter().map(Into::into).collect()),
            serde_json::Value::Object(fields) => InputValue::Object(fields.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}

/// Canonical form of a raw input: a number (possibly NaN or ±Infinity, which
/// the validator then rejects) or structurally invalid before numeric
/// conversion is even attempted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Canonical {
    Num(f64),
    Invalid,
}

/// ECMAScript-style numeric canonicalization of a raw input.
///
/// The empty string is the one structurally invalid shape: it never reaches
/// numeric parsing and renders as `(empty string)` in diagnostics. Null and
/// structured shapes have no numeric form; generic conversion yields NaN.
pub(crate) fn to_number(value: &InputValue) -> Canonical {
    match value {
        InputValue::Number(n) => Canonical::Num(*n),
        InputValue::Boolean(b) => Canonical::Num(if *b { 1.0 } else { 0.0 }),
        InputValue::String(s) if s.is_empty() => Canonical::Invalid,
        InputValue::String(s) => Canonical::Num(string_to_number(s)),
        InputValue::Null | InputValue::List(_) | InputValue::Object(_) => Canonical::Num(f64::NAN),
    }
}

/// Render a raw input for an error message. Numbers use the canonical
/// ECMAScript string form; non-empty strings render verbatim.
pub(crate) fn display(value: &InputValue) -> String {
    match value {
        InputValue::Number(n) => format_number(*n),
        InputValue::Boolean(b) => b.to_string(),
        InputValue::String(s) if s.is_empty() => "(empty string)".to_string(),
        InputValue::String(s) => s.clone(),
        InputValue::Null => "null".to_string(),
        InputValue::List(items) => items.iter().map(display).collect::<Vec<_>>().join(","),
        InputValue::Object(_) => "[object Object]".to_string(),
    }
}
