// Exercises the engine the way a host framework does: resolver output going
// through serialize, a JSON variables document going through parse_value,
// and an inline document literal going through parse_literal.

use int53_scalar::{InputValue, Int53, Literal};

// Initialize logger for this integration test binary so `RUST_LOG` is honored.
// Using `ctor` ensures initialization runs before tests start.
#[ctor::ctor]
fn __init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).is_test(true).try_init();
}

#[test]
fn resolver_output_reaches_the_response_as_an_integer() {
    // Field resolver returns 3 for an Int53-typed field.
    let resolved = InputValue::from(3.0);
    assert_eq!(Int53::serialize(&resolved), Ok(3));
}

#[test]
fn json_variable_at_the_safe_bound_survives_exactly() {
    let variables: serde_json::Value = serde_json::from_str(r#"{ "input": 9007199254740991 }"#).expect("valid JSON");
    let input = InputValue::from(variables["input"].clone());
    assert_eq!(Int53::parse_value(&input), Ok(Some(9007199254740991)));
}

#[test]
fn json_variables_of_every_scalar_shape_coerce_consistently() {
    let variables: serde_json::Value =
        serde_json::from_str(r#"{ "n": 42, "s": "123", "b": true, "nil": null }"#).expect("valid JSON");
    assert_eq!(Int53::parse_value(&InputValue::from(variables["n"].clone())), Ok(Some(42)));
    assert_eq!(Int53::parse_value(&InputValue::from(variables["s"].clone())), Ok(Some(123)));
    assert_eq!(Int53::parse_value(&InputValue::from(variables["b"].clone())), Ok(Some(1)));
    // JSON null has no numeric form; it raises rather than silently coercing.
    assert!(Int53::parse_value(&InputValue::from(variables["nil"].clone())).is_err());
}

#[test]
fn boundary_plus_one_literal_fails_document_validation_not_the_engine() {
    // The host sees the absent sentinel and reports its own invalid-literal
    // diagnostic; no engine error escapes this path.
    let node = Literal::int("9007199254740992");
    assert_eq!(Int53::parse_literal(&node), None);
}

#[test]
fn structured_json_shapes_raise_on_the_value_paths() {
    let variables: serde_json::Value = serde_json::from_str(r#"{ "arr": [1, 2], "obj": { "a": 1 } }"#).expect("valid JSON");
    assert!(Int53::parse_value(&InputValue::from(variables["obj"].clone())).is_err());
    assert!(Int53::serialize(&InputValue::from(variables["obj"].clone())).is_err());
}
