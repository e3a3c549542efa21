#![allow(clippy::float_cmp)]

use alloc::string::String;
use alloc::vec::Vec;

use rstest::rstest;

use super::*;

fn object(entries: &[(&str, Value)]) -> Value {
    entries
        .iter()
        .map(|(k, v)| (String::from(*k), v.clone()))
        .collect::<ObjectMap>()
        .into()
}

fn array(values: &[Value]) -> Value {
    Value::Array(Array::from(values.to_vec()))
}

#[rstest]
#[case(b"null", Value::Null)]
#[case(b"true", Value::Bool(true))]
#[case(b"false", Value::Bool(false))]
#[case(b"  null  ", Value::Null)]
fn literals(#[case] input: &[u8], #[case] expected: Value) {
    assert_eq!(parse(input), Ok(expected));
}

#[rstest]
#[case(b"0", 0.0)]
#[case(b"-0", 0.0)]
#[case(b"42", 42.0)]
#[case(b"-17", -17.0)]
#[case(b"3.125", 3.125)]
#[case(b"1e3", 1000.0)]
#[case(b"2.5E-2", 0.025)]
#[case(b"1e400", f64::INFINITY)] // overflow follows IEEE-754, no range error
fn numbers(#[case] input: &[u8], #[case] expected: f64) {
    assert_eq!(parse(input).unwrap().as_number().unwrap(), expected);
}

#[rstest]
#[case(br#""""#, "")]
#[case(br#""hello""#, "hello")]
#[case(br#""a\"b""#, "a\"b")]
#[case(br#""a\\b""#, "a\\b")]
#[case(br#""a\/b""#, "a/b")]
#[case(br#""\b\f\n\r\t""#, "\u{8}\u{c}\n\r\t")]
#[case("\"héllo\"".as_bytes(), "héllo")]
#[case("\"🦀\"".as_bytes(), "🦀")]
#[case(br#""\u0041""#, "A")]
#[case(br#""\u00e9""#, "é")]
#[case(br#""\u2200x""#, "∀x")]
#[case(br#""\ud83e\udd80""#, "🦀")] // surrogate pair
fn strings(#[case] input: &[u8], #[case] expected: &str) {
    assert_eq!(parse(input).unwrap().as_str().unwrap(), expected);
}

#[rstest]
#[case(br#""\q""#, Error::InvalidEscape { span: Span::new(1, 3) })]
#[case(br#""\u12""#, Error::InvalidEscape { span: Span::new(1, 5) })]
#[case(br#""\u12g4""#, Error::InvalidEscape { span: Span::new(1, 6) })]
#[case(br#""\ud800""#, Error::UnpairedSurrogateEscape { span: Span::new(1, 7) })]
#[case(br#""\udc00""#, Error::UnpairedSurrogateEscape { span: Span::new(1, 7) })]
#[case(br#""\ud800\n""#, Error::UnpairedSurrogateEscape { span: Span::new(1, 7) })]
#[case(br#""\ud800A""#, Error::UnpairedSurrogateEscape { span: Span::new(1, 7) })]
fn bad_escapes(#[case] input: &[u8], #[case] expected: Error) {
    assert_eq!(parse(input), Err(expected));
}

#[test]
fn empty_containers() {
    assert_eq!(parse(b"{}"), Ok(object(&[])));
    assert_eq!(parse(b"[]"), Ok(array(&[])));
}

#[test]
fn flat_array() {
    assert_eq!(
        parse(b"[null, true, 2, \"three\"]"),
        Ok(array(&[
            Value::Null,
            Value::Bool(true),
            Value::Number(2.0),
            Value::from("three"),
        ]))
    );
}

#[test]
fn flat_object() {
    assert_eq!(
        parse(br#"{"a": 1, "b": false}"#),
        Ok(object(&[
            ("a", Value::Number(1.0)),
            ("b", Value::Bool(false)),
        ]))
    );
}

#[test]
fn nested_structures() {
    let parsed = parse(br#"{"outer": {"inner": [1, [2]]}, "flag": null}"#).unwrap();
    let outer = parsed.as_object().unwrap();
    let inner = outer
        .get("outer")
        .unwrap()
        .as_object()
        .unwrap()
        .get("inner")
        .unwrap()
        .as_array()
        .unwrap();
    assert_eq!(inner.len(), 2);
    assert_eq!(inner.get(0).unwrap().as_number().unwrap(), 1.0);
    assert_eq!(
        inner.get(1).unwrap().as_array().unwrap().len(),
        1
    );
    assert!(outer.get("flag").unwrap().is_null());
}

#[test]
fn duplicate_keys_keep_the_last_member() {
    let parsed = parse(br#"{"k": 1, "k": 2}"#).unwrap();
    let map = parsed.as_object().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("k").unwrap().as_number().unwrap(), 2.0);
}

#[test]
fn escaped_keys_are_unescaped() {
    let parsed = parse(br#"{"a\nb": true}"#).unwrap();
    assert!(parsed.as_object().unwrap().get("a\nb").is_ok());
}

#[rstest]
#[case(b"", Span::at(0))]
#[case(b"   ", Span::at(3))]
fn empty_input_is_a_parse_error(#[case] input: &[u8], #[case] span: Span) {
    assert_eq!(parse(input), Err(Error::UnexpectedSymbol { span }));
}

#[rstest]
#[case(b"true}", Span::new(4, 5))]
#[case(b"{} []", Span::new(3, 4))]
#[case(b"null null", Span::new(5, 9))]
#[case(b"1 2", Span::new(2, 3))]
fn trailing_content_is_rejected(#[case] input: &[u8], #[case] span: Span) {
    assert_eq!(parse(input), Err(Error::TrailingInput { span }));
}

#[test]
fn trailing_whitespace_is_fine() {
    assert_eq!(parse(b" true \r\n"), Ok(Value::Bool(true)));
}

#[rstest]
#[case(b"{", Span::at(1))] // EOF where a key was expected
#[case(b"[1,", Span::at(3))]
#[case(b"{\"a\"}", Span::new(4, 5))] // missing colon
#[case(b"{\"a\":1,}", Span::new(7, 8))] // trailing comma
#[case(b"[1,]", Span::new(3, 4))]
#[case(b"[1 2]", Span::new(3, 4))]
#[case(b"{1: 2}", Span::new(1, 2))] // non-string key
#[case(b":", Span::new(0, 1))]
#[case(b"}", Span::new(0, 1))]
fn structural_errors(#[case] input: &[u8], #[case] span: Span) {
    assert_eq!(parse(input), Err(Error::UnexpectedSymbol { span }));
}

#[test]
fn scan_errors_propagate_with_spans() {
    assert_eq!(
        parse(b"[\"\xc2\"]"),
        Err(Error::TruncatedSequence {
            expected: 2,
            span: Span::new(3, 4)
        })
    );
    assert_eq!(
        parse(b"nope"),
        Err(Error::UnexpectedByte {
            span: Span::new(1, 2)
        })
    );
}

#[test]
fn depth_limit_applies_to_arrays_and_objects() {
    let options = ParseOptions { max_depth: 2 };
    assert!(parse_with(b"[[1]]", options).is_ok());
    assert_eq!(
        parse_with(b"[[[1]]]", options),
        Err(Error::DepthLimitExceeded {
            span: Span::new(2, 3)
        })
    );
    assert_eq!(
        parse_with(br#"{"a":{"b":{"c":1}}}"#, options),
        Err(Error::DepthLimitExceeded {
            span: Span::new(10, 11)
        })
    );
}

#[test]
fn depth_is_released_between_siblings() {
    // Sibling containers at the same level must not accumulate depth.
    let options = ParseOptions { max_depth: 2 };
    assert!(parse_with(b"[[1],[2],[3]]", options).is_ok());
}

#[test]
fn default_depth_limit_handles_deep_but_sane_input() {
    let mut text = Vec::new();
    text.extend_from_slice(&[b'['; 100]);
    text.extend_from_slice(b"null");
    text.extend_from_slice(&[b']'; 100]);
    assert!(parse(&text).is_ok());

    let mut hostile = Vec::new();
    hostile.extend_from_slice(&[b'['; 200]);
    assert!(matches!(
        parse(&hostile),
        Err(Error::DepthLimitExceeded { .. })
    ));
}

#[test]
fn parse_str_matches_parse() {
    assert_eq!(parse_str("[null]"), parse(b"[null]"));
}
