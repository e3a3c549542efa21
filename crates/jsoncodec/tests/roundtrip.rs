//! End-to-end codec properties: text → tree → text.

use jsoncodec::{emit, emit_to_string, parse, parse_str, Array, ObjectMap, Value};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Literal-only documents whose canonical emission is byte-identical to the
/// source: keys already ascending, strings needing no escapes, no numbers
/// (number formatting is deliberately lossy).
const FIXED_POINT_TEXTS: &[&str] = &[
    "null",
    "true",
    "false",
    "{}",
    "[]",
    "[null,null,null]",
    "[true,false]",
    "{\"foo\":true}",
    "{\"a\":null,\"b\":{\"c\":[]}}",
    "[[],[null],{}]",
    "\"hello\"",
];

#[test]
fn emit_parse_is_identity_on_canonical_text() {
    for text in FIXED_POINT_TEXTS {
        let value = parse_str(text).unwrap();
        assert_eq!(&emit_to_string(&value).unwrap(), text, "for {text:?}");
    }
}

#[test]
fn emission_sorts_object_keys() {
    let value = parse_str("{\"b\":null,\"a\":null}").unwrap();
    assert_eq!(emit_to_string(&value).unwrap(), "{\"a\":null,\"b\":null}");
}

#[test]
fn escapes_survive_the_round_trip() {
    let text = "\"a\\\"b\\\\c\\/d\\n\"";
    let value = parse_str(text).unwrap();
    assert_eq!(value.as_str().unwrap(), "a\"b\\c/d\n");
    assert_eq!(emit_to_string(&value).unwrap(), text);
}

#[test]
fn unicode_escapes_decode_and_emit_verbatim() {
    // `\u` escapes decode to UTF-8 on parse; emission never re-encodes.
    let value = parse_str("\"\\u00e9\\ud83e\\udd80\"").unwrap();
    assert_eq!(value.as_str().unwrap(), "é🦀");
    assert_eq!(emit_to_string(&value).unwrap(), "\"é🦀\"");
}

// ---------------------------------------------------------------------------
// Property tests over generated trees.
//
// Generated numbers are multiples of 1/64: exactly representable as doubles
// and exactly rendered by six fractional decimal digits, so the emission is
// lossless for them. Generated strings avoid control bytes outside the
// escaped set, which the emitter passes through verbatim and the scanner
// would then reject.
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
struct Doc(Value);

const STRING_ALPHABET: &[char] = &[
    'a', 'b', 'z', 'A', 'Z', '0', '9', ' ', '_', '/', '\\', '"', '.', ',', '{', '}', '[', ']',
    ':', 'é', '∀', '🦀', '\n', '\r', '\t', '\u{8}', '\u{c}',
];

fn gen_string(g: &mut Gen) -> String {
    let len = usize::arbitrary(g) % 8;
    (0..len)
        .map(|_| *g.choose(STRING_ALPHABET).unwrap())
        .collect()
}

fn gen_number(g: &mut Gen) -> f64 {
    // 64ths in ±2^14, exact in binary and in six decimal digits.
    f64::from(i32::arbitrary(g) % (1 << 20)) / 64.0
}

fn gen_value(g: &mut Gen, depth: usize) -> Value {
    let scalar_only = depth == 0;
    let pick = usize::arbitrary(g) % if scalar_only { 4 } else { 6 };
    match pick {
        0 => Value::Null,
        1 => Value::Bool(bool::arbitrary(g)),
        2 => Value::Number(gen_number(g)),
        3 => Value::String(gen_string(g)),
        4 => {
            let len = usize::arbitrary(g) % 4;
            let mut array = Array::new(len);
            for index in 0..len {
                array.set(index, gen_value(g, depth - 1)).unwrap();
            }
            Value::Array(array)
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            let mut map = ObjectMap::new();
            for _ in 0..len {
                map.put(gen_string(g), gen_value(g, depth - 1));
            }
            Value::Object(map)
        }
    }
}

impl Arbitrary for Doc {
    fn arbitrary(g: &mut Gen) -> Self {
        Doc(gen_value(g, 3))
    }
}

#[quickcheck]
fn parse_inverts_emit(doc: Doc) -> bool {
    let text = emit(&doc.0).unwrap();
    parse(&text).unwrap() == doc.0
}

#[quickcheck]
fn emitted_text_is_valid_json(doc: Doc) -> bool {
    let text = emit(&doc.0).unwrap();
    serde_json::from_slice::<serde_json::Value>(&text).is_ok()
}

#[quickcheck]
fn emission_is_deterministic(doc: Doc) -> bool {
    emit(&doc.0).unwrap() == emit(&doc.0).unwrap()
}

#[quickcheck]
fn deep_clone_emits_identically(doc: Doc) -> bool {
    emit(&doc.0.deep_clone()).unwrap() == emit(&doc.0).unwrap()
}
