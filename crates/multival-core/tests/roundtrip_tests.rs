use multival_core::{
    mapping, parse_json_to_mapping, parse_json_to_sequence, sequence, to_json, Mapping, Sequence,
    Value,
};

/// Assert that `to_json` → `parse_json_to_mapping` reconstructs an equal mapping.
fn assert_roundtrip(original: &Mapping) {
    let json = to_json(original);
    let parsed = parse_json_to_mapping(&json);
    assert_eq!(
        &parsed, original,
        "Roundtrip failed:\n  JSON: {json}\n  back: {}",
        to_json(&parsed)
    );
}

/// Assert that canonical JSON text parses and re-serializes byte-for-byte.
fn assert_canonical(json: &str) {
    let parsed = parse_json_to_mapping(json);
    assert_eq!(to_json(&parsed), json);
}

// ============================================================================
// Reference document
// ============================================================================

fn reference_mapping() -> Mapping {
    mapping! {
        "TestString" => "AAAA",
        "TestBool" => false,
        "TestNumber" => 0,
        "TestDic" => mapping! { "InnerString" => "BBBB", "InnerBool" => true },
        "TestList" => sequence![true, false, 0, "hoge"],
    }
}

const REFERENCE_JSON: &str = r#"{"TestString":"AAAA","TestBool":false,"TestNumber":0,"TestDic":{"InnerString":"BBBB","InnerBool":true},"TestList":[true,false,0,"hoge"]}"#;

#[test]
fn reference_serializes_exactly() {
    assert_eq!(to_json(&reference_mapping()), REFERENCE_JSON);
}

#[test]
fn reference_parses_back_to_equal_mapping() {
    assert_eq!(parse_json_to_mapping(REFERENCE_JSON), reference_mapping());
}

#[test]
fn reference_is_canonical() {
    assert_canonical(REFERENCE_JSON);
}

// ============================================================================
// Leaves
// ============================================================================

#[test]
fn roundtrip_empty_mapping() {
    assert_roundtrip(&Mapping::new());
}

#[test]
fn roundtrip_null_and_empty_string() {
    assert_roundtrip(&mapping! { "n" => Value::Null, "s" => "" });
}

#[test]
fn roundtrip_numbers() {
    assert_roundtrip(&mapping! {
        "int" => 42,
        "neg" => -7,
        "frac" => 3.25,
        "big" => u64::MAX,
        "tiny" => Value::Number("0.000001".parse().unwrap()),
    });
}

#[test]
fn roundtrip_number_lookalike_strings_stay_strings() {
    let original = mapping! { "a" => "42", "b" => "true", "c" => "null", "d" => "1,000" };
    assert_roundtrip(&original);
    let parsed = parse_json_to_mapping(&to_json(&original));
    assert_eq!(parsed["a"], Value::from("42"));
    assert_eq!(parsed["b"], Value::from("true"));
}

#[test]
fn roundtrip_escaped_strings() {
    assert_roundtrip(&mapping! {
        "quote" => "say \"hi\"",
        "path" => "C:\\temp\\file",
        "lines" => "one\ntwo\r\nthree\tend",
        "control" => "\u{01}\u{1f}",
        "comment" => "/* not a comment */ // nor this",
        "unicode" => "caf\u{e9} \u{4f60}\u{597d}",
    });
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn roundtrip_deep_nesting() {
    let mut inner = mapping! { "leaf" => "bottom" };
    for level in 0..16 {
        inner = mapping! { format!("level{level}") => inner, "list" => sequence![level] };
    }
    assert_roundtrip(&inner);
}

#[test]
fn roundtrip_sequences_of_mixed_items() {
    assert_roundtrip(&mapping! {
        "rows" => sequence![
            mapping! { "id" => 1, "tags" => Sequence::new() },
            sequence![sequence![], Mapping::new()],
            Value::Null,
            "text",
        ],
    });
}

#[test]
fn roundtrip_top_level_sequence() {
    let original = sequence![1, "two", mapping! { "three" => 3 }];
    let parsed = parse_json_to_sequence(&to_json(&original));
    assert_eq!(parsed, original);
}

#[test]
fn key_order_survives_roundtrip() {
    assert_canonical(r#"{"z":1,"y":{"b":2,"a":1},"x":[3,2,1]}"#);
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn non_canonical_input_normalizes() {
    let parsed = parse_json_to_mapping("{ \"a\" : 1.50 ,\n \"b\" : [ 1e2 ] }");
    assert_eq!(to_json(&parsed), r#"{"a":1.5,"b":[100]}"#);
}

#[test]
fn rich_leaves_come_back_as_strings() {
    let id = multival_core::Uuid::parse_str("d1a6eadf-c842-40b9-9aa3-a2d87a6aef86").unwrap();
    let original = mapping! { "id" => id };
    let parsed = parse_json_to_mapping(&to_json(&original));
    assert_eq!(
        parsed["id"],
        Value::from("d1a6eadf-c842-40b9-9aa3-a2d87a6aef86")
    );
    assert_eq!(parsed.get_as_uuid("id"), id);
}
