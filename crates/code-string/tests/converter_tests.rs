//! Integration tests for code-string
//!
//! Covers each case style through the cached converter, the export record,
//! and concurrent access to one converter.

use code_string::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::Arc;
use std::thread;

#[rstest]
#[case("foo-bar", "foo-bar", "foo_bar", "FOO_BAR", "FooBar", "fooBar")]
#[case("get-CPF", "get-cpf", "get_cpf", "GET_CPF", "GetCPF", "getCPF")]
#[case("A-B", "a-b", "a_b", "A_B", "AB", "AB")]
#[case("user", "user", "user", "USER", "User", "user")]
#[case("load-2-items", "load-2-items", "load_2_items", "LOAD_2_ITEMS", "Load2Items", "load2Items")]
#[case("", "", "", "", "", "")]
#[case("ß-straße", "ß-straße", "ß_straße", "SS_STRASSE", "SSStraße", "ßStraße")]
#[case("\u{130}-i", "i\u{307}-i", "i\u{307}_i", "\u{130}_I", "\u{130}I", "\u{130}I")]
fn test_all_styles(
    #[case] identifier: &str,
    #[case] dash: &str,
    #[case] snake: &str,
    #[case] constant: &str,
    #[case] pascal: &str,
    #[case] camel: &str,
) {
    let name = CaseConverter::new(identifier);
    assert_eq!(name.dash(), dash);
    assert_eq!(name.snake(), snake);
    assert_eq!(name.constant(), constant);
    assert_eq!(name.pascal(), pascal);
    assert_eq!(name.camel(), camel);
}

#[test]
fn test_export_matches_accessors() {
    for identifier in ["get-CPF", "foo--bar", "-leading", "trailing-", "XML-http-Request"] {
        let name = CaseConverter::new(identifier);
        let all = name.export_all();

        for style in CaseStyle::ALL {
            assert_eq!(all.get(style), name.get(style), "{identifier} as {style}");
        }
    }
}

#[test]
fn test_export_before_and_after_access() {
    let fresh = CaseConverter::new("parse-HTML-node");
    let exported_first = fresh.export_all();

    let warmed = CaseConverter::new("parse-HTML-node");
    let _ = (warmed.camel(), warmed.pascal());
    assert_eq!(warmed.export_all(), exported_first);
}

#[test]
fn test_repeated_access_is_stable() {
    let name = CaseConverter::new("get-CPF");
    let first = name.camel().to_string();
    for _ in 0..10 {
        assert_eq!(name.camel(), first);
    }
}

#[test]
fn test_malformed_input_is_deterministic() {
    let a = CaseConverter::new("Not Dash_Case");
    let b = CaseConverter::new("Not Dash_Case");
    assert_eq!(a.export_all(), b.export_all());
    assert_eq!(a.snake(), "not dash_case");
}

#[test]
fn test_concurrent_readers_agree() {
    let name = Arc::new(CaseConverter::new("shared-ID-value"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let name = Arc::clone(&name);
            thread::spawn(move || name.export_all())
        })
        .collect();

    for handle in handles {
        let all = handle.join().unwrap();
        assert_eq!(all.camel, "sharedIDValue");
        assert_eq!(all.pascal, "SharedIDValue");
    }
}

#[test]
fn test_export_serializes_with_style_names() {
    let all = CaseConverter::new("foo-bar").export_all();
    let json = serde_json::to_value(&all).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "dash": "foo-bar",
            "snake": "foo_bar",
            "constant": "FOO_BAR",
            "pascal": "FooBar",
            "camel": "fooBar",
        })
    );
}

#[test]
fn test_style_serializes_lowercase() {
    let json = serde_json::to_string(&CaseStyle::Constant).unwrap();
    assert_eq!(json, "\"constant\"");
    let style: CaseStyle = serde_json::from_str("\"pascal\"").unwrap();
    assert_eq!(style, CaseStyle::Pascal);
}
