use serde_json::json;

use super::*;

fn acme() -> ExhibitorSummary {
    ExhibitorSummary {
        exh: Some("123".to_owned()),
        name: Some("Acme".to_owned()),
        country: Some("DE".to_owned()),
        city: Some("Köln".to_owned()),
        location: None,
    }
}

#[test]
fn profile_text_replaces_newline_and_trims() {
    assert_eq!(profile_text(&json!({"text": "Hello\nWorld"})), "Hello World");
    assert_eq!(profile_text(&json!({"text": "  padded \n"})), "padded");
}

#[test]
fn profile_text_treats_crlf_as_one_break() {
    assert_eq!(profile_text(&json!({"text": "a\r\nb\rc"})), "a b c");
}

#[test]
fn profile_text_missing_or_non_string_is_empty() {
    assert_eq!(profile_text(&json!({})), "");
    assert_eq!(profile_text(&json!({"text": null})), "");
    assert_eq!(profile_text(&json!({"text": 5})), "");
    assert_eq!(profile_text(&json!("bare string")), "");
}

#[test]
fn flatten_without_slices_yields_one_placeholder_row() {
    let rows = flatten_exhibitor(&acme(), "123", Vec::new());
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.exhibitor_id, "123");
    assert_eq!(row.name, "Acme");
    assert_eq!(row.location, "");
    assert_eq!(row.profile_text, "");
    assert_eq!(row.raw_profile, "{}");
}

#[test]
fn flatten_yields_one_row_per_slice_sharing_exhibitor_fields() {
    let slices = vec![
        json!({"text": "first"}),
        json!({"text": "second"}),
        json!({"title": "no text"}),
    ];
    let rows = flatten_exhibitor(&acme(), "123", slices);
    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.exhibitor_id, "123");
        assert_eq!(row.country, "DE");
        assert_eq!(row.city, "Köln");
    }
    assert_eq!(rows[0].profile_text, "first");
    assert_eq!(rows[1].profile_text, "second");
    assert_eq!(rows[2].profile_text, "");
}

#[test]
fn raw_profile_is_compact_and_parses_back_to_the_slice() {
    let slice = json!({"text": "Hello\nWorld", "lang": "de", "extra": {"n": [1, 2]}});
    let rows = flatten_exhibitor(&acme(), "123", vec![slice.clone()]);
    assert_eq!(
        rows[0].raw_profile,
        r#"{"text":"Hello\nWorld","lang":"de","extra":{"n":[1,2]}}"#
    );
    let parsed: Value = serde_json::from_str(&rows[0].raw_profile).unwrap();
    assert_eq!(parsed, slice);
}

#[test]
fn raw_profile_keeps_non_ascii_literal() {
    let rows = flatten_exhibitor(&acme(), "123", vec![json!({"text": "Grüße 東京"})]);
    assert_eq!(rows[0].raw_profile, r#"{"text":"Grüße 東京"}"#);
    assert_eq!(rows[0].profile_text, "Grüße 東京");
}
