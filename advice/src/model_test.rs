use super::*;

fn item(n: usize) -> HistoryItem {
    HistoryItem {
        message: format!("m{n}"),
        response: format!("r{n}"),
        category: "engine".to_owned(),
        timestamp: format!("t{n}"),
    }
}

// =============================================================
// Category
// =============================================================

#[test]
fn category_serializes_as_lowercase_wire_value() {
    let json = serde_json::to_string(&Category::Transmission).expect("serialize");
    assert_eq!(json, "\"transmission\"");
}

#[test]
fn category_parse_round_trips_every_variant() {
    for category in Category::ALL {
        assert_eq!(Category::parse(category.as_str()), Some(category));
    }
}

#[test]
fn category_parse_rejects_unknown_value() {
    assert_eq!(Category::parse("spaceship"), None);
    assert_eq!(Category::parse("ENGINE"), None);
}

#[test]
fn category_defaults_to_general() {
    assert_eq!(Category::default(), Category::General);
}

#[test]
fn chat_request_body_matches_endpoint_shape() {
    let request = ChatRequest { message: "squeal when braking".to_owned(), category: Category::Brakes };
    let value = serde_json::to_value(&request).expect("serialize");
    assert_eq!(value, serde_json::json!({ "message": "squeal when braking", "category": "brakes" }));
}

// =============================================================
// HistoryItem / SimilarCase
// =============================================================

#[test]
fn category_label_is_uppercase_even_for_unknown_categories() {
    let mut entry = item(1);
    assert_eq!(entry.category_label(), "ENGINE");
    entry.category = "hybrid".to_owned();
    assert_eq!(entry.category_label(), "HYBRID");
}

#[test]
fn match_percent_scales_and_rounds() {
    let case = SimilarCase { prompt: "p".into(), response: "r".into(), similarity: Some(0.876) };
    assert_eq!(case.match_percent(), Some(88));
}

#[test]
fn match_percent_clamps_out_of_range_scores() {
    let high = SimilarCase { prompt: "p".into(), response: "r".into(), similarity: Some(1.7) };
    let low = SimilarCase { prompt: "p".into(), response: "r".into(), similarity: Some(-0.2) };
    assert_eq!(high.match_percent(), Some(100));
    assert_eq!(low.match_percent(), Some(0));
}

#[test]
fn match_percent_is_none_without_score() {
    let case = SimilarCase { prompt: "p".into(), response: "r".into(), similarity: None };
    assert_eq!(case.match_percent(), None);
}

#[test]
fn chat_reply_defaults_missing_similar_cases_to_empty() {
    let reply: ChatReply = serde_json::from_str(r#"{"text":"check the belt"}"#).expect("decode");
    assert_eq!(reply.text, "check the belt");
    assert!(reply.similar_cases.is_empty());
}

// =============================================================
// Persistence encoding
// =============================================================

#[test]
fn history_round_trip_is_lossless() {
    let items: Vec<HistoryItem> = (0..HISTORY_LIMIT).map(item).collect();
    let raw = encode_history(&items).expect("encode");
    assert_eq!(decode_history(&raw), items);
}

#[test]
fn history_encoding_uses_original_field_names() {
    let raw = encode_history(&[item(1)]).expect("encode");
    assert_eq!(raw, r#"[{"message":"m1","response":"r1","category":"engine","timestamp":"t1"}]"#);
}

#[test]
fn decode_history_treats_corrupt_value_as_empty() {
    assert!(decode_history("{not json").is_empty());
    assert!(decode_history("").is_empty());
    assert!(decode_history(r#"[{"message":1}]"#).is_empty());
}

#[test]
fn decode_history_treats_null_as_empty() {
    assert!(decode_history("null").is_empty());
}

#[test]
fn decode_history_keeps_stored_order_and_length() {
    let items: Vec<HistoryItem> = (0..12).map(item).collect();
    let raw = encode_history(&items).expect("encode");
    let decoded = decode_history(&raw);
    assert_eq!(decoded.len(), 12);
    assert_eq!(decoded[0].message, "m0");
}
