use crate::error::FetchError;
use crate::records::parse_records;

#[test]
fn parses_a_full_payload() {
    let body = r#"{
        "records": [
            {
                "id": 7,
                "fields": {
                    "Type": "Auxiliary verbs",
                    "LU": "sinn",
                    "EN": "to be",
                    "FR": "être",
                    "DE": "sein",
                    "All": "ech sinn, du bass, hien ass",
                    "video_embed": "<iframe src=\"https://player.example/v/7\"></iframe>"
                }
            }
        ]
    }"#;

    let records = parse_records(body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 7);
    assert_eq!(records[0].fields.lu, "sinn");
    assert_eq!(records[0].fields.verb_type, "Auxiliary verbs");
    assert!(records[0].fields.video_embed.contains("player.example"));
}

#[test]
fn missing_cells_default_to_empty() {
    let body = r#"{
        "records": [
            { "id": 1, "fields": { "Type": "Regular verbs", "LU": "kafen" } }
        ]
    }"#;

    let records = parse_records(body).unwrap();
    let fields = &records[0].fields;
    assert_eq!(fields.lu, "kafen");
    assert_eq!(fields.en, "");
    assert_eq!(fields.fr, "");
    assert_eq!(fields.de, "");
    assert_eq!(fields.all, "");
    assert_eq!(fields.video_embed, "");
}

#[test]
fn null_cells_default_to_empty() {
    let body = r#"{
        "records": [
            { "id": 2, "fields": { "Type": "Modal verbs", "LU": "kënnen", "EN": null, "video_embed": null } }
        ]
    }"#;

    let records = parse_records(body).unwrap();
    assert_eq!(records[0].fields.en, "");
    assert_eq!(records[0].fields.video_embed, "");
}

#[test]
fn record_without_fields_object_still_loads() {
    let body = r#"{ "records": [ { "id": 3 } ] }"#;

    let records = parse_records(body).unwrap();
    assert_eq!(records[0].id, 3);
    assert_eq!(records[0].fields.lu, "");
}

#[test]
fn body_without_records_array_is_a_parse_error() {
    let err = parse_records(r#"{ "rows": [] }"#).unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}

#[test]
fn non_json_body_is_a_parse_error() {
    let err = parse_records("<html>rate limited</html>").unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}
