use super::*;
use serde_json::json;

#[test]
fn api_error_log_line_serializes_json_payload() {
    let detail = FailureDetail::Json(json!({ "error": "No query provided" }));
    assert_eq!(api_error_log_line(&detail), r#"API error: {"error":"No query provided"}"#);
}

#[test]
fn api_error_log_line_quotes_text_payload() {
    let detail = FailureDetail::Text("Bad Gateway".to_owned());
    assert_eq!(api_error_log_line(&detail), r#"API error: "Bad Gateway""#);
}

#[test]
fn fetch_error_log_line_uses_display_message() {
    let err = ChatError::Network("Failed to fetch".to_owned());
    assert_eq!(fetch_error_log_line(&err), "Error fetching data: Failed to fetch");
}
