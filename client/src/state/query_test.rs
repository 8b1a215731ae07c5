use super::*;
use serde_json::json;
use wire::{FALLBACK_ERROR_MESSAGE, FailureDetail, decode_reply};

fn with_query(text: &str) -> QueryState {
    let mut state = QueryState::default();
    state.set_query(text.to_owned());
    state
}

fn answered(text: &str) -> QueryState {
    let mut state = with_query("previous question");
    state.begin_submit();
    state.finish(Ok(ChatReply { response: Some(json!(text)) }));
    state
}

// =============================================================
// Defaults and submit gating
// =============================================================

#[test]
fn query_state_default_is_idle() {
    let state = QueryState::default();
    assert!(state.query.is_empty());
    assert!(state.results.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.phase(), Phase::Idle);
}

#[test]
fn blank_query_cannot_submit() {
    assert!(!with_query("").can_submit());
    assert!(!with_query("   \t\n").can_submit());
    assert!(with_query("inflation trends").can_submit());
}

#[test]
fn begin_submit_with_whitespace_query_leaves_state_unchanged() {
    let mut state = answered("earlier answer");
    state.set_query("   ".to_owned());
    let before = state.clone();

    assert_eq!(state.begin_submit(), None);
    assert_eq!(state, before);
}

#[test]
fn begin_submit_enters_loading_and_clears_error() {
    let mut state = with_query("  elections in 2024 ");
    state.error = Some("old failure".to_owned());

    let sent = state.begin_submit();

    assert_eq!(sent.as_deref(), Some("  elections in 2024 "));
    assert!(state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.phase(), Phase::Loading);
    assert!(!state.can_submit());
}

#[test]
fn begin_submit_refuses_while_loading() {
    let mut state = with_query("first");
    assert!(state.begin_submit().is_some());
    assert_eq!(state.begin_submit(), None);
    assert!(state.loading);
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn success_replaces_results_with_single_response_entry() {
    let mut state = answered("older");
    state.set_query("new question".to_owned());
    state.begin_submit();

    state.finish(decode_reply(200, r#"{"response":"X"}"#));

    assert_eq!(state.results, vec![ResultEntry { text: "X".to_owned(), kind: ResultKind::Response }]);
    assert!(state.error.is_none());
    assert!(!state.loading);
    assert_eq!(state.phase(), Phase::Success);
    assert!(state.can_submit());
}

#[test]
fn json_failure_clears_results_and_embeds_payload() {
    let mut state = answered("older");
    state.begin_submit();

    state.finish(decode_reply(400, r#"{"detail": "bad"}"#));

    assert!(state.results.is_empty());
    let error = state.error.expect("error set");
    assert!(error.contains(r#"{"detail":"bad"}"#), "{error}");
    assert!(!state.loading);
}

#[test]
fn text_failure_clears_results_and_embeds_text() {
    let mut state = answered("older");
    state.begin_submit();

    state.finish(decode_reply(500, "oops"));

    assert!(state.results.is_empty());
    assert!(state.error.expect("error set").contains("oops"));
}

#[test]
fn missing_response_sets_fixed_error_and_keeps_stale_results() {
    let mut state = answered("older");
    state.begin_submit();

    state.finish(decode_reply(200, "{}"));

    assert_eq!(state.error.as_deref(), Some("No response from the API."));
    assert_eq!(state.results, vec![ResultEntry::response("older")]);
    assert!(!state.loading);
    assert_eq!(state.phase(), Phase::Error);
}

#[test]
fn network_failure_clears_results_and_uses_message() {
    let mut state = answered("older");
    state.begin_submit();

    state.finish(Err(ChatError::Network("Failed to fetch".to_owned())));

    assert!(state.results.is_empty());
    assert_eq!(state.error.as_deref(), Some("Failed to fetch"));
}

#[test]
fn empty_error_message_uses_fallback() {
    let mut state = with_query("q");
    state.begin_submit();

    state.finish(Err(ChatError::Decode(String::new())));

    assert_eq!(state.error.as_deref(), Some(FALLBACK_ERROR_MESSAGE));
}

#[test]
fn failure_then_success_clears_error() {
    let mut state = with_query("q");
    state.begin_submit();
    state.finish(Err(ChatError::Api { status: 503, detail: FailureDetail::Text("down".to_owned()) }));
    assert_eq!(state.phase(), Phase::Error);

    state.begin_submit();
    assert!(state.error.is_none());
    state.finish(decode_reply(200, r#"{"response":"back up"}"#));

    assert_eq!(state.results, vec![ResultEntry::response("back up")]);
    assert!(state.error.is_none());
}

#[test]
fn result_entry_serializes_kind_as_type() {
    let value = serde_json::to_value(ResultEntry::response("hi")).expect("serialize");
    assert_eq!(value, json!({ "text": "hi", "type": "response" }));
}
