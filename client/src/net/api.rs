//! HTTP call to the news context backend.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`.
//! Server-side (SSR): a stub error, since the request is only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a [`ChatError`] whose display text is the
//! message shown in the UI. Non-success payloads are also logged to the
//! console before being returned.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::{ChatError, ChatReply};
#[cfg(any(test, feature = "hydrate"))]
use wire::FailureDetail;

#[cfg(not(feature = "hydrate"))]
const UNAVAILABLE_ON_SERVER: &str = "chat requests are not available on the server";

#[cfg(any(test, feature = "hydrate"))]
fn api_error_log_line(detail: &FailureDetail) -> String {
    format!("API error: {}", detail.to_json())
}

#[cfg(any(test, feature = "hydrate"))]
fn fetch_error_log_line(err: &ChatError) -> String {
    format!("Error fetching data: {err}")
}

/// Send `query` to `endpoint` as `POST {"query": ...}` and decode the reply.
///
/// # Errors
///
/// Returns [`ChatError::Network`] when no response arrives,
/// [`ChatError::Api`] for non-success statuses, and [`ChatError::Decode`]
/// when a success body is unreadable.
pub async fn post_chat(endpoint: &str, query: &str) -> Result<ChatReply, ChatError> {
    #[cfg(feature = "hydrate")]
    {
        let outcome = send_chat(endpoint, query).await;
        if let Err(err) = &outcome {
            if let ChatError::Api { detail, .. } = err {
                log::error!("{}", api_error_log_line(detail));
            }
            log::error!("{}", fetch_error_log_line(err));
        }
        outcome
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, query);
        Err(ChatError::Network(UNAVAILABLE_ON_SERVER.to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn send_chat(endpoint: &str, query: &str) -> Result<ChatReply, ChatError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(&wire::ChatRequest::new(query))
        .map_err(|e| ChatError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ChatError::Decode(e.to_string()))?;
    wire::decode_reply(status, &body)
}
