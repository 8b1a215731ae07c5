//! Query tool state: input text, loading flag, error, and results.
//!
//! LIFECYCLE
//! =========
//! `Idle -> Loading -> {Success | Error} -> Idle`, re-entered on every
//! submission. [`QueryState::begin_submit`] moves to `Loading` and hands back
//! the text to send; [`QueryState::finish`] applies the outcome.
//!
//! A success response without a `response` field sets the error but leaves
//! results untouched, so an earlier answer can stay visible under the banner.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use wire::{ChatError, ChatReply, NO_RESPONSE_MESSAGE};

/// Category of a result entry. Only `Response` is ever produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    #[default]
    Response,
    Trend,
    History,
}

/// A single rendered answer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResultEntry {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ResultKind,
}

impl ResultEntry {
    #[must_use]
    pub fn response(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: ResultKind::Response }
    }
}

/// Coarse view of where the tool is in its submit cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

impl Phase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// All state owned by the query tool.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryState {
    pub query: String,
    pub results: Vec<ResultEntry>,
    pub loading: bool,
    pub error: Option<String>,
}

impl QueryState {
    /// Replace the input text.
    pub fn set_query(&mut self, text: String) {
        self.query = text;
    }

    /// Submit control is enabled only when idle with non-blank input.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.query.trim().is_empty()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.results.is_empty() {
            Phase::Idle
        } else {
            Phase::Success
        }
    }

    /// Enter `Loading` and return the query to send.
    ///
    /// Returns `None` without touching state when the input is blank or a
    /// request is already outstanding. The returned text is the raw input,
    /// not the trimmed form.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(self.query.clone())
    }

    /// Apply the outcome of the request started by [`Self::begin_submit`].
    pub fn finish(&mut self, outcome: Result<ChatReply, ChatError>) {
        match outcome {
            Ok(reply) => match reply.text() {
                Some(text) => {
                    self.results = vec![ResultEntry::response(text)];
                    self.error = None;
                }
                None => self.error = Some(NO_RESPONSE_MESSAGE.to_owned()),
            },
            Err(err) => {
                self.results.clear();
                self.error = Some(err.user_message());
            }
        }
        self.loading = false;
    }
}
