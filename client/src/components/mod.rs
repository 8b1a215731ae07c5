//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `news_context_tool` owns the query state and the network call; `results`
//! and `ui` are presentational and carry no state of their own.

pub mod news_context_tool;
pub mod results;
pub mod ui;
