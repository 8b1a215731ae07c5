//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the `/chat` round trip; the wire schema and response decoding
//! live in the shared `wire` crate.

pub mod api;
