//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain Rust data wrapped in `RwSignal` by the owning component, so
//! transitions are testable without a browser or a reactive runtime.

pub mod query;
