//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped layout and delegates interactive behavior
//! to `components`.

pub mod home;
