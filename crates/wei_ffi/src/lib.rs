//! UI-facing FFI surface for the wei core.

pub mod api;
