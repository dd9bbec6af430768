//! Reminder scheduling entry points.
//!
//! # Responsibility
//! - Derive weekly reminder parameters from contact creation.
//! - Keep the OS notification center behind a gateway trait.

pub mod scheduler;
