//! Domain model for the people list.
//!
//! # Responsibility
//! - Define the canonical `Person` record consumed by repo and services.
//! - Keep ordering-key semantics (`sort_order`) in one place.
//!
//! # Invariants
//! - Every person is identified by a stable `PersonId`.
//! - `sort_order` strictly determines list position, ascending.

pub mod person;
