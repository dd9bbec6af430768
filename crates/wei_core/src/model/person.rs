//! Person domain model.
//!
//! # Responsibility
//! - Define the single persisted record: someone the user wants to
//!   periodically reach out to.
//! - Provide lifecycle helpers for the `sort_order` ordering key.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another person.
//! - `sort_order` is an epoch-milliseconds ordering key, not a wall clock:
//!   smaller values sort first and are most "due".
//! - `name` carries no validation; `None` rendering is a presentation
//!   concern and stays out of this model.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a person record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = Uuid;

/// Canonical record for one contact in the people list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable global ID used for lookup and touch/delete targeting.
    pub uuid: PersonId,
    /// Free-text display name. May be absent; never validated.
    pub name: Option<String>,
    /// Epoch milliseconds of creation or last touch. Ascending list order.
    pub sort_order: i64,
}

impl Person {
    /// Creates a new person with a generated stable ID and `sort_order = now`.
    pub fn new(name: Option<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, now_epoch_ms())
    }

    /// Creates a person with caller-provided identity and ordering key.
    ///
    /// Used by persistence round-trips and tests where identity already
    /// exists.
    pub fn with_id(uuid: PersonId, name: Option<String>, sort_order: i64) -> Self {
        Self {
            uuid,
            name,
            sort_order,
        }
    }

    /// Resets the ordering key, moving this person to the end of the list.
    ///
    /// Called after the user reports having reached out to this contact.
    pub fn touch(&mut self, epoch_ms: i64) {
        self.sort_order = epoch_ms;
    }
}

/// Current time as epoch milliseconds, the `sort_order` unit.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
