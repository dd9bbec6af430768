//! People-list use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for core callers: create, list, touch,
//!   delete.
//! - Own timestamp selection so callers never pick ordering keys.
//!
//! # Invariants
//! - Every mutation persists synchronously before returning.
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::person::{now_epoch_ms, Person, PersonId};
use crate::repo::person_repo::{PersonRepository, RepoResult};

/// Use-case service wrapper for people-list operations.
pub struct PersonService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a person from the add-contact form submission.
    ///
    /// # Contract
    /// - `name` is stored as given; empty-vs-absent normalization belongs to
    ///   the caller.
    /// - `sort_order` is stamped with the current time, so the new person
    ///   lands at the bottom of the list.
    /// - Returns the persisted record.
    pub fn create_person(&self, name: Option<String>) -> RepoResult<Person> {
        let person = Person::new(name);
        self.repo.create_person(&person)?;
        Ok(person)
    }

    /// Gets one person by stable ID.
    pub fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>> {
        self.repo.get_person(id)
    }

    /// Lists everyone, most "due" (oldest-touched) first.
    pub fn list_people(&self) -> RepoResult<Vec<Person>> {
        self.repo.list_people()
    }

    /// Marks a contact as reached out to, moving them to the end of the list.
    ///
    /// Returns `RepoError::NotFound` when the record no longer exists; the
    /// caller decides whether to log or ignore.
    pub fn touch_person(&self, id: PersonId) -> RepoResult<()> {
        self.repo.touch_person(id, now_epoch_ms())
    }

    /// Permanently removes a person. Idempotent; no undo.
    pub fn delete_person(&self, id: PersonId) -> RepoResult<()> {
        self.repo.delete_person(id)
    }
}
