//! FFI use-case API for the mobile UI shell.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI via FRB.
//! - Keep error semantics simple for the single-screen integration.
//! - Apply presentation defaults (missing-name fallback) at this boundary,
//!   never inside the core model.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Return values are UTF-8 strings and plain envelopes with stable meaning.

use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;
use wei_core::db::open_db;
use wei_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    LoggingNotificationGateway, Person, PersonService, ReminderScheduler, SqlitePersonRepository,
};

/// Display text shown when a person was saved without a name.
const MISSING_NAME_FALLBACK: &str = "Dr. Strange?!";
const PEOPLE_DB_FILE_NAME: &str = "wei_people.sqlite3";
static PEOPLE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One row of the people list, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonListItem {
    /// Stable person ID in string form.
    pub person_id: String,
    /// Name with the missing-name fallback already applied.
    pub display_name: String,
    /// Ordering key (epoch milliseconds); smaller = more due.
    pub sort_order: i64,
}

/// Response envelope for the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeopleListResponse {
    /// People ordered most-due first (ascending `sort_order`).
    pub items: Vec<PersonListItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Response envelope for the add-person form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RememberResponse {
    /// Whether the person was persisted.
    pub ok: bool,
    /// Created person ID on success.
    pub person_id: Option<String>,
    /// Scheduled notification request ID on success.
    pub reminder_id: Option<String>,
    /// Weekly trigger weekday (1..7) chosen for the reminder.
    pub reminder_weekday: Option<u8>,
    /// Weekly trigger hour (8..18) chosen for the reminder.
    pub reminder_hour: Option<u8>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Generic action response envelope for touch/delete flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl PersonActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Lists everyone, most "due" first.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Items carry `display_name` with the fallback already applied.
#[flutter_rust_bridge::frb(sync)]
pub fn people_list() -> PeopleListResponse {
    let people = with_person_service(|service| service.list_people());
    match people {
        Ok(people) => {
            let message = if people.is_empty() {
                "No people yet.".to_string()
            } else {
                format!("Listed {} person(s).", people.len())
            };
            PeopleListResponse {
                items: people.into_iter().map(to_person_list_item).collect(),
                message,
            }
        }
        Err(err) => PeopleListResponse {
            items: Vec::new(),
            message: format!("people_list failed: {err}"),
        },
    }
}

/// Adds a person and schedules their weekly reminder in one submission,
/// mirroring the add-form flow.
///
/// A blank name is stored as absent, not as an empty string. Reminder
/// scheduling failure does not roll back the created person; the response
/// reports the partial outcome.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn person_remember(name: String) -> RememberResponse {
    let trimmed = name.trim();
    let stored_name = if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    };

    let person = match with_person_service(|service| service.create_person(stored_name)) {
        Ok(person) => person,
        Err(err) => {
            return RememberResponse {
                ok: false,
                person_id: None,
                reminder_id: None,
                reminder_weekday: None,
                reminder_hour: None,
                message: format!("person_remember failed: {err}"),
            };
        }
    };

    let scheduler = ReminderScheduler::new(LoggingNotificationGateway);
    match scheduler.schedule_reminder(&person) {
        Ok(request) => RememberResponse {
            ok: true,
            person_id: Some(person.uuid.to_string()),
            reminder_id: Some(request.id.to_string()),
            reminder_weekday: Some(request.trigger.weekday),
            reminder_hour: Some(request.trigger.hour),
            message: "Person remembered.".to_string(),
        },
        Err(err) => {
            warn!(
                "event=person_remember module=ffi status=partial person_id={} error={err}",
                person.uuid
            );
            RememberResponse {
                ok: true,
                person_id: Some(person.uuid.to_string()),
                reminder_id: None,
                reminder_weekday: None,
                reminder_hour: None,
                message: format!("Person remembered, reminder scheduling failed: {err}"),
            }
        }
    }
}

/// Marks a person as reached out to, moving them to the bottom of the list.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn person_touch(person_id: String) -> PersonActionResponse {
    let id = match parse_person_id(&person_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match with_person_service(|service| service.touch_person(id)) {
        Ok(()) => PersonActionResponse::success("Person touched."),
        Err(err) => PersonActionResponse::failure(format!("person_touch failed: {err}")),
    }
}

/// Permanently deletes a person. Repeated delete is a no-op.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn person_delete(person_id: String) -> PersonActionResponse {
    let id = match parse_person_id(&person_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match with_person_service(|service| service.delete_person(id)) {
        Ok(()) => PersonActionResponse::success("Person deleted."),
        Err(err) => PersonActionResponse::failure(format!("person_delete failed: {err}")),
    }
}

fn parse_person_id(raw: &str) -> Result<Uuid, PersonActionResponse> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| PersonActionResponse::failure(format!("invalid person id `{raw}`")))
}

fn resolve_people_db_path() -> PathBuf {
    PEOPLE_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("WEI_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(PEOPLE_DB_FILE_NAME)
        })
        .clone()
}

fn with_person_service<T>(
    f: impl FnOnce(&PersonService<SqlitePersonRepository<'_>>) -> wei_core::RepoResult<T>,
) -> Result<T, String> {
    let db_path = resolve_people_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("people DB open failed: {err}"))?;
    let repo = SqlitePersonRepository::try_new(&conn)
        .map_err(|err| format!("people repo init failed: {err}"))?;
    let service = PersonService::new(repo);
    f(&service).map_err(|err| err.to_string())
}

fn to_person_list_item(person: Person) -> PersonListItem {
    PersonListItem {
        person_id: person.uuid.to_string(),
        display_name: person
            .name
            .unwrap_or_else(|| MISSING_NAME_FALLBACK.to_string()),
        sort_order: person.sort_order,
    }
}
