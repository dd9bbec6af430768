//! Person repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over canonical `people` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `list_people` orders by `sort_order ASC`; insertion order breaks ties
//!   so same-millisecond creates keep creation order.
//! - `touch_person` reports a missing row as `NotFound`; `delete_person` is
//!   idempotent and treats a missing row as success.
//! - Constructors reject connections whose schema was not migrated.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::person::{Person, PersonId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const PERSON_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    sort_order
FROM people";

const REQUIRED_COLUMNS: &[&str] = &["uuid", "name", "sort_order"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for person persistence and lookup operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(PersonId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "person not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted person data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` does not exist")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` does not exist")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for people-list CRUD operations.
pub trait PersonRepository {
    fn create_person(&self, person: &Person) -> RepoResult<PersonId>;
    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>>;
    fn list_people(&self) -> RepoResult<Vec<Person>>;
    fn touch_person(&self, id: PersonId, sort_order: i64) -> RepoResult<()>;
    fn delete_person(&self, id: PersonId) -> RepoResult<()>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Wraps a connection after verifying its schema is usable.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the `people`
    ///   schema is incomplete.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'people'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(RepoError::MissingRequiredTable("people"));
        }

        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('people');")?;
        let mut rows = stmt.query([])?;
        let mut present = Vec::new();
        while let Some(row) = rows.next()? {
            present.push(row.get::<_, String>(0)?);
        }
        for column in REQUIRED_COLUMNS.iter().copied() {
            if !present.iter().any(|name| name.as_str() == column) {
                return Err(RepoError::MissingRequiredColumn {
                    table: "people",
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn create_person(&self, person: &Person) -> RepoResult<PersonId> {
        self.conn.execute(
            "INSERT INTO people (uuid, name, sort_order) VALUES (?1, ?2, ?3);",
            params![
                person.uuid.to_string(),
                person.name.as_deref(),
                person.sort_order,
            ],
        )?;

        Ok(person.uuid)
    }

    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_person_row(row)?));
        }

        Ok(None)
    }

    fn list_people(&self) -> RepoResult<Vec<Person>> {
        // rowid tiebreak keeps insertion order for same-millisecond creates.
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} ORDER BY sort_order ASC, rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut people = Vec::new();

        while let Some(row) = rows.next()? {
            people.push(parse_person_row(row)?);
        }

        Ok(people)
    }

    fn touch_person(&self, id: PersonId, sort_order: i64) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE people SET sort_order = ?1 WHERE uuid = ?2;",
            params![sort_order, id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_person(&self, id: PersonId) -> RepoResult<()> {
        // Hard delete, no tombstone. Zero affected rows is not an error so
        // a repeated swipe-delete stays a no-op.
        self.conn
            .execute("DELETE FROM people WHERE uuid = ?1;", [id.to_string()])?;

        Ok(())
    }
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<Person> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in people.uuid"))
    })?;

    Ok(Person {
        uuid,
        name: row.get("name")?,
        sort_order: row.get("sort_order")?,
    })
}
