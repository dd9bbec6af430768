//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `wei_core` wiring independently
//!   from the mobile UI runtime.
//! - Keep output deterministic for quick local sanity checks.

use wei_core::db::open_db_in_memory;
use wei_core::{
    LoggingNotificationGateway, PersonService, ReminderScheduler, SqlitePersonRepository,
};

fn main() {
    println!("wei_core ping={}", wei_core::ping());
    println!("wei_core version={}", wei_core::core_version());

    // Exercise the full create/touch/list/schedule flow against a throwaway
    // in-memory database.
    if let Err(err) = run_smoke() {
        eprintln!("smoke failed: {err}");
        std::process::exit(1);
    }
}

fn run_smoke() -> Result<(), String> {
    let conn = open_db_in_memory().map_err(|err| err.to_string())?;
    let repo = SqlitePersonRepository::try_new(&conn).map_err(|err| err.to_string())?;
    let service = PersonService::new(repo);

    let alice = service
        .create_person(Some("Alice".to_string()))
        .map_err(|err| err.to_string())?;
    service
        .create_person(Some("Bob".to_string()))
        .map_err(|err| err.to_string())?;
    service
        .touch_person(alice.uuid)
        .map_err(|err| err.to_string())?;

    let scheduler = ReminderScheduler::new(LoggingNotificationGateway);
    let request = scheduler
        .schedule_reminder(&alice)
        .map_err(|err| err.to_string())?;

    println!("people count={}", service.list_people().map_err(|err| err.to_string())?.len());
    println!(
        "reminder weekday={} hour={}",
        request.trigger.weekday, request.trigger.hour
    );
    Ok(())
}
