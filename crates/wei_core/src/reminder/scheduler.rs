//! Weekly reach-out reminder scheduling.
//!
//! # Responsibility
//! - Build one-per-call notification requests with fixed copy and a random
//!   weekly trigger ("some day this week, during daytime").
//! - Submit requests through a `NotificationGateway` implementation.
//!
//! # Invariants
//! - Each call is stateless and independent: fresh request id, no
//!   de-duplication, no cancellation of prior requests for the same contact.
//! - Authorization outcome is logged only and never branches control flow; a
//!   denied request is still submitted and dropped by the host OS.
//! - Logging is metadata-only: stable person id, never free-text names.

use crate::model::person::Person;
use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Notification title shown for every reminder.
pub const REMINDER_TITLE: &str = "wei?";
/// Notification subtitle shown for every reminder.
pub const REMINDER_SUBTITLE: &str = "Surprise someone by sending a quick message!";

/// Weekday range for the random trigger: 1 (Sunday) inclusive to 7 exclusive.
pub const WEEKDAY_MIN: u8 = 1;
pub const WEEKDAY_MAX: u8 = 7;
/// Hour-of-day range for the random trigger: daytime, 8 inclusive to 18
/// exclusive.
pub const HOUR_MIN: u8 = 8;
pub const HOUR_MAX: u8 = 18;

pub type NotifyResult<T> = Result<T, NotifyError>;

/// Scheduling-layer error for gateway interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// Notification center rejected or failed the operation.
    Gateway(String),
}

impl Display for NotifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gateway(message) => write!(f, "notification gateway error: {message}"),
        }
    }
}

impl Error for NotifyError {}

/// Sound attached to a reminder. The app only ever uses the platform default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderSound {
    Default,
}

/// Fixed notification copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderContent {
    pub title: String,
    pub subtitle: String,
    pub sound: ReminderSound,
}

impl ReminderContent {
    /// The one copy this app ships: same title, subtitle and sound for every
    /// contact.
    pub fn fixed() -> Self {
        Self {
            title: REMINDER_TITLE.to_string(),
            subtitle: REMINDER_SUBTITLE.to_string(),
            sound: ReminderSound::Default,
        }
    }
}

/// Weekly recurring calendar trigger: fires every week on `weekday` at
/// `hour`, as opposed to a one-shot time-delay trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTrigger {
    /// 1..7, Sunday-based.
    pub weekday: u8,
    /// 8..18, local time.
    pub hour: u8,
}

/// One submission to the notification center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderRequest {
    /// Fresh random request identifier; never reused, never deduplicated.
    pub id: Uuid,
    pub content: ReminderContent,
    pub trigger: WeeklyTrigger,
}

/// Outcome of a notification permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    Granted,
    Denied,
}

/// Seam to the host OS notification center.
///
/// Core only derives parameters; the platform shell (or a logging fallback)
/// owns actual registration and delivery.
pub trait NotificationGateway {
    fn request_authorization(&self) -> NotifyResult<AuthorizationStatus>;
    fn add_request(&self, request: &ReminderRequest) -> NotifyResult<()>;
}

/// Gateway that records requests to the diagnostic log only.
///
/// Used by the CLI smoke probe and as the FFI default until the UI shell
/// wires a platform-backed gateway.
#[derive(Debug, Default)]
pub struct LoggingNotificationGateway;

impl NotificationGateway for LoggingNotificationGateway {
    fn request_authorization(&self) -> NotifyResult<AuthorizationStatus> {
        Ok(AuthorizationStatus::Granted)
    }

    fn add_request(&self, request: &ReminderRequest) -> NotifyResult<()> {
        info!(
            "event=notification_added module=reminder status=ok request_id={} weekday={} hour={}",
            request.id, request.trigger.weekday, request.trigger.hour
        );
        Ok(())
    }
}

/// Stateless scheduler for weekly reach-out reminders.
pub struct ReminderScheduler<G: NotificationGateway> {
    gateway: G,
}

impl<G: NotificationGateway> ReminderScheduler<G> {
    /// Creates a scheduler using the provided gateway implementation.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Schedules one weekly reminder for a freshly added contact.
    ///
    /// # Contract
    /// - Requests authorization first; the outcome is logged and otherwise
    ///   ignored.
    /// - Draws a random weekday in `[1,7)` and hour in `[8,18)`.
    /// - Submits with a fresh random request id and returns the submitted
    ///   request.
    ///
    /// # Errors
    /// - Only gateway submission failures; authorization denial is not an
    ///   error.
    pub fn schedule_reminder(&self, person: &Person) -> NotifyResult<ReminderRequest> {
        match self.gateway.request_authorization() {
            Ok(AuthorizationStatus::Granted) => {
                info!("event=notification_authorization module=reminder status=granted");
            }
            Ok(AuthorizationStatus::Denied) => {
                // Host OS will silently drop delivery; scheduling proceeds.
                warn!("event=notification_authorization module=reminder status=denied");
            }
            Err(err) => {
                warn!("event=notification_authorization module=reminder status=error error={err}");
            }
        }

        let request = build_request(&mut rand::rng());
        self.gateway.add_request(&request)?;

        info!(
            "event=reminder_scheduled module=reminder status=ok person_id={} request_id={} weekday={} hour={}",
            person.uuid, request.id, request.trigger.weekday, request.trigger.hour
        );

        Ok(request)
    }
}

fn build_request(rng: &mut impl Rng) -> ReminderRequest {
    ReminderRequest {
        id: Uuid::new_v4(),
        content: ReminderContent::fixed(),
        trigger: WeeklyTrigger {
            weekday: rng.random_range(WEEKDAY_MIN..WEEKDAY_MAX),
            hour: rng.random_range(HOUR_MIN..HOUR_MAX),
        },
    }
}
