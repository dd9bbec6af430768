use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use wei_core::{
    AuthorizationStatus, LoggingNotificationGateway, NotificationGateway, NotifyError,
    NotifyResult, Person, ReminderRequest, ReminderScheduler, ReminderSound,
};

#[derive(Clone)]
struct RecordingGateway {
    requests: Rc<RefCell<Vec<ReminderRequest>>>,
    authorization: NotifyResult<AuthorizationStatus>,
    fail_add: bool,
}

impl RecordingGateway {
    fn granting() -> Self {
        Self {
            requests: Rc::new(RefCell::new(Vec::new())),
            authorization: Ok(AuthorizationStatus::Granted),
            fail_add: false,
        }
    }

    fn denying() -> Self {
        Self {
            authorization: Ok(AuthorizationStatus::Denied),
            ..Self::granting()
        }
    }

    fn failing_submission() -> Self {
        Self {
            fail_add: true,
            ..Self::granting()
        }
    }

    fn recorded(&self) -> Vec<ReminderRequest> {
        self.requests.borrow().clone()
    }
}

impl NotificationGateway for RecordingGateway {
    fn request_authorization(&self) -> NotifyResult<AuthorizationStatus> {
        self.authorization.clone()
    }

    fn add_request(&self, request: &ReminderRequest) -> NotifyResult<()> {
        if self.fail_add {
            return Err(NotifyError::Gateway("notification center unavailable".into()));
        }
        self.requests.borrow_mut().push(request.clone());
        Ok(())
    }
}

#[test]
fn schedule_reminder_submits_exactly_one_request() {
    let gateway = RecordingGateway::granting();
    let scheduler = ReminderScheduler::new(gateway.clone());
    let alice = Person::new(Some("Alice".to_string()));

    let request = scheduler.schedule_reminder(&alice).unwrap();

    let recorded = gateway.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0], request);
}

#[test]
fn two_calls_produce_two_independent_requests() {
    let gateway = RecordingGateway::granting();
    let scheduler = ReminderScheduler::new(gateway.clone());
    let alice = Person::new(Some("Alice".to_string()));

    let first = scheduler.schedule_reminder(&alice).unwrap();
    let second = scheduler.schedule_reminder(&alice).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(gateway.recorded().len(), 2);
}

#[test]
fn request_ids_stay_unique_across_many_calls() {
    let gateway = RecordingGateway::granting();
    let scheduler = ReminderScheduler::new(gateway.clone());
    let person = Person::new(None);

    let mut ids = HashSet::new();
    for _ in 0..50 {
        let request = scheduler.schedule_reminder(&person).unwrap();
        assert!(ids.insert(request.id), "request id reused: {}", request.id);
    }
}

#[test]
fn trigger_stays_within_weekday_and_daytime_ranges() {
    let gateway = RecordingGateway::granting();
    let scheduler = ReminderScheduler::new(gateway.clone());
    let person = Person::new(Some("Bob".to_string()));

    for _ in 0..100 {
        let request = scheduler.schedule_reminder(&person).unwrap();
        assert!((1..7).contains(&request.trigger.weekday));
        assert!((8..18).contains(&request.trigger.hour));
    }
}

#[test]
fn content_copy_is_fixed() {
    let gateway = RecordingGateway::granting();
    let scheduler = ReminderScheduler::new(gateway);
    let person = Person::new(Some("Carol".to_string()));

    let request = scheduler.schedule_reminder(&person).unwrap();
    assert_eq!(request.content.title, "wei?");
    assert_eq!(
        request.content.subtitle,
        "Surprise someone by sending a quick message!"
    );
    assert_eq!(request.content.sound, ReminderSound::Default);
}

#[test]
fn denied_authorization_does_not_block_scheduling() {
    let gateway = RecordingGateway::denying();
    let scheduler = ReminderScheduler::new(gateway.clone());
    let person = Person::new(Some("Dave".to_string()));

    scheduler.schedule_reminder(&person).unwrap();
    assert_eq!(gateway.recorded().len(), 1);
}

#[test]
fn failed_authorization_probe_does_not_block_scheduling() {
    let gateway = RecordingGateway {
        authorization: Err(NotifyError::Gateway("permission prompt crashed".into())),
        ..RecordingGateway::granting()
    };
    let scheduler = ReminderScheduler::new(gateway.clone());
    let person = Person::new(None);

    scheduler.schedule_reminder(&person).unwrap();
    assert_eq!(gateway.recorded().len(), 1);
}

#[test]
fn gateway_submission_failure_propagates() {
    let gateway = RecordingGateway::failing_submission();
    let scheduler = ReminderScheduler::new(gateway.clone());
    let person = Person::new(Some("Eve".to_string()));

    let err = scheduler.schedule_reminder(&person).unwrap_err();
    assert!(matches!(err, NotifyError::Gateway(_)));
    assert!(gateway.recorded().is_empty());
}

#[test]
fn logging_gateway_accepts_requests() {
    let scheduler = ReminderScheduler::new(LoggingNotificationGateway);
    let person = Person::new(Some("Frank".to_string()));

    let request = scheduler.schedule_reminder(&person).unwrap();
    assert!(!request.id.is_nil());
}
