use wei_core::{Person, PersonId};

#[test]
fn person_new_sets_defaults() {
    let before = wei_core::model::person::now_epoch_ms();
    let person = Person::new(Some("Alice".to_string()));
    let after = wei_core::model::person::now_epoch_ms();

    assert!(!person.uuid.is_nil());
    assert_eq!(person.name.as_deref(), Some("Alice"));
    assert!(person.sort_order >= before && person.sort_order <= after);
}

#[test]
fn person_name_may_be_absent() {
    let person = Person::new(None);
    assert_eq!(person.name, None);
}

#[test]
fn touch_resets_sort_order() {
    let mut person = Person::with_id(PersonId::new_v4(), Some("Bob".to_string()), 1_000);

    person.touch(2_000);
    assert_eq!(person.sort_order, 2_000);
}

#[test]
fn fresh_people_get_distinct_ids() {
    let first = Person::new(None);
    let second = Person::new(None);
    assert_ne!(first.uuid, second.uuid);
}

#[test]
fn person_serialization_uses_expected_wire_fields() {
    let id = PersonId::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let person = Person::with_id(id, Some("Alice".to_string()), 1_700_000_000_000);

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(
        json["uuid"],
        serde_json::json!("11111111-2222-4333-8444-555555555555")
    );
    assert_eq!(json["name"], serde_json::json!("Alice"));
    assert_eq!(json["sort_order"], serde_json::json!(1_700_000_000_000i64));

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}

#[test]
fn person_with_absent_name_serializes_as_null() {
    let person = Person::with_id(PersonId::new_v4(), None, 42);
    let json = serde_json::to_value(&person).unwrap();
    assert!(json["name"].is_null());
}
