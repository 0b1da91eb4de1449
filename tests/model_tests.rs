use campus_portal::models::{
    ContentStatus, Event, EventDecisionRequest, MembershipRequest, PublicUser, RequestStatus,
    Role, SubmitEventRequest, SubmitNoticeRequest, User,
};
use chrono::NaiveDate;
use uuid::Uuid;

// --- Enum Wire Forms ---

#[test]
fn roles_use_kebab_case_on_the_wire() {
    assert_eq!(
        serde_json::to_string(&Role::ClubCoordinator).unwrap(),
        "\"club-coordinator\""
    );
    assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");

    let parsed: Role = serde_json::from_str("\"club-coordinator\"").unwrap();
    assert_eq!(parsed, Role::ClubCoordinator);

    assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
    assert!("superuser".parse::<Role>().is_err());
}

#[test]
fn statuses_are_lowercase_on_the_wire() {
    assert_eq!(
        serde_json::to_string(&ContentStatus::Pending).unwrap(),
        "\"pending\""
    );
    assert_eq!(
        serde_json::to_string(&RequestStatus::Accepted).unwrap(),
        "\"accepted\""
    );

    let parsed: ContentStatus = serde_json::from_str("\"rejected\"").unwrap();
    assert_eq!(parsed, ContentStatus::Rejected);
    assert!("maybe".parse::<ContentStatus>().is_err());
}

#[test]
fn lifecycle_fields_default_to_pending() {
    assert_eq!(ContentStatus::default(), ContentStatus::Pending);
    assert_eq!(RequestStatus::default(), RequestStatus::Pending);
    assert_eq!(Role::default(), Role::Student);
}

// --- Credential Exclusion ---

#[test]
fn public_projection_carries_no_credential_fields() {
    let user = User {
        id: Uuid::new_v4(),
        name: "Alice".to_string(),
        email: "alice@campus.edu".to_string(),
        password_hash: "super-secret-argon2-hash".to_string(),
        role: Role::Student,
        club_affiliation: "none".to_string(),
        ..User::default()
    };

    let public: PublicUser = user.into();
    let json = serde_json::to_string(&public).unwrap();

    assert!(!json.contains("super-secret-argon2-hash"));
    assert!(!json.contains("password"));
    // Wire keys are camelCase.
    assert!(json.contains("clubAffiliation"));
    assert!(json.contains("registeredEvents"));
}

// --- Payload Shapes ---

#[test]
fn decision_payload_accepts_camel_case_keys() {
    let payload: EventDecisionRequest = serde_json::from_str(
        r#"{"eventId":"7f1a3c9e-0000-0000-0000-000000000001","status":"rejected","rejectionReason":"clash"}"#,
    )
    .unwrap();
    assert_eq!(payload.status, "rejected");
    assert_eq!(payload.rejection_reason.as_deref(), Some("clash"));

    // The reason is optional.
    let payload: EventDecisionRequest = serde_json::from_str(
        r#"{"eventId":"7f1a3c9e-0000-0000-0000-000000000001","status":"approved"}"#,
    )
    .unwrap();
    assert!(payload.rejection_reason.is_none());
}

#[test]
fn submit_event_optional_fields_may_be_omitted() {
    let payload: SubmitEventRequest = serde_json::from_str(
        r#"{"name":"Fest","description":"Annual","date":"2026-03-14","time":"18:00","location":"Hall"}"#,
    )
    .unwrap();
    assert!(payload.club_id.is_none());
    assert!(payload.is_admin_event.is_none());
    assert_eq!(payload.date, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
}

#[test]
fn update_payload_has_no_status_field_to_smuggle() {
    use campus_portal::models::UpdateEventRequest;

    // A client supplying a status key cannot influence the lifecycle: the
    // update payload simply has no such field, so the key is dropped.
    let payload: UpdateEventRequest = serde_json::from_str(
        r#"{"name":"Renamed","status":"approved"}"#,
    )
    .unwrap();
    assert_eq!(payload.name.as_deref(), Some("Renamed"));
    let back = serde_json::to_value(&payload).unwrap();
    assert!(back.get("status").is_none());
}

#[test]
fn notice_body_aliasing_prefers_content() {
    let both: SubmitNoticeRequest = serde_json::from_str(
        r#"{"title":"T","content":"from content","description":"from description"}"#,
    )
    .unwrap();
    assert_eq!(both.body().as_deref(), Some("from content"));

    let description_only: SubmitNoticeRequest =
        serde_json::from_str(r#"{"title":"T","description":"from description"}"#).unwrap();
    assert_eq!(description_only.body().as_deref(), Some("from description"));

    let neither: SubmitNoticeRequest = serde_json::from_str(r#"{"title":"T"}"#).unwrap();
    assert!(neither.body().is_none());
}

// --- Entity Wire Shapes ---

#[test]
fn event_serializes_camel_case_with_plain_date() {
    let event = Event {
        id: Uuid::new_v4(),
        name: "Fest".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        created_by: Uuid::new_v4(),
        ..Event::default()
    };

    let json: serde_json::Value = serde_json::to_value(&event).unwrap();
    assert_eq!(json["date"], serde_json::json!("2026-03-14"));
    assert_eq!(json["status"], serde_json::json!("pending"));
    assert!(json.get("createdBy").is_some());
    assert!(json.get("rejectionReason").is_some());
}

#[test]
fn membership_request_round_trips_through_json() {
    let request = MembershipRequest {
        id: Uuid::new_v4(),
        user: Uuid::new_v4(),
        status: RequestStatus::Pending,
        request_date: chrono::Utc::now(),
    };

    // The embedded list is stored as JSON, so the round trip must be exact.
    let json = serde_json::to_value(&request).unwrap();
    assert!(json.get("requestDate").is_some());
    let back: MembershipRequest = serde_json::from_value(json).unwrap();
    assert_eq!(back.id, request.id);
    assert_eq!(back.status, RequestStatus::Pending);
}
