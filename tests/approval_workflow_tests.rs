use campus_portal::{
    approval,
    auth::AuthUser,
    error::ApiError,
    models::{
        Club, ContentStatus, EventDecisionRequest, NoticeDecisionRequest, Role,
        SubmitEventRequest, SubmitNoticeRequest, UpdateEventRequest, UpdateNoticeRequest, User,
    },
    repository::{MemoryRepository, Repository},
};
use chrono::{NaiveDate, Utc};
use tokio::test;
use uuid::Uuid;

// --- Test Data Helpers ---

async fn seed_user(repo: &MemoryRepository, name: &str, email: &str, role: Role) -> AuthUser {
    let now = Utc::now();
    let user = repo
        .create_user(User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "argon2-hash-placeholder".to_string(),
            role,
            club_affiliation: "none".to_string(),
            created_at: now,
            updated_at: now,
            ..User::default()
        })
        .await
        .unwrap();
    AuthUser {
        id: user.id,
        name: user.name,
        email: user.email,
        role: user.role,
    }
}

async fn seed_club(repo: &MemoryRepository, name: &str, coordinator: &AuthUser) -> Club {
    let now = Utc::now();
    repo.create_club(Club {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: "a club".to_string(),
        coordinator: coordinator.id,
        members: vec![coordinator.id],
        membership_requests: Vec::new(),
        events: Vec::new(),
        notices: Vec::new(),
        created_at: now,
        updated_at: now,
    })
    .await
    .unwrap()
}

fn event_request(club_id: Option<Uuid>) -> SubmitEventRequest {
    SubmitEventRequest {
        name: "Fest".to_string(),
        description: "Annual fest".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        time: "18:00".to_string(),
        location: "Main Auditorium".to_string(),
        category: None,
        club_id,
        is_admin_event: None,
    }
}

fn notice_request(club_id: Option<Uuid>) -> SubmitNoticeRequest {
    SubmitNoticeRequest {
        title: "Fee deadline".to_string(),
        description: Some("Pay by Friday".to_string()),
        content: None,
        category: Some("academics".to_string()),
        due_date: None,
        club_id,
        is_admin_notice: None,
    }
}

// --- Event Submission ---

#[test]
async fn admin_event_without_club_is_approved_immediately() {
    let repo = MemoryRepository::new();
    let admin = seed_user(&repo, "Admin", "admin@campus.edu", Role::Admin).await;

    let event = approval::submit_event(&repo, &admin, event_request(None))
        .await
        .unwrap();

    assert_eq!(event.status, ContentStatus::Approved);
    assert_eq!(event.approved_by, Some(admin.id));
    assert!(event.club.is_none());
}

#[test]
async fn admin_event_with_club_is_linked_on_creation() {
    let repo = MemoryRepository::new();
    let admin = seed_user(&repo, "Admin", "admin@campus.edu", Role::Admin).await;
    let coord = seed_user(&repo, "Coord", "coord@campus.edu", Role::ClubCoordinator).await;
    let club = seed_club(&repo, "Chess Club", &coord).await;

    let event = approval::submit_event(&repo, &admin, event_request(Some(club.id)))
        .await
        .unwrap();

    let club = repo.get_club(club.id).await.unwrap().unwrap();
    assert_eq!(event.status, ContentStatus::Approved);
    assert_eq!(club.events, vec![event.id]);
}

#[test]
async fn coordinator_event_enters_pending_queue() {
    let repo = MemoryRepository::new();
    let coord = seed_user(&repo, "Coord", "coord@campus.edu", Role::ClubCoordinator).await;
    let club = seed_club(&repo, "Chess Club", &coord).await;

    let event = approval::submit_event(&repo, &coord, event_request(Some(club.id)))
        .await
        .unwrap();

    assert_eq!(event.status, ContentStatus::Pending);
    assert!(event.approved_by.is_none());
    // No linkage before the decision.
    let club = repo.get_club(club.id).await.unwrap().unwrap();
    assert!(club.events.is_empty());

    let pending = approval::pending_events(&repo).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].event.id, event.id);
    assert_eq!(pending[0].club_name.as_deref(), Some("Chess Club"));
    assert_eq!(pending[0].creator_email, "coord@campus.edu");
}

#[test]
async fn coordinator_cannot_submit_for_foreign_club() {
    let repo = MemoryRepository::new();
    let coord_x = seed_user(&repo, "X", "x@campus.edu", Role::ClubCoordinator).await;
    let coord_y = seed_user(&repo, "Y", "y@campus.edu", Role::ClubCoordinator).await;
    seed_club(&repo, "Club X", &coord_x).await;
    let club_y = seed_club(&repo, "Club Y", &coord_y).await;

    let err = approval::submit_event(&repo, &coord_x, event_request(Some(club_y.id)))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));
}

#[test]
async fn admin_flag_bypasses_the_queue_but_never_ownership() {
    let repo = MemoryRepository::new();
    let coord_x = seed_user(&repo, "X", "x@campus.edu", Role::ClubCoordinator).await;
    let coord_y = seed_user(&repo, "Y", "y@campus.edu", Role::ClubCoordinator).await;
    let club_x = seed_club(&repo, "Club X", &coord_x).await;
    let club_y = seed_club(&repo, "Club Y", &coord_y).await;

    // Flagged submission for the caller's own club skips the queue.
    let mut req = event_request(Some(club_x.id));
    req.is_admin_event = Some(true);
    let event = approval::submit_event(&repo, &coord_x, req).await.unwrap();
    assert_eq!(event.status, ContentStatus::Approved);
    let club_x = repo.get_club(club_x.id).await.unwrap().unwrap();
    assert_eq!(club_x.events, vec![event.id]);

    // The flag cannot smuggle content into a foreign club.
    let mut req = event_request(Some(club_y.id));
    req.is_admin_event = Some(true);
    let err = approval::submit_event(&repo, &coord_x, req).await.unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));
}

#[test]
async fn submit_event_with_unknown_club_fails_not_found() {
    let repo = MemoryRepository::new();
    let coord = seed_user(&repo, "Coord", "coord@campus.edu", Role::ClubCoordinator).await;

    let err = approval::submit_event(&repo, &coord, event_request(Some(Uuid::new_v4())))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

// --- Event Decisions ---

#[test]
async fn approval_links_event_into_club_exactly_once() {
    let repo = MemoryRepository::new();
    let admin = seed_user(&repo, "Admin", "admin@campus.edu", Role::Admin).await;
    let coord = seed_user(&repo, "Coord", "coord@campus.edu", Role::ClubCoordinator).await;
    let club = seed_club(&repo, "Chess Club", &coord).await;

    let event = approval::submit_event(&repo, &coord, event_request(Some(club.id)))
        .await
        .unwrap();

    let decision = EventDecisionRequest {
        event_id: event.id,
        status: "approved".to_string(),
        rejection_reason: None,
    };

    // Deciding twice must be idempotent on the club array.
    approval::decide_event(&repo, &admin, decision.clone())
        .await
        .unwrap();
    let decided = approval::decide_event(&repo, &admin, decision).await.unwrap();

    assert_eq!(decided.status, ContentStatus::Approved);
    assert_eq!(decided.approved_by, Some(admin.id));

    let club = repo.get_club(club.id).await.unwrap().unwrap();
    assert_eq!(
        club.events.iter().filter(|id| **id == event.id).count(),
        1
    );
}

#[test]
async fn rejection_stores_reason_and_approval_ignores_it() {
    let repo = MemoryRepository::new();
    let admin = seed_user(&repo, "Admin", "admin@campus.edu", Role::Admin).await;
    let coord = seed_user(&repo, "Coord", "coord@campus.edu", Role::ClubCoordinator).await;
    let club = seed_club(&repo, "Chess Club", &coord).await;

    let first = approval::submit_event(&repo, &coord, event_request(Some(club.id)))
        .await
        .unwrap();
    let rejected = approval::decide_event(
        &repo,
        &admin,
        EventDecisionRequest {
            event_id: first.id,
            status: "rejected".to_string(),
            rejection_reason: Some("Clashes with exams".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(rejected.status, ContentStatus::Rejected);
    assert_eq!(rejected.rejection_reason.as_deref(), Some("Clashes with exams"));
    // A rejected event never reaches the club array.
    let club_doc = repo.get_club(club.id).await.unwrap().unwrap();
    assert!(club_doc.events.is_empty());

    let second = approval::submit_event(&repo, &coord, event_request(Some(club.id)))
        .await
        .unwrap();
    let approved = approval::decide_event(
        &repo,
        &admin,
        EventDecisionRequest {
            event_id: second.id,
            status: "approved".to_string(),
            rejection_reason: Some("should be ignored".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(approved.status, ContentStatus::Approved);
    assert!(approved.rejection_reason.is_none());
}

#[test]
async fn decision_with_bad_status_fails_invalid_argument() {
    let repo = MemoryRepository::new();
    let admin = seed_user(&repo, "Admin", "admin@campus.edu", Role::Admin).await;

    let err = approval::decide_event(
        &repo,
        &admin,
        EventDecisionRequest {
            event_id: Uuid::new_v4(),
            status: "pending".to_string(),
            rejection_reason: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
}

#[test]
async fn decision_on_unknown_event_fails_not_found() {
    let repo = MemoryRepository::new();
    let admin = seed_user(&repo, "Admin", "admin@campus.edu", Role::Admin).await;

    let err = approval::decide_event(
        &repo,
        &admin,
        EventDecisionRequest {
            event_id: Uuid::new_v4(),
            status: "approved".to_string(),
            rejection_reason: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[test]
async fn club_array_only_ever_references_approved_events() {
    let repo = MemoryRepository::new();
    let admin = seed_user(&repo, "Admin", "admin@campus.edu", Role::Admin).await;
    let coord = seed_user(&repo, "Coord", "coord@campus.edu", Role::ClubCoordinator).await;
    let club = seed_club(&repo, "Chess Club", &coord).await;

    for status in ["approved", "rejected", "approved"] {
        let event = approval::submit_event(&repo, &coord, event_request(Some(club.id)))
            .await
            .unwrap();
        approval::decide_event(
            &repo,
            &admin,
            EventDecisionRequest {
                event_id: event.id,
                status: status.to_string(),
                rejection_reason: None,
            },
        )
        .await
        .unwrap();
    }

    let club = repo.get_club(club.id).await.unwrap().unwrap();
    assert_eq!(club.events.len(), 2);
    for event_id in &club.events {
        let event = repo.get_event(*event_id).await.unwrap().unwrap();
        assert_eq!(event.status, ContentStatus::Approved);
    }
}

// --- Event Edits ---

#[test]
async fn edit_of_approved_event_fails_invalid_state() {
    let repo = MemoryRepository::new();
    let admin = seed_user(&repo, "Admin", "admin@campus.edu", Role::Admin).await;
    let coord = seed_user(&repo, "Coord", "coord@campus.edu", Role::ClubCoordinator).await;
    let club = seed_club(&repo, "Chess Club", &coord).await;

    let event = approval::submit_event(&repo, &coord, event_request(Some(club.id)))
        .await
        .unwrap();
    approval::decide_event(
        &repo,
        &admin,
        EventDecisionRequest {
            event_id: event.id,
            status: "approved".to_string(),
            rejection_reason: None,
        },
    )
    .await
    .unwrap();

    let err = approval::update_event(
        &repo,
        &coord,
        event.id,
        UpdateEventRequest {
            name: Some("New name".to_string()),
            ..UpdateEventRequest::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidState(_)));
}

#[test]
async fn edit_of_rejected_event_requeues_it_as_pending() {
    let repo = MemoryRepository::new();
    let admin = seed_user(&repo, "Admin", "admin@campus.edu", Role::Admin).await;
    let coord = seed_user(&repo, "Coord", "coord@campus.edu", Role::ClubCoordinator).await;
    let club = seed_club(&repo, "Chess Club", &coord).await;

    let event = approval::submit_event(&repo, &coord, event_request(Some(club.id)))
        .await
        .unwrap();
    approval::decide_event(
        &repo,
        &admin,
        EventDecisionRequest {
            event_id: event.id,
            status: "rejected".to_string(),
            rejection_reason: Some("Too vague".to_string()),
        },
    )
    .await
    .unwrap();

    let updated = approval::update_event(
        &repo,
        &coord,
        event.id,
        UpdateEventRequest {
            description: Some("A much better description".to_string()),
            ..UpdateEventRequest::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.status, ContentStatus::Pending);
    assert_eq!(updated.description, "A much better description");
    // Untouched fields survive the partial update.
    assert_eq!(updated.name, "Fest");
}

#[test]
async fn edit_by_non_creator_fails_forbidden() {
    let repo = MemoryRepository::new();
    let coord = seed_user(&repo, "Coord", "coord@campus.edu", Role::ClubCoordinator).await;
    let other = seed_user(&repo, "Other", "other@campus.edu", Role::ClubCoordinator).await;
    let club = seed_club(&repo, "Chess Club", &coord).await;

    let event = approval::submit_event(&repo, &coord, event_request(Some(club.id)))
        .await
        .unwrap();

    let err = approval::update_event(
        &repo,
        &other,
        event.id,
        UpdateEventRequest::default(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));
}

// --- Notices ---

#[test]
async fn notice_body_accepts_either_alias_and_content_wins() {
    let repo = MemoryRepository::new();
    let coord = seed_user(&repo, "Coord", "coord@campus.edu", Role::ClubCoordinator).await;
    let club = seed_club(&repo, "Chess Club", &coord).await;

    let mut req = notice_request(Some(club.id));
    req.content = Some("content body".to_string());
    req.description = Some("description body".to_string());
    let notice = approval::submit_notice(&repo, &coord, req).await.unwrap();
    assert_eq!(notice.description, "content body");

    let notice = approval::submit_notice(&repo, &coord, notice_request(Some(club.id)))
        .await
        .unwrap();
    assert_eq!(notice.description, "Pay by Friday");

    let mut req = notice_request(Some(club.id));
    req.description = None;
    let err = approval::submit_notice(&repo, &coord, req).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
}

#[test]
async fn admin_notice_flag_keeps_notice_clubless() {
    let repo = MemoryRepository::new();
    let admin = seed_user(&repo, "Admin", "admin@campus.edu", Role::Admin).await;
    let coord = seed_user(&repo, "Coord", "coord@campus.edu", Role::ClubCoordinator).await;
    let club = seed_club(&repo, "Chess Club", &coord).await;

    let mut req = notice_request(Some(club.id));
    req.is_admin_notice = Some(true);
    let notice = approval::submit_notice(&repo, &admin, req).await.unwrap();

    assert_eq!(notice.status, ContentStatus::Approved);
    assert!(notice.club.is_none());
    let club = repo.get_club(club.id).await.unwrap().unwrap();
    assert!(club.notices.is_empty());
}

#[test]
async fn notice_approval_and_removal_keep_club_array_consistent() {
    let repo = MemoryRepository::new();
    let admin = seed_user(&repo, "Admin", "admin@campus.edu", Role::Admin).await;
    let coord = seed_user(&repo, "Coord", "coord@campus.edu", Role::ClubCoordinator).await;
    let club = seed_club(&repo, "Chess Club", &coord).await;

    let notice = approval::submit_notice(&repo, &coord, notice_request(Some(club.id)))
        .await
        .unwrap();
    approval::decide_notice(
        &repo,
        &admin,
        NoticeDecisionRequest {
            notice_id: notice.id,
            status: "approved".to_string(),
            rejection_reason: None,
        },
    )
    .await
    .unwrap();

    let club_doc = repo.get_club(club.id).await.unwrap().unwrap();
    assert_eq!(club_doc.notices, vec![notice.id]);

    approval::remove_notice(&repo, notice.id).await.unwrap();
    let club_doc = repo.get_club(club.id).await.unwrap().unwrap();
    assert!(club_doc.notices.is_empty());

    let err = approval::remove_notice(&repo, notice.id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[test]
async fn edited_notice_is_forced_back_to_pending() {
    let repo = MemoryRepository::new();
    let coord = seed_user(&repo, "Coord", "coord@campus.edu", Role::ClubCoordinator).await;
    let club = seed_club(&repo, "Chess Club", &coord).await;

    let notice = approval::submit_notice(&repo, &coord, notice_request(Some(club.id)))
        .await
        .unwrap();

    let updated = approval::update_notice(
        &repo,
        &coord,
        notice.id,
        UpdateNoticeRequest {
            content: Some("updated via content alias".to_string()),
            ..UpdateNoticeRequest::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.status, ContentStatus::Pending);
    assert_eq!(updated.description, "updated via content alias");
}

// --- Query Surfaces ---

#[test]
async fn approved_event_feed_is_date_ascending_and_filtered() {
    let repo = MemoryRepository::new();
    let admin = seed_user(&repo, "Admin", "admin@campus.edu", Role::Admin).await;
    let coord = seed_user(&repo, "Coord", "coord@campus.edu", Role::ClubCoordinator).await;
    let club = seed_club(&repo, "Chess Club", &coord).await;

    let mut later = event_request(None);
    later.date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    approval::submit_event(&repo, &admin, later).await.unwrap();

    let mut earlier = event_request(None);
    earlier.date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    approval::submit_event(&repo, &admin, earlier).await.unwrap();

    // A pending submission must not surface in the public feed.
    approval::submit_event(&repo, &coord, event_request(Some(club.id)))
        .await
        .unwrap();

    let feed = approval::approved_events(&repo).await.unwrap();
    assert_eq!(feed.len(), 2);
    assert!(feed[0].date <= feed[1].date);
    assert!(feed.iter().all(|e| e.status == ContentStatus::Approved));
}
