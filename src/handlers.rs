use crate::{
    AppState, approval,
    auth::{self, AuthUser, require_role},
    error::{ApiError, ApiResult},
    membership,
    models::{
        AuthResponse, BookmarksResponse, BookmarksView, ChangeRoleRequest, ClubResponse,
        ClubsResponse, ContentStatus, CreateClubRequest, EventDecisionRequest, EventResponse,
        EventsResponse, LoginRequest, MemberProfile, MembershipRequestsResponse, MessageResponse,
        MyClubEntry, MyClubsResponse, NoticeDecisionRequest, NoticeResponse, NoticesResponse,
        PendingEventsResponse, PendingNoticesResponse, PublicUser, PushSubscription,
        RegisterRequest, RespondMembershipRequest, Role, SubmitEventRequest, SubmitNoticeRequest,
        SubscribeRequest, SubscriptionsResponse, UnsubscribeRequest, UpdateAffiliationRequest,
        UpdateClubRequest, UpdateEventRequest, UpdateNoticeRequest, User, UserResponse,
        UsersResponse,
    },
    repository::Repository,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

// --- Auth Handlers ---

/// register_user
///
/// [Public Route] Self-service registration. New accounts always start as
/// `student`; the password is hashed before it reaches the repository.
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registered", body = AuthResponse),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    if state.repo.get_user_by_email(&payload.email).await?.is_some() {
        return Err(ApiError::Conflict(
            "User with email already exists".to_string(),
        ));
    }

    let password_hash = auth::hash_password(&payload.password).map_err(ApiError::internal)?;

    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        name: payload.name,
        email: payload.email,
        password_hash,
        role: Role::Student,
        club_affiliation: "none".to_string(),
        created_at: now,
        updated_at: now,
        ..User::default()
    };

    let user = state.repo.create_user(user).await?;
    let access_token = auth::generate_token(&user, &state.config)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            user: user.into(),
            access_token,
        }),
    ))
}

/// login_user
///
/// [Public Route] Verifies credentials and issues a fresh access token.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 404, description = "Unknown user")
    )
)]
pub async fn login_user(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let user = state
        .repo
        .get_user_by_email(&payload.email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let valid = auth::verify_password(&payload.password, &user.password_hash)
        .map_err(ApiError::internal)?;
    if !valid {
        return Err(ApiError::Unauthenticated("Invalid credentials".to_string()));
    }

    let access_token = auth::generate_token(&user, &state.config)?;

    Ok(Json(AuthResponse {
        success: true,
        user: user.into(),
        access_token,
    }))
}

/// get_me
///
/// [Authenticated Route] The caller's full public profile, collections
/// included.
#[utoipa::path(
    get,
    path = "/me",
    responses((status = 200, description = "Profile", body = UserResponse))
)]
pub async fn get_me(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<UserResponse>> {
    let record = state
        .repo
        .get_user(user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    Ok(Json(UserResponse {
        success: true,
        user: record.into(),
    }))
}

/// delete_me
///
/// [Authenticated Route] Self-service account removal. Deletes the user
/// document only; references held elsewhere become dangling ids.
#[utoipa::path(
    delete,
    path = "/me",
    responses((status = 200, description = "Deleted", body = MessageResponse))
)]
pub async fn delete_me(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<MessageResponse>> {
    if !state.repo.delete_user(user.id).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }
    Ok(Json(MessageResponse::ok("User deleted successfully")))
}

// --- Public Discovery Handlers ---

/// get_events
///
/// [Public Route] The discovery feed: approved events only, date ascending.
#[utoipa::path(
    get,
    path = "/events",
    responses((status = 200, description = "Approved events", body = EventsResponse))
)]
pub async fn get_events(State(state): State<AppState>) -> ApiResult<Json<EventsResponse>> {
    let events = approval::approved_events(&*state.repo).await?;
    Ok(Json(EventsResponse {
        success: true,
        count: events.len(),
        events,
    }))
}

/// get_notices
///
/// [Public Route] Approved notices, newest first.
#[utoipa::path(
    get,
    path = "/notices",
    responses((status = 200, description = "Approved notices", body = NoticesResponse))
)]
pub async fn get_notices(State(state): State<AppState>) -> ApiResult<Json<NoticesResponse>> {
    let notices = approval::approved_notices(&*state.repo).await?;
    Ok(Json(NoticesResponse {
        success: true,
        count: notices.len(),
        notices,
    }))
}

/// get_clubs
///
/// [Public Route] All clubs, rosters and request queues stripped.
#[utoipa::path(
    get,
    path = "/clubs",
    responses((status = 200, description = "Clubs", body = ClubsResponse))
)]
pub async fn get_clubs(State(state): State<AppState>) -> ApiResult<Json<ClubsResponse>> {
    let clubs = state.repo.get_clubs().await?;
    Ok(Json(ClubsResponse {
        success: true,
        count: clubs.len(),
        clubs: clubs.into_iter().map(Into::into).collect(),
    }))
}

// --- Student Engagement Handlers ---

/// register_for_event
///
/// [Authenticated Route] Registers the caller as a participant of an approved
/// event. Both reference writes are set-adds, so repeating the call cannot
/// duplicate either side, but a repeat is still reported as a conflict.
#[utoipa::path(
    post,
    path = "/events/{id}/register",
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Registered", body = MessageResponse),
        (status = 400, description = "Already registered"),
        (status = 404, description = "Not found or not approved")
    )
)]
pub async fn register_for_event(
    user: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let event = state
        .repo
        .get_event(event_id)
        .await?
        .filter(|e| e.status == ContentStatus::Approved)
        .ok_or_else(|| ApiError::NotFound("Event not found or not approved yet".to_string()))?;

    if event.participants.contains(&user.id) {
        return Err(ApiError::AlreadyMember(
            "You are already registered for this event".to_string(),
        ));
    }

    state.repo.add_event_participant(event_id, user.id).await?;
    state.repo.add_registered_event(user.id, event_id).await?;

    Ok(Json(MessageResponse::ok(
        "Successfully registered for the event",
    )))
}

/// save_notice
///
/// [Authenticated Route] Adds an approved notice to the caller's saved set.
#[utoipa::path(
    post,
    path = "/notices/{id}/save",
    params(("id" = Uuid, Path, description = "Notice ID")),
    responses(
        (status = 200, description = "Saved", body = MessageResponse),
        (status = 404, description = "Not found or not approved")
    )
)]
pub async fn save_notice(
    user: AuthUser,
    State(state): State<AppState>,
    Path(notice_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .repo
        .get_notice(notice_id)
        .await?
        .filter(|n| n.status == ContentStatus::Approved)
        .ok_or_else(|| ApiError::NotFound("Notice not found or not approved yet".to_string()))?;

    state.repo.add_saved_notice(user.id, notice_id).await?;
    Ok(Json(MessageResponse::ok("Notice saved successfully")))
}

/// bookmark_event
///
/// [Authenticated Route] Adds an approved event to the caller's bookmarks.
#[utoipa::path(
    post,
    path = "/events/{id}/bookmark",
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Bookmarked", body = MessageResponse),
        (status = 404, description = "Not found or not approved")
    )
)]
pub async fn bookmark_event(
    user: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .repo
        .get_event(event_id)
        .await?
        .filter(|e| e.status == ContentStatus::Approved)
        .ok_or_else(|| ApiError::NotFound("Event not found or not approved yet".to_string()))?;

    state.repo.add_event_bookmark(user.id, event_id).await?;
    Ok(Json(MessageResponse::ok("Event bookmarked successfully")))
}

/// bookmark_notice
///
/// [Authenticated Route] Adds an approved notice to the caller's bookmarks.
#[utoipa::path(
    post,
    path = "/notices/{id}/bookmark",
    params(("id" = Uuid, Path, description = "Notice ID")),
    responses(
        (status = 200, description = "Bookmarked", body = MessageResponse),
        (status = 404, description = "Not found or not approved")
    )
)]
pub async fn bookmark_notice(
    user: AuthUser,
    State(state): State<AppState>,
    Path(notice_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .repo
        .get_notice(notice_id)
        .await?
        .filter(|n| n.status == ContentStatus::Approved)
        .ok_or_else(|| ApiError::NotFound("Notice not found or not approved yet".to_string()))?;

    state.repo.add_notice_bookmark(user.id, notice_id).await?;
    Ok(Json(MessageResponse::ok("Notice bookmarked successfully")))
}

/// request_club_membership
///
/// [Authenticated Route] Files a join request for the caller.
#[utoipa::path(
    post,
    path = "/clubs/{id}/join",
    params(("id" = Uuid, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Request filed", body = MessageResponse),
        (status = 400, description = "Already a member or pending request"),
        (status = 404, description = "Club not found")
    )
)]
pub async fn request_club_membership(
    user: AuthUser,
    State(state): State<AppState>,
    Path(club_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    membership::request_membership(&*state.repo, &user, club_id).await?;
    Ok(Json(MessageResponse::ok(
        "Club membership request sent successfully",
    )))
}

/// get_my_clubs
///
/// [Authenticated Route] The caller's club memberships as summaries.
#[utoipa::path(
    get,
    path = "/me/clubs",
    responses((status = 200, description = "My clubs", body = ClubsResponse))
)]
pub async fn get_my_clubs(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<ClubsResponse>> {
    let record = state
        .repo
        .get_user(user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let mut clubs = Vec::new();
    for club_id in record.club_memberships {
        if let Some(club) = state.repo.get_club(club_id).await? {
            clubs.push(club.into());
        }
    }

    Ok(Json(ClubsResponse {
        success: true,
        count: clubs.len(),
        clubs,
    }))
}

/// get_my_events
///
/// [Authenticated Route] The caller's registered events, filtered to
/// approved content.
#[utoipa::path(
    get,
    path = "/me/events",
    responses((status = 200, description = "My events", body = EventsResponse))
)]
pub async fn get_my_events(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<EventsResponse>> {
    let record = state
        .repo
        .get_user(user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let events: Vec<_> = state
        .repo
        .get_events_by_ids(&record.registered_events)
        .await?
        .into_iter()
        .filter(|e| e.status == ContentStatus::Approved)
        .collect();

    Ok(Json(EventsResponse {
        success: true,
        count: events.len(),
        events,
    }))
}

/// get_my_notices
///
/// [Authenticated Route] The caller's saved notices, approved only.
#[utoipa::path(
    get,
    path = "/me/notices",
    responses((status = 200, description = "My notices", body = NoticesResponse))
)]
pub async fn get_my_notices(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<NoticesResponse>> {
    let record = state
        .repo
        .get_user(user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let notices: Vec<_> = state
        .repo
        .get_notices_by_ids(&record.saved_notices)
        .await?
        .into_iter()
        .filter(|n| n.status == ContentStatus::Approved)
        .collect();

    Ok(Json(NoticesResponse {
        success: true,
        count: notices.len(),
        notices,
    }))
}

/// get_my_bookmarks
///
/// [Authenticated Route] The caller's bookmarked events and notices,
/// approved only; dangling references are dropped silently.
#[utoipa::path(
    get,
    path = "/me/bookmarks",
    responses((status = 200, description = "My bookmarks", body = BookmarksResponse))
)]
pub async fn get_my_bookmarks(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<BookmarksResponse>> {
    let record = state
        .repo
        .get_user(user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let events = state
        .repo
        .get_events_by_ids(&record.bookmarks.events)
        .await?
        .into_iter()
        .filter(|e| e.status == ContentStatus::Approved)
        .collect();
    let notices = state
        .repo
        .get_notices_by_ids(&record.bookmarks.notices)
        .await?
        .into_iter()
        .filter(|n| n.status == ContentStatus::Approved)
        .collect();

    Ok(Json(BookmarksResponse {
        success: true,
        bookmarks: BookmarksView { events, notices },
    }))
}

// --- Push Subscription Handlers ---

/// subscribe_push
///
/// [Authenticated Route] Registers a web-push subscription. Upsert keyed by
/// endpoint, so re-subscribing from the same browser replaces the keys.
#[utoipa::path(
    post,
    path = "/push/subscribe",
    request_body = SubscribeRequest,
    responses(
        (status = 200, description = "Subscribed", body = MessageResponse),
        (status = 400, description = "Invalid subscription object")
    )
)]
pub async fn subscribe_push(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<SubscribeRequest>,
) -> ApiResult<Json<MessageResponse>> {
    if payload.endpoint.is_empty() {
        return Err(ApiError::InvalidArgument(
            "Invalid subscription object".to_string(),
        ));
    }

    state
        .repo
        .add_subscription(PushSubscription {
            endpoint: payload.endpoint,
            p256dh: payload.keys.p256dh,
            auth: payload.keys.auth,
            created_at: Utc::now(),
        })
        .await?;

    Ok(Json(MessageResponse::ok("Subscription added successfully")))
}

/// unsubscribe_push
///
/// [Authenticated Route] Removes a web-push subscription by endpoint.
#[utoipa::path(
    delete,
    path = "/push/subscribe",
    request_body = UnsubscribeRequest,
    responses(
        (status = 200, description = "Unsubscribed", body = MessageResponse),
        (status = 404, description = "Unknown endpoint")
    )
)]
pub async fn unsubscribe_push(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<UnsubscribeRequest>,
) -> ApiResult<Json<MessageResponse>> {
    if !state.repo.remove_subscription(&payload.endpoint).await? {
        return Err(ApiError::NotFound("Subscription not found".to_string()));
    }
    Ok(Json(MessageResponse::ok(
        "Subscription removed successfully",
    )))
}

// --- Coordinator Handlers ---

/// coordinator_submit_event
///
/// [Coordinator Route] Submits an event for the caller's club. The workflow
/// enforces club existence and ownership; the created event waits in the
/// pending queue (unless the caller is an admin using this route).
#[utoipa::path(
    post,
    path = "/coordinator/events",
    request_body = SubmitEventRequest,
    responses(
        (status = 201, description = "Submitted for approval", body = EventResponse),
        (status = 403, description = "Not the club's coordinator"),
        (status = 404, description = "Club not found")
    )
)]
pub async fn coordinator_submit_event(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<SubmitEventRequest>,
) -> ApiResult<(StatusCode, Json<EventResponse>)> {
    require_role(&user, Role::ClubCoordinator)?;
    let event = approval::submit_event(&*state.repo, &user, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(EventResponse {
            success: true,
            event,
        }),
    ))
}

/// coordinator_update_event
///
/// [Coordinator Route] Edits one of the caller's own pending/rejected events;
/// the edit always re-enters the approval queue.
#[utoipa::path(
    put,
    path = "/coordinator/events/{id}",
    params(("id" = Uuid, Path, description = "Event ID")),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Updated and re-queued", body = EventResponse),
        (status = 400, description = "Event already approved"),
        (status = 403, description = "Not the creator"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn coordinator_update_event(
    user: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<UpdateEventRequest>,
) -> ApiResult<Json<EventResponse>> {
    require_role(&user, Role::ClubCoordinator)?;
    let event = approval::update_event(&*state.repo, &user, event_id, payload).await?;
    Ok(Json(EventResponse {
        success: true,
        event,
    }))
}

/// coordinator_club_events
///
/// [Coordinator Route] Lists a club's events of every status for its
/// coordinator.
#[utoipa::path(
    get,
    path = "/coordinator/clubs/{id}/events",
    params(("id" = Uuid, Path, description = "Club ID")),
    responses((status = 200, description = "Club events", body = EventsResponse))
)]
pub async fn coordinator_club_events(
    user: AuthUser,
    State(state): State<AppState>,
    Path(club_id): Path<Uuid>,
) -> ApiResult<Json<EventsResponse>> {
    require_role(&user, Role::ClubCoordinator)?;
    let events = approval::club_events(&*state.repo, &user, club_id).await?;
    Ok(Json(EventsResponse {
        success: true,
        count: events.len(),
        events,
    }))
}

/// coordinator_submit_notice
///
/// [Coordinator Route] Submits a notice for the caller's club.
#[utoipa::path(
    post,
    path = "/coordinator/notices",
    request_body = SubmitNoticeRequest,
    responses(
        (status = 201, description = "Submitted for approval", body = NoticeResponse),
        (status = 403, description = "Not the club's coordinator"),
        (status = 404, description = "Club not found")
    )
)]
pub async fn coordinator_submit_notice(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<SubmitNoticeRequest>,
) -> ApiResult<(StatusCode, Json<NoticeResponse>)> {
    require_role(&user, Role::ClubCoordinator)?;
    let notice = approval::submit_notice(&*state.repo, &user, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(NoticeResponse {
            success: true,
            notice,
        }),
    ))
}

/// coordinator_update_notice
///
/// [Coordinator Route] Edits one of the caller's own pending/rejected
/// notices; the edit always re-enters the approval queue.
#[utoipa::path(
    put,
    path = "/coordinator/notices/{id}",
    params(("id" = Uuid, Path, description = "Notice ID")),
    request_body = UpdateNoticeRequest,
    responses(
        (status = 200, description = "Updated and re-queued", body = NoticeResponse),
        (status = 400, description = "Notice already approved"),
        (status = 403, description = "Not the creator"),
        (status = 404, description = "Notice not found")
    )
)]
pub async fn coordinator_update_notice(
    user: AuthUser,
    State(state): State<AppState>,
    Path(notice_id): Path<Uuid>,
    Json(payload): Json<UpdateNoticeRequest>,
) -> ApiResult<Json<NoticeResponse>> {
    require_role(&user, Role::ClubCoordinator)?;
    let notice = approval::update_notice(&*state.repo, &user, notice_id, payload).await?;
    Ok(Json(NoticeResponse {
        success: true,
        notice,
    }))
}

/// coordinator_club_notices
///
/// [Coordinator Route] Lists a club's notices of every status for its
/// coordinator.
#[utoipa::path(
    get,
    path = "/coordinator/clubs/{id}/notices",
    params(("id" = Uuid, Path, description = "Club ID")),
    responses((status = 200, description = "Club notices", body = NoticesResponse))
)]
pub async fn coordinator_club_notices(
    user: AuthUser,
    State(state): State<AppState>,
    Path(club_id): Path<Uuid>,
) -> ApiResult<Json<NoticesResponse>> {
    require_role(&user, Role::ClubCoordinator)?;
    let notices = approval::club_notices(&*state.repo, &user, club_id).await?;
    Ok(Json(NoticesResponse {
        success: true,
        count: notices.len(),
        notices,
    }))
}

/// get_my_club
///
/// [Coordinator Route] The caller's clubs with resolved rosters and full
/// content lists (pending and rejected included).
#[utoipa::path(
    get,
    path = "/coordinator/clubs",
    responses(
        (status = 200, description = "My clubs", body = MyClubsResponse),
        (status = 404, description = "Not a coordinator of any club")
    )
)]
pub async fn get_my_club(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<MyClubsResponse>> {
    require_role(&user, Role::ClubCoordinator)?;

    let clubs = state.repo.get_clubs_by_coordinator(user.id).await?;
    if clubs.is_empty() {
        return Err(ApiError::NotFound(
            "You are not a coordinator of any club".to_string(),
        ));
    }

    let mut entries = Vec::with_capacity(clubs.len());
    for club in clubs {
        let mut members = Vec::with_capacity(club.members.len());
        for member_id in &club.members {
            if let Some(member) = state.repo.get_user(*member_id).await? {
                members.push(MemberProfile {
                    id: member.id,
                    name: member.name,
                    email: member.email,
                });
            }
        }
        let events = state.repo.get_club_events(club.id).await?;
        let notices = state.repo.get_club_notices(club.id).await?;
        entries.push(MyClubEntry {
            club,
            members,
            events,
            notices,
        });
    }

    Ok(Json(MyClubsResponse {
        success: true,
        clubs: entries,
    }))
}

/// update_club
///
/// [Coordinator Route] Edits a club's display fields. Ownership (or admin)
/// enforced by the guard.
#[utoipa::path(
    put,
    path = "/coordinator/clubs/{id}",
    params(("id" = Uuid, Path, description = "Club ID")),
    request_body = UpdateClubRequest,
    responses(
        (status = 200, description = "Updated", body = ClubResponse),
        (status = 403, description = "Not the club's coordinator"),
        (status = 404, description = "Club not found")
    )
)]
pub async fn update_club(
    user: AuthUser,
    State(state): State<AppState>,
    Path(club_id): Path<Uuid>,
    Json(payload): Json<UpdateClubRequest>,
) -> ApiResult<Json<ClubResponse>> {
    require_role(&user, Role::ClubCoordinator)?;
    auth::require_club_ownership(&*state.repo, &user, club_id).await?;

    let club = state
        .repo
        .update_club(club_id, payload.name, payload.description)
        .await?
        .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;

    Ok(Json(ClubResponse {
        success: true,
        club,
    }))
}

/// get_membership_requests
///
/// [Coordinator Route] The club's pending join requests, enriched with the
/// requester identity.
#[utoipa::path(
    get,
    path = "/coordinator/clubs/{id}/requests",
    params(("id" = Uuid, Path, description = "Club ID")),
    responses((status = 200, description = "Pending requests", body = MembershipRequestsResponse))
)]
pub async fn get_membership_requests(
    user: AuthUser,
    State(state): State<AppState>,
    Path(club_id): Path<Uuid>,
) -> ApiResult<Json<MembershipRequestsResponse>> {
    require_role(&user, Role::ClubCoordinator)?;
    let requests = membership::pending_requests(&*state.repo, &user, club_id).await?;
    Ok(Json(MembershipRequestsResponse {
        success: true,
        count: requests.len(),
        requests,
    }))
}

/// respond_membership
///
/// [Coordinator Route] Accepts or rejects a pending join request.
#[utoipa::path(
    post,
    path = "/coordinator/clubs/membership-response",
    request_body = RespondMembershipRequest,
    responses(
        (status = 200, description = "Responded", body = MessageResponse),
        (status = 400, description = "Bad status value"),
        (status = 403, description = "Not the club's coordinator"),
        (status = 404, description = "Club or request not found")
    )
)]
pub async fn respond_membership(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<RespondMembershipRequest>,
) -> ApiResult<Json<MessageResponse>> {
    require_role(&user, Role::ClubCoordinator)?;
    let decision = membership::respond(&*state.repo, &user, payload).await?;
    Ok(Json(MessageResponse::ok(format!(
        "Membership request {decision}"
    ))))
}

// --- Admin Handlers ---

/// admin_submit_event
///
/// [Admin Route] Creates an admin-originated event: approved immediately,
/// club optional, linked into the club when one is referenced.
#[utoipa::path(
    post,
    path = "/admin/events",
    request_body = SubmitEventRequest,
    responses(
        (status = 201, description = "Created approved", body = EventResponse),
        (status = 404, description = "Club not found")
    )
)]
pub async fn admin_submit_event(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<SubmitEventRequest>,
) -> ApiResult<(StatusCode, Json<EventResponse>)> {
    require_role(&user, Role::Admin)?;
    let event = approval::submit_event(&*state.repo, &user, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(EventResponse {
            success: true,
            event,
        }),
    ))
}

/// get_pending_events
///
/// [Admin Route] The global pending event queue.
#[utoipa::path(
    get,
    path = "/admin/events/pending",
    responses((status = 200, description = "Pending events", body = PendingEventsResponse))
)]
pub async fn get_pending_events(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<PendingEventsResponse>> {
    require_role(&user, Role::Admin)?;
    let events = approval::pending_events(&*state.repo).await?;
    Ok(Json(PendingEventsResponse {
        success: true,
        count: events.len(),
        events,
    }))
}

/// decide_event
///
/// [Admin Route] Approves or rejects a pending event. Retry-safe: both the
/// status write and the club linkage are idempotent.
#[utoipa::path(
    post,
    path = "/admin/events/approval",
    request_body = EventDecisionRequest,
    responses(
        (status = 200, description = "Decided", body = EventResponse),
        (status = 400, description = "Bad status value"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn decide_event(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<EventDecisionRequest>,
) -> ApiResult<Json<EventResponse>> {
    require_role(&user, Role::Admin)?;
    let event = approval::decide_event(&*state.repo, &user, payload).await?;
    Ok(Json(EventResponse {
        success: true,
        event,
    }))
}

/// admin_post_notice
///
/// [Admin Route] Creates an admin-originated notice: approved immediately,
/// stored clubless when flagged as an admin notice.
#[utoipa::path(
    post,
    path = "/admin/notices",
    request_body = SubmitNoticeRequest,
    responses(
        (status = 201, description = "Created approved", body = NoticeResponse),
        (status = 404, description = "Club not found")
    )
)]
pub async fn admin_post_notice(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<SubmitNoticeRequest>,
) -> ApiResult<(StatusCode, Json<NoticeResponse>)> {
    require_role(&user, Role::Admin)?;
    let notice = approval::submit_notice(&*state.repo, &user, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(NoticeResponse {
            success: true,
            notice,
        }),
    ))
}

/// admin_edit_notice
///
/// [Admin Route] Override edit of any notice. The status is left untouched so
/// an approved notice stays consistent with its club's array.
#[utoipa::path(
    put,
    path = "/admin/notices/{id}",
    params(("id" = Uuid, Path, description = "Notice ID")),
    request_body = UpdateNoticeRequest,
    responses(
        (status = 200, description = "Updated", body = NoticeResponse),
        (status = 404, description = "Notice not found")
    )
)]
pub async fn admin_edit_notice(
    user: AuthUser,
    State(state): State<AppState>,
    Path(notice_id): Path<Uuid>,
    Json(payload): Json<UpdateNoticeRequest>,
) -> ApiResult<Json<NoticeResponse>> {
    require_role(&user, Role::Admin)?;
    let notice = approval::admin_edit_notice(&*state.repo, notice_id, payload).await?;
    Ok(Json(NoticeResponse {
        success: true,
        notice,
    }))
}

/// remove_notice
///
/// [Admin Route] Deletes a notice and unlinks it from its club.
#[utoipa::path(
    delete,
    path = "/admin/notices/{id}",
    params(("id" = Uuid, Path, description = "Notice ID")),
    responses(
        (status = 200, description = "Removed", body = MessageResponse),
        (status = 404, description = "Notice not found")
    )
)]
pub async fn remove_notice(
    user: AuthUser,
    State(state): State<AppState>,
    Path(notice_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    require_role(&user, Role::Admin)?;
    approval::remove_notice(&*state.repo, notice_id).await?;
    Ok(Json(MessageResponse::ok("Notice removed successfully")))
}

/// get_pending_notices
///
/// [Admin Route] The global pending notice queue.
#[utoipa::path(
    get,
    path = "/admin/notices/pending",
    responses((status = 200, description = "Pending notices", body = PendingNoticesResponse))
)]
pub async fn get_pending_notices(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<PendingNoticesResponse>> {
    require_role(&user, Role::Admin)?;
    let notices = approval::pending_notices(&*state.repo).await?;
    Ok(Json(PendingNoticesResponse {
        success: true,
        count: notices.len(),
        notices,
    }))
}

/// decide_notice
///
/// [Admin Route] Approves or rejects a pending notice.
#[utoipa::path(
    post,
    path = "/admin/notices/approval",
    request_body = NoticeDecisionRequest,
    responses(
        (status = 200, description = "Decided", body = NoticeResponse),
        (status = 400, description = "Bad status value"),
        (status = 404, description = "Notice not found")
    )
)]
pub async fn decide_notice(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<NoticeDecisionRequest>,
) -> ApiResult<Json<NoticeResponse>> {
    require_role(&user, Role::Admin)?;
    let notice = approval::decide_notice(&*state.repo, &user, payload).await?;
    Ok(Json(NoticeResponse {
        success: true,
        notice,
    }))
}

/// create_club
///
/// [Admin Route] Creates a club and installs its coordinator: the target user
/// is promoted to `club-coordinator` when currently a student (an admin
/// coordinator keeps the admin role), seeded into the roster, and affiliated
/// with the new club.
#[utoipa::path(
    post,
    path = "/admin/clubs",
    request_body = CreateClubRequest,
    responses(
        (status = 201, description = "Created", body = ClubResponse),
        (status = 404, description = "Coordinator email not found"),
        (status = 409, description = "Club name already taken")
    )
)]
pub async fn create_club(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateClubRequest>,
) -> ApiResult<(StatusCode, Json<ClubResponse>)> {
    require_role(&user, Role::Admin)?;

    if state.repo.get_club_by_name(&payload.name).await?.is_some() {
        return Err(ApiError::Conflict(
            "Club with this name already exists".to_string(),
        ));
    }

    let coordinator = state
        .repo
        .get_user_by_email(&payload.coordinator_email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User with this email not found".to_string()))?;

    if coordinator.role == Role::Student {
        state
            .repo
            .set_user_role(coordinator.id, Role::ClubCoordinator)
            .await?;
    }

    let now = Utc::now();
    let club = state
        .repo
        .create_club(crate::models::Club {
            id: Uuid::new_v4(),
            name: payload.name,
            description: payload.description,
            coordinator: coordinator.id,
            members: vec![coordinator.id],
            membership_requests: Vec::new(),
            events: Vec::new(),
            notices: Vec::new(),
            created_at: now,
            updated_at: now,
        })
        .await?;

    state
        .repo
        .add_club_membership(coordinator.id, club.id)
        .await?;
    state
        .repo
        .set_user_affiliation(coordinator.id, &club.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ClubResponse {
            success: true,
            club,
        }),
    ))
}

/// get_all_users
///
/// [Admin Route] Every user, credential fields excluded by projection.
#[utoipa::path(
    get,
    path = "/admin/users",
    responses((status = 200, description = "Users", body = UsersResponse))
)]
pub async fn get_all_users(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<UsersResponse>> {
    require_role(&user, Role::Admin)?;
    let users: Vec<PublicUser> = state
        .repo
        .get_users()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(UsersResponse {
        success: true,
        count: users.len(),
        users,
    }))
}

/// change_user_role
///
/// [Admin Route] Reassigns a user's role; the value is validated against the
/// three known roles.
#[utoipa::path(
    post,
    path = "/admin/users/role",
    request_body = ChangeRoleRequest,
    responses(
        (status = 200, description = "Role changed", body = UserResponse),
        (status = 400, description = "Unknown role value"),
        (status = 404, description = "User not found")
    )
)]
pub async fn change_user_role(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<ChangeRoleRequest>,
) -> ApiResult<Json<UserResponse>> {
    require_role(&user, Role::Admin)?;

    let role: Role = payload.role.parse().map_err(|_| {
        ApiError::InvalidArgument(
            "Role must be either 'student', 'club-coordinator', or 'admin'".to_string(),
        )
    })?;

    let updated = state
        .repo
        .set_user_role(payload.user_id, role)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse {
        success: true,
        user: updated.into(),
    }))
}

/// update_user_affiliation
///
/// [Admin Route] Sets a user's display affiliation label, addressed by email.
#[utoipa::path(
    put,
    path = "/admin/users/{email}",
    params(("email" = String, Path, description = "User email")),
    request_body = UpdateAffiliationRequest,
    responses(
        (status = 200, description = "Updated", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user_affiliation(
    user: AuthUser,
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<UpdateAffiliationRequest>,
) -> ApiResult<Json<UserResponse>> {
    require_role(&user, Role::Admin)?;

    let target = state
        .repo
        .get_user_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let updated = state
        .repo
        .set_user_affiliation(target.id, &payload.club_affiliation)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse {
        success: true,
        user: updated.into(),
    }))
}

/// get_push_subscriptions
///
/// [Admin Route] Lists every stored push subscription.
#[utoipa::path(
    get,
    path = "/admin/push/subscriptions",
    responses((status = 200, description = "Subscriptions", body = SubscriptionsResponse))
)]
pub async fn get_push_subscriptions(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<SubscriptionsResponse>> {
    require_role(&user, Role::Admin)?;
    let subscriptions = state.repo.get_subscriptions().await?;
    Ok(Json(SubscriptionsResponse {
        success: true,
        count: subscriptions.len(),
        subscriptions,
    }))
}
