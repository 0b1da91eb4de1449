use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enumerations ---

/// Role
///
/// The RBAC field carried by every user. The hierarchy is strict: `admin`
/// satisfies any coordinator-only check, while `club-coordinator` never
/// satisfies an admin-only check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Role {
    #[default]
    Student,
    ClubCoordinator,
    Admin,
}

impl Role {
    /// Returns true when this role meets or exceeds `required`.
    pub fn satisfies(self, required: Role) -> bool {
        match required {
            Role::Student => true,
            Role::ClubCoordinator => matches!(self, Role::ClubCoordinator | Role::Admin),
            Role::Admin => self == Role::Admin,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::ClubCoordinator => "club-coordinator",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "club-coordinator" => Ok(Role::ClubCoordinator),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// ContentStatus
///
/// Lifecycle state shared by Events and Notices: `pending` is the initial
/// state for coordinator submissions, `approved`/`rejected` are the terminal
/// decisions an admin can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ContentStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ContentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentStatus::Pending => "pending",
            ContentStatus::Approved => "approved",
            ContentStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ContentStatus::Pending),
            "approved" => Ok(ContentStatus::Approved),
            "rejected" => Ok(ContentStatus::Rejected),
            other => Err(format!("unknown status '{other}'")),
        }
    }
}

/// RequestStatus
///
/// Lifecycle state of a club membership request. A request transitions exactly
/// once from `pending` to a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RequestStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "accepted" => Ok(RequestStatus::Accepted),
            "rejected" => Ok(RequestStatus::Rejected),
            other => Err(format!("unknown status '{other}'")),
        }
    }
}

// --- Core Application Schemas ---

/// Bookmarks
///
/// Separate reference sets for bookmarked events and notices, embedded in the
/// user document.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Bookmarks {
    pub events: Vec<Uuid>,
    pub notices: Vec<Uuid>,
}

/// User
///
/// The canonical identity record. This is the internal shape: it carries the
/// password hash and must never be serialized to a client; every API response
/// goes through [`PublicUser`] instead.
#[derive(Debug, Clone, Default)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    // The user's primary identifier, globally unique.
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    // Display label only; membership is tracked by `club_memberships`.
    pub club_affiliation: String,
    pub registered_events: Vec<Uuid>,
    pub club_memberships: Vec<Uuid>,
    pub saved_notices: Vec<Uuid>,
    pub bookmarks: Bookmarks,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// PublicUser
///
/// The client-facing projection of a [`User`]. The credential fields are
/// excluded structurally rather than filtered at serialization time.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub club_affiliation: String,
    pub registered_events: Vec<Uuid>,
    pub club_memberships: Vec<Uuid>,
    pub saved_notices: Vec<Uuid>,
    pub bookmarks: Bookmarks,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        PublicUser {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
            club_affiliation: u.club_affiliation,
            registered_events: u.registered_events,
            club_memberships: u.club_memberships,
            saved_notices: u.saved_notices,
            bookmarks: u.bookmarks,
        }
    }
}

/// MembershipRequest
///
/// A single entry in a club's embedded request list. Entries are append-only:
/// a user may accumulate several terminal entries over time, but at most one
/// may be `pending` at any moment.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MembershipRequest {
    pub id: Uuid,
    pub user: Uuid,
    pub status: RequestStatus,
    #[ts(type = "string")]
    pub request_date: DateTime<Utc>,
}

/// Club
///
/// A student club. `members`, `events` and `notices` are id reference sets
/// with set semantics (no duplicates); `membership_requests` is the one
/// embedded collection in the model.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub coordinator: Uuid,
    pub members: Vec<Uuid>,
    pub membership_requests: Vec<MembershipRequest>,
    // Only approved content is ever linked here.
    pub events: Vec<Uuid>,
    pub notices: Vec<Uuid>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// ClubSummary
///
/// Public listing projection of a club: roster, request queue and content
/// links are stripped.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClubSummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub coordinator: Uuid,
}

impl From<Club> for ClubSummary {
    fn from(c: Club) -> Self {
        ClubSummary {
            id: c.id,
            name: c.name,
            description: c.description,
            coordinator: c.coordinator,
        }
    }
}

/// Event
///
/// A campus event. `club` is optional: admin-originated events may exist
/// without one, and such events are never linked into any club's array.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[ts(type = "string")]
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub category: String,
    pub club: Option<Uuid>,
    pub status: ContentStatus,
    pub created_by: Uuid,
    pub approved_by: Option<Uuid>,
    pub rejection_reason: Option<String>,
    pub participants: Vec<Uuid>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Notice
///
/// A campus notice (academic updates, fee deadlines, club announcements).
/// Mirrors the Event lifecycle fields exactly.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Notice {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    #[ts(type = "string | null")]
    pub due_date: Option<NaiveDate>,
    pub club: Option<Uuid>,
    pub status: ContentStatus,
    pub created_by: Uuid,
    pub approved_by: Option<Uuid>,
    pub rejection_reason: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// PushSubscription
///
/// A web-push subscription registration, keyed by its endpoint URL. Stored in
/// the repository so registrations survive restarts; delivery itself is
/// handled elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PushSubscription {
    pub endpoint: String,
    pub p256dh: String,
    pub auth: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

// --- Enriched Queue / Dashboard Projections ---

/// PendingEventEntry
///
/// An admin-queue row: the event plus the club name and creator identity the
/// reviewer needs, never the creator's credential fields.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PendingEventEntry {
    pub event: Event,
    pub club_name: Option<String>,
    pub creator_name: String,
    pub creator_email: String,
}

/// PendingNoticeEntry
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PendingNoticeEntry {
    pub notice: Notice,
    pub club_name: Option<String>,
    pub creator_name: String,
    pub creator_email: String,
}

/// MembershipRequestEntry
///
/// A pending membership request enriched with the requester's display
/// identity for the coordinator's review screen.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MembershipRequestEntry {
    pub id: Uuid,
    pub user: Uuid,
    pub status: RequestStatus,
    #[ts(type = "string")]
    pub request_date: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
}

/// MemberProfile
///
/// Roster entry for coordinator dashboards: display identity only.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MemberProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// MyClubEntry
///
/// A coordinator's view of one of their clubs: the club document plus the
/// resolved roster and full content lists (including pending/rejected items).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MyClubEntry {
    pub club: Club,
    pub members: Vec<MemberProfile>,
    pub events: Vec<Event>,
    pub notices: Vec<Notice>,
}

/// BookmarksView
///
/// The resolved bookmark sets for the profile screen. Only approved content
/// is resolved; dangling or unapproved references are dropped.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BookmarksView {
    pub events: Vec<Event>,
    pub notices: Vec<Notice>,
}

// --- Request Payloads (Input Schemas) ---

/// RegisterRequest
///
/// Input payload for self-service registration. The password is hashed before
/// it ever reaches the repository.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// LoginRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// SubmitEventRequest
///
/// Input payload for event submission. `club_id` is optional for admin
/// events; `is_admin_event` lets an admin-originated submission flag itself
/// for auto-approval explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmitEventRequest {
    pub name: String,
    pub description: String,
    #[ts(type = "string")]
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub club_id: Option<Uuid>,
    #[serde(default)]
    pub is_admin_event: Option<bool>,
}

/// UpdateEventRequest
///
/// Partial update payload. Uses `Option<T>` throughout so only the provided
/// fields are replaced. The status field is deliberately absent: an edited
/// event always re-enters the pending queue.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateEventRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// EventDecisionRequest
///
/// Admin decision payload. `status` is carried as a raw string and validated
/// in the workflow so a bad value reports a clean 400 instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EventDecisionRequest {
    pub event_id: Uuid,
    pub status: String,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

/// SubmitNoticeRequest
///
/// Input payload for notice submission. The body text is accepted under
/// either `content` or `description`; when both are supplied, the explicit
/// `content` key wins.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmitNoticeRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    #[ts(type = "string | null")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub club_id: Option<Uuid>,
    #[serde(default)]
    pub is_admin_notice: Option<bool>,
}

impl SubmitNoticeRequest {
    /// Resolves the body-text aliasing: `content` wins over `description`.
    pub fn body(&self) -> Option<String> {
        self.content.clone().or_else(|| self.description.clone())
    }
}

/// UpdateNoticeRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateNoticeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub due_date: Option<NaiveDate>,
}

impl UpdateNoticeRequest {
    /// Same aliasing rule as submission: `content` wins over `description`.
    pub fn body(&self) -> Option<String> {
        self.content.clone().or_else(|| self.description.clone())
    }
}

/// NoticeDecisionRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NoticeDecisionRequest {
    pub notice_id: Uuid,
    pub status: String,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

/// RespondMembershipRequest
///
/// Coordinator/admin response to a membership request. `status` is a raw
/// string validated to `accepted`/`rejected` in the workflow.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RespondMembershipRequest {
    pub club_id: Uuid,
    pub request_id: Uuid,
    pub status: String,
}

/// CreateClubRequest
///
/// Admin payload for club creation. The coordinator is addressed by email and
/// is promoted to `club-coordinator` when currently a student.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateClubRequest {
    pub name: String,
    pub description: String,
    pub coordinator_email: String,
}

/// UpdateClubRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateClubRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// ChangeRoleRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChangeRoleRequest {
    pub user_id: Uuid,
    pub role: String,
}

/// UpdateAffiliationRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateAffiliationRequest {
    pub club_affiliation: String,
}

/// SubscriptionKeys
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubscriptionKeys {
    pub p256dh: String,
    pub auth: String,
}

/// SubscribeRequest
///
/// The standard web-push subscription object posted by the browser.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubscribeRequest {
    pub endpoint: String,
    pub keys: SubscriptionKeys,
}

/// UnsubscribeRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UnsubscribeRequest {
    pub endpoint: String,
}

// --- Response Envelopes (Output Schemas) ---

/// MessageResponse
///
/// The minimal success envelope: `{success: true, message}`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        MessageResponse {
            success: true,
            message: message.into(),
        }
    }
}

/// AuthResponse
///
/// Returned by login and registration: the public profile plus the signed
/// access token.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuthResponse {
    pub success: bool,
    pub user: PublicUser,
    pub access_token: String,
}

/// UserResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserResponse {
    pub success: bool,
    pub user: PublicUser,
}

/// UsersResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UsersResponse {
    pub success: bool,
    pub count: usize,
    pub users: Vec<PublicUser>,
}

/// EventResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EventResponse {
    pub success: bool,
    pub event: Event,
}

/// EventsResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EventsResponse {
    pub success: bool,
    pub count: usize,
    pub events: Vec<Event>,
}

/// PendingEventsResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PendingEventsResponse {
    pub success: bool,
    pub count: usize,
    pub events: Vec<PendingEventEntry>,
}

/// NoticeResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NoticeResponse {
    pub success: bool,
    pub notice: Notice,
}

/// NoticesResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NoticesResponse {
    pub success: bool,
    pub count: usize,
    pub notices: Vec<Notice>,
}

/// PendingNoticesResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PendingNoticesResponse {
    pub success: bool,
    pub count: usize,
    pub notices: Vec<PendingNoticeEntry>,
}

/// ClubResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClubResponse {
    pub success: bool,
    pub club: Club,
}

/// ClubsResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClubsResponse {
    pub success: bool,
    pub count: usize,
    pub clubs: Vec<ClubSummary>,
}

/// MyClubsResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MyClubsResponse {
    pub success: bool,
    pub clubs: Vec<MyClubEntry>,
}

/// MembershipRequestsResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MembershipRequestsResponse {
    pub success: bool,
    pub count: usize,
    pub requests: Vec<MembershipRequestEntry>,
}

/// BookmarksResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BookmarksResponse {
    pub success: bool,
    pub bookmarks: BookmarksView,
}

/// SubscriptionsResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubscriptionsResponse {
    pub success: bool,
    pub count: usize,
    pub subscriptions: Vec<PushSubscription>,
}
