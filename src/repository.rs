use crate::error::RepositoryError;
use crate::models::{
    Bookmarks, Club, ContentStatus, Event, MembershipRequest, Notice, PushSubscription,
    RequestStatus, Role, UpdateEventRequest, User,
};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// NoticeContentPatch
///
/// Partial notice replacement with the `content`/`description` aliasing
/// already resolved by the workflow layer; the repository never sees both
/// field names.
#[derive(Debug, Clone, Default)]
pub struct NoticeContentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Repository Trait
///
/// The abstract contract for all persistence operations, consumed by the
/// approval and membership workflows. Backends must provide strongly
/// consistent single-document writes; the `add_*` reference operations carry
/// set semantics (no-op when the value is already present) so that concurrent
/// or retried transitions stay safe without any cross-document transaction.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Users ---
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn get_users(&self) -> Result<Vec<User>, RepositoryError>;
    async fn create_user(&self, user: User) -> Result<User, RepositoryError>;
    async fn set_user_role(&self, id: Uuid, role: Role) -> Result<Option<User>, RepositoryError>;
    async fn set_user_affiliation(
        &self,
        id: Uuid,
        affiliation: &str,
    ) -> Result<Option<User>, RepositoryError>;
    async fn delete_user(&self, id: Uuid) -> Result<bool, RepositoryError>;
    // Idempotent reference set-adds on the user document.
    async fn add_club_membership(
        &self,
        user_id: Uuid,
        club_id: Uuid,
    ) -> Result<(), RepositoryError>;
    async fn add_registered_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<(), RepositoryError>;
    async fn add_saved_notice(
        &self,
        user_id: Uuid,
        notice_id: Uuid,
    ) -> Result<(), RepositoryError>;
    async fn add_event_bookmark(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<(), RepositoryError>;
    async fn add_notice_bookmark(
        &self,
        user_id: Uuid,
        notice_id: Uuid,
    ) -> Result<(), RepositoryError>;

    // --- Clubs ---
    async fn get_club(&self, id: Uuid) -> Result<Option<Club>, RepositoryError>;
    async fn get_club_by_name(&self, name: &str) -> Result<Option<Club>, RepositoryError>;
    async fn get_clubs(&self) -> Result<Vec<Club>, RepositoryError>;
    async fn get_clubs_by_coordinator(
        &self,
        coordinator: Uuid,
    ) -> Result<Vec<Club>, RepositoryError>;
    async fn create_club(&self, club: Club) -> Result<Club, RepositoryError>;
    async fn update_club(
        &self,
        id: Uuid,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Option<Club>, RepositoryError>;
    /// Set-add into `club.members`.
    async fn add_club_member(&self, club_id: Uuid, user_id: Uuid)
    -> Result<(), RepositoryError>;
    /// Set-add into `club.events`. Only ever called for approved events.
    async fn add_club_event(&self, club_id: Uuid, event_id: Uuid)
    -> Result<(), RepositoryError>;
    /// Set-add into `club.notices`.
    async fn add_club_notice(
        &self,
        club_id: Uuid,
        notice_id: Uuid,
    ) -> Result<(), RepositoryError>;
    /// Pull from `club.notices`; no-op when absent.
    async fn remove_club_notice(
        &self,
        club_id: Uuid,
        notice_id: Uuid,
    ) -> Result<(), RepositoryError>;
    /// Appends a request entry. Plain append: historical terminal entries for
    /// the same user are allowed, the single-pending rule lives in the
    /// workflow.
    async fn push_membership_request(
        &self,
        club_id: Uuid,
        request: MembershipRequest,
    ) -> Result<(), RepositoryError>;
    /// Updates one embedded request entry by id, returning the updated entry.
    async fn set_membership_request_status(
        &self,
        club_id: Uuid,
        request_id: Uuid,
        status: RequestStatus,
    ) -> Result<Option<MembershipRequest>, RepositoryError>;

    // --- Events ---
    async fn get_event(&self, id: Uuid) -> Result<Option<Event>, RepositoryError>;
    /// Status-filtered listing. Approved events are sorted by date ascending;
    /// other statuses carry no ordering guarantee.
    async fn get_events_by_status(
        &self,
        status: ContentStatus,
    ) -> Result<Vec<Event>, RepositoryError>;
    async fn get_events_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Event>, RepositoryError>;
    async fn get_club_events(&self, club_id: Uuid) -> Result<Vec<Event>, RepositoryError>;
    async fn create_event(&self, event: Event) -> Result<Event, RepositoryError>;
    /// Partial field replace that always forces the status back to `pending`.
    async fn update_event_content(
        &self,
        id: Uuid,
        patch: UpdateEventRequest,
    ) -> Result<Option<Event>, RepositoryError>;
    async fn set_event_decision(
        &self,
        id: Uuid,
        status: ContentStatus,
        approved_by: Uuid,
        rejection_reason: Option<String>,
    ) -> Result<Option<Event>, RepositoryError>;
    /// Set-add into `event.participants`.
    async fn add_event_participant(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), RepositoryError>;

    // --- Notices ---
    async fn get_notice(&self, id: Uuid) -> Result<Option<Notice>, RepositoryError>;
    /// Approved notices are sorted newest-first; other statuses carry no
    /// ordering guarantee.
    async fn get_notices_by_status(
        &self,
        status: ContentStatus,
    ) -> Result<Vec<Notice>, RepositoryError>;
    async fn get_notices_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Notice>, RepositoryError>;
    async fn get_club_notices(&self, club_id: Uuid) -> Result<Vec<Notice>, RepositoryError>;
    async fn create_notice(&self, notice: Notice) -> Result<Notice, RepositoryError>;
    /// Partial field replace. With `reset_status` the notice re-enters the
    /// pending queue (creator edits); without it the status is untouched
    /// (admin override edits of already-approved notices).
    async fn update_notice_content(
        &self,
        id: Uuid,
        patch: NoticeContentPatch,
        reset_status: bool,
    ) -> Result<Option<Notice>, RepositoryError>;
    async fn set_notice_decision(
        &self,
        id: Uuid,
        status: ContentStatus,
        approved_by: Uuid,
        rejection_reason: Option<String>,
    ) -> Result<Option<Notice>, RepositoryError>;
    /// Deletes by id, returning the removed document so the caller can unlink
    /// it from its club.
    async fn delete_notice(&self, id: Uuid) -> Result<Option<Notice>, RepositoryError>;

    // --- Push subscriptions ---
    /// Upsert keyed by endpoint URL.
    async fn add_subscription(
        &self,
        subscription: PushSubscription,
    ) -> Result<(), RepositoryError>;
    async fn remove_subscription(&self, endpoint: &str) -> Result<bool, RepositoryError>;
    async fn get_subscriptions(&self) -> Result<Vec<PushSubscription>, RepositoryError>;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer across the
/// application state.
pub type RepositoryState = Arc<dyn Repository>;

// ---------------------------------------------------------------------------
// PostgresRepository
// ---------------------------------------------------------------------------

/// PostgresRepository
///
/// The production implementation, backed by PostgreSQL. Reference sets are
/// `uuid[]` columns manipulated with guarded `array_append`/`array_remove`
/// so every set operation is a single idempotent statement; the embedded
/// membership request list is a JSONB column.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn corrupt(collection: &'static str, detail: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Corrupt {
        collection,
        detail: detail.to_string(),
    }
}

// Private row types: columns stay primitive here and are converted into the
// domain models in one fallible step.

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    club_affiliation: String,
    registered_events: Vec<Uuid>,
    club_memberships: Vec<Uuid>,
    saved_notices: Vec<Uuid>,
    bookmarked_events: Vec<Uuid>,
    bookmarked_notices: Vec<Uuid>,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, RepositoryError> {
        let role = self.role.parse().map_err(|e| corrupt("users", e))?;
        Ok(User {
            id: self.id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            role,
            club_affiliation: self.club_affiliation,
            registered_events: self.registered_events,
            club_memberships: self.club_memberships,
            saved_notices: self.saved_notices,
            bookmarks: Bookmarks {
                events: self.bookmarked_events,
                notices: self.bookmarked_notices,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ClubRow {
    id: Uuid,
    name: String,
    description: String,
    coordinator: Uuid,
    members: Vec<Uuid>,
    membership_requests: serde_json::Value,
    events: Vec<Uuid>,
    notices: Vec<Uuid>,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

impl ClubRow {
    fn into_club(self) -> Result<Club, RepositoryError> {
        let membership_requests: Vec<MembershipRequest> =
            serde_json::from_value(self.membership_requests).map_err(|e| corrupt("clubs", e))?;
        Ok(Club {
            id: self.id,
            name: self.name,
            description: self.description,
            coordinator: self.coordinator,
            members: self.members,
            membership_requests,
            events: self.events,
            notices: self.notices,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    name: String,
    description: String,
    date: NaiveDate,
    time: String,
    location: String,
    category: String,
    club: Option<Uuid>,
    status: String,
    created_by: Uuid,
    approved_by: Option<Uuid>,
    rejection_reason: Option<String>,
    participants: Vec<Uuid>,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

impl EventRow {
    fn into_event(self) -> Result<Event, RepositoryError> {
        let status = self.status.parse().map_err(|e| corrupt("events", e))?;
        Ok(Event {
            id: self.id,
            name: self.name,
            description: self.description,
            date: self.date,
            time: self.time,
            location: self.location,
            category: self.category,
            club: self.club,
            status,
            created_by: self.created_by,
            approved_by: self.approved_by,
            rejection_reason: self.rejection_reason,
            participants: self.participants,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct NoticeRow {
    id: Uuid,
    title: String,
    description: String,
    category: String,
    due_date: Option<NaiveDate>,
    club: Option<Uuid>,
    status: String,
    created_by: Uuid,
    approved_by: Option<Uuid>,
    rejection_reason: Option<String>,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

impl NoticeRow {
    fn into_notice(self) -> Result<Notice, RepositoryError> {
        let status = self.status.parse().map_err(|e| corrupt("notices", e))?;
        Ok(Notice {
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category,
            due_date: self.due_date,
            club: self.club,
            status,
            created_by: self.created_by,
            approved_by: self.approved_by,
            rejection_reason: self.rejection_reason,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SubscriptionRow {
    endpoint: String,
    p256dh: String,
    auth: String,
    created_at: chrono::DateTime<Utc>,
}

impl From<SubscriptionRow> for PushSubscription {
    fn from(r: SubscriptionRow) -> Self {
        PushSubscription {
            endpoint: r.endpoint,
            p256dh: r.p256dh,
            auth: r.auth,
            created_at: r.created_at,
        }
    }
}

const USER_COLUMNS: &str = "id, name, email, password_hash, role, club_affiliation, \
     registered_events, club_memberships, saved_notices, bookmarked_events, \
     bookmarked_notices, created_at, updated_at";

const CLUB_COLUMNS: &str = "id, name, description, coordinator, members, membership_requests, \
     events, notices, created_at, updated_at";

const EVENT_COLUMNS: &str = "id, name, description, date, time, location, category, club, \
     status, created_by, approved_by, rejection_reason, participants, created_at, updated_at";

const NOTICE_COLUMNS: &str = "id, title, description, category, due_date, club, status, \
     created_by, approved_by, rejection_reason, created_at, updated_at";

#[async_trait]
impl Repository for PostgresRepository {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(UserRow::into_user).transpose()
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.map(UserRow::into_user).transpose()
    }

    async fn get_users(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(UserRow::into_user).collect()
    }

    async fn create_user(&self, user: User) -> Result<User, RepositoryError> {
        sqlx::query(
            "INSERT INTO users (id, name, email, password_hash, role, club_affiliation, \
             registered_events, club_memberships, saved_notices, bookmarked_events, \
             bookmarked_notices, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(&user.club_affiliation)
        .bind(&user.registered_events)
        .bind(&user.club_memberships)
        .bind(&user.saved_notices)
        .bind(&user.bookmarks.events)
        .bind(&user.bookmarks.notices)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(user)
    }

    async fn set_user_role(&self, id: Uuid, role: Role) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET role = $2, updated_at = NOW() WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await?;
        row.map(UserRow::into_user).transpose()
    }

    async fn set_user_affiliation(
        &self,
        id: Uuid,
        affiliation: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET club_affiliation = $2, updated_at = NOW() WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(affiliation)
        .fetch_optional(&self.pool)
        .await?;
        row.map(UserRow::into_user).transpose()
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn add_club_membership(
        &self,
        user_id: Uuid,
        club_id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE users SET club_memberships = array_append(club_memberships, $2), \
             updated_at = NOW() WHERE id = $1 AND NOT ($2 = ANY(club_memberships))",
        )
        .bind(user_id)
        .bind(club_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn add_registered_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE users SET registered_events = array_append(registered_events, $2), \
             updated_at = NOW() WHERE id = $1 AND NOT ($2 = ANY(registered_events))",
        )
        .bind(user_id)
        .bind(event_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn add_saved_notice(
        &self,
        user_id: Uuid,
        notice_id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE users SET saved_notices = array_append(saved_notices, $2), \
             updated_at = NOW() WHERE id = $1 AND NOT ($2 = ANY(saved_notices))",
        )
        .bind(user_id)
        .bind(notice_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn add_event_bookmark(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE users SET bookmarked_events = array_append(bookmarked_events, $2), \
             updated_at = NOW() WHERE id = $1 AND NOT ($2 = ANY(bookmarked_events))",
        )
        .bind(user_id)
        .bind(event_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn add_notice_bookmark(
        &self,
        user_id: Uuid,
        notice_id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE users SET bookmarked_notices = array_append(bookmarked_notices, $2), \
             updated_at = NOW() WHERE id = $1 AND NOT ($2 = ANY(bookmarked_notices))",
        )
        .bind(user_id)
        .bind(notice_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_club(&self, id: Uuid) -> Result<Option<Club>, RepositoryError> {
        let row = sqlx::query_as::<_, ClubRow>(&format!(
            "SELECT {CLUB_COLUMNS} FROM clubs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(ClubRow::into_club).transpose()
    }

    async fn get_club_by_name(&self, name: &str) -> Result<Option<Club>, RepositoryError> {
        let row = sqlx::query_as::<_, ClubRow>(&format!(
            "SELECT {CLUB_COLUMNS} FROM clubs WHERE name = $1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        row.map(ClubRow::into_club).transpose()
    }

    async fn get_clubs(&self) -> Result<Vec<Club>, RepositoryError> {
        let rows = sqlx::query_as::<_, ClubRow>(&format!(
            "SELECT {CLUB_COLUMNS} FROM clubs ORDER BY name ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(ClubRow::into_club).collect()
    }

    async fn get_clubs_by_coordinator(
        &self,
        coordinator: Uuid,
    ) -> Result<Vec<Club>, RepositoryError> {
        let rows = sqlx::query_as::<_, ClubRow>(&format!(
            "SELECT {CLUB_COLUMNS} FROM clubs WHERE coordinator = $1 ORDER BY name ASC"
        ))
        .bind(coordinator)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(ClubRow::into_club).collect()
    }

    async fn create_club(&self, club: Club) -> Result<Club, RepositoryError> {
        let requests = serde_json::to_value(&club.membership_requests)
            .map_err(|e| corrupt("clubs", e))?;
        sqlx::query(
            "INSERT INTO clubs (id, name, description, coordinator, members, \
             membership_requests, events, notices, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(club.id)
        .bind(&club.name)
        .bind(&club.description)
        .bind(club.coordinator)
        .bind(&club.members)
        .bind(requests)
        .bind(&club.events)
        .bind(&club.notices)
        .bind(club.created_at)
        .bind(club.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(club)
    }

    async fn update_club(
        &self,
        id: Uuid,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Option<Club>, RepositoryError> {
        let row = sqlx::query_as::<_, ClubRow>(&format!(
            "UPDATE clubs SET name = COALESCE($2, name), \
             description = COALESCE($3, description), updated_at = NOW() \
             WHERE id = $1 RETURNING {CLUB_COLUMNS}"
        ))
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_optional(&self.pool)
        .await?;
        row.map(ClubRow::into_club).transpose()
    }

    async fn add_club_member(
        &self,
        club_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE clubs SET members = array_append(members, $2), updated_at = NOW() \
             WHERE id = $1 AND NOT ($2 = ANY(members))",
        )
        .bind(club_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn add_club_event(
        &self,
        club_id: Uuid,
        event_id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE clubs SET events = array_append(events, $2), updated_at = NOW() \
             WHERE id = $1 AND NOT ($2 = ANY(events))",
        )
        .bind(club_id)
        .bind(event_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn add_club_notice(
        &self,
        club_id: Uuid,
        notice_id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE clubs SET notices = array_append(notices, $2), updated_at = NOW() \
             WHERE id = $1 AND NOT ($2 = ANY(notices))",
        )
        .bind(club_id)
        .bind(notice_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove_club_notice(
        &self,
        club_id: Uuid,
        notice_id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE clubs SET notices = array_remove(notices, $2), updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(club_id)
        .bind(notice_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn push_membership_request(
        &self,
        club_id: Uuid,
        request: MembershipRequest,
    ) -> Result<(), RepositoryError> {
        let entry = serde_json::to_value(&request).map_err(|e| corrupt("clubs", e))?;
        sqlx::query(
            "UPDATE clubs SET membership_requests = membership_requests || $2::jsonb, \
             updated_at = NOW() WHERE id = $1",
        )
        .bind(club_id)
        .bind(entry)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn set_membership_request_status(
        &self,
        club_id: Uuid,
        request_id: Uuid,
        status: RequestStatus,
    ) -> Result<Option<MembershipRequest>, RepositoryError> {
        let row = sqlx::query_as::<_, ClubRow>(&format!(
            "UPDATE clubs SET membership_requests = (\
                 SELECT COALESCE(jsonb_agg(\
                     CASE WHEN elem->>'id' = $2 \
                          THEN jsonb_set(elem, '{{status}}', to_jsonb($3::text)) \
                          ELSE elem END), '[]'::jsonb) \
                 FROM jsonb_array_elements(membership_requests) elem\
             ), updated_at = NOW() WHERE id = $1 RETURNING {CLUB_COLUMNS}"
        ))
        .bind(club_id)
        .bind(request_id.to_string())
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;
        let club = match row {
            Some(r) => r.into_club()?,
            None => return Ok(None),
        };
        Ok(club
            .membership_requests
            .into_iter()
            .find(|r| r.id == request_id))
    }

    async fn get_event(&self, id: Uuid) -> Result<Option<Event>, RepositoryError> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(EventRow::into_event).transpose()
    }

    async fn get_events_by_status(
        &self,
        status: ContentStatus,
    ) -> Result<Vec<Event>, RepositoryError> {
        // The public feed promises date-ascending order; the pending queue
        // promises none.
        let order = match status {
            ContentStatus::Approved => "ORDER BY date ASC",
            _ => "ORDER BY created_at ASC",
        };
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE status = $1 {order}"
        ))
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(EventRow::into_event).collect()
    }

    async fn get_events_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Event>, RepositoryError> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = ANY($1) ORDER BY date ASC"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(EventRow::into_event).collect()
    }

    async fn get_club_events(&self, club_id: Uuid) -> Result<Vec<Event>, RepositoryError> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE club = $1 ORDER BY date ASC"
        ))
        .bind(club_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(EventRow::into_event).collect()
    }

    async fn create_event(&self, event: Event) -> Result<Event, RepositoryError> {
        sqlx::query(
            "INSERT INTO events (id, name, description, date, time, location, category, \
             club, status, created_by, approved_by, rejection_reason, participants, \
             created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)",
        )
        .bind(event.id)
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.date)
        .bind(&event.time)
        .bind(&event.location)
        .bind(&event.category)
        .bind(event.club)
        .bind(event.status.as_str())
        .bind(event.created_by)
        .bind(event.approved_by)
        .bind(&event.rejection_reason)
        .bind(&event.participants)
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(event)
    }

    async fn update_event_content(
        &self,
        id: Uuid,
        patch: UpdateEventRequest,
    ) -> Result<Option<Event>, RepositoryError> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "UPDATE events SET name = COALESCE($2, name), \
             description = COALESCE($3, description), \
             date = COALESCE($4, date), \
             time = COALESCE($5, time), \
             location = COALESCE($6, location), \
             category = COALESCE($7, category), \
             status = 'pending', updated_at = NOW() \
             WHERE id = $1 RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.date)
        .bind(patch.time)
        .bind(patch.location)
        .bind(patch.category)
        .fetch_optional(&self.pool)
        .await?;
        row.map(EventRow::into_event).transpose()
    }

    async fn set_event_decision(
        &self,
        id: Uuid,
        status: ContentStatus,
        approved_by: Uuid,
        rejection_reason: Option<String>,
    ) -> Result<Option<Event>, RepositoryError> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "UPDATE events SET status = $2, approved_by = $3, \
             rejection_reason = COALESCE($4, rejection_reason), updated_at = NOW() \
             WHERE id = $1 RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id)
        .bind(status.as_str())
        .bind(approved_by)
        .bind(rejection_reason)
        .fetch_optional(&self.pool)
        .await?;
        row.map(EventRow::into_event).transpose()
    }

    async fn add_event_participant(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE events SET participants = array_append(participants, $2), \
             updated_at = NOW() WHERE id = $1 AND NOT ($2 = ANY(participants))",
        )
        .bind(event_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_notice(&self, id: Uuid) -> Result<Option<Notice>, RepositoryError> {
        let row = sqlx::query_as::<_, NoticeRow>(&format!(
            "SELECT {NOTICE_COLUMNS} FROM notices WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(NoticeRow::into_notice).transpose()
    }

    async fn get_notices_by_status(
        &self,
        status: ContentStatus,
    ) -> Result<Vec<Notice>, RepositoryError> {
        let order = match status {
            ContentStatus::Approved => "ORDER BY created_at DESC",
            _ => "ORDER BY created_at ASC",
        };
        let rows = sqlx::query_as::<_, NoticeRow>(&format!(
            "SELECT {NOTICE_COLUMNS} FROM notices WHERE status = $1 {order}"
        ))
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(NoticeRow::into_notice).collect()
    }

    async fn get_notices_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Notice>, RepositoryError> {
        let rows = sqlx::query_as::<_, NoticeRow>(&format!(
            "SELECT {NOTICE_COLUMNS} FROM notices WHERE id = ANY($1) ORDER BY created_at DESC"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(NoticeRow::into_notice).collect()
    }

    async fn get_club_notices(&self, club_id: Uuid) -> Result<Vec<Notice>, RepositoryError> {
        let rows = sqlx::query_as::<_, NoticeRow>(&format!(
            "SELECT {NOTICE_COLUMNS} FROM notices WHERE club = $1 ORDER BY created_at DESC"
        ))
        .bind(club_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(NoticeRow::into_notice).collect()
    }

    async fn create_notice(&self, notice: Notice) -> Result<Notice, RepositoryError> {
        sqlx::query(
            "INSERT INTO notices (id, title, description, category, due_date, club, status, \
             created_by, approved_by, rejection_reason, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(notice.id)
        .bind(&notice.title)
        .bind(&notice.description)
        .bind(&notice.category)
        .bind(notice.due_date)
        .bind(notice.club)
        .bind(notice.status.as_str())
        .bind(notice.created_by)
        .bind(notice.approved_by)
        .bind(&notice.rejection_reason)
        .bind(notice.created_at)
        .bind(notice.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(notice)
    }

    async fn update_notice_content(
        &self,
        id: Uuid,
        patch: NoticeContentPatch,
        reset_status: bool,
    ) -> Result<Option<Notice>, RepositoryError> {
        let status_clause = if reset_status {
            "status = 'pending', "
        } else {
            ""
        };
        let row = sqlx::query_as::<_, NoticeRow>(&format!(
            "UPDATE notices SET title = COALESCE($2, title), \
             description = COALESCE($3, description), \
             category = COALESCE($4, category), \
             due_date = COALESCE($5, due_date), \
             {status_clause}updated_at = NOW() \
             WHERE id = $1 RETURNING {NOTICE_COLUMNS}"
        ))
        .bind(id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.category)
        .bind(patch.due_date)
        .fetch_optional(&self.pool)
        .await?;
        row.map(NoticeRow::into_notice).transpose()
    }

    async fn set_notice_decision(
        &self,
        id: Uuid,
        status: ContentStatus,
        approved_by: Uuid,
        rejection_reason: Option<String>,
    ) -> Result<Option<Notice>, RepositoryError> {
        let row = sqlx::query_as::<_, NoticeRow>(&format!(
            "UPDATE notices SET status = $2, approved_by = $3, \
             rejection_reason = COALESCE($4, rejection_reason), updated_at = NOW() \
             WHERE id = $1 RETURNING {NOTICE_COLUMNS}"
        ))
        .bind(id)
        .bind(status.as_str())
        .bind(approved_by)
        .bind(rejection_reason)
        .fetch_optional(&self.pool)
        .await?;
        row.map(NoticeRow::into_notice).transpose()
    }

    async fn delete_notice(&self, id: Uuid) -> Result<Option<Notice>, RepositoryError> {
        let row = sqlx::query_as::<_, NoticeRow>(&format!(
            "DELETE FROM notices WHERE id = $1 RETURNING {NOTICE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(NoticeRow::into_notice).transpose()
    }

    async fn add_subscription(
        &self,
        subscription: PushSubscription,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO push_subscriptions (endpoint, p256dh, auth, created_at) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (endpoint) DO UPDATE SET p256dh = EXCLUDED.p256dh, \
             auth = EXCLUDED.auth",
        )
        .bind(&subscription.endpoint)
        .bind(&subscription.p256dh)
        .bind(&subscription.auth)
        .bind(subscription.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove_subscription(&self, endpoint: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM push_subscriptions WHERE endpoint = $1")
            .bind(endpoint)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn get_subscriptions(&self) -> Result<Vec<PushSubscription>, RepositoryError> {
        let rows = sqlx::query_as::<_, SubscriptionRow>(
            "SELECT endpoint, p256dh, auth, created_at FROM push_subscriptions \
             ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(PushSubscription::from).collect())
    }
}

// ---------------------------------------------------------------------------
// MemoryRepository
// ---------------------------------------------------------------------------

/// MemoryRepository
///
/// An in-process implementation of the `Repository` contract with the same
/// set/pull semantics as the Postgres backend. The test suite runs the
/// workflows against this implementation so no database is required.
#[derive(Default)]
pub struct MemoryRepository {
    inner: RwLock<MemoryStore>,
}

#[derive(Default)]
struct MemoryStore {
    users: HashMap<Uuid, User>,
    clubs: HashMap<Uuid, Club>,
    events: HashMap<Uuid, Event>,
    notices: HashMap<Uuid, Notice>,
    subscriptions: Vec<PushSubscription>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn add_to_set(set: &mut Vec<Uuid>, value: Uuid) {
    if !set.contains(&value) {
        set.push(value);
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn get_users(&self) -> Result<Vec<User>, RepositoryError> {
        let mut users: Vec<User> = self.inner.read().await.users.values().cloned().collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }

    async fn create_user(&self, user: User) -> Result<User, RepositoryError> {
        self.inner.write().await.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn set_user_role(&self, id: Uuid, role: Role) -> Result<Option<User>, RepositoryError> {
        let mut store = self.inner.write().await;
        Ok(store.users.get_mut(&id).map(|u| {
            u.role = role;
            u.updated_at = Utc::now();
            u.clone()
        }))
    }

    async fn set_user_affiliation(
        &self,
        id: Uuid,
        affiliation: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let mut store = self.inner.write().await;
        Ok(store.users.get_mut(&id).map(|u| {
            u.club_affiliation = affiliation.to_string();
            u.updated_at = Utc::now();
            u.clone()
        }))
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.inner.write().await.users.remove(&id).is_some())
    }

    async fn add_club_membership(
        &self,
        user_id: Uuid,
        club_id: Uuid,
    ) -> Result<(), RepositoryError> {
        if let Some(u) = self.inner.write().await.users.get_mut(&user_id) {
            add_to_set(&mut u.club_memberships, club_id);
        }
        Ok(())
    }

    async fn add_registered_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<(), RepositoryError> {
        if let Some(u) = self.inner.write().await.users.get_mut(&user_id) {
            add_to_set(&mut u.registered_events, event_id);
        }
        Ok(())
    }

    async fn add_saved_notice(
        &self,
        user_id: Uuid,
        notice_id: Uuid,
    ) -> Result<(), RepositoryError> {
        if let Some(u) = self.inner.write().await.users.get_mut(&user_id) {
            add_to_set(&mut u.saved_notices, notice_id);
        }
        Ok(())
    }

    async fn add_event_bookmark(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<(), RepositoryError> {
        if let Some(u) = self.inner.write().await.users.get_mut(&user_id) {
            add_to_set(&mut u.bookmarks.events, event_id);
        }
        Ok(())
    }

    async fn add_notice_bookmark(
        &self,
        user_id: Uuid,
        notice_id: Uuid,
    ) -> Result<(), RepositoryError> {
        if let Some(u) = self.inner.write().await.users.get_mut(&user_id) {
            add_to_set(&mut u.bookmarks.notices, notice_id);
        }
        Ok(())
    }

    async fn get_club(&self, id: Uuid) -> Result<Option<Club>, RepositoryError> {
        Ok(self.inner.read().await.clubs.get(&id).cloned())
    }

    async fn get_club_by_name(&self, name: &str) -> Result<Option<Club>, RepositoryError> {
        Ok(self
            .inner
            .read()
            .await
            .clubs
            .values()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn get_clubs(&self) -> Result<Vec<Club>, RepositoryError> {
        let mut clubs: Vec<Club> = self.inner.read().await.clubs.values().cloned().collect();
        clubs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clubs)
    }

    async fn get_clubs_by_coordinator(
        &self,
        coordinator: Uuid,
    ) -> Result<Vec<Club>, RepositoryError> {
        let mut clubs: Vec<Club> = self
            .inner
            .read()
            .await
            .clubs
            .values()
            .filter(|c| c.coordinator == coordinator)
            .cloned()
            .collect();
        clubs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clubs)
    }

    async fn create_club(&self, club: Club) -> Result<Club, RepositoryError> {
        self.inner.write().await.clubs.insert(club.id, club.clone());
        Ok(club)
    }

    async fn update_club(
        &self,
        id: Uuid,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Option<Club>, RepositoryError> {
        let mut store = self.inner.write().await;
        Ok(store.clubs.get_mut(&id).map(|c| {
            if let Some(name) = name {
                c.name = name;
            }
            if let Some(description) = description {
                c.description = description;
            }
            c.updated_at = Utc::now();
            c.clone()
        }))
    }

    async fn add_club_member(
        &self,
        club_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), RepositoryError> {
        if let Some(c) = self.inner.write().await.clubs.get_mut(&club_id) {
            add_to_set(&mut c.members, user_id);
        }
        Ok(())
    }

    async fn add_club_event(
        &self,
        club_id: Uuid,
        event_id: Uuid,
    ) -> Result<(), RepositoryError> {
        if let Some(c) = self.inner.write().await.clubs.get_mut(&club_id) {
            add_to_set(&mut c.events, event_id);
        }
        Ok(())
    }

    async fn add_club_notice(
        &self,
        club_id: Uuid,
        notice_id: Uuid,
    ) -> Result<(), RepositoryError> {
        if let Some(c) = self.inner.write().await.clubs.get_mut(&club_id) {
            add_to_set(&mut c.notices, notice_id);
        }
        Ok(())
    }

    async fn remove_club_notice(
        &self,
        club_id: Uuid,
        notice_id: Uuid,
    ) -> Result<(), RepositoryError> {
        if let Some(c) = self.inner.write().await.clubs.get_mut(&club_id) {
            c.notices.retain(|id| *id != notice_id);
        }
        Ok(())
    }

    async fn push_membership_request(
        &self,
        club_id: Uuid,
        request: MembershipRequest,
    ) -> Result<(), RepositoryError> {
        if let Some(c) = self.inner.write().await.clubs.get_mut(&club_id) {
            c.membership_requests.push(request);
        }
        Ok(())
    }

    async fn set_membership_request_status(
        &self,
        club_id: Uuid,
        request_id: Uuid,
        status: RequestStatus,
    ) -> Result<Option<MembershipRequest>, RepositoryError> {
        let mut store = self.inner.write().await;
        let Some(club) = store.clubs.get_mut(&club_id) else {
            return Ok(None);
        };
        let entry = club
            .membership_requests
            .iter_mut()
            .find(|r| r.id == request_id);
        Ok(entry.map(|r| {
            r.status = status;
            r.clone()
        }))
    }

    async fn get_event(&self, id: Uuid) -> Result<Option<Event>, RepositoryError> {
        Ok(self.inner.read().await.events.get(&id).cloned())
    }

    async fn get_events_by_status(
        &self,
        status: ContentStatus,
    ) -> Result<Vec<Event>, RepositoryError> {
        let mut events: Vec<Event> = self
            .inner
            .read()
            .await
            .events
            .values()
            .filter(|e| e.status == status)
            .cloned()
            .collect();
        match status {
            ContentStatus::Approved => events.sort_by_key(|e| e.date),
            _ => events.sort_by_key(|e| e.created_at),
        }
        Ok(events)
    }

    async fn get_events_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Event>, RepositoryError> {
        let store = self.inner.read().await;
        let mut events: Vec<Event> = ids
            .iter()
            .filter_map(|id| store.events.get(id).cloned())
            .collect();
        events.sort_by_key(|e| e.date);
        Ok(events)
    }

    async fn get_club_events(&self, club_id: Uuid) -> Result<Vec<Event>, RepositoryError> {
        let mut events: Vec<Event> = self
            .inner
            .read()
            .await
            .events
            .values()
            .filter(|e| e.club == Some(club_id))
            .cloned()
            .collect();
        events.sort_by_key(|e| e.date);
        Ok(events)
    }

    async fn create_event(&self, event: Event) -> Result<Event, RepositoryError> {
        self.inner
            .write()
            .await
            .events
            .insert(event.id, event.clone());
        Ok(event)
    }

    async fn update_event_content(
        &self,
        id: Uuid,
        patch: UpdateEventRequest,
    ) -> Result<Option<Event>, RepositoryError> {
        let mut store = self.inner.write().await;
        Ok(store.events.get_mut(&id).map(|e| {
            if let Some(name) = patch.name {
                e.name = name;
            }
            if let Some(description) = patch.description {
                e.description = description;
            }
            if let Some(date) = patch.date {
                e.date = date;
            }
            if let Some(time) = patch.time {
                e.time = time;
            }
            if let Some(location) = patch.location {
                e.location = location;
            }
            if let Some(category) = patch.category {
                e.category = category;
            }
            e.status = ContentStatus::Pending;
            e.updated_at = Utc::now();
            e.clone()
        }))
    }

    async fn set_event_decision(
        &self,
        id: Uuid,
        status: ContentStatus,
        approved_by: Uuid,
        rejection_reason: Option<String>,
    ) -> Result<Option<Event>, RepositoryError> {
        let mut store = self.inner.write().await;
        Ok(store.events.get_mut(&id).map(|e| {
            e.status = status;
            e.approved_by = Some(approved_by);
            if let Some(reason) = rejection_reason {
                e.rejection_reason = Some(reason);
            }
            e.updated_at = Utc::now();
            e.clone()
        }))
    }

    async fn add_event_participant(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), RepositoryError> {
        if let Some(e) = self.inner.write().await.events.get_mut(&event_id) {
            add_to_set(&mut e.participants, user_id);
        }
        Ok(())
    }

    async fn get_notice(&self, id: Uuid) -> Result<Option<Notice>, RepositoryError> {
        Ok(self.inner.read().await.notices.get(&id).cloned())
    }

    async fn get_notices_by_status(
        &self,
        status: ContentStatus,
    ) -> Result<Vec<Notice>, RepositoryError> {
        let mut notices: Vec<Notice> = self
            .inner
            .read()
            .await
            .notices
            .values()
            .filter(|n| n.status == status)
            .cloned()
            .collect();
        match status {
            ContentStatus::Approved => notices.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            _ => notices.sort_by_key(|n| n.created_at),
        }
        Ok(notices)
    }

    async fn get_notices_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Notice>, RepositoryError> {
        let store = self.inner.read().await;
        let mut notices: Vec<Notice> = ids
            .iter()
            .filter_map(|id| store.notices.get(id).cloned())
            .collect();
        notices.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notices)
    }

    async fn get_club_notices(&self, club_id: Uuid) -> Result<Vec<Notice>, RepositoryError> {
        let mut notices: Vec<Notice> = self
            .inner
            .read()
            .await
            .notices
            .values()
            .filter(|n| n.club == Some(club_id))
            .cloned()
            .collect();
        notices.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notices)
    }

    async fn create_notice(&self, notice: Notice) -> Result<Notice, RepositoryError> {
        self.inner
            .write()
            .await
            .notices
            .insert(notice.id, notice.clone());
        Ok(notice)
    }

    async fn update_notice_content(
        &self,
        id: Uuid,
        patch: NoticeContentPatch,
        reset_status: bool,
    ) -> Result<Option<Notice>, RepositoryError> {
        let mut store = self.inner.write().await;
        Ok(store.notices.get_mut(&id).map(|n| {
            if let Some(title) = patch.title {
                n.title = title;
            }
            if let Some(description) = patch.description {
                n.description = description;
            }
            if let Some(category) = patch.category {
                n.category = category;
            }
            if let Some(due_date) = patch.due_date {
                n.due_date = Some(due_date);
            }
            if reset_status {
                n.status = ContentStatus::Pending;
            }
            n.updated_at = Utc::now();
            n.clone()
        }))
    }

    async fn set_notice_decision(
        &self,
        id: Uuid,
        status: ContentStatus,
        approved_by: Uuid,
        rejection_reason: Option<String>,
    ) -> Result<Option<Notice>, RepositoryError> {
        let mut store = self.inner.write().await;
        Ok(store.notices.get_mut(&id).map(|n| {
            n.status = status;
            n.approved_by = Some(approved_by);
            if let Some(reason) = rejection_reason {
                n.rejection_reason = Some(reason);
            }
            n.updated_at = Utc::now();
            n.clone()
        }))
    }

    async fn delete_notice(&self, id: Uuid) -> Result<Option<Notice>, RepositoryError> {
        Ok(self.inner.write().await.notices.remove(&id))
    }

    async fn add_subscription(
        &self,
        subscription: PushSubscription,
    ) -> Result<(), RepositoryError> {
        let mut store = self.inner.write().await;
        store
            .subscriptions
            .retain(|s| s.endpoint != subscription.endpoint);
        store.subscriptions.push(subscription);
        Ok(())
    }

    async fn remove_subscription(&self, endpoint: &str) -> Result<bool, RepositoryError> {
        let mut store = self.inner.write().await;
        let before = store.subscriptions.len();
        store.subscriptions.retain(|s| s.endpoint != endpoint);
        Ok(store.subscriptions.len() < before)
    }

    async fn get_subscriptions(&self) -> Result<Vec<PushSubscription>, RepositoryError> {
        Ok(self.inner.read().await.subscriptions.clone())
    }
}
