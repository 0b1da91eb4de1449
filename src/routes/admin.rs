use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post, put},
};

/// Admin Router Module
///
/// Defines the routes exclusively accessible to users with the `admin` role:
/// the approval queues and decisions, admin-originated content creation, club
/// creation, and user administration.
///
/// Access Control:
/// The router is nested behind the authentication layer; each handler then
/// performs the explicit `admin` role check before touching the workflow.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // POST /admin/events
        // Admin-originated event creation: auto-approved, club optional.
        .route("/events", post(handlers::admin_submit_event))
        // GET /admin/events/pending
        // The global pending queue for events.
        .route("/events/pending", get(handlers::get_pending_events))
        // POST /admin/events/approval
        // The approve/reject decision endpoint. Retry-safe by design.
        .route("/events/approval", post(handlers::decide_event))
        // POST /admin/notices
        // Admin-originated notice creation.
        .route("/notices", post(handlers::admin_post_notice))
        // PUT/DELETE /admin/notices/{id}
        // Override edit (status preserved) and removal with club unlinking.
        .route(
            "/notices/{id}",
            put(handlers::admin_edit_notice).delete(handlers::remove_notice),
        )
        // GET /admin/notices/pending
        .route("/notices/pending", get(handlers::get_pending_notices))
        // POST /admin/notices/approval
        .route("/notices/approval", post(handlers::decide_notice))
        // POST /admin/clubs
        // Club creation, including coordinator promotion and roster seeding.
        .route("/clubs", post(handlers::create_club))
        // GET /admin/users
        // Every user, credential fields excluded.
        .route("/users", get(handlers::get_all_users))
        // POST /admin/users/role
        // Role reassignment, validated against the three known roles.
        .route("/users/role", post(handlers::change_user_role))
        // PUT /admin/users/{email}
        // Affiliation label updates, addressed by email.
        .route("/users/{email}", put(handlers::update_user_affiliation))
        // GET /admin/push/subscriptions
        .route(
            "/push/subscriptions",
            get(handlers::get_push_subscriptions),
        )
}
