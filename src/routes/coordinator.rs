use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post, put},
};

/// Coordinator Router Module
///
/// Defines the routes for club coordinators, nested under `/coordinator`.
/// Handlers enforce the `club-coordinator` role (which admins satisfy via the
/// role hierarchy) and, where an operation targets a specific club, the
/// single normalized ownership check with its explicit admin bypass.
pub fn coordinator_routes() -> Router<AppState> {
    Router::new()
        // GET /coordinator/clubs
        // The caller's clubs with resolved rosters and full content lists.
        .route("/clubs", get(handlers::get_my_club))
        // PUT /coordinator/clubs/{id}
        // Club display-field edits, ownership enforced.
        .route("/clubs/{id}", put(handlers::update_club))
        // GET /coordinator/clubs/{id}/requests
        // The club's pending membership requests, enriched with requester
        // identity.
        .route(
            "/clubs/{id}/requests",
            get(handlers::get_membership_requests),
        )
        // POST /coordinator/clubs/membership-response
        // Accepts or rejects a pending membership request.
        .route(
            "/clubs/membership-response",
            post(handlers::respond_membership),
        )
        // POST /coordinator/events, PUT /coordinator/events/{id}
        // Event submission (into the pending queue) and creator-only edits.
        .route("/events", post(handlers::coordinator_submit_event))
        .route("/events/{id}", put(handlers::coordinator_update_event))
        // GET /coordinator/clubs/{id}/events
        // Club events of every status for the coordinator dashboard.
        .route("/clubs/{id}/events", get(handlers::coordinator_club_events))
        // POST /coordinator/notices, PUT /coordinator/notices/{id}
        .route("/notices", post(handlers::coordinator_submit_notice))
        .route("/notices/{id}", put(handlers::coordinator_update_notice))
        // GET /coordinator/clubs/{id}/notices
        .route(
            "/clubs/{id}/notices",
            get(handlers::coordinator_club_notices),
        )
}
