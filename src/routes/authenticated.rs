use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Authenticated Router Module
///
/// Defines the routes accessible to any user who has passed the
/// authentication layer: the standard student feature set. Profile access,
/// event registration, saves and bookmarks, club join requests, and push
/// subscription management.
///
/// Every handler here relies on the `AuthUser` extractor middleware applied
/// on the layer above this module, so each one receives a validated identity
/// for its ownership-scoped writes.
pub fn authenticated_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // GET/DELETE /me
        // The caller's profile, and self-service account removal.
        .route("/me", get(handlers::get_me).delete(handlers::delete_me))
        // GET /me/clubs | /me/events | /me/notices | /me/bookmarks
        // Profile collections, resolved and filtered to approved content.
        .route("/me/clubs", get(handlers::get_my_clubs))
        .route("/me/events", get(handlers::get_my_events))
        .route("/me/notices", get(handlers::get_my_notices))
        .route("/me/bookmarks", get(handlers::get_my_bookmarks))
        // POST /events/{id}/register
        // Participant registration for an approved event. Idempotent set-adds
        // on both the event and the user document.
        .route("/events/{id}/register", post(handlers::register_for_event))
        // POST /events/{id}/bookmark, /notices/{id}/save, /notices/{id}/bookmark
        .route("/events/{id}/bookmark", post(handlers::bookmark_event))
        .route("/notices/{id}/save", post(handlers::save_notice))
        .route("/notices/{id}/bookmark", post(handlers::bookmark_notice))
        // POST /clubs/{id}/join
        // Files a membership request; at most one pending request per club.
        .route("/clubs/{id}/join", post(handlers::request_club_membership))
        // POST/DELETE /push/subscribe
        // Web-push subscription registration, repository-backed.
        .route(
            "/push/subscribe",
            post(handlers::subscribe_push).delete(handlers::unsubscribe_push),
        )
}
