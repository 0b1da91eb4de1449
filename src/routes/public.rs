use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Defines endpoints that are **unauthenticated** and accessible to any
/// client. Discovery handlers only ever surface approved content; pending and
/// rejected records stay confined to the coordinator and admin views.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Unauthenticated liveness endpoint for monitoring and load balancers.
        .route("/health", get(|| async { "ok" }))
        // POST /auth/register
        // Self-service account creation. New accounts start as 'student'.
        .route("/auth/register", post(handlers::register_user))
        // POST /auth/login
        // Credential verification and access-token issuing.
        .route("/auth/login", post(handlers::login_user))
        // GET /events
        // The approved-events discovery feed, date ascending.
        .route("/events", get(handlers::get_events))
        // GET /notices
        // Approved notices, newest first.
        .route("/notices", get(handlers::get_notices))
        // GET /clubs
        // All clubs with roster and request-queue fields stripped.
        .route("/clubs", get(handlers::get_clubs))
}
