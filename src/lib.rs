use axum::{
    Router,
    extract::{FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::Response,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod approval;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod membership;
pub mod models;
pub mod repository;

// Module for routing segregation (Public, Authenticated, Coordinator, Admin).
pub mod routes;
use auth::AuthUser;
use routes::{admin, authenticated, coordinator, public};

// --- Public Re-exports ---

// Makes core state types easily accessible to the main application entry
// point (main.rs) and to the test suite.
pub use config::AppConfig;
pub use repository::{MemoryRepository, PostgresRepository, RepositoryState};

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation (Swagger JSON) for the
/// application by aggregating every handler and schema decorated with the
/// `#[utoipa::path]` and `#[derive(utoipa::ToSchema)]` macros. The resulting
/// JSON is served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::register_user, handlers::login_user, handlers::get_me, handlers::delete_me,
        handlers::get_events, handlers::get_notices, handlers::get_clubs,
        handlers::register_for_event, handlers::save_notice, handlers::bookmark_event,
        handlers::bookmark_notice, handlers::request_club_membership, handlers::get_my_clubs,
        handlers::get_my_events, handlers::get_my_notices, handlers::get_my_bookmarks,
        handlers::subscribe_push, handlers::unsubscribe_push,
        handlers::coordinator_submit_event, handlers::coordinator_update_event,
        handlers::coordinator_club_events, handlers::coordinator_submit_notice,
        handlers::coordinator_update_notice, handlers::coordinator_club_notices,
        handlers::get_my_club, handlers::update_club, handlers::get_membership_requests,
        handlers::respond_membership,
        handlers::admin_submit_event, handlers::get_pending_events, handlers::decide_event,
        handlers::admin_post_notice, handlers::admin_edit_notice, handlers::remove_notice,
        handlers::get_pending_notices, handlers::decide_notice, handlers::create_club,
        handlers::get_all_users, handlers::change_user_role, handlers::update_user_affiliation,
        handlers::get_push_subscriptions
    ),
    components(
        schemas(
            models::Role, models::ContentStatus, models::RequestStatus, models::PublicUser,
            models::Bookmarks, models::Club, models::ClubSummary, models::MembershipRequest,
            models::Event, models::Notice, models::PushSubscription,
            models::PendingEventEntry, models::PendingNoticeEntry,
            models::MembershipRequestEntry, models::MemberProfile, models::MyClubEntry,
            models::BookmarksView, models::RegisterRequest, models::LoginRequest,
            models::SubmitEventRequest, models::UpdateEventRequest,
            models::EventDecisionRequest, models::SubmitNoticeRequest,
            models::UpdateNoticeRequest, models::NoticeDecisionRequest,
            models::RespondMembershipRequest, models::CreateClubRequest,
            models::UpdateClubRequest, models::ChangeRoleRequest,
            models::UpdateAffiliationRequest, models::SubscribeRequest,
            models::UnsubscribeRequest
        )
    ),
    tags(
        (name = "campus-portal", description = "Campus Club Management API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single, thread-safe, immutable container holding the application's
/// services and configuration, shared across all incoming requests.
#[derive(Clone)]
pub struct AppState {
    /// Repository Layer: the abstract document store behind the workflows.
    pub repo: RepositoryState,
    /// Configuration: the loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// These allow extractors (notably AuthUser) to selectively pull components
// from the shared AppState.

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// auth_middleware
///
/// Enforces authentication for the `authenticated_routes` and the nested
/// coordinator/admin routers. `AuthUser` implements `FromRequestParts`, so if
/// authentication (token validation, repository lookup) fails, the extractor
/// rejects the request with a 401 envelope before the handler runs.
async fn auth_middleware(_auth_user: AuthUser, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// create_router
///
/// Assembles the application's entire routing structure, applies global and
/// scoped middleware, and registers the application state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Documentation: serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public routes: no middleware applied.
        .merge(public::public_routes())
        // Authenticated routes: protected by the auth middleware.
        .merge(
            authenticated::authenticated_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        // Coordinator routes: authenticated layer plus in-handler role and
        // ownership checks.
        .nest(
            "/coordinator",
            coordinator::coordinator_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        // Admin routes: authenticated layer; the 'admin' role check is
        // performed inside the handlers after authentication passes.
        .nest(
            "/admin",
            admin::admin_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        .with_state(state);

    // 3. Observability and Correlation Layers (applied outermost)
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID generation: a unique UUID per request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request tracing: wraps the request/response lifecycle in
                // a span carrying the request id.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID propagation back to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS layer.
        .layer(cors)
}

/// trace_span_logger
///
/// Helper used by `TraceLayer` to customize span creation: extracts the
/// `x-request-id` header (if present) and includes it alongside the HTTP
/// method and URI, so every log line for one request is correlated.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
