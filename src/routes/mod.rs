/// Router Module Index
///
/// Organizes the application's routing logic into security-segregated
/// modules. Access control is applied explicitly at the module level (via
/// Axum layers and in-handler role checks), so no protected endpoint can be
/// exposed by accident.
///
/// The four modules map directly to the defined access roles.

/// Routes accessible to all clients (registration, login, discovery feeds).
/// Listing handlers enforce the approved-only filter at the workflow level.
pub mod public;

/// Routes protected by the `AuthUser` extractor middleware.
/// Requires a validated user session of any role.
pub mod authenticated;

/// Routes for club coordinators, nested under `/coordinator`. Handlers
/// enforce the coordinator role (admins pass via the role hierarchy) and
/// per-club ownership.
pub mod coordinator;

/// Routes restricted exclusively to users with the `admin` role.
pub mod admin;
