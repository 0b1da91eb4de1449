use argon2::Argon2;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::AppConfig,
    error::{ApiError, ApiResult},
    models::{Club, Role, User},
    repository::{Repository, RepositoryState},
};

// --- Password handling ---

pub fn hash_password(password: impl AsRef<[u8]>) -> password_hash::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_ref(), &salt)
        .map(|h| h.to_string())
}

pub fn verify_password(
    password: impl AsRef<[u8]>,
    password_hash: impl AsRef<str>,
) -> password_hash::Result<bool> {
    let parsed_hash = PasswordHash::new(password_hash.as_ref())?;
    Ok(Argon2::default()
        .verify_password(password.as_ref(), &parsed_hash)
        .is_ok())
}

// --- Token handling ---

/// Claims
///
/// The payload structure signed into every access token. The role and display
/// fields are informational for the client; the server always re-resolves the
/// current user record on each request, so a stale role in the token cannot
/// grant stale permissions.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's UUID.
    pub sub: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Expiration time, seconds since the epoch.
    pub exp: usize,
    /// Issued-at time, seconds since the epoch.
    pub iat: usize,
}

/// Signs a fresh access token for `user`.
pub fn generate_token(user: &User, config: &AppConfig) -> ApiResult<String> {
    let now = Utc::now();
    let exp = now + Duration::hours(config.token_expiry_hours);
    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        name: user.name.clone(),
        role: user.role,
        exp: exp.timestamp() as usize,
        iat: now.timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(ApiError::internal)
}

// --- Request identity ---

/// AuthUser
///
/// The resolved identity of an authenticated request: the extractor output
/// every protected handler receives. Credential fields never appear here.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Pulls the bearer token out of the request: the `Authorization` header
/// first, then the `accessToken` cookie the web client sets.
fn extract_token(parts: &Parts) -> Option<String> {
    if let Some(value) = parts.headers.get(header::AUTHORIZATION) {
        if let Ok(value) = value.to_str() {
            if let Some(token) = value.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    let cookies = parts.headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        pair.trim()
            .strip_prefix("accessToken=")
            .map(|t| t.to_string())
    })
}

/// AuthUser Extractor Implementation
///
/// Implements Axum's `FromRequestParts`, making `AuthUser` usable as a
/// function argument in any protected handler. The flow:
/// 1. Token extraction (bearer header or cookie).
/// 2. Signature and expiry validation.
/// 3. Repository lookup: a token whose subject no longer exists is rejected,
///    and the role used for authorization is always the current one.
///
/// Every failure maps to `Unauthenticated`; a request is never silently
/// downgraded to anonymous.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    RepositoryState: FromRef<S>,
    AppConfig: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let repo = RepositoryState::from_ref(state);
        let config = AppConfig::from_ref(state);

        let token = extract_token(parts)
            .ok_or_else(|| ApiError::Unauthenticated("Unauthorized request".to_string()))?;

        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
        let mut validation = Validation::default();
        validation.validate_exp = true;

        let token_data = decode::<Claims>(&token, &decoding_key, &validation)
            .map_err(|_| ApiError::Unauthenticated("Invalid access token".to_string()))?;

        let user = repo
            .get_user(token_data.claims.sub)
            .await?
            .ok_or_else(|| ApiError::Unauthenticated("Invalid access token".to_string()))?;

        Ok(AuthUser {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        })
    }
}

// --- Guards ---

/// Fails `Forbidden` unless the caller's role satisfies `required` under the
/// role hierarchy (admin passes every check).
pub fn require_role(user: &AuthUser, required: Role) -> ApiResult<()> {
    if user.role.satisfies(required) {
        Ok(())
    } else {
        Err(ApiError::Forbidden(format!(
            "Access denied: {} role required",
            required
        )))
    }
}

/// Loads the club and fails unless the caller is its coordinator. Admins
/// always bypass the ownership check; that bypass is the single normalized
/// rule for every club-scoped mutation.
pub async fn require_club_ownership(
    repo: &dyn Repository,
    user: &AuthUser,
    club_id: Uuid,
) -> ApiResult<Club> {
    let club = repo
        .get_club(club_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;

    if user.role == Role::Admin || club.coordinator == user.id {
        Ok(club)
    } else {
        Err(ApiError::Forbidden(
            "You are not the coordinator of this club".to_string(),
        ))
    }
}
