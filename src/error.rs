use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// RepositoryError
///
/// Failure type for the persistence layer. Storage backends wrap their native
/// errors here so the workflow engines stay backend-agnostic.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored document could not be mapped back into its domain model
    /// (unknown role/status string, malformed embedded request list).
    #[error("corrupt document in {collection}: {detail}")]
    Corrupt {
        collection: &'static str,
        detail: String,
    },
}

/// ApiError
///
/// The application-wide error taxonomy. Every workflow failure is one of these
/// variants; the boundary turns them into an HTTP status plus the normalized
/// `{success: false, message}` JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, malformed, expired, or orphaned credential.
    #[error("{0}")]
    Unauthenticated(String),

    /// Authenticated, but the role or ownership check failed.
    #[error("{0}")]
    Forbidden(String),

    /// A referenced entity id does not resolve.
    #[error("{0}")]
    NotFound(String),

    /// Malformed enum value or missing required field.
    #[error("{0}")]
    InvalidArgument(String),

    /// Membership request from a user who already belongs to the club.
    #[error("{0}")]
    AlreadyMember(String),

    /// A pending membership request for this user/club pair already exists.
    #[error("{0}")]
    DuplicateRequest(String),

    /// Attempted edit of a record whose state forbids it (approved content).
    #[error("{0}")]
    InvalidState(String),

    /// Unique-field collision (duplicate email, duplicate club name).
    #[error("{0}")]
    Conflict(String),

    /// Unexpected repository or runtime failure. The detail is logged
    /// server-side and never sent to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl ApiError {
    /// Wraps any displayable failure as an `Internal` error.
    pub fn internal(e: impl std::fmt::Display) -> Self {
        ApiError::Internal(e.to_string())
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidArgument(_)
            | ApiError::AlreadyMember(_)
            | ApiError::DuplicateRequest(_)
            | ApiError::InvalidState(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorBody {
            success: bool,
            message: String,
        }

        let status = self.status();
        let message = match &self {
            ApiError::Internal(detail) => {
                tracing::error!("internal error: {detail}");
                "Something went wrong on the server".to_string()
            }
            other => other.to_string(),
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}
