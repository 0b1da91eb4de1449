//! Club membership workflow.
//!
//! A join request is an embedded entry on the club document. At most one
//! `pending` entry may exist per user per club; terminal entries accumulate
//! as history. Acceptance adds the user to the roster and the club to the
//! user's memberships, both with set semantics so a repeated response cannot
//! duplicate either side.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    auth::{AuthUser, require_club_ownership},
    error::{ApiError, ApiResult},
    models::{
        MembershipRequest, MembershipRequestEntry, RequestStatus, RespondMembershipRequest,
    },
    repository::Repository,
};

/// Validates a response string: only the two terminal states are accepted.
fn parse_response(status: &str) -> ApiResult<RequestStatus> {
    match status {
        "accepted" => Ok(RequestStatus::Accepted),
        "rejected" => Ok(RequestStatus::Rejected),
        _ => Err(ApiError::InvalidArgument(
            "Status must be either 'accepted' or 'rejected'".to_string(),
        )),
    }
}

/// Files a membership request for the calling user. Existing members and
/// users with an open request are turned away with distinct conflicts so the
/// client can phrase the failure.
pub async fn request_membership(
    repo: &dyn Repository,
    actor: &AuthUser,
    club_id: Uuid,
) -> ApiResult<()> {
    let club = repo
        .get_club(club_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;

    if club.members.contains(&actor.id) {
        return Err(ApiError::AlreadyMember(
            "You are already a member of this club".to_string(),
        ));
    }

    let has_pending = club
        .membership_requests
        .iter()
        .any(|r| r.user == actor.id && r.status == RequestStatus::Pending);
    if has_pending {
        return Err(ApiError::DuplicateRequest(
            "You already have a pending membership request for this club".to_string(),
        ));
    }

    repo.push_membership_request(
        club_id,
        MembershipRequest {
            id: Uuid::new_v4(),
            user: actor.id,
            status: RequestStatus::Pending,
            request_date: Utc::now(),
        },
    )
    .await?;

    Ok(())
}

/// Applies a coordinator/admin response to a membership request. On
/// acceptance the user joins the roster and the club joins the user's
/// membership list; both writes are idempotent, so responding twice is safe.
pub async fn respond(
    repo: &dyn Repository,
    actor: &AuthUser,
    req: RespondMembershipRequest,
) -> ApiResult<RequestStatus> {
    let decision = parse_response(&req.status)?;

    let club = require_club_ownership(repo, actor, req.club_id).await?;

    if !club.membership_requests.iter().any(|r| r.id == req.request_id) {
        return Err(ApiError::NotFound(
            "Membership request not found".to_string(),
        ));
    }

    let entry = repo
        .set_membership_request_status(req.club_id, req.request_id, decision)
        .await?
        .ok_or_else(|| ApiError::NotFound("Membership request not found".to_string()))?;

    if decision == RequestStatus::Accepted {
        repo.add_club_member(req.club_id, entry.user).await?;
        repo.add_club_membership(entry.user, req.club_id).await?;
    }

    Ok(decision)
}

/// Lists a club's pending requests for its coordinator (or an admin), each
/// enriched with the requester's display identity, never credential fields.
pub async fn pending_requests(
    repo: &dyn Repository,
    actor: &AuthUser,
    club_id: Uuid,
) -> ApiResult<Vec<MembershipRequestEntry>> {
    let club = require_club_ownership(repo, actor, club_id).await?;

    let mut entries = Vec::new();
    for request in club
        .membership_requests
        .into_iter()
        .filter(|r| r.status == RequestStatus::Pending)
    {
        let user = repo.get_user(request.user).await?;
        entries.push(MembershipRequestEntry {
            id: request.id,
            user: request.user,
            status: request.status,
            request_date: request.request_date,
            user_name: user.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
            user_email: user.map(|u| u.email).unwrap_or_default(),
        });
    }
    Ok(entries)
}
