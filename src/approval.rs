//! Approval workflow for Events and Notices.
//!
//! Both entities share the same lifecycle: coordinator submissions start
//! `pending` and wait in the admin queue; admin-originated submissions are
//! approved on creation. A decision writes the record's status first and then
//! performs the idempotent club-array linkage, so a retried or concurrent
//! decision can never duplicate a link.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    auth::{AuthUser, require_club_ownership},
    error::{ApiError, ApiResult},
    models::{
        ContentStatus, Event, EventDecisionRequest, Notice, NoticeDecisionRequest,
        PendingEventEntry, PendingNoticeEntry, Role, SubmitEventRequest, SubmitNoticeRequest,
        UpdateEventRequest, UpdateNoticeRequest,
    },
    repository::{NoticeContentPatch, Repository},
};

/// Validates a decision string: only the two terminal states are accepted.
fn parse_decision(status: &str) -> ApiResult<ContentStatus> {
    match status {
        "approved" => Ok(ContentStatus::Approved),
        "rejected" => Ok(ContentStatus::Rejected),
        _ => Err(ApiError::InvalidArgument(
            "Status must be either 'approved' or 'rejected'".to_string(),
        )),
    }
}

// --- Events ---

/// Creates an event. Admin-originated submissions (admin actor, or an
/// explicitly flagged payload) skip the queue entirely: the record is created
/// `approved` and linked into its club in the same request. Coordinator
/// submissions must reference a club the actor owns and start `pending`.
pub async fn submit_event(
    repo: &dyn Repository,
    actor: &AuthUser,
    req: SubmitEventRequest,
) -> ApiResult<Event> {
    let club = match req.club_id {
        Some(club_id) => Some(
            repo.get_club(club_id)
                .await?
                .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?,
        ),
        None => None,
    };

    let admin_originated = actor.role == Role::Admin || req.is_admin_event.unwrap_or(false);

    // The admin-originated flag bypasses the queue, never the ownership
    // check: a non-admin submission is always club-scoped and owned.
    if actor.role != Role::Admin {
        let club = club
            .as_ref()
            .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;
        if club.coordinator != actor.id {
            return Err(ApiError::Forbidden(
                "You are not authorized to create events for this club".to_string(),
            ));
        }
    }

    let now = Utc::now();
    let event = Event {
        id: Uuid::new_v4(),
        name: req.name,
        description: req.description,
        date: req.date,
        time: req.time,
        location: req.location,
        category: req.category.unwrap_or_else(|| "general".to_string()),
        club: club.as_ref().map(|c| c.id),
        status: if admin_originated {
            ContentStatus::Approved
        } else {
            ContentStatus::Pending
        },
        created_by: actor.id,
        approved_by: admin_originated.then_some(actor.id),
        rejection_reason: None,
        participants: Vec::new(),
        created_at: now,
        updated_at: now,
    };

    let event = repo.create_event(event).await?;

    // Status write first, linkage second; the set-add is a no-op on retry.
    if admin_originated {
        if let Some(club_id) = event.club {
            repo.add_club_event(club_id, event.id).await?;
        }
    }

    Ok(event)
}

/// Edits an event. Only the creator may edit, approved content is immutable
/// to its creator, and a successful edit always re-enters the pending queue
/// regardless of what the payload contained.
pub async fn update_event(
    repo: &dyn Repository,
    actor: &AuthUser,
    event_id: Uuid,
    patch: UpdateEventRequest,
) -> ApiResult<Event> {
    let event = repo
        .get_event(event_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    if event.created_by != actor.id {
        return Err(ApiError::Forbidden(
            "You are not authorized to update this event".to_string(),
        ));
    }

    if event.status == ContentStatus::Approved {
        return Err(ApiError::InvalidState(
            "Cannot update an approved event. Please contact admin.".to_string(),
        ));
    }

    repo.update_event_content(event_id, patch)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))
}

/// Applies an admin decision to an event. Approval links the event into its
/// club's array with set semantics, so deciding the same event twice leaves
/// exactly one link.
pub async fn decide_event(
    repo: &dyn Repository,
    actor: &AuthUser,
    req: EventDecisionRequest,
) -> ApiResult<Event> {
    let decision = parse_decision(&req.status)?;

    // The reason only applies to rejections; it is ignored on approvals.
    let rejection_reason = match decision {
        ContentStatus::Rejected => req.rejection_reason,
        _ => None,
    };

    let event = repo
        .set_event_decision(req.event_id, decision, actor.id, rejection_reason)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    if decision == ContentStatus::Approved {
        if let Some(club_id) = event.club {
            repo.add_club_event(club_id, event.id).await?;
        }
    }

    Ok(event)
}

/// The admin-global pending queue, enriched with the club name and creator
/// identity each entry needs for review. No ordering is guaranteed.
pub async fn pending_events(repo: &dyn Repository) -> ApiResult<Vec<PendingEventEntry>> {
    let events = repo.get_events_by_status(ContentStatus::Pending).await?;
    let mut entries = Vec::with_capacity(events.len());
    for event in events {
        let creator = repo.get_user(event.created_by).await?;
        entries.push(PendingEventEntry {
            club_name: match event.club {
                Some(club_id) => repo.get_club(club_id).await?.map(|c| c.name),
                None => None,
            },
            creator_name: creator.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
            creator_email: creator.map(|u| u.email).unwrap_or_default(),
            event,
        });
    }
    Ok(entries)
}

/// The public discovery feed: approved events only, date ascending.
pub async fn approved_events(repo: &dyn Repository) -> ApiResult<Vec<Event>> {
    Ok(repo.get_events_by_status(ContentStatus::Approved).await?)
}

/// Coordinator view of a club's events, all statuses included. Ownership
/// (or admin) required.
pub async fn club_events(
    repo: &dyn Repository,
    actor: &AuthUser,
    club_id: Uuid,
) -> ApiResult<Vec<Event>> {
    require_club_ownership(repo, actor, club_id).await?;
    Ok(repo.get_club_events(club_id).await?)
}

// --- Notices ---

/// Creates a notice. Same shape as `submit_event`, with two notice-specific
/// rules: the body text may arrive under `content` or `description`
/// (`content` wins), and a submission flagged `is_admin_notice` is stored
/// clubless even when a club id was supplied.
pub async fn submit_notice(
    repo: &dyn Repository,
    actor: &AuthUser,
    req: SubmitNoticeRequest,
) -> ApiResult<Notice> {
    let description = req.body().ok_or_else(|| {
        ApiError::InvalidArgument("Notice content is required".to_string())
    })?;

    let admin_notice = req.is_admin_notice.unwrap_or(false);
    let admin_originated = actor.role == Role::Admin || admin_notice;

    let club = match req.club_id {
        // Admin notices are never club-linked, even when a club id is sent.
        Some(_) if admin_notice => None,
        Some(club_id) => Some(
            repo.get_club(club_id)
                .await?
                .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?,
        ),
        None => None,
    };

    if actor.role != Role::Admin {
        let club = club
            .as_ref()
            .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;
        if club.coordinator != actor.id {
            return Err(ApiError::Forbidden(
                "You are not authorized to create notices for this club".to_string(),
            ));
        }
    }

    let now = Utc::now();
    let notice = Notice {
        id: Uuid::new_v4(),
        title: req.title,
        description,
        category: req.category.unwrap_or_else(|| "general".to_string()),
        due_date: req.due_date,
        club: club.as_ref().map(|c| c.id),
        status: if admin_originated {
            ContentStatus::Approved
        } else {
            ContentStatus::Pending
        },
        created_by: actor.id,
        approved_by: admin_originated.then_some(actor.id),
        rejection_reason: None,
        created_at: now,
        updated_at: now,
    };

    let notice = repo.create_notice(notice).await?;

    if admin_originated {
        if let Some(club_id) = notice.club {
            repo.add_club_notice(club_id, notice.id).await?;
        }
    }

    Ok(notice)
}

/// Edits a notice; same rules as `update_event`.
pub async fn update_notice(
    repo: &dyn Repository,
    actor: &AuthUser,
    notice_id: Uuid,
    patch: UpdateNoticeRequest,
) -> ApiResult<Notice> {
    let notice = repo
        .get_notice(notice_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Notice not found".to_string()))?;

    if notice.created_by != actor.id {
        return Err(ApiError::Forbidden(
            "You are not authorized to update this notice".to_string(),
        ));
    }

    if notice.status == ContentStatus::Approved {
        return Err(ApiError::InvalidState(
            "Cannot update an approved notice. Please contact admin.".to_string(),
        ));
    }

    let patch = NoticeContentPatch {
        description: patch.body(),
        title: patch.title,
        category: patch.category,
        due_date: patch.due_date,
    };

    repo.update_notice_content(notice_id, patch, true)
        .await?
        .ok_or_else(|| ApiError::NotFound("Notice not found".to_string()))
}

/// Admin override edit: replaces notice fields without the creator/state
/// checks and without touching the status, so an approved notice stays
/// approved (and stays consistent with its club's array).
pub async fn admin_edit_notice(
    repo: &dyn Repository,
    notice_id: Uuid,
    patch: UpdateNoticeRequest,
) -> ApiResult<Notice> {
    let patch = NoticeContentPatch {
        description: patch.body(),
        title: patch.title,
        category: patch.category,
        due_date: patch.due_date,
    };

    repo.update_notice_content(notice_id, patch, false)
        .await?
        .ok_or_else(|| ApiError::NotFound("Notice not found".to_string()))
}

/// Deletes a notice unconditionally by id and pulls it from its club's array
/// when it was linked.
pub async fn remove_notice(repo: &dyn Repository, notice_id: Uuid) -> ApiResult<()> {
    let notice = repo
        .delete_notice(notice_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Notice not found".to_string()))?;

    if let Some(club_id) = notice.club {
        repo.remove_club_notice(club_id, notice_id).await?;
    }

    Ok(())
}

/// Applies an admin decision to a notice; mirrors `decide_event`.
pub async fn decide_notice(
    repo: &dyn Repository,
    actor: &AuthUser,
    req: NoticeDecisionRequest,
) -> ApiResult<Notice> {
    let decision = parse_decision(&req.status)?;

    let rejection_reason = match decision {
        ContentStatus::Rejected => req.rejection_reason,
        _ => None,
    };

    let notice = repo
        .set_notice_decision(req.notice_id, decision, actor.id, rejection_reason)
        .await?
        .ok_or_else(|| ApiError::NotFound("Notice not found".to_string()))?;

    if decision == ContentStatus::Approved {
        if let Some(club_id) = notice.club {
            repo.add_club_notice(club_id, notice.id).await?;
        }
    }

    Ok(notice)
}

/// The admin-global pending notice queue, enriched like `pending_events`.
pub async fn pending_notices(repo: &dyn Repository) -> ApiResult<Vec<PendingNoticeEntry>> {
    let notices = repo.get_notices_by_status(ContentStatus::Pending).await?;
    let mut entries = Vec::with_capacity(notices.len());
    for notice in notices {
        let creator = repo.get_user(notice.created_by).await?;
        entries.push(PendingNoticeEntry {
            club_name: match notice.club {
                Some(club_id) => repo.get_club(club_id).await?.map(|c| c.name),
                None => None,
            },
            creator_name: creator.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
            creator_email: creator.map(|u| u.email).unwrap_or_default(),
            notice,
        });
    }
    Ok(entries)
}

/// The public notice feed: approved only, newest first.
pub async fn approved_notices(repo: &dyn Repository) -> ApiResult<Vec<Notice>> {
    Ok(repo.get_notices_by_status(ContentStatus::Approved).await?)
}

/// Coordinator view of a club's notices, all statuses included.
pub async fn club_notices(
    repo: &dyn Repository,
    actor: &AuthUser,
    club_id: Uuid,
) -> ApiResult<Vec<Notice>> {
    require_club_ownership(repo, actor, club_id).await?;
    Ok(repo.get_club_notices(club_id).await?)
}
