use axum::{
    extract::FromRequestParts,
    http::{Method, Request, header},
};
use campus_portal::{
    AppState, AppConfig,
    auth::{self, AuthUser, Claims, require_club_ownership, require_role},
    error::ApiError,
    models::{Club, Role, User},
    repository::{MemoryRepository, Repository, RepositoryState},
};
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use std::sync::Arc;
use tokio::test;
use uuid::Uuid;

// --- Test Utilities ---

async fn seed_user(repo: &dyn Repository, role: Role) -> User {
    let now = Utc::now();
    repo.create_user(User {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: format!("{}@campus.edu", role),
        password_hash: "argon2-hash-placeholder".to_string(),
        role,
        club_affiliation: "none".to_string(),
        created_at: now,
        updated_at: now,
        ..User::default()
    })
    .await
    .unwrap()
}

fn create_app_state(repo: Arc<MemoryRepository>) -> AppState {
    AppState {
        repo: repo as RepositoryState,
        config: AppConfig::default(),
    }
}

fn request_parts_with_header(
    name: header::HeaderName,
    value: &str,
) -> axum::http::request::Parts {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header(name, value)
        .body(())
        .unwrap();
    request.into_parts().0
}

fn bare_request_parts() -> axum::http::request::Parts {
    Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(())
        .unwrap()
        .into_parts()
        .0
}

// --- Extractor Tests ---

#[test]
async fn valid_bearer_token_resolves_current_user() {
    let repo = Arc::new(MemoryRepository::new());
    let user = seed_user(&*repo, Role::Student).await;
    let state = create_app_state(repo.clone());

    let token = auth::generate_token(&user, &state.config).unwrap();
    let mut parts =
        request_parts_with_header(header::AUTHORIZATION, &format!("Bearer {token}"));

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await.unwrap();
    assert_eq!(auth_user.id, user.id);
    assert_eq!(auth_user.role, Role::Student);
}

#[test]
async fn extractor_accepts_access_token_cookie() {
    let repo = Arc::new(MemoryRepository::new());
    let user = seed_user(&*repo, Role::Student).await;
    let state = create_app_state(repo.clone());

    let token = auth::generate_token(&user, &state.config).unwrap();
    let mut parts = request_parts_with_header(
        header::COOKIE,
        &format!("theme=dark; accessToken={token}; lang=en"),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await.unwrap();
    assert_eq!(auth_user.id, user.id);
}

#[test]
async fn role_is_reloaded_from_the_repository_not_the_token() {
    let repo = Arc::new(MemoryRepository::new());
    let user = seed_user(&*repo, Role::Student).await;
    let state = create_app_state(repo.clone());

    let token = auth::generate_token(&user, &state.config).unwrap();
    // Promote after the token was issued.
    repo.set_user_role(user.id, Role::Admin).await.unwrap();

    let mut parts =
        request_parts_with_header(header::AUTHORIZATION, &format!("Bearer {token}"));
    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await.unwrap();
    assert_eq!(auth_user.role, Role::Admin);
}

#[test]
async fn missing_credential_is_rejected() {
    let repo = Arc::new(MemoryRepository::new());
    let state = create_app_state(repo);

    let mut parts = bare_request_parts();
    let err = AuthUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthenticated(_)));
}

#[test]
async fn malformed_token_is_rejected() {
    let repo = Arc::new(MemoryRepository::new());
    let state = create_app_state(repo);

    let mut parts =
        request_parts_with_header(header::AUTHORIZATION, "Bearer not-a-real-token");
    let err = AuthUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthenticated(_)));
}

#[test]
async fn expired_token_is_rejected() {
    let repo = Arc::new(MemoryRepository::new());
    let user = seed_user(&*repo, Role::Student).await;
    let state = create_app_state(repo.clone());

    // Hand-craft a token that expired two hours ago.
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        name: user.name.clone(),
        role: user.role,
        exp: (now - 7200) as usize,
        iat: (now - 10800) as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.config.jwt_secret.as_bytes()),
    )
    .unwrap();

    let mut parts =
        request_parts_with_header(header::AUTHORIZATION, &format!("Bearer {token}"));
    let err = AuthUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthenticated(_)));
}

#[test]
async fn token_for_deleted_user_is_rejected() {
    let repo = Arc::new(MemoryRepository::new());
    let user = seed_user(&*repo, Role::Student).await;
    let state = create_app_state(repo.clone());

    let token = auth::generate_token(&user, &state.config).unwrap();
    repo.delete_user(user.id).await.unwrap();

    let mut parts =
        request_parts_with_header(header::AUTHORIZATION, &format!("Bearer {token}"));
    let err = AuthUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthenticated(_)));
}

// --- Role Hierarchy ---

#[test]
async fn role_hierarchy_admin_satisfies_coordinator_checks() {
    let admin = AuthUser {
        id: Uuid::new_v4(),
        name: "Admin".to_string(),
        email: "admin@campus.edu".to_string(),
        role: Role::Admin,
    };
    let coordinator = AuthUser {
        role: Role::ClubCoordinator,
        ..admin.clone()
    };
    let student = AuthUser {
        role: Role::Student,
        ..admin.clone()
    };

    assert!(require_role(&admin, Role::Admin).is_ok());
    assert!(require_role(&admin, Role::ClubCoordinator).is_ok());

    assert!(require_role(&coordinator, Role::ClubCoordinator).is_ok());
    assert!(matches!(
        require_role(&coordinator, Role::Admin),
        Err(ApiError::Forbidden(_))
    ));

    assert!(require_role(&student, Role::Student).is_ok());
    assert!(matches!(
        require_role(&student, Role::ClubCoordinator),
        Err(ApiError::Forbidden(_))
    ));
}

// --- Ownership Guard ---

#[test]
async fn ownership_guard_allows_owner_and_admin_only() {
    let repo = MemoryRepository::new();
    let owner = seed_user(&repo, Role::ClubCoordinator).await;
    let now = Utc::now();
    let club = repo
        .create_club(Club {
            id: Uuid::new_v4(),
            name: "Chess Club".to_string(),
            description: "a club".to_string(),
            coordinator: owner.id,
            members: vec![owner.id],
            membership_requests: Vec::new(),
            events: Vec::new(),
            notices: Vec::new(),
            created_at: now,
            updated_at: now,
        })
        .await
        .unwrap();

    let owner_actor = AuthUser {
        id: owner.id,
        name: owner.name.clone(),
        email: owner.email.clone(),
        role: owner.role,
    };
    let admin_actor = AuthUser {
        id: Uuid::new_v4(),
        name: "Admin".to_string(),
        email: "admin2@campus.edu".to_string(),
        role: Role::Admin,
    };
    let other_actor = AuthUser {
        id: Uuid::new_v4(),
        name: "Other".to_string(),
        email: "other@campus.edu".to_string(),
        role: Role::ClubCoordinator,
    };

    assert!(require_club_ownership(&repo, &owner_actor, club.id)
        .await
        .is_ok());
    assert!(require_club_ownership(&repo, &admin_actor, club.id)
        .await
        .is_ok());
    assert!(matches!(
        require_club_ownership(&repo, &other_actor, club.id).await,
        Err(ApiError::Forbidden(_))
    ));
    assert!(matches!(
        require_club_ownership(&repo, &owner_actor, Uuid::new_v4()).await,
        Err(ApiError::NotFound(_))
    ));
}

// --- Password Handling ---

#[test]
async fn password_hash_roundtrip() {
    let hash = auth::hash_password("correct horse battery staple").unwrap();
    assert_ne!(hash, "correct horse battery staple");
    assert!(auth::verify_password("correct horse battery staple", &hash).unwrap());
    assert!(!auth::verify_password("wrong password", &hash).unwrap());
}
