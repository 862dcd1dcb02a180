//! Authentication extractors
//!
//! Extract and validate bearer tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use filmwise_core::DomainError;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from an access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
    pub is_admin: bool,
}

impl AuthUser {
    pub fn new(user_id: i64, is_admin: bool) -> Self {
        Self { user_id, is_admin }
    }
}

async fn authenticate<S>(parts: &mut Parts, state: &S) -> Result<AuthUser, ApiError>
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    let TypedHeader(Authorization(bearer)) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                if parts.headers.contains_key(AUTHORIZATION) {
                    ApiError::InvalidToken
                } else {
                    tracing::debug!(error = %e, "No bearer token");
                    ApiError::MissingAuth
                }
            })?;

    let app_state = AppState::from_ref(state);

    let claims = app_state
        .jwt_service()
        .validate_access_token(bearer.token())
        .map_err(|e| {
            tracing::warn!(error = %e, "Invalid access token");
            ApiError::InvalidToken
        })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!(error = %e, "Invalid user ID in token");
        ApiError::InvalidToken
    })?;

    Ok(AuthUser::new(user_id, claims.is_admin()))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        authenticate(parts, state).await
    }
}

/// Viewer of a public endpoint
///
/// `None` when no Authorization header is sent; a header carrying a bad
/// token is still rejected with 401.
#[derive(Debug, Clone, Copy)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn user_id(&self) -> Option<i64> {
        self.0.map(|user| user.user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(OptionalAuthUser(None));
        }

        authenticate(parts, state).await.map(|user| OptionalAuthUser(Some(user)))
    }
}

/// Authenticated user holding the admin role
#[derive(Debug, Clone, Copy)]
pub struct AdminUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticate(parts, state).await?;
        if !user.is_admin {
            tracing::warn!(user_id = user.user_id, "Admin route refused");
            return Err(DomainError::AdminRequired.into());
        }
        Ok(AdminUser(user))
    }
}
