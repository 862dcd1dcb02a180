//! Authentication service
//!
//! Handles user signup, login and token refresh.

use filmwise_common::auth::{hash_password, validate_password_strength, verify_password};
use filmwise_common::AppError;
use filmwise_core::entities::{NewUser, User, UserType};
use filmwise_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RefreshTokenRequest, SignupRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user account
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password)?;

        let email = request.email.trim().to_lowercase();
        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = self
            .ctx
            .user_repo()
            .create(
                &NewUser {
                    full_name: request.full_name.trim().to_string(),
                    email,
                    user_type: UserType::User,
                },
                &password_hash,
            )
            .await?;

        info!(user_id = user.id, "User signed up");

        self.issue_tokens(&user)
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password fail the same way.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(request.email.trim())
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                AppError::InvalidCredentials
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                AppError::InvalidCredentials
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        info!(user_id = user.id, "User logged in");

        self.issue_tokens(&user)
    }

    /// Exchange a refresh token for a new token pair
    ///
    /// The account is reloaded so role changes take effect on refresh.
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;
        let user_id = claims.user_id()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id, "Refresh rejected: account no longer exists");
                AppError::InvalidToken
            })?;

        info!(user_id, "Tokens refreshed");

        self.issue_tokens(&user)
    }

    fn issue_tokens(&self, user: &User) -> ServiceResult<AuthResponse> {
        let pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            pair.access_token,
            pair.refresh_token,
            pair.expires_in,
            UserResponse::from(user),
        ))
    }
}
