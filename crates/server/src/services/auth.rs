// Auth service: registration and login
//
// Registration hashes the password and persists the user; login verifies the
// password and issues a bearer token. The duplicate-email check is a plain
// lookup before insert, so two concurrent registrations can both succeed.

use crate::auth::jwt::JwtService;
use crate::storage::{
    models::{CreateUserRow, UserRow},
    password::{hash_password, verify_password},
    StorageBackend,
};
use eventboard_core::{User, UserProfile};
use std::sync::Arc;
use tracing::Instrument;

/// Errors returned by [`AuthService`]
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    /// A user with this email is already registered
    #[error("User already exists")]
    DuplicateUser,

    /// No user with this email
    #[error("User not found")]
    UserNotFound,

    /// Password does not match the stored hash
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Storage, hashing or signing failure
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Successful login: bearer token plus public user projection
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub user: UserProfile,
}

pub struct AuthService {
    db: Arc<StorageBackend>,
    jwt: Arc<JwtService>,
}

impl AuthService {
    pub fn new(db: Arc<StorageBackend>, jwt: Arc<JwtService>) -> Self {
        Self { db, jwt }
    }

    pub async fn register(
        &self,
        username: String,
        email: String,
        password: &str,
    ) -> Result<User, AuthServiceError> {
        let span = tracing::info_span!("auth.register", email = %email, user.id = tracing::field::Empty);
        self.register_inner(username, email, password)
            .instrument(span)
            .await
    }

    async fn register_inner(
        &self,
        username: String,
        email: String,
        password: &str,
    ) -> Result<User, AuthServiceError> {
        if self.db.get_user_by_email(&email).await?.is_some() {
            return Err(AuthServiceError::DuplicateUser);
        }

        let password_hash = hash_password(password)?;

        let row = self
            .db
            .create_user(CreateUserRow {
                username,
                email,
                password_hash,
            })
            .await?;

        tracing::Span::current().record("user.id", row.id.to_string().as_str());
        tracing::info!("User registered");

        Ok(Self::row_to_user(row))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthServiceError> {
        let span = tracing::info_span!("auth.login", email = %email);
        self.login_inner(email, password).instrument(span).await
    }

    async fn login_inner(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, AuthServiceError> {
        let user = self
            .db
            .get_user_by_email(email)
            .await?
            .map(Self::row_to_user)
            .ok_or(AuthServiceError::UserNotFound)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = self.jwt.issue_token(user.id)?;

        Ok(LoginOutcome {
            token,
            user: user.profile(),
        })
    }

    fn row_to_user(row: UserRow) -> User {
        User {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
        }
    }
}
