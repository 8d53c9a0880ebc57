// Authentication module
// Decision: Password login only, bearer token is issued but no route requires it

pub mod config;
pub mod jwt;
pub mod routes;

pub use config::{AuthConfig, JwtConfig};
pub use jwt::{JwtService, TokenClaims};
pub use routes::routes;

use crate::services::AuthService;
use crate::storage::StorageBackend;
use std::sync::Arc;

/// App state for auth routes
#[derive(Clone)]
pub struct AuthState {
    pub service: Arc<AuthService>,
}

impl AuthState {
    pub fn new(config: &AuthConfig, db: Arc<StorageBackend>) -> Self {
        let jwt = Arc::new(JwtService::new(config.jwt.clone()));
        Self {
            service: Arc::new(AuthService::new(db, jwt)),
        }
    }
}
