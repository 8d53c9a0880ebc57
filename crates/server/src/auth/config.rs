// Authentication configuration loaded from environment variables.
// Decision: AUTH_ prefix for all auth config
// Decision: Token lifetime is fixed at one hour, only the secret is configurable

use rand::Rng;
use std::time::Duration;

/// Bearer token validity window
pub const TOKEN_LIFETIME: Duration = Duration::from_secs(60 * 60);

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing JWTs
    pub secret: String,
    /// Token lifetime
    pub token_lifetime: Duration,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            token_lifetime: TOKEN_LIFETIME,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub jwt: JwtConfig,
    /// True when the secret was generated at startup rather than configured
    pub ephemeral_secret: bool,
}

impl AuthConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_secret(std::env::var("AUTH_JWT_SECRET").ok())
    }

    /// Build from an optional secret, generating one when absent or empty
    pub fn from_secret(secret: Option<String>) -> Self {
        match secret.filter(|s| !s.is_empty()) {
            Some(secret) => Self {
                jwt: JwtConfig {
                    secret,
                    ..Default::default()
                },
                ephemeral_secret: false,
            },
            None => Self {
                jwt: JwtConfig {
                    secret: generate_secret(),
                    ..Default::default()
                },
                ephemeral_secret: true,
            },
        }
    }
}

/// Random 32-byte secret, hex encoded
fn generate_secret() -> String {
    let bytes: [u8; 32] = rand::thread_rng().gen();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_secret_is_used() {
        let config = AuthConfig::from_secret(Some("s3cret".to_string()));
        assert_eq!(config.jwt.secret, "s3cret");
        assert!(!config.ephemeral_secret);
        assert_eq!(config.jwt.token_lifetime, TOKEN_LIFETIME);
    }

    #[test]
    fn test_missing_secret_generates_random() {
        let a = AuthConfig::from_secret(None);
        let b = AuthConfig::from_secret(Some(String::new()));

        assert!(a.ephemeral_secret);
        assert!(b.ephemeral_secret);
        assert_eq!(a.jwt.secret.len(), 64);
        assert_ne!(a.jwt.secret, b.jwt.secret);
    }

    #[test]
    fn test_token_lifetime_is_one_hour() {
        assert_eq!(JwtConfig::default().token_lifetime.as_secs(), 3600);
    }
}
