//! Token issuance and verification
//!
//! A single configured identity/secret pair is accepted at login; every
//! protected request presents the resulting bearer token. Decode, signature,
//! and expiry failures are deliberately collapsed into one error kind so the
//! caller only ever observes a generic 401.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::error::GatewayError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated identity name
    pub sub: String,
    /// Expiration timestamp (unix seconds)
    pub exp: usize,
    /// Issuance timestamp (unix seconds)
    pub iat: usize,
}

/// A freshly issued credential
#[derive(Debug)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_at: i64,
}

/// Stateless token service: issues credentials on login and verifies them on
/// every protected request. Shares nothing between calls beyond the signing
/// secret loaded at startup.
#[derive(Clone)]
pub struct TokenService {
    username: String,
    password: String,
    expiry_seconds: i64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("username", &self.username)
            .field("expiry_seconds", &self.expiry_seconds)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        // SAFETY: expiry fits in i64 for any sane configuration
        #[allow(clippy::cast_possible_wrap)]
        let expiry_seconds = config.token_expiry_seconds as i64;

        Self {
            username: config.username.clone(),
            password: config.password.clone(),
            expiry_seconds,
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_ref()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_ref()),
        }
    }

    /// Issue a credential for the given identity.
    ///
    /// Exactly one identity/secret pair is valid; anything else fails with
    /// `InvalidCredentials`.
    pub fn issue(&self, username: &str, password: &str) -> Result<IssuedToken, GatewayError> {
        if username != self.username || password != self.password {
            return Err(GatewayError::InvalidCredentials);
        }

        let now = Utc::now();
        let expires_at = (now + Duration::seconds(self.expiry_seconds)).timestamp();
        #[allow(clippy::cast_sign_loss)]
        let claims = Claims {
            sub: username.to_string(),
            exp: expires_at as usize,
            iat: now.timestamp() as usize,
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(GatewayError::TokenSigning)?;

        Ok(IssuedToken {
            access_token,
            expires_at,
        })
    }

    /// Verify a presented credential, returning its claims.
    ///
    /// Any decode error, signature mismatch, or expiry collapses into
    /// `InvalidToken`.
    pub fn verify(&self, token: &str) -> Result<Claims, GatewayError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| GatewayError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayConfig;

    fn token_service() -> TokenService {
        TokenService::new(&GatewayConfig::default().auth)
    }

    #[test]
    fn issue_accepts_the_configured_identity() {
        let issued = token_service().issue("admin", "admin123").unwrap();
        assert!(!issued.access_token.is_empty());
        assert!(issued.expires_at > Utc::now().timestamp());
    }

    #[test]
    fn issue_rejects_any_other_pair() {
        let tokens = token_service();
        assert!(matches!(
            tokens.issue("admin", "wrong"),
            Err(GatewayError::InvalidCredentials)
        ));
        assert!(matches!(
            tokens.issue("intruder", "admin123"),
            Err(GatewayError::InvalidCredentials)
        ));
    }

    #[test]
    fn verify_round_trips_issued_claims() {
        let tokens = token_service();
        let issued = tokens.issue("admin", "admin123").unwrap();
        let claims = tokens.verify(&issued.access_token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.exp as i64, issued.expires_at);
    }

    #[test]
    fn verify_rejects_garbage() {
        assert!(matches!(
            token_service().verify("not-a-jwt"),
            Err(GatewayError::InvalidToken)
        ));
    }

    #[test]
    fn verify_rejects_expired_tokens() {
        let tokens = token_service();
        // Well past the default validation leeway
        let claims = Claims {
            sub: "admin".to_string(),
            exp: (Utc::now() - Duration::hours(2)).timestamp() as usize,
            iat: (Utc::now() - Duration::hours(3)).timestamp() as usize,
        };
        let stale = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("supersecretkey".as_ref()),
        )
        .unwrap();

        assert!(matches!(
            tokens.verify(&stale),
            Err(GatewayError::InvalidToken)
        ));
    }

    #[test]
    fn verify_rejects_a_foreign_signature() {
        let issued = token_service().issue("admin", "admin123").unwrap();

        let mut other_config = GatewayConfig::default().auth;
        other_config.jwt_secret = "a-different-secret".to_string();
        let other = TokenService::new(&other_config);

        assert!(matches!(
            other.verify(&issued.access_token),
            Err(GatewayError::InvalidToken)
        ));
    }
}
