//! Identity token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use nestbox_core::config::identity::IdentityConfig;
use nestbox_core::error::AppError;
use nestbox_entity::user::VerifiedIdentity;

use crate::claims::IdentityClaims;

/// Fallback email recorded when the provider omits the claim.
const UNKNOWN_EMAIL: &str = "unknown@example.com";

/// Validates identity-provider tokens.
#[derive(Clone)]
pub struct IdentityVerifier {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for IdentityVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl IdentityVerifier {
    /// Creates a new verifier from identity configuration.
    pub fn new(config: &IdentityConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;
        validation.set_issuer(&[&config.issuer]);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token, returning the verified identity.
    ///
    /// The display name travels in the login request body, not the
    /// token, so it is supplied by the caller.
    ///
    /// Checks signature, expiry, and issuer; an expired token is
    /// reported distinctly from a malformed or forged one.
    pub fn verify(&self, token: &str, display_name: &str) -> Result<VerifiedIdentity, AppError> {
        let token_data = decode::<IdentityClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::authentication("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::authentication("Invalid token format")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::authentication("Invalid token signature")
                }
                jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                    AppError::authentication("Token issuer not recognized")
                }
                _ => AppError::authentication(format!("Token validation failed: {e}")),
            })?;

        let claims = token_data.claims;
        Ok(VerifiedIdentity {
            subject: claims.sub,
            email: claims.email.unwrap_or_else(|| UNKNOWN_EMAIL.to_string()),
            display_name: display_name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn config() -> IdentityConfig {
        IdentityConfig {
            secret: "test-secret".to_string(),
            issuer: "nestbox-identity".to_string(),
            leeway_seconds: 0,
        }
    }

    fn token(claims: &IdentityClaims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_yields_identity() {
        let verifier = IdentityVerifier::new(&config());
        let claims = IdentityClaims {
            sub: "uid-1".to_string(),
            iss: "nestbox-identity".to_string(),
            email: Some("a@b.example".to_string()),
            exp: chrono::Utc::now().timestamp() + 3600,
        };

        let identity = verifier.verify(&token(&claims, "test-secret"), "Ada").unwrap();
        assert_eq!(identity.subject, "uid-1");
        assert_eq!(identity.email, "a@b.example");
        assert_eq!(identity.display_name, "Ada");
    }

    #[test]
    fn test_missing_email_falls_back() {
        let verifier = IdentityVerifier::new(&config());
        let claims = IdentityClaims {
            sub: "uid-2".to_string(),
            iss: "nestbox-identity".to_string(),
            email: None,
            exp: chrono::Utc::now().timestamp() + 3600,
        };

        let identity = verifier.verify(&token(&claims, "test-secret"), "Ada").unwrap();
        assert_eq!(identity.email, UNKNOWN_EMAIL);
    }

    #[test]
    fn test_expired_token_is_distinguished() {
        let verifier = IdentityVerifier::new(&config());
        let claims = IdentityClaims {
            sub: "uid-3".to_string(),
            iss: "nestbox-identity".to_string(),
            email: None,
            exp: chrono::Utc::now().timestamp() - 3600,
        };

        let err = verifier
            .verify(&token(&claims, "test-secret"), "Ada")
            .unwrap_err();
        assert_eq!(err.message, "Token has expired");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let verifier = IdentityVerifier::new(&config());
        let claims = IdentityClaims {
            sub: "uid-4".to_string(),
            iss: "nestbox-identity".to_string(),
            email: None,
            exp: chrono::Utc::now().timestamp() + 3600,
        };

        let err = verifier
            .verify(&token(&claims, "other-secret"), "Ada")
            .unwrap_err();
        assert_eq!(err.kind, nestbox_core::error::ErrorKind::Authentication);
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let verifier = IdentityVerifier::new(&config());
        let claims = IdentityClaims {
            sub: "uid-5".to_string(),
            iss: "someone-else".to_string(),
            email: None,
            exp: chrono::Utc::now().timestamp() + 3600,
        };

        let err = verifier
            .verify(&token(&claims, "test-secret"), "Ada")
            .unwrap_err();
        assert_eq!(err.kind, nestbox_core::error::ErrorKind::Authentication);
    }
}
