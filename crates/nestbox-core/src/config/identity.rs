//! Identity provider token verification configuration.

use serde::{Deserialize, Serialize};

/// Settings for verifying identity-provider tokens.
///
/// Tokens are HS256 JWTs issued by the external identity provider and
/// carry the subject, email, and display name claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Shared HMAC secret used to verify token signatures.
    pub secret: String,
    /// Expected `iss` claim; verification fails on mismatch.
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Allowed clock skew in seconds when checking expiry.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

fn default_issuer() -> String {
    "nestbox-identity".to_string()
}

fn default_leeway() -> u64 {
    30
}
