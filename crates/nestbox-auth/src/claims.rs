//! Claims carried by identity-provider tokens.

use serde::{Deserialize, Serialize};

/// Claims payload of an identity token.
///
/// The provider signs these; Nestbox only reads them after signature
/// and expiry checks pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Subject — the provider's opaque user identifier.
    pub sub: String,
    /// Issuer.
    pub iss: String,
    /// Email address, when the provider supplies one.
    #[serde(default)]
    pub email: Option<String>,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
