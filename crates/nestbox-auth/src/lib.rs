//! # nestbox-auth
//!
//! Verification of identity-provider tokens. Nestbox does not manage
//! credentials itself; it accepts signed tokens from an external
//! provider and maps them to a [`VerifiedIdentity`].
//!
//! [`VerifiedIdentity`]: nestbox_entity::user::VerifiedIdentity

pub mod claims;
pub mod verifier;

pub use verifier::IdentityVerifier;
