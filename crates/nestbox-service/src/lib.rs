//! # nestbox-service
//!
//! Business logic services. Each service owns one area of the domain
//! and orchestrates repositories, blob storage, and the insight
//! collaborator; HTTP concerns stay in `nestbox-api`.

pub mod context;
pub mod directory;
pub mod file;
pub mod insight;
pub mod user;
