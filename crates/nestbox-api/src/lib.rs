//! # nestbox-api
//!
//! The HTTP boundary: axum handlers, routing, DTOs, and the mapping
//! from domain errors to HTTP responses. All business decisions live
//! in `nestbox-service`; handlers translate between the wire and the
//! services.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
