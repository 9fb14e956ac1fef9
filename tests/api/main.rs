//! Integration tests for the HTTP API.
//!
//! The app is wired exactly as in `main.rs` but with a lazily-connected
//! pool, so every path that rejects before touching the database is
//! exercised end-to-end through the router.

mod helpers;
mod routes;
