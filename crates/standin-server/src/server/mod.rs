//! HTTP boundary for the mock registry.
//!
//! Thin transport layer with no matching logic of its own:
//!
//! - `types`: wire shapes and response helpers
//! - `router`: dispatch between management endpoints and replay
//! - `handlers`: management and replay handlers
//! - `server`: listener wiring

mod handlers;
mod router;
mod server;
mod types;

pub use server::StubServer;
