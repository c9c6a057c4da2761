//! Standin: a programmable HTTP stub server.
//!
//! Test suites register expected request/response pairs ("mocks") through a
//! small management API; the server answers every other request by replaying
//! the response registered for that exact method and path.
//!
//! - [`registry`]: the mock store and request-matching engine
//! - [`server`]: the HTTP boundary (routing, wire shapes, replay)
//! - [`error`]: the closed set of failure kinds shared by both

pub mod error;
pub mod registry;
pub mod server;

pub use error::MockError;
pub use registry::MockRegistry;
pub use server::StubServer;
