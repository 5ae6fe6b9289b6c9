//! Shared library for the Mergington High School activities service.
//!
//! Both the backend server and the browser landing page build on this crate:
//! the activity data model, the error taxonomy that maps onto HTTP statuses,
//! logging setup, a small HTTP API client and the UI callback macro.

pub mod api;
pub mod data;
pub mod errors;
pub mod log;
pub mod macros;

pub use serde;
pub use serde_json;
pub use tracing;
