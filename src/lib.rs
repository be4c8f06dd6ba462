//! campusdb - an in-memory university records service
//!
//! Four entity collections (students, classes, professors, departments)
//! behind a small REST API. State lives for the process lifetime; a fixed
//! dataset is loaded at start through the same operations clients use.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod registry;
pub mod validate;
