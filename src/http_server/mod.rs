//! # HTTP Server Module
//!
//! The REST surface over the registry. Maps HTTP verbs and paths onto
//! store operations and store/validation failures onto status codes:
//! validation and malformed bodies are 400, unresolved path ids are 404,
//! anything unexpected is a generic 500.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/students`, `/classes`, `/professors`, `/departments` - CRUD
//! - `/classes/{id}/students` - roster traversal
//! - `/departments/{id}/classes`, `/departments/{id}/professors` -
//!   department traversals

pub mod class_routes;
pub mod config;
pub mod department_routes;
pub mod errors;
pub mod health_routes;
pub mod professor_routes;
pub mod server;
pub mod state;
pub mod student_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use state::AppState;
