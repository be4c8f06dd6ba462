//! # Registry Module
//!
//! The in-memory entity store: students, classes, professors and
//! departments in four independent keyed collections, plus the queries
//! that cross them.
//!
//! Ground rules:
//! - Ids are generated at creation and immutable; unique per kind only.
//! - Relationship fields are plain id lists with no referential integrity
//!   and no bidirectional sync; both sides are written by the caller.
//! - Traversals resolve then filter, silently dropping dangling ids.
//! - "List all" returns records in creation order.

pub mod collection;
pub mod errors;
pub mod ident;
pub mod seed;
pub mod store;
pub mod types;

pub use errors::{RegistryError, RegistryResult};
pub use seed::seed;
pub use store::Registry;
pub use types::{
    Class, ClassPatch, Department, DepartmentPatch, EntityKind, Professor, ProfessorPatch,
    Student, StudentPatch,
};
