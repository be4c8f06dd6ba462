//! Identifier generation for new records.

use uuid::Uuid;

/// Returns a fresh record identifier.
///
/// Uniqueness rests on 128 random bits; nothing is coordinated across
/// collections, and a restart hands out an entirely new id space.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
