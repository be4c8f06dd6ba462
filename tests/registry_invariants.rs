//! Registry Invariant Tests
//!
//! The store contract through the public API:
//! - ids are assigned at creation, unique per kind, immutable
//! - partial updates merge; only update on a missing id errors
//! - deletes do not cascade; traversals drop dangling ids silently
//! - listings follow creation order

use campusdb::registry::{
    ClassPatch, DepartmentPatch, EntityKind, ProfessorPatch, Registry, RegistryError, StudentPatch,
};
use std::collections::HashSet;

// =============================================================================
// Helper Functions
// =============================================================================

fn student(name: &str) -> StudentPatch {
    StudentPatch {
        name: Some(name.to_string()),
        ..StudentPatch::default()
    }
}

fn class(name: &str, department: &str) -> ClassPatch {
    ClassPatch {
        name: Some(name.to_string()),
        term: Some("Fall 2024".to_string()),
        department: Some(department.to_string()),
        ..ClassPatch::default()
    }
}

fn department(name: &str) -> DepartmentPatch {
    DepartmentPatch {
        name: Some(name.to_string()),
        ..DepartmentPatch::default()
    }
}

fn professor(name: &str) -> ProfessorPatch {
    ProfessorPatch {
        name: Some(name.to_string()),
        ..ProfessorPatch::default()
    }
}

// =============================================================================
// Identity
// =============================================================================

/// Every create returns a non-empty id distinct from all prior ids of the
/// same kind.
#[test]
fn test_created_ids_are_distinct() {
    let mut registry = Registry::new();
    let mut seen = HashSet::new();

    for i in 0..50 {
        let created = registry.create_student(student(&format!("Student {}", i)));
        assert!(!created.id.is_empty());
        assert!(seen.insert(created.id));
    }
}

/// The record handed back by create is the record a later get resolves.
#[test]
fn test_get_after_create_round_trips() {
    let mut registry = Registry::new();
    let created = registry.create_professor(ProfessorPatch {
        name: Some("Ada".to_string()),
        hire_date: Some("2001-01-01".to_string()),
        address: Some("1 Analytical Way".to_string()),
        ..ProfessorPatch::default()
    });

    assert_eq!(registry.get_professor(&created.id), Some(created));
}

// =============================================================================
// Update semantics
// =============================================================================

#[test]
fn test_update_missing_id_is_not_found_and_mutates_nothing() {
    let mut registry = Registry::new();
    registry.create_department(department("Physics"));
    let before = registry.list_departments();

    let result = registry.update_department("missing", department("Chemistry"));
    assert_eq!(result, Err(RegistryError::NotFound(EntityKind::Department)));
    assert_eq!(registry.list_departments(), before);
}

#[test]
fn test_partial_update_keeps_unsupplied_fields() {
    let mut registry = Registry::new();
    let created = registry.create_class(ClassPatch {
        name: Some("Algebra".to_string()),
        description: Some("Linear algebra".to_string()),
        term: Some("Fall 2024".to_string()),
        ..ClassPatch::default()
    });

    let updated = registry
        .update_class(
            &created.id,
            ClassPatch {
                term: Some("Spring 2025".to_string()),
                ..ClassPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "Algebra");
    assert_eq!(updated.description, "Linear algebra");
    assert_eq!(updated.term, "Spring 2025");
    assert_eq!(updated.id, created.id);
}

#[test]
fn test_update_ignores_supplied_id() {
    let mut registry = Registry::new();
    let created = registry.create_student(student("Alice"));

    let updated = registry
        .update_student(
            &created.id,
            StudentPatch {
                id: Some("other".to_string()),
                ..StudentPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert!(registry.get_student("other").is_none());
}

/// A supplied relationship list replaces the stored one outright, even
/// when shorter or empty.
#[test]
fn test_update_replaces_relationship_lists() {
    let mut registry = Registry::new();
    let created = registry.create_student(student("Alice"));

    registry
        .update_student(
            &created.id,
            StudentPatch {
                enrolled_classes: Some(vec!["a".to_string(), "b".to_string()]),
                ..StudentPatch::default()
            },
        )
        .unwrap();
    let updated = registry
        .update_student(
            &created.id,
            StudentPatch {
                enrolled_classes: Some(vec!["c".to_string()]),
                ..StudentPatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.enrolled_classes, vec!["c"]);

    let cleared = registry
        .update_student(
            &created.id,
            StudentPatch {
                enrolled_classes: Some(Vec::new()),
                ..StudentPatch::default()
            },
        )
        .unwrap();
    assert!(cleared.enrolled_classes.is_empty());
}

// =============================================================================
// Delete semantics
// =============================================================================

#[test]
fn test_delete_is_true_exactly_once() {
    let mut registry = Registry::new();
    let created = registry.create_student(student("Alice"));

    assert!(registry.delete_student(&created.id));
    for _ in 0..3 {
        assert!(!registry.delete_student(&created.id));
    }
    assert!(registry.get_student(&created.id).is_none());
}

#[test]
fn test_delete_leaves_other_collections_and_references_alone() {
    let mut registry = Registry::new();
    let algebra = registry.create_class(class("Algebra", "Mathematics"));
    let math = registry.create_department(department("Mathematics"));
    registry
        .update_department(
            &math.id,
            DepartmentPatch {
                classes: Some(vec![algebra.id.clone()]),
                ..DepartmentPatch::default()
            },
        )
        .unwrap();

    assert!(registry.delete_class(&algebra.id));

    // The department still holds the now-dangling class id.
    let math = registry.get_department(&math.id).unwrap();
    assert_eq!(math.classes, vec![algebra.id]);
}

// =============================================================================
// Traversals
// =============================================================================

#[test]
fn test_class_students_drops_dangling_ids_in_order() {
    let mut registry = Registry::new();
    let algebra = registry.create_class(class("Algebra", "Mathematics"));
    let alice = registry.create_student(student("Alice"));
    let bob = registry.create_student(student("Bob"));

    registry
        .update_class(
            &algebra.id,
            ClassPatch {
                students: Some(vec![
                    alice.id.clone(),
                    "withdrawn".to_string(),
                    bob.id.clone(),
                ]),
                ..ClassPatch::default()
            },
        )
        .unwrap();

    let names: Vec<String> = registry
        .class_students(&algebra.id)
        .into_iter()
        .map(|found| found.name)
        .collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[test]
fn test_traversals_on_unknown_ids_return_empty() {
    let registry = Registry::new();
    assert!(registry.class_students("nope").is_empty());
    assert!(registry.department_classes("nope").is_empty());
    assert!(registry.department_professors("nope").is_empty());
}

#[test]
fn test_department_professors_requires_a_matching_class() {
    let mut registry = Registry::new();
    let algebra = registry.create_class(class("Algebra", "Mathematics"));
    let poetry = registry.create_class(class("Poetry", "Literature"));
    let math = registry.create_department(department("Mathematics"));

    let ada = registry.create_professor(professor("Ada"));
    let byron = registry.create_professor(professor("Byron"));
    let ghost = registry.create_professor(professor("Ghost"));

    // Ada teaches in Mathematics, Byron only elsewhere, Ghost references a
    // class that no longer resolves.
    registry
        .update_professor(
            &ada.id,
            ProfessorPatch {
                classes: Some(vec![poetry.id.clone(), algebra.id.clone()]),
                ..ProfessorPatch::default()
            },
        )
        .unwrap();
    registry
        .update_professor(
            &byron.id,
            ProfessorPatch {
                classes: Some(vec![poetry.id.clone()]),
                ..ProfessorPatch::default()
            },
        )
        .unwrap();
    registry
        .update_professor(
            &ghost.id,
            ProfessorPatch {
                classes: Some(vec!["deleted".to_string()]),
                ..ProfessorPatch::default()
            },
        )
        .unwrap();

    let names: Vec<String> = registry
        .department_professors(&math.id)
        .into_iter()
        .map(|found| found.name)
        .collect();
    assert_eq!(names, vec!["Ada"]);
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_listings_follow_creation_order_across_deletes() {
    let mut registry = Registry::new();
    let first = registry.create_student(student("First"));
    registry.create_student(student("Second"));
    registry.create_student(student("Third"));

    registry.delete_student(&first.id);
    registry.create_student(student("Fourth"));

    let names: Vec<String> = registry
        .list_students()
        .into_iter()
        .map(|found| found.name)
        .collect();
    assert_eq!(names, vec!["Second", "Third", "Fourth"]);
}

#[test]
fn test_empty_registry_lists_empty_sequences() {
    let registry = Registry::new();
    assert!(registry.list_students().is_empty());
    assert!(registry.list_classes().is_empty());
    assert!(registry.list_professors().is_empty());
    assert!(registry.list_departments().is_empty());
}
