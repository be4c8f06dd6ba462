//! Start-up dataset.
//!
//! Loads a fixed set of classes, departments, professors and students and
//! wires the relationship lists on both sides through the same public
//! operations a client would use. Relationship lists are independent, so
//! each side is written explicitly; nothing here validates content.

use super::errors::RegistryResult;
use super::store::Registry;
use super::types::{ClassPatch, DepartmentPatch, ProfessorPatch, StudentPatch};

/// Populate an empty registry with the fixed start-up dataset.
///
/// Creates hand out fresh ids on every run; the wiring below uses the
/// returned records, never hard-coded identifiers.
pub fn seed(registry: &mut Registry) -> RegistryResult<()> {
    let intro_programming = registry.create_class(class(
        "Intro to Programming",
        "Intro to Programming",
        "Smarty Boy",
        "Computer Science",
    ));
    let calculus_one = registry.create_class(class(
        "Calculus I",
        "Calculus I",
        "Smarty Boy",
        "Mathematics",
    ));
    let calculus_two = registry.create_class(class(
        "Calculus II",
        "Calculus I",
        "Lucas Doe",
        "Mathematics",
    ));
    let intro_physics = registry.create_class(class(
        "Intro to Physics",
        "Intro to Physics",
        "Epaphroditus Smith",
        "Physics",
    ));

    let computer_science = registry.create_department(department(
        "Computer Science",
        "Computer Science Department",
        "HAL",
    ));
    let mathematics = registry.create_department(department(
        "Mathematics",
        "Mathematics Department",
        "Euclid",
    ));
    let physics = registry.create_department(department(
        "Physics",
        "Physics Department",
        "Albert Einstein",
    ));

    registry.update_department(
        &computer_science.id,
        department_classes(vec![intro_programming.id.clone()]),
    )?;
    registry.update_department(
        &mathematics.id,
        department_classes(vec![calculus_one.id.clone(), calculus_two.id.clone()]),
    )?;
    registry.update_department(
        &physics.id,
        department_classes(vec![intro_physics.id.clone()]),
    )?;

    let smarty_boy = registry.create_professor(professor(
        "Smarty Boy",
        "2024-09-01",
        "111 Main St",
        "1234567890",
    ));
    let lucas_doe = registry.create_professor(professor(
        "Lucas Doe",
        "1980-01-01",
        "123 Main St",
        "1234567890",
    ));
    let epaphroditus_smith = registry.create_professor(professor(
        "Epaphroditus Smith",
        "1989-01-01",
        "777 Main St",
        "1234567890",
    ));

    registry.update_professor(
        &smarty_boy.id,
        professor_classes(vec![intro_programming.id.clone(), calculus_one.id.clone()]),
    )?;
    registry.update_professor(
        &lucas_doe.id,
        professor_classes(vec![calculus_two.id.clone()]),
    )?;
    registry.update_professor(
        &epaphroditus_smith.id,
        professor_classes(vec![intro_physics.id.clone()]),
    )?;

    let maria = registry.create_student(student(
        "Maria Elena Rodriguez",
        "1973-05-27",
        "4738 Oak Street, Portland, OR",
        "(555) 234-8901",
    ));
    let james = registry.create_student(student(
        "James William Chen",
        "2001-10-23",
        "892 Maple Avenue, Boston, MA",
        "40512345678",
    ));
    let aisha = registry.create_student(student(
        "Aisha Nicole Thompson",
        "1992-01-01",
        "1567 Pine Road, Atlanta, GA",
        "(203) 567-1234",
    ));
    let marcus = registry.create_student(student(
        "Marcus Alexander Bennett",
        "1988-09-01",
        "3201 Cedar Lane, Denver CO",
        "20512345678",
    ));

    registry.update_student(
        &maria.id,
        student_enrollment(vec![intro_programming.id.clone(), calculus_two.id.clone()]),
    )?;
    registry.update_student(
        &james.id,
        student_enrollment(vec![calculus_one.id.clone()]),
    )?;
    registry.update_student(
        &aisha.id,
        student_enrollment(vec![
            intro_programming.id.clone(),
            calculus_one.id.clone(),
            intro_physics.id.clone(),
        ]),
    )?;
    registry.update_student(
        &marcus.id,
        student_enrollment(vec![calculus_two.id.clone(), intro_physics.id.clone()]),
    )?;

    registry.update_class(
        &intro_programming.id,
        class_roster(vec![maria.id.clone(), aisha.id.clone()]),
    )?;
    registry.update_class(
        &calculus_one.id,
        class_roster(vec![james.id.clone(), aisha.id.clone()]),
    )?;
    registry.update_class(
        &calculus_two.id,
        class_roster(vec![maria.id.clone(), marcus.id.clone()]),
    )?;
    registry.update_class(
        &intro_physics.id,
        class_roster(vec![aisha.id.clone(), marcus.id.clone()]),
    )?;

    Ok(())
}

fn class(name: &str, description: &str, professor: &str, department: &str) -> ClassPatch {
    ClassPatch {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        term: Some("Fall 2024".to_string()),
        professor: Some(professor.to_string()),
        department: Some(department.to_string()),
        ..ClassPatch::default()
    }
}

fn department(name: &str, description: &str, head: &str) -> DepartmentPatch {
    DepartmentPatch {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        head_of_department: Some(head.to_string()),
        ..DepartmentPatch::default()
    }
}

fn professor(name: &str, hire_date: &str, address: &str, phone: &str) -> ProfessorPatch {
    ProfessorPatch {
        name: Some(name.to_string()),
        hire_date: Some(hire_date.to_string()),
        address: Some(address.to_string()),
        phone: Some(phone.to_string()),
        ..ProfessorPatch::default()
    }
}

fn student(name: &str, birth_date: &str, address: &str, phone: &str) -> StudentPatch {
    StudentPatch {
        name: Some(name.to_string()),
        birth_date: Some(birth_date.to_string()),
        address: Some(address.to_string()),
        phone: Some(phone.to_string()),
        ..StudentPatch::default()
    }
}

fn department_classes(classes: Vec<String>) -> DepartmentPatch {
    DepartmentPatch {
        classes: Some(classes),
        ..DepartmentPatch::default()
    }
}

fn professor_classes(classes: Vec<String>) -> ProfessorPatch {
    ProfessorPatch {
        classes: Some(classes),
        ..ProfessorPatch::default()
    }
}

fn student_enrollment(enrolled_classes: Vec<String>) -> StudentPatch {
    StudentPatch {
        enrolled_classes: Some(enrolled_classes),
        ..StudentPatch::default()
    }
}

fn class_roster(students: Vec<String>) -> ClassPatch {
    ClassPatch {
        students: Some(students),
        ..ClassPatch::default()
    }
}
