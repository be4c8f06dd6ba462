//! The entity store: four keyed collections and the queries across them.
//!
//! Each collection is independent; ids are unique within their own kind
//! only. Deletes do not cascade into other records' relationship lists,
//! and traversals drop ids that no longer resolve. The store has no
//! internal locking — callers serialize access.

use super::collection::Collection;
use super::errors::{RegistryError, RegistryResult};
use super::ident;
use super::types::{
    Class, ClassPatch, Department, DepartmentPatch, EntityKind, Professor, ProfessorPatch,
    Student, StudentPatch,
};

/// In-memory store over students, classes, professors and departments.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    students: Collection<Student>,
    classes: Collection<Class>,
    professors: Collection<Professor>,
    departments: Collection<Department>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================
    // Student operations
    // ==================

    pub fn create_student(&mut self, patch: StudentPatch) -> Student {
        let id = ident::new_id();
        let student = Student::create(id.clone(), patch);
        self.students.insert(id, student.clone());
        student
    }

    pub fn get_student(&self, id: &str) -> Option<Student> {
        self.students.get(id).cloned()
    }

    pub fn list_students(&self) -> Vec<Student> {
        self.students.iter().cloned().collect()
    }

    pub fn update_student(&mut self, id: &str, patch: StudentPatch) -> RegistryResult<Student> {
        let student = self
            .students
            .get_mut(id)
            .ok_or(RegistryError::NotFound(EntityKind::Student))?;
        student.merge(patch);
        Ok(student.clone())
    }

    pub fn delete_student(&mut self, id: &str) -> bool {
        self.students.remove(id)
    }

    // ==================
    // Class operations
    // ==================

    pub fn create_class(&mut self, patch: ClassPatch) -> Class {
        let id = ident::new_id();
        let class = Class::create(id.clone(), patch);
        self.classes.insert(id, class.clone());
        class
    }

    pub fn get_class(&self, id: &str) -> Option<Class> {
        self.classes.get(id).cloned()
    }

    pub fn list_classes(&self) -> Vec<Class> {
        self.classes.iter().cloned().collect()
    }

    pub fn update_class(&mut self, id: &str, patch: ClassPatch) -> RegistryResult<Class> {
        let class = self
            .classes
            .get_mut(id)
            .ok_or(RegistryError::NotFound(EntityKind::Class))?;
        class.merge(patch);
        Ok(class.clone())
    }

    pub fn delete_class(&mut self, id: &str) -> bool {
        self.classes.remove(id)
    }

    // ==================
    // Professor operations
    // ==================

    pub fn create_professor(&mut self, patch: ProfessorPatch) -> Professor {
        let id = ident::new_id();
        let professor = Professor::create(id.clone(), patch);
        self.professors.insert(id, professor.clone());
        professor
    }

    pub fn get_professor(&self, id: &str) -> Option<Professor> {
        self.professors.get(id).cloned()
    }

    pub fn list_professors(&self) -> Vec<Professor> {
        self.professors.iter().cloned().collect()
    }

    pub fn update_professor(
        &mut self,
        id: &str,
        patch: ProfessorPatch,
    ) -> RegistryResult<Professor> {
        let professor = self
            .professors
            .get_mut(id)
            .ok_or(RegistryError::NotFound(EntityKind::Professor))?;
        professor.merge(patch);
        Ok(professor.clone())
    }

    pub fn delete_professor(&mut self, id: &str) -> bool {
        self.professors.remove(id)
    }

    // ==================
    // Department operations
    // ==================

    pub fn create_department(&mut self, patch: DepartmentPatch) -> Department {
        let id = ident::new_id();
        let department = Department::create(id.clone(), patch);
        self.departments.insert(id, department.clone());
        department
    }

    pub fn get_department(&self, id: &str) -> Option<Department> {
        self.departments.get(id).cloned()
    }

    pub fn list_departments(&self) -> Vec<Department> {
        self.departments.iter().cloned().collect()
    }

    pub fn update_department(
        &mut self,
        id: &str,
        patch: DepartmentPatch,
    ) -> RegistryResult<Department> {
        let department = self
            .departments
            .get_mut(id)
            .ok_or(RegistryError::NotFound(EntityKind::Department))?;
        department.merge(patch);
        Ok(department.clone())
    }

    pub fn delete_department(&mut self, id: &str) -> bool {
        self.departments.remove(id)
    }

    // ==================
    // Cross-collection queries
    // ==================

    /// Students on a class roster, in roster order.
    ///
    /// An unknown class yields an empty list, as do roster ids that no
    /// longer resolve to a student.
    pub fn class_students(&self, class_id: &str) -> Vec<Student> {
        let Some(class) = self.classes.get(class_id) else {
            return Vec::new();
        };
        class
            .students
            .iter()
            .filter_map(|student_id| self.students.get(student_id))
            .cloned()
            .collect()
    }

    /// Classes listed by a department, in list order, dropping ids that no
    /// longer resolve.
    pub fn department_classes(&self, department_id: &str) -> Vec<Class> {
        let Some(department) = self.departments.get(department_id) else {
            return Vec::new();
        };
        department
            .classes
            .iter()
            .filter_map(|class_id| self.classes.get(class_id))
            .cloned()
            .collect()
    }

    /// Professors teaching in a department, in professor creation order.
    ///
    /// Membership is derived per query: a professor belongs if any of their
    /// classes resolves to a class whose free-text `department` equals the
    /// department's `name`. The comparison is literal, so renaming a
    /// department without touching its classes changes the result.
    pub fn department_professors(&self, department_id: &str) -> Vec<Professor> {
        let Some(department) = self.departments.get(department_id) else {
            return Vec::new();
        };
        self.professors
            .iter()
            .filter(|professor| {
                professor.classes.iter().any(|class_id| {
                    self.classes
                        .get(class_id)
                        .map_or(false, |class| class.department == department.name)
                })
            })
            .cloned()
            .collect()
    }
}
