//! Entity records and their patch companions.
//!
//! Every record carries a string id assigned at creation; the id is never
//! overwritten by a patch. Relationship fields are plain id lists into the
//! other collections — nothing keeps the two sides of a relationship in
//! sync, and a stored id may stop resolving once the target is deleted.
//! Wire names are camelCase.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four entity kinds held by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Student,
    Class,
    Professor,
    Department,
}

impl EntityKind {
    /// Returns the kind name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Student => "Student",
            EntityKind::Class => "Class",
            EntityKind::Professor => "Professor",
            EntityKind::Department => "Department",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==================
// Student
// ==================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub enrolled_classes: Vec<String>,
}

/// Partial student payload: create input and shallow-merge update input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    /// Accepted on the wire but never applied; ids are immutable.
    pub id: Option<String>,
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub enrolled_classes: Option<Vec<String>>,
}

impl Student {
    /// Build a new record from a patch. The enrollment list always starts
    /// empty; callers wire relationships afterwards via update.
    pub fn create(id: String, patch: StudentPatch) -> Self {
        Self {
            id,
            name: patch.name.unwrap_or_default(),
            birth_date: patch.birth_date.unwrap_or_default(),
            address: patch.address.unwrap_or_default(),
            phone: patch.phone.unwrap_or_default(),
            enrolled_classes: Vec::new(),
        }
    }

    /// Overlay the supplied fields onto this record. A supplied list fully
    /// replaces the stored one; the id is left untouched.
    pub fn merge(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(birth_date) = patch.birth_date {
            self.birth_date = birth_date;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(enrolled_classes) = patch.enrolled_classes {
            self.enrolled_classes = enrolled_classes;
        }
    }
}

// ==================
// Class
// ==================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub term: String,
    /// Professor name, free text — not an id.
    #[serde(default)]
    pub professor: String,
    /// Department name, free text — not an id. The professor/department
    /// association is derived from this field by literal equality.
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub students: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub term: Option<String>,
    pub professor: Option<String>,
    pub department: Option<String>,
    pub students: Option<Vec<String>>,
}

impl Class {
    pub fn create(id: String, patch: ClassPatch) -> Self {
        Self {
            id,
            name: patch.name.unwrap_or_default(),
            description: patch.description.unwrap_or_default(),
            term: patch.term.unwrap_or_default(),
            professor: patch.professor.unwrap_or_default(),
            department: patch.department.unwrap_or_default(),
            students: Vec::new(),
        }
    }

    pub fn merge(&mut self, patch: ClassPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(term) = patch.term {
            self.term = term;
        }
        if let Some(professor) = patch.professor {
            self.professor = professor;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(students) = patch.students {
            self.students = students;
        }
    }
}

// ==================
// Professor
// ==================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hire_date: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub hire_date: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub classes: Option<Vec<String>>,
}

impl Professor {
    pub fn create(id: String, patch: ProfessorPatch) -> Self {
        Self {
            id,
            name: patch.name.unwrap_or_default(),
            hire_date: patch.hire_date.unwrap_or_default(),
            address: patch.address.unwrap_or_default(),
            phone: patch.phone.unwrap_or_default(),
            classes: Vec::new(),
        }
    }

    pub fn merge(&mut self, patch: ProfessorPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(hire_date) = patch.hire_date {
            self.hire_date = hire_date;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(classes) = patch.classes {
            self.classes = classes;
        }
    }
}

// ==================
// Department
// ==================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub head_of_department: String,
    #[serde(default)]
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub head_of_department: Option<String>,
    pub classes: Option<Vec<String>>,
}

impl Department {
    pub fn create(id: String, patch: DepartmentPatch) -> Self {
        Self {
            id,
            name: patch.name.unwrap_or_default(),
            description: patch.description.unwrap_or_default(),
            head_of_department: patch.head_of_department.unwrap_or_default(),
            classes: Vec::new(),
        }
    }

    pub fn merge(&mut self, patch: DepartmentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(head_of_department) = patch.head_of_department {
            self.head_of_department = head_of_department;
        }
        if let Some(classes) = patch.classes {
            self.classes = classes;
        }
    }
}
