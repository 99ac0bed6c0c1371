//! Domain models that mirror the JSON collection files and get passed
//! throughout the menu. These types stay light-weight data holders; GPA and
//! course lists are never stored on them but derived from registrations by the
//! registry.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A student known to the gradebook. The email doubles as the identifier every
/// registration points back to.
pub struct Student {
    /// Unique identifier. Uniqueness is checked by the menu, not by storage.
    pub email: String,
    /// Display name shown in rankings and transcripts.
    pub names: String,
}

impl Student {
    pub fn new(email: &str, names: &str) -> Self {
        Self {
            email: email.to_string(),
            names: names.to_string(),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.names, self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A course students can be graded in.
pub struct Course {
    /// Unique identifier referenced by registrations.
    pub name: String,
    /// Term label. Informational only, GPA never looks at it.
    pub trimester: String,
    /// Weight applied to the grade points of every registration in this course.
    pub credits: u32,
}

impl Course {
    pub fn new(name: &str, trimester: &str, credits: u32) -> Self {
        Self {
            name: name.to_string(),
            trimester: trimester.to_string(),
            credits,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One graded enrolment. Both references are plain strings and may dangle if
/// the files were edited by hand.
pub struct Registration {
    pub email: String,
    pub course_name: String,
    /// Letter grade exactly as entered; case is preserved.
    pub grade: String,
}

impl Registration {
    pub fn new(email: &str, course_name: &str, grade: &str) -> Self {
        Self {
            email: email.to_string(),
            course_name: course_name.to_string(),
            grade: grade.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_display_includes_email() {
        let student = Student::new("s1@x.com", "Sam");
        assert_eq!(student.to_string(), "Sam <s1@x.com>");
    }

    #[test]
    fn registration_serializes_with_field_names() {
        let registration = Registration::new("s1@x.com", "Math101", "B");
        let json = serde_json::to_value(&registration).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "s1@x.com", "course_name": "Math101", "grade": "B"})
        );
    }
}
