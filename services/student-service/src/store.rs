//! In-memory student store

use parking_lot::RwLock;

use crate::models::{Student, StudentCreate, StudentUpdate};

struct Inner {
    students: Vec<Student>,
    next_id: i64,
}

/// Seeded in-memory list of students with monotonically assigned ids.
pub struct StudentStore {
    inner: RwLock<Inner>,
}

impl Default for StudentStore {
    fn default() -> Self {
        let students = vec![
            Student {
                id: 1,
                name: "Alice Johnson".to_string(),
                age: 20,
                email: "alice@university.edu".to_string(),
                course: "CS101".to_string(),
            },
            Student {
                id: 2,
                name: "Bob Smith".to_string(),
                age: 22,
                email: "bob@university.edu".to_string(),
                course: "IT202".to_string(),
            },
            Student {
                id: 3,
                name: "Charlie Lee".to_string(),
                age: 21,
                email: "charlie@university.edu".to_string(),
                course: "SE303".to_string(),
            },
        ];

        Self {
            inner: RwLock::new(Inner {
                next_id: 4,
                students,
            }),
        }
    }
}

impl StudentStore {
    #[must_use]
    pub fn list(&self) -> Vec<Student> {
        self.inner.read().students.clone()
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<Student> {
        self.inner
            .read()
            .students
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    pub fn create(&self, payload: StudentCreate) -> Student {
        let mut inner = self.inner.write();
        let student = Student {
            id: inner.next_id,
            name: payload.name,
            age: payload.age,
            email: payload.email,
            course: payload.course,
        };
        inner.next_id += 1;
        inner.students.push(student.clone());
        student
    }

    pub fn update(&self, id: i64, payload: StudentUpdate) -> Option<Student> {
        let mut inner = self.inner.write();
        let student = inner.students.iter_mut().find(|s| s.id == id)?;

        if let Some(name) = payload.name {
            student.name = name;
        }
        if let Some(age) = payload.age {
            student.age = age;
        }
        if let Some(email) = payload.email {
            student.email = email;
        }
        if let Some(course) = payload.course {
            student.course = course;
        }

        Some(student.clone())
    }

    pub fn delete(&self, id: i64) -> bool {
        let mut inner = self.inner.write();
        let before = inner.students.len();
        inner.students.retain(|s| s.id != id);
        inner.students.len() != before
    }
}
