//! In-memory course store

use parking_lot::RwLock;

use crate::models::{Course, CourseCreate, CourseUpdate};

struct Inner {
    courses: Vec<Course>,
    next_id: i64,
}

/// Seeded in-memory list of courses.
///
/// Identifiers are assigned monotonically, starting above the seed data.
pub struct CourseStore {
    inner: RwLock<Inner>,
}

impl Default for CourseStore {
    fn default() -> Self {
        let courses = vec![
            Course {
                id: 1,
                title: "Intro to Programming".to_string(),
                code: "CS101".to_string(),
                credits: 3,
            },
            Course {
                id: 2,
                title: "Database Systems".to_string(),
                code: "IT202".to_string(),
                credits: 3,
            },
            Course {
                id: 3,
                title: "Software Engineering".to_string(),
                code: "SE303".to_string(),
                credits: 4,
            },
        ];

        Self {
            inner: RwLock::new(Inner {
                next_id: 4,
                courses,
            }),
        }
    }
}

impl CourseStore {
    #[must_use]
    pub fn list(&self) -> Vec<Course> {
        self.inner.read().courses.clone()
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<Course> {
        self.inner
            .read()
            .courses
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub fn create(&self, payload: CourseCreate) -> Course {
        let mut inner = self.inner.write();
        let course = Course {
            id: inner.next_id,
            title: payload.title,
            code: payload.code,
            credits: payload.credits,
        };
        inner.next_id += 1;
        inner.courses.push(course.clone());
        course
    }

    /// Apply only the fields present in the payload; absent fields are left
    /// untouched. Returns the updated course, or `None` if the id is unknown.
    pub fn update(&self, id: i64, payload: CourseUpdate) -> Option<Course> {
        let mut inner = self.inner.write();
        let course = inner.courses.iter_mut().find(|c| c.id == id)?;

        if let Some(title) = payload.title {
            course.title = title;
        }
        if let Some(code) = payload.code {
            course.code = code;
        }
        if let Some(credits) = payload.credits {
            course.credits = credits;
        }

        Some(course.clone())
    }

    pub fn delete(&self, id: i64) -> bool {
        let mut inner = self.inner.write();
        let before = inner.courses.len();
        inner.courses.retain(|c| c.id != id);
        inner.courses.len() != before
    }
}
