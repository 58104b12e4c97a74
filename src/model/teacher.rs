use crate::errors::SchoolError;
use crate::model::{CourseId, Gradebook, Person};

/// A teacher owns the gradebooks for the courses they run; nothing else
/// holds one.
#[derive(Debug)]
pub struct Teacher {
    pub person: Person,
    gradebooks: Vec<Gradebook>,
}

impl Teacher {
    pub fn new(person: Person) -> Teacher {
        Teacher {
            person,
            gradebooks: Vec::new(),
        }
    }

    /// Open a new gradebook for a course this teacher does not run yet.
    pub fn create_gradebook(&mut self, course: CourseId) -> Result<&mut Gradebook, SchoolError> {
        if self.gradebook(&course).is_some() {
            return Err(SchoolError::DuplicateCourse(course));
        }
        self.gradebooks.push(Gradebook::new(course));
        Ok(self
            .gradebooks
            .last_mut()
            .expect("gradebook was just created"))
    }

    pub fn gradebook(&self, course: &CourseId) -> Option<&Gradebook> {
        self.gradebooks.iter().find(|b| b.course == *course)
    }

    pub fn gradebook_mut(&mut self, course: &CourseId) -> Option<&mut Gradebook> {
        self.gradebooks.iter_mut().find(|b| b.course == *course)
    }

    pub fn gradebooks(&self) -> impl Iterator<Item = &Gradebook> {
        self.gradebooks.iter()
    }

    pub fn course_count(&self) -> usize {
        self.gradebooks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PersonId;

    #[test]
    fn duplicate_course_is_rejected() {
        let mut t = Teacher::new(Person::new(PersonId(0), "Hubert", "Farnsworth"));
        t.create_gradebook("Math101".into()).unwrap();
        assert_eq!(
            t.create_gradebook("Math101".into()).map(|_| ()),
            Err(SchoolError::DuplicateCourse("Math101".into()))
        );
        assert_eq!(t.course_count(), 1);
    }
}
