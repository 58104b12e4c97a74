use crate::model::{CourseId, Grade, Person};
use crate::school::School;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
pub struct Student {
    pub person: Person,
}

impl Student {
    pub fn new(person: Person) -> Student {
        Student { person }
    }

    /// Course → grade mapping for this student, empty when nothing has been
    /// assigned yet. Grades live in the gradebooks, so this reads through the
    /// school context rather than duplicating state here.
    pub fn view_grades(&self, school: &School) -> BTreeMap<CourseId, Grade> {
        school.grades_for(self.person.id)
    }
}
