use crate::errors::SchoolError;
use crate::model::{Grade, GradeScale, PersonId};
use std::collections::HashMap;
use std::fmt;

/// Course identifier, e.g. "Math101". School-unique.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CourseId(pub String);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CourseId {
    fn from(s: &str) -> CourseId {
        CourseId(s.to_owned())
    }
}

/// Grades for one course. Students are referenced by id only; the record
/// itself is owned by exactly one teacher.
///
/// Invariant: every key of `grades` is on the roster. Both mutating paths
/// (`assign_grade`, `drop_student`) preserve it.
#[derive(Debug)]
pub struct Gradebook {
    pub course: CourseId,
    roster: Vec<PersonId>,
    grades: HashMap<PersonId, Grade>,
}

impl Gradebook {
    pub fn new(course: CourseId) -> Gradebook {
        Gradebook {
            course,
            roster: Vec::new(),
            grades: HashMap::new(),
        }
    }

    /// Add a student to the roster. Returns false when the student was
    /// already enrolled, which callers report but do not treat as an error.
    pub fn enroll(&mut self, student: PersonId) -> bool {
        if self.is_enrolled(student) {
            false
        } else {
            self.roster.push(student);
            true
        }
    }

    /// Remove a student from the roster, along with any grade they had.
    pub fn drop_student(&mut self, student: PersonId) -> Result<(), SchoolError> {
        let pos = self
            .roster
            .iter()
            .position(|&s| s == student)
            .ok_or_else(|| SchoolError::NotEnrolled(student, self.course.clone()))?;
        self.roster.remove(pos);
        self.grades.remove(&student);
        Ok(())
    }

    /// Record a grade for an enrolled student, overwriting any prior one.
    /// An invalid grade leaves the prior grade untouched.
    pub fn assign_grade(
        &mut self,
        student: PersonId,
        grade: Grade,
        scale: &GradeScale,
    ) -> Result<(), SchoolError> {
        if !self.is_enrolled(student) {
            return Err(SchoolError::NotEnrolled(student, self.course.clone()));
        }
        if !scale.is_valid(grade) {
            return Err(SchoolError::InvalidGrade(grade));
        }
        self.grades.insert(student, grade);
        Ok(())
    }

    pub fn get_grade(&self, student: PersonId) -> Result<Grade, SchoolError> {
        self.grades
            .get(&student)
            .copied()
            .ok_or_else(|| SchoolError::NoGrade(student, self.course.clone()))
    }

    pub fn grade_of(&self, student: PersonId) -> Option<Grade> {
        self.grades.get(&student).copied()
    }

    /// Enrolled student ids, in enrollment order. The iterator borrows the
    /// roster, so it can be restarted as often as needed.
    pub fn roster(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.roster.iter().copied()
    }

    pub fn is_enrolled(&self, student: PersonId) -> bool {
        self.roster.contains(&student)
    }

    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    pub fn graded_count(&self) -> usize {
        self.grades.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Letter;

    fn book() -> Gradebook {
        Gradebook::new("Math101".into())
    }

    #[test]
    fn assign_then_get_round_trips() {
        let mut b = book();
        let scale = GradeScale::default();
        b.enroll(PersonId(1));
        b.assign_grade(PersonId(1), Grade::Numeric(92.0), &scale)
            .unwrap();
        assert_eq!(b.get_grade(PersonId(1)), Ok(Grade::Numeric(92.0)));
    }

    #[test]
    fn grading_a_stranger_is_an_enrollment_error() {
        let mut b = book();
        let scale = GradeScale::default();
        assert_eq!(
            b.assign_grade(PersonId(7), Grade::Numeric(50.0), &scale),
            Err(SchoolError::NotEnrolled(PersonId(7), "Math101".into()))
        );
    }

    #[test]
    fn lookup_before_any_assignment_is_not_found() {
        let mut b = book();
        b.enroll(PersonId(1));
        assert_eq!(
            b.get_grade(PersonId(1)),
            Err(SchoolError::NoGrade(PersonId(1), "Math101".into()))
        );
    }

    #[test]
    fn invalid_grade_leaves_prior_grade_unchanged() {
        let mut b = book();
        let scale = GradeScale::default();
        b.enroll(PersonId(1));
        b.assign_grade(PersonId(1), Grade::Numeric(75.0), &scale)
            .unwrap();
        assert_eq!(
            b.assign_grade(PersonId(1), Grade::Numeric(130.0), &scale),
            Err(SchoolError::InvalidGrade(Grade::Numeric(130.0)))
        );
        assert_eq!(b.get_grade(PersonId(1)), Ok(Grade::Numeric(75.0)));
    }

    #[test]
    fn reassignment_overwrites() {
        let mut b = book();
        let scale = GradeScale::default();
        b.enroll(PersonId(1));
        b.assign_grade(PersonId(1), Grade::Numeric(60.0), &scale)
            .unwrap();
        b.assign_grade(PersonId(1), Grade::Letter(Letter::A), &scale)
            .unwrap();
        assert_eq!(b.get_grade(PersonId(1)), Ok(Grade::Letter(Letter::A)));
    }

    #[test]
    fn enrolling_twice_is_reported_but_harmless() {
        let mut b = book();
        assert!(b.enroll(PersonId(1)));
        assert!(!b.enroll(PersonId(1)));
        assert_eq!(b.roster_len(), 1);
    }

    #[test]
    fn roster_is_restartable_and_reflects_current_state() {
        let mut b = book();
        b.enroll(PersonId(1));
        b.enroll(PersonId(2));
        assert_eq!(b.roster().collect::<Vec<_>>(), vec![PersonId(1), PersonId(2)]);
        // Restart the iteration after a mutation.
        b.drop_student(PersonId(1)).unwrap();
        assert_eq!(b.roster().collect::<Vec<_>>(), vec![PersonId(2)]);
    }

    #[test]
    fn dropping_a_student_also_drops_their_grade() {
        let mut b = book();
        let scale = GradeScale::default();
        b.enroll(PersonId(1));
        b.assign_grade(PersonId(1), Grade::Numeric(88.0), &scale)
            .unwrap();
        b.drop_student(PersonId(1)).unwrap();
        assert_eq!(b.graded_count(), 0);
        assert_eq!(
            b.drop_student(PersonId(1)),
            Err(SchoolError::NotEnrolled(PersonId(1), "Math101".into()))
        );
    }
}
