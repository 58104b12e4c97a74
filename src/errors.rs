use crate::model::{CourseId, Grade, PersonId};
use thiserror::Error;

/// Everything a record-keeping operation can refuse to do. All of these
/// surface at the prompt as a message; none are recovered silently.
#[derive(Debug, Error, PartialEq)]
pub enum SchoolError {
    #[error("student {0} is not enrolled in {1}")]
    NotEnrolled(PersonId, CourseId),

    #[error("grade {0} is outside the allowed scale")]
    InvalidGrade(Grade),

    #[error("no grade has been assigned to student {0} in {1}")]
    NoGrade(PersonId, CourseId),

    #[error("a gradebook for {0} already exists")]
    DuplicateCourse(CourseId),

    #[error("no student with id {0}")]
    UnknownStudent(PersonId),

    #[error("no teacher with id {0}")]
    UnknownTeacher(PersonId),

    #[error("no gradebook for course {0}")]
    UnknownCourse(CourseId),

    #[error("no student matching {0:?}")]
    NoSuchStudent(String),

    #[error("no teacher matching {0:?}")]
    NoSuchTeacher(String),
}
