pub use self::grade::{Grade, GradeScale, LETTERS, Letter};
pub use self::gradebook::{CourseId, Gradebook};
pub use self::person::{Person, PersonId};
pub use self::student::Student;
pub use self::teacher::Teacher;

mod grade;
mod gradebook;
mod person;
mod student;
mod teacher;
