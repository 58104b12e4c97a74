use crate::model::{CourseId, GradeScale};
use crate::school::School;
use eyre::{Error, WrapErr};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct Row<'a> {
    student_id: usize,
    student: String,
    course: &'a str,
    grade: String,
    letter: String,
}

/// Write the master gradebook of a course as CSV, one row per graded student.
pub fn export_master(
    school: &School,
    course: &CourseId,
    scale: &GradeScale,
    path: &str,
) -> Result<usize, Error> {
    let book = school.gradebook(course)?;
    let mut writer = csv::Writer::from_path(path)
        .wrap_err_with(|| format!("cannot create export file {path}"))?;
    let mut rows = 0;
    for student in book.roster() {
        if let Some(grade) = book.grade_of(student) {
            let name = school
                .student(student)
                .map_or_else(|_| student.to_string(), |s| s.person.full_name());
            writer.serialize(Row {
                student_id: student.0,
                student: name,
                course: &course.0,
                grade: grade.to_string(),
                letter: grade.letter(scale).to_string(),
            })?;
            rows += 1;
        }
    }
    writer.flush().wrap_err("cannot finish writing export file")?;
    info!(%course, path, rows, "master gradebook exported");
    Ok(rows)
}
