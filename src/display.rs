use crate::errors::SchoolError;
use crate::model::{CourseId, GradeScale, PersonId};
use crate::school::School;
use crate::stats;

/// Roster of a course, sorted by student name.
pub fn display_roster(school: &School, course: &CourseId) -> Result<(), SchoolError> {
    let book = school.gradebook(course)?;
    let owner = school.owner_of(course)?;
    println!(
        "{} (taught by {}), {} enrolled:",
        course,
        owner.person.full_name(),
        book.roster_len()
    );
    let mut students = book
        .roster()
        .map(|s| {
            let name = school
                .student(s)
                .map_or_else(|_| s.to_string(), |st| st.person.full_name());
            (name, s)
        })
        .collect::<Vec<_>>();
    students.sort_by_key(|(name, _)| name.clone());
    for (name, s) in students {
        println!("  - {} ({})", name, s);
    }
    Ok(())
}

/// Per-student report card: every graded course with its letter form, then
/// the GPA over them.
pub fn display_report_card(
    school: &School,
    student: PersonId,
    scale: &GradeScale,
) -> Result<(), SchoolError> {
    let st = school.student(student)?;
    println!("Report card for {} ({}):", st.person.full_name(), student);
    let grades = st.view_grades(school);
    if grades.is_empty() {
        println!("  no grades assigned yet");
        return Ok(());
    }
    for (course, grade) in &grades {
        println!("  - {}: {} ({})", course, grade, grade.letter(scale));
    }
    if let Some(gpa) = school.gpa_of(student, scale) {
        println!("GPA: {gpa:.2}");
    }
    Ok(())
}

/// Every grade in a course's gradebook, one row per graded student.
pub fn display_master(
    school: &School,
    course: &CourseId,
    scale: &GradeScale,
) -> Result<(), SchoolError> {
    let book = school.gradebook(course)?;
    println!(
        "Master gradebook for {} ({} graded / {} enrolled):",
        course,
        book.graded_count(),
        book.roster_len()
    );
    let mut rows = book
        .roster()
        .filter_map(|s| {
            let name = school
                .student(s)
                .map_or_else(|_| s.to_string(), |st| st.person.full_name());
            book.grade_of(s).map(|grade| (name, s, grade))
        })
        .collect::<Vec<_>>();
    rows.sort_by_key(|(name, _, _)| name.clone());
    for (name, s, grade) in rows {
        println!("  - {} ({}): {} ({})", name, s, grade, grade.letter(scale));
    }
    Ok(())
}

/// Letter distribution with cumulative percentages.
pub fn display_distribution(
    school: &School,
    course: &CourseId,
    scale: &GradeScale,
) -> Result<(), SchoolError> {
    let book = school.gradebook(course)?;
    let counts = stats::distribution(book, scale);
    let total: usize = counts.iter().map(|&(_, n)| n).sum();
    if total == 0 {
        println!("No grades assigned yet in {course}");
        return Ok(());
    }
    let cumul = counts.iter().scan(0, |s, &(_, n)| {
        *s += n;
        Some(*s)
    });
    println!("Grade distribution for {course}:");
    for (&(letter, n), c) in counts.iter().zip(cumul) {
        if n != 0 {
            println!(
                "  - {}: {} (cumulative {} - {:.2}%)",
                letter,
                n,
                c,
                100.0 * c as f32 / total as f32
            );
        }
    }
    Ok(())
}

/// All known students (or teachers), sorted by id.
pub fn display_students(school: &School) {
    for s in school.students() {
        println!("  - {} ({})", s.person.full_name(), s.person.id);
    }
}

pub fn display_teachers(school: &School) {
    for t in school.teachers() {
        let courses = t
            .gradebooks()
            .map(|b| b.course.to_string())
            .collect::<Vec<_>>();
        println!(
            "  - {} ({}): {}",
            t.person.full_name(),
            t.person.id,
            if courses.is_empty() {
                "no courses".to_owned()
            } else {
                courses.join(", ")
            }
        );
    }
}
