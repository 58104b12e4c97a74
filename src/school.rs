use crate::errors::SchoolError;
use crate::model::{CourseId, Grade, GradeScale, Gradebook, Person, PersonId, Student, Teacher};
use std::collections::BTreeMap;
use tracing::{info, trace};

/// Process-wide record context. Everything lives here for the lifetime of the
/// prompt: students, teachers, and (through the teachers) the gradebooks. Ids
/// come from a single counter, so no two persons ever share one.
#[derive(Debug, Default)]
pub struct School {
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    next_id: usize,
}

impl School {
    pub fn new() -> School {
        School::default()
    }

    fn allocate_id(&mut self) -> PersonId {
        let id = PersonId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn add_student(&mut self, first_name: &str, last_name: &str) -> PersonId {
        let id = self.allocate_id();
        self.students
            .push(Student::new(Person::new(id, first_name, last_name)));
        info!(%id, "registered student {first_name} {last_name}");
        id
    }

    pub fn add_teacher(&mut self, first_name: &str, last_name: &str) -> PersonId {
        let id = self.allocate_id();
        self.teachers
            .push(Teacher::new(Person::new(id, first_name, last_name)));
        info!(%id, "registered teacher {first_name} {last_name}");
        id
    }

    pub fn student(&self, id: PersonId) -> Result<&Student, SchoolError> {
        self.students
            .iter()
            .find(|s| s.person.id == id)
            .ok_or(SchoolError::UnknownStudent(id))
    }

    pub fn teacher(&self, id: PersonId) -> Result<&Teacher, SchoolError> {
        self.teachers
            .iter()
            .find(|t| t.person.id == id)
            .ok_or(SchoolError::UnknownTeacher(id))
    }

    fn teacher_mut(&mut self, id: PersonId) -> Result<&mut Teacher, SchoolError> {
        self.teachers
            .iter_mut()
            .find(|t| t.person.id == id)
            .ok_or(SchoolError::UnknownTeacher(id))
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn teachers(&self) -> impl Iterator<Item = &Teacher> {
        self.teachers.iter()
    }

    /// Open a gradebook for `course` under `teacher`. Courses are
    /// school-unique: a course already run by anyone, this teacher included,
    /// is a duplicate.
    pub fn create_gradebook(
        &mut self,
        teacher: PersonId,
        course: CourseId,
    ) -> Result<(), SchoolError> {
        self.teacher(teacher)?;
        if self.gradebook(&course).is_ok() {
            return Err(SchoolError::DuplicateCourse(course));
        }
        self.teacher_mut(teacher)?.create_gradebook(course.clone())?;
        info!(%teacher, %course, "gradebook created");
        Ok(())
    }

    pub fn gradebook(&self, course: &CourseId) -> Result<&Gradebook, SchoolError> {
        self.teachers
            .iter()
            .find_map(|t| t.gradebook(course))
            .ok_or_else(|| SchoolError::UnknownCourse(course.clone()))
    }

    pub fn gradebook_mut(&mut self, course: &CourseId) -> Result<&mut Gradebook, SchoolError> {
        self.teachers
            .iter_mut()
            .find_map(|t| t.gradebook_mut(course))
            .ok_or_else(|| SchoolError::UnknownCourse(course.clone()))
    }

    /// The teacher owning a course's gradebook.
    pub fn owner_of(&self, course: &CourseId) -> Result<&Teacher, SchoolError> {
        self.teachers
            .iter()
            .find(|t| t.gradebook(course).is_some())
            .ok_or_else(|| SchoolError::UnknownCourse(course.clone()))
    }

    pub fn enroll(&mut self, student: PersonId, course: &CourseId) -> Result<bool, SchoolError> {
        self.student(student)?;
        let enrolled = self.gradebook_mut(course)?.enroll(student);
        if enrolled {
            info!(%student, %course, "student enrolled");
        }
        Ok(enrolled)
    }

    pub fn drop_student(&mut self, student: PersonId, course: &CourseId) -> Result<(), SchoolError> {
        self.student(student)?;
        self.gradebook_mut(course)?.drop_student(student)?;
        info!(%student, %course, "student dropped");
        Ok(())
    }

    pub fn assign_grade(
        &mut self,
        student: PersonId,
        course: &CourseId,
        grade: Grade,
        scale: &GradeScale,
    ) -> Result<(), SchoolError> {
        self.student(student)?;
        self.gradebook_mut(course)?.assign_grade(student, grade, scale)?;
        trace!(%student, %course, %grade, "grade recorded");
        Ok(())
    }

    pub fn get_grade(&self, student: PersonId, course: &CourseId) -> Result<Grade, SchoolError> {
        self.student(student)?;
        self.gradebook(course)?.get_grade(student)
    }

    /// All grades recorded for a student, across every teacher's gradebooks.
    /// Empty when nothing has been assigned.
    pub fn grades_for(&self, student: PersonId) -> BTreeMap<CourseId, Grade> {
        self.teachers
            .iter()
            .flat_map(Teacher::gradebooks)
            .filter_map(|b| b.grade_of(student).map(|g| (b.course.clone(), g)))
            .collect()
    }

    /// Mean GPA points over the student's graded courses, or None when no
    /// course has a grade yet.
    pub fn gpa_of(&self, student: PersonId, scale: &GradeScale) -> Option<f64> {
        let grades = self.grades_for(student);
        if grades.is_empty() {
            return None;
        }
        let total: f64 = grades.values().map(|g| g.points(scale)).sum();
        Some(total / grades.len() as f64)
    }

    /// Record a preferred first name for any person, student or teacher.
    pub fn set_preferred_name(&mut self, id: PersonId, name: &str) -> Result<(), SchoolError> {
        let person = self
            .students
            .iter_mut()
            .map(|s| &mut s.person)
            .chain(self.teachers.iter_mut().map(|t| &mut t.person))
            .find(|p| p.id == id)
            .ok_or(SchoolError::UnknownStudent(id))?;
        person.preferred_name = Some(name.to_owned());
        Ok(())
    }

    /// Resolve "Jane Doe" or a bare "#id"/id number to a student id.
    pub fn find_student(&self, name_or_id: &str) -> Result<PersonId, SchoolError> {
        find_person(self.students.iter().map(|s| &s.person), name_or_id)
            .ok_or_else(|| SchoolError::NoSuchStudent(name_or_id.to_owned()))
    }

    pub fn find_teacher(&self, name_or_id: &str) -> Result<PersonId, SchoolError> {
        find_person(self.teachers.iter().map(|t| &t.person), name_or_id)
            .ok_or_else(|| SchoolError::NoSuchTeacher(name_or_id.to_owned()))
    }
}

fn find_person<'a>(
    mut persons: impl Iterator<Item = &'a Person>,
    name_or_id: &str,
) -> Option<PersonId> {
    let id = name_or_id
        .strip_prefix('#')
        .unwrap_or(name_or_id)
        .parse::<usize>()
        .ok();
    persons
        .find(|p| {
            Some(p.id.0) == id
                || p.full_name().eq_ignore_ascii_case(name_or_id)
                || format!("{} {}", p.first_name, p.last_name).eq_ignore_ascii_case(name_or_id)
        })
        .map(|p| p.id)
}
