use crate::config::Config;
use crate::display;
use crate::export;
use crate::model::Grade;
use crate::school::School;
use eyre::Error;
use std::io::{BufRead, Write};
use tracing::debug;

/// One parsed prompt line. Person arguments stay textual ("First Last" or
/// "#id") and are resolved against the school when the command runs.
#[derive(Debug, Eq, PartialEq)]
pub enum Command {
    AddStudent { first: String, last: String },
    AddTeacher { first: String, last: String },
    Prefer { person: String, name: String },
    NewGradebook { teacher: String, course: String },
    Enroll { student: String, course: String },
    Drop { student: String, course: String },
    Grade { student: String, course: String, grade: String },
    Show { student: String, course: String },
    Grades { student: String },
    Report { student: String },
    Roster { course: String },
    Master { course: String },
    Stats { course: String },
    Export { course: String, path: String },
    Students,
    Teachers,
    Help,
    Quit,
}

/// Parse one line. Ok(None) for blank lines, Err with a usage message
/// otherwise. Multi-word names are allowed wherever a person is expected;
/// the fixed arguments are taken from the end of the line.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let args = words.map(str::to_owned).collect::<Vec<_>>();
    let command = match keyword {
        "add-student" => {
            let (first, last) = two(&args, "add-student FIRST LAST")?;
            Command::AddStudent { first, last }
        }
        "add-teacher" => {
            let (first, last) = two(&args, "add-teacher FIRST LAST")?;
            Command::AddTeacher { first, last }
        }
        "prefer" => {
            let (person, name) = person_and(&args, 1, "prefer PERSON NAME")?;
            Command::Prefer { person, name: name[0].clone() }
        }
        "new-gradebook" => {
            let (teacher, rest) = person_and(&args, 1, "new-gradebook TEACHER COURSE")?;
            Command::NewGradebook { teacher, course: rest[0].clone() }
        }
        "enroll" => {
            let (student, rest) = person_and(&args, 1, "enroll STUDENT COURSE")?;
            Command::Enroll { student, course: rest[0].clone() }
        }
        "drop" => {
            let (student, rest) = person_and(&args, 1, "drop STUDENT COURSE")?;
            Command::Drop { student, course: rest[0].clone() }
        }
        "grade" => {
            let (student, rest) = person_and(&args, 2, "grade STUDENT COURSE GRADE")?;
            Command::Grade {
                student,
                course: rest[0].clone(),
                grade: rest[1].clone(),
            }
        }
        "show" => {
            let (student, rest) = person_and(&args, 1, "show STUDENT COURSE")?;
            Command::Show { student, course: rest[0].clone() }
        }
        "grades" => {
            let (student, _) = person_and(&args, 0, "grades STUDENT")?;
            Command::Grades { student }
        }
        "report" => {
            let (student, _) = person_and(&args, 0, "report STUDENT")?;
            Command::Report { student }
        }
        "roster" => Command::Roster { course: one(&args, "roster COURSE")? },
        "master" => Command::Master { course: one(&args, "master COURSE")? },
        "stats" => Command::Stats { course: one(&args, "stats COURSE")? },
        "export" => {
            let (course, path) = two(&args, "export COURSE FILE")?;
            Command::Export { course, path }
        }
        "students" => Command::Students,
        "teachers" => Command::Teachers,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command {other:?} (try \"help\")")),
    };
    Ok(Some(command))
}

fn one(args: &[String], usage: &str) -> Result<String, String> {
    match args {
        [only] => Ok(only.clone()),
        _ => Err(format!("usage: {usage}")),
    }
}

fn two(args: &[String], usage: &str) -> Result<(String, String), String> {
    match args {
        [a, b] => Ok((a.clone(), b.clone())),
        _ => Err(format!("usage: {usage}")),
    }
}

/// Split off `trailing` fixed arguments from the end; whatever precedes them
/// joins into the person reference.
fn person_and(args: &[String], trailing: usize, usage: &str) -> Result<(String, Vec<String>), String> {
    if args.len() < trailing + 1 {
        return Err(format!("usage: {usage}"));
    }
    let split = args.len() - trailing;
    Ok((args[..split].join(" "), args[split..].to_vec()))
}

/// Run the prompt until `quit` or end of input. Domain errors are printed
/// and the loop keeps going; only I/O trouble aborts.
pub fn run(school: &mut School, config: &Config, input: impl BufRead) -> Result<(), Error> {
    let mut out = std::io::stdout();
    println!("registrar - type \"help\" for the command list");
    write!(out, "> ")?;
    out.flush()?;
    for line in input.lines() {
        let line = line?;
        match parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => {
                debug!(?command, "executing");
                if let Err(e) = execute(school, config, command) {
                    println!("error: {e}");
                }
            }
            Ok(None) => (),
            Err(usage) => println!("{usage}"),
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

fn execute(school: &mut School, config: &Config, command: Command) -> Result<(), Error> {
    let scale = &config.scale;
    match command {
        Command::AddStudent { first, last } => {
            let id = school.add_student(&first, &last);
            println!("added student {first} {last} ({id})");
        }
        Command::AddTeacher { first, last } => {
            let id = school.add_teacher(&first, &last);
            println!("added teacher {first} {last} ({id})");
        }
        Command::Prefer { person, name } => {
            let id = school
                .find_student(&person)
                .or_else(|_| school.find_teacher(&person))?;
            school.set_preferred_name(id, &name)?;
            println!("{id} now goes by {name}");
        }
        Command::NewGradebook { teacher, course } => {
            let id = school.find_teacher(&teacher)?;
            school.create_gradebook(id, course.as_str().into())?;
            println!("created gradebook for {course}");
        }
        Command::Enroll { student, course } => {
            let id = school.find_student(&student)?;
            if school.enroll(id, &course.as_str().into())? {
                println!("enrolled {student} in {course}");
            } else {
                println!("{student} is already enrolled in {course}");
            }
        }
        Command::Drop { student, course } => {
            let id = school.find_student(&student)?;
            school.drop_student(id, &course.as_str().into())?;
            println!("dropped {student} from {course}");
        }
        Command::Grade { student, course, grade } => {
            let id = school.find_student(&student)?;
            let grade = grade
                .parse::<Grade>()
                .map_err(|()| eyre::eyre!("cannot understand grade {grade:?}"))?;
            school.assign_grade(id, &course.as_str().into(), grade, scale)?;
            println!("recorded {grade} for {student} in {course}");
        }
        Command::Show { student, course } => {
            let id = school.find_student(&student)?;
            let grade = school.get_grade(id, &course.as_str().into())?;
            println!("{student} has {} ({}) in {course}", grade, grade.letter(scale));
        }
        Command::Grades { student } => {
            let id = school.find_student(&student)?;
            let grades = school.student(id)?.view_grades(school);
            if grades.is_empty() {
                println!("no grades assigned yet");
            }
            for (course, grade) in grades {
                println!("  - {course}: {grade}");
            }
        }
        Command::Report { student } => {
            let id = school.find_student(&student)?;
            display::display_report_card(school, id, scale)?;
        }
        Command::Roster { course } => display::display_roster(school, &course.as_str().into())?,
        Command::Master { course } => {
            display::display_master(school, &course.as_str().into(), scale)?;
        }
        Command::Stats { course } => {
            display::display_distribution(school, &course.as_str().into(), scale)?;
        }
        Command::Export { course, path } => {
            let rows = export::export_master(school, &course.as_str().into(), scale, &path)?;
            println!("wrote {rows} rows to {path}");
        }
        Command::Students => display::display_students(school),
        Command::Teachers => display::display_teachers(school),
        Command::Help => print_help(),
        Command::Quit => (),
    }
    Ok(())
}

fn print_help() {
    println!(
        "commands:
  add-student FIRST LAST     register a student
  add-teacher FIRST LAST     register a teacher
  prefer PERSON NAME         record a preferred first name
  new-gradebook TEACHER COURSE
  enroll STUDENT COURSE      add a student to a course roster
  drop STUDENT COURSE        remove a student (and their grade)
  grade STUDENT COURSE GRADE assign a numeric (92) or letter (B) grade
  show STUDENT COURSE        look up one grade
  grades STUDENT             all grades for a student
  report STUDENT             report card with GPA
  roster COURSE              enrolled students
  master COURSE              every grade in the course
  stats COURSE               letter distribution
  export COURSE FILE         write the master gradebook as CSV
  students | teachers        list everyone known
  quit                       leave

PERSON and STUDENT accept a full name or a #id."
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_parse_to_nothing() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn fixed_arity_commands() {
        assert_eq!(
            parse("add-student Turanga Leela"),
            Ok(Some(Command::AddStudent {
                first: "Turanga".to_owned(),
                last: "Leela".to_owned(),
            }))
        );
        assert_eq!(
            parse("roster Math101"),
            Ok(Some(Command::Roster { course: "Math101".to_owned() }))
        );
        assert!(parse("roster").is_err());
        assert!(parse("roster Math101 extra").is_err());
    }

    #[test]
    fn person_references_may_span_words() {
        assert_eq!(
            parse("grade Turanga Leela Math101 92"),
            Ok(Some(Command::Grade {
                student: "Turanga Leela".to_owned(),
                course: "Math101".to_owned(),
                grade: "92".to_owned(),
            }))
        );
        assert_eq!(
            parse("grade #2 Math101 B"),
            Ok(Some(Command::Grade {
                student: "#2".to_owned(),
                course: "Math101".to_owned(),
                grade: "B".to_owned(),
            }))
        );
    }

    #[test]
    fn unknown_commands_are_reported_not_fatal() {
        assert!(parse("frobnicate").is_err());
        assert!(parse("grade onlyonearg").is_err());
    }

    #[test]
    fn quit_and_help_aliases() {
        assert_eq!(parse("exit"), Ok(Some(Command::Quit)));
        assert_eq!(parse("?"), Ok(Some(Command::Help)));
    }

    #[test]
    fn a_full_session_drives_the_school() {
        let mut school = School::new();
        let config = Config::default();
        for line in [
            "add-teacher Hubert Farnsworth",
            "add-student Turanga Leela",
            "new-gradebook Hubert Farnsworth Math101",
            "enroll Turanga Leela Math101",
            "grade Turanga Leela Math101 92",
        ] {
            let command = parse(line).unwrap().unwrap();
            execute(&mut school, &config, command).unwrap();
        }
        let s1 = school.find_student("Turanga Leela").unwrap();
        assert_eq!(
            school.get_grade(s1, &"Math101".into()),
            Ok(Grade::Numeric(92.0))
        );
    }

    #[test]
    fn domain_errors_surface_from_execute() {
        let mut school = School::new();
        let config = Config::default();
        let t = school.add_teacher("John", "Zoidberg");
        school.create_gradebook(t, "Bio202".into()).unwrap();
        let command = parse("grade #99 Bio202 50").unwrap().unwrap();
        assert!(execute(&mut school, &config, command).is_err());
    }
}
