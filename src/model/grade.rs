use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Letter grades on the school's scale. There is no E.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Letter {
    A,
    B,
    C,
    D,
    F,
}

pub const LETTERS: [Letter; 5] = [Letter::A, Letter::B, Letter::C, Letter::D, Letter::F];

impl Letter {
    /// GPA points on the school's 5.0 scale.
    pub fn points(self) -> f64 {
        match self {
            Letter::A => 5.0,
            Letter::B => 4.0,
            Letter::C => 3.0,
            Letter::D => 2.0,
            Letter::F => 0.0,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::F => 'F',
        };
        write!(f, "{c}")
    }
}

impl FromStr for Letter {
    type Err = ();

    fn from_str(s: &str) -> Result<Letter, ()> {
        match s {
            "A" | "a" => Ok(Letter::A),
            "B" | "b" => Ok(Letter::B),
            "C" | "c" => Ok(Letter::C),
            "D" | "d" => Ok(Letter::D),
            "F" | "f" => Ok(Letter::F),
            _ => Err(()),
        }
    }
}

/// A recorded grade, either on the numeric scale or already a letter.
/// Comparing the two forms goes through `letter()`, never through the raw
/// representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Grade {
    Numeric(f64),
    Letter(Letter),
}

impl Grade {
    /// Letter form of this grade under the given scale.
    pub fn letter(self, scale: &GradeScale) -> Letter {
        match self {
            Grade::Numeric(score) => scale.letter_for(score),
            Grade::Letter(letter) => letter,
        }
    }

    pub fn points(self, scale: &GradeScale) -> f64 {
        self.letter(scale).points()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Numeric(score) => write!(f, "{score}"),
            Grade::Letter(letter) => write!(f, "{letter}"),
        }
    }
}

impl FromStr for Grade {
    type Err = ();

    /// A bare number is a numeric grade, a letter name a letter grade.
    fn from_str(s: &str) -> Result<Grade, ()> {
        if let Ok(letter) = s.parse::<Letter>() {
            Ok(Grade::Letter(letter))
        } else if let Ok(score) = s.parse::<f64>() {
            Ok(Grade::Numeric(score))
        } else {
            Err(())
        }
    }
}

/// Numeric bounds and letter cutoffs. The source system never fixed those, so
/// they are configuration, with the usual 0-100 / 90-80-70-60 defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradeScale {
    pub min: f64,
    pub max: f64,
    pub a_cutoff: f64,
    pub b_cutoff: f64,
    pub c_cutoff: f64,
    pub d_cutoff: f64,
}

impl Default for GradeScale {
    fn default() -> GradeScale {
        GradeScale {
            min: 0.0,
            max: 100.0,
            a_cutoff: 90.0,
            b_cutoff: 80.0,
            c_cutoff: 70.0,
            d_cutoff: 60.0,
        }
    }
}

impl GradeScale {
    /// Letter grades are always on scale; numeric grades must fall within
    /// the configured bounds.
    pub fn is_valid(&self, grade: Grade) -> bool {
        match grade {
            Grade::Numeric(score) => score.is_finite() && score >= self.min && score <= self.max,
            Grade::Letter(_) => true,
        }
    }

    pub fn letter_for(&self, score: f64) -> Letter {
        if score >= self.a_cutoff {
            Letter::A
        } else if score >= self.b_cutoff {
            Letter::B
        } else if score >= self.c_cutoff {
            Letter::C
        } else if score >= self.d_cutoff {
            Letter::D
        } else {
            Letter::F
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_cutoffs() {
        let scale = GradeScale::default();
        assert_eq!(scale.letter_for(92.0), Letter::A);
        assert_eq!(scale.letter_for(90.0), Letter::A);
        assert_eq!(scale.letter_for(89.9), Letter::B);
        assert_eq!(scale.letter_for(60.0), Letter::D);
        assert_eq!(scale.letter_for(12.5), Letter::F);
    }

    #[test]
    fn numeric_grades_must_be_within_bounds() {
        let scale = GradeScale::default();
        assert!(scale.is_valid(Grade::Numeric(0.0)));
        assert!(scale.is_valid(Grade::Numeric(100.0)));
        assert!(!scale.is_valid(Grade::Numeric(-1.0)));
        assert!(!scale.is_valid(Grade::Numeric(101.0)));
        assert!(!scale.is_valid(Grade::Numeric(f64::NAN)));
        assert!(scale.is_valid(Grade::Letter(Letter::F)));
    }

    #[test]
    fn grades_parse_from_shell_input() {
        assert_eq!("92".parse(), Ok(Grade::Numeric(92.0)));
        assert_eq!("b".parse(), Ok(Grade::Letter(Letter::B)));
        assert_eq!("92.5".parse(), Ok(Grade::Numeric(92.5)));
        assert!("ninety".parse::<Grade>().is_err());
    }

    #[test]
    fn conversion_is_explicit() {
        let scale = GradeScale::default();
        assert_eq!(Grade::Numeric(85.0).letter(&scale), Letter::B);
        assert_eq!(Grade::Letter(Letter::A).letter(&scale), Letter::A);
        assert_eq!(Grade::Numeric(85.0).points(&scale), 4.0);
    }
}
