use std::fmt;

/// Identifier shared by students, teachers and other faculty. Allocated by
/// `School` from a single counter, so it is unique for the process lifetime.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PersonId(pub usize);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub preferred_name: Option<String>,
}

impl Person {
    pub fn new(id: PersonId, first_name: &str, last_name: &str) -> Person {
        Person {
            id,
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            preferred_name: None,
        }
    }

    /// "First Last", with the preferred name substituted for the first name
    /// when one has been recorded.
    pub fn full_name(&self) -> String {
        let first = self.preferred_name.as_deref().unwrap_or(&self.first_name);
        format!("{} {}", first, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_uses_preferred_name_when_set() {
        let mut p = Person::new(PersonId(0), "Philip", "Fry");
        assert_eq!(p.full_name(), "Philip Fry");
        p.preferred_name = Some("Fry".to_owned());
        assert_eq!(p.full_name(), "Fry Fry");
    }
}
