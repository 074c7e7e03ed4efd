use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, Name, NameError, ReadError};

pub trait TemplateRepository {
    fn read_templates(&self) -> Result<Vec<Template>, ReadError>;
    fn create_template(&self, name: Name, exercises: Vec<Name>) -> Result<Template, CreateError>;
}

pub trait TemplateService {
    fn get_templates(&self) -> Result<Vec<Template>, ReadError>;
    fn get_template(&self, id: TemplateID) -> Result<Template, ReadError>;
    fn create_template(&self, name: &str, exercise_text: &str) -> Result<Template, CreateError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: TemplateID,
    pub name: Name,
    pub exercises: Vec<Name>,
}

impl Template {
    /// One line of the template list: `"<name>: <exercise1, exercise2, ...>"`.
    #[must_use]
    pub fn summary(&self) -> String {
        let exercises = self
            .exercises
            .iter()
            .map(|name| name.as_ref().as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}: {exercises}", self.name)
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateID(Uuid);

impl TemplateID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for TemplateID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for TemplateID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Validated input of the setup form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTemplate {
    pub name: Name,
    pub exercises: Vec<Name>,
}

impl NewTemplate {
    pub fn parse(name: &str, exercise_text: &str) -> Result<Self, TemplateError> {
        let name = Name::new(name)?;
        let exercises = parse_exercises(exercise_text);

        if exercises.is_empty() {
            return Err(TemplateError::NoExercises);
        }

        Ok(Self { name, exercises })
    }
}

/// Splits the exercise input into one name per line, skipping blank lines.
#[must_use]
pub fn parse_exercises(exercise_text: &str) -> Vec<Name> {
    exercise_text
        .lines()
        .filter_map(|line| Name::new(line).ok())
        .collect()
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TemplateError {
    #[error(transparent)]
    InvalidName(#[from] NameError),
    #[error("Workout must contain at least one exercise")]
    NoExercises,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn names(names: &[&str]) -> Vec<Name> {
        names.iter().map(|n| Name::new(n).unwrap()).collect()
    }

    #[rstest]
    #[case::blank_line(
        "Bench Press\nOverhead Press\n\nDips",
        &["Bench Press", "Overhead Press", "Dips"]
    )]
    #[case::whitespace("  Squat \n\t\n Deadlift", &["Squat", "Deadlift"])]
    #[case::crlf("Row\r\nCurl\r\n", &["Row", "Curl"])]
    #[case::empty("", &[])]
    #[case::only_blank(" \n\n  \n", &[])]
    fn test_parse_exercises(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(parse_exercises(text), names(expected));
    }

    #[test]
    fn test_new_template_parse() {
        assert_eq!(
            NewTemplate::parse(" Push Day ", "Bench Press\nOverhead Press\n\nDips"),
            Ok(NewTemplate {
                name: Name::new("Push Day").unwrap(),
                exercises: names(&["Bench Press", "Overhead Press", "Dips"]),
            })
        );
    }

    #[rstest]
    #[case::empty_name("", "Squat", TemplateError::InvalidName(NameError::Empty))]
    #[case::blank_name("   ", "Squat", TemplateError::InvalidName(NameError::Empty))]
    #[case::no_exercises("Legs", "\n \n", TemplateError::NoExercises)]
    fn test_new_template_parse_invalid(
        #[case] name: &str,
        #[case] text: &str,
        #[case] expected: TemplateError,
    ) {
        assert_eq!(NewTemplate::parse(name, text), Err(expected));
    }

    #[test]
    fn test_template_summary() {
        let template = Template {
            id: 1u128.into(),
            name: Name::new("Push Day").unwrap(),
            exercises: names(&["Bench Press", "Overhead Press", "Dips"]),
        };
        assert_eq!(
            template.summary(),
            "Push Day: Bench Press, Overhead Press, Dips"
        );
    }

    #[test]
    fn test_template_id_nil() {
        assert!(TemplateID::nil().is_nil());
        assert_eq!(TemplateID::nil(), TemplateID::default());
        assert!(!TemplateID::from(1u128).is_nil());
    }
}
