use liftlog_domain::{CreateError, Template, TemplateService};
use strum::IntoEnumIterator;

use crate::{
    DateFormat, Settings, Theme,
    view::{Action, Color, Field, InputKind, Node, SelectOption},
};

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub name: String,
    pub exercises: String,
    pub templates: Vec<Template>,
}

impl State {
    pub fn load(service: &impl TemplateService) -> Self {
        Self {
            name: String::new(),
            exercises: String::new(),
            templates: service.get_templates().unwrap_or_default(),
        }
    }

    pub fn change(&mut self, field: Field, value: String) {
        match field {
            Field::TemplateName => self.name = value,
            Field::ExerciseText => self.exercises = value,
            _ => {}
        }
    }

    /// Creates a template from the form.
    ///
    /// Invalid input leaves the form untouched and yields `Ok(None)`. Only
    /// storage failures are returned as errors.
    pub fn save_template(
        &mut self,
        service: &impl TemplateService,
    ) -> Result<Option<Template>, CreateError> {
        match service.create_template(&self.name, &self.exercises) {
            Ok(template) => {
                self.name.clear();
                self.exercises.clear();
                self.templates = service.get_templates().unwrap_or_default();
                Ok(Some(template))
            }
            Err(CreateError::InvalidTemplate(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

pub fn view(state: &State, settings: &Settings) -> Node {
    Node::Column(vec![
        Node::Title("Setup".to_string()),
        view_form(state),
        view_templates(&state.templates),
        view_settings(settings),
    ])
}

fn view_form(state: &State) -> Node {
    Node::Block {
        title: "New workout".to_string(),
        children: vec![
            Node::Input {
                field: Field::TemplateName,
                label: "Workout name".to_string(),
                value: state.name.clone(),
                kind: InputKind::Text,
            },
            Node::Input {
                field: Field::ExerciseText,
                label: "Exercises (one per line)".to_string(),
                value: state.exercises.clone(),
                kind: InputKind::MultiLine,
            },
            Node::Button {
                label: "Save workout template".to_string(),
                action: Action::SaveTemplate,
                color: Color::Primary,
            },
        ],
    }
}

fn view_templates(templates: &[Template]) -> Node {
    Node::Block {
        title: "Workouts".to_string(),
        children: vec![if templates.is_empty() {
            Node::Text("No workouts defined yet".to_string())
        } else {
            Node::List(templates.iter().map(Template::summary).collect())
        }],
    }
}

fn view_settings(settings: &Settings) -> Node {
    Node::Block {
        title: "Settings".to_string(),
        children: vec![
            Node::Select {
                field: Field::DateFormat,
                label: "Date format".to_string(),
                options: DateFormat::iter()
                    .map(|f| SelectOption {
                        value: f.to_string(),
                        label: f.label().to_string(),
                        selected: f == settings.date_format,
                    })
                    .collect(),
            },
            Node::Select {
                field: Field::Theme,
                label: "Theme".to_string(),
                options: Theme::iter()
                    .map(|t| SelectOption {
                        value: t.to_string(),
                        label: t.to_string(),
                        selected: t == settings.theme,
                    })
                    .collect(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use liftlog_domain::{ReadError, StorageError, TemplateID};
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct FakeService {
        templates: RefCell<Vec<Template>>,
        fail: bool,
    }

    impl TemplateService for FakeService {
        fn get_templates(&self) -> Result<Vec<Template>, ReadError> {
            Ok(self.templates.borrow().clone())
        }

        fn get_template(&self, id: TemplateID) -> Result<Template, ReadError> {
            self.get_templates()?
                .into_iter()
                .find(|t| t.id == id)
                .ok_or(ReadError::NotFound)
        }

        fn create_template(
            &self,
            name: &str,
            exercise_text: &str,
        ) -> Result<Template, CreateError> {
            let new = liftlog_domain::NewTemplate::parse(name, exercise_text)?;
            if self.fail {
                return Err(StorageError::Unavailable.into());
            }
            let template = Template {
                id: 1u128.into(),
                name: new.name,
                exercises: new.exercises,
            };
            self.templates.borrow_mut().push(template.clone());
            Ok(template)
        }
    }

    fn filled_state(service: &FakeService, name: &str, exercises: &str) -> State {
        let mut state = State::load(service);
        state.change(Field::TemplateName, name.to_string());
        state.change(Field::ExerciseText, exercises.to_string());
        state
    }

    #[test]
    fn test_save_template_clears_form_and_lists_template() {
        let service = FakeService::default();
        let mut state = filled_state(&service, "Push Day", "Bench Press\n\nDips");

        let template = state.save_template(&service).unwrap().unwrap();

        assert_eq!(state.name, "");
        assert_eq!(state.exercises, "");
        assert_eq!(state.templates, vec![template]);
        assert_eq!(
            view(&state, &Settings::default()).texts()[..8],
            [
                "Setup",
                "New workout",
                "Workout name",
                "Exercises (one per line)",
                "Save workout template",
                "Workouts",
                "Push Day: Bench Press, Dips",
                "Settings",
            ]
        );
    }

    #[test]
    fn test_save_template_invalid_keeps_form() {
        let service = FakeService::default();
        let mut state = filled_state(&service, "  ", "Squat");

        assert_eq!(state.save_template(&service).unwrap(), None);

        assert_eq!(state.name, "  ");
        assert_eq!(state.exercises, "Squat");
        assert!(state.templates.is_empty());
        assert_eq!(
            view_templates(&state.templates),
            Node::Block {
                title: "Workouts".to_string(),
                children: vec![Node::Text("No workouts defined yet".to_string())],
            }
        );
    }

    #[test]
    fn test_save_template_storage_failure() {
        let service = FakeService {
            fail: true,
            ..FakeService::default()
        };
        let mut state = filled_state(&service, "Legs", "Squat");

        assert!(matches!(
            state.save_template(&service),
            Err(CreateError::Storage(StorageError::Unavailable))
        ));
        assert_eq!(state.name, "Legs");
    }

    #[test]
    fn test_view_settings_marks_selection() {
        let node = view_settings(&Settings {
            date_format: DateFormat::Iso,
            theme: Theme::Dark,
        });
        let Some(Node::Select { options, .. }) = node.find_field(Field::DateFormat) else {
            panic!("missing date format select");
        };
        assert_eq!(
            options
                .iter()
                .filter(|o| o.selected)
                .map(|o| o.value.as_str())
                .collect::<Vec<_>>(),
            vec!["Iso"]
        );
    }
}
