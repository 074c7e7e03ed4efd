use liftlog_domain::{
    ExerciseBlock, Rest, SessionLog, SetRow, SetRowChange, SetRowID, Template, TemplateID,
    TemplateService,
};
use log::debug;
use uuid::Uuid;

use crate::view::{Action, Color, Field, InputKind, Node, SelectOption};

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    NoTemplates,
    TemplateSelected {
        templates: Vec<Template>,
        session: SessionLog,
    },
}

impl State {
    /// Selects the first stored template.
    pub fn load(service: &impl TemplateService) -> Self {
        let templates = service.get_templates().unwrap_or_default();
        match templates.first() {
            Some(template) => State::TemplateSelected {
                session: SessionLog::new(template),
                templates,
            },
            None => State::NoTemplates,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&SessionLog> {
        match self {
            State::NoTemplates => None,
            State::TemplateSelected { session, .. } => Some(session),
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut SessionLog> {
        match self {
            State::NoTemplates => None,
            State::TemplateSelected { session, .. } => Some(session),
        }
    }

    /// Starts a fresh session for `id`, discarding all rows entered so far.
    ///
    /// Templates are read again so that a template created since the screen
    /// was opened can be selected. Unknown ids are ignored.
    pub fn select_template(&mut self, service: &impl TemplateService, id: TemplateID) {
        let templates = service.get_templates().unwrap_or_default();
        let Some(session) = templates
            .iter()
            .find(|t| t.id == id)
            .map(SessionLog::new)
        else {
            debug!("ignoring selection of unknown template {}", *id);
            return;
        };
        *self = State::TemplateSelected { templates, session };
    }

    pub fn change(&mut self, service: &impl TemplateService, field: Field, value: &str) {
        let (exercise_idx, row, change) = match field {
            Field::Workout => {
                match Uuid::parse_str(value) {
                    Ok(id) => self.select_template(service, id.into()),
                    Err(err) => debug!("invalid template id {value:?}: {err}"),
                }
                return;
            }
            Field::Reps { exercise_idx, row } => {
                (exercise_idx, row, SetRowChange::Reps(value.to_string()))
            }
            Field::Weight { exercise_idx, row } => {
                (exercise_idx, row, SetRowChange::Weight(value.to_string()))
            }
            Field::RestMinutes { exercise_idx, row } => {
                let Ok(minutes) = value.parse() else { return };
                (exercise_idx, row, SetRowChange::RestMinutes(minutes))
            }
            Field::RestSeconds { exercise_idx, row } => {
                let Ok(seconds) = value.parse() else { return };
                (exercise_idx, row, SetRowChange::RestSeconds(seconds))
            }
            _ => return,
        };
        if let Some(session) = self.session_mut() {
            session.update_set_row(exercise_idx, row, change);
        }
    }

    pub fn add_set(&mut self, exercise_idx: usize) {
        if let Some(session) = self.session_mut() {
            session.add_set_row(exercise_idx);
        }
    }

    pub fn remove_set(&mut self, exercise_idx: usize, row: SetRowID) {
        if let Some(session) = self.session_mut() {
            session.remove_set_row(exercise_idx, row);
        }
    }
}

pub fn view(state: &State) -> Node {
    let mut children = vec![Node::Title("Log workout".to_string())];
    match state {
        State::NoTemplates => {
            children.push(Node::Text("No workouts defined yet".to_string()));
        }
        State::TemplateSelected { templates, session } => {
            children.push(Node::Select {
                field: Field::Workout,
                label: "Workout".to_string(),
                options: templates
                    .iter()
                    .map(|t| SelectOption {
                        value: t.id.to_string(),
                        label: t.name.to_string(),
                        selected: t.id == session.template_id,
                    })
                    .collect(),
            });
            children.extend(
                session
                    .exercises
                    .iter()
                    .enumerate()
                    .map(|(idx, block)| view_exercise(idx, block)),
            );
            children.push(Node::Button {
                label: "Save workout".to_string(),
                action: Action::SaveWorkout,
                color: Color::Success,
            });
        }
    }
    Node::Column(children)
}

fn view_exercise(exercise_idx: usize, block: &ExerciseBlock) -> Node {
    let mut children = block
        .rows
        .iter()
        .enumerate()
        .map(|(n, row)| view_set_row(exercise_idx, n + 1, row))
        .collect::<Vec<_>>();
    children.push(Node::Button {
        label: "Add set".to_string(),
        action: Action::AddSet { exercise_idx },
        color: Color::Light,
    });
    Node::Block {
        title: block.name.to_string(),
        children,
    }
}

fn view_set_row(exercise_idx: usize, number: usize, row: &SetRow) -> Node {
    let id = row.id;
    Node::Row(vec![
        Node::Text(format!("Set {number}")),
        Node::Input {
            field: Field::Reps { exercise_idx, row: id },
            label: "Reps".to_string(),
            value: row.reps.clone(),
            kind: InputKind::Number,
        },
        Node::Input {
            field: Field::Weight { exercise_idx, row: id },
            label: "Weight (kg)".to_string(),
            value: row.weight.clone(),
            kind: InputKind::Number,
        },
        Node::Select {
            field: Field::RestMinutes { exercise_idx, row: id },
            label: "Rest (min)".to_string(),
            options: rest_options(Rest::minute_options(), row.rest_minutes, "min"),
        },
        Node::Select {
            field: Field::RestSeconds { exercise_idx, row: id },
            label: "Rest (sec)".to_string(),
            options: rest_options(Rest::second_options(), row.rest_seconds, "sec"),
        },
        Node::Button {
            label: "Remove".to_string(),
            action: Action::RemoveSet { exercise_idx, row: id },
            color: Color::Danger,
        },
    ])
}

fn rest_options(values: Vec<u32>, selected: u32, unit: &str) -> Vec<SelectOption> {
    values
        .into_iter()
        .map(|v| SelectOption {
            value: v.to_string(),
            label: format!("{v} {unit}"),
            selected: v == selected,
        })
        .collect()
}
