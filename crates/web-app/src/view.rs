//! Declarative description of a screen.
//!
//! Screens are rebuilt from their state after every action and handed to a
//! renderer, which turns the nodes into UI elements and reports user input
//! back as [`Action`]s.

use liftlog_domain::SetRowID;

use crate::{Screen, Theme};

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub screen: Screen,
    pub theme: Theme,
    pub content: Node,
    pub notification: Option<Notification>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Children stacked vertically.
    Column(Vec<Node>),
    /// Children placed side by side.
    Row(Vec<Node>),
    Block {
        title: String,
        children: Vec<Node>,
    },
    Title(String),
    Subtitle(String),
    Text(String),
    /// Read-only lines.
    List(Vec<String>),
    Input {
        field: Field,
        label: String,
        value: String,
        kind: InputKind,
    },
    Select {
        field: Field,
        label: String,
        options: Vec<SelectOption>,
    },
    Button {
        label: String,
        action: Action,
        color: Color,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    MultiLine,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Primary,
    Success,
    Danger,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub color: Color,
}

/// Editable value on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TemplateName,
    ExerciseText,
    Workout,
    Reps { exercise_idx: usize, row: SetRowID },
    Weight { exercise_idx: usize, row: SetRowID },
    RestMinutes { exercise_idx: usize, row: SetRowID },
    RestSeconds { exercise_idx: usize, row: SetRowID },
    DateFormat,
    Theme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Screen),
    Change { field: Field, value: String },
    SaveTemplate,
    AddSet { exercise_idx: usize },
    RemoveSet { exercise_idx: usize, row: SetRowID },
    SaveWorkout,
    DismissNotification,
}

impl Node {
    /// All text shown by this node and its children, depth first.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        let mut texts = vec![];
        self.collect_texts(&mut texts);
        texts
    }

    fn collect_texts(&self, texts: &mut Vec<String>) {
        match self {
            Node::Column(children) | Node::Row(children) => {
                for child in children {
                    child.collect_texts(texts);
                }
            }
            Node::Block { title, children } => {
                texts.push(title.clone());
                for child in children {
                    child.collect_texts(texts);
                }
            }
            Node::Title(text) | Node::Subtitle(text) | Node::Text(text) => {
                texts.push(text.clone());
            }
            Node::List(lines) => texts.extend(lines.iter().cloned()),
            Node::Input { label, .. } | Node::Select { label, .. } | Node::Button { label, .. } => {
                texts.push(label.clone());
            }
        }
    }

    /// The first input or select bound to `field`.
    #[must_use]
    pub fn find_field(&self, field: Field) -> Option<&Node> {
        match self {
            Node::Column(children) | Node::Row(children) | Node::Block { children, .. } => {
                children.iter().find_map(|c| c.find_field(field))
            }
            Node::Input { field: f, .. } | Node::Select { field: f, .. } if *f == field => {
                Some(self)
            }
            _ => None,
        }
    }

    /// Actions of all buttons, depth first.
    #[cfg(test)]
    pub fn actions(&self) -> Vec<Action> {
        match self {
            Node::Column(children) | Node::Row(children) | Node::Block { children, .. } => {
                children.iter().flat_map(Node::actions).collect()
            }
            Node::Button { action, .. } => vec![action.clone()],
            _ => vec![],
        }
    }
}
