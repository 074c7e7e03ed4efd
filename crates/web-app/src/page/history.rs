use liftlog_domain::{ExerciseLog, HistoryEntry, HistoryService};

use crate::view::Node;

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub entries: Vec<HistoryEntry>,
}

impl State {
    pub fn load(service: &impl HistoryService) -> Self {
        Self {
            entries: service.get_history().unwrap_or_default(),
        }
    }
}

pub fn view(state: &State) -> Node {
    let mut children = vec![Node::Title("History".to_string())];
    if state.entries.is_empty() {
        children.push(Node::Text("No workouts logged yet".to_string()));
    }
    children.extend(state.entries.iter().map(view_entry));
    Node::Column(children)
}

fn view_entry(entry: &HistoryEntry) -> Node {
    let mut children = vec![Node::Subtitle(entry.workout.clone())];
    children.extend(entry.exercises.iter().flat_map(view_exercise));
    Node::Block {
        title: entry.date.clone(),
        children,
    }
}

fn view_exercise(exercise: &ExerciseLog) -> [Node; 2] {
    [
        Node::Text(exercise.name.clone()),
        Node::List(exercise.set_lines()),
    ]
}
