use crate::{ExerciseLog, HistoryEntry, Name, Rest, Set, Template, TemplateID};

/// In-progress workout for one template.
///
/// Holds one block per template exercise in template order. Every block owns
/// a list of set rows which the user extends and shrinks while training. The
/// log is discarded when another template is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionLog {
    pub template_id: TemplateID,
    pub workout: Name,
    pub exercises: Vec<ExerciseBlock>,
    next_row_id: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseBlock {
    pub name: Name,
    pub rows: Vec<SetRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SetRowID(u32);

impl From<u32> for SetRowID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetRow {
    pub id: SetRowID,
    pub reps: String,
    pub weight: String,
    pub rest_minutes: u32,
    pub rest_seconds: u32,
}

impl SetRow {
    fn new(id: SetRowID) -> Self {
        Self {
            id,
            reps: String::new(),
            weight: String::new(),
            rest_minutes: 0,
            rest_seconds: 0,
        }
    }

    #[must_use]
    pub fn rest(&self) -> Rest {
        Rest::from_minutes_and_seconds(self.rest_minutes, self.rest_seconds)
    }

    #[must_use]
    pub fn to_set(&self) -> Set {
        Set {
            reps: self.reps.clone(),
            weight: self.weight.clone(),
            rest: self.rest(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetRowChange {
    Reps(String),
    Weight(String),
    RestMinutes(u32),
    RestSeconds(u32),
}

impl SessionLog {
    #[must_use]
    pub fn new(template: &Template) -> Self {
        Self {
            template_id: template.id,
            workout: template.name.clone(),
            exercises: template
                .exercises
                .iter()
                .map(|name| ExerciseBlock {
                    name: name.clone(),
                    rows: vec![],
                })
                .collect(),
            next_row_id: 0,
        }
    }

    /// Appends an empty row to the exercise at `exercise_idx`.
    pub fn add_set_row(&mut self, exercise_idx: usize) -> Option<SetRowID> {
        let id = SetRowID(self.next_row_id);
        let block = self.exercises.get_mut(exercise_idx)?;
        block.rows.push(SetRow::new(id));
        self.next_row_id += 1;
        Some(id)
    }

    /// Removes exactly the row `row_id` and returns whether it existed.
    pub fn remove_set_row(&mut self, exercise_idx: usize, row_id: SetRowID) -> bool {
        let Some(block) = self.exercises.get_mut(exercise_idx) else {
            return false;
        };
        let len = block.rows.len();
        block.rows.retain(|row| row.id != row_id);
        block.rows.len() != len
    }

    pub fn update_set_row(
        &mut self,
        exercise_idx: usize,
        row_id: SetRowID,
        change: SetRowChange,
    ) -> bool {
        let Some(row) = self
            .exercises
            .get_mut(exercise_idx)
            .and_then(|block| block.rows.iter_mut().find(|row| row.id == row_id))
        else {
            return false;
        };
        match change {
            SetRowChange::Reps(reps) => row.reps = reps,
            SetRowChange::Weight(weight) => row.weight = weight,
            SetRowChange::RestMinutes(minutes) => row.rest_minutes = minutes,
            SetRowChange::RestSeconds(seconds) => row.rest_seconds = seconds,
        }
        true
    }

    #[must_use]
    pub fn to_history_entry(&self, date: String) -> HistoryEntry {
        HistoryEntry {
            date,
            workout: self.workout.to_string(),
            exercises: self
                .exercises
                .iter()
                .map(|block| ExerciseLog {
                    name: block.name.to_string(),
                    sets: block.rows.iter().map(SetRow::to_set).collect(),
                })
                .collect(),
        }
    }
}
