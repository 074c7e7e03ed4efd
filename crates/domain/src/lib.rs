#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod history;
mod name;
mod service;
mod session;
mod template;

pub use error::{CreateError, ReadError, StorageError};
pub use history::{
    ExerciseLog, HistoryEntry, HistoryRepository, HistoryService, REST_MINUTES, REST_SECONDS,
    REST_SECONDS_STEP, Rest, Set,
};
pub use name::{Name, NameError};
pub use service::Service;
pub use session::{ExerciseBlock, SessionLog, SetRow, SetRowChange, SetRowID};
pub use template::{
    NewTemplate, Template, TemplateError, TemplateID, TemplateRepository, TemplateService,
    parse_exercises,
};
