use log::{debug, error, warn};

use crate::{
    CreateError, HistoryEntry, HistoryRepository, HistoryService, NewTemplate, ReadError,
    SessionLog, Template, TemplateID, TemplateRepository, TemplateService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
                    warn!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: TemplateRepository> TemplateService for Service<R> {
    fn get_templates(&self) -> Result<Vec<Template>, ReadError> {
        log_on_error!(
            self.repository.read_templates(),
            ReadError,
            "get",
            "templates"
        )
    }

    fn get_template(&self, id: TemplateID) -> Result<Template, ReadError> {
        self.get_templates()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(ReadError::NotFound)
    }

    fn create_template(&self, name: &str, exercise_text: &str) -> Result<Template, CreateError> {
        let template = match NewTemplate::parse(name, exercise_text) {
            Ok(template) => template,
            Err(err) => {
                debug!("ignoring invalid template: {err}");
                return Err(err.into());
            }
        };
        log_on_error!(
            self.repository
                .create_template(template.name, template.exercises),
            CreateError,
            "create",
            "template"
        )
    }
}

impl<R: HistoryRepository> HistoryService for Service<R> {
    fn get_history(&self) -> Result<Vec<HistoryEntry>, ReadError> {
        log_on_error!(
            self.repository.read_history(),
            ReadError,
            "get",
            "history"
        )
    }

    fn save_workout(
        &self,
        session: &SessionLog,
        date: String,
    ) -> Result<HistoryEntry, CreateError> {
        log_on_error!(
            self.repository
                .create_history_entry(session.to_history_entry(date)),
            CreateError,
            "save",
            "workout"
        )
    }
}
