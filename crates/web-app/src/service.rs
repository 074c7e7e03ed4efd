use log::error;

use crate::{Settings, SettingsRepository, SettingsService};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    fn get_settings(&self) -> Result<Settings, String> {
        self.repository.read_settings().inspect_err(|err| {
            error!("failed to get settings: {err}");
        })
    }

    fn set_settings(&self, settings: Settings) -> Result<(), String> {
        self.repository.write_settings(settings).inspect_err(|err| {
            error!("failed to set settings: {err}");
        })
    }
}
