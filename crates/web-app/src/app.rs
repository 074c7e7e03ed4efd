use std::str::FromStr;

use chrono::{Local, NaiveDate};
use liftlog_domain::{
    CreateError, HistoryRepository, HistoryService, TemplateRepository, TemplateService,
};
use log::{debug, info};
use strum::{Display, EnumIter};

use crate::{
    DateFormat, Service, Settings, SettingsRepository, SettingsService, Theme, page,
    view::{Action, Color, Field, Notification, View},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Screen {
    #[default]
    Log,
    History,
    Setup,
}

#[derive(Debug, Clone, PartialEq)]
enum Page {
    Log(page::log::State),
    History(page::history::State),
    Setup(page::setup::State),
}

/// Application context shared by all screens.
///
/// Every user interaction is passed to [`App::dispatch`]. The resulting
/// screen is described by [`App::view`].
pub struct App<R> {
    domain: liftlog_domain::Service<R>,
    web_app: Service<R>,
    settings: Settings,
    page: Page,
    notification: Option<Notification>,
    today: fn() -> NaiveDate,
}

impl<R> App<R>
where
    R: TemplateRepository + HistoryRepository + SettingsRepository + Clone,
{
    pub fn new(repository: R) -> Self {
        let domain = liftlog_domain::Service::new(repository.clone());
        let web_app = Service::new(repository);
        let settings = web_app.get_settings().unwrap_or_default();
        let page = load_page(&domain, Screen::default());
        Self {
            domain,
            web_app,
            settings,
            page,
            notification: None,
            today: || Local::now().date_naive(),
        }
    }

    /// Replaces the source of the current date used for history entries.
    #[must_use]
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        match self.page {
            Page::Log(_) => Screen::Log,
            Page::History(_) => Screen::History,
            Page::Setup(_) => Screen::Setup,
        }
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Navigate(screen) => {
                self.notification = None;
                self.page = load_page(&self.domain, screen);
            }
            Action::Change {
                field: Field::DateFormat,
                value,
            } => {
                if let Ok(date_format) = DateFormat::from_str(&value) {
                    self.update_settings(Settings {
                        date_format,
                        ..self.settings
                    });
                }
            }
            Action::Change {
                field: Field::Theme,
                value,
            } => {
                if let Ok(theme) = Theme::from_str(&value) {
                    self.update_settings(Settings {
                        theme,
                        ..self.settings
                    });
                }
            }
            Action::Change { field, value } => match &mut self.page {
                Page::Log(state) => state.change(&self.domain, field, &value),
                Page::Setup(state) => state.change(field, value),
                Page::History(_) => {}
            },
            Action::SaveTemplate => {
                if let Page::Setup(state) = &mut self.page {
                    match state.save_template(&self.domain) {
                        Ok(Some(template)) => info!("created template {}", template.name),
                        Ok(None) => {}
                        Err(err) => {
                            self.notification =
                                Some(failure("Failed to save workout template", &err));
                        }
                    }
                }
            }
            Action::AddSet { exercise_idx } => {
                if let Page::Log(state) = &mut self.page {
                    state.add_set(exercise_idx);
                }
            }
            Action::RemoveSet { exercise_idx, row } => {
                if let Page::Log(state) = &mut self.page {
                    state.remove_set(exercise_idx, row);
                }
            }
            Action::SaveWorkout => self.save_workout(),
            Action::DismissNotification => self.notification = None,
        }
    }

    #[must_use]
    pub fn view(&self) -> View {
        View {
            screen: self.screen(),
            theme: self.settings.theme,
            content: match &self.page {
                Page::Log(state) => page::log::view(state),
                Page::History(state) => page::history::view(state),
                Page::Setup(state) => page::setup::view(state, &self.settings),
            },
            notification: self.notification.clone(),
        }
    }

    fn save_workout(&mut self) {
        let Page::Log(state) = &self.page else {
            return;
        };
        let Some(session) = state.session() else {
            return;
        };
        if self.domain.get_template(session.template_id).is_err() {
            debug!("not saving workout of missing template {}", *session.template_id);
            return;
        }
        let date = self.settings.date_format.format((self.today)());
        self.notification = Some(match self.domain.save_workout(session, date) {
            Ok(_) => Notification {
                message: "Workout saved".to_string(),
                color: Color::Success,
            },
            Err(err) => failure("Failed to save workout", &err),
        });
    }

    fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
        if self.web_app.set_settings(settings).is_err() {
            self.notification = Some(Notification {
                message: "Failed to save settings".to_string(),
                color: Color::Danger,
            });
        }
    }
}

fn load_page<R>(domain: &liftlog_domain::Service<R>, screen: Screen) -> Page
where
    R: TemplateRepository + HistoryRepository,
{
    match screen {
        Screen::Log => match page::log::State::load(domain) {
            page::log::State::NoTemplates => {
                debug!("no templates defined, showing setup");
                Page::Setup(page::setup::State::load(domain))
            }
            state => Page::Log(state),
        },
        Screen::History => Page::History(page::history::State::load(domain)),
        Screen::Setup => Page::Setup(page::setup::State::load(domain)),
    }
}

fn failure(message: &str, err: &CreateError) -> Notification {
    Notification {
        message: format!("{message}: {err}"),
        color: Color::Danger,
    }
}
