#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod app;
pub mod log;
mod page;
mod service;
mod settings;
pub mod view;

pub use app::{App, Screen};
pub use service::Service;
pub use settings::{DateFormat, Settings, SettingsRepository, SettingsService, Theme};
