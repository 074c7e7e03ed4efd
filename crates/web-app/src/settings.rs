use chrono::{Datelike, NaiveDate};
use log::error;
use strum::{Display, EnumIter, EnumString};

pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, String>;
    fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, String>;
    fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub date_format: DateFormat,
    pub theme: Theme,
}

impl Settings {
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        match self.theme {
            Theme::System => {
                if let Some(window) = web_sys::window() {
                    if let Ok(prefers_dark_scheme) =
                        window.match_media("(prefers-color-scheme: dark)")
                    {
                        if let Some(media_query_list) = prefers_dark_scheme {
                            if media_query_list.matches() {
                                Theme::Dark
                            } else {
                                Theme::Light
                            }
                        } else {
                            error!("failed to determine preferred color scheme");
                            Theme::Light
                        }
                    } else {
                        error!("failed to match media to determine preferred color scheme");
                        Theme::Light
                    }
                } else {
                    error!("failed to access window to determine preferred color scheme");
                    Theme::Light
                }
            }
            Theme::Light | Theme::Dark => self.theme,
        }
    }
}

#[derive(
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

/// Day-precision date formats used for history entries.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumString,
)]
pub enum DateFormat {
    /// `10/18/2026`
    #[default]
    MonthDayYear,
    /// `18/10/2026`
    DayMonthYear,
    /// `2026-10-18`
    Iso,
}

impl DateFormat {
    #[must_use]
    pub fn format(self, date: NaiveDate) -> String {
        match self {
            DateFormat::MonthDayYear => {
                format!("{}/{}/{}", date.month(), date.day(), date.year())
            }
            DateFormat::DayMonthYear => date.format("%d/%m/%Y").to_string(),
            DateFormat::Iso => date.format("%Y-%m-%d").to_string(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "MM/DD/YYYY",
            DateFormat::DayMonthYear => "DD/MM/YYYY",
            DateFormat::Iso => "YYYY-MM-DD",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(DateFormat::MonthDayYear, "10/8/2026")]
    #[case(DateFormat::DayMonthYear, "08/10/2026")]
    #[case(DateFormat::Iso, "2026-10-08")]
    fn test_date_format(#[case] format: DateFormat, #[case] expected: &str) {
        assert_eq!(
            format.format(NaiveDate::from_ymd_opt(2026, 10, 8).unwrap()),
            expected
        );
    }

    #[test]
    fn test_settings_current_theme_explicit() {
        let settings = Settings {
            theme: Theme::Dark,
            ..Settings::default()
        };
        assert_eq!(settings.current_theme(), Theme::Dark);
    }
}
