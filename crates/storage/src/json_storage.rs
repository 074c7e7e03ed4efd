use std::collections::VecDeque;

use liftlog_domain as domain;
use liftlog_web_app as web_app;
use log::{debug, warn};
use uuid::Uuid;

use crate::{
    KEY_HISTORY, KEY_LOG, KEY_SETTINGS, KEY_TEMPLATES, KeyValueStore, StoreError, load, save,
};

/// Upper bound for the number of sets restored from a legacy exercise log.
const MAX_LEGACY_SETS: usize = 100;

/// Application data kept as JSON documents in a [`KeyValueStore`].
#[derive(Debug, Default, Clone)]
pub struct JsonStorage<S> {
    store: S,
}

impl<S> JsonStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> domain::TemplateRepository for JsonStorage<S> {
    fn read_templates(&self) -> Result<Vec<domain::Template>, domain::ReadError> {
        let mut templates = load::<Template>(&self.store, KEY_TEMPLATES)?;
        if templates.iter().any(|t| t.id.is_none()) {
            for (position, template) in templates.iter_mut().enumerate() {
                if template.id.is_none() {
                    template.id = Some(backfill_id(position, &template.name));
                }
            }
            match save(&self.store, KEY_TEMPLATES, &templates) {
                Ok(()) => debug!("assigned ids to stored templates"),
                Err(err) => warn!("failed to store assigned template ids: {err}"),
            }
        }
        Ok(templates
            .into_iter()
            .filter_map(|template| {
                domain::Template::try_from(template)
                    .inspect_err(|err| warn!("skipping invalid stored template: {err}"))
                    .ok()
            })
            .collect())
    }

    fn create_template(
        &self,
        name: domain::Name,
        exercises: Vec<domain::Name>,
    ) -> Result<domain::Template, domain::CreateError> {
        let mut templates = load::<Template>(&self.store, KEY_TEMPLATES)?;
        let template = domain::Template {
            id: Uuid::new_v4().into(),
            name,
            exercises,
        };
        templates.push(Template::from(&template));
        save(&self.store, KEY_TEMPLATES, &templates)?;
        Ok(template)
    }
}

/// Id for a stored template which has none.
///
/// The id only depends on the record, so it stays the same across reads even
/// if it cannot be written back.
fn backfill_id(position: usize, name: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, format!("{position}:{name}").as_bytes())
}

impl<S: KeyValueStore> domain::HistoryRepository for JsonStorage<S> {
    fn read_history(&self) -> Result<Vec<domain::HistoryEntry>, domain::ReadError> {
        Ok(load::<serde_json::Value>(&self.store, KEY_HISTORY)?
            .into_iter()
            .filter_map(|record| {
                serde_json::from_value::<HistoryEntry>(record)
                    .inspect_err(|err| warn!("skipping invalid stored history entry: {err}"))
                    .ok()
            })
            .map(domain::HistoryEntry::from)
            .collect())
    }

    fn create_history_entry(
        &self,
        entry: domain::HistoryEntry,
    ) -> Result<domain::HistoryEntry, domain::CreateError> {
        // Records which cannot be decoded are kept as they are.
        let mut history = load::<serde_json::Value>(&self.store, KEY_HISTORY)?;
        let record = serde_json::to_value(HistoryEntry::from(&entry)).map_err(StoreError::from)?;
        history.insert(0, record);
        save(&self.store, KEY_HISTORY, &history)?;
        Ok(entry)
    }
}

impl<S: KeyValueStore> web_app::SettingsRepository for JsonStorage<S> {
    fn read_settings(&self) -> Result<web_app::Settings, String> {
        match self
            .store
            .get_item(KEY_SETTINGS)
            .map_err(|err| err.to_string())?
        {
            Some(json) => serde_json::from_str(&json).map_err(|err| err.to_string()),
            None => Ok(web_app::Settings::default()),
        }
    }

    fn write_settings(&self, settings: web_app::Settings) -> Result<(), String> {
        save(&self.store, KEY_SETTINGS, &settings).map_err(|err| err.to_string())
    }
}

impl<S> web_app::log::Repository for JsonStorage<S>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    fn read_entries(&self) -> Result<VecDeque<web_app::log::Entry>, web_app::log::Error> {
        match self
            .store
            .get_item(KEY_LOG)
            .map_err(|err| web_app::log::Error::Unknown(err.to_string()))?
        {
            Some(json) => serde_json::from_str(&json)
                .map_err(|err| web_app::log::Error::Unknown(err.to_string())),
            None => Ok(VecDeque::new()),
        }
    }

    fn write_entry(&self, entry: web_app::log::Entry) -> Result<(), web_app::log::Error> {
        let mut entries = self.read_entries().unwrap_or_default();
        web_app::log::push_entry(&mut entries, entry);
        save(&self.store, KEY_LOG, &entries)
            .map_err(|err| web_app::log::Error::Unknown(err.to_string()))
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
struct Template {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    name: String,
    exercises: Vec<String>,
}

impl From<&domain::Template> for Template {
    fn from(value: &domain::Template) -> Self {
        Self {
            id: Some(*value.id),
            name: value.name.to_string(),
            exercises: value.exercises.iter().map(ToString::to_string).collect(),
        }
    }
}

impl TryFrom<Template> for domain::Template {
    type Error = TemplateError;

    fn try_from(value: Template) -> Result<Self, Self::Error> {
        let exercises = value
            .exercises
            .iter()
            .filter_map(|name| domain::Name::new(name).ok())
            .collect::<Vec<_>>();
        if exercises.is_empty() {
            return Err(domain::TemplateError::NoExercises.into());
        }
        Ok(Self {
            id: value.id.ok_or(TemplateError::MissingID)?.into(),
            name: domain::Name::new(&value.name).map_err(domain::TemplateError::from)?,
            exercises,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TemplateError {
    #[error("missing id")]
    MissingID,
    #[error(transparent)]
    Invalid(#[from] domain::TemplateError),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
struct HistoryEntry {
    date: String,
    workout: String,
    exercises: Vec<ExerciseLog>,
}

impl From<&domain::HistoryEntry> for HistoryEntry {
    fn from(value: &domain::HistoryEntry) -> Self {
        Self {
            date: value.date.clone(),
            workout: value.workout.clone(),
            exercises: value.exercises.iter().map(ExerciseLog::from).collect(),
        }
    }
}

impl From<HistoryEntry> for domain::HistoryEntry {
    fn from(value: HistoryEntry) -> Self {
        Self {
            date: value.date,
            workout: value.workout,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::ExerciseLog::from)
                .collect(),
        }
    }
}

/// Exercise log as written by the current or by the legacy format.
///
/// The legacy format recorded a single set count together with one value for
/// reps, weight and rest, all as strings.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
enum ExerciseLog {
    Sets {
        name: String,
        sets: Vec<Set>,
    },
    Legacy {
        name: String,
        #[serde(default)]
        sets: String,
        #[serde(default)]
        reps: String,
        #[serde(default)]
        weight: String,
        #[serde(default)]
        rest: String,
    },
}

impl From<&domain::ExerciseLog> for ExerciseLog {
    fn from(value: &domain::ExerciseLog) -> Self {
        Self::Sets {
            name: value.name.clone(),
            sets: value.sets.iter().map(Set::from).collect(),
        }
    }
}

impl From<ExerciseLog> for domain::ExerciseLog {
    fn from(value: ExerciseLog) -> Self {
        match value {
            ExerciseLog::Sets { name, sets } => Self {
                name,
                sets: sets.into_iter().map(domain::Set::from).collect(),
            },
            ExerciseLog::Legacy {
                name,
                sets,
                reps,
                weight,
                rest,
            } => {
                let count = sets
                    .trim()
                    .parse::<usize>()
                    .unwrap_or(1)
                    .clamp(1, MAX_LEGACY_SETS);
                let set = domain::Set {
                    reps,
                    weight,
                    rest: domain::Rest::new(rest.trim().parse().unwrap_or(0)),
                };
                Self {
                    name,
                    sets: vec![set; count],
                }
            }
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
struct Set {
    reps: String,
    weight: String,
    rest: u32,
}

impl From<&domain::Set> for Set {
    fn from(value: &domain::Set) -> Self {
        Self {
            reps: value.reps.clone(),
            weight: value.weight.clone(),
            rest: value.rest.into(),
        }
    }
}

impl From<Set> for domain::Set {
    fn from(value: Set) -> Self {
        Self {
            reps: value.reps,
            weight: value.weight,
            rest: domain::Rest::new(value.rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use liftlog_domain::{HistoryRepository, TemplateRepository};
    use liftlog_web_app::{SettingsRepository, log::Repository};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::{
        MemoryStore,
        tests::data::{HISTORY_ENTRIES, HISTORY_ENTRY, TEMPLATE, TEMPLATES},
    };

    use super::*;

    fn storage(items: &[(&str, serde_json::Value)]) -> JsonStorage<MemoryStore> {
        let store = MemoryStore::default();
        for (key, value) in items {
            store.set_item(key, &value.to_string()).unwrap();
        }
        JsonStorage::new(store)
    }

    fn stored(storage: &JsonStorage<MemoryStore>, key: &str) -> serde_json::Value {
        serde_json::from_str(&storage.store.get_item(key).unwrap().unwrap()).unwrap()
    }

    #[test]
    fn test_template_try_from() {
        assert_eq!(
            domain::Template::try_from(Template::from(&*TEMPLATE)),
            Ok(TEMPLATE.clone())
        );
    }

    #[rstest]
    #[case(json!({"id": Uuid::nil(), "name": " ", "exercises": ["A"]}))]
    #[case(json!({"id": Uuid::nil(), "name": "A", "exercises": []}))]
    #[case(json!({"id": Uuid::nil(), "name": "A", "exercises": ["", " "]}))]
    #[case(json!({"name": "A", "exercises": ["A"]}))]
    fn test_template_try_from_invalid(#[case] value: serde_json::Value) {
        let template: Template = serde_json::from_value(value).unwrap();
        assert!(domain::Template::try_from(template).is_err());
    }

    #[test]
    fn test_read_templates_empty() {
        assert_eq!(storage(&[]).read_templates().unwrap(), vec![]);
    }

    #[test]
    fn test_read_templates_corrupt() {
        let storage = storage(&[(KEY_TEMPLATES, json!("{"))]);
        assert_eq!(storage.read_templates().unwrap(), vec![]);
    }

    #[test]
    fn test_read_templates_assigns_missing_ids() {
        let storage = storage(&[(
            KEY_TEMPLATES,
            json!([
                {"name": "Push Day", "exercises": ["Bench Press", "Dips"]},
                {"id": *TEMPLATE.id, "name": "Legs", "exercises": ["Squat"]},
            ]),
        )]);

        let templates = storage.read_templates().unwrap();

        assert_eq!(templates.len(), 2);
        assert!(!templates[0].id.is_nil());
        assert_eq!(templates[0].name.as_ref(), "Push Day");
        assert_eq!(templates[1].id, TEMPLATE.id);
        assert_eq!(storage.read_templates().unwrap(), templates);
        assert_eq!(
            stored(&storage, KEY_TEMPLATES)[0]["id"],
            json!(*templates[0].id)
        );
    }

    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get_item(key)
        }

        fn set_item(&self, _: &str, _: &str) -> Result<(), StoreError> {
            Err(StoreError::Js("QuotaExceededError".to_string()))
        }
    }

    #[test]
    fn test_read_templates_keeps_ids_stable_if_not_writable() {
        let store = MemoryStore::default();
        let templates = json!([{"name": "Arms", "exercises": ["Curl"]}]).to_string();
        store.set_item(KEY_TEMPLATES, &templates).unwrap();
        let storage = JsonStorage::new(ReadOnlyStore(store.clone()));

        let first = storage.read_templates().unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(first[0].name.as_ref(), "Arms");
        assert!(!first[0].id.is_nil());
        assert_eq!(storage.read_templates().unwrap(), first);
        assert_eq!(store.get_item(KEY_TEMPLATES).unwrap(), Some(templates));
    }

    #[test]
    fn test_read_templates_skips_invalid() {
        let storage = storage(&[(
            KEY_TEMPLATES,
            json!([
                {"id": Uuid::nil(), "name": "", "exercises": ["Squat"]},
                Template::from(&*TEMPLATE),
            ]),
        )]);
        assert_eq!(storage.read_templates().unwrap(), vec![TEMPLATE.clone()]);
    }

    #[test]
    fn test_create_template_appends() {
        let storage = storage(&[(
            KEY_TEMPLATES,
            json!(TEMPLATES.iter().map(Template::from).collect::<Vec<_>>()),
        )]);

        let template = storage
            .create_template(
                domain::Name::new("Pull Day").unwrap(),
                vec![domain::Name::new("Rows").unwrap()],
            )
            .unwrap();

        let mut expected = TEMPLATES.clone();
        expected.push(template.clone());
        assert_eq!(storage.read_templates().unwrap(), expected);
        assert_eq!(
            stored(&storage, KEY_TEMPLATES)[2],
            json!({"id": *template.id, "name": "Pull Day", "exercises": ["Rows"]})
        );
    }

    #[test]
    fn test_history_entry_serialization() {
        assert_eq!(
            json!(HistoryEntry::from(&*HISTORY_ENTRY)),
            json!({
                "date": "10/18/2026",
                "workout": "Push Day",
                "exercises": [
                    {
                        "name": "Bench Press",
                        "sets": [
                            {"reps": "10", "weight": "60", "rest": 90},
                            {"reps": "8", "weight": "62.5", "rest": 120},
                        ],
                    },
                    {"name": "Dips", "sets": []},
                ],
            })
        );
    }

    #[rstest]
    #[case(json!({"name": "Squat", "sets": "3", "reps": "5", "weight": "100", "rest": "180"}), 3, 180)]
    #[case(json!({"name": "Squat", "sets": "", "reps": "5", "weight": "100", "rest": ""}), 1, 0)]
    #[case(json!({"name": "Squat", "sets": "0", "reps": "5", "weight": "100", "rest": "x"}), 1, 0)]
    #[case(json!({"name": "Squat", "sets": "1000", "reps": "5", "weight": "100", "rest": "60"}), 100, 60)]
    #[case(json!({"name": "Squat", "reps": "5", "weight": "100"}), 1, 0)]
    fn test_exercise_log_legacy(
        #[case] value: serde_json::Value,
        #[case] count: usize,
        #[case] rest: u32,
    ) {
        let log = domain::ExerciseLog::from(serde_json::from_value::<ExerciseLog>(value).unwrap());
        assert_eq!(
            log,
            domain::ExerciseLog {
                name: "Squat".to_string(),
                sets: vec![
                    domain::Set {
                        reps: "5".to_string(),
                        weight: "100".to_string(),
                        rest: domain::Rest::new(rest),
                    };
                    count
                ],
            }
        );
    }

    #[test]
    fn test_read_history_mixed_formats() {
        let storage = storage(&[(
            KEY_HISTORY,
            json!([
                HistoryEntry::from(&*HISTORY_ENTRY),
                {
                    "date": "10/1/2026",
                    "workout": "Leg Day",
                    "exercises": [
                        {"name": "Squat", "sets": "2", "reps": "5", "weight": "100", "rest": "120"},
                    ],
                },
            ]),
        )]);

        let history = storage.read_history().unwrap();

        assert_eq!(history[0], *HISTORY_ENTRY);
        assert_eq!(
            history[1].exercises[0].set_lines(),
            vec![
                "Set 1: 5 reps, 100 kg, Rest: 2m 0s",
                "Set 2: 5 reps, 100 kg, Rest: 2m 0s",
            ]
        );
    }

    #[test]
    fn test_read_history_skips_invalid_entries() {
        let invalid = json!({
            "date": "10/2/2026",
            "workout": "Arms",
            "exercises": [{"name": "Curl", "sets": [{"reps": "8", "weight": "", "rest": 90.5}]}],
        });
        let storage = storage(&[(
            KEY_HISTORY,
            json!([invalid.clone(), HistoryEntry::from(&*HISTORY_ENTRY)]),
        )]);

        assert_eq!(storage.read_history().unwrap(), vec![HISTORY_ENTRY.clone()]);

        storage.create_history_entry(HISTORY_ENTRY.clone()).unwrap();

        assert_eq!(
            storage.read_history().unwrap(),
            vec![HISTORY_ENTRY.clone(), HISTORY_ENTRY.clone()]
        );
        assert_eq!(stored(&storage, KEY_HISTORY)[1], invalid);
    }

    #[test]
    fn test_create_history_entry_prepends() {
        let storage = storage(&[]);

        for entry in HISTORY_ENTRIES.iter().rev() {
            storage.create_history_entry(entry.clone()).unwrap();
        }

        assert_eq!(storage.read_history().unwrap(), *HISTORY_ENTRIES);
    }

    #[test]
    fn test_read_settings_default() {
        assert_eq!(
            storage(&[]).read_settings(),
            Ok(web_app::Settings::default())
        );
    }

    #[test]
    fn test_write_settings() {
        let storage = storage(&[]);
        let settings = web_app::Settings {
            date_format: web_app::DateFormat::Iso,
            theme: web_app::Theme::Dark,
        };

        storage.write_settings(settings).unwrap();

        assert_eq!(storage.read_settings(), Ok(settings));
        assert_eq!(
            stored(&storage, KEY_SETTINGS),
            json!({"date_format": "Iso", "theme": "Dark"})
        );
    }

    #[test]
    fn test_read_settings_partial() {
        let storage = storage(&[(KEY_SETTINGS, json!({"theme": "Light"}))]);
        assert_eq!(
            storage.read_settings(),
            Ok(web_app::Settings {
                theme: web_app::Theme::Light,
                ..web_app::Settings::default()
            })
        );
    }

    #[test]
    fn test_write_entry_recovers_from_corrupt_log() {
        let storage = storage(&[(KEY_LOG, json!("corrupt"))]);
        let entry = web_app::log::Entry {
            time: "Oct 18 10:00:00".to_string(),
            level: log::Level::Warn,
            target: "liftlog".to_string(),
            message: "storage unavailable".to_string(),
        };

        assert!(storage.read_entries().is_err());
        storage.write_entry(entry.clone()).unwrap();

        assert_eq!(storage.read_entries(), Ok(VecDeque::from([entry])));
    }
}
