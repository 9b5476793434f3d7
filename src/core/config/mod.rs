//=========================================================================
// Config Store
//=========================================================================
//
// Ordered, JSON-backed list of named settings.
//
// Document layout (`cfg.json`):
// ```text
// [
//   { "name": "screen_size",
//     "available_choices": ["800x600", "1280x720"],
//     "current_choice": 0 }
// ]
// ```
//
// Lookup is a linear scan by name; the first match wins and duplicate
// names are not rejected. The store is owned by the Player and lent to
// scenes by `&mut` for the duration of a handler call.
//
//=========================================================================

//=== Module Declarations =================================================

mod resolution;

//=== External Dependencies ===============================================

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

//=== Public API ==========================================================

pub use resolution::Resolution;

/// File name used when no config path is supplied.
pub const DEFAULT_CONFIG_PATH: &str = "cfg.json";

/// Name of the setting that drives display creation.
pub const SCREEN_SIZE: &str = "screen_size";

//=== ConfigError =========================================================

/// Failures raised while reading, querying, or writing the settings document.
///
/// `Load`, `Malformed` and `InvalidSetting` are load failures, `Save` is a
/// write failure, `NotFound` is a lookup failure. None of them are retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The backing file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not an array of setting objects.
    #[error("malformed config {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A setting parsed but violates the choice-index invariant.
    #[error("invalid setting `{name}` in {}: {reason}", .path.display())]
    InvalidSetting {
        path: PathBuf,
        name: String,
        reason: String,
    },

    /// The backing file could not be written.
    #[error("failed to write config {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No setting carries the requested name.
    #[error("setting `{0}` not found")]
    NotFound(String),

    /// A `screen_size` choice is not of the form `<width>x<height>`.
    #[error("invalid resolution `{0}`, expected <width>x<height>")]
    InvalidResolution(String),
}

//=== Setting =============================================================

/// One configurable option: a fixed ordered set of choices and the index
/// of the current one.
///
/// Invariant: `current_choice < available_choices.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    name: String,
    available_choices: Vec<String>,
    current_choice: usize,

    // Keys we do not interpret are written back untouched.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Setting {
    /// Creates a setting, rejecting an empty choice list or an
    /// out-of-range index.
    pub fn new(
        name: impl Into<String>,
        available_choices: Vec<String>,
        current_choice: usize,
    ) -> Result<Self, String> {
        let setting = Self {
            name: name.into(),
            available_choices,
            current_choice,
            extra: Map::new(),
        };
        setting.validate()?;
        Ok(setting)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn available_choices(&self) -> &[String] {
        &self.available_choices
    }

    pub fn current_choice(&self) -> usize {
        self.current_choice
    }

    /// The currently selected choice string.
    pub fn current(&self) -> &str {
        &self.available_choices[self.current_choice]
    }

    /// Steps to the previous choice, wrapping from the first to the last.
    pub fn select_previous(&mut self) {
        self.current_choice = if self.current_choice > 0 {
            self.current_choice - 1
        } else {
            self.available_choices.len() - 1
        };
    }

    /// Steps to the next choice, wrapping from the last to the first.
    pub fn select_next(&mut self) {
        self.current_choice = if self.current_choice + 1 < self.available_choices.len() {
            self.current_choice + 1
        } else {
            0
        };
    }

    fn validate(&self) -> Result<(), String> {
        if self.available_choices.is_empty() {
            return Err("no available choices".to_string());
        }
        if self.current_choice >= self.available_choices.len() {
            return Err(format!(
                "current_choice {} out of range for {} choices",
                self.current_choice,
                self.available_choices.len()
            ));
        }
        Ok(())
    }
}

//=== ConfigStore =========================================================

/// Ordered settings document together with the path it is saved to.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigStore {
    path: PathBuf,
    settings: Vec<Setting>,
}

impl ConfigStore {
    //--- Construction -----------------------------------------------------

    /// Reads and parses the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Load {
            path: path.clone(),
            source,
        })?;

        let store = Self::from_json(path, &text)?;
        debug!(
            "Loaded {} setting(s) from {}",
            store.settings.len(),
            store.path.display()
        );
        Ok(store)
    }

    /// Parses a document held in memory; `path` becomes the save target.
    pub fn from_json(path: impl Into<PathBuf>, text: &str) -> Result<Self, ConfigError> {
        let path = path.into();
        let settings: Vec<Setting> = serde_json::from_str(text)
            .map_err(|source| ConfigError::Malformed {
                path: path.clone(),
                source,
            })?;

        for setting in &settings {
            setting.validate().map_err(|reason| ConfigError::InvalidSetting {
                path: path.clone(),
                name: setting.name.clone(),
                reason,
            })?;
        }

        Ok(Self { path, settings })
    }

    /// Builds a store from settings already in memory.
    pub fn with_settings(path: impl Into<PathBuf>, settings: Vec<Setting>) -> Self {
        Self {
            path: path.into(),
            settings,
        }
    }

    //--- Persistence ------------------------------------------------------

    /// Overwrites the backing file with the current document.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&self.path)
    }

    /// Writes the current document to `path`. The write is not atomic.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let save_error = |source: io::Error| ConfigError::Save {
            path: path.to_path_buf(),
            source,
        };

        let bytes = serde_json::to_vec(&self.settings).map_err(|e| save_error(e.into()))?;
        fs::write(path, bytes).map_err(save_error)?;

        debug!("Saved {} setting(s) to {}", self.settings.len(), path.display());
        Ok(())
    }

    //--- Queries ----------------------------------------------------------

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the first setting named `name`.
    pub fn get(&self, name: &str) -> Result<&Setting, ConfigError> {
        self.settings
            .iter()
            .find(|setting| setting.name == name)
            .ok_or_else(|| ConfigError::NotFound(name.to_string()))
    }

    /// Mutable variant of [`ConfigStore::get`].
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Setting, ConfigError> {
        self.settings
            .iter_mut()
            .find(|setting| setting.name == name)
            .ok_or_else(|| ConfigError::NotFound(name.to_string()))
    }

    /// Parses the current `screen_size` choice.
    pub fn resolution(&self) -> Result<Resolution, ConfigError> {
        self.get(SCREEN_SIZE)?.current().parse()
    }

    pub fn settings(&self) -> &[Setting] {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut [Setting] {
        &mut self.settings
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

impl Default for ConfigStore {
    /// Empty document backed by `cfg.json`.
    fn default() -> Self {
        Self::with_settings(DEFAULT_CONFIG_PATH, Vec::new())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"[
        {"name": "screen_size", "available_choices": ["800x600", "1280x720"], "current_choice": 0},
        {"name": "difficulty", "available_choices": ["easy", "hard"], "current_choice": 1}
    ]"#;

    fn choices(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn write_config(dir: &TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("cfg.json");
        fs::write(&path, text).unwrap();
        path
    }

    //=====================================================================
    // Loading
    //=====================================================================

    #[test]
    fn load_reads_settings_in_order() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::load(write_config(&dir, SAMPLE)).unwrap();

        let names: Vec<_> = store.settings().iter().map(Setting::name).collect();
        assert_eq!(names, ["screen_size", "difficulty"]);
        assert_eq!(store.get("difficulty").unwrap().current(), "hard");
    }

    #[test]
    fn load_missing_file_is_load_error() {
        let dir = TempDir::new().unwrap();
        let err = ConfigStore::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Load { .. }), "got {err:?}");
    }

    #[test]
    fn load_rejects_non_array_document() {
        let err = ConfigStore::from_json("cfg.json", r#"{"name": "screen_size"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }), "got {err:?}");
    }

    #[test]
    fn load_rejects_missing_fields() {
        let err = ConfigStore::from_json("cfg.json", r#"[{"name": "screen_size"}]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }), "got {err:?}");
    }

    #[test]
    fn load_rejects_out_of_range_choice() {
        let text = r#"[{"name": "screen_size", "available_choices": ["800x600"], "current_choice": 3}]"#;
        let err = ConfigStore::from_json("cfg.json", text).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidSetting { ref name, .. } if name == "screen_size"),
            "got {err:?}"
        );
    }

    #[test]
    fn load_rejects_empty_choice_list() {
        let text = r#"[{"name": "volume", "available_choices": [], "current_choice": 0}]"#;
        let err = ConfigStore::from_json("cfg.json", text).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSetting { .. }), "got {err:?}");
    }

    #[test]
    fn load_accepts_empty_document() {
        let store = ConfigStore::from_json("cfg.json", "[]").unwrap();
        assert!(store.is_empty());
    }

    //=====================================================================
    // Lookup
    //=====================================================================

    #[test]
    fn get_unknown_name_is_not_found() {
        let store = ConfigStore::from_json("cfg.json", SAMPLE).unwrap();
        let err = store.get("volume").unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(ref name) if name == "volume"));
    }

    #[test]
    fn get_returns_first_of_duplicate_names() {
        let text = r#"[
            {"name": "screen_size", "available_choices": ["640x480"], "current_choice": 0},
            {"name": "screen_size", "available_choices": ["1920x1080"], "current_choice": 0}
        ]"#;
        let store = ConfigStore::from_json("cfg.json", text).unwrap();
        assert_eq!(store.get(SCREEN_SIZE).unwrap().current(), "640x480");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn default_store_is_empty_and_has_no_resolution() {
        let store = ConfigStore::default();
        assert!(store.is_empty());
        assert_eq!(store.path(), Path::new(DEFAULT_CONFIG_PATH));
        assert!(matches!(store.resolution(), Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn resolution_follows_current_choice() {
        let mut store = ConfigStore::from_json("cfg.json", SAMPLE).unwrap();
        assert_eq!(store.resolution().unwrap(), Resolution::new(800, 600));

        store.get_mut(SCREEN_SIZE).unwrap().select_next();
        assert_eq!(store.resolution().unwrap(), Resolution::new(1280, 720));
    }

    //=====================================================================
    // Cyclic Selection
    //=====================================================================

    #[test]
    fn select_previous_wraps_first_to_last() {
        let mut setting = Setting::new("s", choices(&["a", "b", "c"]), 0).unwrap();
        setting.select_previous();
        assert_eq!(setting.current_choice(), 2);
    }

    #[test]
    fn select_next_wraps_last_to_first() {
        let mut setting = Setting::new("s", choices(&["a", "b", "c"]), 2).unwrap();
        setting.select_next();
        assert_eq!(setting.current_choice(), 0);
    }

    #[test]
    fn single_choice_setting_stays_put() {
        let mut setting = Setting::new("s", choices(&["only"]), 0).unwrap();
        setting.select_next();
        setting.select_previous();
        assert_eq!(setting.current(), "only");
    }

    #[test]
    fn setting_new_rejects_bad_index() {
        assert!(Setting::new("s", choices(&["a"]), 1).is_err());
        assert!(Setting::new("s", Vec::new(), 0).is_err());
    }

    proptest! {
        #[test]
        fn n_previous_steps_match_modular_arithmetic(len in 1usize..8, start in 0usize..8, n in 0usize..64) {
            let start = start % len;
            let items: Vec<String> = (0..len).map(|i| i.to_string()).collect();
            let mut setting = Setting::new("s", items, start).unwrap();

            for _ in 0..n {
                setting.select_previous();
            }

            let expected = (start as i64 - n as i64).rem_euclid(len as i64) as usize;
            prop_assert_eq!(setting.current_choice(), expected);
        }
    }

    //=====================================================================
    // Persistence
    //=====================================================================

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, SAMPLE);

        let original = ConfigStore::load(&path).unwrap();
        original.save().unwrap();
        let reloaded = ConfigStore::load(&path).unwrap();

        assert_eq!(original, reloaded);
    }

    #[test]
    fn save_persists_in_place_mutation() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, SAMPLE);

        let mut store = ConfigStore::load(&path).unwrap();
        store.get_mut(SCREEN_SIZE).unwrap().select_previous();
        store.save().unwrap();

        let reloaded = ConfigStore::load(&path).unwrap();
        assert_eq!(reloaded.get(SCREEN_SIZE).unwrap().current_choice(), 1);
    }

    #[test]
    fn save_preserves_unknown_fields() {
        let dir = TempDir::new().unwrap();
        let text = r#"[{"name": "screen_size", "available_choices": ["800x600"], "current_choice": 0, "label": "Window"}]"#;
        let path = write_config(&dir, text);

        ConfigStore::load(&path).unwrap().save().unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let expected: Value = serde_json::from_str(text).unwrap();
        assert_eq!(written, expected);
    }

    #[test]
    fn save_to_missing_directory_is_save_error() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::from_json("cfg.json", SAMPLE).unwrap();
        let err = store.save_to(dir.path().join("nope").join("cfg.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Save { .. }), "got {err:?}");
    }

    proptest! {
        #[test]
        fn any_valid_document_round_trips(
            raw in prop::collection::vec(
                ("[a-z_]{1,12}", prop::collection::vec("[0-9a-z]{1,6}", 1..5), 0usize..5),
                0..6,
            )
        ) {
            let settings: Vec<Setting> = raw
                .into_iter()
                .map(|(name, items, idx)| {
                    let idx = idx % items.len();
                    Setting::new(name, items, idx).unwrap()
                })
                .collect();

            let dir = TempDir::new().unwrap();
            let path = dir.path().join("cfg.json");
            let store = ConfigStore::with_settings(&path, settings);
            store.save().unwrap();

            prop_assert_eq!(ConfigStore::load(&path).unwrap(), store);
        }
    }
}
