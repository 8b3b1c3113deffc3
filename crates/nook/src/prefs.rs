//! Persisted nook preferences.
//!
//! Play intent, volume, and weather mode survive restarts via a small JSON
//! file. Preference storage failures are never fatal to playback; they are
//! logged and the in-memory state carries on.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use dayroom_core::types::WeatherMode;

/// User preferences for the nook.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NookPrefs {
    pub playing: bool,
    pub volume: f32,
    pub weather: WeatherMode,
}

impl Default for NookPrefs {
    fn default() -> Self {
        Self {
            playing: false,
            volume: 0.5,
            weather: WeatherMode::Normal,
        }
    }
}

impl NookPrefs {
    /// Clamp the volume into `[0.0, 1.0]`, falling back to the default for
    /// non-finite values.
    pub fn sanitized(mut self) -> Self {
        if !self.volume.is_finite() {
            self.volume = Self::default().volume;
        }
        self.volume = self.volume.clamp(0.0, 1.0);
        self
    }
}

/// Key-value persistence for [`NookPrefs`].
pub trait PrefStore {
    /// Load persisted preferences, with defaults for absent/invalid fields.
    fn load(&self) -> NookPrefs;
    /// Persist the given preferences.
    fn save(&self, prefs: &NookPrefs);
}

/// Raw on-disk shape; every field optional so a partially written or
/// hand-edited file degrades per-field instead of wholesale.
#[derive(Debug, Deserialize)]
struct RawPrefs {
    playing: Option<bool>,
    volume: Option<f32>,
    weather: Option<String>,
}

/// JSON-file-backed preference store.
#[derive(Debug, Clone)]
pub struct FilePrefStore {
    path: PathBuf,
}

impl FilePrefStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PrefStore for FilePrefStore {
    fn load(&self) -> NookPrefs {
        let defaults = NookPrefs::default();
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(text) => match serde_json::from_str::<RawPrefs>(&text) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "Unreadable nook prefs, using defaults");
                    return defaults;
                }
            },
            // Missing file is the normal cold-start case.
            Err(_) => return defaults,
        };

        let weather = raw
            .weather
            .and_then(|w| w.parse::<WeatherMode>().ok())
            .unwrap_or(defaults.weather);

        NookPrefs {
            playing: raw.playing.unwrap_or(defaults.playing),
            volume: raw.volume.unwrap_or(defaults.volume),
            weather,
        }
        .sanitized()
    }

    fn save(&self, prefs: &NookPrefs) {
        let json = match serde_json::to_string_pretty(prefs) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize nook prefs");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist nook prefs");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FilePrefStore {
        FilePrefStore::new(dir.path().join("nook.json"))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = store_in(&dir).load();
        assert_eq!(prefs, NookPrefs::default());
        assert_eq!(prefs.volume, 0.5);
        assert_eq!(prefs.weather, WeatherMode::Normal);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let prefs = NookPrefs {
            playing: true,
            volume: 0.8,
            weather: WeatherMode::Rain,
        };
        store.save(&prefs);
        assert_eq!(store.load(), prefs);
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(dir.path().join("nook.json"), "not json").unwrap();
        assert_eq!(store.load(), NookPrefs::default());
    }

    #[test]
    fn invalid_fields_degrade_individually() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            dir.path().join("nook.json"),
            r#"{"playing": true, "volume": 7.5, "weather": "blizzard"}"#,
        )
        .unwrap();
        let prefs = store.load();
        assert!(prefs.playing);
        assert_eq!(prefs.volume, 1.0);
        assert_eq!(prefs.weather, WeatherMode::Normal);
    }
}
