//! The nook: hour-scheduled ambient audio with persisted preferences.
//!
//! Each hour of the day has one audio asset per weather mode (48 assets
//! total). The [`player::Nook`] state machine owns the single playback
//! session, hot-swapping the asset on hour rollover or weather change, and
//! [`service::NookService`] drives it from a once-per-second wall-clock
//! check plus a command channel for user intents.
//!
//! Playback and persistence are behind small traits so the scheduler is
//! constructed once with its dependencies injected and can be tested
//! without real audio output.

pub mod assets;
pub mod player;
pub mod prefs;
pub mod service;

pub use assets::{format_hour_display, AssetTable};
pub use player::{AudioSink, Nook, PlaybackError};
pub use prefs::{FilePrefStore, NookPrefs, PrefStore};
pub use service::{NookCommand, NookHandle, NookService};
