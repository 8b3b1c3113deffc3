//! The nook playback state machine.
//!
//! [`Nook`] has exclusive ownership of the one active playback session.
//! States are Stopped and Playing(hour, weather); the asset is re-resolved
//! on hour rollover and weather change, and only swapped when the resolved
//! source actually differs so volume-only changes never glitch playback.

use thiserror::Error;

use dayroom_core::types::WeatherMode;

use crate::assets::{format_hour_display, AssetTable};
use crate::prefs::{NookPrefs, PrefStore};

/// Playback could not start (autoplay policy, device denial, ...).
///
/// Recoverable: the play intent is kept so a later user gesture retries.
#[derive(Debug, Error)]
#[error("playback failed to start: {0}")]
pub struct PlaybackError(pub String);

/// The single shared audio output.
pub trait AudioSink {
    /// Replace the loaded source. Implicitly stops any current playback.
    fn load(&mut self, src: &str);
    /// Begin or resume playback of the loaded source.
    fn play(&mut self) -> Result<(), PlaybackError>;
    /// Pause playback, keeping the loaded source.
    fn pause(&mut self);
    /// Apply a volume in `[0.0, 1.0]` to the output.
    fn set_volume(&mut self, volume: f32);
}

/// Ambient audio scheduler with persisted preference state.
pub struct Nook<S, P> {
    sink: S,
    store: P,
    table: AssetTable,
    prefs: NookPrefs,
    hour: u8,
    loaded: Option<String>,
    sink_playing: bool,
}

impl<S: AudioSink, P: PrefStore> Nook<S, P> {
    /// Construct from persisted preferences and start playback if the saved
    /// intent was Playing. A blocked autoplay here is swallowed like any
    /// other start failure.
    pub fn new(mut sink: S, store: P, table: AssetTable, initial_hour: u8) -> Self {
        let prefs = store.load();
        sink.set_volume(prefs.volume);
        let mut nook = Self {
            sink,
            store,
            table,
            prefs,
            hour: initial_hour % 24,
            loaded: None,
            sink_playing: false,
        };
        nook.sync();
        nook
    }

    pub fn is_playing(&self) -> bool {
        self.prefs.playing
    }

    pub fn volume(&self) -> f32 {
        self.prefs.volume
    }

    pub fn weather(&self) -> WeatherMode {
        self.prefs.weather
    }

    pub fn current_hour(&self) -> u8 {
        self.hour
    }

    pub fn current_hour_display(&self) -> String {
        format_hour_display(self.hour)
    }

    /// Flip the play/pause intent and persist it.
    pub fn toggle(&mut self) {
        self.prefs.playing = !self.prefs.playing;
        self.store.save(&self.prefs);
        self.sync();
    }

    /// Apply a volume immediately without touching the play/pause state.
    pub fn set_volume(&mut self, volume: f32) {
        self.prefs.volume = volume;
        self.prefs = self.prefs.sanitized();
        self.store.save(&self.prefs);
        self.sink.set_volume(self.prefs.volume);
    }

    /// Change the weather mode; re-resolves the asset only while playing.
    pub fn set_weather(&mut self, weather: WeatherMode) {
        self.prefs.weather = weather;
        self.store.save(&self.prefs);
        if self.prefs.playing {
            self.sync();
        }
    }

    /// Observe the wall-clock hour. On rollover while playing, hot-swap to
    /// the new hour's asset without changing the play intent.
    pub fn tick(&mut self, hour: u8) {
        let hour = hour % 24;
        if hour == self.hour {
            return;
        }
        self.hour = hour;
        if self.prefs.playing {
            self.sync();
        }
    }

    /// Reconcile the sink with the current intent and (hour, weather) pair.
    ///
    /// Only the latest resolved pair matters; there is no queue of pending
    /// transitions.
    fn sync(&mut self) {
        if !self.prefs.playing {
            self.sink.pause();
            self.sink_playing = false;
            return;
        }

        let src = self.table.resolve(self.prefs.weather, self.hour).to_string();
        if self.loaded.as_deref() != Some(src.as_str()) {
            self.sink.load(&src);
            self.loaded = Some(src);
            self.sink_playing = false;
        }
        if !self.sink_playing {
            match self.sink.play() {
                Ok(()) => self.sink_playing = true,
                Err(e) => {
                    // Intent stays Playing; a later user gesture retries.
                    tracing::debug!(error = %e, "Playback start blocked");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum SinkEvent {
        Load(String),
        Play,
        Pause,
        Volume(String),
    }

    #[derive(Default)]
    struct SinkState {
        events: Vec<SinkEvent>,
    }

    #[derive(Clone, Default)]
    struct MockSink {
        state: Arc<Mutex<SinkState>>,
        fail_play: Arc<AtomicBool>,
    }

    impl MockSink {
        fn events(&self) -> Vec<SinkEvent> {
            self.state.lock().unwrap().events.clone()
        }

        fn clear(&self) {
            self.state.lock().unwrap().events.clear();
        }
    }

    impl AudioSink for MockSink {
        fn load(&mut self, src: &str) {
            self.state
                .lock()
                .unwrap()
                .events
                .push(SinkEvent::Load(src.to_string()));
        }

        fn play(&mut self) -> Result<(), PlaybackError> {
            if self.fail_play.load(Ordering::SeqCst) {
                return Err(PlaybackError("autoplay blocked".into()));
            }
            self.state.lock().unwrap().events.push(SinkEvent::Play);
            Ok(())
        }

        fn pause(&mut self) {
            self.state.lock().unwrap().events.push(SinkEvent::Pause);
        }

        fn set_volume(&mut self, volume: f32) {
            self.state
                .lock()
                .unwrap()
                .events
                .push(SinkEvent::Volume(format!("{volume:.2}")));
        }
    }

    #[derive(Clone, Default)]
    struct MockStore {
        prefs: Arc<Mutex<Option<NookPrefs>>>,
    }

    impl PrefStore for MockStore {
        fn load(&self) -> NookPrefs {
            self.prefs.lock().unwrap().unwrap_or_default()
        }

        fn save(&self, prefs: &NookPrefs) {
            *self.prefs.lock().unwrap() = Some(*prefs);
        }
    }

    fn nook_at(hour: u8) -> (Nook<MockSink, MockStore>, MockSink, MockStore) {
        let sink = MockSink::default();
        let store = MockStore::default();
        let nook = Nook::new(sink.clone(), store.clone(), AssetTable::default(), hour);
        (nook, sink, store)
    }

    #[test]
    fn cold_start_stopped_touches_nothing_but_volume() {
        let (nook, sink, _store) = nook_at(9);
        assert!(!nook.is_playing());
        assert_eq!(
            sink.events(),
            vec![
                SinkEvent::Volume("0.50".into()),
                // Stopped intent reconciles to a paused sink.
                SinkEvent::Pause,
            ]
        );
    }

    #[test]
    fn toggle_resolves_and_plays_current_hour_asset() {
        let (mut nook, sink, store) = nook_at(9);
        sink.clear();

        nook.toggle();
        assert!(nook.is_playing());
        assert_eq!(
            sink.events(),
            vec![
                SinkEvent::Load("assets/ac/normal/9.mp3".into()),
                SinkEvent::Play,
            ]
        );
        // Intent persisted.
        assert!(store.load().playing);
    }

    #[test]
    fn persisted_playing_intent_resumes_on_cold_start() {
        let store = MockStore::default();
        store.save(&NookPrefs {
            playing: true,
            volume: 0.7,
            weather: WeatherMode::Rain,
        });
        let sink = MockSink::default();
        let nook = Nook::new(sink.clone(), store, AssetTable::default(), 9);
        assert!(nook.is_playing());
        assert!(sink
            .events()
            .contains(&SinkEvent::Load("assets/ac/rain/9.mp3".into())));
        assert!(sink.events().contains(&SinkEvent::Play));
    }

    #[test]
    fn weather_change_while_playing_swaps_without_pause() {
        let store = MockStore::default();
        store.save(&NookPrefs {
            playing: true,
            volume: 0.5,
            weather: WeatherMode::Rain,
        });
        let sink = MockSink::default();
        let mut nook = Nook::new(sink.clone(), store, AssetTable::default(), 9);
        sink.clear();

        nook.set_weather(WeatherMode::Normal);
        assert_eq!(
            sink.events(),
            vec![
                SinkEvent::Load("assets/ac/normal/9.mp3".into()),
                SinkEvent::Play,
            ]
        );
        assert!(nook.is_playing());
    }

    #[test]
    fn unchanged_weather_does_not_double_trigger() {
        let store = MockStore::default();
        store.save(&NookPrefs {
            playing: true,
            volume: 0.5,
            weather: WeatherMode::Rain,
        });
        let sink = MockSink::default();
        let mut nook = Nook::new(sink.clone(), store, AssetTable::default(), 9);
        sink.clear();

        nook.set_weather(WeatherMode::Rain);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn weather_change_while_stopped_only_updates_preference() {
        let (mut nook, sink, store) = nook_at(9);
        sink.clear();

        nook.set_weather(WeatherMode::Rain);
        assert!(sink.events().is_empty());
        assert_eq!(store.load().weather, WeatherMode::Rain);
        assert_eq!(nook.weather(), WeatherMode::Rain);
    }

    #[test]
    fn hour_rollover_hot_swaps_while_playing() {
        let (mut nook, sink, _store) = nook_at(9);
        nook.toggle();
        sink.clear();

        nook.tick(10);
        assert_eq!(
            sink.events(),
            vec![
                SinkEvent::Load("assets/ac/normal/10.mp3".into()),
                SinkEvent::Play,
            ]
        );
        assert_eq!(nook.current_hour(), 10);
    }

    #[test]
    fn tick_with_unchanged_hour_is_a_no_op() {
        let (mut nook, sink, _store) = nook_at(9);
        nook.toggle();
        sink.clear();

        nook.tick(9);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn hour_rollover_while_stopped_tracks_hour_silently() {
        let (mut nook, sink, _store) = nook_at(9);
        sink.clear();

        nook.tick(10);
        assert!(sink.events().is_empty());
        assert_eq!(nook.current_hour(), 10);
        assert_eq!(nook.current_hour_display(), "10am");
    }

    #[test]
    fn volume_applies_immediately_without_touching_playback() {
        let (mut nook, sink, store) = nook_at(9);
        nook.toggle();
        sink.clear();

        nook.set_volume(0.25);
        assert_eq!(sink.events(), vec![SinkEvent::Volume("0.25".into())]);
        assert!(nook.is_playing());
        assert_eq!(store.load().volume, 0.25);
    }

    #[test]
    fn volume_is_clamped() {
        let (mut nook, _sink, _store) = nook_at(9);
        nook.set_volume(3.0);
        assert_eq!(nook.volume(), 1.0);
        nook.set_volume(-1.0);
        assert_eq!(nook.volume(), 0.0);
    }

    #[test]
    fn blocked_playback_keeps_intent_and_retries_on_next_gesture() {
        let (mut nook, sink, _store) = nook_at(9);
        sink.fail_play.store(true, Ordering::SeqCst);
        sink.clear();

        nook.toggle();
        // Intent is Playing even though the sink never started.
        assert!(nook.is_playing());
        assert_eq!(
            sink.events(),
            vec![SinkEvent::Load("assets/ac/normal/9.mp3".into())]
        );

        // A later user gesture retries successfully.
        sink.fail_play.store(false, Ordering::SeqCst);
        sink.clear();
        nook.set_weather(WeatherMode::Rain);
        assert_eq!(
            sink.events(),
            vec![
                SinkEvent::Load("assets/ac/rain/9.mp3".into()),
                SinkEvent::Play,
            ]
        );
    }
}
