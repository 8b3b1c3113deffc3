//! Background driver for the nook.
//!
//! One recurring timer observes the wall-clock hour; user intents arrive on
//! a command channel. A single loop owns the [`Nook`] state machine, so all
//! mutations are serialized and the loop's cancellation fully stops its
//! timer.

use std::time::Duration;

use chrono::Timelike;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use dayroom_core::types::WeatherMode;

use crate::player::{AudioSink, Nook};
use crate::prefs::PrefStore;

/// How often the wall-clock hour is checked.
const HOUR_CHECK_INTERVAL: Duration = Duration::from_secs(1);

/// User intents applied to the running nook.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NookCommand {
    Toggle,
    SetVolume(f32),
    SetWeather(WeatherMode),
}

/// Cloneable handle for sending commands to a running [`NookService`].
#[derive(Debug, Clone)]
pub struct NookHandle {
    tx: mpsc::Sender<NookCommand>,
}

impl NookHandle {
    pub async fn toggle(&self) {
        self.send(NookCommand::Toggle).await;
    }

    pub async fn set_volume(&self, volume: f32) {
        self.send(NookCommand::SetVolume(volume)).await;
    }

    pub async fn set_weather(&self, weather: WeatherMode) {
        self.send(NookCommand::SetWeather(weather)).await;
    }

    async fn send(&self, command: NookCommand) {
        if self.tx.send(command).await.is_err() {
            tracing::warn!(?command, "Nook service is not running; command dropped");
        }
    }
}

/// Owns the nook state machine and drives it until cancelled.
pub struct NookService<S, P> {
    nook: Nook<S, P>,
    commands: mpsc::Receiver<NookCommand>,
}

impl<S: AudioSink, P: PrefStore> NookService<S, P> {
    /// Wrap a constructed [`Nook`], returning the service and its handle.
    pub fn new(nook: Nook<S, P>) -> (Self, NookHandle) {
        let (tx, commands) = mpsc::channel(16);
        (Self { nook, commands }, NookHandle { tx })
    }

    /// Run until the token is cancelled or every handle is dropped.
    pub async fn run(mut self, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(HOUR_CHECK_INTERVAL);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Nook service cancelled");
                    break;
                }
                _ = interval.tick() => {
                    let hour = chrono::Local::now().hour() as u8;
                    self.nook.tick(hour);
                }
                command = self.commands.recv() => {
                    match command {
                        Some(command) => self.apply(command),
                        None => {
                            tracing::info!("All nook handles dropped; stopping");
                            break;
                        }
                    }
                }
            }
        }
    }

    fn apply(&mut self, command: NookCommand) {
        match command {
            NookCommand::Toggle => self.nook.toggle(),
            NookCommand::SetVolume(volume) => self.nook.set_volume(volume),
            NookCommand::SetWeather(weather) => self.nook.set_weather(weather),
        }
    }
}
