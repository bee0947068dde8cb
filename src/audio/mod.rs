pub mod tone;

use anyhow::{anyhow, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{
    mpsc::{self, Sender},
    Arc, Mutex,
};
use std::thread;

use crate::settings::AlertSoundSettings;

pub use tone::AlertTone;

/// Urgency of an audible alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Danger,
    Warning,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::Danger => f.write_str("danger"),
            AlertKind::Warning => f.write_str("warning"),
        }
    }
}

enum AudioCommand {
    Alert { kind: AlertKind, volume: f32 },
    Shutdown,
}

/// Owns the output device on the audio thread. The stream is opened lazily
/// and reopened on the next alert if opening failed.
#[cfg(feature = "audio")]
#[derive(Default)]
struct AlertOutput {
    stream: Option<(rodio::OutputStream, rodio::OutputStreamHandle)>,
}

#[cfg(feature = "audio")]
impl AlertOutput {
    fn play(&mut self, kind: AlertKind, volume: f32) -> Result<()> {
        use anyhow::Context;

        if self.stream.is_none() {
            let opened = rodio::OutputStream::try_default()
                .context("failed to open default audio output")?;
            self.stream = Some(opened);
        }
        let (_, handle) = self
            .stream
            .as_ref()
            .ok_or_else(|| anyhow!("audio output missing after open"))?;

        let sink = rodio::Sink::try_new(handle).context("failed to create audio sink")?;
        sink.set_volume(volume);
        sink.append(AlertTone::new(kind));
        // Let the tone finish on its own; the stream outlives the sink.
        sink.detach();
        Ok(())
    }
}

#[cfg(not(feature = "audio"))]
#[derive(Default)]
struct AlertOutput;

#[cfg(not(feature = "audio"))]
impl AlertOutput {
    fn play(&mut self, kind: AlertKind, _volume: f32) -> Result<()> {
        Err(anyhow!(
            "built without the `audio` feature; {kind} alert has no output"
        ))
    }
}

/// Handle to the alert sound thread.
///
/// `play` only queues a command, so it never blocks the caller, and every
/// failure on the way to the speaker is logged and swallowed.
#[derive(Clone, Default)]
pub struct AudioAlertHandle {
    tx: Arc<Mutex<Option<Sender<AudioCommand>>>>,
}

impl AudioAlertHandle {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_thread(&self) -> Result<Sender<AudioCommand>> {
        let mut guard = self
            .tx
            .lock()
            .map_err(|_| anyhow!("audio handle lock poisoned"))?;
        if let Some(tx) = guard.as_ref() {
            return Ok(tx.clone());
        }

        let (tx, rx) = mpsc::channel::<AudioCommand>();

        // Output streams are not Send, so they live and die on this thread.
        thread::Builder::new()
            .name("alert-audio".to_string())
            .spawn(move || {
                let mut output = AlertOutput::default();
                while let Ok(command) = rx.recv() {
                    match command {
                        AudioCommand::Alert { kind, volume } => {
                            if let Err(err) = output.play(kind, volume) {
                                warn!("Dropping {kind} alert sound: {err:#}");
                            }
                        }
                        AudioCommand::Shutdown => break,
                    }
                }
                debug!("alert audio thread exiting");
            })?;

        *guard = Some(tx.clone());
        Ok(tx)
    }

    pub fn play(&self, kind: AlertKind, sound: &AlertSoundSettings) {
        if !sound.enabled {
            debug!("alert sound disabled; skipping {kind} alert");
            return;
        }

        let tx = match self.ensure_thread() {
            Ok(tx) => tx,
            Err(err) => {
                warn!("Audio alerts unavailable: {err:#}");
                return;
            }
        };

        let command = AudioCommand::Alert {
            kind,
            volume: sound.volume.clamp(0.0, 1.0),
        };
        if tx.send(command).is_err() {
            warn!("Audio thread has exited; dropping {kind} alert");
            // Forget the dead sender so the next alert respawns the thread.
            if let Ok(mut guard) = self.tx.lock() {
                *guard = None;
            }
        }
    }

    pub fn shutdown(&self) {
        if let Ok(mut guard) = self.tx.lock() {
            if let Some(tx) = guard.take() {
                let _ = tx.send(AudioCommand::Shutdown);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.tx.lock().map(|guard| guard.is_some()).unwrap_or(false)
    }
}
