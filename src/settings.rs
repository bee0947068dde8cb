use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::PathBuf,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::filter::DateRange;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSoundSettings {
    pub enabled: bool,
    /// Output gain, 0.0..=1.0.
    pub volume: f32,
}

impl Default for AlertSoundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSettings {
    pub alert_sound: AlertSoundSettings,
    /// Simulated round-trip before a casualty report is accepted.
    pub submission_delay_ms: u64,
    /// Date range the incident log opens with.
    pub default_date_range: DateRange,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            alert_sound: AlertSoundSettings::default(),
            submission_delay_ms: 500,
            default_date_range: DateRange::All,
        }
    }
}

impl DashboardSettings {
    fn normalized(mut self) -> Self {
        self.alert_sound.volume = self.alert_sound.volume.clamp(0.0, 1.0);
        self
    }
}

/// JSON-backed settings, read once at startup and rewritten on every update.
pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<DashboardSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str::<DashboardSettings>(&contents)
                .unwrap_or_else(|err| {
                    log::warn!(
                        "Ignoring unreadable settings at {}: {err}",
                        path.display()
                    );
                    DashboardSettings::default()
                })
                .normalized()
        } else {
            DashboardSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn get(&self) -> DashboardSettings {
        self.read().clone()
    }

    pub fn alert_sound(&self) -> AlertSoundSettings {
        self.read().alert_sound.clone()
    }

    pub fn update(&self, settings: DashboardSettings) -> Result<DashboardSettings> {
        let settings = settings.normalized();
        let mut guard = self.write();
        self.persist(&settings)?;
        *guard = settings.clone();
        Ok(settings)
    }

    pub fn update_alert_sound(&self, sound: AlertSoundSettings) -> Result<DashboardSettings> {
        let mut next = self.get();
        next.alert_sound = sound;
        self.update(next)
    }

    fn persist(&self, data: &DashboardSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory {}", parent.display())
            })?;
        }
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }

    // A panic while holding the lock cannot leave the settings half-written,
    // so a poisoned lock is still safe to read through.
    fn read(&self) -> RwLockReadGuard<'_, DashboardSettings> {
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, DashboardSettings> {
        self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
