pub mod analytics;
pub mod audio;
pub mod filter;
pub mod map;
pub mod models;
pub mod notify;
pub mod sample;
pub mod settings;
pub mod submission;
pub mod utils;
pub mod views;

#[cfg(feature = "desktop")]
mod commands;

use std::sync::{Arc, Mutex};

use audio::AudioAlertHandle;
use chrono::Utc;
use notify::Notifier;
use sample::DashboardData;
use settings::SettingsStore;
use submission::SubmissionHandle;

pub struct AppState {
    pub data: DashboardData,
    pub audio: AudioAlertHandle,
    pub settings: SettingsStore,
    pub notifier: Arc<dyn Notifier>,
    pending: Mutex<Option<SubmissionHandle>>,
}

impl AppState {
    /// State for a fresh session. The sample collections are stamped with the
    /// current time and never change afterwards.
    pub fn new(settings: SettingsStore, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            data: DashboardData::load(Utc::now()),
            audio: AudioAlertHandle::new(),
            settings,
            notifier,
            pending: Mutex::new(None),
        }
    }

    /// Tracks the latest submission so it can be cancelled. An earlier one
    /// that is still in flight keeps running.
    pub fn replace_pending(&self, handle: SubmissionHandle) {
        let mut guard = self.pending.lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(handle);
    }

    /// Cancels the tracked submission. Returns false when there was none.
    pub fn cancel_pending(&self) -> bool {
        let mut guard = self.pending.lock().unwrap_or_else(|p| p.into_inner());
        match guard.take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.audio.shutdown();
    }
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::*;
    use tauri::Manager;

    utils::logging::init();

    log::info!("Bracelet dashboard starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let app_data_dir = app
                    .path()
                    .app_data_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                std::fs::create_dir_all(&app_data_dir)?;

                let settings_path = app_data_dir.join("settings.json");
                let settings_store = SettingsStore::new(settings_path)?;
                let notifier = Arc::new(EventNotifier::new(app.handle().clone()));

                app.manage(AppState::new(settings_store, notifier));
                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            list_incidents,
            incident_summary,
            list_personnel,
            list_active_alerts,
            monitoring_summary,
            list_teams,
            list_team_loads,
            team_tasks,
            team_summary,
            analytics_report,
            map_markers,
            focus_marker,
            submit_casualty,
            cancel_submission,
            play_alert,
            get_settings,
            update_settings,
            set_alert_sound,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::LogNotifier;
    use crate::submission::{submit, CasualtyForm};
    use std::time::Duration;

    fn state(dir: &tempfile::TempDir) -> AppState {
        let settings = SettingsStore::new(dir.path().join("settings.json")).unwrap();
        AppState::new(settings, Arc::new(LogNotifier))
    }

    #[test]
    fn new_state_loads_sample_data() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(&dir);
        assert_eq!(state.data.incidents.len(), 6);
        assert_eq!(state.data.personnel.len(), 5);
        assert!(!state.cancel_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn pending_submission_can_be_cancelled() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(&dir);
        let form = CasualtyForm {
            name: "ماجد".into(),
            location: "البوابة الشمالية".into(),
            ..CasualtyForm::default()
        };

        let handle = submit(&form, Duration::from_secs(5), state.notifier.clone(), |_| {}).unwrap();
        let token = handle.cancellation_token();
        state.replace_pending(handle);

        assert!(state.cancel_pending());
        assert!(token.is_cancelled());
        assert!(!state.cancel_pending());
    }
}
