use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Emitter, State};

use crate::{
    analytics::AnalyticsReport,
    audio::AlertKind,
    filter::{
        active_alerts, apply, dashboard_view, filter_teams, tasks_for, team_loads, Choice,
        IncidentCriteria, IncidentSummary, MonitoringSummary, TeamFilter, TeamLoad, TeamSummary,
    },
    map::{focus_on, markers, personnel_markers, MapFocus, MapMarker},
    models::{IncidentType, PersonnelStatus, Task, Team, TeamType},
    notify::{emitted, Notification, NotificationLevel, Notifier},
    settings::{AlertSoundSettings, DashboardSettings},
    submission::{register, submit, CasualtyForm, ValidatedCasualty},
    views::{incident_rows, personnel_cards, IncidentRow, PersonnelCard},
    AppState,
};

pub const NOTIFICATION_EVENT: &str = "notification";
pub const CASUALTY_REGISTERED_EVENT: &str = "casualty-registered";
pub const SETTINGS_UPDATED_EVENT: &str = "settings-updated";

/// Forwards notifications to the web view as toast events.
pub struct EventNotifier {
    app_handle: AppHandle,
}

impl EventNotifier {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl Notifier for EventNotifier {
    fn notify(&self, message: &str, level: NotificationLevel) {
        let payload = Notification {
            message: message.to_string(),
            level,
        };
        emitted(NOTIFICATION_EVENT, self.app_handle.emit(NOTIFICATION_EVENT, &payload));
    }
}

#[tauri::command]
pub fn list_incidents(
    criteria: Option<IncidentCriteria>,
    state: State<AppState>,
) -> Result<Vec<IncidentRow>, String> {
    let criteria = criteria.unwrap_or_else(|| {
        IncidentCriteria::default().with_date_range(state.settings.get().default_date_range)
    });
    let now = Utc::now();
    let view = apply(&state.data.incidents, &criteria, now);
    Ok(incident_rows(&view, now))
}

#[tauri::command]
pub fn incident_summary(state: State<AppState>) -> Result<IncidentSummary, String> {
    Ok(IncidentSummary::from_incidents(&state.data.incidents))
}

#[tauri::command]
pub fn list_personnel(
    status: Option<Choice<PersonnelStatus>>,
    state: State<AppState>,
) -> Result<Vec<PersonnelCard>, String> {
    let view = dashboard_view(&state.data.personnel, status.unwrap_or_default());
    Ok(personnel_cards(&view, Utc::now()))
}

/// Personnel behind the top alert banner, whatever the list filter shows.
#[tauri::command]
pub fn list_active_alerts(state: State<AppState>) -> Result<Vec<PersonnelCard>, String> {
    let alerts = active_alerts(&state.data.personnel);
    Ok(personnel_cards(&alerts, Utc::now()))
}

#[tauri::command]
pub fn monitoring_summary(state: State<AppState>) -> Result<MonitoringSummary, String> {
    Ok(MonitoringSummary::from_personnel(&state.data.personnel))
}

#[tauri::command]
pub fn list_teams(filter: Option<TeamFilter>, state: State<AppState>) -> Result<Vec<Team>, String> {
    let filter = filter.unwrap_or_default();
    Ok(filter_teams(&state.data.teams, &filter)
        .into_iter()
        .cloned()
        .collect())
}

#[tauri::command]
pub fn team_tasks(team_id: String, state: State<AppState>) -> Result<Vec<Task>, String> {
    Ok(tasks_for(&state.data.tasks, &team_id)
        .into_iter()
        .cloned()
        .collect())
}

#[tauri::command]
pub fn list_team_loads(
    filter: Option<TeamFilter>,
    state: State<AppState>,
) -> Result<Vec<TeamLoad>, String> {
    let filter = filter.unwrap_or_default();
    Ok(team_loads(filter_teams(&state.data.teams, &filter)))
}

#[tauri::command]
pub fn analytics_report(state: State<AppState>) -> Result<AnalyticsReport, String> {
    Ok(AnalyticsReport::build(&state.data.incidents))
}

#[tauri::command]
pub fn team_summary(state: State<AppState>) -> Result<TeamSummary, String> {
    Ok(TeamSummary::new(&state.data.teams, &state.data.tasks))
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSet {
    Incidents,
    Personnel,
    Teams,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MarkerList {
    Incidents(Vec<MapMarker<IncidentType>>),
    Personnel(Vec<MapMarker<PersonnelStatus>>),
    Teams(Vec<MapMarker<TeamType>>),
}

/// `status` applies to the personnel layer only, matching the dashboard list.
#[tauri::command]
pub fn map_markers(
    kind: MarkerSet,
    status: Option<Choice<PersonnelStatus>>,
    state: State<AppState>,
) -> Result<MarkerList, String> {
    let data = &state.data;
    Ok(match kind {
        MarkerSet::Incidents => MarkerList::Incidents(markers(&data.incidents)),
        MarkerSet::Personnel => MarkerList::Personnel(personnel_markers(
            &data.personnel,
            status.unwrap_or_default(),
        )),
        MarkerSet::Teams => MarkerList::Teams(markers(&data.teams)),
    })
}

/// Focus for a marker id from any layer. Unknown ids fall back to the city
/// overview.
#[tauri::command]
pub fn focus_marker(id: String, state: State<AppState>) -> Result<MapFocus, String> {
    let data = &state.data;
    let focus = focus_on(&data.personnel, &id)
        .or_else(|| focus_on(&data.incidents, &id))
        .or_else(|| focus_on(&data.teams, &id))
        .unwrap_or_else(MapFocus::overview);
    Ok(focus)
}

#[tauri::command]
pub async fn submit_casualty(
    form: CasualtyForm,
    state: State<'_, AppState>,
    app_handle: AppHandle,
) -> Result<(), String> {
    let delay = Duration::from_millis(state.settings.get().submission_delay_ms);
    let audio = state.audio.clone();
    let sound = state.settings.alert_sound();

    let on_complete = move |casualty: ValidatedCasualty| {
        let incident = register(casualty, &audio, &sound, Utc::now());
        emitted(
            CASUALTY_REGISTERED_EVENT,
            app_handle.emit(CASUALTY_REGISTERED_EVENT, &incident),
        );
    };

    let handle = submit(&form, delay, state.notifier.clone(), on_complete)
        .map_err(|e| e.to_string())?;
    state.replace_pending(handle);
    Ok(())
}

#[tauri::command]
pub fn cancel_submission(state: State<AppState>) -> Result<bool, String> {
    Ok(state.cancel_pending())
}

#[tauri::command]
pub fn play_alert(kind: AlertKind, state: State<AppState>) -> Result<(), String> {
    state.audio.play(kind, &state.settings.alert_sound());
    Ok(())
}

#[tauri::command]
pub fn get_settings(state: State<AppState>) -> Result<DashboardSettings, String> {
    Ok(state.settings.get())
}

#[tauri::command]
pub fn update_settings(
    settings: DashboardSettings,
    state: State<AppState>,
    app_handle: AppHandle,
) -> Result<DashboardSettings, String> {
    let saved = state.settings.update(settings).map_err(|e| e.to_string())?;
    emitted(SETTINGS_UPDATED_EVENT, app_handle.emit(SETTINGS_UPDATED_EVENT, &saved));
    Ok(saved)
}

#[tauri::command]
pub fn set_alert_sound(
    sound: AlertSoundSettings,
    state: State<AppState>,
    app_handle: AppHandle,
) -> Result<DashboardSettings, String> {
    let saved = state
        .settings
        .update_alert_sound(sound)
        .map_err(|e| e.to_string())?;
    emitted(SETTINGS_UPDATED_EVENT, app_handle.emit(SETTINGS_UPDATED_EVENT, &saved));
    Ok(saved)
}
