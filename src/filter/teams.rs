//! Team-management board: team filters, task lookup and the board's stat cards.

use serde::{Deserialize, Serialize};

use super::{round1, Choice};
use crate::models::{Task, TaskStatus, Team, TeamStatus, TeamType, Variant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFilter {
    #[serde(default)]
    pub status: Choice<TeamStatus>,
    #[serde(default, rename = "type")]
    pub kind: Choice<TeamType>,
}

impl TeamFilter {
    pub fn admits(&self, team: &Team) -> bool {
        self.status.admits(&team.status) && self.kind.admits(&team.kind)
    }
}

/// Teams passing both selects, in source order.
pub fn filter_teams<'a>(teams: &'a [Team], filter: &TeamFilter) -> Vec<&'a Team> {
    teams.iter().filter(|team| filter.admits(team)).collect()
}

pub fn tasks_for<'a>(tasks: &'a [Task], team_id: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| task.assigned_team == team_id)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub total_teams: usize,
    pub active_teams: usize,
    pub tasks_in_progress: usize,
    /// Minutes, one decimal. Zero when there are no teams.
    pub avg_response_time: f64,
    pub total_members: usize,
}

impl TeamSummary {
    pub fn new(teams: &[Team], tasks: &[Task]) -> Self {
        let avg_response_time = if teams.is_empty() {
            0.0
        } else {
            round1(teams.iter().map(|team| team.response_time).sum::<f64>() / teams.len() as f64)
        };

        Self {
            total_teams: teams.len(),
            active_teams: teams
                .iter()
                .filter(|team| team.status == TeamStatus::Active)
                .count(),
            tasks_in_progress: tasks
                .iter()
                .filter(|task| task.status == TaskStatus::InProgress)
                .count(),
            avg_response_time,
            total_members: teams.iter().map(|team| team.members.len()).sum(),
        }
    }
}

/// Capacity bar on a team card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamLoad {
    pub team_id: String,
    pub current_load: u32,
    pub capacity: u32,
    pub load_percent: u32,
    pub available_members: usize,
    pub total_members: usize,
}

impl TeamLoad {
    pub fn new(team: &Team) -> Self {
        Self {
            team_id: team.id.clone(),
            current_load: team.current_load,
            capacity: team.capacity,
            load_percent: team.load_percent(),
            available_members: team.available_members(),
            total_members: team.members.len(),
        }
    }
}

pub fn team_loads<'a, I>(teams: I) -> Vec<TeamLoad>
where
    I: IntoIterator<Item = &'a Team>,
{
    teams.into_iter().map(TeamLoad::new).collect()
}

/// `"type: status"` line used on the team cards.
pub fn team_badge(team: &Team) -> String {
    format!("{}: {}", team.kind.label(), team.status.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{sample_tasks, sample_teams};
    use chrono::Utc;

    #[test]
    fn filters_combine_with_and() {
        let teams = sample_teams();

        let active = filter_teams(
            &teams,
            &TeamFilter {
                status: Choice::Only(TeamStatus::Active),
                kind: Choice::All,
            },
        );
        assert_eq!(active.len(), 3);

        let active_technical = filter_teams(
            &teams,
            &TeamFilter {
                status: Choice::Only(TeamStatus::Active),
                kind: Choice::Only(TeamType::Technical),
            },
        );
        assert!(active_technical.is_empty());

        assert_eq!(filter_teams(&teams, &TeamFilter::default()).len(), teams.len());
    }

    #[test]
    fn loads_follow_the_filtered_teams() {
        let teams = sample_teams();
        let standby = TeamFilter {
            status: Choice::Only(TeamStatus::Standby),
            kind: Choice::All,
        };

        let loads = team_loads(filter_teams(&teams, &standby));
        assert_eq!(loads.len(), 1);
        assert_eq!(loads[0].team_id, "TEAM-004");

        let all = team_loads(&teams);
        assert_eq!(all.len(), teams.len());
        for (load, team) in all.iter().zip(&teams) {
            assert_eq!(load.load_percent, team.load_percent());
            assert!(load.load_percent <= 100);
            assert!(load.available_members <= load.total_members);
        }
        assert_eq!(all.iter().map(|load| load.total_members).sum::<usize>(), 12);
    }

    #[test]
    fn tasks_are_looked_up_by_team() {
        let tasks = sample_tasks(Utc::now());
        let medical: Vec<&str> = tasks_for(&tasks, "TEAM-001")
            .iter()
            .map(|task| task.id.as_str())
            .collect();
        assert_eq!(medical, vec!["TASK-001"]);
        assert!(tasks_for(&tasks, "TEAM-003").is_empty());
    }

    #[test]
    fn board_summary() {
        let teams = sample_teams();
        let tasks = sample_tasks(Utc::now());
        let summary = TeamSummary::new(&teams, &tasks);

        assert_eq!(summary.active_teams, 3);
        assert_eq!(summary.tasks_in_progress, 2);
        // (2.5 + 1.8 + 0.5 + 5.0) / 4 sits on a rounding boundary.
        assert!((2.4..=2.5).contains(&summary.avg_response_time));
        assert_eq!(summary.total_members, 12);
    }

    #[test]
    fn empty_board_does_not_divide_by_zero() {
        let summary = TeamSummary::new(&[], &[]);
        assert_eq!(summary.avg_response_time, 0.0);
        assert_eq!(summary.total_teams, 0);
    }

    #[test]
    fn filter_reads_select_values() {
        let filter: TeamFilter =
            serde_json::from_str(r#"{"status":"standby","type":"all"}"#).unwrap();
        assert_eq!(filter.status, Choice::Only(TeamStatus::Standby));
        assert!(filter.kind.is_all());
    }
}
