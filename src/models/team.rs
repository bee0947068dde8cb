//! Response teams and the tasks assigned to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Coordinates, Variant};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TeamType {
    Medical,
    Security,
    Command,
    Technical,
}

impl Variant for TeamType {
    const ALL: &'static [Self] = &[
        TeamType::Medical,
        TeamType::Security,
        TeamType::Command,
        TeamType::Technical,
    ];

    fn key(&self) -> &'static str {
        match self {
            TeamType::Medical => "medical",
            TeamType::Security => "security",
            TeamType::Command => "command",
            TeamType::Technical => "technical",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TeamType::Medical => "إسعاف",
            TeamType::Security => "أمن",
            TeamType::Command => "قيادة",
            TeamType::Technical => "تقني",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TeamStatus {
    Active,
    Standby,
    Deployed,
    Unavailable,
}

impl Variant for TeamStatus {
    const ALL: &'static [Self] = &[
        TeamStatus::Active,
        TeamStatus::Standby,
        TeamStatus::Deployed,
        TeamStatus::Unavailable,
    ];

    fn key(&self) -> &'static str {
        match self {
            TeamStatus::Active => "active",
            TeamStatus::Standby => "standby",
            TeamStatus::Deployed => "deployed",
            TeamStatus::Unavailable => "unavailable",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TeamStatus::Active => "نشط",
            TeamStatus::Standby => "في الانتظار",
            TeamStatus::Deployed => "مُنتشر",
            TeamStatus::Unavailable => "غير متاح",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Available,
    Busy,
    Offline,
}

impl Variant for MemberStatus {
    const ALL: &'static [Self] = &[
        MemberStatus::Available,
        MemberStatus::Busy,
        MemberStatus::Offline,
    ];

    fn key(&self) -> &'static str {
        match self {
            MemberStatus::Available => "available",
            MemberStatus::Busy => "busy",
            MemberStatus::Offline => "offline",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MemberStatus::Available => "متاح",
            MemberStatus::Busy => "مشغول",
            MemberStatus::Offline => "غير متصل",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Variant for Priority {
    const ALL: &'static [Self] = &[Priority::High, Priority::Medium, Priority::Low];

    fn key(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Priority::High => "عالية",
            Priority::Medium => "متوسطة",
            Priority::Low => "منخفضة",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Assigned,
    InProgress,
    Completed,
}

impl Variant for TaskStatus {
    const ALL: &'static [Self] = &[
        TaskStatus::Pending,
        TaskStatus::Assigned,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    fn key(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Assigned => "assigned",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "قيد الانتظار",
            TaskStatus::Assigned => "معينة",
            TaskStatus::InProgress => "جاري",
            TaskStatus::Completed => "مكتملة",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub status: MemberStatus,
    pub experience_years: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TeamType,
    pub status: TeamStatus,
    pub location: String,
    pub coordinates: Coordinates,
    pub members: Vec<TeamMember>,
    pub leader: String,
    /// Average minutes to reach an incident.
    pub response_time: f64,
    pub capacity: u32,
    pub current_load: u32,
}

impl Team {
    /// Current load as a share of capacity, 0..=100. A team without capacity
    /// reports zero rather than dividing by it.
    pub fn load_percent(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        ((self.current_load as f64 / self.capacity as f64) * 100.0).round() as u32
    }

    pub fn available_members(&self) -> usize {
        self.members
            .iter()
            .filter(|member| member.status == MemberStatus::Available)
            .count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub assigned_team: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due: DateTime<Utc>,
    pub location: String,
    pub estimated_minutes: u32,
}
