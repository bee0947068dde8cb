//! Field personnel wearing a bracelet, as shown on the live dashboard and the
//! monitoring board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Coordinates, Variant};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PersonnelStatus {
    Normal,
    Warning,
    Danger,
}

impl PersonnelStatus {
    /// Dashboard ordering weight; higher sorts first.
    pub fn priority(&self) -> u8 {
        match self {
            PersonnelStatus::Danger => 3,
            PersonnelStatus::Warning => 2,
            PersonnelStatus::Normal => 1,
        }
    }
}

impl Variant for PersonnelStatus {
    const ALL: &'static [Self] = &[
        PersonnelStatus::Danger,
        PersonnelStatus::Warning,
        PersonnelStatus::Normal,
    ];

    fn key(&self) -> &'static str {
        match self {
            PersonnelStatus::Normal => "normal",
            PersonnelStatus::Warning => "warning",
            PersonnelStatus::Danger => "danger",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PersonnelStatus::Normal => "طبيعي",
            PersonnelStatus::Warning => "تحذير",
            PersonnelStatus::Danger => "خطر",
        }
    }
}

/// Motion state reported by the bracelet's sensors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Walking,
    Standing,
    Running,
    Falling,
    Impact,
}

impl Variant for Action {
    const ALL: &'static [Self] = &[
        Action::Walking,
        Action::Standing,
        Action::Running,
        Action::Falling,
        Action::Impact,
    ];

    fn key(&self) -> &'static str {
        match self {
            Action::Walking => "walking",
            Action::Standing => "standing",
            Action::Running => "running",
            Action::Falling => "falling",
            Action::Impact => "impact",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Action::Walking => "مشي",
            Action::Standing => "وقوف",
            Action::Running => "جري",
            Action::Falling => "سقوط",
            Action::Impact => "اصطدام",
        }
    }
}

/// Coarse bucket of a 0..=100 risk score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Elevated,
    High,
    Critical,
}

impl RiskBand {
    pub fn from_level(level: u8) -> Self {
        match level {
            80.. => RiskBand::Critical,
            50..=79 => RiskBand::High,
            20..=49 => RiskBand::Elevated,
            _ => RiskBand::Low,
        }
    }
}

impl Variant for RiskBand {
    const ALL: &'static [Self] = &[
        RiskBand::Critical,
        RiskBand::High,
        RiskBand::Elevated,
        RiskBand::Low,
    ];

    fn key(&self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Elevated => "elevated",
            RiskBand::High => "high",
            RiskBand::Critical => "critical",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "منخفض",
            RiskBand::Elevated => "متوسط",
            RiskBand::High => "مرتفع",
            RiskBand::Critical => "حرج",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Personnel {
    pub id: String,
    pub name: String,
    pub status: PersonnelStatus,
    pub action: Action,
    pub location: Coordinates,
    pub last_seen: DateTime<Utc>,
    /// Bracelet battery, percent.
    pub battery: u8,
    pub heart_rate: u16,
    pub risk_level: u8,
    pub ai_confidence: u8,
}

impl Personnel {
    pub fn risk_band(&self) -> RiskBand {
        RiskBand::from_level(self.risk_level)
    }

    pub fn battery_low(&self) -> bool {
        self.battery < 20
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_band_thresholds() {
        assert_eq!(RiskBand::from_level(0), RiskBand::Low);
        assert_eq!(RiskBand::from_level(19), RiskBand::Low);
        assert_eq!(RiskBand::from_level(20), RiskBand::Elevated);
        assert_eq!(RiskBand::from_level(49), RiskBand::Elevated);
        assert_eq!(RiskBand::from_level(50), RiskBand::High);
        assert_eq!(RiskBand::from_level(79), RiskBand::High);
        assert_eq!(RiskBand::from_level(80), RiskBand::Critical);
        assert_eq!(RiskBand::from_level(100), RiskBand::Critical);
    }

    #[test]
    fn danger_outranks_warning_outranks_normal() {
        assert!(PersonnelStatus::Danger.priority() > PersonnelStatus::Warning.priority());
        assert!(PersonnelStatus::Warning.priority() > PersonnelStatus::Normal.priority());
    }
}
