//! Built-in sample data the dashboard ships with.
//!
//! Timestamps are relative to `now` so "2 hours ago" stays two hours ago
//! whenever the session starts.

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    geo::RIYADH, Action, Coordinates, Incident, IncidentStatus, IncidentType, MemberStatus,
    Personnel, PersonnelStatus, Priority, Severity, Task, TaskStatus, Team, TeamMember,
    TeamStatus, TeamType,
};

/// Every collection the views read, built once when the session starts.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub started_at: DateTime<Utc>,
    pub incidents: Vec<Incident>,
    pub personnel: Vec<Personnel>,
    pub teams: Vec<Team>,
    pub tasks: Vec<Task>,
}

impl DashboardData {
    pub fn load(now: DateTime<Utc>) -> Self {
        Self {
            started_at: now,
            incidents: sample_incidents(now),
            personnel: sample_personnel(now),
            teams: sample_teams(),
            tasks: sample_tasks(now),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn incident(
    seq: u32,
    personnel: (&str, &str),
    kind: IncidentType,
    severity: Severity,
    timestamp: DateTime<Utc>,
    location: &str,
    coordinates: Coordinates,
    description: &str,
    response_time: f64,
    responders: &[&str],
    notes: &str,
) -> Incident {
    Incident {
        id: format!("INC-{seq:03}"),
        report_number: format!("RPT-2025-{seq:03}"),
        personnel_name: personnel.0.into(),
        personnel_id: personnel.1.into(),
        kind,
        severity,
        timestamp,
        location: location.into(),
        coordinates: Some(coordinates),
        description: description.into(),
        response_time,
        status: IncidentStatus::Resolved,
        responders: responders.iter().map(|r| r.to_string()).collect(),
        notes: notes.into(),
    }
}

pub fn sample_incidents(now: DateTime<Utc>) -> Vec<Incident> {
    vec![
        incident(
            1,
            ("خالد عبدالله السالم", "SEC-002"),
            IncidentType::Falling,
            Severity::Critical,
            now - Duration::hours(2),
            "شارع الملك فهد، الرياض",
            Coordinates::new(24.7236, 46.6853),
            "تم رصد سقوط مفاجئ في منطقة العملية الميدانية",
            1.2,
            &["فريق الإسعاف - الوحدة 5", "الشرطة - الدورية 12"],
            "تم نقل الموظف للمستشفى، الإصابات طفيفة",
        ),
        incident(
            2,
            ("سعد إبراهيم الدوسري", "SEC-004"),
            IncidentType::Impact,
            Severity::High,
            now - Duration::hours(5),
            "ساحة الملك عبدالعزيز، الرياض",
            Coordinates::new(24.7336, 46.6953),
            "اهتزاز قوي ومفاجئ تم رصده بواسطة حساسات السوار",
            0.8,
            &["فريق الأمن - الوحدة 3"],
            "تبين أنها اصطدام بسيط، الموظف بحالة جيدة",
        ),
        incident(
            3,
            ("أحمد محمد العتيبي", "SEC-001"),
            IncidentType::HealthAlert,
            Severity::High,
            now - Duration::hours(8),
            "حي النخيل، الرياض",
            Coordinates::new(24.7136, 46.6753),
            "ارتفاع غير طبيعي في معدل ضربات القلب",
            2.5,
            &["فريق الطب - الوحدة 2"],
            "تم التحقق، الموظف يعاني من إرهاق بسيط",
        ),
        incident(
            4,
            ("فهد ناصر القحطاني", "SEC-003"),
            IncidentType::Assault,
            Severity::Critical,
            now - Duration::hours(12),
            "منطقة الدرعية، الرياض",
            Coordinates::new(24.7036, 46.6653),
            "تم رصد اعتداء جسدي على الموظف",
            0.5,
            &[
                "فريق الطوارئ - الوحدة 1",
                "الشرطة - الدورية 8",
                "الإسعاف - الوحدة 4",
            ],
            "تم القبض على المعتدي، الموظف تحت الملاحظة الطبية",
        ),
        incident(
            5,
            ("محمد علي الزهراني", "SEC-005"),
            IncidentType::Other,
            Severity::Medium,
            now - Duration::hours(24),
            "منطقة الملز، الرياض",
            Coordinates::new(24.6936, 46.6553),
            "فقدان الاتصال مع الموظف لمدة 5 دقائق",
            5.0,
            &["مركز القيادة"],
            "تم استعادة الاتصال، المشكلة تقنية في الجهاز",
        ),
        incident(
            6,
            ("خالد عبدالله السالم", "SEC-002"),
            IncidentType::Falling,
            Severity::Medium,
            now - Duration::hours(36),
            "شارع الملك فهد، الرياض",
            Coordinates::new(24.7236, 46.6853),
            "سقوط خفيف أثناء الحركة السريعة",
            1.5,
            &["فريق الأمن - الوحدة 5"],
            "لا توجد إصابات، الموظف بحالة طبيعية",
        ),
    ]
}

pub fn sample_personnel(now: DateTime<Utc>) -> Vec<Personnel> {
    let person = |id: &str,
                  name: &str,
                  status: PersonnelStatus,
                  action: Action,
                  location: Coordinates,
                  seen_secs_ago: i64,
                  vitals: (u8, u16, u8, u8)| Personnel {
        id: id.into(),
        name: name.into(),
        status,
        action,
        location,
        last_seen: now - Duration::seconds(seen_secs_ago),
        battery: vitals.0,
        heart_rate: vitals.1,
        risk_level: vitals.2,
        ai_confidence: vitals.3,
    };

    vec![
        person(
            "SEC-001",
            "أحمد محمد العتيبي",
            PersonnelStatus::Normal,
            Action::Walking,
            Coordinates::new(24.7455, 46.6260),
            0,
            (85, 72, 5, 98),
        ),
        person(
            "SEC-002",
            "خالد عبدالله السالم",
            PersonnelStatus::Danger,
            Action::Falling,
            Coordinates::new(24.7565, 46.6753),
            60,
            (42, 110, 95, 96),
        ),
        person(
            "SEC-003",
            "فهد ناصر القحطاني",
            PersonnelStatus::Normal,
            Action::Standing,
            Coordinates::new(24.7245, 46.6100),
            0,
            (92, 68, 2, 99),
        ),
        person(
            "SEC-004",
            "سعد إبراهيم الدوسري",
            PersonnelStatus::Warning,
            Action::Impact,
            Coordinates::new(24.7725, 46.6450),
            120,
            (15, 95, 65, 94),
        ),
        person(
            "SEC-005",
            "محمد علي الزهراني",
            PersonnelStatus::Normal,
            Action::Walking,
            Coordinates::new(24.6875, 46.6950),
            0,
            (78, 75, 8, 97),
        ),
    ]
}

fn member(id: &str, name: &str, role: &str, phone: &str, status: MemberStatus, years: u8) -> TeamMember {
    TeamMember {
        id: id.into(),
        name: name.into(),
        role: role.into(),
        phone: phone.into(),
        status,
        experience_years: years,
    }
}

pub fn sample_teams() -> Vec<Team> {
    use MemberStatus::{Available, Busy, Offline};

    vec![
        Team {
            id: "TEAM-001".into(),
            name: "فريق الإسعاف الأول".into(),
            kind: TeamType::Medical,
            status: TeamStatus::Active,
            location: "محطة الإسعاف المركزية".into(),
            coordinates: Coordinates::new(24.7236, 46.6853),
            members: vec![
                member("M-001", "د. محمد علي", "قائد الفريق", "+966501234567", Available, 8),
                member("M-002", "أحمد الحسن", "طبيب طوارئ", "+966501234568", Available, 5),
                member("M-003", "فاطمة السالم", "ممرضة", "+966501234569", Busy, 3),
            ],
            leader: "د. محمد علي".into(),
            response_time: 2.5,
            capacity: 4,
            current_load: 3,
        },
        Team {
            id: "TEAM-002".into(),
            name: "فريق الأمن الميداني".into(),
            kind: TeamType::Security,
            status: TeamStatus::Active,
            location: "مركز الأمن الشرقي".into(),
            coordinates: Coordinates::new(24.7336, 46.6953),
            members: vec![
                member("S-001", "خالد الدوسري", "قائد الفريق", "+966501234570", Available, 10),
                member("S-002", "سعد العتيبي", "ضابط أمن", "+966501234571", Available, 6),
                member("S-003", "ناصر القحطاني", "ضابط أمن", "+966501234572", Available, 4),
                member("S-004", "محمود الزهراني", "حارس أمن", "+966501234573", Offline, 2),
            ],
            leader: "خالد الدوسري".into(),
            response_time: 1.8,
            capacity: 5,
            current_load: 3,
        },
        Team {
            id: "TEAM-003".into(),
            name: "مركز القيادة والتحكم".into(),
            kind: TeamType::Command,
            status: TeamStatus::Active,
            location: "مركز القيادة الرئيسي".into(),
            coordinates: RIYADH,
            members: vec![
                member("C-001", "العقيد أحمد الشمري", "قائد العمليات", "+966501234574", Available, 15),
                member("C-002", "الملازم فهد الرشيد", "منسق العمليات", "+966501234575", Available, 7),
                member("C-003", "سارة الخالد", "محلل بيانات", "+966501234576", Available, 4),
            ],
            leader: "العقيد أحمد الشمري".into(),
            response_time: 0.5,
            capacity: 3,
            current_load: 3,
        },
        Team {
            id: "TEAM-004".into(),
            name: "فريق الدعم التقني".into(),
            kind: TeamType::Technical,
            status: TeamStatus::Standby,
            location: "مركز التكنولوجيا".into(),
            coordinates: RIYADH,
            members: vec![
                member("T-001", "علي المطيري", "قائد الفريق", "+966501234577", Available, 6),
                member("T-002", "زيد الجعفري", "مهندس أنظمة", "+966501234578", Available, 5),
            ],
            leader: "علي المطيري".into(),
            response_time: 5.0,
            capacity: 2,
            current_load: 1,
        },
    ]
}

pub fn sample_tasks(now: DateTime<Utc>) -> Vec<Task> {
    vec![
        Task {
            id: "TASK-001".into(),
            title: "الاستجابة لحادثة سقوط".into(),
            description: "تم رصد سقوط في شارع الملك فهد، يتطلب فريق إسعاف".into(),
            assigned_team: "TEAM-001".into(),
            priority: Priority::High,
            status: TaskStatus::InProgress,
            due: now + Duration::minutes(30),
            location: "شارع الملك فهد".into(),
            estimated_minutes: 20,
        },
        Task {
            id: "TASK-002".into(),
            title: "دوريات أمنية روتينية".into(),
            description: "دوريات أمنية في المناطق المحددة".into(),
            assigned_team: "TEAM-002".into(),
            priority: Priority::Medium,
            status: TaskStatus::InProgress,
            due: now + Duration::hours(2),
            location: "شارع الملك عبدالعزيز".into(),
            estimated_minutes: 120,
        },
        Task {
            id: "TASK-003".into(),
            title: "صيانة أجهزة المراقبة".into(),
            description: "صيانة دورية لأجهزة المراقبة والاتصالات".into(),
            assigned_team: "TEAM-004".into(),
            priority: Priority::Low,
            status: TaskStatus::Pending,
            due: now + Duration::hours(24),
            location: "مركز التكنولوجيا".into(),
            estimated_minutes: 180,
        },
    ]
}
