use chrono::{DateTime, Utc};

/// Short relative label for table rows: "moments ago", "N hours ago",
/// "N days ago", and a plain date beyond a week.
pub fn relative_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if hours < 1 {
        "منذ قليل".to_string()
    } else if hours < 24 {
        format!("منذ {hours} ساعة")
    } else if days < 7 {
        format!("منذ {days} يوم")
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}

/// Full timestamp for the incident detail panel.
pub fn full_label(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
}
