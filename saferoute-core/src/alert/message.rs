use chrono::NaiveDateTime;

/// Human-readable alert text
pub fn compose_message(name: &str, location: &str, at: NaiveDateTime) -> String {
    format!(
        "🚨 EMERGENCY ALERT 🚨\nName: {name}\nLocation: {location}\nTime: {}\nPlease respond immediately!",
        at.format("%Y-%m-%d %H:%M:%S")
    )
}
