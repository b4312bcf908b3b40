use chrono::{DateTime, Utc};

/// File name for a new drawing, derived from the creation instant.
///
/// Millisecond precision keeps names collision-resistant for interactive use:
/// a user cannot create two drawings within the same millisecond.
pub fn drawing_file_name(now: DateTime<Utc>) -> String {
    format!("drawing-{}.svg", now.format("%Y%m%d%H%M%S%3f"))
}

/// Full store path for a new drawing under the configured folder.
pub fn drawing_path(folder: &str, now: DateTime<Utc>) -> String {
    let name = drawing_file_name(now);
    let folder = folder.trim_end_matches('/');
    if folder.is_empty() {
        name
    } else {
        format!("{folder}/{name}")
    }
}
