use std::fmt;

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Opaque reminder identifier. Also used as the notification request id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReminderId(Uuid);

impl ReminderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReminderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    id: ReminderId,
    pub title: String,
    pub due_at: DateTime<Local>,
}

impl Reminder {
    pub fn new(title: impl Into<String>, due_at: DateTime<Local>) -> Self {
        Self {
            id: ReminderId::new(),
            title: title.into(),
            due_at,
        }
    }

    pub fn id(&self) -> ReminderId {
        self.id
    }

    pub fn is_overdue_at(&self, now: DateTime<Local>) -> bool {
        self.due_at < now
    }

    /// Abbreviated date and short time, e.g. "Jan 1, 2025 at 9:00 AM".
    pub fn due_display(&self) -> String {
        format_due(&self.due_at)
    }
}

pub fn format_due(at: &DateTime<Local>) -> String {
    at.format("%b %-d, %Y at %-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Reminder::new("a", at(2025, 1, 1, 9, 0));
        let b = Reminder::new("a", at(2025, 1, 1, 9, 0));
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_overdue_is_strict() {
        let due = at(2025, 1, 1, 9, 0);
        let r = Reminder::new("Buy milk", due);
        assert!(!r.is_overdue_at(due));
        assert!(!r.is_overdue_at(due - chrono::Duration::seconds(1)));
        assert!(r.is_overdue_at(due + chrono::Duration::seconds(1)));
    }

    #[test]
    fn test_due_display() {
        let r = Reminder::new("Buy milk", at(2025, 1, 1, 9, 0));
        assert_eq!(r.due_display(), "Jan 1, 2025 at 9:00 AM");

        let r = Reminder::new("Call mom", at(2025, 12, 24, 18, 5));
        assert_eq!(r.due_display(), "Dec 24, 2025 at 6:05 PM");
    }

    #[test]
    fn test_id_display_is_hyphenated_uuid() {
        let id = ReminderId::new();
        let s = id.to_string();
        assert_eq!(s.len(), 36);
        assert_eq!(s.matches('-').count(), 4);
    }
}
