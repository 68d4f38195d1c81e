use std::fmt;

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

use crate::reminders::Reminder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizationOptions {
    pub alert: bool,
    pub badge: bool,
    pub sound: bool,
}

impl AuthorizationOptions {
    pub const ALL: Self = Self {
        alert: true,
        badge: true,
        sound: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sound {
    #[default]
    Default,
    Silent,
}

/// One-shot calendar trigger. Seconds are not represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerComponents {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl TriggerComponents {
    pub fn from_datetime(at: &DateTime<Local>) -> Self {
        Self {
            year: at.year(),
            month: at.month(),
            day: at.day(),
            hour: at.hour(),
            minute: at.minute(),
        }
    }

    /// The local instant these components name, if one exists.
    pub fn fire_at(&self) -> Option<DateTime<Local>> {
        Local
            .with_ymd_and_hms(self.year, self.month, self.day, self.hour, self.minute, 0)
            .earliest()
    }
}

impl fmt::Display for TriggerComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub id: String,
    pub title: String,
    pub body: String,
    pub sound: Sound,
    pub trigger: TriggerComponents,
}

impl NotificationRequest {
    pub fn for_reminder(reminder: &Reminder, title: &str, sound: Sound) -> Self {
        Self {
            id: reminder.id().to_string(),
            title: title.to_string(),
            body: reminder.title.clone(),
            sound,
            trigger: TriggerComponents::from_datetime(&reminder.due_at),
        }
    }
}
