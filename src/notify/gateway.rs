use log::warn;

use super::center::NotificationCenter;
use super::error::{NotificationError, NotifyResult};
use super::request::{AuthorizationOptions, NotificationRequest, Sound};
use crate::reminders::{Reminder, ReminderId};

pub const DEFAULT_TITLE: &str = "Prioriti Reminder";

/// Bridges reminders to a [`NotificationCenter`].
pub struct NotificationGateway<C: NotificationCenter> {
    center: C,
    title: String,
    sound: Sound,
    permission: Option<bool>,
}

impl<C: NotificationCenter> NotificationGateway<C> {
    pub fn new(center: C, title: impl Into<String>) -> Self {
        Self {
            center,
            title: title.into(),
            sound: Sound::Default,
            permission: None,
        }
    }

    pub fn with_sound(mut self, sound: Sound) -> Self {
        self.sound = sound;
        self
    }

    pub fn center(&self) -> &C {
        &self.center
    }

    /// Ask for alert, badge and sound permission. The center is only asked
    /// once; later calls return the remembered answer.
    pub fn request_permission(&mut self) -> NotifyResult<bool> {
        if let Some(granted) = self.permission {
            return Ok(granted);
        }
        match self.center.request_authorization(AuthorizationOptions::ALL) {
            Ok(granted) => {
                self.permission = Some(granted);
                Ok(granted)
            }
            Err(e) => {
                self.permission = Some(false);
                Err(e)
            }
        }
    }

    pub fn schedule(&self, reminder: &Reminder) -> NotifyResult<()> {
        if self.permission == Some(false) {
            return Err(NotificationError::PermissionDenied);
        }
        let request = NotificationRequest::for_reminder(reminder, &self.title, self.sound);
        self.center.add(request)
    }

    pub fn cancel(&self, id: ReminderId) -> bool {
        self.center.remove_pending(&id.to_string())
    }
}

/// Default failure policy: log and carry on.
pub fn log_failure<T>(context: &str, result: NotifyResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{}: {}", context, e);
            None
        }
    }
}
