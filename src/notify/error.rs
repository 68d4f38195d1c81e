use thiserror::Error;

/// Failure reported by the notification center, either while asking for
/// permission or while scheduling a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("notification permission was denied")]
    PermissionDenied,
    #[error("notifications are disabled in configuration")]
    Disabled,
    #[error("trigger time {0} has already passed")]
    TriggerInPast(String),
    #[error("trigger {0} is not a valid local time")]
    InvalidTrigger(String),
    #[error("notification center error: {0}")]
    Platform(String),
}

pub type NotifyResult<T> = Result<T, NotificationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NotificationError::PermissionDenied.to_string(),
            "notification permission was denied"
        );
        let err = NotificationError::TriggerInPast("2025-01-01 09:00".into());
        assert!(err.to_string().contains("2025-01-01 09:00"));
    }
}
