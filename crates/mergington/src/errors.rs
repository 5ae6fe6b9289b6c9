//! Shared error types for the Mergington activities service.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre: {0}")]
    ColorEyre(String),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Failures of the activity directory operations.
///
/// Every variant is terminal for the request that caused it; the caller gets
/// the status from [`ActivityError::status_code`] and the text from
/// [`ActivityError::detail`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity {0} not found")]
    ActivityNotFound(String),
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("{email} is not registered for {activity}")]
    NotRegistered { activity: String, email: String },
}

impl ActivityError {
    /// HTTP status code the error is surfaced as.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ActivityNotFound(_) | Self::NotRegistered { .. } => 404,
            Self::AlreadySignedUp { .. } => 400,
        }
    }

    /// Human readable detail returned to clients.
    pub fn detail(&self) -> &'static str {
        match self {
            Self::ActivityNotFound(_) => "Activity not found",
            Self::AlreadySignedUp { .. } => "Student is already signed up for this activity",
            Self::NotRegistered { .. } => "Student is not registered for this activity",
        }
    }
}
