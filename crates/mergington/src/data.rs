//! Data structures shared between the frontend and backend of the Mergington
//! activities service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One extracurricular offering.
///
/// The activity name is not part of the record; it is the key the record is
/// stored under in an [`ActivityDirectory`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advisory capacity. Nothing rejects a signup once it is reached.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder style helper for seeding an activity with existing members.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in participants {
            self.add_participant(email);
        }
        self
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Appends `email` unless it is already present.
    /// Returns `true` if the participant list changed.
    pub fn add_participant(&mut self, email: impl Into<String>) -> bool {
        let email = email.into();
        if self.is_registered(&email) {
            return false;
        }
        self.participants.push(email);
        true
    }

    /// Removes `email` if present, keeping the order of the remaining members.
    /// Returns `true` if the participant list changed.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Every known activity keyed by name, as returned by `GET /activities`.
pub type ActivityDirectory = BTreeMap<String, Activity>;

/// Query string of the signup and unregister endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EmailQuery {
    pub email: String,
}

/// Success body of the mutation endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Signed up {email} for {activity}"),
        }
    }

    pub fn unregistered(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Unregistered {email} from {activity}"),
        }
    }
}

/// Failure body of every endpoint that can reject a request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceInfo {
    pub activities: String,
    pub activity_count: usize,
    pub participant_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub services: ServiceInfo,
}
