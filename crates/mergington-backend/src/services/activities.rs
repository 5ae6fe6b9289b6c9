use async_trait::async_trait;
use dashmap::DashMap;

use mergington::data::{Activity, ActivityDirectory};
use mergington::errors::ActivityError;

/// Operations on the activity directory.
///
/// The set of activities is fixed once the service is built; only the
/// participant lists change.
#[async_trait]
pub trait ActivityService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns every activity keyed by name.
    async fn list(&self) -> Result<ActivityDirectory, Self::Error>;

    /// Appends `email` to the participants of `activity`.
    ///
    /// # Errors
    ///
    /// Fails if the activity is unknown or `email` is already signed up. The
    /// participant list is left untouched in both cases.
    async fn signup(&self, activity: &str, email: &str) -> Result<(), Self::Error>;

    /// Removes `email` from the participants of `activity`.
    ///
    /// # Errors
    ///
    /// Fails if the activity is unknown or `email` is not registered.
    async fn unregister(&self, activity: &str, email: &str) -> Result<(), Self::Error>;
}

/// An in-memory implementation of [`ActivityService`].
///
/// Each mutation holds the `DashMap` entry guard of its activity for the whole
/// check-then-write step, so concurrent signups of the same email cannot both
/// succeed.
///
/// # Examples
/// ```rust
/// let service = ActivityServiceInMemory::seeded(crate::seed::activities());
/// service.signup("Chess Club", "new@mergington.edu").await?;
/// let directory = service.list().await?;
/// assert!(directory["Chess Club"].is_registered("new@mergington.edu"));
/// ```
pub struct ActivityServiceInMemory {
    activities: DashMap<String, Activity>,
}

impl ActivityServiceInMemory {
    pub fn new() -> Self {
        Self {
            activities: DashMap::new(),
        }
    }

    /// Builds a directory holding the given activities.
    pub fn seeded<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        Self {
            activities: activities.into_iter().collect(),
        }
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    pub fn participant_count(&self) -> usize {
        self.activities
            .iter()
            .map(|entry| entry.value().participants.len())
            .sum()
    }
}

impl Default for ActivityServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityService for ActivityServiceInMemory {
    type Error = ActivityError;

    async fn list(&self) -> Result<ActivityDirectory, Self::Error> {
        Ok(self
            .activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<(), Self::Error> {
        let mut entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| ActivityError::ActivityNotFound(activity.to_string()))?;

        if !entry.add_participant(email) {
            return Err(ActivityError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        Ok(())
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<(), Self::Error> {
        let mut entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| ActivityError::ActivityNotFound(activity.to_string()))?;

        if !entry.remove_participant(email) {
            return Err(ActivityError::NotRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::seed;

    fn service() -> ActivityServiceInMemory {
        ActivityServiceInMemory::seeded(seed::activities())
    }

    async fn participants(service: &ActivityServiceInMemory, activity: &str) -> Vec<String> {
        service.list().await.unwrap()[activity].participants.clone()
    }

    #[tokio::test]
    async fn list_returns_every_seeded_activity() {
        let service = service();
        let directory = service.list().await.unwrap();

        assert_eq!(directory.len(), service.activity_count());
        assert!(directory.contains_key("Soccer Team"));
        assert!(directory.contains_key("Drama Club"));
        assert!(
            directory["Drama Club"]
                .participants
                .contains(&"emily@mergington.edu".to_string())
        );
    }

    #[tokio::test]
    async fn signup_appends_in_call_order() {
        let service = service();

        service
            .signup("Science Club", "first@mergington.edu")
            .await
            .unwrap();
        service
            .signup("Science Club", "second@mergington.edu")
            .await
            .unwrap();

        let members = participants(&service, "Science Club").await;
        let n = members.len();
        assert_eq!(
            &members[n - 2..],
            ["first@mergington.edu", "second@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn duplicate_signup_leaves_participants_unchanged() {
        let service = service();
        let before = participants(&service, "Drama Club").await;

        let err = service
            .signup("Drama Club", "emily@mergington.edu")
            .await
            .unwrap_err();

        assert!(matches!(err, ActivityError::AlreadySignedUp { .. }));
        assert_eq!(participants(&service, "Drama Club").await, before);
    }

    #[tokio::test]
    async fn signup_for_unknown_activity() {
        let service = service();

        let err = service
            .signup("Nonexistent Activity", "x@y.z")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ActivityError::ActivityNotFound("Nonexistent Activity".to_string())
        );
    }

    #[tokio::test]
    async fn max_participants_is_not_enforced() {
        let service = ActivityServiceInMemory::seeded([(
            "Tiny Club".to_string(),
            Activity::new("Room for one", "Mondays", 1)
                .with_participants(["a@mergington.edu"]),
        )]);

        service
            .signup("Tiny Club", "b@mergington.edu")
            .await
            .unwrap();

        assert_eq!(participants(&service, "Tiny Club").await.len(), 2);
    }

    #[tokio::test]
    async fn unregister_removes_member() {
        let service = service();

        service
            .unregister("Basketball Team", "sarah@mergington.edu")
            .await
            .unwrap();

        assert!(
            !participants(&service, "Basketball Team")
                .await
                .contains(&"sarah@mergington.edu".to_string())
        );
    }

    #[tokio::test]
    async fn unregister_absent_member_is_not_found() {
        let service = service();
        let before = participants(&service, "Science Club").await;

        let err = service
            .unregister("Science Club", "nobody@mergington.edu")
            .await
            .unwrap_err();

        assert!(matches!(err, ActivityError::NotRegistered { .. }));
        assert_eq!(err.status_code(), 404);
        assert_eq!(participants(&service, "Science Club").await, before);
    }

    #[tokio::test]
    async fn unregister_from_unknown_activity() {
        let service = service();

        let err = service.unregister("Fake Club", "x@y.z").await.unwrap_err();

        assert!(matches!(err, ActivityError::ActivityNotFound(_)));
    }

    #[tokio::test]
    async fn signup_after_unregister_succeeds() {
        let service = service();

        service
            .unregister("Chess Club", "michael@mergington.edu")
            .await
            .unwrap();
        service
            .signup("Chess Club", "michael@mergington.edu")
            .await
            .unwrap();

        let members = participants(&service, "Chess Club").await;
        assert_eq!(members.last().unwrap(), "michael@mergington.edu");
        assert_eq!(
            members
                .iter()
                .filter(|m| *m == "michael@mergington.edu")
                .count(),
            1
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_duplicate_signups_admit_one() {
        let service = Arc::new(service());
        let before = participants(&service, "Art Club").await.len();

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move {
                    service.signup("Art Club", "race@mergington.edu").await
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(participants(&service, "Art Club").await.len(), before + 1);
    }
}
