use std::collections::HashSet;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{normalize_email, Activity, ActivityTable};

/// In-memory activity table.
///
/// A single lock covers the whole table. Every signup holds the write side
/// for its full check-and-append sequence, so signups are serialized across
/// all activities. Listing takes the read side and returns a snapshot.
pub struct ActivityStore {
    activities: RwLock<ActivityTable>,
}

impl ActivityStore {
    /// Builds a store from seed data, lowercasing seeded emails. Rejects a
    /// seed whose rosters are over capacity or contain duplicates.
    pub fn new(seed: ActivityTable) -> AppResult<Self> {
        let mut activities = ActivityTable::new();

        for (name, mut activity) in seed {
            let mut seen = HashSet::new();
            for participant in activity.participants.iter_mut() {
                *participant = normalize_email(participant);
                if !seen.insert(participant.clone()) {
                    return Err(AppError::Configuration(format!(
                        "Activity '{}' lists {} more than once",
                        name, participant
                    )));
                }
            }

            if activity.participants.len() > activity.max_participants {
                return Err(AppError::Configuration(format!(
                    "Activity '{}' has {} participants but room for {}",
                    name,
                    activity.participants.len(),
                    activity.max_participants
                )));
            }

            activities.insert(name, activity);
        }

        Ok(Self {
            activities: RwLock::new(activities),
        })
    }

    pub async fn list(&self) -> ActivityTable {
        self.activities.read().await.clone()
    }

    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    pub async fn count(&self) -> usize {
        self.activities.read().await.len()
    }

    /// Registers `email` for `activity_name` and returns the stored
    /// (lowercased) email.
    pub async fn signup(&self, activity_name: &str, email: &str) -> AppResult<String> {
        let mut activities = self.activities.write().await;

        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(AppError::activity_not_found)?;

        let email = normalize_email(email);

        if activity.has_participant(&email) {
            warn!("Duplicate signup of {} for {}", email, activity_name);
            return Err(AppError::already_signed_up());
        }

        if activity.is_full() {
            warn!(
                "Signup of {} rejected, {} is full ({} participants)",
                email, activity_name, activity.max_participants
            );
            return Err(AppError::activity_full());
        }

        activity.participants.push(email.clone());
        info!(
            "Signed up {} for {} ({} spots left)",
            email,
            activity_name,
            activity.spots_left()
        );

        Ok(email)
    }
}
