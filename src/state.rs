use crate::config::Config;
use crate::error::AppResult;
use crate::seed;
use crate::store::ActivityStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub activities: Arc<ActivityStore>,
    pub started_at: DateTime<Utc>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config, activities: ActivityStore) -> Self {
        Self {
            config,
            activities: Arc::new(activities),
            started_at: Utc::now(),
            start_time: Instant::now(),
        }
    }

    /// Seeds the activity table from the configured file, or the built-in
    /// activities when none is set.
    pub fn from_config(config: Config) -> AppResult<Self> {
        let table = match &config.activities_seed_path {
            Some(path) => seed::load_activities(path)?,
            None => seed::default_activities(),
        };

        let activities = ActivityStore::new(table)?;
        Ok(Self::new(config, activities))
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
