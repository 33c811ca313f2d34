//! Application state that receives the committed activity.
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentActivity {
    pub activity: String,
    pub updated_at: DateTime<Utc>,
}

/// Shared holder for the "current activity" the rest of the app reads.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    current: Arc<Mutex<Option<CurrentActivity>>>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_activity(&self, activity: String) {
        info!("Current activity set to '{}'", activity);
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = Some(CurrentActivity {
            activity,
            updated_at: Utc::now(),
        });
    }

    pub fn current(&self) -> Option<CurrentActivity> {
        self.current
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
