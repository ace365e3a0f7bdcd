use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every effective state change in the store produces an Event.
/// Dispatches that leave the state untouched produce none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    WorkoutStarted {
        workout_id: String,
        at: DateTime<Utc>,
    },
    TimerPaused {
        elapsed_seconds: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        elapsed_seconds: u64,
        at: DateTime<Utc>,
    },
    TimerTicked {
        elapsed_seconds: u64,
    },
    WorkoutCompleted {
        log_id: String,
        workout_id: String,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    GoalUpdated {
        goal_id: String,
        previous: f64,
        current: f64,
        at: DateTime<Utc>,
    },
    GoalAdded {
        goal_id: String,
        at: DateTime<Utc>,
    },
    BodyMetricAdded {
        metric_id: String,
        at: DateTime<Utc>,
    },
}
