//! Reading JSON payloads exported by the mobile client: workouts, workout
//! logs and goals.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{CoreError, Result};
use crate::models::{FitnessGoal, Workout, WorkoutLog};

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| CoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

pub fn read_workout(path: &Path) -> Result<Workout> {
    read_json(path)
}

/// Logs are expected newest first, as the store keeps them.
pub fn read_logs(path: &Path) -> Result<Vec<WorkoutLog>> {
    let mut logs: Vec<WorkoutLog> = read_json(path)?;
    if !logs.windows(2).all(|w| w[0].completed_at >= w[1].completed_at) {
        tracing::debug!(count = logs.len(), "reordering logs newest first");
        logs.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    }
    Ok(logs)
}

pub fn read_goals(path: &Path) -> Result<Vec<FitnessGoal>> {
    read_json(path)
}
