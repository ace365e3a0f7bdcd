//! Domain records shared by the store, the selectors and the CLI.
//!
//! Field names serialize under the mobile client's wire names (camelCase,
//! with unit-less `duration`, `weight` and friends) so its exported payloads
//! deserialize without a mapping layer. The unit-suffixed spellings are
//! accepted as aliases.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Strength,
    Cardio,
    Flexibility,
    Hiit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: ExerciseCategory,
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default, rename = "weight", alias = "weightKg")]
    pub weight_kg: Option<f64>,
    #[serde(default, rename = "duration", alias = "durationSecs")]
    pub duration_secs: Option<u64>,
    pub calories: u32,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
}

/// A planned or running workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default, rename = "totalDuration", alias = "totalDurationSecs")]
    pub total_duration_secs: u64,
    #[serde(default)]
    pub total_calories: u32,
    #[serde(default)]
    pub status: WorkoutStatus,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLog {
    pub set_number: u32,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default, rename = "weight", alias = "weightKg")]
    pub weight_kg: Option<f64>,
    #[serde(default, rename = "duration", alias = "durationSecs")]
    pub duration_secs: Option<u64>,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLog {
    pub exercise_id: String,
    pub name: String,
    #[serde(default)]
    pub sets: Vec<SetLog>,
}

/// Immutable record of a finished session. Newest logs sit at the front of
/// the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub id: String,
    pub workout_id: String,
    #[serde(default)]
    pub workout_name: String,
    #[serde(rename = "duration", alias = "durationSecs")]
    pub duration_secs: u64,
    pub calories: u32,
    #[serde(default)]
    pub exercises: Vec<ExerciseLog>,
    pub completed_at: DateTime<Utc>,
}

impl WorkoutLog {
    /// Build the log for `workout` finishing now after `duration_secs`.
    pub fn for_workout(workout: &Workout, duration_secs: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            workout_id: workout.id.clone(),
            workout_name: workout.name.clone(),
            duration_secs,
            calories: workout.total_calories,
            exercises: workout
                .exercises
                .iter()
                .map(|e| ExerciseLog {
                    exercise_id: e.id.clone(),
                    name: e.name.clone(),
                    sets: Vec::new(),
                })
                .collect(),
            completed_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    WorkoutsPerWeek,
    CaloriesPerWeek,
    WeightTarget,
    StepsPerDay,
}

impl GoalType {
    pub fn label(&self) -> &'static str {
        match self {
            GoalType::WorkoutsPerWeek => "workouts per week",
            GoalType::CaloriesPerWeek => "calories per week",
            GoalType::WeightTarget => "weight target",
            GoalType::StepsPerDay => "steps per day",
        }
    }
}

/// Target/current pair. `current` is free to exceed `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessGoal {
    pub id: String,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub target: f64,
    pub current: f64,
    pub unit: String,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMetric {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default, rename = "weight", alias = "weightKg")]
    pub weight_kg: Option<f64>,
    #[serde(default, rename = "bodyFat", alias = "bodyFatPct")]
    pub body_fat_pct: Option<f64>,
    #[serde(default, rename = "muscleMass", alias = "muscleMassKg")]
    pub muscle_mass_kg: Option<f64>,
    #[serde(default)]
    pub bmr: Option<u32>,
}
