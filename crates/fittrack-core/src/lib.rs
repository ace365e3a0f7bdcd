//! # fittrack Core Library
//!
//! Core logic of the fittrack workout tracker. The CLI binary is a thin
//! layer over the same library, and any other front end is expected to be
//! one too.
//!
//! ## Architecture
//!
//! - **Store**: a Redux-style state container. All mutable data (timer flag,
//!   tick counter, workouts, logs, goals, body metrics) lives in one
//!   [`FitnessState`] owned by a caller-held [`FitnessStore`].
//! - **Timer**: a controller that derives display values from the store and
//!   owns a cancellable one-second tick; the caller runs the event loop.
//! - **Stats**: pure projections for progress screens.
//!
//! ## Key Components
//!
//! - [`FitnessStore`]: action surface and state owner
//! - [`TimerController`]: stopwatch / countdown tick protocol
//! - [`stats`]: weekly aggregate, daily series, goal progress
//! - [`Config`]: application configuration management

pub mod config;
pub mod error;
pub mod events;
pub mod import;
pub mod models;
pub mod stats;
pub mod store;
pub mod timer;

pub use config::Config;
pub use error::{ConfigError, CoreError};
pub use events::Event;
pub use models::{
    BodyMetric, Exercise, ExerciseCategory, ExerciseLog, FitnessGoal, GoalType, SetLog, Workout,
    WorkoutLog, WorkoutStatus,
};
pub use stats::{DailyTotals, GoalProgress, WeeklyStats};
pub use store::{Action, FitnessState, FitnessStore, TimerState};
pub use timer::{TickOutcome, TimerController, TimerMode, TimerSnapshot};
