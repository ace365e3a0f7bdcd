//! Fitness state store.
//!
//! A Redux-style container: the whole state is one plain value, every change
//! goes through [`Action`] and the reducer, and nothing global is involved.
//! Callers own a [`FitnessStore`] and pass it where it is needed.
//!
//! ## Action surface
//!
//! ```text
//! StartWorkout -> (PauseTimer | ResumeTimer | TickTimer | LogSet)* -> CompleteWorkout
//! UpdateGoal | AddGoal | AddBodyMetric   (any time)
//! ```
//!
//! Every reducer is total. [`FitnessStore::dispatch`] returns the [`Event`]
//! describing the change, or `None` when the action left the state untouched.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::models::{BodyMetric, FitnessGoal, SetLog, Workout, WorkoutLog, WorkoutStatus};

/// Timer slice of the store. `elapsed_seconds` only moves while `running`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub running: bool,
    pub elapsed_seconds: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessState {
    pub active_workout: Option<Workout>,
    /// Newest first.
    pub workout_logs: Vec<WorkoutLog>,
    pub goals: Vec<FitnessGoal>,
    /// Newest first.
    pub body_metrics: Vec<BodyMetric>,
    pub timer: TimerState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    StartWorkout(Workout),
    PauseTimer,
    ResumeTimer,
    TickTimer,
    LogSet { exercise_id: String, set_log: SetLog },
    CompleteWorkout(WorkoutLog),
    UpdateGoal { id: String, current: f64 },
    AddGoal(FitnessGoal),
    AddBodyMetric(BodyMetric),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::StartWorkout(_) => "start_workout",
            Action::PauseTimer => "pause_timer",
            Action::ResumeTimer => "resume_timer",
            Action::TickTimer => "tick_timer",
            Action::LogSet { .. } => "log_set",
            Action::CompleteWorkout(_) => "complete_workout",
            Action::UpdateGoal { .. } => "update_goal",
            Action::AddGoal(_) => "add_goal",
            Action::AddBodyMetric(_) => "add_body_metric",
        }
    }
}

/// Apply `action` to `state` in place.
pub fn reduce(state: &mut FitnessState, action: Action) -> Option<Event> {
    match action {
        Action::StartWorkout(mut workout) => {
            workout.status = WorkoutStatus::InProgress;
            let workout_id = workout.id.clone();
            state.active_workout = Some(workout);
            state.timer = TimerState {
                running: true,
                elapsed_seconds: 0,
            };
            tracing::info!(workout_id = %workout_id, "workout started");
            Some(Event::WorkoutStarted {
                workout_id,
                at: Utc::now(),
            })
        }
        Action::PauseTimer => {
            if !state.timer.running {
                return None;
            }
            state.timer.running = false;
            Some(Event::TimerPaused {
                elapsed_seconds: state.timer.elapsed_seconds,
                at: Utc::now(),
            })
        }
        Action::ResumeTimer => {
            if state.timer.running {
                return None;
            }
            state.timer.running = true;
            Some(Event::TimerResumed {
                elapsed_seconds: state.timer.elapsed_seconds,
                at: Utc::now(),
            })
        }
        Action::TickTimer => {
            if !state.timer.running {
                return None;
            }
            state.timer.elapsed_seconds += 1;
            Some(Event::TimerTicked {
                elapsed_seconds: state.timer.elapsed_seconds,
            })
        }
        Action::LogSet { exercise_id, set_log } => {
            // Accepted but not applied: set tracking has no defined effect yet.
            tracing::debug!(
                exercise_id = %exercise_id,
                set_number = set_log.set_number,
                "log_set ignored"
            );
            None
        }
        Action::CompleteWorkout(log) => {
            let event = Event::WorkoutCompleted {
                log_id: log.id.clone(),
                workout_id: log.workout_id.clone(),
                duration_secs: log.duration_secs,
                at: log.completed_at,
            };
            tracing::info!(
                workout_id = %log.workout_id,
                duration_secs = log.duration_secs,
                "workout completed"
            );
            state.workout_logs.insert(0, log);
            state.active_workout = None;
            state.timer = TimerState::default();
            Some(event)
        }
        Action::UpdateGoal { id, current } => {
            let goal = state.goals.iter_mut().find(|g| g.id == id)?;
            let previous = goal.current;
            goal.current = current;
            Some(Event::GoalUpdated {
                goal_id: id,
                previous,
                current,
                at: Utc::now(),
            })
        }
        Action::AddGoal(goal) => {
            let goal_id = goal.id.clone();
            state.goals.push(goal);
            Some(Event::GoalAdded {
                goal_id,
                at: Utc::now(),
            })
        }
        Action::AddBodyMetric(metric) => {
            let metric_id = metric.id.clone();
            state.body_metrics.insert(0, metric);
            Some(Event::BodyMetricAdded {
                metric_id,
                at: Utc::now(),
            })
        }
    }
}

/// Owner of the authoritative [`FitnessState`].
#[derive(Debug, Clone, Default)]
pub struct FitnessStore {
    state: FitnessState,
}

impl FitnessStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &FitnessState {
        &self.state
    }

    pub fn timer(&self) -> TimerState {
        self.state.timer
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn dispatch(&mut self, action: Action) -> Option<Event> {
        let name = action.name();
        let event = reduce(&mut self.state, action);
        if !matches!(event, Some(Event::TimerTicked { .. })) {
            tracing::debug!(action = name, changed = event.is_some(), "dispatch");
        }
        event
    }

    pub fn start_workout(&mut self, workout: Workout) -> Option<Event> {
        self.dispatch(Action::StartWorkout(workout))
    }

    pub fn pause_timer(&mut self) -> Option<Event> {
        self.dispatch(Action::PauseTimer)
    }

    pub fn resume_timer(&mut self) -> Option<Event> {
        self.dispatch(Action::ResumeTimer)
    }

    pub fn tick_timer(&mut self) -> Option<Event> {
        self.dispatch(Action::TickTimer)
    }

    pub fn log_set(&mut self, exercise_id: impl Into<String>, set_log: SetLog) -> Option<Event> {
        self.dispatch(Action::LogSet {
            exercise_id: exercise_id.into(),
            set_log,
        })
    }

    pub fn complete_workout(&mut self, log: WorkoutLog) -> Option<Event> {
        self.dispatch(Action::CompleteWorkout(log))
    }

    /// Returns `None` when no goal has `id`; the state is left as it was.
    pub fn update_goal(&mut self, id: impl Into<String>, current: f64) -> Option<Event> {
        self.dispatch(Action::UpdateGoal {
            id: id.into(),
            current,
        })
    }

    pub fn add_goal(&mut self, goal: FitnessGoal) -> Option<Event> {
        self.dispatch(Action::AddGoal(goal))
    }

    pub fn add_body_metric(&mut self, metric: BodyMetric) -> Option<Event> {
        self.dispatch(Action::AddBodyMetric(metric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalType;
    use chrono::{NaiveDate, TimeZone};

    fn workout(id: &str) -> Workout {
        Workout {
            id: id.into(),
            name: "Full body".into(),
            exercises: vec![],
            total_duration_secs: 1200,
            total_calories: 180,
            status: WorkoutStatus::Planned,
            completed_at: None,
            notes: None,
        }
    }

    fn log(id: &str) -> WorkoutLog {
        WorkoutLog {
            id: id.into(),
            workout_id: "w1".into(),
            workout_name: "Full body".into(),
            duration_secs: 1260,
            calories: 190,
            exercises: vec![],
            completed_at: Utc.with_ymd_and_hms(2026, 10, 14, 18, 0, 0).unwrap(),
        }
    }

    fn goal(id: &str, target: f64, current: f64) -> FitnessGoal {
        FitnessGoal {
            id: id.into(),
            goal_type: GoalType::WorkoutsPerWeek,
            target,
            current,
            unit: "workouts".into(),
            deadline: None,
        }
    }

    #[test]
    fn start_workout_marks_in_progress_and_runs_timer() {
        let mut store = FitnessStore::new();
        store.state.timer.elapsed_seconds = 42;

        let event = store.start_workout(workout("w1"));

        assert!(matches!(event, Some(Event::WorkoutStarted { .. })));
        let active = store.state().active_workout.as_ref().unwrap();
        assert_eq!(active.status, WorkoutStatus::InProgress);
        assert_eq!(
            store.timer(),
            TimerState {
                running: true,
                elapsed_seconds: 0
            }
        );
    }

    #[test]
    fn tick_only_counts_while_running() {
        let mut store = FitnessStore::new();
        assert!(store.tick_timer().is_none());
        assert_eq!(store.timer().elapsed_seconds, 0);

        store.start_workout(workout("w1"));
        store.tick_timer();
        store.tick_timer();
        store.pause_timer();
        store.tick_timer();
        assert_eq!(store.timer().elapsed_seconds, 2);

        store.resume_timer();
        store.tick_timer();
        assert_eq!(store.timer().elapsed_seconds, 3);
    }

    #[test]
    fn pause_is_idempotent() {
        let mut store = FitnessStore::new();
        store.start_workout(workout("w1"));
        store.tick_timer();

        assert!(store.pause_timer().is_some());
        let once = store.state().clone();
        assert!(store.pause_timer().is_none());
        assert_eq!(store.state(), &once);
    }

    #[test]
    fn complete_workout_prepends_and_resets_timer() {
        let mut store = FitnessStore::new();
        store.complete_workout(log("older"));
        store.start_workout(workout("w1"));
        store.tick_timer();

        store.complete_workout(log("newer"));

        let state = store.state();
        assert_eq!(state.workout_logs[0], log("newer"));
        assert_eq!(state.workout_logs[1].id, "older");
        assert!(state.active_workout.is_none());
        assert_eq!(state.timer, TimerState::default());
    }

    #[test]
    fn update_goal_sets_current_and_ignores_unknown_ids() {
        let mut store = FitnessStore::new();
        store.add_goal(goal("g1", 10.0, 3.0));

        let event = store.update_goal("g1", 7.0);
        assert!(matches!(
            event,
            Some(Event::GoalUpdated { previous, current, .. }) if previous == 3.0 && current == 7.0
        ));
        assert_eq!(store.state().goals[0].current, 7.0);

        let before = store.state().clone();
        assert!(store.update_goal("missing", 5.0).is_none());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn goal_current_may_exceed_target() {
        let mut store = FitnessStore::new();
        store.add_goal(goal("g1", 4.0, 0.0));
        store.update_goal("g1", 6.0);
        assert_eq!(store.state().goals[0].current, 6.0);
    }

    #[test]
    fn goals_append_metrics_prepend() {
        let mut store = FitnessStore::new();
        store.add_goal(goal("g1", 1.0, 0.0));
        store.add_goal(goal("g2", 1.0, 0.0));
        for id in ["m1", "m2"] {
            store.add_body_metric(BodyMetric {
                id: id.into(),
                date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
                weight_kg: Some(80.0),
                body_fat_pct: None,
                muscle_mass_kg: None,
                bmr: None,
            });
        }

        let state = store.state();
        assert_eq!(state.goals[0].id, "g1");
        assert_eq!(state.goals[1].id, "g2");
        assert_eq!(state.body_metrics[0].id, "m2");
        assert_eq!(state.body_metrics[1].id, "m1");
    }

    #[test]
    fn log_set_leaves_state_untouched() {
        let mut store = FitnessStore::new();
        store.start_workout(workout("w1"));
        let before = store.state().clone();

        let event = store.log_set(
            "e1",
            SetLog {
                set_number: 1,
                reps: Some(10),
                weight_kg: Some(20.0),
                duration_secs: None,
                completed: true,
            },
        );

        assert!(event.is_none());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn actions_deserialize_from_tagged_json() {
        let action: Action =
            serde_json::from_str(r#"{"type":"update_goal","payload":{"id":"g1","current":2.0}}"#)
                .unwrap();
        assert_eq!(
            action,
            Action::UpdateGoal {
                id: "g1".into(),
                current: 2.0
            }
        );
        let action: Action = serde_json::from_str(r#"{"type":"pause_timer"}"#).unwrap();
        assert_eq!(action, Action::PauseTimer);
    }
}
