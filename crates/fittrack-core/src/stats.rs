//! Progress projections over a state snapshot.
//!
//! Pure functions: every one takes the state (and `now` where time matters)
//! and recomputes from scratch. Nothing is cached.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{FitnessGoal, WorkoutLog};
use crate::store::FitnessState;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Aggregate over the trailing window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    pub workouts: usize,
    pub total_minutes: u64,
    pub total_calories: u64,
}

impl WeeklyStats {
    pub fn avg_duration_minutes(&self) -> f64 {
        if self.workouts == 0 {
            return 0.0;
        }
        self.total_minutes as f64 / self.workouts as f64
    }
}

/// One calendar day of activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotals {
    pub date: NaiveDate,
    /// Single-letter weekday, Sunday first: S M T W T F S.
    pub label: String,
    pub calories: u64,
    pub minutes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub label: String,
    pub current: f64,
    pub target: f64,
    pub unit: String,
    /// Capped at 100.
    pub percent: f64,
}

fn seconds_to_minutes(seconds: u64) -> u64 {
    (seconds as f64 / 60.0).round() as u64
}

/// Logs completed strictly after `now - window_days`.
fn in_window<'a>(
    logs: &'a [WorkoutLog],
    now: DateTime<Utc>,
    window_days: u32,
) -> impl Iterator<Item = &'a WorkoutLog> {
    let since = now
        .checked_sub_signed(Duration::days(i64::from(window_days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    logs.iter().filter(move |l| l.completed_at > since)
}

pub fn weekly_stats(state: &FitnessState, now: DateTime<Utc>) -> WeeklyStats {
    window_stats(&state.workout_logs, now, DEFAULT_WINDOW_DAYS)
}

/// Count, rounded minutes and calories of logs inside the trailing window.
pub fn window_stats(logs: &[WorkoutLog], now: DateTime<Utc>, window_days: u32) -> WeeklyStats {
    let (workouts, seconds, calories) = in_window(logs, now, window_days).fold(
        (0usize, 0u64, 0u64),
        |(n, secs, cals), l| {
            (
                n + 1,
                secs.saturating_add(l.duration_secs),
                cals.saturating_add(u64::from(l.calories)),
            )
        },
    );
    WeeklyStats {
        workouts,
        total_minutes: seconds_to_minutes(seconds),
        total_calories: calories,
    }
}

fn weekday_letter(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun | Weekday::Sat => "S",
        Weekday::Mon => "M",
        Weekday::Tue | Weekday::Thu => "T",
        Weekday::Wed => "W",
        Weekday::Fri => "F",
    }
}

/// Seven UTC calendar days ending with today, oldest first.
pub fn daily_series(state: &FitnessState, now: DateTime<Utc>) -> Vec<DailyTotals> {
    daily_series_for(&state.workout_logs, now, DEFAULT_WINDOW_DAYS)
}

pub fn daily_series_for(logs: &[WorkoutLog], now: DateTime<Utc>, days: u32) -> Vec<DailyTotals> {
    let today = now.date_naive();
    (0..days)
        .rev()
        .filter_map(|back| {
            let date = today.checked_sub_signed(Duration::days(i64::from(back)))?;
            let (calories, seconds) = logs
                .iter()
                .filter(|l| l.completed_at.date_naive() == date)
                .fold((0u64, 0u64), |(cals, secs), l| {
                    (
                        cals.saturating_add(u64::from(l.calories)),
                        secs.saturating_add(l.duration_secs),
                    )
                });
            Some(DailyTotals {
                date,
                label: weekday_letter(date.weekday()).to_string(),
                calories,
                minutes: seconds_to_minutes(seconds),
            })
        })
        .collect()
}

/// Share of target reached, capped at 100. A non-positive target reports 0.
pub fn goal_percent(goal: &FitnessGoal) -> f64 {
    if goal.target <= 0.0 {
        return 0.0;
    }
    (goal.current / goal.target * 100.0).min(100.0)
}

pub fn goal_progress(state: &FitnessState) -> Vec<GoalProgress> {
    state
        .goals
        .iter()
        .map(|g| GoalProgress {
            goal_id: g.id.clone(),
            label: g.goal_type.label().to_string(),
            current: g.current,
            target: g.target,
            unit: g.unit.clone(),
            percent: goal_percent(g),
        })
        .collect()
}

/// Newest `limit` logs.
pub fn recent_workouts(state: &FitnessState, limit: usize) -> &[WorkoutLog] {
    let end = limit.min(state.workout_logs.len());
    &state.workout_logs[..end]
}
