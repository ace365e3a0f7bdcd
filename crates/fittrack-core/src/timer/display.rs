//! Pure display derivations for the workout timer.

use serde::{Deserialize, Serialize};

use crate::store::TimerState;

/// How the timer presents the store's elapsed counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TimerMode {
    Stopwatch,
    Countdown { seconds: u64 },
}

impl TimerMode {
    pub fn countdown_seconds(&self) -> Option<u64> {
        match self {
            TimerMode::Stopwatch => None,
            TimerMode::Countdown { seconds } => Some(*seconds),
        }
    }
}

/// Seconds to show: elapsed for a stopwatch, remaining (floored at 0) for a
/// countdown.
pub fn compute_display(mode: TimerMode, elapsed_seconds: u64) -> u64 {
    match mode {
        TimerMode::Stopwatch => elapsed_seconds,
        TimerMode::Countdown { seconds } => seconds.saturating_sub(elapsed_seconds),
    }
}

/// Remaining share of a countdown, 0.0 ..= 100.0. A zero countdown reports 0.
pub fn compute_progress_percent(display_seconds: u64, countdown_seconds: u64) -> f64 {
    if countdown_seconds == 0 {
        return 0.0;
    }
    display_seconds as f64 / countdown_seconds as f64 * 100.0
}

/// `MM:SS`, or `HH:MM:SS` from one hour up.
pub fn format_time(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    if h > 0 {
        format!("{h:02}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}

/// Everything a view needs to draw the timer at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    #[serde(flatten)]
    pub mode: TimerMode,
    pub running: bool,
    pub elapsed_seconds: u64,
    pub display_seconds: u64,
    pub display: String,
    /// Remaining share; only meaningful for countdowns.
    pub progress_pct: f64,
    /// Elapsed share; only meaningful for countdowns.
    pub completion_pct: f64,
    /// Countdown is at or below the warning threshold.
    pub warning: bool,
}

impl TimerSnapshot {
    pub fn new(mode: TimerMode, timer: TimerState, warning_threshold_secs: u64) -> Self {
        let display_seconds = compute_display(mode, timer.elapsed_seconds);
        let (progress_pct, completion_pct, warning) = match mode {
            TimerMode::Stopwatch => (0.0, 0.0, false),
            TimerMode::Countdown { seconds } => {
                let progress = compute_progress_percent(display_seconds, seconds);
                let completion = if seconds == 0 { 100.0 } else { 100.0 - progress };
                (progress, completion, display_seconds <= warning_threshold_secs)
            }
        };
        Self {
            mode,
            running: timer.running,
            elapsed_seconds: timer.elapsed_seconds,
            display_seconds,
            display: format_time(display_seconds),
            progress_pct,
            completion_pct,
            warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn countdown_counts_down_and_floors() {
        let mode = TimerMode::Countdown { seconds: 60 };
        assert_eq!(compute_display(mode, 0), 60);
        assert_eq!(compute_display(mode, 59), 1);
        assert_eq!(compute_display(mode, 60), 0);
        assert_eq!(compute_display(mode, 500), 0);
    }

    #[test]
    fn progress_is_remaining_share() {
        assert_eq!(compute_progress_percent(60, 60), 100.0);
        assert_eq!(compute_progress_percent(30, 60), 50.0);
        assert_eq!(compute_progress_percent(0, 60), 0.0);
        assert_eq!(compute_progress_percent(0, 0), 0.0);
    }

    #[test]
    fn format_time_switches_to_hours() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(3599), "59:59");
        assert_eq!(format_time(3600), "01:00:00");
        assert_eq!(format_time(3 * 3600 + 7 * 60 + 9), "03:07:09");
    }

    #[test]
    fn snapshot_flags_warning_near_the_end() {
        let mode = TimerMode::Countdown { seconds: 60 };
        let early = TimerSnapshot::new(
            mode,
            TimerState {
                running: true,
                elapsed_seconds: 49,
            },
            10,
        );
        assert!(!early.warning);

        let late = TimerSnapshot::new(
            mode,
            TimerState {
                running: true,
                elapsed_seconds: 50,
            },
            10,
        );
        assert!(late.warning);
        assert_eq!(late.display, "00:10");
    }

    #[test]
    fn stopwatch_snapshot_has_no_progress() {
        let snap = TimerSnapshot::new(
            TimerMode::Stopwatch,
            TimerState {
                running: false,
                elapsed_seconds: 3700,
            },
            10,
        );
        assert_eq!(snap.display_seconds, 3700);
        assert_eq!(snap.display, "01:01:40");
        assert_eq!(snap.progress_pct, 0.0);
        assert!(!snap.warning);
    }

    #[test]
    fn zero_countdown_displays_zero() {
        let snap = TimerSnapshot::new(TimerMode::Countdown { seconds: 0 }, TimerState::default(), 10);
        assert_eq!(snap.display_seconds, 0);
        assert_eq!(snap.progress_pct, 0.0);
        assert_eq!(snap.completion_pct, 100.0);
    }

    #[test]
    fn snapshot_serializes_camel_case_with_flat_mode() {
        let snap = TimerSnapshot::new(
            TimerMode::Countdown { seconds: 60 },
            TimerState {
                running: true,
                elapsed_seconds: 15,
            },
            10,
        );
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["mode"], "countdown");
        assert_eq!(json["seconds"], 60);
        assert_eq!(json["elapsedSeconds"], 15);
        assert_eq!(json["displaySeconds"], 45);
        assert_eq!(json["progressPct"], 75.0);
        assert_eq!(json["completionPct"], 25.0);
        assert!(json.get("display_seconds").is_none());

        let back: TimerSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snap);
    }

    proptest! {
        #[test]
        fn stopwatch_display_is_identity(e in any::<u64>()) {
            prop_assert_eq!(compute_display(TimerMode::Stopwatch, e), e);
        }

        #[test]
        fn countdown_display_never_exceeds_target(e in any::<u64>(), c in any::<u64>()) {
            let shown = compute_display(TimerMode::Countdown { seconds: c }, e);
            prop_assert!(shown <= c);
            prop_assert_eq!(shown, c.saturating_sub(e));
        }

        #[test]
        fn countdown_progress_stays_in_range(e in 0u64..10_000, c in 1u64..10_000) {
            let shown = compute_display(TimerMode::Countdown { seconds: c }, e);
            let pct = compute_progress_percent(shown, c);
            prop_assert!((0.0..=100.0).contains(&pct));
        }
    }
}
