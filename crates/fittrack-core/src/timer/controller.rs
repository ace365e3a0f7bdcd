//! Workout timer controller.
//!
//! The controller owns no counters. The store holds `running` and
//! `elapsed_seconds`; the controller derives display values from them and
//! owns the periodic tick that advances them.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle -> Armed -> (Idle | Finished)
//! ```
//!
//! `sync` arms the tick when the store is running and disarms it when the
//! store is paused. A countdown that reaches its target moves to `Finished`
//! and stays there; a new countdown needs a new controller.
//!
//! ## Usage
//!
//! ```ignore
//! let mut controller = TimerController::new(TimerMode::Countdown { seconds: 60 });
//! store.start_workout(workout);
//! controller.sync(&mut store);
//! while controller.is_armed() {
//!     controller.next_tick().await;
//!     controller.on_tick(&mut store);
//! }
//! ```

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::display::{compute_display, TimerMode, TimerSnapshot};
use super::haptics::{Haptics, LogHaptics, SilentHaptics};
use super::ticker::Ticker;
use crate::config::Config;
use crate::store::{FitnessStore, TimerState};

/// Cadence and alert settings, usually taken from [`Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct TimerSettings {
    pub tick_interval: Duration,
    pub warning_threshold_secs: u64,
    pub alert_pattern_ms: Vec<u64>,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for TimerSettings {
    fn from(config: &Config) -> Self {
        Self {
            tick_interval: Duration::from_millis(config.timer.tick_interval_ms.max(1)),
            warning_threshold_secs: config.timer.warning_threshold_secs,
            alert_pattern_ms: config.alerts.pattern_ms.clone(),
        }
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TickOutcome {
    /// The store was paused; nothing moved.
    Skipped,
    Ticked { display_seconds: u64 },
    /// The countdown reached zero on this tick.
    Completed,
}

enum Lifecycle {
    Idle,
    Armed(Ticker),
    Finished,
}

pub struct TimerController {
    mode: TimerMode,
    settings: TimerSettings,
    haptics: Box<dyn Haptics>,
    on_complete: Option<Box<dyn FnOnce()>>,
    lifecycle: Lifecycle,
}

impl TimerController {
    pub fn new(mode: TimerMode) -> Self {
        Self {
            mode,
            settings: TimerSettings::default(),
            haptics: Box::new(LogHaptics),
            on_complete: None,
            lifecycle: Lifecycle::Idle,
        }
    }

    /// Controller with cadence and alert taken from `config`. Vibration off
    /// installs a silent haptics sink.
    pub fn from_config(mode: TimerMode, config: &Config) -> Self {
        let controller = Self::new(mode).with_settings(TimerSettings::from(config));
        if config.alerts.vibration {
            controller
        } else {
            controller.with_haptics(SilentHaptics)
        }
    }

    pub fn with_settings(mut self, settings: TimerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    /// Callback run once when a countdown completes.
    pub fn with_on_complete(mut self, on_complete: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Armed(_))
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Finished)
    }

    pub fn display_seconds(&self, timer: TimerState) -> u64 {
        compute_display(self.mode, timer.elapsed_seconds)
    }

    pub fn snapshot(&self, timer: TimerState) -> TimerSnapshot {
        TimerSnapshot::new(self.mode, timer, self.settings.warning_threshold_secs)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Align the periodic tick with the store's `running` flag. Call after
    /// every dispatch that may flip it.
    ///
    /// Returns `true` if this call completed the countdown, which only
    /// happens for a zero-second countdown.
    pub fn sync(&mut self, store: &mut FitnessStore) -> bool {
        if self.is_finished() {
            return false;
        }
        let running = store.timer().running;
        if running && !self.is_armed() {
            if self.mode.countdown_seconds() == Some(0) {
                self.finish(store);
                return true;
            }
            tracing::debug!(
                period_ms = self.settings.tick_interval.as_millis() as u64,
                "tick armed"
            );
            self.lifecycle = Lifecycle::Armed(Ticker::spawn(self.settings.tick_interval));
        } else if !running && self.is_armed() {
            tracing::debug!("tick disarmed");
            self.lifecycle = Lifecycle::Idle;
        }
        false
    }

    /// Wait for the next firing of the periodic tick. Never resolves while
    /// the controller is not armed.
    pub async fn next_tick(&mut self) {
        let fired = match &mut self.lifecycle {
            Lifecycle::Armed(ticker) => ticker.tick().await.is_some(),
            _ => false,
        };
        if fired {
            return;
        }
        if self.is_armed() {
            self.lifecycle = Lifecycle::Idle;
        }
        std::future::pending::<()>().await
    }

    /// Advance the store by one second and check for countdown completion.
    pub fn on_tick(&mut self, store: &mut FitnessStore) -> TickOutcome {
        if self.is_finished() {
            return TickOutcome::Skipped;
        }
        let before = store.timer().elapsed_seconds;
        if store.tick_timer().is_none() {
            return TickOutcome::Skipped;
        }

        if let TimerMode::Countdown { seconds } = self.mode {
            if before.saturating_add(1) >= seconds {
                self.finish(store);
                return TickOutcome::Completed;
            }
        }

        TickOutcome::Ticked {
            display_seconds: self.display_seconds(store.timer()),
        }
    }

    fn finish(&mut self, store: &mut FitnessStore) {
        self.lifecycle = Lifecycle::Finished;
        store.pause_timer();
        tracing::info!(
            elapsed_seconds = store.timer().elapsed_seconds,
            "countdown complete"
        );
        self.haptics.vibrate(&self.settings.alert_pattern_ms);
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }
}

impl fmt::Debug for TimerController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lifecycle = match self.lifecycle {
            Lifecycle::Idle => "idle",
            Lifecycle::Armed(_) => "armed",
            Lifecycle::Finished => "finished",
        };
        f.debug_struct("TimerController")
            .field("mode", &self.mode)
            .field("settings", &self.settings)
            .field("lifecycle", &lifecycle)
            .field("has_on_complete", &self.on_complete.is_some())
            .finish()
    }
}
