use clap::{Subcommand, ValueEnum};
use fittrack_core::{Config, FitnessStore, TimerController, TimerMode, TimerSnapshot, TimerState};

use super::session::{self, SessionEnd, TerminalBell};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Stopwatch,
    Countdown,
}

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run a live timer (stdin: p pause, r resume, q quit)
    Run {
        #[arg(long, value_enum, default_value = "stopwatch")]
        mode: ModeArg,
        /// Countdown length in seconds (defaults to timer.default_countdown_secs)
        #[arg(long)]
        seconds: Option<u64>,
    },
    /// Print the display derived from an elapsed counter as JSON
    Display {
        #[arg(long, value_enum, default_value = "stopwatch")]
        mode: ModeArg,
        /// Elapsed seconds
        #[arg(long)]
        elapsed: u64,
        /// Countdown length in seconds (defaults to timer.default_countdown_secs)
        #[arg(long)]
        seconds: Option<u64>,
        /// Whether the timer is running
        #[arg(long)]
        running: bool,
    },
}

pub fn resolve_mode(mode: ModeArg, seconds: Option<u64>, config: &Config) -> TimerMode {
    match mode {
        ModeArg::Stopwatch => TimerMode::Stopwatch,
        ModeArg::Countdown => TimerMode::Countdown {
            seconds: seconds.unwrap_or(config.timer.default_countdown_secs),
        },
    }
}

pub async fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        TimerAction::Run { mode, seconds } => {
            let mode = resolve_mode(mode, seconds, &config);
            let mut store = FitnessStore::new();
            let mut controller = TimerController::from_config(mode, &config);
            if config.alerts.vibration {
                controller = controller.with_haptics(TerminalBell);
            }

            // A bare timer has no workout; resuming starts the counter at 0.
            store.resume_timer();
            let end = session::drive(&mut store, &mut controller, false).await?;
            if end == SessionEnd::Completed {
                eprintln!("complete");
            }
            let snapshot = controller.snapshot(store.timer());
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        TimerAction::Display {
            mode,
            elapsed,
            seconds,
            running,
        } => {
            let mode = resolve_mode(mode, seconds, &config);
            let snapshot = TimerSnapshot::new(
                mode,
                TimerState {
                    running,
                    elapsed_seconds: elapsed,
                },
                config.timer.warning_threshold_secs,
            );
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}
