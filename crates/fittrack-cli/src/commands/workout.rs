use std::path::PathBuf;

use clap::Subcommand;
use fittrack_core::import;
use fittrack_core::{Config, FitnessStore, TimerController, TimerMode, WorkoutLog};

use super::session::{self, SessionEnd, TerminalBell};

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Start a workout from a JSON file and time it (stdin: p, r, c complete, q quit)
    Run {
        /// Workout JSON file
        file: PathBuf,
        /// Time the workout as a countdown of this many seconds
        #[arg(long)]
        countdown: Option<u64>,
    },
}

pub async fn run(action: WorkoutAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        WorkoutAction::Run { file, countdown } => {
            let config = Config::load_or_default();
            let workout = import::read_workout(&file)?;
            let mode = match countdown {
                Some(seconds) => TimerMode::Countdown { seconds },
                None => TimerMode::Stopwatch,
            };

            let mut store = FitnessStore::new();
            let mut controller = TimerController::from_config(mode, &config);
            if config.alerts.vibration {
                controller = controller.with_haptics(TerminalBell);
            }

            eprintln!("started: {}", workout.name);
            store.start_workout(workout);
            let end = session::drive(&mut store, &mut controller, true).await?;
            if end == SessionEnd::Quit {
                eprintln!("workout abandoned");
                return Ok(());
            }

            let active = store
                .state()
                .active_workout
                .clone()
                .ok_or("no active workout")?;
            let log = WorkoutLog::for_workout(&active, store.timer().elapsed_seconds);
            store.complete_workout(log.clone());
            println!("{}", serde_json::to_string_pretty(&log)?);
        }
    }
    Ok(())
}
