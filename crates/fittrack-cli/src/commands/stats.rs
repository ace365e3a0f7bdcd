use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Subcommand;
use fittrack_core::{import, stats};
use fittrack_core::{Config, FitnessState};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Workouts, minutes and calories over the trailing window
    Weekly {
        /// JSON array of workout logs, newest first
        #[arg(long)]
        logs: PathBuf,
    },
    /// Per-day calories and minutes for the trailing window
    Daily {
        /// JSON array of workout logs
        #[arg(long)]
        logs: PathBuf,
    },
    /// Progress of each goal toward its target
    Goals {
        /// JSON array of goals
        #[arg(long)]
        goals: PathBuf,
    },
    /// Most recent workouts
    Recent {
        /// JSON array of workout logs, newest first
        #[arg(long)]
        logs: PathBuf,
        /// Number of logs to show (defaults to stats.recent_limit)
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn state_with_logs(path: &Path) -> Result<FitnessState, Box<dyn std::error::Error>> {
    Ok(FitnessState {
        workout_logs: import::read_logs(path)?,
        ..Default::default()
    })
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let now = Utc::now();

    match action {
        StatsAction::Weekly { logs } => {
            let state = state_with_logs(&logs)?;
            let weekly = stats::window_stats(&state.workout_logs, now, config.stats.window_days);
            let out = serde_json::json!({
                "workouts": weekly.workouts,
                "totalMinutes": weekly.total_minutes,
                "totalCalories": weekly.total_calories,
                "avgDurationMinutes": weekly.avg_duration_minutes(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        StatsAction::Daily { logs } => {
            let state = state_with_logs(&logs)?;
            let series = stats::daily_series_for(&state.workout_logs, now, config.stats.window_days);
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
        StatsAction::Goals { goals } => {
            let goals = import::read_goals(&goals)?;
            let state = FitnessState {
                goals,
                ..Default::default()
            };
            println!("{}", serde_json::to_string_pretty(&stats::goal_progress(&state))?);
        }
        StatsAction::Recent { logs, limit } => {
            let state = state_with_logs(&logs)?;
            let limit = limit.unwrap_or(config.stats.recent_limit);
            println!(
                "{}",
                serde_json::to_string_pretty(stats::recent_workouts(&state, limit))?
            );
        }
    }
    Ok(())
}
