mod controller;
mod display;
mod haptics;
mod ticker;

pub use controller::{TickOutcome, TimerController, TimerSettings};
pub use display::{
    compute_display, compute_progress_percent, format_time, TimerMode, TimerSnapshot,
};
pub use haptics::{Haptics, LogHaptics, SilentHaptics};
pub use ticker::Ticker;
