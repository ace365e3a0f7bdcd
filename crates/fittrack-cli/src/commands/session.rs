//! Live timer session shared by `timer run` and `workout run`.
//!
//! One task owns the store and the controller and selects between the
//! periodic tick and stdin commands, so every mutation happens on this loop.
//! Live status and the bell go to stderr; stdout carries only the final JSON.

use std::io::Write;

use fittrack_core::timer::Haptics;
use fittrack_core::{FitnessStore, TickOutcome, TimerController};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Rings the terminal bell once per vibration pulse.
pub struct TerminalBell;

impl Haptics for TerminalBell {
    fn vibrate(&self, pattern_ms: &[u64]) {
        let pulses = pattern_ms.iter().skip(1).step_by(2).count().max(1);
        eprint!("{}", "\x07".repeat(pulses));
        let _ = std::io::stderr().flush();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Countdown reached zero.
    Completed,
    /// User finished the workout with `c`.
    Finished,
    /// User quit with `q`.
    Quit,
}

fn print_status(store: &FitnessStore, controller: &TimerController) {
    let snap = controller.snapshot(store.timer());
    let state = if snap.running { "running" } else { "paused" };
    match controller.mode().countdown_seconds() {
        Some(_) => {
            let marker = if snap.warning { " !" } else { "" };
            eprintln!(
                "{}{marker}  {state}  {:.0}%",
                snap.display, snap.progress_pct
            );
        }
        None => eprintln!("{}  {state}", snap.display),
    }
}

/// Run until the countdown completes or the user ends the session.
///
/// Commands on stdin: `p` pause, `r` resume, `q` quit, and `c` complete
/// when `allow_finish` is set.
pub async fn drive(
    store: &mut FitnessStore,
    controller: &mut TimerController,
    allow_finish: bool,
) -> Result<SessionEnd, Box<dyn std::error::Error>> {
    if controller.sync(store) {
        print_status(store, controller);
        return Ok(SessionEnd::Completed);
    }
    print_status(store, controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            _ = controller.next_tick() => {
                match controller.on_tick(store) {
                    TickOutcome::Completed => {
                        print_status(store, controller);
                        return Ok(SessionEnd::Completed);
                    }
                    TickOutcome::Ticked { .. } => print_status(store, controller),
                    TickOutcome::Skipped => {}
                }
            }
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line? else {
                    stdin_open = false;
                    if !controller.is_armed() {
                        return Ok(SessionEnd::Quit);
                    }
                    continue;
                };
                match line.trim() {
                    "p" => {
                        store.pause_timer();
                        controller.sync(store);
                        print_status(store, controller);
                    }
                    "r" => {
                        store.resume_timer();
                        if controller.sync(store) {
                            return Ok(SessionEnd::Completed);
                        }
                        print_status(store, controller);
                    }
                    "q" => return Ok(SessionEnd::Quit),
                    "c" if allow_finish => return Ok(SessionEnd::Finished),
                    "" => {}
                    other => tracing::warn!(command = other, "unknown command"),
                }
            }
        }
    }
}
