/// Sink for the completion alert. Patterns alternate wait/vibrate durations
/// in milliseconds, starting with a wait.
pub trait Haptics {
    fn vibrate(&self, pattern_ms: &[u64]);
}

/// Default sink: records the alert in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn vibrate(&self, pattern_ms: &[u64]) {
        tracing::info!(pattern = ?pattern_ms, "vibrate");
    }
}

/// Swallows alerts, for callers that turned vibration off.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentHaptics;

impl Haptics for SilentHaptics {
    fn vibrate(&self, _pattern_ms: &[u64]) {}
}
