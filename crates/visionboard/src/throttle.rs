/// Frame pacing for the layout loop.
///
/// The host's render callback may fire at any rate; the layout advances at most once per
/// `interval_ms`. Ticks that arrive early are dropped, not queued, and the stepper is never scaled by
/// elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameThrottle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl Default for FrameThrottle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL_MS)
    }
}

impl FrameThrottle {
    /// ~60 Hz.
    pub const DEFAULT_INTERVAL_MS: f64 = 16.0;

    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Starts measuring from `now_ms` without stepping, like a loop that was just mounted.
    pub fn start(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    /// Whether a step should run at `now_ms`. Marks the frame as consumed when it returns `true`.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        let Some(last) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return false;
        };
        if now_ms - last > self.interval_ms {
            self.last_ms = Some(now_ms);
            true
        } else {
            false
        }
    }
}
