// pacing.rs - Fixed-cadence stepping on top of a frame callback

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(500);

/// Cancels a running pacing loop. Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// What a frame callback should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pace {
    /// First frame seen; the clock starts here.
    Primed,
    /// The step interval has not elapsed yet.
    Waiting,
    /// Run exactly one generation.
    Step,
    /// The loop was stopped; do not request another frame.
    Stopped,
}

impl Pace {
    pub fn keeps_running(self) -> bool {
        self != Pace::Stopped
    }
}

/// Turns display-rate frame timestamps into steps at a fixed interval.
///
/// Timestamps are offsets from any monotonic origin and must never go
/// backwards. However many frames arrive inside one interval, at most one
/// of them yields [`Pace::Step`].
#[derive(Debug)]
pub struct PacingLoop {
    interval: Duration,
    last_step: Option<Duration>,
    stop: StopHandle,
}

impl Default for PacingLoop {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_INTERVAL)
    }
}

impl PacingLoop {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_step: None,
            stop: StopHandle::default(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn poll(&mut self, timestamp: Duration) -> Pace {
        if self.stop.is_stopped() {
            return Pace::Stopped;
        }

        let Some(last_step) = self.last_step else {
            self.last_step = Some(timestamp);
            return Pace::Primed;
        };

        if timestamp.saturating_sub(last_step) > self.interval {
            self.last_step = Some(timestamp);
            Pace::Step
        } else {
            Pace::Waiting
        }
    }
}
