// ABOUTME: Cancellable repeating timer driving the clock's once-per-interval refresh.
// ABOUTME: Runs on the Slint event loop; stops explicitly or when dropped.

use std::time::Duration;

use slint::{Timer, TimerMode};
use tracing::info;

pub struct Ticker {
    timer: Timer,
    interval: Duration,
}

impl Ticker {
    pub fn start(interval: Duration, on_tick: impl FnMut() + 'static) -> Self {
        let timer = Timer::default();
        timer.start(TimerMode::Repeated, interval, on_tick);
        info!(interval_ms = interval.as_millis() as u64, "ticker started");
        Self { timer, interval }
    }

    pub fn stop(&self) {
        if self.timer.running() {
            self.timer.stop();
            info!("ticker stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.running()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
