use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ops::time_ops::parse_duration_field;

/// Lifecycle state of a single countdown run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerStatus {
    Idle,
    Running,
}

/// User-entered duration, immutable once a run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub minutes: u64,
    pub seconds: u64,
}

impl TimerConfig {
    /// Builds a config from the two free-text input fields.
    /// Malformed text degrades silently to zero; no error is raised here.
    pub fn from_input(minutes_text: &str, seconds_text: &str) -> Self {
        Self {
            minutes: parse_duration_field(minutes_text),
            seconds: parse_duration_field(seconds_text),
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.minutes.saturating_mul(60).saturating_add(self.seconds)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StartError {
    #[error("configured duration is zero")]
    ZeroDuration,
}

/// Monotonic progress source for one run: a start mark plus a fixed
/// duration, sampled with an explicit instant so the engine stays
/// deterministic under test. Dropping the clock suppresses all further
/// ticks.
#[derive(Debug, Clone, Copy)]
pub struct ProgressClock {
    started_at: Instant,
    duration: Duration,
}

impl ProgressClock {
    pub fn new(started_at: Instant, duration: Duration) -> Self {
        Self {
            started_at,
            duration,
        }
    }

    /// Normalized elapsed fraction at `now`, clamped to [0, 1].
    pub fn sample(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Read-only view of the engine for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub status: TimerStatus,
    pub progress: f32,
    pub remaining_seconds: u64,
    pub total_seconds: u64,
}

/// Owns the countdown state machine: Idle --start(total>0)--> Running
/// --cancel | completion--> Idle. A start with a zero total is rejected
/// and leaves the engine untouched.
#[derive(Debug)]
pub struct CountdownEngine {
    status: TimerStatus,
    total_seconds: u64,
    progress: f32,
    remaining_seconds: u64,
    clock: Option<ProgressClock>,
}

impl CountdownEngine {
    pub fn new() -> Self {
        Self {
            status: TimerStatus::Idle,
            total_seconds: 0,
            progress: 0.0,
            remaining_seconds: 0,
            clock: None,
        }
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            status: self.status,
            progress: self.progress,
            remaining_seconds: self.remaining_seconds,
            total_seconds: self.total_seconds,
        }
    }

    /// Begins a fresh run at `now`. Prior run state is discarded.
    pub fn start(&mut self, config: &TimerConfig, now: Instant) -> Result<(), StartError> {
        let total = config.total_seconds();
        if total == 0 {
            return Err(StartError::ZeroDuration);
        }

        self.total_seconds = total;
        self.progress = 0.0;
        self.remaining_seconds = total;
        self.clock = Some(ProgressClock::new(now, Duration::from_secs(total)));
        self.status = TimerStatus::Running;
        info!(total_seconds = total, "countdown started");
        Ok(())
    }

    /// Stops the run and restores the full configured time for the idle
    /// view. No-op when already Idle, including right after completion.
    pub fn cancel(&mut self) {
        if self.status == TimerStatus::Idle {
            return;
        }
        self.clock = None;
        self.status = TimerStatus::Idle;
        self.progress = 0.0;
        self.remaining_seconds = self.total_seconds;
        info!("countdown cancelled");
    }

    /// Samples the clock and advances the run; called once per frame
    /// while Running. Completion fires at most once because the clock is
    /// dropped with it.
    pub fn tick(&mut self, now: Instant) {
        let Some(clock) = self.clock else {
            return;
        };
        self.apply_progress(clock.sample(now));
        if self.progress >= 1.0 {
            self.complete();
        }
    }

    /// Recomputes remaining seconds from a progress value. Progress never
    /// decreases within a run.
    pub fn apply_progress(&mut self, progress: f32) {
        if self.status != TimerStatus::Running {
            return;
        }
        self.progress = progress.clamp(0.0, 1.0).max(self.progress);
        let elapsed = (self.total_seconds as f32 * self.progress).floor() as u64;
        self.remaining_seconds = self.total_seconds - elapsed;
    }

    fn complete(&mut self) {
        self.clock = None;
        self.status = TimerStatus::Idle;
        info!(total_seconds = self.total_seconds, "countdown finished");
    }
}

impl Default for CountdownEngine {
    fn default() -> Self {
        Self::new()
    }
}
