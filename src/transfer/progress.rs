// Cosmetic progress bar for a transfer estimate. The caller owns the
// simulation value and drives it from its own timer.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProgressSettings {
    /// Longest simulated run regardless of the real estimate
    #[serde(default = "default_cap_seconds")]
    pub cap_seconds: f64,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_cap_seconds() -> f64 {
    20.0
}

fn default_tick_ms() -> u64 {
    100
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            cap_seconds: default_cap_seconds(),
            tick_ms: default_tick_ms(),
        }
    }
}

/// How long the bar runs and how often it moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressPlan {
    pub duration: Duration,
    pub tick: Duration,
}

impl ProgressPlan {
    /// Runs for the estimate, but never under 1s or over the cap.
    pub fn new(estimated_seconds: f64, settings: &ProgressSettings) -> Self {
        let cap = if settings.cap_seconds.is_finite() {
            settings.cap_seconds.max(1.0)
        } else {
            default_cap_seconds()
        };
        let seconds = if estimated_seconds.is_nan() {
            1.0
        } else {
            estimated_seconds.clamp(1.0, cap)
        };
        Self {
            duration: Duration::from_secs_f64(seconds),
            tick: Duration::from_millis(settings.tick_ms.max(1)),
        }
    }

    /// Percent complete after `elapsed`, clamped to 100
    pub fn percent_at(&self, elapsed: Duration) -> f64 {
        let pct = elapsed.as_secs_f64() / self.duration.as_secs_f64() * 100.0;
        pct.min(100.0)
    }
}

/// A running bar. `tick` advances one interval and reports the new percentage.
#[derive(Debug, Clone)]
pub struct ProgressSimulation {
    plan: ProgressPlan,
    elapsed: Duration,
    finished: bool,
}

impl ProgressSimulation {
    pub fn new(plan: ProgressPlan) -> Self {
        Self {
            plan,
            elapsed: Duration::ZERO,
            finished: false,
        }
    }

    pub fn plan(&self) -> &ProgressPlan {
        &self.plan
    }

    pub fn percent(&self) -> f64 {
        self.plan.percent_at(self.elapsed)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns `None` once the bar has reached 100
    pub fn tick(&mut self) -> Option<f64> {
        if self.finished {
            return None;
        }
        self.elapsed += self.plan.tick;
        let pct = self.percent();
        if pct >= 100.0 {
            self.finished = true;
        }
        Some(pct)
    }

    /// Back to an empty bar, as when the user switches tabs or starts over
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.finished = false;
    }
}

impl Iterator for ProgressSimulation {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.tick()
    }
}
