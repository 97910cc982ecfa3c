//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;
use crate::onboarding::progress::{Checkpoint, LabelCheckpoint};

/// Timing of the simulated "generating plan" phase.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Progress checkpoints, ordered by offset. An implicit `(0, 0.0)` origin precedes them.
    pub checkpoints: Vec<Checkpoint>,
    /// Step labels, ordered by offset. The first one must start at zero.
    pub labels: Vec<LabelCheckpoint>,
    /// Elapsed time after which the phase signals completion.
    pub completion_delay: Duration,
    /// Period of the clock driver that feeds elapsed time into the controller.
    pub tick_interval: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let checkpoints = [
            (500, 0.22),
            (2_300, 0.25),
            (2_600, 0.33),
            (3_100, 0.34),
            (3_800, 0.58),
            (6_000, 0.60),
            (6_400, 0.74),
            (6_700, 0.75),
            (7_300, 0.88),
            (8_700, 0.90),
            (9_000, 1.0),
        ]
        .into_iter()
        .map(|(ms, target)| Checkpoint::new(Duration::from_millis(ms), target))
        .collect();

        let labels = [
            (0, "Daten werden analysiert...", "📊"),
            (2_800, "Rasse-Eigenschaften werden berücksichtigt...", "🐕"),
            (5_600, "Trainingsplan wird erstellt...", "📋"),
            (8_300, "Fast fertig...", "✨"),
        ]
        .into_iter()
        .map(|(ms, text, emoji)| LabelCheckpoint::new(Duration::from_millis(ms), text, emoji))
        .collect();

        Self {
            checkpoints,
            labels,
            completion_delay: Duration::from_secs(10),
            tick_interval: Duration::from_millis(50),
        }
    }
}

impl GenerationConfig {
    /// Check the schedules for ordering and range problems.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(last) = self.checkpoints.last() else {
            return Err(ConfigError::invalid("checkpoints", "at least one checkpoint is required"));
        };

        let mut prev_at = Duration::ZERO;
        let mut prev_target = 0.0;
        for (i, cp) in self.checkpoints.iter().enumerate() {
            if !(0.0..=1.0).contains(&cp.target) {
                return Err(ConfigError::invalid(
                    "checkpoints",
                    format!("checkpoint {i} target {} is outside [0, 1]", cp.target),
                ));
            }
            if cp.at <= prev_at {
                return Err(ConfigError::invalid(
                    "checkpoints",
                    format!("checkpoint {i} offset {:?} does not increase", cp.at),
                ));
            }
            if cp.target < prev_target {
                return Err(ConfigError::invalid(
                    "checkpoints",
                    format!("checkpoint {i} target {} decreases", cp.target),
                ));
            }
            prev_at = cp.at;
            prev_target = cp.target;
        }

        if last.target != 1.0 {
            return Err(ConfigError::invalid("checkpoints", "last checkpoint must reach 1.0"));
        }

        match self.labels.first() {
            None => return Err(ConfigError::invalid("labels", "at least one label is required")),
            Some(first) if !first.at.is_zero() => {
                return Err(ConfigError::invalid("labels", "first label must start at zero"));
            }
            Some(_) => {}
        }
        if self.labels.windows(2).any(|w| w[1].at <= w[0].at) {
            return Err(ConfigError::invalid("labels", "label offsets must increase"));
        }

        if self.completion_delay < last.at {
            return Err(ConfigError::invalid(
                "completion_delay",
                format!(
                    "{:?} is earlier than the last checkpoint at {:?}",
                    self.completion_delay, last.at
                ),
            ));
        }

        if self.tick_interval.is_zero() {
            return Err(ConfigError::invalid("tick_interval", "must be non-zero"));
        }

        Ok(())
    }
}
