//! Simulated plan-generation progress.
//!
//! The terminal step does no real work. Its progress bar and step labels are
//! a pure function of the elapsed time since the step was entered, read off a
//! checkpoint schedule. The clock lives outside; it feeds elapsed durations in
//! through [`TerminalProgress::observe`].

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::GenerationConfig;

/// Progress target reached at a given offset from the start of the phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    pub at: Duration,
    pub target: f64,
}

impl Checkpoint {
    pub fn new(at: Duration, target: f64) -> Self {
        Self { at, target }
    }
}

/// A step label that becomes current at a given offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCheckpoint {
    pub at: Duration,
    pub text: String,
    pub emoji: String,
}

impl LabelCheckpoint {
    pub fn new(at: Duration, text: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            at,
            text: text.into(),
            emoji: emoji.into(),
        }
    }
}

/// Display state of one label relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelState {
    Pending,
    Current,
    Done,
}

/// Linear interpolation over `checkpoints`, starting from `(0, 0.0)`.
///
/// Holds the last target once `elapsed` passes the final checkpoint.
pub fn progress_at(checkpoints: &[Checkpoint], elapsed: Duration) -> f64 {
    let mut prev = Checkpoint::new(Duration::ZERO, 0.0);
    for cp in checkpoints {
        if elapsed < cp.at {
            let span = (cp.at - prev.at).as_secs_f64();
            let into = (elapsed - prev.at).as_secs_f64();
            return prev.target + (cp.target - prev.target) * (into / span);
        }
        prev = *cp;
    }
    prev.target
}

/// Index of the label that is current at `elapsed`.
pub fn current_label_at(labels: &[LabelCheckpoint], elapsed: Duration) -> usize {
    labels.iter().rposition(|l| l.at <= elapsed).unwrap_or(0)
}

/// Point-in-time view of the terminal step, for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    pub elapsed_ms: u64,
    /// Fill level in `[0, 1]`.
    pub progress: f64,
    pub current_label: usize,
    pub completed: bool,
}

/// Result of feeding one elapsed-time notification.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub snapshot: ProgressSnapshot,
    /// True only for the tick that crossed the completion delay.
    pub just_completed: bool,
}

/// Progress state for one activation of the terminal step.
///
/// A fresh value starts at zero elapsed time; re-entering the step builds a
/// new one.
#[derive(Debug, Clone)]
pub struct TerminalProgress {
    config: Arc<GenerationConfig>,
    elapsed: Duration,
    completed: bool,
}

impl TerminalProgress {
    pub fn new(config: Arc<GenerationConfig>) -> Self {
        Self {
            config,
            elapsed: Duration::ZERO,
            completed: false,
        }
    }

    /// Feed the elapsed time since activation.
    ///
    /// Values older than one already seen are ignored so progress never goes
    /// backwards.
    pub fn observe(&mut self, elapsed: Duration) -> TickOutcome {
        if elapsed < self.elapsed {
            warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                seen_ms = self.elapsed.as_millis() as u64,
                "Ignoring out-of-order elapsed time"
            );
        } else {
            self.elapsed = elapsed;
        }

        let just_completed = !self.completed && self.elapsed >= self.config.completion_delay;
        if just_completed {
            self.completed = true;
            info!(
                elapsed_ms = self.elapsed.as_millis() as u64,
                "Plan generation finished"
            );
        }

        let snapshot = self.snapshot();
        debug!(
            elapsed_ms = snapshot.elapsed_ms,
            progress = snapshot.progress,
            label = snapshot.current_label,
            "Generation tick"
        );

        TickOutcome {
            snapshot,
            just_completed,
        }
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            elapsed_ms: self.elapsed.as_millis() as u64,
            progress: self.progress(),
            current_label: self.current_label(),
            completed: self.completed,
        }
    }

    pub fn progress(&self) -> f64 {
        progress_at(&self.config.checkpoints, self.elapsed)
    }

    pub fn current_label(&self) -> usize {
        current_label_at(&self.config.labels, self.elapsed)
    }

    /// State of label `index`: earlier ones are done, later ones pending.
    pub fn label_state(&self, index: usize) -> LabelState {
        let current = self.current_label();
        match index.cmp(&current) {
            std::cmp::Ordering::Less => LabelState::Done,
            std::cmp::Ordering::Equal => LabelState::Current,
            std::cmp::Ordering::Greater => LabelState::Pending,
        }
    }

    pub fn labels(&self) -> &[LabelCheckpoint] {
        &self.config.labels
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
