//! Clock driver for the plan-generation step.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

use super::controller::OnboardingFlowController;

/// Controller shared between the host and its clock task.
pub type SharedFlow = Arc<RwLock<OnboardingFlowController>>;

/// Feed elapsed time into the flow until the current generation completes.
///
/// Spawn this right after `advance()` lands on the terminal step. The task
/// exits on completion or when the flow leaves (or restarts) the activation it
/// was started for. Abort the handle to stop it early. The lock is released
/// before the navigator's `completed` runs, so the navigator may read the flow.
pub fn spawn_generation_ticker(flow: SharedFlow) -> JoinHandle<()> {
    tokio::spawn(async move {
        let (activation, period) = {
            let guard = flow.read().await;
            (guard.activation(), guard.config().tick_interval)
        };
        let Some(activation) = activation else {
            debug!("Flow is not generating; ticker not started");
            return;
        };

        let started = Instant::now();
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            let mut guard = flow.write().await;
            if guard.activation() != Some(activation) {
                debug!(activation, "Generation activation changed; ticker stopping");
                break;
            }
            let Some(outcome) = guard.observe(started.elapsed()) else {
                break;
            };
            if outcome.just_completed {
                let handoff = guard.handoff();
                let navigator = guard.navigator();
                drop(guard);
                if let Some(navigator) = navigator {
                    navigator.completed(&handoff);
                }
            }
            if outcome.snapshot.completed {
                break;
            }
        }
    })
}
