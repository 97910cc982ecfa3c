//! OnboardingFlowController — sequences the steps, gates progression on the
//! collected answers, and runs the simulated plan generation at the end.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::GenerationConfig;
use crate::error::{Result, ValidationError};

use super::model::{Answer, OnboardingAnswers};
use super::ports::{Handoff, ImagePicker, Navigator};
use super::progress::{ProgressSnapshot, TerminalProgress, TickOutcome};
use super::state::{STEP_COUNT, STEPS, StepDefinition, StepId, TERMINAL_ORDINAL};

/// Drives one user through the onboarding steps.
///
/// All operations are synchronous except [`pick_photo`](Self::pick_photo),
/// which awaits the platform picker. The host serializes calls; share the
/// controller behind a lock when a clock task needs to reach it.
pub struct OnboardingFlowController {
    session_id: Uuid,
    config: Arc<GenerationConfig>,
    ordinal: usize,
    answers: OnboardingAnswers,
    /// Present only while the terminal step is active.
    generation: Option<TerminalProgress>,
    /// Incremented on every entry into the terminal step.
    activation: u64,
    navigator: Option<Arc<dyn Navigator>>,
}

impl OnboardingFlowController {
    /// Start a new flow on the first step with the default generation timing.
    pub fn new() -> Self {
        Self::build(GenerationConfig::default())
    }

    /// Start a new flow with custom generation timing.
    pub fn with_config(config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GenerationConfig) -> Self {
        let session_id = Uuid::new_v4();
        info!(session_id = %session_id, "Onboarding flow started");
        Self {
            session_id,
            config: Arc::new(config),
            ordinal: 0,
            answers: OnboardingAnswers::default(),
            generation: None,
            activation: 0,
            navigator: None,
        }
    }

    /// Attach the collaborator that receives routing signals.
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn current_step(&self) -> &'static StepDefinition {
        &STEPS[self.ordinal]
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn is_terminal(&self) -> bool {
        self.ordinal == TERMINAL_ORDINAL
    }

    /// Answers recorded so far, including those of steps the user went back from.
    pub fn answers(&self) -> &OnboardingAnswers {
        &self.answers
    }

    /// Write one answer. Values are stored as given; validation waits for `advance()`.
    pub fn record_answer(&mut self, answer: Answer) {
        debug!(
            session_id = %self.session_id,
            step = %self.current_step().id,
            field = %answer.field(),
            "Answer recorded"
        );
        self.answers.apply(answer);
    }

    /// Flip one behavior issue in or out of the selection. Returns the new membership.
    pub fn toggle_behavior_issue(&mut self, id: &str) -> bool {
        let selected = self.answers.toggle_behavior_issue(id);
        debug!(session_id = %self.session_id, issue = id, selected, "Behavior issue toggled");
        selected
    }

    /// Ask the picker for a photo. A cancelled pick leaves the current photo untouched.
    pub async fn pick_photo(&mut self, picker: &dyn ImagePicker) -> bool {
        match picker.pick_image().await {
            Some(photo) => {
                self.record_answer(Answer::DogPhoto(photo));
                true
            }
            None => {
                debug!(session_id = %self.session_id, "Photo pick cancelled");
                false
            }
        }
    }

    /// Whether the current step's answer qualifies. The terminal step always does.
    pub fn can_advance(&self) -> bool {
        self.current_step().validate(&self.answers).is_ok()
    }

    /// Move to the next step if the current one is satisfied.
    ///
    /// On the terminal step this succeeds without moving. On failure nothing changes.
    pub fn advance(&mut self) -> std::result::Result<StepId, ValidationError> {
        let step = self.current_step();
        if let Err(e) = step.validate(&self.answers) {
            warn!(session_id = %self.session_id, step = %step.id, error = %e, "Advance rejected");
            return Err(e);
        }
        Ok(self.step_forward())
    }

    /// Leave a skippable step without answering it. Other steps behave like `advance()`.
    pub fn skip(&mut self) -> std::result::Result<StepId, ValidationError> {
        if self.current_step().skippable {
            debug!(session_id = %self.session_id, step = %self.current_step().id, "Step skipped");
            return Ok(self.step_forward());
        }
        self.advance()
    }

    /// Go back one step, keeping every recorded answer. Stays put on the first step.
    pub fn retreat(&mut self) -> StepId {
        let from = self.current_step().id;
        let Some(to) = from.previous().filter(|to| from.can_transition_to(*to)) else {
            return from;
        };
        self.ordinal = to.ordinal();
        if self.generation.take().is_some() {
            info!(session_id = %self.session_id, "Plan generation abandoned");
        }
        info!(
            session_id = %self.session_id,
            from = %from,
            to = %to,
            ordinal = self.ordinal,
            "Stepped back"
        );
        to
    }

    fn step_forward(&mut self) -> StepId {
        let from = self.current_step().id;
        let Some(to) = from.next().filter(|to| from.can_transition_to(*to)) else {
            return from;
        };
        self.ordinal = to.ordinal();
        info!(
            session_id = %self.session_id,
            from = %from,
            to = %to,
            ordinal = self.ordinal,
            "Advanced onboarding step"
        );

        if to.is_terminal() {
            self.start_generation();
            if let Some(navigator) = &self.navigator {
                navigator.generation_started(&self.handoff());
            }
        }
        to
    }

    fn start_generation(&mut self) {
        self.activation += 1;
        self.generation = Some(TerminalProgress::new(Arc::clone(&self.config)));
        info!(
            session_id = %self.session_id,
            activation = self.activation,
            "Plan generation started"
        );
    }

    /// Restart the generation clock from zero. No-op outside the terminal step.
    pub fn restart_generation(&mut self) {
        if self.is_terminal() {
            self.start_generation();
        }
    }

    /// Feed the elapsed time since the terminal step was entered.
    ///
    /// Returns `None` outside the terminal step. Fires the navigator's
    /// `completed` signal on the tick that crosses the completion delay.
    pub fn tick(&mut self, elapsed: Duration) -> Option<TickOutcome> {
        let outcome = self.observe(elapsed)?;
        if outcome.just_completed {
            if let Some(navigator) = &self.navigator {
                navigator.completed(&self.handoff());
            }
        }
        Some(outcome)
    }

    /// Like [`tick`](Self::tick) but leaves delivering `completed` to the caller.
    ///
    /// Lets a caller holding the controller behind a lock release it before
    /// the navigator runs.
    pub fn observe(&mut self, elapsed: Duration) -> Option<TickOutcome> {
        let Some(generation) = self.generation.as_mut() else {
            debug!(session_id = %self.session_id, "Tick outside plan generation ignored");
            return None;
        };
        let outcome = generation.observe(elapsed);
        if outcome.just_completed {
            info!(session_id = %self.session_id, "Onboarding complete, handing off");
        }
        Some(outcome)
    }

    pub fn navigator(&self) -> Option<Arc<dyn Navigator>> {
        self.navigator.clone()
    }

    /// Progress of the current terminal activation, if any.
    pub fn generation(&self) -> Option<&TerminalProgress> {
        self.generation.as_ref()
    }

    /// Identifies the current terminal activation. `None` outside the terminal step.
    pub fn activation(&self) -> Option<u64> {
        self.generation.as_ref().map(|_| self.activation)
    }

    /// Whether the current terminal activation has signalled completion.
    pub fn is_completed(&self) -> bool {
        self.generation.as_ref().is_some_and(TerminalProgress::is_completed)
    }

    /// Copy of the answers tagged with this flow's session.
    pub fn handoff(&self) -> Handoff {
        Handoff {
            session_id: self.session_id,
            answers: self.answers.clone(),
        }
    }

    /// Everything the presentation layer needs to render the current screen.
    pub fn snapshot(&self) -> FlowSnapshot {
        let step = self.current_step();
        FlowSnapshot {
            session_id: self.session_id,
            step: step.id,
            position: step.position(),
            step_count: STEP_COUNT,
            progress_fraction: step.progress_fraction,
            can_advance: self.can_advance(),
            answers: self.answers.clone(),
            generation: self.generation.as_ref().map(TerminalProgress::snapshot),
        }
    }
}

impl Default for OnboardingFlowController {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of the flow.
#[derive(Debug, Clone, Serialize)]
pub struct FlowSnapshot {
    pub session_id: Uuid,
    pub step: StepId,
    /// One-based, as in "step 2 of 5".
    pub position: usize,
    pub step_count: usize,
    pub progress_fraction: f64,
    pub can_advance: bool,
    pub answers: OnboardingAnswers,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<ProgressSnapshot>,
}
