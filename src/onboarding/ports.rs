//! Collaborators the flow drives but does not own.

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::model::{OnboardingAnswers, PhotoRef};

/// Platform image picker.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Let the user pick an image. `None` means the user cancelled.
    async fn pick_image(&self) -> Option<PhotoRef>;
}

/// Final answers handed to the rest of the application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Handoff {
    pub session_id: Uuid,
    pub answers: OnboardingAnswers,
}

/// Receives the flow's routing signals.
///
/// Implementations should return quickly; they are called synchronously.
/// `generation_started` and `OnboardingFlowController::tick` call in while the
/// caller still holds the controller, so an implementation must not lock a
/// [`SharedFlow`](super::ticker::SharedFlow) wrapping it from there; doing so
/// deadlocks. The generation ticker releases its lock before `completed` runs.
pub trait Navigator: Send + Sync {
    /// The user left the last gated step and plan generation began.
    fn generation_started(&self, handoff: &Handoff);

    /// Plan generation finished; control passes to the main application.
    fn completed(&self, handoff: &Handoff);
}
