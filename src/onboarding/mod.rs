//! Onboarding flow — the linear wizard a new user walks through.
//!
//! The user names the dog (optionally with a photo), picks its breed and age
//! group, selects behavior issues to work on, and then watches a simulated
//! "generating plan" step. The controller gates each step on the answers
//! collected so far and hands the final answers to a navigator once the
//! simulated generation finishes.

pub mod controller;
pub mod model;
pub mod ports;
pub mod progress;
pub mod state;
pub mod ticker;

pub use controller::{FlowSnapshot, OnboardingFlowController};
pub use model::{AgeGroup, Answer, AnswerField, OnboardingAnswers, PhotoRef};
pub use ports::{Handoff, ImagePicker, Navigator};
pub use progress::{
    Checkpoint, LabelCheckpoint, LabelState, ProgressSnapshot, TerminalProgress, TickOutcome,
};
pub use state::{STEPS, StepDefinition, StepId};
pub use ticker::{SharedFlow, spawn_generation_ticker};
