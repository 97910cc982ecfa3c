//! Step catalog — the fixed, ordered screens of the onboarding flow.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationReason};

use super::model::{AnswerField, OnboardingAnswers};

/// The steps of the onboarding flow.
///
/// Progresses linearly: Name → Breed → Age → Behavior → Generating.
/// Users may also step back one screen at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Name,
    Breed,
    Age,
    Behavior,
    Generating,
}

impl StepId {
    /// Zero-based position in [`STEPS`].
    pub fn ordinal(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Breed => 1,
            Self::Age => 2,
            Self::Behavior => 3,
            Self::Generating => 4,
        }
    }

    pub fn from_ordinal(ordinal: usize) -> Option<StepId> {
        STEPS.get(ordinal).map(|def| def.id)
    }

    /// Check if moving from `self` to `target` is a single step in either direction.
    pub fn can_transition_to(&self, target: StepId) -> bool {
        self.ordinal().abs_diff(target.ordinal()) == 1
    }

    /// Whether this is the terminal "generating plan" step.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Generating)
    }

    /// Get the next step in the linear progression, if any.
    pub fn next(&self) -> Option<StepId> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// Get the previous step, if any.
    pub fn previous(&self) -> Option<StepId> {
        self.ordinal().checked_sub(1).and_then(Self::from_ordinal)
    }

    pub fn definition(&self) -> &'static StepDefinition {
        &STEPS[self.ordinal()]
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Breed => "breed",
            Self::Age => "age",
            Self::Behavior => "behavior",
            Self::Generating => "generating",
        };
        write!(f, "{s}")
    }
}

type Check = fn(&OnboardingAnswers) -> Result<(), (AnswerField, ValidationReason)>;

/// Static description of one step.
pub struct StepDefinition {
    pub id: StepId,
    /// Fill level of the progress bar shown on this step.
    pub progress_fraction: f64,
    /// The user may leave this step without answering.
    pub skippable: bool,
    check: Check,
}

impl std::fmt::Debug for StepDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepDefinition")
            .field("id", &self.id)
            .field("progress_fraction", &self.progress_fraction)
            .field("skippable", &self.skippable)
            .finish_non_exhaustive()
    }
}

impl StepDefinition {
    pub fn ordinal(&self) -> usize {
        self.id.ordinal()
    }

    /// One-based position, as in "step 2 of 5".
    pub fn position(&self) -> usize {
        self.ordinal() + 1
    }

    /// Evaluate this step's rule against the answers collected so far.
    pub fn validate(&self, answers: &OnboardingAnswers) -> Result<(), ValidationError> {
        (self.check)(answers).map_err(|(field, reason)| ValidationError {
            step: self.id,
            field,
            reason,
        })
    }
}

/// Number of steps, terminal included.
pub const STEP_COUNT: usize = 5;

/// The flow, in order. The last entry is the terminal step.
pub static STEPS: [StepDefinition; STEP_COUNT] = [
    StepDefinition {
        id: StepId::Name,
        progress_fraction: 0.2,
        skippable: false,
        check: check_name,
    },
    StepDefinition {
        id: StepId::Breed,
        progress_fraction: 0.4,
        skippable: false,
        check: check_breed,
    },
    StepDefinition {
        id: StepId::Age,
        progress_fraction: 0.6,
        skippable: false,
        check: check_age,
    },
    StepDefinition {
        id: StepId::Behavior,
        progress_fraction: 0.8,
        skippable: true,
        check: always,
    },
    StepDefinition {
        id: StepId::Generating,
        progress_fraction: 1.0,
        skippable: false,
        check: always,
    },
];

/// Ordinal of the terminal step.
pub const TERMINAL_ORDINAL: usize = STEP_COUNT - 1;

fn check_name(answers: &OnboardingAnswers) -> Result<(), (AnswerField, ValidationReason)> {
    match answers.trimmed_name() {
        None => Err((AnswerField::DogName, ValidationReason::Missing)),
        Some("") => Err((AnswerField::DogName, ValidationReason::Blank)),
        Some(_) => Ok(()),
    }
}

fn check_breed(answers: &OnboardingAnswers) -> Result<(), (AnswerField, ValidationReason)> {
    match answers.dog_breed.as_deref() {
        None => Err((AnswerField::DogBreed, ValidationReason::Missing)),
        Some(breed) if breed.trim().is_empty() => {
            Err((AnswerField::DogBreed, ValidationReason::Blank))
        }
        Some(_) => Ok(()),
    }
}

fn check_age(answers: &OnboardingAnswers) -> Result<(), (AnswerField, ValidationReason)> {
    answers
        .dog_age_group
        .map(|_| ())
        .ok_or((AnswerField::DogAgeGroup, ValidationReason::Missing))
}

fn always(_: &OnboardingAnswers) -> Result<(), (AnswerField, ValidationReason)> {
    Ok(())
}
