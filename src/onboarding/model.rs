//! Answers collected during onboarding.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Longest dog name the name field keeps; longer input is cut at write time.
pub const DOG_NAME_MAX_CHARS: usize = 30;

/// Opaque handle to a picked image. The flow never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoRef(String);

impl PhotoRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Age bracket of the dog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Puppy,
    Young,
    Adult,
    Senior,
}

impl AgeGroup {
    /// All groups in display order.
    pub const ALL: [AgeGroup; 4] = [Self::Puppy, Self::Young, Self::Adult, Self::Senior];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Puppy => "Welpe",
            Self::Young => "Junghund",
            Self::Adult => "Erwachsen",
            Self::Senior => "Senior",
        }
    }

    /// Human-readable age range shown under the label.
    pub fn range(&self) -> &'static str {
        match self {
            Self::Puppy => "0–6 Monate",
            Self::Young => "6–18 Monate",
            Self::Adult => "1,5–7 Jahre",
            Self::Senior => "7+ Jahre",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Puppy => "🐶",
            Self::Young => "🐕",
            Self::Adult => "🦮",
            Self::Senior => "🐾",
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Puppy => "puppy",
            Self::Young => "young",
            Self::Adult => "adult",
            Self::Senior => "senior",
        };
        write!(f, "{s}")
    }
}

/// Names one field of [`OnboardingAnswers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerField {
    DogPhoto,
    DogName,
    DogBreed,
    DogAgeGroup,
    BehaviorIssues,
}

impl std::fmt::Display for AnswerField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::DogPhoto => "dog_photo",
            Self::DogName => "dog_name",
            Self::DogBreed => "dog_breed",
            Self::DogAgeGroup => "dog_age_group",
            Self::BehaviorIssues => "behavior_issues",
        };
        write!(f, "{s}")
    }
}

/// A single value written into the answers, tagged with its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    DogPhoto(PhotoRef),
    DogName(String),
    DogBreed(String),
    DogAgeGroup(AgeGroup),
    BehaviorIssues(BTreeSet<String>),
}

impl Answer {
    pub fn field(&self) -> AnswerField {
        match self {
            Self::DogPhoto(_) => AnswerField::DogPhoto,
            Self::DogName(_) => AnswerField::DogName,
            Self::DogBreed(_) => AnswerField::DogBreed,
            Self::DogAgeGroup(_) => AnswerField::DogAgeGroup,
            Self::BehaviorIssues(_) => AnswerField::BehaviorIssues,
        }
    }
}

/// Everything the user entered so far. Fields stay `None` until recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingAnswers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dog_photo: Option<PhotoRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dog_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dog_breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dog_age_group: Option<AgeGroup>,
    #[serde(default)]
    pub behavior_issues: BTreeSet<String>,
}

impl OnboardingAnswers {
    /// Overwrite one field. No validation happens here.
    pub fn apply(&mut self, answer: Answer) {
        match answer {
            Answer::DogPhoto(photo) => self.dog_photo = Some(photo),
            Answer::DogName(name) => self.dog_name = Some(clamp_name(name)),
            Answer::DogBreed(breed) => self.dog_breed = Some(breed),
            Answer::DogAgeGroup(group) => self.dog_age_group = Some(group),
            Answer::BehaviorIssues(issues) => self.behavior_issues = issues,
        }
    }

    /// Add `id` if absent, remove it if present. Returns the new membership.
    pub fn toggle_behavior_issue(&mut self, id: &str) -> bool {
        if self.behavior_issues.remove(id) {
            false
        } else {
            self.behavior_issues.insert(id.to_string());
            true
        }
    }

    /// Name with surrounding whitespace removed, if one was recorded.
    pub fn trimmed_name(&self) -> Option<&str> {
        self.dog_name.as_deref().map(str::trim)
    }
}

fn clamp_name(name: String) -> String {
    match name.char_indices().nth(DOG_NAME_MAX_CHARS) {
        Some((cut, _)) => name[..cut].to_string(),
        None => name,
    }
}
