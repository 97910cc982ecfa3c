//! End-to-end walks through the onboarding flow via the public API.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::RwLock;

use hundii_onboarding::catalog::{self, BEHAVIOR_ISSUES};
use hundii_onboarding::error::ValidationReason;
use hundii_onboarding::onboarding::{
    AgeGroup, Answer, Handoff, LabelState, Navigator, OnboardingFlowController, StepId,
    spawn_generation_ticker,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
struct RecordingNavigator {
    events: Mutex<Vec<(&'static str, Handoff)>>,
}

impl RecordingNavigator {
    fn events(&self) -> Vec<(&'static str, Handoff)> {
        self.events.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn generation_started(&self, handoff: &Handoff) {
        self.events.lock().unwrap().push(("started", handoff.clone()));
    }

    fn completed(&self, handoff: &Handoff) {
        self.events.lock().unwrap().push(("completed", handoff.clone()));
    }
}

#[test]
fn full_walk_hands_off_answers_once() {
    init_tracing();
    let nav = Arc::new(RecordingNavigator::default());
    let mut flow = OnboardingFlowController::new().with_navigator(nav.clone());

    flow.record_answer(Answer::DogName("Bello".into()));
    assert_eq!(flow.advance().unwrap(), StepId::Breed);
    flow.record_answer(Answer::DogBreed("Labrador Retriever".into()));
    assert_eq!(flow.advance().unwrap(), StepId::Age);
    flow.record_answer(Answer::DogAgeGroup(AgeGroup::Adult));
    assert_eq!(flow.advance().unwrap(), StepId::Behavior);
    flow.record_answer(Answer::BehaviorIssues(BTreeSet::from([
        "leash".to_string(),
        "barking".to_string(),
    ])));
    assert_eq!(flow.advance().unwrap(), StepId::Generating);

    assert!(flow.is_terminal());
    assert!(flow.can_advance());
    let expected = flow.answers().clone();

    for ms in (0..=10_500).step_by(50) {
        flow.tick(Duration::from_millis(ms));
    }

    let events = nav.events();
    let kinds: Vec<&str> = events.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(kinds, vec!["started", "completed"]);
    assert_eq!(events[1].1.answers, expected);
    assert_eq!(flow.answers(), &expected);
    assert_eq!(expected.dog_name.as_deref(), Some("Bello"));
    assert_eq!(expected.behavior_issues.len(), 2);
}

#[test]
fn blank_name_blocks_the_first_step() {
    init_tracing();
    for name in ["", "   "] {
        let mut flow = OnboardingFlowController::new();
        flow.record_answer(Answer::DogName(name.into()));
        let err = flow.advance().unwrap_err();
        assert_eq!(err.step, StepId::Name);
        assert_eq!(err.reason, ValidationReason::Blank);
        assert_eq!(err.step.to_string(), "name");
        assert_eq!(flow.ordinal(), 0);
    }
}

#[test]
fn breed_search_feeds_a_valid_selection() {
    init_tracing();
    let mut flow = OnboardingFlowController::new();
    flow.record_answer(Answer::DogName("Rex".into()));
    flow.advance().unwrap();
    assert!(!flow.can_advance());

    let hits = catalog::filter_breeds("terrier");
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|b| b.to_lowercase().contains("terrier")));
    let positions: Vec<usize> = hits
        .iter()
        .map(|hit| catalog::BREEDS.iter().position(|b| b == hit).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    flow.record_answer(Answer::DogBreed(hits[0].to_string()));
    assert!(flow.can_advance());
    assert_eq!(flow.advance().unwrap(), StepId::Age);
}

#[test]
fn any_behavior_subset_is_accepted() {
    init_tracing();
    let mut flow = OnboardingFlowController::new();
    flow.record_answer(Answer::DogName("Luna".into()));
    flow.advance().unwrap();
    flow.record_answer(Answer::DogBreed(catalog::UNKNOWN_BREED.into()));
    flow.advance().unwrap();
    flow.record_answer(Answer::DogAgeGroup(AgeGroup::Puppy));
    flow.advance().unwrap();

    assert!(flow.can_advance());
    for issue in BEHAVIOR_ISSUES {
        flow.toggle_behavior_issue(issue.id);
        assert!(flow.can_advance());
    }
    assert_eq!(flow.answers().behavior_issues.len(), BEHAVIOR_ISSUES.len());
}

#[test]
fn going_back_shows_previous_answers() {
    init_tracing();
    let mut flow = OnboardingFlowController::new();
    flow.record_answer(Answer::DogName("Bello".into()));
    flow.advance().unwrap();
    flow.record_answer(Answer::DogBreed("Boxer".into()));
    flow.advance().unwrap();

    assert_eq!(flow.retreat(), StepId::Breed);
    assert_eq!(flow.answers().dog_breed.as_deref(), Some("Boxer"));

    flow.record_answer(Answer::DogBreed("Collie".into()));
    assert_eq!(flow.advance().unwrap(), StepId::Age);
    assert_eq!(flow.answers().dog_breed.as_deref(), Some("Collie"));
}

#[tokio::test(start_paused = true)]
async fn ticker_drives_generation_to_handoff() {
    init_tracing();
    let nav = Arc::new(RecordingNavigator::default());
    let mut flow = OnboardingFlowController::new().with_navigator(nav.clone());
    flow.record_answer(Answer::DogName("Bello".into()));
    flow.advance().unwrap();
    flow.record_answer(Answer::DogBreed("Pudel".into()));
    flow.advance().unwrap();
    flow.record_answer(Answer::DogAgeGroup(AgeGroup::Adult));
    flow.advance().unwrap();
    flow.skip().unwrap();
    let flow = Arc::new(RwLock::new(flow));

    let handle = spawn_generation_ticker(Arc::clone(&flow));

    tokio::time::sleep(Duration::from_millis(6_000)).await;
    {
        let guard = flow.read().await;
        let generation = guard.generation().unwrap();
        assert!(generation.progress() > 0.5 && generation.progress() < 1.0);
        assert_eq!(generation.label_state(0), LabelState::Done);
        assert_eq!(generation.label_state(2), LabelState::Current);
        assert_eq!(generation.label_state(3), LabelState::Pending);
        assert!(!guard.is_completed());
    }

    handle.await.unwrap();
    let guard = flow.read().await;
    assert!(guard.is_completed());
    let kinds: Vec<&str> = nav.events().iter().map(|(kind, _)| *kind).collect();
    assert_eq!(kinds, vec!["started", "completed"]);
}
