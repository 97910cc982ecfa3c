//! Hundii onboarding — the flow that collects a dog's profile before the
//! first training plan.

pub mod catalog;
pub mod config;
pub mod error;
pub mod onboarding;
