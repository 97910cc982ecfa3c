//! Static lookup tables the presentation layer reads from.
//!
//! None of these are owned by the flow controller; it only stores the
//! values a user picked out of them.

pub mod behaviors;
pub mod breeds;

pub use behaviors::{BEHAVIOR_ISSUES, BehaviorIssue, behavior_issue};
pub use breeds::{BREEDS, MIXED_BREED, UNKNOWN_BREED, filter_breeds, is_known_breed};
