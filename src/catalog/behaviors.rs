//! Behavior issues a user can ask the training plan to address.

use serde::Serialize;

/// One selectable behavior issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BehaviorIssue {
    /// Stable tag stored in the answers.
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

/// The fixed issue catalog, in display order.
pub const BEHAVIOR_ISSUES: &[BehaviorIssue] = &[
    BehaviorIssue { id: "leash", label: "An der Leine ziehen", emoji: "🦮" },
    BehaviorIssue { id: "jumping", label: "Anspringen", emoji: "🐕" },
    BehaviorIssue { id: "recall", label: "Kommt nicht wenn gerufen", emoji: "📢" },
    BehaviorIssue { id: "barking", label: "Übermäßiges Bellen", emoji: "🗣️" },
    BehaviorIssue { id: "chewing", label: "Zerstören / Kauen", emoji: "🦴" },
    BehaviorIssue { id: "housetraining", label: "Stubenreinheit", emoji: "🏠" },
    BehaviorIssue { id: "begging", label: "Betteln", emoji: "🍖" },
    BehaviorIssue { id: "stealing", label: "Vom Tisch stehlen", emoji: "🍕" },
    BehaviorIssue { id: "notlistening", label: "Hört nicht zu", emoji: "🙉" },
];

/// Look up an issue by its tag.
pub fn behavior_issue(id: &str) -> Option<&'static BehaviorIssue> {
    BEHAVIOR_ISSUES.iter().find(|issue| issue.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_nine_unique_ids() {
        assert_eq!(BEHAVIOR_ISSUES.len(), 9);
        let ids: std::collections::HashSet<_> = BEHAVIOR_ISSUES.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(behavior_issue("barking").unwrap().label, "Übermäßiges Bellen");
        assert!(behavior_issue("digging").is_none());
    }
}
