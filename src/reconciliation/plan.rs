use std::collections::{BTreeSet, HashSet};

/// What a reconciliation did to the source list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Recorded and discovered sources already match
    Unchanged,
    /// New sources were appended to the recorded ones
    Added { count: usize },
    /// Recorded sources went missing, the list was rebuilt from disk
    Rebuilt { removed: usize },
}

/// Comparison of the recorded source list against the sources on disk
#[derive(Debug, Clone, Default)]
pub struct SourceListPlan {
    pub recorded: HashSet<String>,
    pub discovered: HashSet<String>,
    /// Recorded but no longer on disk
    pub removed: BTreeSet<String>,
    /// On disk but not recorded
    pub added: BTreeSet<String>,
}

impl SourceListPlan {
    pub fn outcome(&self) -> ReconcileOutcome {
        if !self.removed.is_empty() {
            ReconcileOutcome::Rebuilt {
                removed: self.removed.len(),
            }
        } else if !self.added.is_empty() {
            ReconcileOutcome::Added {
                count: self.added.len(),
            }
        } else {
            ReconcileOutcome::Unchanged
        }
    }

    /// Whether the managed line has to be rewritten
    pub fn needs_rewrite(&self) -> bool {
        self.outcome() != ReconcileOutcome::Unchanged
    }

    /// The sorted list the managed line should hold.
    ///
    /// After a removal the list is rebuilt from disk; otherwise the new
    /// sources are merged into the recorded ones. Both yield the discovered
    /// set.
    pub fn target_sources(&self) -> BTreeSet<String> {
        if !self.removed.is_empty() {
            self.discovered.iter().cloned().collect()
        } else {
            self.recorded
                .iter()
                .chain(self.added.iter())
                .cloned()
                .collect()
        }
    }
}

/// Compare recorded against discovered sources
pub fn build_source_plan(recorded: HashSet<String>, discovered: HashSet<String>) -> SourceListPlan {
    let removed = recorded.difference(&discovered).cloned().collect();
    let added = discovered.difference(&recorded).cloned().collect();

    SourceListPlan {
        recorded,
        discovered,
        removed,
        added,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sorted(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plan_added() {
        let plan = build_source_plan(set(&["a.cpp", "b.cpp"]), set(&["a.cpp", "b.cpp", "c.cpp"]));
        assert_eq!(plan.outcome(), ReconcileOutcome::Added { count: 1 });
        assert_eq!(plan.target_sources(), sorted(&["a.cpp", "b.cpp", "c.cpp"]));
    }

    #[test]
    fn test_plan_removed() {
        let plan = build_source_plan(set(&["a.cpp", "b.cpp"]), set(&["a.cpp"]));
        assert_eq!(plan.outcome(), ReconcileOutcome::Rebuilt { removed: 1 });
        assert_eq!(plan.target_sources(), sorted(&["a.cpp"]));
    }

    #[test]
    fn test_plan_removed_and_added_rebuilds_from_disk() {
        let plan = build_source_plan(set(&["a.cpp", "old.cpp"]), set(&["a.cpp", "new.cpp"]));
        assert_eq!(plan.outcome(), ReconcileOutcome::Rebuilt { removed: 1 });
        assert_eq!(plan.target_sources(), sorted(&["a.cpp", "new.cpp"]));
    }

    #[test]
    fn test_plan_unchanged() {
        let plan = build_source_plan(set(&["a.cpp"]), set(&["a.cpp"]));
        assert_eq!(plan.outcome(), ReconcileOutcome::Unchanged);
        assert!(!plan.needs_rewrite());
    }
}
