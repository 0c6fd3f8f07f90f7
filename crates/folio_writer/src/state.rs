//! Run state machine.

/// Where a run is.
///
/// Legal paths are
/// `Idle → Archiving → (Generating(i) → Appending(i))* → Completed`,
/// with `Failed` reachable from `Archiving`, `Generating`, and `Appending`.
/// Nothing leads back into `Generating` for the same chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RunState {
    /// Not started
    #[display("idle")]
    Idle,
    /// Moving a prior artifact aside
    #[display("archiving")]
    Archiving,
    /// Waiting on the backend for chapter `i` (1-based)
    #[display("generating chapter {}", _0)]
    Generating(usize),
    /// Writing chapter `i` to the artifact
    #[display("appending chapter {}", _0)]
    Appending(usize),
    /// Every chapter written
    #[display("completed")]
    Completed,
    /// Stopped on an error
    #[display("failed")]
    Failed,
}

impl RunState {
    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(self, next: RunState) -> bool {
        use RunState::*;
        match (self, next) {
            (Idle, Archiving) => true,
            (Archiving, Generating(1)) | (Archiving, Completed) => true,
            (Generating(i), Appending(j)) => i == j,
            (Appending(i), Generating(j)) => j == i + 1,
            (Appending(_), Completed) => true,
            (Archiving | Generating(_) | Appending(_), Failed) => true,
            _ => false,
        }
    }

    /// Whether the run has stopped.
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Completed | RunState::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::RunState::*;

    #[test]
    fn happy_path_is_legal() {
        let path = [
            Idle,
            Archiving,
            Generating(1),
            Appending(1),
            Generating(2),
            Appending(2),
            Completed,
        ];
        assert!(path.windows(2).all(|w| w[0].can_transition_to(w[1])));
    }

    #[test]
    fn empty_outline_goes_straight_to_completed() {
        assert!(Archiving.can_transition_to(Completed));
    }

    #[test]
    fn no_retry_or_skip() {
        assert!(!Generating(3).can_transition_to(Generating(3)));
        assert!(!Appending(2).can_transition_to(Generating(2)));
        assert!(!Appending(1).can_transition_to(Generating(3)));
        assert!(!Failed.can_transition_to(Generating(1)));
        assert!(!Generating(2).can_transition_to(Completed));
    }

    #[test]
    fn failure_from_work_states_only() {
        assert!(Generating(1).can_transition_to(Failed));
        assert!(Appending(4).can_transition_to(Failed));
        assert!(!Idle.can_transition_to(Failed));
        assert!(!Completed.can_transition_to(Failed));
    }
}
