//! Outcome of the recursive comparator.

use std::ops::Not;

/// Result of comparing one value against one schema fragment.
///
/// The comparator reasons in terms of mismatches so that a single failing
/// branch can short-circuit a conjunction. Public entry points convert this to
/// a plain `bool` with [`MatchOutcome::is_match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Match,
    Mismatch,
}

impl MatchOutcome {
    pub fn is_match(self) -> bool {
        self == MatchOutcome::Match
    }

    pub fn is_mismatch(self) -> bool {
        self == MatchOutcome::Mismatch
    }
}

impl From<bool> for MatchOutcome {
    /// `true` means the value matched.
    fn from(matched: bool) -> Self {
        if matched {
            MatchOutcome::Match
        } else {
            MatchOutcome::Mismatch
        }
    }
}

impl Not for MatchOutcome {
    type Output = MatchOutcome;

    fn not(self) -> MatchOutcome {
        match self {
            MatchOutcome::Match => MatchOutcome::Mismatch,
            MatchOutcome::Mismatch => MatchOutcome::Match,
        }
    }
}
