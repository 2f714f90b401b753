//! Fixed, totally ordered wizard steps.
//!
//! ```text
//! Welcome -> PersonalInfo -> Competencies -> Motivation -> Environment
//!         -> FutureValues -> Personality -> Results
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Welcome,
    PersonalInfo,
    Competencies,
    Motivation,
    Environment,
    FutureValues,
    Personality,
    /// Terminal step.
    Results,
}

impl StepId {
    /// All steps in wizard order.
    pub const ALL: [StepId; 8] = [
        StepId::Welcome,
        StepId::PersonalInfo,
        StepId::Competencies,
        StepId::Motivation,
        StepId::Environment,
        StepId::FutureValues,
        StepId::Personality,
        StepId::Results,
    ];

    pub const FIRST: StepId = StepId::Welcome;
    pub const LAST: StepId = StepId::Results;

    /// Zero-based position in the wizard.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<StepId> {
        Self::ALL.get(index).copied()
    }

    /// The following step, or `None` at `Results`.
    pub fn next(self) -> Option<StepId> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, or `None` at `Welcome`.
    pub fn previous(self) -> Option<StepId> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_terminal(self) -> bool {
        self == Self::LAST
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepId::Welcome => "welcome",
            StepId::PersonalInfo => "personal_info",
            StepId::Competencies => "competencies",
            StepId::Motivation => "motivation",
            StepId::Environment => "environment",
            StepId::FutureValues => "future_values",
            StepId::Personality => "personality",
            StepId::Results => "results",
        }
    }

    /// Screen title shown by front ends.
    pub fn title(self) -> &'static str {
        match self {
            StepId::Welcome => "Welcome",
            StepId::PersonalInfo => "Who are you?",
            StepId::Competencies => "Discover your strengths",
            StepId::Motivation => "What motivates you?",
            StepId::Environment => "Your ideal work environment",
            StepId::FutureValues => "What matters to you?",
            StepId::Personality => "Personality challenge",
            StepId::Results => "Your results",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
