use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::wizard::StepId;

/// Every state change of a wizard produces an Event.
/// Front ends drain them with `WizardEngine::take_events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WizardEvent {
    StepSubmitted {
        step: StepId,
        next: StepId,
        at: DateTime<Utc>,
    },
    /// A submission failed validation; state is unchanged.
    SubmissionRejected {
        step: StepId,
        reason: String,
        at: DateTime<Utc>,
    },
    Retreated {
        from: StepId,
        to: StepId,
        at: DateTime<Utc>,
    },
    /// The personality step was accepted and the results step reached.
    Completed {
        session_id: String,
        at: DateTime<Utc>,
    },
    Reset {
        from: StepId,
        at: DateTime<Utc>,
    },
}

impl WizardEvent {
    pub fn rejected(step: StepId, error: &ValidationError) -> Self {
        WizardEvent::SubmissionRejected {
            step,
            reason: error.to_string(),
            at: Utc::now(),
        }
    }
}
