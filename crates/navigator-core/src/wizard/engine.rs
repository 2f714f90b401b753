//! Wizard engine implementation.
//!
//! The engine is a synchronous state machine over the fixed [`StepId`]
//! order. It never renders anything itself: the front end reads
//! `current_step()`, collects that step's input, and hands it back through
//! `submit_step()`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut wizard = WizardEngine::new();
//! wizard.submit_step(StepId::Welcome, StepInput::Welcome)?;
//! wizard.submit_step(StepId::PersonalInfo, StepInput::PersonalInfo(input))?;
//! // ...
//! if let Some(rec) = wizard.recommendation() { /* results screen */ }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::input::StepInput;
use super::sheet::AnswerSheet;
use super::step::StepId;
use crate::error::{NavigationError, ValidationError};
use crate::events::WizardEvent;
use crate::export::ExportRecord;
use crate::profile::AnswerProfile;
use crate::recommendation::{Recommendation, RecommendationEngine};

/// Unique identifier for a wizard session.
pub type SessionId = String;

/// Snapshot of one user's progress through the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    /// Unique session identifier.
    pub session_id: SessionId,
    /// When the session was started (or last reset).
    pub started_at: DateTime<Utc>,
    /// When the results step was reached.
    pub completed_at: Option<DateTime<Utc>>,
    pub current_step: StepId,
    /// Answers stored so far. Kept when stepping back.
    pub profile: AnswerProfile,
    /// True exactly while `current_step` is the results step.
    pub completed: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            completed_at: None,
            current_step: StepId::FIRST,
            profile: AnswerProfile::default(),
            completed: false,
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress information for the current step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardProgress {
    pub step: StepId,
    pub step_index: usize,
    /// Index of the results step.
    pub last_index: usize,
    /// 0.0 at the welcome step, 1.0 at results.
    pub fraction: f64,
    pub title: String,
}

impl WizardProgress {
    /// Progress is shown on the question screens only.
    pub fn is_visible(&self) -> bool {
        self.step_index > 0 && self.step_index < self.last_index
    }
}

/// Drives one session through the steps.
///
/// One engine per user session; the engine holds no shared state.
#[derive(Debug, Clone, Default)]
pub struct WizardEngine {
    state: WizardState,
    scorer: RecommendationEngine,
    events: Vec<WizardEvent>,
}

impl WizardEngine {
    /// Start a fresh session at the welcome step.
    pub fn new() -> Self {
        let state = WizardState::new();
        debug!(session_id = %state.session_id, "wizard session started");
        Self {
            state,
            scorer: RecommendationEngine::new(),
            events: Vec::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn current_step(&self) -> StepId {
        self.state.current_step
    }

    pub fn profile(&self) -> &AnswerProfile {
        &self.state.profile
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn session_id(&self) -> &str {
        &self.state.session_id
    }

    pub fn is_complete(&self) -> bool {
        self.state.completed
    }

    pub fn progress(&self) -> WizardProgress {
        let step = self.state.current_step;
        let last_index = StepId::LAST.index();
        WizardProgress {
            step,
            step_index: step.index(),
            last_index,
            fraction: step.index() as f64 / last_index as f64,
            title: step.title().to_string(),
        }
    }

    /// The scored result, once the wizard is complete.
    pub fn recommendation(&self) -> Option<Recommendation> {
        self.is_complete()
            .then(|| self.scorer.evaluate(&self.state.profile))
    }

    /// The export document, once the wizard is complete.
    pub fn export(&self) -> Option<ExportRecord> {
        let recommendation = self.recommendation()?;
        Some(ExportRecord::new(
            &self.state.session_id,
            self.state.profile.clone(),
            &recommendation,
            Utc::now(),
        ))
    }

    /// Drain the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<WizardEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Actions ──────────────────────────────────────────────────────

    /// Validate `input` for `step` and advance by one step.
    ///
    /// On error the state is left exactly as it was.
    pub fn submit_step(&mut self, step: StepId, input: StepInput) -> Result<(), ValidationError> {
        match self.apply(step, &input) {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(step = %step, error = %err, "step submission rejected");
                self.events.push(WizardEvent::rejected(step, &err));
                Err(err)
            }
        }
    }

    fn apply(&mut self, step: StepId, input: &StepInput) -> Result<(), ValidationError> {
        let current = self.state.current_step;
        if step != current {
            return Err(ValidationError::StepMismatch {
                expected: current,
                submitted: step,
            });
        }

        let next = current.next().ok_or(ValidationError::Terminal)?;

        if input.step() != current {
            return Err(ValidationError::StepMismatch {
                expected: current,
                submitted: input.step(),
            });
        }

        let answer = input.validate()?;
        answer.store(&mut self.state.profile);
        self.state.current_step = next;

        let now = Utc::now();
        self.events.push(WizardEvent::StepSubmitted {
            step: current,
            next,
            at: now,
        });
        debug!(from = %current, to = %next, "step accepted");

        if next.is_terminal() {
            self.state.completed = true;
            self.state.completed_at = Some(now);
            self.events.push(WizardEvent::Completed {
                session_id: self.state.session_id.clone(),
                at: now,
            });
            debug!(session_id = %self.state.session_id, "wizard completed");
        }

        Ok(())
    }

    /// Move back one step. Answers already given are kept.
    pub fn retreat(&mut self) -> Result<(), NavigationError> {
        let current = self.state.current_step;
        let previous = current.previous().ok_or(NavigationError::AtStart)?;

        self.state.current_step = previous;
        if current.is_terminal() {
            self.state.completed = false;
            self.state.completed_at = None;
        }

        self.events.push(WizardEvent::Retreated {
            from: current,
            to: previous,
            at: Utc::now(),
        });
        debug!(from = %current, to = %previous, "stepped back");
        Ok(())
    }

    /// Discard every answer and return to the welcome step.
    pub fn reset(&mut self) {
        let from = self.state.current_step;
        let now = Utc::now();

        self.state.current_step = StepId::FIRST;
        self.state.profile = AnswerProfile::default();
        self.state.completed = false;
        self.state.completed_at = None;
        self.state.started_at = now;

        self.events.push(WizardEvent::Reset { from, at: now });
        debug!(from = %from, "wizard reset");
    }

    /// Submit every answer in `sheet` from the current step onwards.
    ///
    /// Stops at the first rejected step, leaving the wizard there.
    pub fn replay(&mut self, sheet: &AnswerSheet) -> Result<(), ValidationError> {
        for input in sheet.inputs() {
            let step = input.step();
            if step < self.state.current_step {
                continue;
            }
            self.submit_step(step, input)?;
        }
        Ok(())
    }
}
