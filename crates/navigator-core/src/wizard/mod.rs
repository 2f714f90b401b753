//! Step wizard: fixed step order, raw input validation, and the engine
//! that accumulates a session's answers.

pub mod engine;
pub mod input;
pub mod sheet;
pub mod step;

pub use engine::{SessionId, WizardEngine, WizardProgress, WizardState};
pub use input::{
    CompetencyInput, EnvironmentInput, MotivationInput, PersonalInfoInput, PersonalityInput,
    StepAnswer, StepInput, ValuesInput,
};
pub use sheet::AnswerSheet;
pub use step::StepId;
