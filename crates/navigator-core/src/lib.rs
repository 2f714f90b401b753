//! # Navigator Core Library
//!
//! This library provides the core logic for Navigator, a self-assessment
//! wizard that recommends vocational training, an academic track, or both.
//! Front ends (the bundled CLI, or any other UI) render screens and collect
//! input; this crate owns the step order, validation, and scoring.
//!
//! ## Architecture
//!
//! - **Wizard**: a synchronous state machine over a fixed step order that
//!   validates each step's raw input and accumulates a typed answer profile
//! - **Recommendation**: a pure function from a profile to a pathway plus
//!   strengths and improvement areas
//! - **Export**: a serializable record of a finished session
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`WizardEngine`]: one instance per user session
//! - [`RecommendationEngine`]: deterministic scoring
//! - [`AnswerProfile`]: the progressively filled answer record
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod export;
pub mod profile;
pub mod recommendation;
pub mod storage;
pub mod wizard;

pub use error::{ConfigError, CoreError, NavigationError, SheetError, ValidationError};
pub use events::WizardEvent;
pub use export::ExportRecord;
pub use profile::{
    AnswerProfile, CatalogEntry, Competency, ConfidenceLevel, Environment, Motivation,
    PresentationStyle, ProblemSolvingStyle, Rating, WeekendActivity, WorkValue,
};
pub use recommendation::{evaluate, Pathway, Recommendation, RecommendationEngine, ScoreBreakdown};
pub use storage::Config;
pub use wizard::{
    AnswerSheet, StepId, StepInput, WizardEngine, WizardProgress, WizardState,
};
