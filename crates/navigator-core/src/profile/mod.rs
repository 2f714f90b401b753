//! Answer catalogs and the session answer profile.

pub mod answers;
pub mod catalog;

pub use answers::{
    AnswerProfile, CompetencyRatings, MotivationAnswers, PersonalInfo, PersonalityAnswers, Rating,
    ValueRatings,
};
pub use catalog::{
    CatalogEntry, Competency, ConfidenceLevel, Environment, Motivation, PresentationStyle,
    ProblemSolvingStyle, UnknownId, WeekendActivity, WorkValue,
};
