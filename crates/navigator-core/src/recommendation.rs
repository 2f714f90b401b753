//! Pathway recommendation engine.
//!
//! A pure, deterministic mapping from an [`AnswerProfile`] to a
//! [`Recommendation`]. Only competency ratings, motivation tags, and the
//! environment choice are scored; everything else in the profile is carried
//! for export only.
//!
//! ## Decision
//!
//! ```text
//! practical   = mean(practical_work, technical_understanding, creativity)
//! theoretical = mean(language, writing, math_logic)
//!
//! practical > theoretical + 0.5   or (practical motivation and practical environment)
//!     => VocationalTraining
//! theoretical > practical + 0.5   or (theoretical motivation and not practical environment)
//!     => AcademicTrack
//! otherwise
//!     => BothPathsOpen
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::profile::{AnswerProfile, Competency, Motivation};

/// Score difference one side needs to win outright.
pub const DECISION_MARGIN: f64 = 0.5;
/// Ratings at or above this count as a strength.
pub const STRENGTH_THRESHOLD: u8 = 4;
/// Ratings at or below this count as an improvement area.
pub const IMPROVEMENT_THRESHOLD: u8 = 2;

const PRACTICAL_MOTIVATIONS: [Motivation; 2] = [Motivation::Practical, Motivation::Creative];
const THEORETICAL_MOTIVATIONS: [Motivation; 2] = [Motivation::Theoretical, Motivation::Research];

/// Recommended path after lower secondary school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pathway {
    /// Apprenticeship / vocational training.
    VocationalTraining,
    /// Upper secondary or academic school.
    AcademicTrack,
    BothPathsOpen,
}

impl Pathway {
    pub fn as_str(self) -> &'static str {
        match self {
            Pathway::VocationalTraining => "vocational_training",
            Pathway::AcademicTrack => "academic_track",
            Pathway::BothPathsOpen => "both_paths_open",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Pathway::VocationalTraining => "Vocational training",
            Pathway::AcademicTrack => "Academic track",
            Pathway::BothPathsOpen => "Both paths are open to you",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Pathway::VocationalTraining => indoc::indoc! {"
                You are a practical type! Your strengths lie in hands-on work.
                An apprenticeship could suit you perfectly."},
            Pathway::AcademicTrack => indoc::indoc! {"
                You are a theoretical thinker! You enjoy complex problems and knowledge.
                An academic school could be ideal."},
            Pathway::BothPathsOpen => indoc::indoc! {"
                You have a wide range of talents! Both an apprenticeship and further
                schooling fit you. Let your interests guide you."},
        }
    }

    /// Concrete follow-ups shown on the results screen.
    pub fn next_steps(self) -> [&'static str; 4] {
        match self {
            Pathway::VocationalTraining => [
                "Find out about different apprenticeships",
                "Arrange two or three trial apprenticeships",
                "Work on your school skills in a targeted way",
                "Talk to career counsellors and practitioners",
            ],
            Pathway::AcademicTrack => [
                "Find out about entrance exams",
                "Draw up a structured study plan",
                "Attend information events",
                "Think about possible fields of study",
            ],
            Pathway::BothPathsOpen => [
                "Do both trial apprenticeships and school visits",
                "Have conversations with career counsellors",
                "Reflect on your long-term goals",
                "Decide with your gut feeling",
            ],
        }
    }
}

impl fmt::Display for Pathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intermediate values behind a decision, kept for explainability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub practical_score: f64,
    pub theoretical_score: f64,
    pub practical_motivation: bool,
    pub theoretical_motivation: bool,
    pub practical_environment: bool,
}

impl ScoreBreakdown {
    pub fn from_profile(profile: &AnswerProfile) -> Self {
        // Missing ratings count as 0.
        let (practical_score, theoretical_score) = match &profile.competencies {
            Some(ratings) => (
                ratings.mean(&Competency::PRACTICAL),
                ratings.mean(&Competency::THEORETICAL),
            ),
            None => (0.0, 0.0),
        };

        let (practical_motivation, theoretical_motivation) = match &profile.motivation {
            Some(m) => (
                m.has_any(&PRACTICAL_MOTIVATIONS),
                m.has_any(&THEORETICAL_MOTIVATIONS),
            ),
            None => (false, false),
        };

        let practical_environment = profile
            .environment
            .map(|env| env.is_practical())
            .unwrap_or(false);

        Self {
            practical_score,
            theoretical_score,
            practical_motivation,
            theoretical_motivation,
            practical_environment,
        }
    }

    /// First matching rule wins.
    pub fn decide(&self) -> Pathway {
        if self.practical_score > self.theoretical_score + DECISION_MARGIN
            || (self.practical_motivation && self.practical_environment)
        {
            Pathway::VocationalTraining
        } else if self.theoretical_score > self.practical_score + DECISION_MARGIN
            || (self.theoretical_motivation && !self.practical_environment)
        {
            Pathway::AcademicTrack
        } else {
            Pathway::BothPathsOpen
        }
    }
}

/// Output of [`RecommendationEngine::evaluate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub pathway: Pathway,
    /// Competencies rated 4 or 5, in catalog order.
    pub strengths: Vec<Competency>,
    /// Competencies rated 1 or 2, in catalog order.
    pub improvements: Vec<Competency>,
    pub breakdown: ScoreBreakdown,
}

/// Scores completed profiles. Stateless; total over every profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, profile: &AnswerProfile) -> Recommendation {
        let breakdown = ScoreBreakdown::from_profile(profile);
        let pathway = breakdown.decide();

        let (strengths, improvements): (Vec<Competency>, Vec<Competency>) = match &profile.competencies {
            Some(ratings) => (
                ratings
                    .iter()
                    .filter(|(_, r)| r.value() >= STRENGTH_THRESHOLD)
                    .map(|(c, _)| c)
                    .collect(),
                ratings
                    .iter()
                    .filter(|(_, r)| r.value() <= IMPROVEMENT_THRESHOLD)
                    .map(|(c, _)| c)
                    .collect(),
            ),
            None => (Vec::new(), Vec::new()),
        };

        Recommendation {
            pathway,
            strengths,
            improvements,
            breakdown,
        }
    }
}

/// Shorthand for `RecommendationEngine::new().evaluate(profile)`.
pub fn evaluate(profile: &AnswerProfile) -> Recommendation {
    RecommendationEngine::new().evaluate(profile)
}
