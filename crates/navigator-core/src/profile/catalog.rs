//! Fixed answer catalogs.
//!
//! Each catalog is a closed enum with a stable snake_case id (used in answer
//! sheets and exports), a display label, and a short description. `ALL`
//! lists the entries in canonical order; strengths and improvement areas
//! are reported in that order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An id that does not belong to the requested catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} id '{id}'")]
pub struct UnknownId {
    pub kind: &'static str,
    pub id: String,
}

/// Common view over every catalog, for front ends that render choices.
pub trait CatalogEntry: Copy + fmt::Display + FromStr<Err = UnknownId> + 'static {
    /// Human-readable catalog name, e.g. `"environment"`.
    const KIND: &'static str;

    fn entries() -> &'static [Self];
    fn id(self) -> &'static str;
    fn label(self) -> &'static str;
    fn description(self) -> &'static str;
}

macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $variant:ident => $id:literal, $label:literal, $desc:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $id)] $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            pub fn id(self) -> &'static str {
                match self { $( $name::$variant => $id, )+ }
            }

            pub fn label(self) -> &'static str {
                match self { $( $name::$variant => $label, )+ }
            }

            pub fn description(self) -> &'static str {
                match self { $( $name::$variant => $desc, )+ }
            }

            pub fn from_id(id: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.id() == id)
            }
        }

        impl CatalogEntry for $name {
            const KIND: &'static str = $kind;

            fn entries() -> &'static [Self] {
                Self::ALL
            }

            fn id(self) -> &'static str {
                $name::id(self)
            }

            fn label(self) -> &'static str {
                $name::label(self)
            }

            fn description(self) -> &'static str {
                $name::description(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.id())
            }
        }

        impl FromStr for $name {
            type Err = UnknownId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_id(s.trim()).ok_or_else(|| UnknownId {
                    kind: $kind,
                    id: s.to_string(),
                })
            }
        }
    };
}

catalog! {
    /// Self-rated skill dimensions.
    Competency ("competency") {
        Language => "language", "Speaking & understanding", "Discussing, presenting, understanding texts";
        Writing => "writing", "Writing texts", "Essays, e-mails, creative writing";
        MathLogic => "math_logic", "Math & logic", "Calculating, solving problems, thinking logically";
        PracticalWork => "practical_work", "Practical work", "Working with your hands, building, repairing";
        TechnicalUnderstanding => "technical_understanding", "Understanding technology", "Computers, apps, technical devices";
        Teamwork => "teamwork", "Teamwork & communication", "Working with others, resolving conflicts";
        Creativity => "creativity", "Creativity", "Designing, developing your own ideas";
        Independence => "independence", "Independence", "Working without guidance, taking responsibility";
    }
}

impl Competency {
    /// Competencies that count towards the practical score.
    pub const PRACTICAL: [Competency; 3] = [
        Competency::PracticalWork,
        Competency::TechnicalUnderstanding,
        Competency::Creativity,
    ];

    /// Competencies that count towards the theoretical score.
    pub const THEORETICAL: [Competency; 3] = [
        Competency::Language,
        Competency::Writing,
        Competency::MathLogic,
    ];
}

catalog! {
    /// Motivation statements a user can tick (any number).
    Motivation ("motivation") {
        Practical => "practical", "I like working with my hands", "";
        Theoretical => "theoretical", "I like complex problems and theories", "";
        Social => "social", "I like helping other people", "";
        Creative => "creative", "I am creative and like to design", "";
        Research => "research", "I like discovering new things", "";
        Leadership => "leadership", "I like taking responsibility", "";
        Structured => "structured", "I need clear structures", "";
        Variety => "variety", "I love variety", "";
    }
}

catalog! {
    /// "You have a free Saturday. What do you do?"
    WeekendActivity ("weekend activity") {
        Reading => "reading", "Read or learn online", "";
        Tinkering => "tinkering", "Repair or build something", "";
        Creative => "creative", "Get creative (drawing, music, ...)", "";
        Socializing => "socializing", "Call or meet friends", "";
    }
}

catalog! {
    /// Preferred working environment.
    Environment ("environment") {
        Workshop => "workshop", "Workshop / lab", "Hands-on work, experimenting, building";
        Office => "office", "Office / school", "Planning, analysing, learning, writing";
        People => "people", "With people", "Advising, teaching, selling, helping";
        Nature => "nature", "Outdoors / nature", "Working outside, with animals or plants";
    }
}

impl Environment {
    pub fn is_practical(self) -> bool {
        matches!(self, Environment::Workshop | Environment::Nature)
    }
}

catalog! {
    /// Work values rated for importance.
    WorkValue ("value") {
        Income => "income", "Good income", "Being financially secure";
        WorkLifeBalance => "work_life_balance", "Work-life balance", "Time for family and hobbies";
        MeaningfulWork => "meaningful_work", "Meaningful work", "Doing something important for society";
        Career => "career", "Career opportunities", "Having room to advance";
        JobSecurity => "job_security", "Job security", "A secure position";
        FurtherEducation => "further_education", "Further education", "Always being able to keep learning";
    }
}

catalog! {
    /// How the user feels about their future. Ordered from least to most confident.
    ConfidenceLevel ("confidence level") {
        VeryUnsure => "very_unsure", "Very unsure", "";
        SomewhatUnsure => "somewhat_unsure", "Somewhat unsure", "";
        Neutral => "neutral", "Neutral", "";
        Confident => "confident", "Confident", "";
        VeryOptimistic => "very_optimistic", "Very optimistic", "";
    }
}

catalog! {
    /// "You have to give a presentation. How do you go about it?"
    PresentationStyle ("presentation style") {
        DetailedPlanning => "detailed_planning", "Plan and prepare in detail", "";
        Spontaneous => "spontaneous", "Speak spontaneously and freely", "";
        Collaborative => "collaborative", "Prepare together with others", "";
        Visual => "visual", "Design it creatively and visually", "";
    }
}

catalog! {
    /// "You run into a problem. What is your first impulse?"
    ProblemSolvingStyle ("problem-solving style") {
        HandsOn => "hands_on", "Try things out right away", "";
        ResearchFirst => "research_first", "Research and understand first", "";
        AskOthers => "ask_others", "Ask others for help", "";
        CreativeSolution => "creative_solution", "Invent a creative solution", "";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(Competency::ALL.len(), 8);
        assert_eq!(Motivation::ALL.len(), 8);
        assert_eq!(WeekendActivity::ALL.len(), 4);
        assert_eq!(Environment::ALL.len(), 4);
        assert_eq!(WorkValue::ALL.len(), 6);
        assert_eq!(ConfidenceLevel::ALL.len(), 5);
        assert_eq!(PresentationStyle::ALL.len(), 4);
        assert_eq!(ProblemSolvingStyle::ALL.len(), 4);
    }

    #[test]
    fn test_serde_uses_catalog_id() {
        for c in Competency::ALL {
            let json = serde_json::to_string(c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.id()));
            let back: Competency = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *c);
        }
        let json = serde_json::to_string(&WorkValue::WorkLifeBalance).unwrap();
        assert_eq!(json, "\"work_life_balance\"");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("math_logic".parse::<Competency>(), Ok(Competency::MathLogic));
        assert_eq!(" nature ".parse::<Environment>(), Ok(Environment::Nature));

        let err = "garden".parse::<Environment>().unwrap_err();
        assert_eq!(err.kind, "environment");
        assert_eq!(err.to_string(), "unknown environment id 'garden'");
    }

    #[test]
    fn test_score_groups_are_disjoint() {
        for c in Competency::PRACTICAL {
            assert!(!Competency::THEORETICAL.contains(&c));
        }
    }

    #[test]
    fn test_practical_environments() {
        assert!(Environment::Workshop.is_practical());
        assert!(Environment::Nature.is_practical());
        assert!(!Environment::Office.is_practical());
        assert!(!Environment::People.is_practical());
    }

    #[test]
    fn test_catalog_entry_matches_inherent_methods() {
        fn ids<T: CatalogEntry>() -> Vec<&'static str> {
            T::entries().iter().map(|e| e.id()).collect()
        }
        assert_eq!(ids::<Environment>(), ["workshop", "office", "people", "nature"]);
        assert_eq!(<WorkValue as CatalogEntry>::KIND, "value");
        assert_eq!(CatalogEntry::label(Competency::Writing), "Writing texts");
    }

    #[test]
    fn test_confidence_is_ordered() {
        assert!(ConfidenceLevel::VeryUnsure < ConfidenceLevel::VeryOptimistic);
    }
}
