//! Validated answer types and the progressively filled [`AnswerProfile`].
//!
//! Values of these types only come out of step validation (or out of a
//! deserializer that re-checks the same constraints), so code holding an
//! `AnswerProfile` never has to re-validate ranges or completeness.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::catalog::{
    Competency, ConfidenceLevel, Environment, Motivation, PresentationStyle, ProblemSolvingStyle,
    WeekendActivity, WorkValue,
};

/// A 1-5 self-rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    /// Applied to competencies the caller left out.
    pub const DEFAULT: Rating = Rating(3);

    pub fn new(value: i64) -> Option<Rating> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Some(Rating(value as u8))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or_else(|| format!("rating {value} is outside 1-5"))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Answers from the personal-info step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    #[serde(default)]
    pub class_label: String,
    /// Always within 13..=18.
    pub age: u8,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub confidence: Option<ConfidenceLevel>,
}

/// A complete set of ratings over every entry of a catalog.
macro_rules! complete_ratings {
    ($(#[$meta:meta])* $name:ident, $key:ty, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(BTreeMap<$key, Rating>);

        impl $name {
            /// Builds the set if every catalog entry is rated.
            pub fn from_complete(ratings: BTreeMap<$key, Rating>) -> Option<Self> {
                if <$key>::ALL.iter().all(|k| ratings.contains_key(k)) {
                    Some(Self(ratings))
                } else {
                    None
                }
            }

            pub fn get(&self, key: $key) -> Rating {
                self.0.get(&key).copied().unwrap_or(Rating::DEFAULT)
            }

            /// Ratings in canonical catalog order.
            pub fn iter(&self) -> impl Iterator<Item = ($key, Rating)> + '_ {
                <$key>::ALL.iter().map(move |k| (*k, self.get(*k)))
            }
        }

        impl TryFrom<BTreeMap<$key, Rating>> for $name {
            type Error = String;

            fn try_from(ratings: BTreeMap<$key, Rating>) -> Result<Self, Self::Error> {
                let missing: Vec<&str> = <$key>::ALL
                    .iter()
                    .filter(|k| !ratings.contains_key(*k))
                    .map(|k| k.id())
                    .collect();
                if missing.is_empty() {
                    Ok(Self(ratings))
                } else {
                    Err(format!("missing {} ratings: {}", $kind, missing.join(", ")))
                }
            }
        }

        impl From<$name> for BTreeMap<$key, Rating> {
            fn from(ratings: $name) -> Self {
                ratings.0
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let ratings = BTreeMap::<$key, Rating>::deserialize(deserializer)?;
                Self::try_from(ratings).map_err(serde::de::Error::custom)
            }
        }
    };
}

complete_ratings!(
    /// Ratings for all 8 competencies.
    CompetencyRatings, Competency, "competency"
);

complete_ratings!(
    /// Importance ratings for all 6 work values.
    ValueRatings, WorkValue, "value"
);

impl CompetencyRatings {
    /// Mean rating over a group of competencies.
    pub fn mean(&self, group: &[Competency]) -> f64 {
        if group.is_empty() {
            return 0.0;
        }
        let sum: u32 = group.iter().map(|c| self.get(*c).value() as u32).sum();
        sum as f64 / group.len() as f64
    }
}

/// Answers from the motivation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationAnswers {
    #[serde(default)]
    pub tags: BTreeSet<Motivation>,
    /// Captured and exported; not used for scoring.
    pub weekend_activity: WeekendActivity,
}

impl MotivationAnswers {
    pub fn has_any(&self, wanted: &[Motivation]) -> bool {
        wanted.iter().any(|m| self.tags.contains(m))
    }
}

/// Answers from the personality step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityAnswers {
    pub presentation_style: PresentationStyle,
    pub problem_solving_style: ProblemSolvingStyle,
    /// "What is your biggest strength?"
    pub strength: String,
    /// "What would you like to work on?"
    pub development: String,
}

/// Accumulated answers for one session.
///
/// One field group per answerable step, filled in wizard order. Groups for
/// steps before the current one are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal: Option<PersonalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competencies: Option<CompetencyRatings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<MotivationAnswers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<ValueRatings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<PersonalityAnswers>,
}

impl AnswerProfile {
    pub fn is_empty(&self) -> bool {
        *self == AnswerProfile::default()
    }

    /// True once every answerable step has been stored.
    pub fn is_filled(&self) -> bool {
        self.personal.is_some()
            && self.competencies.is_some()
            && self.motivation.is_some()
            && self.environment.is_some()
            && self.values.is_some()
            && self.personality.is_some()
    }

    pub fn name(&self) -> Option<&str> {
        self.personal.as_ref().map(|p| p.name.as_str())
    }
}
