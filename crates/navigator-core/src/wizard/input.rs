//! Raw per-step input as collected by a front end, and its validation.
//!
//! Inputs are deliberately loose (plain integers, optional selections,
//! untrimmed text) so that every rule in the step table is checked here
//! rather than assumed of the caller.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::step::StepId;
use crate::error::ValidationError;
use crate::profile::{
    AnswerProfile, Competency, CompetencyRatings, ConfidenceLevel, Environment, Motivation,
    MotivationAnswers, PersonalInfo, PersonalityAnswers, PresentationStyle, ProblemSolvingStyle,
    Rating, ValueRatings, WeekendActivity, WorkValue,
};

pub const MIN_AGE: i64 = 13;
pub const MAX_AGE: i64 = 18;
/// Used when the caller leaves the age out.
pub const DEFAULT_AGE: i64 = 15;

/// One step's raw answers, tagged with the step it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepInput {
    Welcome,
    PersonalInfo(PersonalInfoInput),
    Competencies(CompetencyInput),
    Motivation(MotivationInput),
    Environment(EnvironmentInput),
    FutureValues(ValuesInput),
    Personality(PersonalityInput),
}

impl StepInput {
    /// The step this input answers.
    pub fn step(&self) -> StepId {
        match self {
            StepInput::Welcome => StepId::Welcome,
            StepInput::PersonalInfo(_) => StepId::PersonalInfo,
            StepInput::Competencies(_) => StepId::Competencies,
            StepInput::Motivation(_) => StepId::Motivation,
            StepInput::Environment(_) => StepId::Environment,
            StepInput::FutureValues(_) => StepId::FutureValues,
            StepInput::Personality(_) => StepId::Personality,
        }
    }

    /// Apply the step's rules, producing the data to store.
    pub fn validate(&self) -> Result<StepAnswer, ValidationError> {
        Ok(match self {
            StepInput::Welcome => StepAnswer::Welcome,
            StepInput::PersonalInfo(input) => StepAnswer::PersonalInfo(input.validate()?),
            StepInput::Competencies(input) => StepAnswer::Competencies(input.validate()?),
            StepInput::Motivation(input) => StepAnswer::Motivation(input.validate()?),
            StepInput::Environment(input) => StepAnswer::Environment(input.validate()?),
            StepInput::FutureValues(input) => StepAnswer::FutureValues(input.validate()?),
            StepInput::Personality(input) => StepAnswer::Personality(input.validate()?),
        })
    }
}

/// Validated data for one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAnswer {
    Welcome,
    PersonalInfo(PersonalInfo),
    Competencies(CompetencyRatings),
    Motivation(MotivationAnswers),
    Environment(Environment),
    FutureValues(ValueRatings),
    Personality(PersonalityAnswers),
}

impl StepAnswer {
    /// Merge into the profile under this step's key, replacing earlier answers for the same step.
    pub fn store(self, profile: &mut AnswerProfile) {
        match self {
            StepAnswer::Welcome => {}
            StepAnswer::PersonalInfo(info) => profile.personal = Some(info),
            StepAnswer::Competencies(ratings) => profile.competencies = Some(ratings),
            StepAnswer::Motivation(answers) => profile.motivation = Some(answers),
            StepAnswer::Environment(env) => profile.environment = Some(env),
            StepAnswer::FutureValues(ratings) => profile.values = Some(ratings),
            StepAnswer::Personality(answers) => profile.personality = Some(answers),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfoInput {
    pub name: String,
    pub class_label: String,
    pub age: Option<i64>,
    pub school: String,
    pub confidence: Option<ConfidenceLevel>,
}

impl PersonalInfoInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<PersonalInfo, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::missing("name"));
        }

        let age = self.age.unwrap_or(DEFAULT_AGE).clamp(MIN_AGE, MAX_AGE) as u8;

        Ok(PersonalInfo {
            name: name.to_string(),
            class_label: self.class_label.trim().to_string(),
            age,
            school: self.school.trim().to_string(),
            confidence: self.confidence,
        })
    }
}

/// Raw competency ratings. Competencies left out are rated 3.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetencyInput {
    pub ratings: BTreeMap<Competency, i64>,
}

impl CompetencyInput {
    /// Every competency rated `value`.
    pub fn uniform(value: i64) -> Self {
        Self {
            ratings: Competency::ALL.iter().map(|c| (*c, value)).collect(),
        }
    }

    pub fn with(mut self, competency: Competency, value: i64) -> Self {
        self.ratings.insert(competency, value);
        self
    }

    pub fn validate(&self) -> Result<CompetencyRatings, ValidationError> {
        let mut ratings = BTreeMap::new();
        for competency in Competency::ALL {
            let rating = match self.ratings.get(competency) {
                Some(raw) => Rating::new(*raw)
                    .ok_or_else(|| ValidationError::out_of_range(competency.id()))?,
                None => Rating::DEFAULT,
            };
            ratings.insert(*competency, rating);
        }
        CompetencyRatings::from_complete(ratings)
            .ok_or_else(|| ValidationError::missing("competencies"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotivationInput {
    pub tags: Vec<Motivation>,
    pub weekend_activity: Option<WeekendActivity>,
}

impl MotivationInput {
    pub fn validate(&self) -> Result<MotivationAnswers, ValidationError> {
        let weekend_activity = self
            .weekend_activity
            .ok_or_else(|| ValidationError::missing("weekend_activity"))?;
        let tags: BTreeSet<Motivation> = self.tags.iter().copied().collect();
        Ok(MotivationAnswers {
            tags,
            weekend_activity,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentInput {
    pub environment: Option<Environment>,
}

impl EnvironmentInput {
    pub fn selected(environment: Environment) -> Self {
        Self {
            environment: Some(environment),
        }
    }

    pub fn validate(&self) -> Result<Environment, ValidationError> {
        self.environment
            .ok_or_else(|| ValidationError::missing("environment"))
    }
}

/// Raw work-value ratings. Every value must be rated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuesInput {
    pub ratings: BTreeMap<WorkValue, i64>,
}

impl ValuesInput {
    pub fn uniform(value: i64) -> Self {
        Self {
            ratings: WorkValue::ALL.iter().map(|v| (*v, value)).collect(),
        }
    }

    pub fn with(mut self, value: WorkValue, rating: i64) -> Self {
        self.ratings.insert(value, rating);
        self
    }

    pub fn validate(&self) -> Result<ValueRatings, ValidationError> {
        let mut ratings = BTreeMap::new();
        for value in WorkValue::ALL {
            let raw = self
                .ratings
                .get(value)
                .ok_or_else(|| ValidationError::missing(value.id()))?;
            let rating = Rating::new(*raw).ok_or_else(|| ValidationError::out_of_range(value.id()))?;
            ratings.insert(*value, rating);
        }
        ValueRatings::from_complete(ratings).ok_or_else(|| ValidationError::missing("values"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalityInput {
    pub presentation_style: Option<PresentationStyle>,
    pub problem_solving_style: Option<ProblemSolvingStyle>,
    pub strength: String,
    pub development: String,
}

impl PersonalityInput {
    pub fn validate(&self) -> Result<PersonalityAnswers, ValidationError> {
        let strength = self.strength.trim();
        if strength.is_empty() {
            return Err(ValidationError::missing("strength"));
        }
        let development = self.development.trim();
        if development.is_empty() {
            return Err(ValidationError::missing("development"));
        }
        let presentation_style = self
            .presentation_style
            .ok_or_else(|| ValidationError::missing("presentation_style"))?;
        let problem_solving_style = self
            .problem_solving_style
            .ok_or_else(|| ValidationError::missing("problem_solving_style"))?;

        Ok(PersonalityAnswers {
            presentation_style,
            problem_solving_style,
            strength: strength.to_string(),
            development: development.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_info_requires_trimmed_name() {
        let err = PersonalInfoInput::named("   ").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingField("name".into()));

        let info = PersonalInfoInput::named("  Anna ").validate().unwrap();
        assert_eq!(info.name, "Anna");
        assert_eq!(info.age, 15);
        assert_eq!(info.confidence, None);
    }

    #[test]
    fn test_personal_info_clamps_age() {
        let mut input = PersonalInfoInput::named("Ben");
        input.age = Some(9);
        assert_eq!(input.validate().unwrap().age, 13);
        input.age = Some(42);
        assert_eq!(input.validate().unwrap().age, 18);
        input.age = Some(16);
        assert_eq!(input.validate().unwrap().age, 16);
    }

    #[test]
    fn test_competencies_default_to_three() {
        let input = CompetencyInput::default().with(Competency::MathLogic, 5);
        let ratings = input.validate().unwrap();
        assert_eq!(ratings.get(Competency::MathLogic).value(), 5);
        assert_eq!(ratings.get(Competency::Writing).value(), 3);
    }

    #[test]
    fn test_competency_out_of_range_names_competency() {
        let err = CompetencyInput::uniform(3)
            .with(Competency::Creativity, 6)
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::OutOfRange("creativity".into()));

        let err = CompetencyInput::uniform(0).validate().unwrap_err();
        assert_eq!(err, ValidationError::OutOfRange("language".into()));
    }

    #[test]
    fn test_motivation_requires_weekend_choice() {
        let input = MotivationInput {
            tags: vec![Motivation::Social],
            weekend_activity: None,
        };
        assert_eq!(
            input.validate().unwrap_err(),
            ValidationError::MissingField("weekend_activity".into())
        );
    }

    #[test]
    fn test_motivation_tags_may_be_empty_and_deduplicate() {
        let input = MotivationInput {
            tags: vec![Motivation::Creative, Motivation::Creative],
            weekend_activity: Some(WeekendActivity::Reading),
        };
        assert_eq!(input.validate().unwrap().tags.len(), 1);

        let input = MotivationInput {
            tags: vec![],
            weekend_activity: Some(WeekendActivity::Tinkering),
        };
        assert!(input.validate().unwrap().tags.is_empty());
    }

    #[test]
    fn test_environment_requires_selection() {
        assert_eq!(
            EnvironmentInput::default().validate().unwrap_err(),
            ValidationError::MissingField("environment".into())
        );
        assert_eq!(
            EnvironmentInput::selected(Environment::People).validate(),
            Ok(Environment::People)
        );
    }

    #[test]
    fn test_values_require_every_rating() {
        let mut input = ValuesInput::uniform(4);
        input.ratings.remove(&WorkValue::Career);
        assert_eq!(
            input.validate().unwrap_err(),
            ValidationError::MissingField("career".into())
        );

        let err = ValuesInput::uniform(4)
            .with(WorkValue::Income, 0)
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::OutOfRange("income".into()));
    }

    #[test]
    fn test_personality_requires_reflections_and_choices() {
        let mut input = PersonalityInput {
            presentation_style: Some(PresentationStyle::Visual),
            problem_solving_style: Some(ProblemSolvingStyle::HandsOn),
            strength: "patient".into(),
            development: "  ".into(),
        };
        assert_eq!(
            input.validate().unwrap_err(),
            ValidationError::MissingField("development".into())
        );

        input.development = "public speaking".into();
        input.problem_solving_style = None;
        assert_eq!(
            input.validate().unwrap_err(),
            ValidationError::MissingField("problem_solving_style".into())
        );

        input.problem_solving_style = Some(ProblemSolvingStyle::AskOthers);
        let answers = input.validate().unwrap();
        assert_eq!(answers.strength, "patient");
    }

    #[test]
    fn test_input_deserializes_from_tagged_json() {
        let json = r#"{"step":"environment","environment":"nature"}"#;
        let input: StepInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.step(), StepId::Environment);
        assert_eq!(
            input.validate().unwrap(),
            StepAnswer::Environment(Environment::Nature)
        );

        let input: StepInput = serde_json::from_str(r#"{"step":"welcome"}"#).unwrap();
        assert_eq!(input, StepInput::Welcome);
    }
}
