//! Answer sheets: every step's raw input in one document.
//!
//! A sheet lets a front end (or a test) drive a whole session without
//! prompting. It is read from JSON or TOML:
//!
//! ```toml
//! environment = "workshop"
//!
//! [personal]
//! name = "Anna"
//! age = 15
//!
//! [competencies]
//! practical_work = 5
//! math_logic = 2
//!
//! [motivation]
//! tags = ["practical", "creative"]
//! weekend_activity = "tinkering"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::input::{
    CompetencyInput, EnvironmentInput, MotivationInput, PersonalInfoInput, PersonalityInput,
    StepInput, ValuesInput,
};
use crate::error::SheetError;
use crate::profile::{Competency, Environment, WorkValue};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerSheet {
    pub personal: PersonalInfoInput,
    /// Competencies left out are rated 3.
    pub competencies: BTreeMap<Competency, i64>,
    pub motivation: MotivationInput,
    pub environment: Option<Environment>,
    pub values: BTreeMap<WorkValue, i64>,
    pub personality: PersonalityInput,
}

impl AnswerSheet {
    /// One input per answerable step, in wizard order, starting with Welcome.
    pub fn inputs(&self) -> Vec<StepInput> {
        vec![
            StepInput::Welcome,
            StepInput::PersonalInfo(self.personal.clone()),
            StepInput::Competencies(CompetencyInput {
                ratings: self.competencies.clone(),
            }),
            StepInput::Motivation(self.motivation.clone()),
            StepInput::Environment(EnvironmentInput {
                environment: self.environment,
            }),
            StepInput::FutureValues(ValuesInput {
                ratings: self.values.clone(),
            }),
            StepInput::Personality(self.personality.clone()),
        ]
    }

    pub fn from_json_str(content: &str) -> Result<Self, SheetError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SheetError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a sheet, choosing the format by file extension.
    pub fn from_path(path: &Path) -> Result<Self, SheetError> {
        let content = std::fs::read_to_string(path).map_err(|source| SheetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "json" => Self::from_json_str(&content),
            "toml" => Self::from_toml_str(&content),
            other => Err(SheetError::UnsupportedFormat(other.to_string())),
        }
    }
}
