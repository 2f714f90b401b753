//! Downloadable result record.
//!
//! Bundles the full answer profile with the outcome of scoring so a user can
//! keep (or hand on) their results after the session ends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::{AnswerProfile, Competency};
use crate::recommendation::{Pathway, Recommendation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub session_id: String,
    pub generated_at: DateTime<Utc>,
    pub profile: AnswerProfile,
    pub recommendation: Pathway,
    pub strengths: Vec<Competency>,
    pub improvements: Vec<Competency>,
}

impl ExportRecord {
    pub fn new(
        session_id: &str,
        profile: AnswerProfile,
        recommendation: &Recommendation,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id: session_id.to_string(),
            generated_at,
            profile,
            recommendation: recommendation.pathway,
            strengths: recommendation.strengths.clone(),
            improvements: recommendation.improvements.clone(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// `navigator_<name>_<YYYYMMDD>.json`
    pub fn file_name(&self) -> String {
        let name = self.profile.name().map(sanitize).unwrap_or_default();
        let name = if name.is_empty() { "anonymous".to_string() } else { name };
        format!("navigator_{}_{}.json", name, self.generated_at.format("%Y%m%d"))
    }
}

/// Keep alphanumerics, `-` and `_`; map whitespace runs to a single `_`.
fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_sep = false;
    for ch in name.trim().chars() {
        if ch.is_alphanumeric() || ch == '-' || ch == '_' {
            out.push(ch);
            last_was_sep = false;
        } else if ch.is_whitespace() && !last_was_sep && !out.is_empty() {
            out.push('_');
            last_was_sep = true;
        }
    }
    out.trim_end_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PersonalInfo;
    use crate::recommendation::evaluate;
    use chrono::TimeZone;

    fn record(name: &str) -> ExportRecord {
        let profile = AnswerProfile {
            personal: Some(PersonalInfo {
                name: name.to_string(),
                class_label: "3A".into(),
                age: 15,
                school: String::new(),
                confidence: None,
            }),
            ..Default::default()
        };
        let rec = evaluate(&profile);
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        ExportRecord::new("session-1", profile, &rec, at)
    }

    #[test]
    fn test_file_name() {
        assert_eq!(record("Anna").file_name(), "navigator_Anna_20260314.json");
        assert_eq!(
            record("  Anna  Maria / 3b ").file_name(),
            "navigator_Anna_Maria_3b_20260314.json"
        );
        assert_eq!(record("../").file_name(), "navigator_anonymous_20260314.json");
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&record("Anna").to_json(false).unwrap()).unwrap();
        assert_eq!(json["session_id"], "session-1");
        assert_eq!(json["recommendation"], "both_paths_open");
        assert_eq!(json["profile"]["personal"]["name"], "Anna");
        assert!(json["strengths"].as_array().unwrap().is_empty());
        assert!(json["generated_at"].as_str().unwrap().starts_with("2026-03-14T09:30:00"));
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        assert!(record("Anna").to_json(true).unwrap().contains('\n'));
    }
}
