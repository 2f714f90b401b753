pub mod catalog;
pub mod config;
pub mod evaluate;
pub mod export;
pub mod report;
pub mod run;
pub mod steps;

use std::path::Path;

use navigator_core::{AnswerSheet, WizardEngine};

/// Replay `path` into a fresh wizard, stopping at the first rejected step.
pub fn replay_sheet(path: &Path) -> navigator_core::error::Result<WizardEngine> {
    let sheet = AnswerSheet::from_path(path)?;
    let mut wizard = WizardEngine::new();
    wizard.replay(&sheet)?;
    Ok(wizard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use navigator_core::{CoreError, SheetError, StepId, ValidationError};
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    #[test]
    fn test_replay_sheet_completes_wizard() {
        let wizard = replay_sheet(&fixture("academic.json")).unwrap();
        assert_eq!(wizard.current_step(), StepId::Results);
    }

    #[test]
    fn test_replay_sheet_reports_rejected_step() {
        let err = replay_sheet(&fixture("incomplete.json")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MissingField(ref field)) if field == "environment"
        ));
    }

    #[test]
    fn test_replay_sheet_reports_unreadable_file() {
        let err = replay_sheet(Path::new("/nonexistent/sheet.json")).unwrap_err();
        assert!(matches!(err, CoreError::Sheet(SheetError::Read { .. })));
    }
}
