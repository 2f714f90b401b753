use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use navigator_core::{Competency, Config, Pathway, ScoreBreakdown};

use super::{replay_sheet, report};

#[derive(Args)]
pub struct EvaluateArgs {
    /// Answer sheet (.json or .toml)
    pub sheet: PathBuf,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable result of `evaluate --json`.
#[derive(Serialize)]
struct EvaluateOutput<'a> {
    session_id: &'a str,
    pathway: Pathway,
    title: &'static str,
    strengths: &'a [Competency],
    improvements: &'a [Competency],
    breakdown: &'a ScoreBreakdown,
    next_steps: [&'static str; 4],
}

pub fn run(args: EvaluateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let wizard = replay_sheet(&args.sheet)?;
    let rec = wizard
        .recommendation()
        .ok_or("answer sheet did not complete the questionnaire")?;

    if args.json {
        let output = EvaluateOutput {
            session_id: wizard.session_id(),
            pathway: rec.pathway,
            title: rec.pathway.title(),
            strengths: &rec.strengths,
            improvements: &rec.improvements,
            breakdown: &rec.breakdown,
            next_steps: rec.pathway.next_steps(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let config = Config::load()?;
        let stdout = std::io::stdout();
        report::write_report(&mut stdout.lock(), wizard.profile(), &rec, &config.display)?;
    }
    Ok(())
}
