//! Plain-text results page shared by `run` and `evaluate`.

use std::io::{self, Write};

use navigator_core::storage::DisplayConfig;
use navigator_core::{AnswerProfile, Competency, Recommendation};

pub fn write_report<W: Write>(
    out: &mut W,
    profile: &AnswerProfile,
    rec: &Recommendation,
    display: &DisplayConfig,
) -> io::Result<()> {
    let name = profile.name().unwrap_or("you");
    writeln!(out, "Results for {name}")?;
    writeln!(out)?;
    writeln!(out, "Recommendation: {}", rec.pathway.title())?;
    for line in rec.pathway.tagline().lines() {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Practical score: {:.2}   Theoretical score: {:.2}",
        rec.breakdown.practical_score, rec.breakdown.theoretical_score
    )?;

    write_competencies(out, "Your strengths", &rec.strengths, "none rated 4 or higher")?;
    write_competencies(out, "Room to grow", &rec.improvements, "none rated 2 or lower")?;

    if let Some(personality) = &profile.personality {
        writeln!(out)?;
        writeln!(out, "Your reflection")?;
        writeln!(out, "  Biggest strength: {}", or_dash(&personality.strength))?;
        writeln!(out, "  Want to work on:  {}", or_dash(&personality.development))?;
    }

    if display.show_next_steps {
        writeln!(out)?;
        writeln!(out, "Next steps")?;
        for (i, step) in rec.pathway.next_steps().iter().enumerate() {
            writeln!(out, "  {}. {step}", i + 1)?;
        }
    }
    Ok(())
}

fn write_competencies<W: Write>(
    out: &mut W,
    heading: &str,
    list: &[Competency],
    empty: &str,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{heading}")?;
    if list.is_empty() {
        writeln!(out, "  ({empty})")?;
    }
    for c in list {
        writeln!(out, "  - {}", c.label())?;
    }
    Ok(())
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}
