use clap::ValueEnum;
use serde::Serialize;

use navigator_core::{
    CatalogEntry, Competency, ConfidenceLevel, Environment, Motivation, PresentationStyle,
    ProblemSolvingStyle, WeekendActivity, WorkValue,
};

#[derive(Clone, Copy, ValueEnum)]
pub enum CatalogKind {
    Competencies,
    Motivations,
    Weekend,
    Environments,
    Values,
    Confidence,
    Presentation,
    ProblemSolving,
}

#[derive(Serialize)]
struct Entry {
    id: &'static str,
    label: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
}

#[derive(Serialize)]
struct Section {
    kind: &'static str,
    entries: Vec<Entry>,
}

fn section<T: CatalogEntry>() -> Section {
    Section {
        kind: T::KIND,
        entries: T::entries()
            .iter()
            .map(|e| Entry {
                id: e.id(),
                label: e.label(),
                description: e.description(),
            })
            .collect(),
    }
}

impl CatalogKind {
    const ALL: [CatalogKind; 8] = [
        CatalogKind::Competencies,
        CatalogKind::Motivations,
        CatalogKind::Weekend,
        CatalogKind::Environments,
        CatalogKind::Values,
        CatalogKind::Confidence,
        CatalogKind::Presentation,
        CatalogKind::ProblemSolving,
    ];

    fn section(self) -> Section {
        match self {
            CatalogKind::Competencies => section::<Competency>(),
            CatalogKind::Motivations => section::<Motivation>(),
            CatalogKind::Weekend => section::<WeekendActivity>(),
            CatalogKind::Environments => section::<Environment>(),
            CatalogKind::Values => section::<WorkValue>(),
            CatalogKind::Confidence => section::<ConfidenceLevel>(),
            CatalogKind::Presentation => section::<PresentationStyle>(),
            CatalogKind::ProblemSolving => section::<ProblemSolvingStyle>(),
        }
    }
}

pub fn run(kind: Option<CatalogKind>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let sections: Vec<Section> = match kind {
        Some(kind) => vec![kind.section()],
        None => CatalogKind::ALL.iter().map(|k| k.section()).collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("[{}]", section.kind);
        for entry in &section.entries {
            println!("  {:<24} {}", entry.id, entry.label);
        }
    }
    Ok(())
}
