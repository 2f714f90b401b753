use clap::Args;
use std::path::{Path, PathBuf};

use navigator_core::{Config, ExportRecord};

use super::replay_sheet;

#[derive(Args)]
pub struct ExportArgs {
    /// Answer sheet (.json or .toml)
    pub sheet: PathBuf,
    /// Output file, or `-` for stdout. Defaults to the export directory.
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let wizard = replay_sheet(&args.sheet)?;
    let record = wizard
        .export()
        .ok_or("answer sheet did not complete the questionnaire")?;

    write_record(&record, args.out.as_deref(), &config)
}

/// Write `record` to `out` (or the configured export directory) and report the path.
pub fn write_record(
    record: &ExportRecord,
    out: Option<&Path>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = record.to_json(config.export.pretty)?;

    let path = match out {
        Some(p) if p == Path::new("-") => {
            println!("{json}");
            return Ok(());
        }
        Some(p) => p.to_path_buf(),
        None => config.export_dir()?.join(record.file_name()),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, json)?;
    tracing::info!(path = %path.display(), "export written");
    println!("Results saved to {}", path.display());
    Ok(())
}
