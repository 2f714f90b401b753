use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "navigator", version, about = "Career orientation self-assessment")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the questionnaire interactively
    Run(commands::run::RunArgs),
    /// Score an answer sheet and print the recommendation
    Evaluate(commands::evaluate::EvaluateArgs),
    /// Score an answer sheet and write the result file
    Export(commands::export::ExportArgs),
    /// List the wizard steps in order
    Steps {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the ids accepted in answer sheets
    Catalog {
        /// Only list this catalog
        #[arg(value_enum)]
        kind: Option<commands::catalog::CatalogKind>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Evaluate(args) => commands::evaluate::run(args),
        Commands::Export(args) => commands::export::run(args),
        Commands::Steps { json } => commands::steps::run(json),
        Commands::Catalog { kind, json } => commands::catalog::run(kind, json),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "navigator", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
