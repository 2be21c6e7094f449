use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use dialectics::cli_output::{OutputMode, OutputWriter};
use dialectics::config::Settings;
use dialectics::demo::run_demonstration;
use dialectics::layers::multi_layer_analysis;
use dialectics::report::{render_analysis, render_ethics, render_guidance, render_layers, render_roadmap};
use dialectics::roadmap::{create_roadmap, DEFAULT_TIMELINE_MONTHS};
use dialectics::{AnalysisHistory, ComplexityLevel, Context, DialecticalFramework};

#[derive(Parser)]
#[command(name = "dialectics")]
#[command(about = "Generate template-based dialectical analysis reports", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (human, plain, json); auto-detected when omitted
    #[arg(short, long, global = true)]
    format: Option<OutputMode>,

    /// Config file (default: <config dir>/dialectics/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demonstration (default)
    Demo,

    /// Thesis / antithesis / synthesis analysis of a statement
    Analyze {
        thesis: String,

        /// general, ai_ethics, educational, corporate, healthcare, government, personal
        #[arg(long, default_value = "general")]
        context: Context,
    },

    /// AI-ethics analysis with challenges grouped by concern
    Ethics { scenario: String },

    /// Cognitive, temporal and stakeholder analysis of a scenario
    Layers {
        scenario: String,

        /// Complexity label shown in the report (low, medium, high)
        #[arg(long, default_value = "medium")]
        level: ComplexityLevel,
    },

    /// Staged implementation roadmap
    Roadmap {
        #[arg(long, default_value = "corporate")]
        context: Context,

        /// Objective to list on the roadmap (repeatable)
        #[arg(long = "objective")]
        objectives: Vec<String>,

        /// Total timeline in months
        #[arg(long, default_value_t = DEFAULT_TIMELINE_MONTHS)]
        months: u32,
    },

    /// Context-specific implementation guidance
    Guidance { context: Context },
}

/// `--verbose` forces debug; otherwise `RUST_LOG` wins over the info default.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    let framework = DialecticalFramework::new().with_parameters(settings.parameters);
    debug!("Parameters: {:?}", framework.parameters());

    let mut history = AnalysisHistory::new();
    let mut writer = match cli.format {
        Some(mode) => OutputWriter::stdout(mode),
        None => OutputWriter::auto(),
    };

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            run_demonstration(&mut writer, &framework, &mut history)?;
        }

        Commands::Analyze { thesis, context } => {
            let record = framework.analyze(&thesis, context, &mut history)?;
            render_analysis(&mut writer, &record)?;
        }

        Commands::Ethics { scenario } => {
            let analysis = framework.analyze_ai_ethics(&scenario, &mut history)?;
            render_ethics(&mut writer, &analysis)?;
        }

        Commands::Layers { scenario, level } => {
            let report = multi_layer_analysis(&scenario, level)?;
            render_layers(&mut writer, &report)?;
        }

        Commands::Roadmap {
            context,
            objectives,
            months,
        } => {
            let roadmap = create_roadmap(context, &objectives, months)?;
            render_roadmap(&mut writer, &roadmap)?;
        }

        Commands::Guidance { context } => {
            render_guidance(&mut writer, context)?;
        }
    }

    if let Some(mean) = history.average_confidence() {
        debug!("{} analyses recorded, mean confidence {:.2}", history.len(), mean);
    }
    Ok(())
}
