use std::cmp::Ordering;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use grid_version::cli::orchestration::{self, CheckOutcome, Selection};
use grid_version::config::{self, Config};
use grid_version::domain::Version;
use grid_version::ui;
use grid_version::warning::SelectionWarning;

/// Exit code for `check` when a newer version is available
const EXIT_OUTDATED: u8 = 3;

#[derive(Parser)]
#[command(
    name = "grid-version",
    version,
    about = "Parse, compare and pick the newest Selenium Grid driver and server versions"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity (-v debug, -vv trace)")]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the version fields found in a string
    Parse { raw: String },

    /// Compare two versions, printing "<", "=" or ">"
    Compare { a: String, b: String },

    /// Print the newest candidate
    Latest {
        #[command(flatten)]
        input: CandidateArgs,
    },

    /// Report whether something newer than a cached artifact is available
    Check {
        /// Cached artifact name or version
        cached: String,

        #[command(flatten)]
        input: CandidateArgs,
    },

    /// Show configured artifact patterns and exit
    Artifacts,
}

#[derive(clap::Args)]
struct CandidateArgs {
    #[arg(short, long, help = "Scan input as a listing using this artifact's pattern")]
    artifact: Option<String>,

    #[arg(short, long, help = "Read candidates from a file instead of stdin")]
    file: Option<String>,

    /// Candidates; read from --file or stdin when omitted
    candidates: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.log_level, args.verbose);

    match run(args.command, &config) {
        Ok(code) => code,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the configured level unless -v is given
fn init_logging(configured: &str, verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured)),
        1 => EnvFilter::new("grid_version=debug,warn"),
        _ => EnvFilter::new("grid_version=trace,info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command, config: &Config) -> Result<ExitCode> {
    match command {
        Command::Parse { raw } => {
            let version = Version::parse(&raw)?;
            println!("{}", ui::format_version_fields(&version));
            Ok(ExitCode::SUCCESS)
        }
        Command::Compare { a, b } => {
            let symbol = match grid_version::compare_str(&a, &b)? {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            println!("{}", symbol);
            Ok(ExitCode::SUCCESS)
        }
        Command::Latest { input } => {
            let (selection, source) = select(&input, config)?;
            match selection.latest {
                Some(latest) => {
                    println!("{}", latest.raw());
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    ui::display_selection_warning(&SelectionWarning::NoCandidates {
                        source: source.to_string(),
                    });
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Check { cached, input } => {
            let (text, source) = ui::read_input(&input.candidates, input.file.as_deref())?;
            let pattern = artifact_pattern(config, input.artifact.as_deref())?;
            let (outcome, selection) =
                orchestration::check_cached(&cached, &text, pattern.as_ref())?;
            report_skipped(&selection);

            match outcome {
                CheckOutcome::NoCandidates { cached } => {
                    ui::display_selection_warning(&SelectionWarning::NoCandidates {
                        source: source.to_string(),
                    });
                    ui::display_error(&format!("Cannot tell whether {} is current", cached.raw()));
                    Ok(ExitCode::FAILURE)
                }
                CheckOutcome::UpToDate { cached } => {
                    ui::display_success(&format!("{} is up to date", cached.raw()));
                    Ok(ExitCode::SUCCESS)
                }
                CheckOutcome::Outdated { cached, latest } => {
                    ui::display_status(&format!(
                        "Newer version available: {} (cached: {})",
                        latest, cached
                    ));
                    println!("{}", latest.raw());
                    Ok(ExitCode::from(EXIT_OUTDATED))
                }
            }
        }
        Command::Artifacts => {
            ui::display_artifacts(&config.artifacts);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn select(input: &CandidateArgs, config: &Config) -> Result<(Selection, ui::InputSource)> {
    let (text, source) = ui::read_input(&input.candidates, input.file.as_deref())?;
    let pattern = artifact_pattern(config, input.artifact.as_deref())?;
    let selection = orchestration::select_from_input(&text, pattern.as_ref());
    report_skipped(&selection);
    Ok((selection, source))
}

fn artifact_pattern(
    config: &Config,
    name: Option<&str>,
) -> Result<Option<grid_version::ArtifactPattern>> {
    let (pattern, warning) = orchestration::resolve_artifact(config, name)?;
    if let Some(warning) = warning {
        ui::display_selection_warning(&warning);
    }
    Ok(pattern)
}

fn report_skipped(selection: &Selection) {
    for warning in &selection.warnings {
        tracing::debug!("{}", warning);
    }
}
