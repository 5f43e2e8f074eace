//! onto-matchers: concept matchers for ontology alignment
//!
//! Aligns two ontologies with embedding equivalence, definition equivalence
//! and definition subsumption matchers.

#![allow(clippy::struct_excessive_bools)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use onto_matchers::{
    cli::{self, MatchOverrides, MatchPaths},
    config::{self, ConfigPreset},
    matching::{CandidateMerge, MatcherKind},
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nOntology Formats:",
        "\n  OWL (RDF/XML), JSON, YAML concept lists",
        "\n\nMatchers:",
        "\n  embedding, definition, subsumption",
        "\n\nOutput Formats:",
        "\n  json, rdf, summary, tsv"
    )
}

#[derive(Parser)]
#[command(name = "onto-matchers")]
#[command(version, long_version = build_long_version())]
#[command(about = "Concept matchers for ontology alignment", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Alignment written
    1  Error occurred
    2  Matching resource missing or unreadable
    3  Ontology document missing or malformed

EXAMPLES:
    # Label embeddings only
    onto-matchers match a.owl b.owl --matcher embedding --vectors glove.300d.txt

    # Subsumption with a domain lexicon, Alignment API output
    onto-matchers match a.owl b.json --matcher subsumption --lexicon lexicon.yaml -o rdf

    # Every matcher, strict weighting, only confident cells
    onto-matchers match a.owl b.owl --preset strict --threshold 0.5 -o summary")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `match` subcommand
#[derive(Parser)]
struct MatchArgs {
    /// Path to the source ontology
    source: PathBuf,

    /// Path to the target ontology
    target: PathBuf,

    /// Matcher to run (repeatable; defaults to the configured set)
    #[arg(short, long = "matcher", value_enum)]
    matchers: Vec<MatcherKind>,

    /// Weighting preset (default, strict, lenient)
    #[arg(long, value_parser = parse_preset)]
    preset: Option<ConfigPreset>,

    /// Word vector table (one `term v1 v2 ...` line per term)
    #[arg(long)]
    vectors: Option<PathBuf>,

    /// Domain/meronym lexicon (YAML or JSON)
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Ontology profile score in [0, 1]
    #[arg(long)]
    profile_score: Option<f64>,

    /// Logistic slope of the confidence curve (0 = linear)
    #[arg(long)]
    slope: Option<u32>,

    /// Weight at profile score 0
    #[arg(long)]
    range_min: Option<f64>,

    /// Weight at profile score 1
    #[arg(long)]
    range_max: Option<f64>,

    /// Expected vector dimensionality
    #[arg(long)]
    dimension: Option<usize>,

    /// How repeated enumerations of one concept are combined
    #[arg(long, value_enum)]
    candidate_merge: Option<CandidateMerge>,

    /// Only report cells with confidence above this value
    #[arg(long)]
    threshold: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Cells listed per matcher in the summary
    #[arg(long)]
    top: Option<usize>,

    /// Evaluate pairs on the calling thread only
    #[arg(long)]
    sequential: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Align two ontologies and write the relation cells
    Match(MatchArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Output JSON Schema for the configuration file format
    ConfigSchema {
        /// Output file path (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect and create configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .onto-matchers.yaml in the current directory
    Init,
}

fn parse_preset(value: &str) -> Result<ConfigPreset, String> {
    ConfigPreset::from_name(value).ok_or_else(|| {
        let known: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
        format!("unknown preset '{value}' (expected one of: {})", known.join(", "))
    })
}

impl MatchArgs {
    fn split(self, no_color: bool) -> (MatchPaths, MatchOverrides) {
        let paths = MatchPaths {
            source: self.source,
            target: self.target,
        };
        let overrides = MatchOverrides {
            preset: self.preset,
            matchers: self.matchers,
            vectors: self.vectors,
            lexicon: self.lexicon,
            profile_score: self.profile_score,
            slope: self.slope,
            range_min: self.range_min,
            range_max: self.range_max,
            dimension: self.dimension,
            candidate_merge: self.candidate_merge,
            threshold: self.threshold,
            format: self.output,
            output_file: self.output_file,
            summary_top: self.top,
            sequential: self.sequential,
            no_color,
        };
        (paths, overrides)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    match cli.command {
        Commands::Match(args) => {
            let (mut app_config, loaded_from) = config::load_for_run(cli.config.as_deref())?;
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }

            let (paths, overrides) = args.split(cli.no_color);
            overrides.apply(&mut app_config);

            let exit_code = cli::run_match(&app_config, &paths)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "onto-matchers", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (app_config, loaded_from) = config::load_for_run(cli.config.as_deref())?;
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml::to_string(&app_config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 2] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    ::dirs::config_dir().map(|p| p.join("onto-matchers").display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".onto-matchers.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
