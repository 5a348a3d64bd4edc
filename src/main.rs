use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;
use serde::Serialize;
use serde_json::json;

use scene_director::catalog::{load_catalog, resolve_catalog_path, Catalog};
use scene_director::error_codes::{find_coded_error, CodedError, ErrorEnvelope};
use scene_director::render::render_analysis_text;
use scene_director::{
    analyze_idea_with, generate_plan_with, plan_fingerprint, render_text, IdeaAnalysis,
    ProductionPlan, DEFAULT_IDEA,
};

#[derive(Debug, Parser)]
#[command(name = "scene-director")]
#[command(about = "Rapid pitch-to-production planner")]
#[command(version = env!("SCENE_DIRECTOR_VERSION"))]
struct Cli {
    /// Log pipeline decisions to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a production plan for an idea.
    Plan {
        #[command(flatten)]
        input: IdeaInput,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Shorthand for `--format json`.
        #[arg(long)]
        json: bool,
    },
    /// Show the seed, keywords and inferred values for an idea.
    Analyze {
        #[command(flatten)]
        input: IdeaInput,
        #[arg(long)]
        json: bool,
    },
    /// Print the effective content catalog, or validate a catalog file.
    Catalog {
        /// Validate a catalog file instead of printing the effective one.
        #[arg(long, value_name = "PATH")]
        check: Option<PathBuf>,
        #[arg(long, value_name = "PATH", conflicts_with = "check")]
        catalog: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
struct IdeaInput {
    /// Idea text; several words are joined with spaces.
    #[arg(value_name = "IDEA", conflicts_with_all = ["file", "stdin"])]
    idea: Vec<String>,
    /// Read the idea from a file.
    #[arg(long, value_name = "PATH", conflicts_with = "stdin")]
    file: Option<PathBuf>,
    /// Read the idea from standard input.
    #[arg(long)]
    stdin: bool,
    /// YAML catalog replacing some or all built-in tables.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Serialize)]
struct PlanReport<'a> {
    ok: bool,
    fingerprint: String,
    plan: &'a ProductionPlan,
}

#[derive(Debug, Serialize)]
struct AnalysisReport<'a> {
    ok: bool,
    analysis: &'a IdeaAnalysis,
}

impl Commands {
    fn wants_json(&self) -> bool {
        match self {
            Commands::Plan { format, json, .. } => *json || *format == OutputFormat::Json,
            Commands::Analyze { json, .. } | Commands::Catalog { json, .. } => *json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let json = cli.command.wants_json();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_error(&error, json),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Plan {
            input,
            format,
            json,
        } => {
            let format = if json { OutputFormat::Json } else { format };
            run_plan(&input, format)
        }
        Commands::Analyze { input, json } => run_analyze(&input, json),
        Commands::Catalog {
            check,
            catalog,
            json,
        } => match check {
            Some(path) => run_catalog_check(&path),
            None => run_catalog_dump(catalog.as_deref(), json),
        },
    }
}

fn run_plan(input: &IdeaInput, format: OutputFormat) -> Result<()> {
    let idea = read_idea(input)?;
    let catalog = effective_catalog(input.catalog.as_deref())?;
    let plan = generate_plan_with(&idea, &catalog);

    match format {
        OutputFormat::Text => print!("{}", render_text(&plan)),
        OutputFormat::Json => {
            let report = PlanReport {
                ok: true,
                fingerprint: plan_fingerprint(&plan)?,
                plan: &plan,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&plan)?),
    }
    Ok(())
}

fn run_analyze(input: &IdeaInput, json: bool) -> Result<()> {
    let idea = read_idea(input)?;
    let catalog = effective_catalog(input.catalog.as_deref())?;
    let analysis = analyze_idea_with(&idea, &catalog);

    if json {
        let report = AnalysisReport {
            ok: true,
            analysis: &analysis,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_analysis_text(&analysis));
    }
    Ok(())
}

fn run_catalog_check(path: &Path) -> Result<()> {
    let catalog = load_catalog(path)?;
    println!(
        "OK: {} ({} tone rules, {} location presets, {} visual moods)",
        path.display(),
        catalog.tone_rules.len(),
        catalog.location_presets.len(),
        catalog.visual_moods.len()
    );
    Ok(())
}

fn run_catalog_dump(explicit: Option<&Path>, json: bool) -> Result<()> {
    let catalog = effective_catalog(explicit)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        print!("{}", serde_yaml::to_string(&catalog)?);
    }
    Ok(())
}

fn effective_catalog(explicit: Option<&Path>) -> Result<Catalog> {
    match resolve_catalog_path(explicit) {
        Some(path) => {
            debug!("loading catalog {}", path.display());
            load_catalog(&path)
        }
        None => Ok(Catalog::builtin().clone()),
    }
}

fn read_idea(input: &IdeaInput) -> Result<String> {
    if let Some(path) = &input.file {
        return fs::read_to_string(path).map_err(|error| {
            anyhow!(CodedError::usage(
                "INPUT_READ_FAILED",
                format!("failed to read idea file {}: {error}", path.display()),
            )
            .with_details(json!({ "file": path.display().to_string() })))
        });
    }

    if input.stdin {
        let mut idea = String::new();
        io::stdin().read_to_string(&mut idea).map_err(|error| {
            anyhow!(CodedError::usage(
                "INPUT_READ_FAILED",
                format!("failed to read idea from stdin: {error}"),
            ))
        })?;
        return Ok(idea);
    }

    if input.idea.is_empty() {
        debug!("no idea supplied; using the default idea");
        return Ok(DEFAULT_IDEA.to_owned());
    }
    Ok(input.idea.join(" "))
}

fn report_error(error: &anyhow::Error, json: bool) -> ExitCode {
    if json {
        let envelope = ErrorEnvelope::from_error(error);
        match serde_json::to_string_pretty(&envelope) {
            Ok(text) => println!("{text}"),
            Err(_) => eprintln!("error: {error:#}"),
        }
    } else {
        eprintln!("error: {error:#}");
    }

    let code = find_coded_error(error).map_or(1, CodedError::exit_code);
    ExitCode::from(code)
}
