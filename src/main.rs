//! Command line entry point for the ILR Qualifying Period Engine.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Args, FromArgMatches, Parser, Subcommand};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use ilr_engine::api::{AppState, AssessmentRequest, PRACTICE_DISCLAIMER, RouteCatalog, create_router};
use ilr_engine::calculation::evaluate_with_rules;
use ilr_engine::config::RulesLoader;
use ilr_engine::error::EngineError;
use ilr_engine::models::{AssessmentInput, AssessmentResult, BenefitsDuration, Route};
use ilr_engine::telemetry::{self, TelemetryError};

#[derive(Parser, Debug)]
#[command(
    name = "ilr-engine",
    about = "Estimate a practice ILR qualifying period from a handful of answers",
    version
)]
struct Cli {
    /// Log level or filter directive (RUST_LOG takes precedence)
    #[arg(long, global = true, env = "ILR_LOG_LEVEL", default_value = "info")]
    log_level: String,
    /// Rule set YAML file (defaults to the built-in canonical rules)
    #[arg(long, global = true, env = "ILR_RULES")]
    rules: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate one assessment and print the estimate
    Assess(AssessArgs),
    /// List the selectable routes
    Routes,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "ILR_HOST", default_value = "127.0.0.1")]
    host: String,
    /// Port to bind
    #[arg(long, env = "ILR_PORT", default_value_t = 8080)]
    port: u16,
}

impl ServeArgs {
    /// Resolves `serve` arguments when no subcommand was given, so the
    /// `ILR_HOST` and `ILR_PORT` fallbacks still apply.
    fn from_env() -> Result<Self, clap::Error> {
        let matches =
            Self::augment_args(clap::Command::new("serve")).try_get_matches_from(["serve"])?;
        Self::from_arg_matches(&matches)
    }
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Route that best describes the situation (e.g. high_earner, benefits)
    #[arg(long, value_parser = parse_route)]
    route: Option<Route>,
    /// Annual salary in pounds before tax (high_earner route)
    #[arg(long)]
    salary: Option<Decimal>,
    /// Salary level has been held for the last 3 continuous years
    #[arg(long)]
    held_three_years: bool,
    /// Time on benefits: under_twelve_months or twelve_months_or_more
    #[arg(long, value_parser = parse_benefits_duration)]
    benefits_duration: Option<BenefitsDuration>,
    /// English level is C1 or higher
    #[arg(long)]
    c1: bool,
    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Args(#[from] clap::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid listen address '{0}'")]
    Address(String),
    #[error("Please complete the inputs above (no --route given).")]
    Incomplete,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    let loader = load_rules(cli.rules.as_deref())?;

    match resolve_command(cli.command)? {
        Command::Serve(args) => run_server(args, loader).await,
        Command::Assess(args) => run_assess(args, &loader),
        Command::Routes => run_routes(&loader),
    }
}

fn resolve_command(command: Option<Command>) -> Result<Command, CliError> {
    match command {
        Some(command) => Ok(command),
        None => Ok(Command::Serve(ServeArgs::from_env()?)),
    }
}

fn load_rules(path: Option<&Path>) -> Result<RulesLoader, CliError> {
    match path {
        Some(path) => Ok(RulesLoader::load(path)?),
        None => Ok(RulesLoader::canonical()),
    }
}

fn parse_route(raw: &str) -> Result<Route, String> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_string())).map_err(|_| {
        let names: Vec<&str> = Route::ALL.iter().map(Route::as_str).collect();
        format!("unknown route '{raw}' (expected one of: {})", names.join(", "))
    })
}

fn parse_benefits_duration(raw: &str) -> Result<BenefitsDuration, String> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_string())).map_err(|_| {
        format!("unknown duration '{raw}' (expected under_twelve_months or twelve_months_or_more)")
    })
}

async fn run_server(args: ServeArgs, loader: RulesLoader) -> Result<(), CliError> {
    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|_| CliError::Address(format!("{}:{}", args.host, args.port)))?;

    let version = loader.metadata().version.clone();
    let app = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, rule_set_version = %version, "ILR qualifying period engine ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

fn run_assess(args: AssessArgs, loader: &RulesLoader) -> Result<(), CliError> {
    let request = AssessmentRequest {
        route: args.route,
        salary: args.salary,
        held_three_years: Some(args.held_three_years),
        benefits_duration: args.benefits_duration,
        has_c1_english: args.c1,
    };
    let input = AssessmentInput::try_from(request)?;

    let result = evaluate_with_rules(&input, loader.rules());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    match result {
        AssessmentResult::Complete(period) => {
            if !args.json {
                println!(
                    "Estimated ILR qualifying period (practice only): {} years",
                    period.years
                );
                if period.c1_reduction_applied {
                    println!(
                        "C1 English selected: {}-year reduction applied.",
                        period.reduction()
                    );
                }
                println!();
                println!("{PRACTICE_DISCLAIMER}");
            }
            Ok(())
        }
        AssessmentResult::Incomplete => Err(CliError::Incomplete),
    }
}

fn run_routes(loader: &RulesLoader) -> Result<(), CliError> {
    let catalog = RouteCatalog::from_rules(loader.rules());
    println!("Rule set version: {}", catalog.rule_set_version);

    for entry in catalog.routes {
        let base = match entry.fixed_base_years {
            Some(years) => format!("{years} years"),
            None => "depends on answers".to_string(),
        };
        println!();
        println!("{} ({})", entry.route, base);
        println!("  {}", entry.label);
        println!("  {} [{}]", entry.guidance, entry.source_ref);
    }

    Ok(())
}
