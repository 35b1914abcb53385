//! Command-line interface for fixmark
//! This binary segments generated fixes and prints them as segment dumps, rendered views or
//! extracted code.
//!
//! Usage:
//!   fixmark segment `<path>` [--format `<format>`] [--response] [--color]  - Segment a generated fix
//!   fixmark extract `<path>` [--response] [--reference `<path>`]         - Print the fenced code (or a score request)
//!   fixmark score `<path>`                                            - Print a scoring-service response
//!   fixmark list-formats                                            - List all available formats
//!
//! `<path>` may be `-` to read from stdin. Settings come from `--config <file>`, or from
//! `fixmark.toml` in the working directory when it exists.

use std::io::{self, Read};

use clap::{Arg, ArgAction, ArgMatches, Command};
use thiserror::Error;

use fixmark::fixmark::config::{ConfigError, FixmarkConfig, Loader};
use fixmark::fixmark::extract::{extract_code, ScoreRequest};
use fixmark::fixmark::formats::{FormatError, FormatRegistry};
use fixmark::fixmark::logging;
use fixmark::fixmark::segmenter::segment;
use fixmark::fixmark::upstream::{PredictionResponse, ScoreResponse, UpstreamError};

/// Picked up from the working directory when `--config` is not given
const LOCAL_CONFIG: &str = "fixmark.toml";

#[derive(Debug, Error)]
enum CliError {
    #[error("Error reading {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Format(#[from] FormatError),
    #[error("Invalid service response: {0}")]
    Upstream(#[from] UpstreamError),
    #[error("Error encoding output: {0}")]
    Encode(#[from] serde_json::Error),
}

fn main() {
    let matches = Command::new("fixmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for segmenting model-generated fixes into code and explanation")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults (default: ./fixmark.toml if present)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log filter (e.g. 'debug'); overrides RUST_LOG and the configured level"),
        )
        .subcommand(
            Command::new("segment")
                .about("Segment a generated fix and print it in the chosen format")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats); defaults to output.format"),
                )
                .arg(response_arg())
                .arg(
                    Arg::new("color")
                        .long("color")
                        .help("Style comments and emphasis with ANSI escapes in views")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("extract")
                .about("Print the fenced code of a generated fix, as submitted for scoring")
                .arg(path_arg())
                .arg(response_arg())
                .arg(
                    Arg::new("reference")
                        .long("reference")
                        .short('r')
                        .help("Reference code file; prints the score request JSON instead"),
                ),
        )
        .subcommand(
            Command::new("score")
                .about("Print the scores of a scoring-service JSON response")
                .arg(path_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the input file, or '-' for stdin")
        .required(true)
        .index(1)
}

fn response_arg() -> Arg {
    Arg::new("response")
        .long("response")
        .help("Input is a prediction-endpoint JSON payload; segment its generatedFix")
        .action(ArgAction::SetTrue)
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let (name, sub) = match matches.subcommand() {
        Some(pair) => pair,
        None => return Ok(()),
    };

    let config = load_config(matches, sub)?;
    logging::init(
        matches.get_one::<String>("log-level").map(String::as_str),
        &config.logging.level,
        false,
    );
    tracing::debug!(command = name, "starting");

    match name {
        "segment" => handle_segment_command(sub, &config),
        "extract" => handle_extract_command(sub),
        "score" => handle_score_command(sub),
        "list-formats" => {
            handle_list_formats_command(&config);
            Ok(())
        }
        _ => Ok(()),
    }
}

fn load_config(matches: &ArgMatches, sub: &ArgMatches) -> Result<FixmarkConfig, CliError> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG),
    };
    if sub.try_get_one::<bool>("color").ok().flatten() == Some(&true) {
        loader = loader.set_override("render.color", true)?;
    }
    Ok(loader.build()?)
}

/// Handle the segment command
fn handle_segment_command(sub: &ArgMatches, config: &FixmarkConfig) -> Result<(), CliError> {
    let raw = read_generated_fix(sub)?;
    let format = sub
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or(config.output.format.as_str());

    let registry = FormatRegistry::with_options(config.render_options(), config.render.color);
    let output = registry.serialize(&segment(&raw), format)?;
    print!("{}", output);
    Ok(())
}

/// Handle the extract command
fn handle_extract_command(sub: &ArgMatches) -> Result<(), CliError> {
    let raw = read_generated_fix(sub)?;
    match sub.get_one::<String>("reference") {
        Some(reference_path) => {
            let reference = read_input(reference_path)?;
            let request = ScoreRequest::from_generated_fix(&raw, reference);
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        None => {
            let code = extract_code(&segment(&raw));
            if !code.is_empty() {
                println!("{}", code);
            }
        }
    }
    Ok(())
}

/// Handle the score command
fn handle_score_command(sub: &ArgMatches) -> Result<(), CliError> {
    let json = read_input(required_path(sub))?;
    let response = ScoreResponse::from_json(&json)?;
    print!("{}", response.report());
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &FixmarkConfig) {
    let registry = FormatRegistry::with_options(config.render_options(), false);
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("  {}", name);
        println!("    {}", description);
    }
}

fn required_path(sub: &ArgMatches) -> &str {
    sub.get_one::<String>("path").map(String::as_str).unwrap_or("-")
}

/// The raw text to segment, unwrapped from a prediction payload when `--response` is set
fn read_generated_fix(sub: &ArgMatches) -> Result<String, CliError> {
    let input = read_input(required_path(sub))?;
    if sub.get_flag("response") {
        let response = PredictionResponse::from_json(&input)?;
        tracing::debug!(category = ?response.predicted_category, "read prediction response");
        Ok(response.generated_fix)
    } else {
        Ok(input)
    }
}

fn read_input(path: &str) -> Result<String, CliError> {
    let read = if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        std::fs::read_to_string(path)
    };
    read.map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}
