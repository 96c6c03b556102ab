//! # steelcheck
//!
//! Command line front end for `steel_core`. Reads one member record (or a
//! JSON array of them), runs the AISC 360-16 LRFD check and prints either a
//! plain-text summary or the full results as JSON.
//!
//! Exit codes: 0 when every member passes, 1 when any member fails or is
//! indeterminate, 2 on input, configuration or I/O errors.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use steel_core::calculations::CapacityDetail;
use steel_core::equations::generate_equations_markdown;
use steel_core::{check_members, CalcError, CheckResults, DesignConfig, MemberInput, Status};

/// AISC 360-16 LRFD capacity check for steel W-shape members.
#[derive(Parser, Debug)]
#[command(name = "steelcheck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Member input JSON (single record or array). Reads stdin when omitted or "-"
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Design configuration TOML (E, G, resistance factors, default Cb)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Print the full results as JSON instead of the text summary
    #[arg(long)]
    json: bool,

    /// Print the equation registry as markdown and exit
    #[arg(long)]
    equations: bool,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid member input: {0}")]
    Input(#[source] CalcError),

    #[error("Cannot serialize results: {0}")]
    Output(#[source] serde_json::Error),

    #[error("{0}")]
    Calc(#[from] CalcError),
}

impl CliError {
    fn code(&self) -> &'static str {
        match self {
            CliError::Io { .. } => "IO_ERROR",
            CliError::Config(_) => "CONFIG_ERROR",
            CliError::Input(_) => "INVALID_INPUT",
            CliError::Output(_) => "SERIALIZATION_ERROR",
            CliError::Calc(e) => e.error_code(),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.code(),
            "message": self.to_string(),
        })
    }
}

/// Determines the log level from CLI arguments.
fn get_log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

// ============================================================================
// Input
// ============================================================================

fn read_source(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p).map_err(|source| CliError::Io {
            path: p.display().to_string(),
            source,
        }),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).map_err(|source| CliError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;
            Ok(text)
        }
    }
}

fn parse_config(text: &str) -> Result<DesignConfig, CliError> {
    Ok(toml::from_str(text)?)
}

fn load_config(path: Option<&Path>) -> Result<DesignConfig, CliError> {
    match path {
        Some(p) => {
            let text = std::fs::read_to_string(p).map_err(|source| CliError::Io {
                path: p.display().to_string(),
                source,
            })?;
            let config = parse_config(&text)?;
            info!(path = %p.display(), "Loaded design configuration");
            Ok(config)
        }
        None => Ok(DesignConfig::default()),
    }
}

fn parse_members(text: &str) -> Result<Vec<MemberInput>, CliError> {
    MemberInput::batch_from_json(text).map_err(CliError::Input)
}

// ============================================================================
// Output
// ============================================================================

fn detail_note(detail: &CapacityDetail) -> Option<String> {
    match detail {
        CapacityDetail::FlexuralBuckling { slenderness, .. } => Some(format!("KL/r = {:.1}", slenderness)),
        CapacityDetail::LateralTorsionalBuckling { regime, .. } => Some(format!("{:?}", regime)),
        CapacityDetail::FlangeLocalBuckling { class, .. } => Some(format!("{} flange", class.display_name())),
        _ => None,
    }
}

fn render_summary(results: &CheckResults) -> String {
    let mut out = String::new();
    let rule = "═".repeat(66);

    out.push_str(&format!("{}\n", rule));
    out.push_str(&format!("  MEMBER CHECK: {}\n", results.label));
    out.push_str(&format!("{}\n\n", rule));
    out.push_str(&format!("  {:<32} {:>8}  {}\n", "Limit state", "Ratio", "Reference"));
    out.push_str(&format!("  {}\n", "─".repeat(62)));

    for check in &results.checks {
        match check.evaluation() {
            Some(evaluation) => {
                let note = check
                    .capacity()
                    .and_then(|c| detail_note(&c.detail))
                    .map(|n| format!("  ({})", n))
                    .unwrap_or_default();
                out.push_str(&format!(
                    "  {:<32} {:>8.3}  {}{}\n",
                    check.limit_state.display_name(),
                    evaluation.ratio(),
                    evaluation.reference(),
                    note
                ));
            }
            None => {
                out.push_str(&format!("  {:<32} {:>8}  -\n", check.limit_state.display_name(), "skipped"));
            }
        }
    }

    let skipped: Vec<_> = results.skipped().collect();
    if !skipped.is_empty() {
        out.push_str("\nSkipped:\n");
        for (limit_state, reason) in skipped {
            out.push_str(&format!("  {}: {}\n", limit_state, reason));
        }
    }

    let notes: Vec<(String, &str)> = results
        .checks
        .iter()
        .filter_map(|c| c.capacity().map(|r| (c.limit_state.to_string(), r)))
        .flat_map(|(name, r)| r.notes.iter().map(move |n| (name.clone(), n.as_str())))
        .collect();
    if !notes.is_empty() {
        out.push_str("\nNotes:\n");
        for (name, note) in notes {
            out.push_str(&format!("  {}: {}\n", name, note));
        }
    }

    if let Some(s) = &results.slenderness {
        out.push_str(&format!(
            "\nSlenderness: KL/r = {:.1} (limit {:.0}){}\n",
            s.governing,
            s.limit,
            if s.within_limit { "" } else { "  EXCEEDED" }
        ));
    }

    out.push('\n');
    match &results.governing {
        Some(g) => out.push_str(&format!(
            "Governing: {} = {:.3} ({})\n",
            g.limit_state, g.ratio, g.reference
        )),
        None => out.push_str("Governing: none computed\n"),
    }
    out.push_str(&format!("Status:    {}\n", results.status));
    let skipped_count = results.skipped().count();
    if results.status == Status::Pass && skipped_count > 0 {
        out.push_str(&format!(
            "           computed limit states only; {} skipped, see above\n",
            skipped_count
        ));
    }
    out
}

fn render_json(results: &[CheckResults]) -> Result<String, CliError> {
    match results {
        [single] => serde_json::to_string_pretty(single),
        many => serde_json::to_string_pretty(many),
    }
    .map_err(CliError::Output)
}

// ============================================================================
// Entry point
// ============================================================================

fn run(args: &Args) -> Result<bool, CliError> {
    if args.equations {
        print!("{}", generate_equations_markdown());
        return Ok(true);
    }

    let config = load_config(args.config.as_deref())?;
    let text = read_source(args.input.as_deref())?;
    let members = parse_members(&text)?;
    info!(count = members.len(), "Checking members");

    let results = check_members(&members, &config)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    if args.json {
        println!("{}", render_json(&results)?);
    } else {
        let summaries: Vec<String> = results.iter().map(render_summary).collect();
        print!("{}", summaries.join("\n"));
    }

    Ok(results.iter().all(|r| r.status == Status::Pass))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(get_log_level(args.verbose, args.quiet));

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!(code = e.code(), "{}", e);
            eprintln!("{}", e.to_json());
            ExitCode::from(2)
        }
    }
}
