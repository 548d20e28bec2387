//! Chatlens CLI
//!
//! Usage:
//!   chatlens chat.txt --me 영희                 # Analyze the other party
//!   chatlens chat.txt --mode rule --verbose      # Rules only, all speakers
//!   cat chat.txt | chatlens - --json             # JSON report from stdin

use std::io::{self, Read};

use clap::Parser;
use colored::Colorize;
use tracing::error;

use chatlens::core::{AnalysisOptions, Analyzer, LinearMbtiModel};
use chatlens::logging::init_logging;
use chatlens::types::{AnalysisMode, AnalysisReport, Transcript};
use chatlens::{AppConfig, ChatlensError, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "chatlens",
    version = VERSION,
    about = "Chat transcript style, MBTI and emotion analyzer",
    long_about = "Chatlens parses an exported chat transcript and reports, per speaker:\n\n\
                  - style metrics (message length, ㅋ/ㅎ/ㅠ/ㅜ count, ?/! ratios)\n\
                  - a rule-based four-letter type code\n\
                  - a model-based type code (when a model artifact is available)\n\
                  - an emotion distribution with examples and a summary\n\n\
                  Supported line formats:\n  \
                  2023. 5. 12. 오후 3:21, 철수 : 안녕\n  \
                  [철수] [오후 3:21] 안녕"
)]
struct Args {
    /// Transcript file ('-' or omitted reads stdin)
    file: Option<String>,

    /// Your own name as shown in the chat
    #[arg(long)]
    me: Option<String>,

    /// Which type estimators to run
    #[arg(long, value_enum)]
    mode: Option<AnalysisMode>,

    /// Path to the model artifact
    #[arg(long)]
    model: Option<String>,

    /// Include your own messages in per-speaker reports
    #[arg(long)]
    include_self: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show axis scores, examples and every speaker
    #[arg(short, long)]
    verbose: bool,

    /// Print the first N parsed records before the report
    #[arg(long, value_name = "N")]
    show_transcript: Option<usize>,

    /// Config file (default: ./chatlens.toml if present)
    #[arg(long)]
    config: Option<String>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::from_file(path),
        None => AppConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    init_logging(args.log_level.as_deref().unwrap_or(&config.logging.level));
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&args, &config) {
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

/// Load the model if needed, analyze, print
fn run(args: &Args, config: &AppConfig) -> chatlens::Result<()> {
    let options = AnalysisOptions {
        self_name: args.me.clone().or_else(|| config.analysis.self_name.clone()),
        mode: args.mode.unwrap_or(config.analysis.mode),
        include_self: args.include_self || config.analysis.include_self,
    };

    // Model is loaded once, before any input is read
    let model = if options.mode.uses_model() {
        let path = args.model.as_deref().unwrap_or(&config.model.path);
        Some(LinearMbtiModel::load(path)?)
    } else {
        None
    };

    let mut analyzer = Analyzer::new();
    if let Some(model) = &model {
        analyzer = analyzer.with_predictor(model);
    }

    let text = read_input(args.file.as_deref())?;

    let transcript = analyzer.parse(&text)?;

    // Preview goes to stderr in JSON mode so stdout stays parseable
    if let Some(n) = args.show_transcript {
        let preview = transcript_preview(&transcript, n);
        if args.json {
            eprintln!("{}", preview);
        } else {
            println!("{}", preview);
        }
    }

    let report = analyzer.analyze_transcript(&transcript, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.verbose);
    }
    Ok(())
}

/// Read file or stdin, replacing invalid UTF-8
fn read_input(file: Option<&str>) -> io::Result<String> {
    let bytes = match file {
        None | Some("-") => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
        Some(path) => std::fs::read(path)?,
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Print header + report
fn print_report(report: &AnalysisReport, verbose: bool) {
    println!("{}", format!("Chatlens v{}", VERSION).bold());
    println!();
    println!("{}", report.to_terminal_string(verbose));
}

/// First `n` parsed records, one per line
fn transcript_preview(transcript: &Transcript, n: usize) -> String {
    let mut lines = vec![format!("Parsed records ({} total):", transcript.len())
        .bold()
        .to_string()];
    for record in transcript.records().iter().take(n) {
        lines.push(format!(
            "  {} {} : {}",
            format!("[{}]", record.timestamp_raw).dimmed(),
            record.speaker.cyan(),
            record.message
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Input problems are warnings, setup problems are errors
fn print_error(e: &ChatlensError) {
    match e {
        ChatlensError::NothingParsed { .. } => {
            eprintln!("{} {}", "⚠".yellow(), e);
            eprintln!("  Check that the file is an exported chat transcript.");
        }
        e if e.is_resource_error() => {
            error!("{}", e);
            eprintln!("{} {}", "✗ setup:".red().bold(), e);
            eprintln!("  Use --mode rule to skip the model.");
        }
        e => {
            eprintln!("{} {}", "✗".red(), e);
        }
    }
}
