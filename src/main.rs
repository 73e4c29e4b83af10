//! Document Forensics Tool - CLI Interface
//!
//! Command-line driver for the analysis library: point it at a file or a
//! folder, read color-taggable findings on stdout, optionally save a
//! report.

use std::path::PathBuf;
use std::process;

use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};
use docprobe::{analyze_directory, analyze_file, write_report, AnalysisConfig, ReportFormat};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Plain text report (default)
    Text,
    /// JSON report output
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::PlainText,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages (default)
    Info,
    /// Debug and all messages
    Debug,
    /// Trace and all messages (most verbose)
    Trace,
}

fn main() {
    let matches = build_cli().get_matches();

    let log_level = matches.get_one::<LogLevel>("verbose").copied().unwrap_or(LogLevel::Info);
    let quiet = matches.get_flag("quiet");
    init_logging(log_level, quiet);

    let input = PathBuf::from(matches.get_one::<String>("input").unwrap());
    let report_path = matches.get_one::<String>("report").map(PathBuf::from);
    let format = matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or(OutputFormat::Text);

    let config = match matches.get_one::<String>("config") {
        Some(config_path) => match AnalysisConfig::load(std::path::Path::new(config_path)) {
            Ok(config) => config,
            Err(e) => {
                error!("❌ Failed to load config file: {e}");
                process::exit(1);
            }
        },
        None => AnalysisConfig::default(),
    };

    info!("🔍 Document Forensics Tool - starting analysis");

    let findings = if input.is_dir() {
        analyze_directory(&input, &config)
    } else {
        analyze_file(&input, &config)
    };

    for finding in &findings {
        println!("{finding}");
    }

    if let Some(report_path) = report_path {
        match write_report(&report_path, &findings, format.into()) {
            Ok(()) => info!("📋 Report saved: {}", report_path.display()),
            Err(e) => {
                error!("❌ Failed to write report: {e}");
                process::exit(1);
            }
        }
    }

    info!("✅ Analysis complete: {} finding(s)", findings.len());
}

fn build_cli() -> Command {
    Command::new("docprobe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Document forensic analysis for .docx, .pdf, and .xml files")
        .long_about(
            "Inspects documents for authorship metadata, AI-related keywords, \
             revision-session identifiers (RSID), tracked changes, comments, \
             formatting uniformity, and timestamp anomalies. Point it at a single \
             file or at a folder of .docx/.pdf files.",
        )
        .arg(
            Arg::new("input")
                .value_name("PATH")
                .help("File (.docx, .pdf, .xml) or folder to analyze")
                .required(true),
        )
        .arg(
            Arg::new("report")
                .short('r')
                .long("report")
                .value_name("FILE")
                .help("Save the findings to a report file"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_parser(value_parser!(OutputFormat))
                .default_value("text")
                .help("Report output format"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file (JSON/YAML) overriding keyword lists"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .value_parser(value_parser!(LogLevel))
                .default_value("info")
                .help("Set logging verbosity"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Suppress all output except errors"),
        )
}

fn init_logging(level: LogLevel, quiet: bool) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let filter_level = if quiet {
        "error"
    } else {
        match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(format!("docprobe={filter_level}")))
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
