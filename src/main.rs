// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use stjtool::app_config::{self, Config};
use stjtool::app_controller::Controller;
use stjtool::OutputFormat;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Srt,
    Vtt,
    Ass,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Srt => OutputFormat::Srt,
            CliOutputFormat::Vtt => OutputFormat::Vtt,
            CliOutputFormat::Ass => OutputFormat::Ass,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate an STJ file, or every *.stj.json file in a directory
    Validate(ValidateArgs),

    /// Validate an STJ file and render it as subtitles
    Convert(ConvertArgs),

    /// Generate shell completions for stjtool
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// STJ file or directory to validate
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// JSON-Schema file (overrides the configured schema)
    #[arg(long, value_name = "PATH")]
    schema: Option<PathBuf>,

    /// Skip the schema conformance pass
    #[arg(long, conflicts_with = "schema")]
    no_schema: bool,

    /// Run the schema pass before the semantic checks
    #[arg(long)]
    schema_first: bool,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// STJ file to convert
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (defaults to the input name with the format's extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Subtitle format
    #[arg(long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,
}

/// stjtool - Standard Transcription JSON toolkit
///
/// Validates STJ transcripts against their schema and semantic rules, and
/// renders them as SRT, WebVTT or ASS subtitles.
#[derive(Parser, Debug)]
#[command(name = "stjtool")]
#[command(version)]
#[command(about = "Validate and convert Standard Transcription JSON files")]
#[command(long_about = "stjtool validates STJ (Standard Transcription JSON) documents and renders them as subtitles.

EXAMPLES:
    stjtool validate talk.stj.json                       # Validate one file
    stjtool validate --schema stj-schema.json talk.stj.json
    stjtool validate --no-schema transcripts/            # Validate a whole directory
    stjtool convert talk.stj.json --format vtt           # Writes talk.vtt
    stjtool convert -f -o out.srt talk.stj.json          # Overwrite an existing file
    stjtool completions bash > stjtool.bash              # Generate bash completions

CONFIGURATION:
    Configuration is read from stjtool.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, defaults are used.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "stjtool.json")]
    config: PathBuf,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Label and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("ERROR", "1;31"),
            Level::Warn => ("WARN ", "1;33"),
            Level::Info => ("INFO ", "1;32"),
            Level::Debug => ("DEBUG", "1;36"),
            Level::Trace => ("TRACE", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (label, color) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, label, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // Start at trace; the effective level is set once the config is known
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

// @returns: Whether the command succeeded
fn run(cli: CommandLineOptions) -> Result<bool> {
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "stjtool", &mut std::io::stdout());
        return Ok(true);
    }

    let mut config = Config::load_or_default(&cli.config)?;

    // Command line log level wins over the config
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(LevelFilter::from(&config.log_level));

    match cli.command {
        Commands::Validate(args) => run_validate(config, args),
        Commands::Convert(args) => run_convert(config, args),
        Commands::Completions { .. } => Ok(true),
    }
}

fn run_validate(mut config: Config, args: ValidateArgs) -> Result<bool> {
    if let Some(schema) = &args.schema {
        config.schema_path = Some(schema.to_string_lossy().to_string());
    }
    if args.no_schema {
        config.validation.schema_check = false;
    }
    if args.schema_first {
        config.validation.schema_first = true;
    }

    config.validate().context("Configuration validation failed")?;
    debug!("Effective configuration: {:?}", config);

    let controller = Controller::with_config(config)?;

    if args.input_path.is_dir() {
        let report = controller.run_folder(&args.input_path)?;
        for (path, message) in &report.failed {
            println!("{}: {}", path.display(), message);
        }
        println!(
            "Validated {} file(s): {} passed, {} failed",
            report.total(),
            report.passed.len(),
            report.failed.len()
        );
        return Ok(report.is_success());
    }

    match controller.validate_file(&args.input_path) {
        Ok(_) => {
            println!("Validation successful! No issues found.");
            Ok(true)
        }
        Err(e) => {
            println!("{}", e);
            Ok(false)
        }
    }
}

fn run_convert(config: Config, args: ConvertArgs) -> Result<bool> {
    config.validate().context("Configuration validation failed")?;
    let controller = Controller::with_config(config)?;

    match controller.convert(
        &args.input,
        args.output,
        args.format.map(OutputFormat::from),
        args.force_overwrite,
    ) {
        Ok(output_path) => {
            println!("Wrote {}", output_path.display());
            Ok(true)
        }
        Err(e) => {
            println!("{}", e);
            Ok(false)
        }
    }
}
