use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, ensure};
use clap::{Parser, ValueEnum};

use compare_files::comparison::{ColumnUniverse, ComparePolicy, MAX_SUM_DECIMALS, SumEquality, compare};
use compare_files::formatters::{FormatterConfig, JsonFormatter, ReportFormatter, TextFormatter};
use compare_files::loader::{LoadOptions, LoadRequest, SheetSelection, TracingObserver};
use compare_files::logging::{self, LoggingConfig};

/// Compare two CSV or Excel files column by column.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First (left) file.
    left: PathBuf,

    /// Second (right) file.
    right: PathBuf,

    /// Which columns to report on.
    #[arg(long, value_enum, default_value_t = PolicyArg::Union)]
    policy: PolicyArg,

    /// Compare sums after rounding to this many decimals instead of exactly.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(..=MAX_SUM_DECIMALS as i64))]
    sum_decimals: Option<u32>,

    /// Workbook sheet to read from both files (default: first sheet).
    #[arg(long)]
    sheet: Option<String>,

    /// CSV field delimiter (default: comma, or tab for .tsv).
    #[arg(long)]
    delimiter: Option<char>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Append mismatch notes to the output.
    #[arg(long)]
    notes: bool,

    /// Disable colored status output.
    #[arg(long)]
    no_color: bool,

    /// Exit with status 1 unless every column matches.
    #[arg(long)]
    strict: bool,

    /// Also append log events (load outcomes at `info` and above) to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    log_json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Every column of either file.
    Union,
    /// Only columns present in both files.
    Common,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let _logging = logging::init(&LoggingConfig {
        json: args.log_json,
        ansi: io::stderr().is_terminal(),
        log_file: args.log_file.clone(),
        ..Default::default()
    })
    .context("failed to set up logging")?;

    let load_options = load_options(&args)?;
    let left = LoadRequest {
        path: args.left.clone(),
        options: load_options.clone(),
    }
    .run()
    .with_context(|| format!("failed to load {}", args.left.display()))?;
    let right = LoadRequest {
        path: args.right.clone(),
        options: load_options,
    }
    .run()
    .with_context(|| format!("failed to load {}", args.right.display()))?;

    let result = compare(&left, &right, &compare_policy(&args));

    let config = FormatterConfig {
        include_notes: args.notes,
        use_colors: !args.no_color && io::stdout().is_terminal(),
        ..Default::default()
    };
    let rendered = match args.format {
        OutputFormat::Text => TextFormatter::new(config).format(&result)?,
        OutputFormat::Json => JsonFormatter::new(config).format(&result)?,
    };
    println!("{}", rendered.trim_end());

    if args.strict && !result.is_full_match() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn load_options(args: &Args) -> anyhow::Result<LoadOptions> {
    let delimiter = match args.delimiter {
        Some(c) => {
            ensure!(c.is_ascii(), "delimiter must be a single ASCII character, got {c:?}");
            Some(c as u8)
        }
        None => None,
    };

    Ok(LoadOptions {
        sheet: args
            .sheet
            .clone()
            .map_or(SheetSelection::First, SheetSelection::Named),
        delimiter,
        observer: Some(Arc::new(TracingObserver)),
        ..Default::default()
    })
}

fn compare_policy(args: &Args) -> ComparePolicy {
    ComparePolicy {
        universe: match args.policy {
            PolicyArg::Union => ColumnUniverse::UnionAll,
            PolicyArg::Common => ColumnUniverse::CommonOnly,
        },
        sum_equality: args
            .sum_decimals
            .map_or(SumEquality::Exact, |decimals| SumEquality::Rounded { decimals }),
    }
}
