use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use equidate::export::{ExportFormat, render};
use equidate::solver::{
    EquationSolver, OperatorSet, SearchOptions, SearchResult, SortPolicy, sort_equations,
};
use equidate::utils::extract_digits;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OperatorChoice {
    /// + - * / only
    Basic,
    /// + - * / plus ^ and root
    Extended,
}

impl OperatorChoice {
    fn to_operator_set(self) -> OperatorSet {
        match self {
            OperatorChoice::Basic => OperatorSet::Basic,
            OperatorChoice::Extended => OperatorSet::Extended,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortOrder {
    ValueAsc,
    ValueDesc,
    LengthAsc,
    LengthDesc,
    Alphabetical,
    Original,
}

impl SortOrder {
    fn to_policy(self) -> SortPolicy {
        match self {
            SortOrder::ValueAsc => SortPolicy::ValueAscending,
            SortOrder::ValueDesc => SortPolicy::ValueDescending,
            SortOrder::LengthAsc => SortPolicy::LengthAscending,
            SortOrder::LengthDesc => SortPolicy::LengthDescending,
            SortOrder::Alphabetical => SortPolicy::Alphabetical,
            SortOrder::Original => SortPolicy::Insertion,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    fn to_export_format(self) -> ExportFormat {
        match self {
            OutputFormat::Text => ExportFormat::Text,
            OutputFormat::Csv => ExportFormat::Csv,
            OutputFormat::Json => ExportFormat::Json,
        }
    }
}

/// Equidate - Find arithmetic identities hidden in the digits of a date
#[derive(Parser, Debug)]
#[command(name = "equidate")]
#[command(about = "Find equations hidden in the digits of a date, such as 0 * 9 + 0 + 5 = 2 * 0 + 0 + 5")]
#[command(version)]
pub struct CliArgs {
    /// Date to search, in any format (e.g. 09052005 or 09/05/2005)
    pub date: String,

    /// Operator set to draw from
    #[arg(long, value_enum, default_value = "extended")]
    pub operators: OperatorChoice,

    /// Disable fact(d) tokens for single digits
    #[arg(long)]
    pub no_factorial: bool,

    /// Maximum number of groups per partition (clamped to 2..=6)
    #[arg(long, default_value_t = 5)]
    pub max_groups: usize,

    /// Numeric tolerance for matching the two sides
    #[arg(long, default_value_t = 1e-10)]
    pub tolerance: f64,

    /// Stop searching after this many milliseconds and report what was found
    #[arg(long)]
    pub time_budget_ms: Option<u64>,

    /// How many equations to display (ignored with --format)
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,

    /// Presentation order for the equations
    #[arg(long, value_enum, default_value = "value-asc")]
    pub sort: SortOrder,

    /// Dump the full result in this format instead of the bounded listing
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log level (default: warn)
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

impl CliArgs {
    fn search_options(&self) -> SearchOptions {
        SearchOptions {
            operator_set: self.operators.to_operator_set(),
            allow_factorial: !self.no_factorial,
            max_groups: self.max_groups,
            tolerance: self.tolerance,
            time_budget: self.time_budget_ms.map(Duration::from_millis),
        }
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    let digits = extract_digits(&args.date).context("Invalid date input")?;
    info!(
        "Searching for equations in the digits of '{}'",
        args.date
    );

    let solver = EquationSolver::with_options(args.search_options());
    let equations = solver.find_equations(&digits);
    let mut result = SearchResult::new(digits, equations);
    sort_equations(&mut result.equations, args.sort.to_policy());

    if let Some(format) = args.format {
        let rendered =
            render(&result, format.to_export_format()).context("Failed to render result")?;
        print!("{}", rendered);
        return Ok(());
    }

    if result.is_empty() {
        println!("No equations found.");
        return Ok(());
    }

    println!("Found {} unique equations:", result.len());
    for (i, eq) in result.equations.iter().take(args.limit).enumerate() {
        println!("{:3}. {} = {}  (= {})", i + 1, eq.left, eq.right, eq.value);
    }
    if result.len() > args.limit {
        println!("... and {} more", result.len() - args.limit);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_args_defaults() {
        let args = CliArgs::try_parse_from(["equidate", "09052005"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.date, "09052005");
            assert_eq!(args.limit, 20);
            assert_eq!(args.max_groups, 5);
            assert!(!args.no_factorial);
            assert!(args.format.is_none());

            let options = args.search_options();
            assert_eq!(options.operator_set, OperatorSet::Extended);
            assert!(options.allow_factorial);
            assert_eq!(options.tolerance, 1e-10);
            assert!(options.time_budget.is_none());
        }
    }

    #[test]
    fn test_args_flags() {
        let args = CliArgs::try_parse_from([
            "equidate",
            "123",
            "--operators",
            "basic",
            "--no-factorial",
            "--time-budget-ms",
            "500",
            "--format",
            "json",
        ]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            let options = args.search_options();
            assert_eq!(options.operator_set, OperatorSet::Basic);
            assert!(!options.allow_factorial);
            assert_eq!(options.time_budget, Some(Duration::from_millis(500)));
            assert!(matches!(args.format, Some(OutputFormat::Json)));
        }
    }

    #[test]
    fn test_date_argument_is_required() {
        assert!(CliArgs::try_parse_from(["equidate"]).is_err());
    }
}
