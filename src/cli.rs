use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use traingame::operator::constants::DEFAULT_OPERATORS;
use traingame::utils::validate_digit_count;
use traingame::{
    Operator, Solver, SolverConfig, parse_digits, parse_operators, validate_digit_string,
};

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

/// Traingame - combine the digits on a train carriage into a target number
#[derive(Parser, Debug)]
#[command(name = "traingame")]
#[command(about = "List every way to combine each digit once into a target value")]
#[command(version)]
pub struct CliArgs {
    /// Digits to combine, e.g. 8833
    pub digits: String,

    /// Target value to reach
    #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
    pub target: i64,

    /// Operators to use, any of +-*/^
    #[arg(short, long, default_value = DEFAULT_OPERATORS, allow_hyphen_values = true)]
    pub operators: String,

    /// Number of digits expected
    #[arg(short = 'n', long, default_value_t = 4)]
    pub count: usize,

    /// Print solutions as LaTeX
    #[arg(long)]
    pub latex: bool,

    /// Search on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub digits: Vec<u32>,
    pub target: i64,
    pub operators: Vec<Operator>,
    pub latex: bool,
    pub parallel: bool,
    pub log_level: LogLevel,
}

/// Validate parsed arguments and turn them into a configuration
pub fn build_config(args: CliArgs) -> Result<CliConfig> {
    validate_digit_string(&args.digits).context("Invalid digit string")?;
    validate_digit_count(&args.digits, args.count).context("Invalid digit string")?;
    let digits = parse_digits(&args.digits).context("Invalid digit string")?;
    let operators = parse_operators(&args.operators).context("Invalid operators")?;

    Ok(CliConfig {
        digits,
        target: args.target,
        operators,
        latex: args.latex,
        parallel: !args.sequential,
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    build_config(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let solver = Solver::new(SolverConfig {
        operators: config.operators,
        parallel: config.parallel,
    });

    info!(
        "Searching for expressions using digits {:?} that equal {}",
        config.digits, config.target
    );

    let solutions = solver
        .solve_expressions(&config.digits, config.target)
        .context("Search failed")?;

    if solutions.is_empty() {
        warn!("No matching expression found");
        return Ok(());
    }

    for (rendered, expr) in &solutions {
        if config.latex {
            println!("{}", expr.to_latex());
        } else {
            println!("{}", rendered);
        }
    }
    Ok(())
}
