use std::io::{self, BufReader};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use opfill::io::{AnswerSink, PuzzleSource, ReaderSource, TextSource, WriterSink};
use opfill::{
    Arithmetic, CancellationToken, Equation, ExpressionSolver, SolveResult, SolverConfig,
    parse_puzzle, validate_digit_string,
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

/// Opfill - Fill in the missing operators of a digit puzzle
#[derive(Parser, Debug)]
#[command(name = "opfill")]
#[command(about = "Find the first +, -, *, / assignment that makes a digit puzzle equal its target")]
#[command(version)]
pub struct CliArgs {
    /// Raw puzzle text such as "1 □ 2 □ 3 = 6" (read from stdin when omitted)
    #[arg(conflicts_with = "digits")]
    pub puzzle: Option<String>,

    /// Plain digit string, used together with --target instead of puzzle text
    #[arg(short, long, requires = "target")]
    pub digits: Option<String>,

    /// Target value for --digits
    #[arg(short, long, requires = "digits", allow_hyphen_values = true)]
    pub target: Option<i64>,

    /// Judge candidates with exact rational arithmetic instead of f64
    #[arg(long)]
    pub exact: bool,

    /// Search the first blank's operators in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Give up and report no solution after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Where the puzzle comes from
#[derive(Debug, Clone, PartialEq)]
pub enum PuzzleInput {
    Text(String),
    Stdin,
    Digits { digits: String, target: i64 },
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub input: PuzzleInput,
    pub solver: SolverConfig,
    pub timeout: Option<Duration>,
    pub log_level: LogLevel,
}

/// Turn parsed arguments into a configuration
pub fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let input = match (args.puzzle, args.digits, args.target) {
        (Some(text), _, _) => PuzzleInput::Text(text),
        (None, Some(digits), Some(target)) => {
            validate_digit_string(&digits).context("Invalid digit string")?;
            PuzzleInput::Digits { digits, target }
        }
        _ => PuzzleInput::Stdin,
    };

    let arithmetic = if args.exact {
        Arithmetic::Exact
    } else {
        Arithmetic::Float
    };

    Ok(CliConfig {
        input,
        solver: SolverConfig {
            arithmetic,
            parallel: args.parallel,
        },
        timeout: args.timeout_ms.map(Duration::from_millis),
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logger")
}

/// Resolve the configured input into an equation
fn load_equation(input: &PuzzleInput) -> Result<Equation> {
    let text = match input {
        PuzzleInput::Digits { digits, target } => {
            return Equation::from_digits(digits, *target).context("Invalid digit string");
        }
        PuzzleInput::Text(text) => TextSource::new(text.as_str()).fetch_puzzle(),
        PuzzleInput::Stdin => ReaderSource::new(BufReader::new(io::stdin())).fetch_puzzle(),
    }
    .context("Failed to read puzzle")?;

    parse_puzzle(&text).with_context(|| format!("Malformed puzzle: '{}'", text))
}

/// Cancel `token` once `timeout` has elapsed
fn spawn_timeout(token: CancellationToken, timeout: Duration) {
    thread::spawn(move || {
        thread::sleep(timeout);
        token.cancel();
    });
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let equation = load_equation(&config.input)?;
    let solver = ExpressionSolver::new(config.solver);

    let cancel = CancellationToken::new();
    if let Some(timeout) = config.timeout {
        spawn_timeout(cancel.clone(), timeout);
    }

    info!(
        "Searching for operators between {:?} that equal {}",
        equation.operands(),
        equation.target()
    );

    let start = Instant::now();
    let report = solver.search(&equation, &cancel);
    let took_ms = start.elapsed().as_secs_f64() * 1000.0;

    match report.result {
        SolveResult::Solved(expr) => {
            info!("Answer: {}, took {:.3} ms", expr, took_ms);
            let mut sink = WriterSink::new(io::stdout().lock());
            sink.submit_answer(&expr.to_string())
                .context("Failed to write answer")?;
            Ok(())
        }
        SolveResult::NoSolution => {
            if report.stats.cancelled {
                warn!("Search timed out after {:.3} ms", took_ms);
            } else {
                warn!("No matching expression found, took {:.3} ms", took_ms);
            }
            println!("No solution.");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(args: &[&str]) -> Result<CliConfig> {
        let args = CliArgs::try_parse_from(args.iter().copied())?;
        config_from_args(args)
    }

    #[test]
    fn test_puzzle_text_argument() {
        let config = config_for(&["opfill", "1 □ 2 □ 3 = 6"]);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(
                config.input,
                PuzzleInput::Text("1 □ 2 □ 3 = 6".to_string())
            );
            assert_eq!(config.solver.arithmetic, Arithmetic::Float);
            assert!(!config.solver.parallel);
            assert!(config.timeout.is_none());
        }
    }

    #[test]
    fn test_stdin_when_no_puzzle_given() {
        let config = config_for(&["opfill", "--exact", "--parallel"]);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.input, PuzzleInput::Stdin);
            assert_eq!(config.solver.arithmetic, Arithmetic::Exact);
            assert!(config.solver.parallel);
        }
    }

    #[test]
    fn test_digits_and_negative_target() {
        let config = config_for(&["opfill", "--digits", "19", "--target", "-8"]);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(
                config.input,
                PuzzleInput::Digits {
                    digits: "19".to_string(),
                    target: -8
                }
            );
        }
    }

    #[test]
    fn test_invalid_digits_rejected() {
        let config = config_for(&["opfill", "--digits", "1x9", "--target", "3"]);
        assert!(config.is_err());
    }

    #[test]
    fn test_digits_require_target() {
        assert!(CliArgs::try_parse_from(["opfill", "--digits", "123"]).is_err());
        assert!(CliArgs::try_parse_from(["opfill", "--target", "6"]).is_err());
    }

    #[test]
    fn test_timeout_argument() {
        let config = config_for(&["opfill", "--timeout-ms", "250", "5 = 5"]);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.timeout, Some(Duration::from_millis(250)));
        }
    }

    #[test]
    fn test_load_equation_from_text() {
        let equation = load_equation(&PuzzleInput::Text("4 _ 0 = 0".to_string()));
        assert!(equation.is_ok());
        if let Ok(equation) = equation {
            assert_eq!(equation.operands(), &[4, 0]);
            assert_eq!(equation.target(), 0);
        }

        let equation = load_equation(&PuzzleInput::Text("4 _ 0".to_string()));
        assert!(equation.is_err());
    }

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
}
