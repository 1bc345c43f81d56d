//! Polycalc CLI
//!
//! Runs a polynomial calculator program from a file or stdin. Results go to
//! stdout, `ERROR ...` diagnostics to stderr.

use clap::{ArgAction, Args, CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{Shell, generate};
use polycalc::{CalcConfig, ReportConfig, ReportFormat};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "polycalc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Stack calculator for sparse multivariate polynomials", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Args)]
struct RunArgs {
    /// Program to run (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print a run report to stderr (overrides POLYCALC_REPORT)
    #[arg(long, value_enum, value_name = "FORMAT")]
    report: Option<ReportFormat>,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => run_completions(shell),
        None => run_program(cli.run),
    }
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "polycalc", &mut io::stdout());
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("polycalc={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> CalcConfig {
    let Some(path) = path else {
        return CalcConfig::default();
    };
    match CalcConfig::load(path) {
        Ok(config) => {
            info!(path = %path.display(), "loaded config");
            config
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run_program(args: RunArgs) {
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref());
    let report = match args.report {
        Some(format) => Some(ReportConfig::stderr(format)),
        None => ReportConfig::from_env(),
    };

    let out = BufWriter::new(io::stdout().lock());
    let err = io::stderr().lock();

    let result = match &args.input {
        Some(path) => match File::open(path) {
            Ok(file) => polycalc::run(BufReader::new(file), config, out, err),
            Err(e) => {
                eprintln!("Error: cannot open {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => polycalc::run(io::stdin().lock(), config, out, err),
    };

    match result {
        Ok(stats) => {
            if let Some(report) = report {
                report.emit(&stats);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
