//! Polycalc Library
//!
//! A stack calculator over sparse multivariate polynomials. The program is a
//! sequence of lines: polynomial literals are pushed, commands operate on the
//! stack and print results.
//!
//! ```rust,ignore
//! use polycalc::{CalcConfig, run};
//!
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! run("(1,2)\nCLONE\nMUL\nPRINT\n".as_bytes(), CalcConfig::default(), &mut out, &mut err)?;
//! assert_eq!(out, b"(1,4)\n");
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod report;

pub use command::Command;
pub use config::CalcConfig;
pub use error::{ArgKind, CalcError, Diagnostic, LiteralError};
pub use interpreter::Interpreter;
pub use parser::{LiteralParser, parse_literal};
pub use report::{ReportConfig, ReportFormat, RunStats};

use std::io::{self, BufRead, Write};

/// Run a whole program from `input` with the given configuration
pub fn run<R: BufRead, W: Write, E: Write>(
    input: R,
    config: CalcConfig,
    out: W,
    err: E,
) -> io::Result<RunStats> {
    Interpreter::with_config(config, out, err).run(input)
}
