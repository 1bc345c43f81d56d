//! Line-oriented stack interpreter
//!
//! Each input line is either a polynomial literal (pushed onto the stack) or a
//! command. A line that starts with an ASCII letter is a command, anything
//! else is a literal. Lines are handled one at a time:
//!
//! ```text
//! read line ──▶ letter? ──yes──▶ Command::parse ──▶ arity check ──▶ execute
//!                  │                                                  │
//!                  no                                        print / push
//!                  ▼
//!           LiteralParser ──▶ push
//! ```
//!
//! A failure on one line is written to the diagnostic stream as
//! `ERROR <line> <what>` and the interpreter moves on to the next line. No
//! partial value is ever left on the stack.

use crate::command::Command;
use crate::config::CalcConfig;
use crate::error::{CalcError, Diagnostic};
use crate::parser::LiteralParser;
use crate::report::RunStats;
use poly_core::{Exp, Poly, PolyStack};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, trace};

pub struct Interpreter<W: Write, E: Write> {
    stack: PolyStack,
    parser: LiteralParser,
    config: CalcConfig,
    out: W,
    err: E,
    line: usize,
    stats: RunStats,
}

fn flag(b: bool) -> String {
    let digit = if b { "1" } else { "0" };
    digit.to_string()
}

/// Degree as printed: `-1` for the zero polynomial
fn degree(d: Option<Exp>) -> String {
    d.map_or_else(|| "-1".to_string(), |d| d.to_string())
}

impl<W: Write, E: Write> Interpreter<W, E> {
    /// Results go to `out`, diagnostics to `err`
    pub fn new(out: W, err: E) -> Self {
        Self::with_config(CalcConfig::default(), out, err)
    }

    pub fn with_config(config: CalcConfig, out: W, err: E) -> Self {
        Interpreter {
            stack: PolyStack::with_capacity(config.stack_capacity),
            parser: LiteralParser::with_max_depth(config.max_nesting_depth),
            config,
            out,
            err,
            line: 0,
            stats: RunStats::default(),
        }
    }

    pub fn stack(&self) -> &PolyStack {
        &self.stack
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Runs until `input` is exhausted and returns the run's counters.
    ///
    /// Only I/O errors end a run early.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<RunStats> {
        info!("run started");
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let terminated = buf.last() == Some(&b'\n');
            if terminated {
                buf.pop();
            }
            self.process_line(&buf, terminated)?;
        }
        self.out.flush()?;
        self.err.flush()?;

        self.stats.peak_depth = self.stack.peak_depth();
        self.stats.final_depth = self.stack.depth();
        info!(
            lines = self.stats.lines,
            errors = self.stats.errors.total(),
            depth = self.stats.final_depth,
            "run finished"
        );
        Ok(self.stats.clone())
    }

    /// Handles one line (without its newline) and writes its result or
    /// diagnostic. `terminated` is false for a last line cut off by the end
    /// of input, which is never valid.
    pub fn process_line(&mut self, line: &[u8], terminated: bool) -> io::Result<()> {
        self.line += 1;
        self.stats.lines += 1;

        match self.eval_line(line, terminated) {
            Ok(Some(output)) => {
                writeln!(self.out, "{}", output)?;
                if self.config.flush_each_line {
                    self.out.flush()?;
                }
            }
            Ok(None) => {}
            Err(error) => {
                debug!(line = self.line, %error, "line rejected");
                self.stats.errors.record(&error);
                let diagnostic = Diagnostic {
                    line: self.line,
                    error,
                };
                writeln!(self.err, "{}", diagnostic)?;
            }
        }
        Ok(())
    }

    /// Evaluates one line and returns what it prints, if anything
    pub fn eval_line(
        &mut self,
        line: &[u8],
        terminated: bool,
    ) -> Result<Option<String>, CalcError> {
        if line.first().is_some_and(u8::is_ascii_alphabetic) {
            let command = Command::parse(line)?;
            if !terminated {
                return Err(command
                    .arg_kind()
                    .map_or(CalcError::WrongCommand, CalcError::WrongArgument));
            }
            if !self.stack.has(command.arity()) {
                return Err(CalcError::StackUnderflow);
            }
            trace!(line = self.line, command = command.name(), "execute");
            let output = self.execute(command)?;
            self.stats.commands += 1;
            Ok(output)
        } else {
            let poly = self.parser.parse_line(line)?;
            if !terminated {
                return Err(CalcError::WrongPoly {
                    column: line.len() + 1,
                });
            }
            trace!(line = self.line, depth = poly.depth(), "push literal");
            self.stack.push(poly);
            self.stats.literals += 1;
            Ok(None)
        }
    }

    fn pop(&mut self) -> Result<Poly, CalcError> {
        self.stack.pop().ok_or(CalcError::StackUnderflow)
    }

    fn top(&self) -> Result<&Poly, CalcError> {
        self.stack.peek().ok_or(CalcError::StackUnderflow)
    }

    /// Runs a command whose arity has already been checked
    fn execute(&mut self, command: Command) -> Result<Option<String>, CalcError> {
        let output = match command {
            Command::Zero => {
                self.stack.push(Poly::zero());
                None
            }
            Command::IsCoeff => Some(flag(self.top()?.is_coeff())),
            Command::IsZero => Some(flag(self.top()?.is_zero())),
            Command::Clone => {
                let copy = self.top()?.clone();
                self.stack.push(copy);
                None
            }
            Command::Add => {
                let (p, q) = (self.pop()?, self.pop()?);
                self.stack.push(p + q);
                None
            }
            Command::Mul => {
                let (p, q) = (self.pop()?, self.pop()?);
                self.stack.push(p * q);
                None
            }
            Command::Sub => {
                let (p, q) = (self.pop()?, self.pop()?);
                self.stack.push(p - q);
                None
            }
            Command::Neg => {
                let p = self.pop()?;
                self.stack.push(-p);
                None
            }
            Command::IsEq => {
                let second = self.stack.peek_nth(1).ok_or(CalcError::StackUnderflow)?;
                Some(flag(self.top()? == second))
            }
            Command::Deg => Some(degree(self.top()?.deg())),
            Command::DegBy(var) => Some(degree(self.top()?.deg_by(var))),
            Command::At(x) => {
                let p = self.pop()?;
                self.stack.push(p.at(x));
                None
            }
            Command::Print => Some(self.top()?.to_string()),
            Command::Pop => {
                self.pop()?;
                None
            }
            Command::Compose(k) => {
                let p = self.pop()?;
                let subs = self
                    .stack
                    .pop_many(k as usize)
                    .ok_or(CalcError::StackUnderflow)?;
                self.stack.push(p.compose(&subs));
                None
            }
        };
        Ok(output)
    }
}
