//! Command lines
//!
//! A command line is a name, optionally followed by one space and a numeric
//! argument, and nothing else. Names are matched exactly (case-sensitive).
//!
//! | Command       | Pops | Pushes / prints                          |
//! |---------------|------|------------------------------------------|
//! | `ZERO`        | 0    | pushes 0                                 |
//! | `IS_COEFF`    | 0    | prints 1 if top is a scalar              |
//! | `IS_ZERO`     | 0    | prints 1 if top is zero                  |
//! | `CLONE`       | 0    | pushes a copy of top                     |
//! | `ADD`         | 2    | pushes top + second                      |
//! | `MUL`         | 2    | pushes top * second                      |
//! | `NEG`         | 1    | pushes -top                              |
//! | `SUB`         | 2    | pushes top - second                      |
//! | `IS_EQ`       | 0    | prints 1 if top == second                |
//! | `DEG`         | 0    | prints total degree (-1 for zero)        |
//! | `DEG_BY i`    | 0    | prints degree in variable i              |
//! | `AT x`        | 1    | pushes top evaluated at x0 = x           |
//! | `PRINT`       | 0    | prints top                               |
//! | `POP`         | 1    | discards top                             |
//! | `COMPOSE k`   | k+1  | pushes top(q0, .., qk-1), q0 just below  |

use crate::error::{ArgKind, CalcError};
use crate::parser::{Cursor, IntRange, read_integer};
use poly_core::Coeff;

/// Longest command name (`IS_COEFF`)
pub const MAX_NAME_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Zero,
    IsCoeff,
    IsZero,
    Clone,
    Add,
    Mul,
    Neg,
    Sub,
    IsEq,
    Deg,
    DegBy(u32),
    At(Coeff),
    Print,
    Pop,
    Compose(u32),
}

/// Name-only part of a command, before its argument is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Name {
    Plain(Command),
    DegBy,
    At,
    Compose,
}

fn lookup(name: &[u8]) -> Option<Name> {
    let name = match name {
        b"ZERO" => Name::Plain(Command::Zero),
        b"IS_COEFF" => Name::Plain(Command::IsCoeff),
        b"IS_ZERO" => Name::Plain(Command::IsZero),
        b"CLONE" => Name::Plain(Command::Clone),
        b"ADD" => Name::Plain(Command::Add),
        b"MUL" => Name::Plain(Command::Mul),
        b"NEG" => Name::Plain(Command::Neg),
        b"SUB" => Name::Plain(Command::Sub),
        b"IS_EQ" => Name::Plain(Command::IsEq),
        b"DEG" => Name::Plain(Command::Deg),
        b"PRINT" => Name::Plain(Command::Print),
        b"POP" => Name::Plain(Command::Pop),
        b"DEG_BY" => Name::DegBy,
        b"AT" => Name::At,
        b"COMPOSE" => Name::Compose,
        _ => return None,
    };
    Some(name)
}

/// Reads ` <integer>` up to the end of the line
fn argument(cursor: &mut Cursor<'_>, kind: ArgKind, range: IntRange) -> Result<i64, CalcError> {
    let wrong = CalcError::WrongArgument(kind);
    if !cursor.eat(b' ') {
        return Err(wrong);
    }
    let value = read_integer(cursor, range).map_err(|_| wrong)?;
    if !cursor.at_line_end() {
        return Err(wrong);
    }
    Ok(value)
}

impl Command {
    /// Parses a command line (newline already stripped).
    ///
    /// An unknown name is reported before anything about the argument.
    pub fn parse(line: &[u8]) -> Result<Command, CalcError> {
        let mut cursor = Cursor::new(line);
        let name = cursor.take_word();
        if name.len() > MAX_NAME_LEN {
            return Err(CalcError::WrongCommand);
        }

        match lookup(name).ok_or(CalcError::WrongCommand)? {
            Name::Plain(command) => {
                if cursor.at_line_end() {
                    Ok(command)
                } else {
                    Err(CalcError::WrongCommand)
                }
            }
            // ranges checked by read_integer
            Name::DegBy => argument(&mut cursor, ArgKind::Variable, IntRange::Variable)
                .map(|v| Command::DegBy(v as u32)),
            Name::At => argument(&mut cursor, ArgKind::Value, IntRange::Coeff).map(Command::At),
            Name::Compose => argument(&mut cursor, ArgKind::Count, IntRange::Count)
                .map(|k| Command::Compose(k as u32)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Zero => "ZERO",
            Command::IsCoeff => "IS_COEFF",
            Command::IsZero => "IS_ZERO",
            Command::Clone => "CLONE",
            Command::Add => "ADD",
            Command::Mul => "MUL",
            Command::Neg => "NEG",
            Command::Sub => "SUB",
            Command::IsEq => "IS_EQ",
            Command::Deg => "DEG",
            Command::DegBy(_) => "DEG_BY",
            Command::At(_) => "AT",
            Command::Print => "PRINT",
            Command::Pop => "POP",
            Command::Compose(_) => "COMPOSE",
        }
    }

    /// Kind of the numeric argument, for commands that take one
    pub fn arg_kind(&self) -> Option<ArgKind> {
        match self {
            Command::DegBy(_) => Some(ArgKind::Variable),
            Command::At(_) => Some(ArgKind::Value),
            Command::Compose(_) => Some(ArgKind::Count),
            _ => None,
        }
    }

    /// Number of stack values the command needs
    pub fn arity(&self) -> usize {
        match self {
            Command::Zero => 0,
            Command::Add | Command::Mul | Command::Sub | Command::IsEq => 2,
            Command::Compose(k) => *k as usize + 1,
            _ => 1,
        }
    }
}
