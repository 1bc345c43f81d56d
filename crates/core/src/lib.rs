//! Poly Core: sparse multivariate polynomials over `i64`
//!
//! This crate holds the value model and everything that operates on values
//! without knowing about the command language:
//! - Poly: a polynomial whose coefficients are polynomials in the next variable
//! - arithmetic: add, sub, neg, mul, pow, degree queries, evaluation, composition
//! - printing in the canonical literal syntax
//! - PolyStack: the owned value stack the calculator drives
//!
//! # Modules
//!
//! - `poly`: Poly / Mono types and the canonical-form invariants
//! - `arith`: the arithmetic kernel (operator traits and queries)
//! - `display`: canonical printer
//! - `stack`: value stack

pub mod arith;
pub mod display;
pub mod poly;
pub mod stack;

mod proptests;

pub use poly::{Coeff, Exp, Mono, Poly};
pub use stack::{DEFAULT_STACK_CAPACITY, PolyStack};
