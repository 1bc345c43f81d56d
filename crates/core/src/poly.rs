//! Polynomial Model
//!
//! A [`Poly`] is a polynomial in the "current" variable whose coefficients are
//! themselves polynomials in the next variable. The nesting depth is never
//! declared; it is whatever the value was built with. Variable index 0 is the
//! outermost variable, index 1 the variable of the coefficients, and so on.
//!
//! ## Canonical form
//!
//! Every constructor in this crate returns a canonical value:
//!
//! ```text
//! Poly::Coeff(c)                      pure scalar, no monomials
//! Poly::Sum { constant, monos }       at least one monomial
//!   - monos sorted by strictly increasing exponent
//!   - no monomial coefficient is the zero polynomial
//!   - an exponent-0 monomial only exists with a non-scalar coefficient,
//!     and when it exists `constant` is 0
//! ```
//!
//! The representation is unique, so structural equality (`==`) is polynomial
//! equality. Values are plain owned trees: `clone` is a deep copy and dropping
//! a value releases every nested coefficient.

use std::mem;

/// Coefficient type (full signed 64-bit range)
pub type Coeff = i64;

/// Exponent type
pub type Exp = u32;

/// A sparse polynomial with polynomial coefficients.
///
/// Build values through [`Poly::zero`], [`Poly::from_coeff`], [`Poly::mono`],
/// [`Poly::from_monos`] or the arithmetic operators. The variants are public
/// for matching; constructing `Sum` by hand bypasses normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poly {
    /// A pure scalar
    Coeff(Coeff),
    /// `constant + Σ coeff * x^exp`
    Sum { constant: Coeff, monos: Vec<Mono> },
}

/// A monomial `coeff * x^exp`, where `coeff` is a polynomial in the next variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mono {
    pub coeff: Poly,
    pub exp: Exp,
}

impl Mono {
    pub fn new(coeff: Poly, exp: Exp) -> Self {
        Mono { coeff, exp }
    }
}

impl Default for Poly {
    fn default() -> Self {
        Poly::zero()
    }
}

impl Poly {
    /// The zero polynomial
    pub fn zero() -> Self {
        Poly::Coeff(0)
    }

    /// A scalar polynomial
    pub fn from_coeff(c: Coeff) -> Self {
        Poly::Coeff(c)
    }

    /// The single-monomial polynomial `coeff * x^exp`
    pub fn mono(coeff: Poly, exp: Exp) -> Self {
        Poly::from_monos(vec![Mono::new(coeff, exp)])
    }

    /// The polynomial consisting of variable `index` alone.
    ///
    /// `var(0)` is `x0`, `var(1)` is `x1` written as `((1,1),0)`, and so on.
    pub fn var(index: u32) -> Self {
        (0..index).fold(Poly::mono(Poly::from_coeff(1), 1), |inner, _| {
            Poly::mono(inner, 0)
        })
    }

    /// Is this the zero polynomial?
    pub fn is_zero(&self) -> bool {
        matches!(self, Poly::Coeff(0))
    }

    /// Is this a pure scalar?
    pub fn is_coeff(&self) -> bool {
        matches!(self, Poly::Coeff(_))
    }

    /// The scalar term stored at this level (the whole value for a scalar)
    pub fn constant(&self) -> Coeff {
        match self {
            Poly::Coeff(c) => *c,
            Poly::Sum { constant, .. } => *constant,
        }
    }

    /// Monomials in ascending exponent order (empty for a scalar)
    pub fn monos(&self) -> &[Mono] {
        match self {
            Poly::Coeff(_) => &[],
            Poly::Sum { monos, .. } => monos,
        }
    }

    /// Value of the polynomial with every variable set to 0
    pub fn constant_term(&self) -> Coeff {
        match self {
            Poly::Coeff(c) => *c,
            Poly::Sum { constant, monos } => match monos.first() {
                Some(first) if first.exp == 0 => constant.wrapping_add(first.coeff.constant_term()),
                _ => *constant,
            },
        }
    }

    /// Number of variables this value is nested over (0 for a scalar)
    pub fn depth(&self) -> usize {
        self.monos()
            .iter()
            .map(|m| m.coeff.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Builds a canonical value from a constant and sorted, zero-free monomials.
    ///
    /// This is the single place where the exponent-0 rule is enforced: a
    /// scalar exponent-0 monomial is folded into the constant, and a constant
    /// next to a non-scalar exponent-0 monomial is pushed into that monomial.
    pub(crate) fn assemble(mut constant: Coeff, mut monos: Vec<Mono>) -> Poly {
        debug_assert!(monos.windows(2).all(|w| w[0].exp < w[1].exp));

        if monos.first().is_some_and(|m| m.exp == 0) {
            if let Poly::Coeff(c) = monos[0].coeff {
                constant = constant.wrapping_add(c);
                monos.remove(0);
            } else if constant != 0 {
                let coeff = mem::take(&mut monos[0].coeff);
                monos[0].coeff = coeff.add_constant(constant);
                constant = 0;
            }
        }

        if monos.is_empty() {
            Poly::Coeff(constant)
        } else {
            Poly::Sum { constant, monos }
        }
    }

    /// Adds a scalar. A non-scalar stays non-scalar.
    pub(crate) fn add_constant(self, c: Coeff) -> Poly {
        match self {
            Poly::Coeff(a) => Poly::Coeff(a.wrapping_add(c)),
            Poly::Sum { constant, monos } => Poly::assemble(constant.wrapping_add(c), monos),
        }
    }
}
