//! Arithmetic Kernel
//!
//! Pure operations over [`Poly`]. Binary operators consume their operands;
//! queries (`deg`, `deg_by`, `at`, `==`) borrow.
//!
//! # Normalization
//!
//! [`Poly::from_monos`] is the normalization path for an arbitrary list of
//! monomials (literal parsing and multiplication go through it). Addition
//! merges two already-sorted lists directly. Both finish in the same
//! assembly step, which owns the exponent-0 rule.
//!
//! # Overflow Behavior
//!
//! Coefficient arithmetic uses **wrapping semantics** (two's complement):
//! - `i64::MAX + 1` wraps to `i64::MIN`
//! - products wrap around; a term whose coefficient wraps to 0 disappears
//!
//! Exponents never wrap. Exponent sums in products and powers saturate at
//! `u32::MAX`, the same bound as degrees, and every exponent produced here
//! is one the literal parser accepts.

use crate::poly::{Coeff, Exp, Mono, Poly};
use std::cmp::Ordering;
use std::mem;
use std::ops::{Add, Mul, Neg, Sub};

impl Poly {
    /// Builds a canonical polynomial from unordered monomials.
    ///
    /// Monomials are sorted by exponent (scalar coefficients first among
    /// equals), same-exponent coefficients are added, zero results are
    /// dropped and scalar exponent-0 terms are folded into the constant.
    pub fn from_monos(mut monos: Vec<Mono>) -> Poly {
        monos.sort_by_key(|m| (m.exp, !m.coeff.is_coeff()));

        let mut merged: Vec<Mono> = Vec::with_capacity(monos.len());
        for mono in monos {
            match merged.last_mut() {
                Some(last) if last.exp == mono.exp => {
                    let acc = mem::take(&mut last.coeff);
                    last.coeff = acc + mono.coeff;
                }
                _ => merged.push(mono),
            }
        }
        merged.retain(|m| !m.coeff.is_zero());

        Poly::assemble(0, merged)
    }

    /// Multiplies every coefficient by `c`
    pub fn scale(self, c: Coeff) -> Poly {
        if c == 0 {
            return Poly::zero();
        }
        match self {
            Poly::Coeff(a) => Poly::Coeff(a.wrapping_mul(c)),
            Poly::Sum { constant, monos } => {
                let monos = monos
                    .into_iter()
                    .filter_map(|m| {
                        let coeff = m.coeff.scale(c);
                        (!coeff.is_zero()).then(|| Mono::new(coeff, m.exp))
                    })
                    .collect();
                Poly::assemble(constant.wrapping_mul(c), monos)
            }
        }
    }

    /// Raises to a power by repeated squaring
    pub fn pow(&self, exp: Exp) -> Poly {
        match (self, exp) {
            (_, 0) => Poly::from_coeff(1),
            (Poly::Coeff(a), _) => Poly::Coeff(a.wrapping_pow(exp)),
            (_, 1) => self.clone(),
            _ => {
                let half = (self.clone() * self.clone()).pow(exp / 2);
                if exp % 2 == 1 {
                    half * self.clone()
                } else {
                    half
                }
            }
        }
    }

    /// Degree with respect to variable `var` (`None` for the zero polynomial)
    pub fn deg_by(&self, var: u32) -> Option<Exp> {
        match self {
            Poly::Coeff(0) => None,
            Poly::Coeff(_) => Some(0),
            Poly::Sum { monos, .. } if var == 0 => monos.last().map(|m| m.exp),
            Poly::Sum { monos, .. } => Some(
                monos
                    .iter()
                    .filter_map(|m| m.coeff.deg_by(var - 1))
                    .max()
                    .unwrap_or(0),
            ),
        }
    }

    /// Total degree (`None` for the zero polynomial)
    pub fn deg(&self) -> Option<Exp> {
        match self {
            Poly::Coeff(0) => None,
            Poly::Coeff(_) => Some(0),
            Poly::Sum { monos, .. } => Some(
                monos
                    .iter()
                    .filter_map(|m| m.coeff.deg().map(|d| d.saturating_add(m.exp)))
                    .max()
                    .unwrap_or(0),
            ),
        }
    }

    /// Substitutes `x` for the outermost variable.
    ///
    /// The result is one level shallower: coefficients that were polynomials
    /// in variable 1 become polynomials in variable 0.
    pub fn at(&self, x: Coeff) -> Poly {
        let (constant, monos) = match self {
            Poly::Coeff(_) => return self.clone(),
            Poly::Sum { constant, monos } => (*constant, monos),
        };

        let mut result = Poly::from_coeff(constant);
        let mut power: Coeff = 1;
        let mut reached: Exp = 0;
        for mono in monos {
            // catch up from the previous exponent instead of starting over
            power = power.wrapping_mul(x.wrapping_pow(mono.exp - reached));
            reached = mono.exp;
            result = result + mono.coeff.clone().scale(power);
        }
        result
    }

    /// Substitutes `subs[i]` for variable `i`.
    ///
    /// Variables past the end of `subs` are evaluated at 0, so any nesting
    /// below the last substituted variable collapses to its constant term.
    pub fn compose(self, subs: &[Poly]) -> Poly {
        let Some((sub, rest)) = subs.split_first() else {
            return Poly::Coeff(self.constant_term());
        };
        match self {
            Poly::Coeff(c) => Poly::Coeff(c),
            Poly::Sum { constant, monos } => {
                monos.into_iter().fold(Poly::from_coeff(constant), |acc, mono| {
                    acc + sub.pow(mono.exp) * mono.coeff.compose(rest)
                })
            }
        }
    }
}

/// Merges two sorted monomial lists, adding coefficients of equal exponents
fn merge_monos(left: Vec<Mono>, right: Vec<Mono>) -> Vec<Mono> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let order = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l.exp.cmp(&r.exp),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => break,
        };
        match order {
            Ordering::Less => out.extend(left.next()),
            Ordering::Greater => out.extend(right.next()),
            Ordering::Equal => {
                if let (Some(l), Some(r)) = (left.next(), right.next()) {
                    let coeff = l.coeff + r.coeff;
                    if !coeff.is_zero() {
                        out.push(Mono::new(coeff, l.exp));
                    }
                }
            }
        }
    }
    out
}

impl Add for Poly {
    type Output = Poly;

    fn add(self, rhs: Poly) -> Poly {
        match (self, rhs) {
            (Poly::Coeff(a), Poly::Coeff(b)) => Poly::Coeff(a.wrapping_add(b)),
            (Poly::Coeff(a), p) | (p, Poly::Coeff(a)) => p.add_constant(a),
            (
                Poly::Sum {
                    constant: c1,
                    monos: m1,
                },
                Poly::Sum {
                    constant: c2,
                    monos: m2,
                },
            ) => Poly::assemble(c1.wrapping_add(c2), merge_monos(m1, m2)),
        }
    }
}

impl Mul for Poly {
    type Output = Poly;

    fn mul(self, rhs: Poly) -> Poly {
        match (self, rhs) {
            (Poly::Coeff(a), Poly::Coeff(b)) => Poly::Coeff(a.wrapping_mul(b)),
            (Poly::Coeff(a), p) | (p, Poly::Coeff(a)) => p.scale(a),
            (
                Poly::Sum {
                    constant: c1,
                    monos: m1,
                },
                Poly::Sum {
                    constant: c2,
                    monos: m2,
                },
            ) => {
                let mut terms = Vec::with_capacity(m1.len() * m2.len() + m1.len() + m2.len() + 1);
                terms.push(Mono::new(Poly::Coeff(c1.wrapping_mul(c2)), 0));

                for a in &m1 {
                    for b in &m2 {
                        let coeff = a.coeff.clone() * b.coeff.clone();
                        if !coeff.is_zero() {
                            terms.push(Mono::new(coeff, a.exp.saturating_add(b.exp)));
                        }
                    }
                }

                // cross terms with the other side's constant
                if c2 != 0 {
                    terms.extend(m1.into_iter().map(|m| Mono::new(m.coeff.scale(c2), m.exp)));
                }
                if c1 != 0 {
                    terms.extend(m2.into_iter().map(|m| Mono::new(m.coeff.scale(c1), m.exp)));
                }

                Poly::from_monos(terms)
            }
        }
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        self.scale(-1)
    }
}

impl Sub for Poly {
    type Output = Poly;

    fn sub(self, rhs: Poly) -> Poly {
        self + (-rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(v: Coeff) -> Poly {
        Poly::from_coeff(v)
    }

    fn m(coeff: Poly, exp: Exp) -> Mono {
        Mono::new(coeff, exp)
    }

    /// 3x^2 + 5x^3
    fn sample() -> Poly {
        Poly::from_monos(vec![m(c(3), 2), m(c(5), 3)])
    }

    #[test]
    fn test_from_monos_sorts_and_merges() {
        let p = Poly::from_monos(vec![m(c(5), 3), m(c(1), 2), m(c(2), 2)]);
        assert_eq!(p, sample());
    }

    #[test]
    fn test_from_monos_drops_cancelled_terms() {
        let p = Poly::from_monos(vec![m(c(1), 2), m(c(-1), 2)]);
        assert!(p.is_zero());
    }

    #[test]
    fn test_from_monos_folds_scalar_exponent_zero() {
        let p = Poly::from_monos(vec![m(c(4), 0), m(c(1), 1), m(c(-1), 0)]);
        assert_eq!(p.constant(), 3);
        assert_eq!(p.monos(), &[m(c(1), 1)]);
    }

    #[test]
    fn test_from_monos_merges_scalar_into_nested_exponent_zero() {
        // (5,0)+((1,1),0) is the single term (y+5) x^0
        let p = Poly::from_monos(vec![m(c(5), 0), m(Poly::var(0), 0)]);
        assert_eq!(p.constant(), 0);
        assert_eq!(p.monos().len(), 1);
        assert_eq!(p.monos()[0].coeff, Poly::var(0) + c(5));
    }

    #[test]
    fn test_add_scalars() {
        assert_eq!(c(2) + c(3), c(5));
    }

    #[test]
    fn test_add_wraps() {
        assert_eq!(c(i64::MAX) + c(1), c(i64::MIN));
    }

    #[test]
    fn test_add_merges_exponents() {
        let p = sample() + Poly::mono(c(-3), 2);
        assert_eq!(p, Poly::mono(c(5), 3));
    }

    #[test]
    fn test_add_collapses_to_scalar() {
        let p = (sample() + c(7)) - sample();
        assert_eq!(p, c(7));
    }

    #[test]
    fn test_add_nested_exponent_zero_collapses() {
        // (y+5) x^0 + (-y) x^0 = 5
        let a = Poly::var(1) + c(5);
        let b = -Poly::var(1);
        assert_eq!(a + b, c(5));
    }

    #[test]
    fn test_constant_moves_into_nested_exponent_zero() {
        let p = Poly::var(1) + c(2);
        assert_eq!(p.constant(), 0);
        assert_eq!(p.constant_term(), 2);
        // and comes back out when the nested part cancels
        assert_eq!(p - Poly::var(1), c(2));
    }

    #[test]
    fn test_neg_and_sub() {
        let p = sample();
        assert!((p.clone() + (-p.clone())).is_zero());
        assert!((p.clone() - p).is_zero());
    }

    #[test]
    fn test_scale_by_zero() {
        assert!(sample().scale(0).is_zero());
    }

    #[test]
    fn test_scale_drops_wrapped_terms() {
        let p = Poly::from_monos(vec![m(c(1 << 62), 1), m(c(1), 2)]);
        assert_eq!(p.scale(4), Poly::mono(c(4), 2));
    }

    #[test]
    fn test_mul_binomials() {
        // (1 + x)(1 - x) = 1 - x^2
        let a = c(1) + Poly::var(0);
        let b = c(1) - Poly::var(0);
        assert_eq!(a * b, c(1) - Poly::mono(c(1), 2));
    }

    #[test]
    fn test_mul_by_scalar() {
        let doubled = Poly::from_monos(vec![m(c(6), 2), m(c(10), 3)]);
        assert_eq!(sample() * c(2), doubled);
        assert!((sample() * Poly::zero()).is_zero());
    }

    #[test]
    fn test_mul_two_variables() {
        // (x + y)^2 = x^2 + 2xy + y^2
        let x = Poly::var(0);
        let y = Poly::var(1);
        let sum = x.clone() + y.clone();
        let expected = Poly::mono(c(1), 2) + (x * y.clone()).scale(2) + y.clone() * y;
        assert_eq!(sum.clone() * sum, expected);
    }

    #[test]
    fn test_mul_exponents_past_i32_range() {
        let x = Poly::mono(c(1), 2_147_483_647);
        assert_eq!(x.clone() * x, Poly::mono(c(1), 4_294_967_294));
    }

    #[test]
    fn test_mul_exponent_sum_saturates() {
        // 2^31 + 2^31 must not wrap around to the scalar 1
        let x = Poly::mono(c(1), 1 << 31);
        let square = x.clone() * x.clone();
        assert!(!square.is_coeff());
        assert_eq!(square, Poly::mono(c(1), u32::MAX));
        assert_eq!(square.deg(), Some(u32::MAX));
        assert_eq!(x.pow(4), square);
    }

    #[test]
    fn test_pow() {
        let x1 = c(1) + Poly::var(0);
        assert_eq!(x1.pow(0), c(1));
        assert_eq!(x1.pow(1), x1);
        let cube = x1.pow(3);
        assert_eq!(cube, x1.clone() * x1.clone() * x1);
        assert_eq!(c(2).pow(10), c(1024));
    }

    #[test]
    fn test_deg_by() {
        // x^3 * y^2 + x
        let p = Poly::mono(Poly::mono(c(1), 2), 3) + Poly::var(0);
        assert_eq!(p.deg_by(0), Some(3));
        assert_eq!(p.deg_by(1), Some(2));
        assert_eq!(p.deg_by(2), Some(0));
        assert_eq!(Poly::zero().deg_by(0), None);
        assert_eq!(c(4).deg_by(3), Some(0));
    }

    #[test]
    fn test_deg() {
        let p = Poly::mono(Poly::mono(c(1), 2), 3) + Poly::var(0);
        assert_eq!(p.deg(), Some(5));
        assert_eq!(Poly::zero().deg(), None);
        assert_eq!(c(-9).deg(), Some(0));
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(sample(), sample());
        assert_ne!(sample(), sample() + c(1));
        assert_ne!(Poly::var(0), Poly::var(1));
    }

    #[test]
    fn test_at_scalar_point() {
        // 3*4 + 5*8 = 52
        assert_eq!(sample().at(2), c(52));
        assert_eq!(c(7).at(100), c(7));
    }

    #[test]
    fn test_at_shifts_variables() {
        // (y * x^2) at x = 3 is 9y, now in variable 0
        let p = Poly::mono(Poly::var(0), 2);
        assert_eq!(p.at(3), Poly::var(0).scale(9));
    }

    #[test]
    fn test_at_large_exponent_gap() {
        let p = Poly::mono(c(1), 1_000_000_000);
        assert_eq!(p.at(1), c(1));
        assert_eq!(p.at(0), c(0));
    }

    #[test]
    fn test_compose_scalar_unchanged() {
        assert_eq!(c(2).compose(&[]), c(2));
        assert_eq!(c(2).compose(&[c(3)]), c(2));
        assert!(Poly::zero().compose(&[c(2)]).is_zero());
    }

    #[test]
    fn test_compose_without_substitutions_keeps_constant() {
        let p = sample() + c(5);
        assert_eq!(p.compose(&[]), c(5));
        assert_eq!(Poly::mono(c(3), 3).compose(&[]), c(0));
    }

    #[test]
    fn test_compose_scalar_substitution() {
        assert_eq!(sample().compose(&[c(3)]), c(162));
        assert_eq!((sample() + c(5)).compose(&[c(3)]), c(167));
    }

    #[test]
    fn test_compose_polynomial_substitution() {
        // 3x^2 + 5x^3 with x := 4x^2 gives 48x^4 + 320x^6
        let sub = Poly::mono(c(4), 2);
        let expected = Poly::from_monos(vec![m(c(48), 4), m(c(320), 6)]);
        assert_eq!(sample().compose(&[sub]), expected);
    }

    #[test]
    fn test_compose_identity() {
        let x = Poly::var(0);
        let y = Poly::var(1);
        let p = x.clone() * y.clone() + Poly::mono(c(2), 3) + c(1);
        assert_eq!(p.clone().compose(&[x, y]), p);
    }

    #[test]
    fn test_compose_drops_unsubstituted_variable() {
        // x * y with only x substituted: y is evaluated at 0
        let p = Poly::var(0) * Poly::var(1);
        assert!(p.compose(&[c(5)]).is_zero());
    }

    #[test]
    fn test_compose_swaps_variables() {
        let x = Poly::var(0);
        let y = Poly::var(1);
        let p = x.clone() + y.clone().scale(2);
        assert_eq!(p.compose(&[y.clone(), x.clone()]), y + x.scale(2));
    }
}
