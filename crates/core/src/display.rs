//! Canonical printer
//!
//! The textual form read back by the literal parser:
//!
//! ```text
//! 7                   scalar
//! (3,2)+(5,3)         3x^2 + 5x^3
//! (1,0)+((2,1),1)     1 + 2yx
//! ```
//!
//! A nonzero constant of a non-scalar value prints as an exponent-0 term.

use crate::poly::{Mono, Poly};
use std::fmt;

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Poly::Coeff(c) => write!(f, "{}", c),
            Poly::Sum { constant, monos } => {
                let mut first = true;
                if *constant != 0 {
                    write!(f, "({},0)", constant)?;
                    first = false;
                }
                for mono in monos {
                    if !first {
                        f.write_str("+")?;
                    }
                    write!(f, "{}", mono)?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Mono {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.coeff, self.exp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(v: i64) -> Poly {
        Poly::from_coeff(v)
    }

    #[test]
    fn test_display_scalar() {
        assert_eq!(c(0).to_string(), "0");
        assert_eq!(c(-42).to_string(), "-42");
        assert_eq!(c(i64::MIN).to_string(), "-9223372036854775808");
    }

    #[test]
    fn test_display_terms_ascending() {
        let p = Poly::mono(c(5), 3) + Poly::mono(c(3), 2);
        assert_eq!(p.to_string(), "(3,2)+(5,3)");
    }

    #[test]
    fn test_display_constant_first() {
        let p = Poly::mono(c(-1), 1) + c(4);
        assert_eq!(p.to_string(), "(4,0)+(-1,1)");
    }

    #[test]
    fn test_display_nested() {
        // y * x^2 + 1
        let p = Poly::mono(Poly::var(0), 2) + c(1);
        assert_eq!(p.to_string(), "(1,0)+((1,1),2)");
    }

    #[test]
    fn test_display_nested_exponent_zero() {
        // constant moved inside the exponent-0 coefficient
        let p = Poly::var(1) + c(2);
        assert_eq!(p.to_string(), "((2,0)+(1,1),0)");
    }

    #[test]
    fn test_display_mono() {
        assert_eq!(Mono::new(c(7), 9).to_string(), "(7,9)");
    }
}
