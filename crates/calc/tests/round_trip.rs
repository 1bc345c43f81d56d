//! Printing then parsing gives back the same polynomial

mod common;

use poly_core::{Mono, Poly};
use polycalc::parse_literal;
use proptest::prelude::*;

fn coeff() -> impl Strategy<Value = i64> {
    prop_oneof![-20i64..20, any::<i64>()]
}

fn poly() -> impl Strategy<Value = Poly> {
    let leaf = coeff().prop_map(Poly::from_coeff);
    leaf.prop_recursive(4, 32, 5, |inner| {
        (coeff(), prop::collection::vec((inner, any::<u32>()), 0..5)).prop_map(
            |(constant, terms)| {
                let monos = terms
                    .into_iter()
                    .map(|(c, e)| Mono::new(c, e))
                    .collect();
                Poly::from_monos(monos) + Poly::from_coeff(constant)
            },
        )
    })
}

#[test]
fn square_near_exponent_limit_reads_back() {
    let x = parse_literal("(1,2147483647)").unwrap();
    let square = x.clone() * x;
    assert_eq!(square.to_string(), "(1,4294967294)");
    assert_eq!(parse_literal(&square.to_string()), Ok(square.clone()));

    let again = square.clone() * square;
    assert_eq!(again.to_string(), "(1,4294967295)");
    assert_eq!(parse_literal(&again.to_string()), Ok(again));
}

proptest! {
    #[test]
    fn print_then_parse(p in poly()) {
        let text = p.to_string();
        prop_assert_eq!(parse_literal(&text), Ok(p));
    }

    #[test]
    fn print_is_stable_through_the_interpreter(p in poly()) {
        let text = p.to_string();
        let o = common::run(&format!("{}\nPRINT\n", text));
        prop_assert_eq!(o.stderr, "");
        prop_assert_eq!(o.stdout, format!("{}\n", text));
    }

    #[test]
    fn clone_then_is_eq(p in poly()) {
        let o = common::run(&format!("{}\nCLONE\nIS_EQ\n", p));
        prop_assert_eq!(o.stdout, "1\n");
    }
}
