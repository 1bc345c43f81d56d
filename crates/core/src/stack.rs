//! Value Stack
//!
//! A LIFO of owned polynomials. Every slot owns its value: pushing moves a
//! value in, popping moves it out, and `CLONE`-style duplication goes through
//! an explicit deep copy. Dropping the stack releases everything left on it.
//!
//! ```text
//! ┌──────┬──────┬──────┬─────────┐
//! │  v0  │  v1  │  v2  │  ...    │
//! └──────┴──────┴──────┴─────────┘
//!                  ↑ top (peek / peek_nth(0))
//! ```

use crate::poly::Poly;

/// Default capacity reserved for a new stack
pub const DEFAULT_STACK_CAPACITY: usize = 64;

#[derive(Debug, Default)]
pub struct PolyStack {
    values: Vec<Poly>,
    /// Highest depth reached since creation
    peak: usize,
}

impl PolyStack {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_STACK_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PolyStack {
            values: Vec::with_capacity(capacity),
            peak: 0,
        }
    }

    /// Current number of values
    pub fn depth(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Are at least `n` values available?
    pub fn has(&self, n: usize) -> bool {
        self.values.len() >= n
    }

    pub fn peak_depth(&self) -> usize {
        self.peak
    }

    pub fn push(&mut self, value: Poly) {
        self.values.push(value);
        self.peak = self.peak.max(self.values.len());
    }

    pub fn pop(&mut self) -> Option<Poly> {
        self.values.pop()
    }

    pub fn peek(&self) -> Option<&Poly> {
        self.values.last()
    }

    /// The value `n` slots below the top (`peek_nth(0)` is the top)
    pub fn peek_nth(&self, n: usize) -> Option<&Poly> {
        let len = self.values.len();
        len.checked_sub(n + 1).map(|i| &self.values[i])
    }

    /// Pops `n` values, top first. Leaves the stack untouched when fewer
    /// than `n` are available.
    pub fn pop_many(&mut self, n: usize) -> Option<Vec<Poly>> {
        if !self.has(n) {
            return None;
        }
        let start = self.values.len() - n;
        let mut taken = self.values.split_off(start);
        taken.reverse();
        Some(taken)
    }

    /// Releases every value
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(v: i64) -> Poly {
        Poly::from_coeff(v)
    }

    #[test]
    fn test_stack_basic_operations() {
        let mut stack = PolyStack::new();
        assert!(stack.is_empty());

        stack.push(c(10));
        stack.push(c(20));
        stack.push(c(30));
        assert_eq!(stack.depth(), 3);

        assert_eq!(stack.pop(), Some(c(30)));
        assert_eq!(stack.pop(), Some(c(20)));
        assert_eq!(stack.pop(), Some(c(10)));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_stack_peek() {
        let mut stack = PolyStack::with_capacity(4);
        assert_eq!(stack.peek(), None);

        stack.push(c(1));
        stack.push(c(2));
        assert_eq!(stack.peek(), Some(&c(2)));
        assert_eq!(stack.peek_nth(0), Some(&c(2)));
        assert_eq!(stack.peek_nth(1), Some(&c(1)));
        assert_eq!(stack.peek_nth(2), None);
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_stack_has() {
        let mut stack = PolyStack::new();
        assert!(stack.has(0));
        assert!(!stack.has(1));
        stack.push(Poly::zero());
        assert!(stack.has(1));
        assert!(!stack.has(2));
    }

    #[test]
    fn test_pop_many_top_first() {
        let mut stack = PolyStack::new();
        for v in 1..=4 {
            stack.push(c(v));
        }
        assert_eq!(stack.pop_many(3), Some(vec![c(4), c(3), c(2)]));
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.pop_many(0), Some(vec![]));
    }

    #[test]
    fn test_pop_many_underflow_leaves_stack() {
        let mut stack = PolyStack::new();
        stack.push(c(1));
        assert_eq!(stack.pop_many(2), None);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_peak_depth() {
        let mut stack = PolyStack::new();
        stack.push(c(1));
        stack.push(c(2));
        stack.pop();
        stack.push(c(3));
        assert_eq!(stack.peak_depth(), 2);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.peak_depth(), 2);
    }

    #[test]
    fn test_grows_past_capacity() {
        let mut stack = PolyStack::with_capacity(1);
        for v in 0..100 {
            stack.push(c(v));
        }
        assert_eq!(stack.depth(), 100);
        assert_eq!(stack.peek(), Some(&c(99)));
    }
}
