//! Property-based tests for the arithmetic kernel.
