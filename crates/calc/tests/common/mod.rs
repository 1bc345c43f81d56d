//! Shared helpers for the integration tests

#![allow(dead_code)]

use polycalc::{CalcConfig, RunStats};

/// Captured streams of one run
pub struct Output {
    pub stdout: String,
    pub stderr: String,
    pub stats: RunStats,
}

pub fn run_with(input: &str, config: CalcConfig) -> Output {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let stats = polycalc::run(input.as_bytes(), config, &mut out, &mut err).unwrap();
    Output {
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
        stats,
    }
}

pub fn run(input: &str) -> Output {
    run_with(input, CalcConfig::default())
}
