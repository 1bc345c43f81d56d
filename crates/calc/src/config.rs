//! Calculator configuration
//!
//! Settings come from an optional TOML file passed with `--config`:
//!
//! ```toml
//! max_nesting_depth = 256
//! stack_capacity = 128
//! flush_each_line = true
//! ```
//!
//! Every key is optional. Unknown keys are rejected so that typos surface.
//!
//! ```rust,ignore
//! let config = CalcConfig::new()
//!     .with_max_nesting_depth(64)
//!     .with_flush_each_line(true);
//! ```

use crate::parser::DEFAULT_MAX_NESTING_DEPTH;
use poly_core::DEFAULT_STACK_CAPACITY;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalcConfig {
    /// Deepest parenthesis nesting accepted in a literal
    pub max_nesting_depth: usize,
    /// Initial capacity of the value stack
    pub stack_capacity: usize,
    /// Flush the output stream after every line that printed something
    pub flush_each_line: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        CalcConfig {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            stack_capacity: DEFAULT_STACK_CAPACITY,
            flush_each_line: false,
        }
    }
}

impl CalcConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        Self::from_toml(&content)
    }

    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    pub fn with_stack_capacity(mut self, capacity: usize) -> Self {
        self.stack_capacity = capacity;
        self
    }

    pub fn with_flush_each_line(mut self, flush: bool) -> Self {
        self.flush_each_line = flush;
        self
    }
}
