use std::path::PathBuf;

/// A collection of configuration options relevant only to the CLI.
#[derive(Default)]
pub struct CliConfig {
    /// Whether to search for more than one cycle.
    pub enumerate: bool,

    /// Whether to report a model, if one exists.
    pub model: bool,

    /// Whether to report counts of variables, clauses, and solves.
    pub stats: bool,

    /// Where to write the encoding in DIMACS form, instead of solving.
    pub dimacs: Option<PathBuf>,

    /// Where to read the output of an external solver, instead of solving.
    pub solution: Option<PathBuf>,
}

pub enum ConfigError {
    NonSpecific(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::NonSpecific(s) => write!(f, "{s}"),
        }
    }
}
