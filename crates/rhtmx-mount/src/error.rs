//! Error types for parsing and rendering URL mounts

use thiserror::Error;

/// Malformed pattern syntax, reported at construction time
///
/// Positions are byte offsets into the raw pattern string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `)` with no open group to close
    #[error("unbalanced ')' at position {position}")]
    UnbalancedClose { position: usize },

    /// A `(` still open at end of input (innermost one is reported)
    #[error("unclosed '(' opened at position {position}")]
    UnclosedGroup { position: usize },

    /// A lone `:` with no variable name after it
    #[error("variable at position {position} has no name")]
    EmptyVariableName { position: usize },
}

/// Errors produced by [`UrlMount`](crate::UrlMount) construction and rendering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("invalid url mount pattern: {0}")]
    Parse(#[from] ParseError),

    /// Defaults were supplied for names the pattern never declares
    /// (only raised with `UnusedDefaults::Reject`)
    #[error("defaults given for unknown variables: {}", .0.join(", "))]
    UnusedDefaults(Vec<String>),

    /// Required variables with neither a binding nor a default
    #[error("missing required variables: {}", .0.join(", "))]
    MissingRequiredVariables(Vec<String>),
}

impl MountError {
    /// Names of the required variables that could not be resolved, if this
    /// is a render failure
    pub fn missing_variables(&self) -> Option<&[String]> {
        match self {
            MountError::MissingRequiredVariables(names) => Some(names),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, MountError>;
