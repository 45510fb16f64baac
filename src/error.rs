//! Crate-level error types.

use std::fmt;

/// Errors produced by the molstyle crate.
///
/// Attribute mutation itself is infallible; errors only arise from the
/// preset file layer.
#[derive(Debug)]
pub enum MolStyleError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML preset parsing/serialization failure.
    PresetParse(String),
}

impl fmt::Display for MolStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::PresetParse(msg) => {
                write!(f, "preset parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for MolStyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::PresetParse(_) => None,
        }
    }
}

impl From<std::io::Error> for MolStyleError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
