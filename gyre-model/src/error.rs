use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    /// A mode name that does not match any known placement mode.
    UnknownMode(String),
    /// A numeric parameter outside its valid range.
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownMode(name) => {
                write!(f, "unknown placement mode: {name}")
            }
            ModelError::InvalidParameter {
                name,
                value,
                reason,
            } => {
                write!(f, "invalid parameter {name}={value}: {reason}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
