use thiserror::Error;

use crate::builder::stepwise::CarType;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid wheel size {size} for car type {car_type}")]
    InvalidWheelSize { size: u32, car_type: CarType },

    #[error("{operation} is not implemented")]
    NotImplemented { operation: String },

    #[error("Score can't be < 0 (got {score})")]
    InvalidScore { score: i64 },

    #[error("Unknown example '{name}'")]
    UnknownExample { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PatternError {
    pub fn not_implemented(operation: impl Into<String>) -> Self {
        Self::NotImplemented {
            operation: operation.into(),
        }
    }

    pub fn unknown_example(name: impl Into<String>) -> Self {
        Self::UnknownExample { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
