// File: crates/plotframe-core/src/error.rs
// Summary: Error type shared by record parsing, layout construction and config loading.

use thiserror::Error;

use crate::record::ScalarKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("{field} must be non-negative, got {value}")]
    NegativeExtent { field: &'static str, value: f64 },

    #[error("margins ({margins}) exceed {axis} extent ({extent})")]
    MarginOverflow { axis: Axis, extent: f64, margins: f64 },

    #[error("{field} is {actual}, expected {expected} from width/height and margins")]
    BoundedMismatch { field: &'static str, expected: f64, actual: f64 },

    #[error("missing key '{0}'")]
    MissingKey(String),

    #[error("key '{key}' holds {found}, expected {expected}")]
    WrongKind { key: String, expected: ScalarKind, found: ScalarKind },

    #[error("key '{key}' holds {found}; values must be a number or a string")]
    InvalidValue { key: String, found: &'static str },

    #[error("record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Layout axis named in margin overflow errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}
