use std::fmt;

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Which document an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Errors raised at the wasm boundary. Diffing itself never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    #[error("{side} text has {lines} lines, limit is {limit}")]
    InputTooLarge {
        side: Side,
        lines: usize,
        limit: usize,
    },
    #[error("{left} x {right} lines is too large to diff")]
    TableTooLarge { left: usize, right: usize },
    #[error("invalid diff options: {0}")]
    InvalidOptions(String),
    #[error("failed to serialize diff: {0}")]
    Serialization(String),
}

impl From<DiffError> for JsValue {
    fn from(err: DiffError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
