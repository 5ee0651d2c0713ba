//! Error types for loading datasets and encoding charts.

use std::path::PathBuf;
use thiserror::Error;

/// A dataset could not be retrieved or decoded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("GET {url}: {message}")]
    Http { url: String, message: String },
    #[error("parse {dataset}: {source}")]
    Parse {
        dataset: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The encoding pipeline refused its input.
#[derive(Debug, Error, PartialEq)]
pub enum EncodeError {
    /// No records at all: there is no extent to scale against.
    #[error("empty dataset: nothing to encode")]
    EmptyDataset,
    #[error("non-finite value {value} for {category} in {ordinal}")]
    NonFiniteValue {
        category: String,
        ordinal: i32,
        value: f64,
    },
    #[error("headroom factor must be finite and positive, got {0}")]
    InvalidHeadroom(f64),
    #[error("frame {width}x{height} leaves no room for the plot area")]
    InvalidFrame { width: u32, height: u32 },
}
