//! Error types for checkup-core

use thiserror::Error;

/// Top-level error type for checkup-core
#[derive(Error, Debug)]
pub enum CheckupError {
    #[error("No question at section {section}, item {item}")]
    IndexOutOfRange { section: usize, item: usize },

    #[error("Invalid answer: {0:?} (expected \"yes\" or \"no\")")]
    InvalidAnswer(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Errors raised while loading a question catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Catalog has no sections")]
    Empty,

    #[error("Section {0:?} has no questions")]
    EmptySection(String),

    #[error("Blank {0} in catalog")]
    Blank(&'static str),
}
