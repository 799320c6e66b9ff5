//! Question catalogs: the built-in checklist and TOML-defined ones

mod bank;
mod types;

pub use bank::QuestionBank;
pub use types::{CatalogFile, CatalogSection};
