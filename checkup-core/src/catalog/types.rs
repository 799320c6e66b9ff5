//! Catalog file format

use serde::{Deserialize, Serialize};

/// Question catalog as stored in TOML
///
/// ```toml
/// [[sections]]
/// title = "Training and Policy"
/// questions = ["Has the member of staff completed training?"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub sections: Vec<CatalogSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsection: Option<String>,
    #[serde(default)]
    pub questions: Vec<String>,
}
