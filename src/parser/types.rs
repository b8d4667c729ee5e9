use serde::Deserialize;
use serde_json::Value;

/// One array element as written in the materials file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub template: RawTemplate,
    pub color_key: String,
    /// Only read in structural mode
    #[serde(default)]
    pub mass: Option<Mass>,
    #[serde(default)]
    pub strength: Value,
    #[serde(default)]
    pub stiffness: Value,
}

/// The `template` object: where the swatch goes.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTemplate {
    pub row: String,
    pub column: RawColumn,
}

/// `column` is accepted either as a bare integer or as a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawColumn {
    Index(i64),
    Text(String),
}

impl RawColumn {
    pub fn to_template_string(&self) -> String {
        match self {
            RawColumn::Index(i) => i.to_string(),
            RawColumn::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mass {
    pub nominal_mass: f64,
    pub density: f64,
}

/// Fields only the renderer looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub color_key: String,
    pub mass: Option<Mass>,
    pub strength: Value,
    pub stiffness: Value,
}

/// A validated entry with its logical grid address.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Position of the entry in the input array
    pub source_index: usize,
    pub row_position: i64,
    pub row_label: String,
    pub col_position: i64,
    /// Empty when the column template carries no label
    pub col_label: String,
    pub payload: Payload,
}
