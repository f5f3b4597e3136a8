use serde::{Deserialize, Serialize};

/// Identity generation mode of a column (postgres `GENERATED ... AS IDENTITY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Generation {
    #[serde(rename = "ALWAYS")]
    Always,
    #[serde(rename = "BY DEFAULT")]
    ByDefault,
}

/// Key information resolved for one column.
///
/// Despite the name this describes every key role the column plays: a
/// descriptor exists for primary, unique and serial columns too, with
/// `is_foreign_key` telling whether it actually references another table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKeyDef {
    #[serde(default)]
    pub source_table: String,
    #[serde(default)]
    pub source_column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_column: Option<String>,
    #[serde(default)]
    pub is_foreign_key: bool,
    #[serde(default)]
    pub is_primary_key: bool,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default)]
    pub is_serial_key: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<Generation>,
}

impl ForeignKeyDef {
    /// A descriptor for a column referencing `target_table.target_column`.
    pub fn references(target_table: impl Into<String>, target_column: impl Into<String>) -> Self {
        Self {
            target_table: Some(target_table.into()),
            target_column: Some(target_column.into()),
            is_foreign_key: true,
            ..Default::default()
        }
    }

    /// Whether the column is database-generated with identity semantics.
    pub fn is_identity(&self) -> bool {
        self.is_primary_key && self.generation.is_some()
    }
}
