use std::fmt;

use modelgen_naming::{qname_join, qname_split};
use serde::{Deserialize, Serialize};

/// A table identifier with an optional schema.
///
/// Serialized as the qualified string (`schema.table` or `table`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TableName {
    pub schema: Option<String>,
    pub name: String,
}

impl TableName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }

    pub fn with_schema(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            name: name.into(),
        }
    }

    /// Parse a possibly qualified identifier.
    pub fn parse(qname: &str) -> Self {
        let (schema, name) = qname_split(qname);
        Self {
            schema: schema.map(str::to_string),
            name: name.to_string(),
        }
    }

    /// The identifier used to key tables, foreign keys and relations.
    pub fn qualified(&self) -> String {
        qname_join(self.schema.as_deref(), &self.name)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified())
    }
}

impl From<String> for TableName {
    fn from(value: String) -> Self {
        TableName::parse(&value)
    }
}

impl From<&str> for TableName {
    fn from(value: &str) -> Self {
        TableName::parse(value)
    }
}

impl From<TableName> for String {
    fn from(value: TableName) -> Self {
        value.qualified()
    }
}
