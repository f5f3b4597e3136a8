use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::schema::{
    field::FieldDef, foreign_key::ForeignKeyDef, index::IndexDef, names::TableName,
    relation::RelationDef,
};

/// One introspected table.
///
/// `fields` keeps introspection order, which is also the order of the
/// generated attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDef {
    pub name: TableName,
    #[serde(deserialize_with = "first_named_fields")]
    pub fields: Vec<FieldDef>,
    /// Key descriptors by column name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub foreign_keys: IndexMap<String, ForeignKeyDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<IndexDef>,
    #[serde(default)]
    pub has_trigger: bool,
}

/// Keep the first column of each name; introspection may repeat a column.
fn first_named_fields<'de, D>(deserializer: D) -> Result<Vec<FieldDef>, D::Error>
where
    D: Deserializer<'de>,
{
    let fields = Vec::<FieldDef>::deserialize(deserializer)?;
    let mut unique: Vec<FieldDef> = Vec::with_capacity(fields.len());
    for field in fields {
        if !unique.iter().any(|f| f.name == field.name) {
            unique.push(field);
        }
    }
    Ok(unique)
}

impl TableDef {
    pub fn new(name: impl Into<TableName>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            foreign_keys: IndexMap::new(),
            indexes: Vec::new(),
            has_trigger: false,
        }
    }

    /// Append a field unless one with the same name already exists.
    pub fn with_field(mut self, field: FieldDef) -> Self {
        if self.field(&field.name).is_none() {
            self.fields.push(field);
        }
        self
    }

    pub fn with_foreign_key(mut self, column: impl Into<String>, fk: ForeignKeyDef) -> Self {
        self.foreign_keys.insert(column.into(), fk);
        self
    }

    pub fn with_index(mut self, index: IndexDef) -> Self {
        self.indexes.push(index);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn foreign_key(&self, column: &str) -> Option<&ForeignKeyDef> {
        self.foreign_keys.get(column)
    }

    /// Fields in column order, skipping any later field that repeats an
    /// earlier name.
    pub fn columns(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields
            .iter()
            .enumerate()
            .filter(move |(i, field)| !self.fields[..*i].iter().any(|f| f.name == field.name))
            .map(|(_, field)| field)
    }

    /// Fields flagged as primary key, in column order.
    pub fn primary_keys(&self) -> impl Iterator<Item = &FieldDef> {
        self.columns().filter(|f| f.primary_key)
    }
}

/// Everything introspection produced for one database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableData {
    pub tables: Vec<TableDef>,
    #[serde(default)]
    pub relations: Vec<RelationDef>,
}

impl TableData {
    pub fn table(&self, qualified: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.name.qualified() == qualified)
    }
}
