use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single value in the `additional` table options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl OptionValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Int(n) => write!(f, "{}", n),
            OptionValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

/// Model options applied to every generated table.
///
/// Keys keep their insertion order because everything that is not handled
/// explicitly (`timestamps`, `paranoid`, `name`) is passed through to the
/// table options in the order it was given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct AdditionalOptions(IndexMap<String, OptionValue>);

impl AdditionalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionValue)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Explicit `timestamps` flag, if set to a boolean.
    pub fn timestamps(&self) -> Option<bool> {
        self.get("timestamps").and_then(OptionValue::as_bool)
    }

    /// Explicit `paranoid` flag, if set to a boolean.
    pub fn paranoid(&self) -> Option<bool> {
        self.get("paranoid").and_then(OptionValue::as_bool)
    }

    /// Custom column name for `createdAt`.
    pub fn created_at(&self) -> Option<&str> {
        self.get("createdAt").and_then(OptionValue::as_str)
    }

    /// Custom column name for `updatedAt`.
    pub fn updated_at(&self) -> Option<&str> {
        self.get("updatedAt").and_then(OptionValue::as_str)
    }

    /// Custom column name for `deletedAt`.
    pub fn deleted_at(&self) -> Option<&str> {
        self.get("deletedAt").and_then(OptionValue::as_str)
    }

    /// Whether the `name` option asks to pin singular/plural model names.
    pub fn name(&self) -> bool {
        self.get("name")
            .is_some_and(|v| !matches!(v, OptionValue::Bool(false)))
    }
}
