use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An attribute value as delivered by introspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Objects, arrays and nulls, kept as the JSON they arrived as.
    Json(serde_json::Value),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Json(serde_json::Value::Null))
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Int(n) => write!(f, "{}", n),
            AttrValue::Float(n) => write!(f, "{}", n),
            AttrValue::Str(s) => f.write_str(s),
            AttrValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

/// Column uniqueness: a plain flag or the name of the unique constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UniqueSpec {
    Flag(bool),
    Name(String),
}

/// One introspected column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: String,
    /// Raw, dialect-specific type string (`varchar(255)`, `int unsigned`, ...).
    pub r#type: String,
    #[serde(default)]
    pub allow_null: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<AttrValue>,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub auto_increment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<UniqueSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Element type of array columns, or the sub-type of spatial columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
    /// Enum labels reported separately from the type (postgres).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special: Vec<String>,
    /// Any other attribute, passed through to the generated field verbatim.
    #[serde(flatten)]
    pub extra: IndexMap<String, AttrValue>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, r#type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            r#type: r#type.into(),
            allow_null: false,
            default_value: None,
            primary_key: false,
            auto_increment: false,
            unique: None,
            comment: None,
            element_type: None,
            special: Vec::new(),
            extra: IndexMap::new(),
        }
    }

    pub fn nullable(mut self) -> Self {
        self.allow_null = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<AttrValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn unique(mut self, unique: UniqueSpec) -> Self {
        self.unique = Some(unique);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn element_type(mut self, element_type: impl Into<String>) -> Self {
        self.element_type = Some(element_type.into());
        self
    }

    pub fn special<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_introspected_column() {
        let json = r#"{
            "name": "status",
            "type": "USER-DEFINED",
            "allowNull": true,
            "defaultValue": "'active'::status",
            "special": ["active", "banned"],
            "unique": "uq_status",
            "charset": "utf8",
            "precision": 2
        }"#;
        let field: FieldDef = serde_json::from_str(json).unwrap();

        assert_eq!(field.r#type, "USER-DEFINED");
        assert!(field.allow_null);
        assert!(!field.primary_key);
        assert_eq!(field.default_value, Some(AttrValue::from("'active'::status")));
        assert_eq!(field.special, vec!["active", "banned"]);
        assert_eq!(field.unique, Some(UniqueSpec::Name("uq_status".into())));
        let extra: Vec<&str> = field.extra.keys().map(String::as_str).collect();
        assert_eq!(extra, vec!["charset", "precision"]);
        assert_eq!(field.extra["precision"], AttrValue::Int(2));
    }

    #[test]
    fn structured_and_null_attributes_are_kept() {
        let json = r#"{
            "name": "owner_id",
            "type": "int",
            "references": {"model": "users", "key": "id"},
            "collate": null
        }"#;
        let field: FieldDef = serde_json::from_str(json).unwrap();

        assert_eq!(
            field.extra["references"],
            AttrValue::Json(serde_json::json!({"model": "users", "key": "id"}))
        );
        assert_eq!(
            field.extra["references"].to_string(),
            r#"{"model":"users","key":"id"}"#
        );
        assert!(field.extra["collate"].is_null());
        assert!(!field.extra["references"].is_null());
    }

    #[test]
    fn non_string_defaults_keep_their_kind() {
        let field: FieldDef =
            serde_json::from_str(r#"{"name": "ratio", "type": "float", "defaultValue": 0.5}"#)
                .unwrap();
        assert_eq!(field.default_value, Some(AttrValue::Float(0.5)));
        assert_eq!(field.default_value.unwrap().to_string(), "0.5");
    }

    #[test]
    fn builder_sets_flags() {
        let field = FieldDef::new("id", "integer")
            .primary_key()
            .auto_increment()
            .comment("surrogate key");
        assert!(field.primary_key);
        assert!(field.auto_increment);
        assert!(!field.allow_null);
        assert_eq!(field.comment.as_deref(), Some("surrogate key"));
    }
}
