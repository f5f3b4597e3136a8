use serde::{Deserialize, Serialize};

use modelgen_naming::to_camel_case;

use crate::additional::AdditionalOptions;
use crate::lang::Lang;
use crate::name_case::NameCase;

fn default_true() -> bool {
    true
}

fn default_indentation() -> usize {
    2
}

/// Indentation prefixes for each nesting depth of the generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indent {
    unit: String,
}

impl Indent {
    /// `spaces` selects spaces over tabs; `width` is the count per level
    /// (0 falls back to 2).
    pub fn new(spaces: bool, width: usize) -> Self {
        let width = if width == 0 { 2 } else { width };
        let ch = if spaces { " " } else { "\t" };
        Self {
            unit: ch.repeat(width),
        }
    }

    /// Prefix for nesting depth `depth`.
    pub fn level(&self, depth: usize) -> String {
        self.unit.repeat(depth)
    }
}

/// Options controlling model text generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    #[serde(default)]
    pub lang: Lang,
    /// Use `sequelize.define` instead of `Model.init` in class-based output.
    #[serde(default)]
    pub use_define: bool,
    /// Indent with spaces (true) or tabs (false).
    #[serde(default = "default_true")]
    pub spaces: bool,
    #[serde(default = "default_indentation")]
    pub indentation: usize,
    #[serde(default)]
    pub case_model: NameCase,
    #[serde(default)]
    pub case_prop: NameCase,
    #[serde(default)]
    pub case_file: NameCase,
    /// Singularize model and file names.
    #[serde(default)]
    pub singularize: bool,
    #[serde(default)]
    pub skip_fields: Vec<String>,
    #[serde(default)]
    pub additional: AdditionalOptions,
    #[serde(default)]
    pub no_indexes: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            use_define: false,
            spaces: true,
            indentation: default_indentation(),
            case_model: NameCase::Original,
            case_prop: NameCase::Original,
            case_file: NameCase::Original,
            singularize: false,
            skip_fields: Vec::new(),
            additional: AdditionalOptions::default(),
            no_indexes: false,
        }
    }
}

impl GeneratorOptions {
    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn indent(&self) -> Indent {
        Indent::new(self.spaces, self.indentation)
    }

    pub fn additional(&self) -> &AdditionalOptions {
        &self.additional
    }

    /// Whether `field` is the `createdAt` or `updatedAt` column managed by
    /// the ORM.
    pub fn is_timestamp_field(&self, field: &str) -> bool {
        let additional = &self.additional;
        if additional.timestamps() == Some(false) {
            return false;
        }
        let camel = to_camel_case(field);
        let is_match = |custom: Option<&str>, default: &str| match custom {
            Some(name) => name == field,
            None => camel == default,
        };
        is_match(additional.created_at(), "createdAt")
            || is_match(additional.updated_at(), "updatedAt")
    }

    /// Whether `field` is the soft-delete (`deletedAt`) column.
    pub fn is_paranoid_field(&self, field: &str) -> bool {
        let additional = &self.additional;
        if additional.timestamps() == Some(false) || additional.paranoid() == Some(false) {
            return false;
        }
        match additional.deleted_at() {
            Some(name) => name == field,
            None => to_camel_case(field) == "deletedAt",
        }
    }

    /// Whether `field` was explicitly excluded with `skip_fields`.
    pub fn is_ignored_field(&self, field: &str) -> bool {
        self.skip_fields.iter().any(|f| f == field)
    }
}
