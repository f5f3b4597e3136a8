use std::str::FromStr;

use modelgen_naming::{
    singularize, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case,
    to_upper_snake_case,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Supported naming cases.
///
/// Serialized with the single-letter codes used on the command line of the
/// generator (`o`, `c`, `l`, `p`, `u`, `k`); the long names are accepted as
/// aliases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum NameCase {
    #[default]
    #[serde(rename = "o", alias = "original")]
    Original,
    #[serde(rename = "c", alias = "camel")]
    Camel,
    #[serde(rename = "l", alias = "snake")]
    Snake,
    #[serde(rename = "p", alias = "pascal")]
    Pascal,
    #[serde(rename = "u", alias = "upper")]
    UpperSnake,
    #[serde(rename = "k", alias = "kebab")]
    Kebab,
}

impl NameCase {
    /// Returns true when names are kept as-is.
    pub fn is_original(self) -> bool {
        matches!(self, NameCase::Original)
    }

    /// Returns true when camel case.
    pub fn is_camel(self) -> bool {
        matches!(self, NameCase::Camel)
    }

    /// Returns true when pascal case.
    pub fn is_pascal(self) -> bool {
        matches!(self, NameCase::Pascal)
    }

    /// Convert `value` to this case, singularizing it first when asked.
    pub fn recase(self, value: &str, singular: bool) -> String {
        let value = if singular {
            singularize(value)
        } else {
            value.to_string()
        };
        if value.is_empty() {
            return value;
        }
        match self {
            NameCase::Original => value,
            NameCase::Camel => to_camel_case(&value),
            NameCase::Snake => to_snake_case(&value),
            NameCase::Pascal => to_pascal_case(&value),
            NameCase::UpperSnake => to_upper_snake_case(&value),
            NameCase::Kebab => to_kebab_case(&value),
        }
    }
}

impl FromStr for NameCase {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "o" | "original" => Ok(NameCase::Original),
            "c" | "camel" => Ok(NameCase::Camel),
            "l" | "snake" => Ok(NameCase::Snake),
            "p" | "pascal" => Ok(NameCase::Pascal),
            "u" | "upper" => Ok(NameCase::UpperSnake),
            "k" | "kebab" => Ok(NameCase::Kebab),
            other => Err(ConfigError::UnknownNameCase(other.to_string())),
        }
    }
}
