use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Output dialect of the generated model files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// CommonJS `sequelize.define` factory.
    #[default]
    #[serde(alias = "plain")]
    Es5,
    /// CommonJS module exporting a `Model` subclass.
    Es6,
    /// ES module exporting a `Model` subclass.
    Esm,
    /// TypeScript class with typed attributes and association mixins.
    Ts,
}

impl Lang {
    pub fn is_typescript(self) -> bool {
        matches!(self, Lang::Ts)
    }

    /// Returns true for the dialects that wrap the definition in a class.
    pub fn is_class_based(self) -> bool {
        matches!(self, Lang::Es6 | Lang::Esm | Lang::Ts)
    }
}

impl FromStr for Lang {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es5" | "plain" => Ok(Lang::Es5),
            "es6" => Ok(Lang::Es6),
            "esm" => Ok(Lang::Esm),
            "ts" => Ok(Lang::Ts),
            other => Err(ConfigError::UnknownLang(other.to_string())),
        }
    }
}
