//! Render introspected tables into Sequelize model source: CommonJS
//! `define` factories, ES6 and ESM classes, and typed TypeScript classes.

pub mod associations;
pub mod context;
pub mod defaults;
pub mod fields;
pub mod generator;
pub mod indexes;
pub mod table;
pub mod templates;
pub mod types;
pub mod typescript;

/// Placeholder for the model name while a module is being assembled.
pub const TABLE_TOKEN: &str = "#TABLE#";

pub use associations::{Association, AssociationMixins, NeededImports, association_mixins};
pub use context::RenderContext;
pub use defaults::{DefaultExpr, escape_special, translate_default};
pub use generator::{ModelGenerator, generate_text};
pub use templates::{DialectTemplate, template_for};
pub use types::{ColumnType, map_column_type, map_language_type};
