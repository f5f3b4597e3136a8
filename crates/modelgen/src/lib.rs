// Re-export the generator entry points
#[doc(inline)]
pub use modelgen_exporter::{ModelGenerator, generate_text};

// Re-export other commonly used items
pub use modelgen_config::{AdditionalOptions, GeneratorOptions, Lang, NameCase, OptionValue};
pub use modelgen_core::{
    Dialect, FieldDef, ForeignKeyDef, IndexDef, IndexField, RelationDef, TableData, TableDef,
    TableName,
};

pub use modelgen_config as config;
pub use modelgen_core as core;
pub use modelgen_exporter as exporter;
pub use modelgen_naming as naming;
