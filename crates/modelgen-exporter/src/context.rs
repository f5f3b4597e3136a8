use modelgen_config::{GeneratorOptions, Indent};
use modelgen_core::Dialect;

/// Options and dialect shared by every renderer of one generation run.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub options: &'a GeneratorOptions,
    pub dialect: Dialect,
    indent: Indent,
}

impl<'a> RenderContext<'a> {
    pub fn new(options: &'a GeneratorOptions, dialect: Dialect) -> Self {
        Self {
            options,
            dialect,
            indent: options.indent(),
        }
    }

    /// Indentation for nesting depth `depth`.
    pub fn sp(&self, depth: usize) -> String {
        self.indent.level(depth)
    }

    /// Property name of a column in generated code.
    pub fn prop_name(&self, column: &str) -> String {
        self.options.case_prop.recase(column, false)
    }

    /// Whether a column is left out of the model attributes.
    ///
    /// ORM-managed timestamp and soft-delete columns are dropped unless
    /// timestamps were explicitly disabled.
    pub fn is_omitted(&self, column: &str) -> bool {
        let options = self.options;
        let managed = options.additional().timestamps() != Some(false)
            && (options.is_timestamp_field(column) || options.is_paranoid_field(column));
        managed || options.is_ignored_field(column)
    }
}
