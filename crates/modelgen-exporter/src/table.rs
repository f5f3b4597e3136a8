use modelgen_config::OptionValue;
use modelgen_core::TableDef;

use crate::TABLE_TOKEN;
use crate::context::RenderContext;
use crate::fields::render_field;
use crate::indexes::render_indexes;

/// Table-level `timestamps` and `paranoid` flags.
///
/// An explicit `true` in the additional options turns a flag on; so does any
/// column, omitted or not, that looks like a managed column.
fn model_flags(ctx: &RenderContext<'_>, table: &TableDef) -> (bool, bool) {
    let options = ctx.options;
    let additional = options.additional();
    let timestamps = additional.timestamps() == Some(true)
        || table.columns().any(|f| options.is_timestamp_field(&f.name));
    let paranoid = additional.paranoid() == Some(true)
        || table.columns().any(|f| options.is_paranoid_field(&f.name));
    (timestamps, paranoid)
}

fn option_literal(value: &OptionValue) -> String {
    match value {
        OptionValue::Str(s) => format!("'{}'", s.replace('\'', "\\'")),
        other => other.to_string(),
    }
}

fn table_options(ctx: &RenderContext<'_>, table: &TableDef) -> Vec<String> {
    let options = ctx.options;
    let (sp2, sp3) = (ctx.sp(2), ctx.sp(3));
    let (timestamps, paranoid) = model_flags(ctx, table);

    let mut entries = Vec::new();
    if !options.use_define {
        entries.push(format!("{sp2}sequelize"));
    }
    entries.push(format!("{sp2}tableName: '{}'", table.name.name));
    if let Some(schema) = table.name.schema.as_deref().filter(|_| ctx.dialect.has_schema()) {
        entries.push(format!("{sp2}schema: '{}'", schema));
    }
    entries.push(format!("{sp2}modelName: '{TABLE_TOKEN}'"));
    if table.has_trigger {
        entries.push(format!("{sp2}hasTrigger: true"));
    }
    entries.push(format!("{sp2}timestamps: {}", timestamps));
    if paranoid {
        entries.push(format!("{sp2}paranoid: true"));
    }

    for (key, value) in options.additional().iter() {
        match key.as_str() {
            "timestamps" | "paranoid" => {}
            "name" => {
                if options.additional().name() {
                    let qualified = table.name.qualified();
                    entries.push(format!(
                        "{sp2}name: {{\n{sp3}singular: '{qualified}',\n{sp3}plural: '{qualified}'\n{sp2}}}"
                    ));
                }
            }
            _ => entries.push(format!("{sp2}{}: {}", key, option_literal(value))),
        }
    }

    if !options.no_indexes {
        entries.extend(render_indexes(ctx, &table.indexes));
    }
    entries
}

/// Render the attribute object and the options object of a model
/// definition, from the first attribute up to the closing brace of the
/// options.
///
/// Model names in the output are left as the table placeholder.
pub fn render_table_body(ctx: &RenderContext<'_>, table: &TableDef) -> String {
    let sp1 = ctx.sp(1);
    let fields: Vec<String> = table
        .columns()
        .filter_map(|field| render_field(ctx, table, field))
        .collect();

    let mut body = String::new();
    if !fields.is_empty() {
        body.push_str(&fields.join(",\n"));
        body.push('\n');
    }
    body.push_str(&format!("{sp1}}}, {{\n"));
    body.push_str(&table_options(ctx, table).join(",\n"));
    body.push_str(&format!("\n{sp1}}}"));
    body
}
