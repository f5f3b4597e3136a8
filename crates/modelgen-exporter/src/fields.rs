//! Per-column attribute blocks.

use modelgen_core::{AttrValue, Dialect, FieldDef, ForeignKeyDef, TableDef, UniqueSpec};
use modelgen_naming::quote_name;
use tracing::warn;

use crate::context::RenderContext;
use crate::defaults::{escape_special, translate_default};
use crate::types::{ColumnType, map_column_type};

/// Passthrough keys already expressed through the key descriptor.
const HANDLED_EXTRA: &[&str] = &["references", "foreignKey"];

fn column_type(field: &FieldDef) -> ColumnType<'_> {
    ColumnType::new(&field.r#type)
        .with_element_type(field.element_type.as_deref())
        .with_special(&field.special)
}

/// `type:` value for a column; unmapped types are kept as their raw string.
fn type_expr(table: &TableDef, field: &FieldDef) -> String {
    map_column_type(column_type(field)).unwrap_or_else(|| {
        warn!(
            table = %table.name,
            field = %field.name,
            field_type = %field.r#type,
            "unmapped column type, emitting raw type string"
        );
        format!("\"{}\"", escape_special(&field.r#type))
    })
}

fn unique_expr(field: &FieldDef, fk: Option<&ForeignKeyDef>) -> Option<String> {
    match &field.unique {
        Some(UniqueSpec::Name(name)) if !name.is_empty() => {
            Some(format!("\"{}\"", name.replace('"', "\\\"")))
        }
        Some(UniqueSpec::Flag(true)) => Some("true".into()),
        _ => fk.is_some_and(|fk| fk.is_unique).then(|| "true".into()),
    }
}

/// Render the attribute block of one column, or `None` when the column is
/// omitted from the model.
pub fn render_field(ctx: &RenderContext<'_>, table: &TableDef, field: &FieldDef) -> Option<String> {
    if ctx.is_omitted(&field.name) {
        return None;
    }
    let fk = table.foreign_key(&field.name);
    let is_serial_key = fk.is_some_and(|fk| fk.is_serial_key) || ctx.dialect.is_serial_key(field);
    let prop = ctx.prop_name(&field.name);
    let sp3 = ctx.sp(3);

    let mut attrs: Vec<String> = Vec::new();
    if is_serial_key || field.auto_increment {
        attrs.push("autoIncrement: true".into());
        if ctx.dialect == Dialect::Postgres && fk.is_some_and(ForeignKeyDef::is_identity) {
            attrs.push("autoIncrementIdentity: true".into());
        }
    }
    attrs.push(format!("type: {}", type_expr(table, field)));
    attrs.push(format!("allowNull: {}", field.allow_null));

    let default = translate_default(
        field.default_value.as_ref(),
        &field.r#type,
        field.element_type.as_deref(),
        ctx.dialect,
        is_serial_key,
    );
    if let Some(default) = default {
        attrs.push(format!("defaultValue: {}", default));
    }

    // a descriptor that disowns the primary key wins over the column flag
    if field.primary_key && fk.is_none_or(|fk| fk.is_primary_key) {
        attrs.push("primaryKey: true".into());
    }

    if let Some(fk) = fk.filter(|fk| fk.is_foreign_key) {
        if let (Some(target_table), Some(target_column)) = (&fk.target_table, &fk.target_column) {
            let sp4 = ctx.sp(4);
            attrs.push(format!(
                "references: {{\n{sp4}model: '{target_table}',\n{sp4}key: '{target_column}'\n{sp3}}}"
            ));
        }
    }

    if ctx.dialect != Dialect::Mssql {
        if let Some(comment) = field.comment.as_deref().filter(|c| !c.is_empty()) {
            attrs.push(format!("comment: \"{}\"", escape_special(comment)));
        }
    }

    for (key, value) in &field.extra {
        if HANDLED_EXTRA.contains(&key.as_str()) || value.is_null() {
            continue;
        }
        let value = match value {
            AttrValue::Str(s) => format!("\"{}\"", escape_special(s)),
            other => other.to_string(),
        };
        attrs.push(format!("{}: {}", key, value));
    }

    if let Some(unique) = unique_expr(field, fk) {
        attrs.push(format!("unique: {}", unique));
    }

    if prop != field.name {
        attrs.push(format!("field: '{}'", field.name));
    }

    let sp2 = ctx.sp(2);
    let body = attrs
        .iter()
        .map(|attr| format!("{sp3}{attr}"))
        .collect::<Vec<_>>()
        .join(",\n");
    Some(format!("{sp2}{}: {{\n{body}\n{sp2}}}", quote_name(&prop)))
}
