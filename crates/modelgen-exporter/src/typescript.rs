//! Typed declarations preceding a TypeScript model definition.

use modelgen_core::{FieldDef, TableDef};
use modelgen_naming::{qname_split, quote_name};

use crate::associations::AssociationMixins;
use crate::context::RenderContext;
use crate::types::{ColumnType, map_language_type};

fn attribute_lines(ctx: &RenderContext<'_>, table: &TableDef, is_interface: bool) -> String {
    let sp = ctx.sp(1);
    let not_null = if is_interface { "" } else { "!" };
    table
        .columns()
        .filter(|field| !ctx.options.is_ignored_field(&field.name))
        .map(|field| {
            let name = quote_name(&ctx.prop_name(&field.name));
            let marker = if field.allow_null { "?" } else { not_null };
            let column = ColumnType::new(&field.r#type)
                .with_element_type(field.element_type.as_deref())
                .with_special(&field.special);
            format!("{sp}{name}{marker}: {};\n", map_language_type(column))
        })
        .collect()
}

/// Whether a column may be left out when creating a row.
fn is_creation_optional(ctx: &RenderContext<'_>, field: &FieldDef) -> bool {
    field.allow_null
        || field.default_value.is_some()
        || field.auto_increment
        || ctx.options.is_timestamp_field(&field.name)
}

fn literal_union<'a>(ctx: &RenderContext<'_>, fields: impl Iterator<Item = &'a FieldDef>) -> String {
    fields
        .map(|field| format!("\"{}\"", ctx.prop_name(&field.name)))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn import_lines(ctx: &RenderContext<'_>, mixins: &AssociationMixins) -> String {
    let options = ctx.options;
    mixins
        .needed
        .iter()
        .map(|(fk_table, names)| {
            let (_, table_name) = qname_split(fk_table);
            let file = options.case_file.recase(table_name, options.singularize);
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            format!("import type {{ {} }} from './{}';\n", names.join(", "), file)
        })
        .collect()
}

/// Render everything between the module imports and the attribute object:
/// association imports, attribute interface, key and creation types, the
/// class with its declared attributes and association mixins, and the
/// opening of `initModel`.
pub fn render_typed_section(
    ctx: &RenderContext<'_>,
    table: &TableDef,
    mixins: &AssociationMixins,
) -> String {
    let mut out = import_lines(ctx, mixins);

    out.push_str("\nexport interface #TABLE#Attributes {\n");
    out.push_str(&attribute_lines(ctx, table, true));
    out.push_str("}\n\n");

    if table.primary_keys().next().is_some() {
        out.push_str(&format!(
            "export type #TABLE#Pk = {};\n",
            literal_union(ctx, table.primary_keys())
        ));
        out.push_str("export type #TABLE#Id = #TABLE#[#TABLE#Pk];\n");
    }

    let optional: Vec<&FieldDef> = table
        .columns()
        .filter(|field| is_creation_optional(ctx, field))
        .collect();
    if optional.is_empty() {
        out.push_str("export type #TABLE#CreationAttributes = #TABLE#Attributes;\n\n");
    } else {
        out.push_str(&format!(
            "export type #TABLE#OptionalAttributes = {};\n",
            literal_union(ctx, optional.into_iter())
        ));
        out.push_str(
            "export type #TABLE#CreationAttributes = \
             Optional<#TABLE#Attributes, #TABLE#OptionalAttributes>;\n\n",
        );
    }

    out.push_str(
        "export class #TABLE# extends Model<#TABLE#Attributes, #TABLE#CreationAttributes> \
         implements #TABLE#Attributes {\n",
    );
    out.push_str(&attribute_lines(ctx, table, false));
    out.push('\n');
    out.push_str(&mixins.text);

    let (sp1, sp2) = (ctx.sp(1), ctx.sp(2));
    out.push_str(&format!(
        "\n{sp1}static initModel(sequelize: Sequelize.Sequelize): typeof #TABLE# {{\n"
    ));
    if ctx.options.use_define {
        out.push_str(&format!("{sp2}return sequelize.define('#TABLE#', {{\n"));
    } else {
        out.push_str(&format!("{sp2}return #TABLE#.init({{\n"));
    }
    out
}
