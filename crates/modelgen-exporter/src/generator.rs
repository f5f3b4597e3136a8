use indexmap::IndexMap;
use modelgen_config::GeneratorOptions;
use modelgen_core::{Dialect, TableData, TableDef};
use modelgen_naming::escape_reserved;
use tracing::debug;

use crate::TABLE_TOKEN;
use crate::associations::association_mixins;
use crate::context::RenderContext;
use crate::table::render_table_body;
use crate::templates::template_for;
use crate::typescript::render_typed_section;

/// Renders every table of an introspected database into model source.
pub struct ModelGenerator<'a> {
    data: &'a TableData,
    ctx: RenderContext<'a>,
}

impl<'a> ModelGenerator<'a> {
    pub fn new(data: &'a TableData, dialect: Dialect, options: &'a GeneratorOptions) -> Self {
        Self {
            data,
            ctx: RenderContext::new(options, dialect),
        }
    }

    /// Model identifier of a table: recased, optionally singularized, and
    /// kept clear of reserved words.
    pub fn model_name(&self, table: &TableDef) -> String {
        let options = self.ctx.options;
        let name = options
            .case_model
            .recase(&table.name.name, options.singularize);
        escape_reserved(&name, options.lang().is_typescript())
    }

    /// Render the complete module text of one table.
    pub fn render_model(&self, table: &TableDef) -> String {
        let ctx = &self.ctx;
        let lang = ctx.options.lang();
        let template = template_for(lang);

        let mut text = template.header(ctx);
        if lang.is_typescript() {
            let mixins =
                association_mixins(&table.name.qualified(), &self.data.relations, &ctx.sp(1));
            text.push_str(&render_typed_section(ctx, table, &mixins));
        }
        text.push_str(&render_table_body(ctx, table));
        text.push_str(&template.footer(ctx));

        let model_name = self.model_name(table);
        debug!(table = %table.name, model = %model_name, "rendered model");
        text.replace(TABLE_TOKEN, &model_name)
    }

    /// Render all tables, keyed by qualified table name in input order.
    pub fn generate_text(&self) -> IndexMap<String, String> {
        self.data
            .tables
            .iter()
            .map(|table| (table.name.qualified(), self.render_model(table)))
            .collect()
    }
}

/// Render all tables of `data` with `options`.
pub fn generate_text(
    data: &TableData,
    dialect: Dialect,
    options: &GeneratorOptions,
) -> IndexMap<String, String> {
    ModelGenerator::new(data, dialect, options).generate_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use modelgen_config::{Lang, NameCase};
    use modelgen_core::{FieldDef, ForeignKeyDef, RelationDef};
    use rstest::rstest;

    fn shop() -> TableData {
        let customers = TableDef::new("customers")
            .with_field(FieldDef::new("id", "int(11)").primary_key().auto_increment())
            .with_field(FieldDef::new("full_name", "varchar(255)"))
            .with_field(FieldDef::new("created_at", "datetime").default_value("CURRENT_TIMESTAMP"));
        let orders = TableDef::new("orders")
            .with_field(FieldDef::new("id", "int(11)").primary_key().auto_increment())
            .with_field(FieldDef::new("customer_id", "int(11)"))
            .with_field(FieldDef::new("total", "decimal(10,2)").nullable())
            .with_foreign_key("customer_id", ForeignKeyDef::references("customers", "id"));
        TableData {
            tables: vec![customers, orders],
            relations: vec![RelationDef {
                parent_table: "customers".into(),
                parent_model: "Customer".into(),
                parent_prop: "customer".into(),
                parent_id: "customerId".into(),
                child_table: "orders".into(),
                child_model: "Order".into(),
                child_prop: "orders".into(),
                child_id: "orderId".into(),
                is_one: false,
                is_m2m: false,
            }],
        }
    }

    fn options(lang: Lang) -> GeneratorOptions {
        GeneratorOptions {
            lang,
            case_model: NameCase::Pascal,
            case_prop: NameCase::Camel,
            singularize: true,
            ..Default::default()
        }
    }

    #[test]
    fn keyed_by_table_in_input_order() {
        let data = shop();
        let text = generate_text(&data, Dialect::Mysql, &options(Lang::Es5));
        let keys: Vec<&str> = text.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["customers", "orders"]);
    }

    #[rstest]
    #[case(Lang::Es5)]
    #[case(Lang::Es6)]
    #[case(Lang::Esm)]
    #[case(Lang::Ts)]
    fn placeholder_is_always_substituted(#[case] lang: Lang) {
        let data = shop();
        for text in generate_text(&data, Dialect::Mysql, &options(lang)).values() {
            assert!(!text.contains(TABLE_TOKEN));
        }
    }

    #[test]
    fn reserved_model_names_are_escaped() {
        let data = TableData {
            tables: vec![TableDef::new("Date").with_field(FieldDef::new("id", "int"))],
            relations: vec![],
        };
        let ts = GeneratorOptions {
            lang: Lang::Ts,
            ..Default::default()
        };
        let generator = ModelGenerator::new(&data, Dialect::Sqlite, &ts);
        assert_eq!(generator.model_name(&data.tables[0]), "Date_");

        let es5 = GeneratorOptions::default();
        let generator = ModelGenerator::new(&data, Dialect::Sqlite, &es5);
        assert_eq!(generator.model_name(&data.tables[0]), "Date");
    }

    #[test]
    fn customers_es5() {
        let data = shop();
        let text = generate_text(&data, Dialect::Mysql, &options(Lang::Es5));
        assert_snapshot!("customers_es5", &text["customers"]);
    }

    #[test]
    fn orders_esm_with_define() {
        let data = shop();
        let options = GeneratorOptions {
            use_define: true,
            ..options(Lang::Esm)
        };
        let text = generate_text(&data, Dialect::Mysql, &options);
        assert_snapshot!("orders_esm_define", &text["orders"]);
    }

    #[test]
    fn orders_typescript() {
        let data = shop();
        let text = generate_text(&data, Dialect::Mysql, &options(Lang::Ts));
        assert_snapshot!("orders_ts", &text["orders"]);
    }

    #[test]
    fn customers_typescript_has_many() {
        let data = shop();
        let text = generate_text(&data, Dialect::Mysql, &options(Lang::Ts));
        let customers = &text["customers"];
        assert!(customers.starts_with(
            "import * as Sequelize from 'sequelize';\n\
             import { DataTypes, Model, Optional } from 'sequelize';\n\
             import type { Order, OrderId } from './order';\n"
        ));
        assert!(customers.contains("  // Customer hasMany Order via customerId\n"));
        assert!(customers.contains("  countOrders!: Sequelize.HasManyCountAssociationsMixin;\n"));
        assert!(!customers.contains("from './customer'"));
    }
}
