//! Module scaffolding around a model definition, one template per output
//! language.

use modelgen_config::Lang;

use crate::context::RenderContext;

/// Header and footer of a generated model module.
///
/// Both may contain the table placeholder, which is substituted after the
/// whole text has been assembled.
pub trait DialectTemplate {
    /// Text preceding the model definition (TypeScript adds its typed
    /// declarations after this).
    fn header(&self, ctx: &RenderContext<'_>) -> String;

    /// Text following the options object of the definition.
    fn footer(&self, ctx: &RenderContext<'_>) -> String;
}

/// CommonJS module exporting a `sequelize.define` factory.
pub struct PlainTemplate;

/// CommonJS module exporting an ES6 model class.
pub struct Es6Template;

/// ES module exporting a model class by default.
pub struct EsmTemplate;

/// TypeScript module with typed attributes.
pub struct TypeScriptTemplate;

/// Opening call of the definition inside `static init`.
fn init_opener(ctx: &RenderContext<'_>) -> String {
    let sp = ctx.sp(1);
    if ctx.options.use_define {
        format!("{sp}return sequelize.define('#TABLE#', {{\n")
    } else {
        format!("{sp}return super.init({{\n")
    }
}

fn class_footer(ctx: &RenderContext<'_>) -> String {
    format!("{}}}\n}}\n", ctx.sp(1))
}

impl DialectTemplate for PlainTemplate {
    fn header(&self, ctx: &RenderContext<'_>) -> String {
        let sp = ctx.sp(1);
        format!(
            "const Sequelize = require('sequelize');\n\
             module.exports = function(sequelize, DataTypes) {{\n\
             {sp}return sequelize.define('#TABLE#', {{\n"
        )
    }

    fn footer(&self, _ctx: &RenderContext<'_>) -> String {
        ");\n};\n".into()
    }
}

impl DialectTemplate for Es6Template {
    fn header(&self, ctx: &RenderContext<'_>) -> String {
        let sp = ctx.sp(1);
        format!(
            "const Sequelize = require('sequelize');\n\
             module.exports = (sequelize, DataTypes) => {{\n\
             {sp}return #TABLE#.init(sequelize, DataTypes);\n\
             }}\n\
             \n\
             class #TABLE# extends Sequelize.Model {{\n\
             {sp}static init(sequelize, DataTypes) {{\n\
             {opener}",
            opener = init_opener(ctx)
        )
    }

    fn footer(&self, ctx: &RenderContext<'_>) -> String {
        format!(");\n{}", class_footer(ctx))
    }
}

impl DialectTemplate for EsmTemplate {
    fn header(&self, ctx: &RenderContext<'_>) -> String {
        let sp = ctx.sp(1);
        format!(
            "import _sequelize from 'sequelize';\n\
             const {{ Model, Sequelize }} = _sequelize;\n\
             \n\
             export default class #TABLE# extends Model {{\n\
             {sp}static init(sequelize, DataTypes) {{\n\
             {opener}",
            opener = init_opener(ctx)
        )
    }

    fn footer(&self, ctx: &RenderContext<'_>) -> String {
        format!(");\n{}", class_footer(ctx))
    }
}

impl DialectTemplate for TypeScriptTemplate {
    fn header(&self, _ctx: &RenderContext<'_>) -> String {
        "import * as Sequelize from 'sequelize';\n\
         import { DataTypes, Model, Optional } from 'sequelize';\n"
            .into()
    }

    fn footer(&self, ctx: &RenderContext<'_>) -> String {
        let close = if ctx.options.use_define {
            ") as typeof #TABLE#;\n"
        } else {
            ");\n"
        };
        format!("{close}{}", class_footer(ctx))
    }
}

/// Template for an output language.
pub fn template_for(lang: Lang) -> &'static dyn DialectTemplate {
    match lang {
        Lang::Es5 => &PlainTemplate,
        Lang::Es6 => &Es6Template,
        Lang::Esm => &EsmTemplate,
        Lang::Ts => &TypeScriptTemplate,
    }
}
