//! Association mixins declared on TypeScript model classes.
//!
//! Every relation touching a table is classified from that table's point of
//! view. The classification renders the accessor declarations and names the
//! types that must be imported from the other side's module.

use std::collections::{BTreeMap, BTreeSet};

use modelgen_core::RelationDef;
use modelgen_naming::{pluralize, qname_join, qname_split, singularize, upper_first};

/// Type names to import, by the qualified table they come from.
pub type NeededImports = BTreeMap<String, BTreeSet<String>>;

/// One relation as seen from the table being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Association<'a> {
    /// This table holds the foreign key.
    BelongsTo(&'a RelationDef),
    /// This table is referenced by a unique foreign key.
    HasOne(&'a RelationDef),
    /// This table is referenced by a non-unique foreign key.
    HasMany(&'a RelationDef),
    /// This table is the parent of a many-to-many through a junction table.
    BelongsToMany(&'a RelationDef),
}

impl<'a> Association<'a> {
    /// Classify `rel` for `table`; `None` when the relation does not
    /// contribute mixins to it.
    ///
    /// A self-referencing relation is seen from its child side only.
    pub fn classify(rel: &'a RelationDef, table: &str) -> Option<Self> {
        if rel.is_m2m {
            return (rel.parent_table == table).then_some(Association::BelongsToMany(rel));
        }
        if rel.child_table == table {
            Some(Association::BelongsTo(rel))
        } else if rel.parent_table == table {
            Some(if rel.is_one {
                Association::HasOne(rel)
            } else {
                Association::HasMany(rel)
            })
        } else {
            None
        }
    }

    /// Qualified table the associated model lives in.
    pub fn other_table(&self) -> &'a str {
        match self {
            Association::BelongsTo(rel) => &rel.parent_table,
            Association::HasOne(rel)
            | Association::HasMany(rel)
            | Association::BelongsToMany(rel) => &rel.child_table,
        }
    }

    /// Type names the declarations reference from the other table's module.
    pub fn imports(&self) -> Vec<String> {
        match self {
            Association::BelongsTo(rel) => {
                vec![rel.parent_model.clone(), format!("{}Id", rel.parent_model)]
            }
            Association::HasOne(rel) => vec![
                rel.child_model.clone(),
                format!("{}Id", rel.child_model),
                format!("{}CreationAttributes", rel.child_model),
            ],
            Association::HasMany(rel) | Association::BelongsToMany(rel) => {
                vec![rel.child_model.clone(), format!("{}Id", rel.child_model)]
            }
        }
    }

    /// Accessor declarations, each line prefixed with `sp`.
    pub fn render(&self, sp: &str) -> String {
        let lines = match self {
            Association::BelongsTo(rel) => {
                let model = &rel.parent_model;
                let prop = upper_first(&rel.parent_prop);
                vec![
                    format!(
                        "// {} belongsTo {} via {}",
                        rel.child_model, model, rel.parent_id
                    ),
                    format!("{}!: {};", rel.parent_prop, model),
                    format!("get{prop}!: Sequelize.BelongsToGetAssociationMixin<{model}>;"),
                    format!(
                        "set{prop}!: Sequelize.BelongsToSetAssociationMixin<{model}, {model}Id>;"
                    ),
                    format!(
                        "create{prop}!: Sequelize.BelongsToCreateAssociationMixin<{model}>;"
                    ),
                ]
            }
            Association::HasOne(rel) => {
                let model = &rel.child_model;
                let prop = upper_first(&rel.child_prop);
                vec![
                    format!(
                        "// {} hasOne {} via {}",
                        rel.parent_model, model, rel.parent_id
                    ),
                    format!("{}!: {};", rel.child_prop, model),
                    format!("get{prop}!: Sequelize.HasOneGetAssociationMixin<{model}>;"),
                    format!(
                        "set{prop}!: Sequelize.HasOneSetAssociationMixin<{model}, {model}Id>;"
                    ),
                    format!("create{prop}!: Sequelize.HasOneCreateAssociationMixin<{model}>;"),
                ]
            }
            Association::HasMany(rel) => {
                let mut lines = vec![format!(
                    "// {} hasMany {} via {}",
                    rel.parent_model, rel.child_model, rel.parent_id
                )];
                lines.extend(collection_mixins("HasMany", &rel.child_prop, &rel.child_model));
                lines
            }
            Association::BelongsToMany(rel) => {
                let mut lines = vec![format!(
                    "// {} belongsToMany {} via {} and {}",
                    rel.parent_model, rel.child_model, rel.parent_id, rel.child_id
                )];
                lines.extend(collection_mixins(
                    "BelongsToMany",
                    &rel.child_prop,
                    &rel.child_model,
                ));
                lines
            }
        };
        lines
            .iter()
            .map(|line| format!("{}{}\n", sp, line))
            .collect()
    }
}

/// Collection accessors shared by `hasMany` and `belongsToMany`.
fn collection_mixins(kind: &str, prop: &str, model: &str) -> Vec<String> {
    let sing = upper_first(&singularize(prop));
    let lur = pluralize(prop);
    let plur = upper_first(&lur);
    vec![
        format!("{lur}!: {model}[];"),
        format!("get{plur}!: Sequelize.{kind}GetAssociationsMixin<{model}>;"),
        format!("set{plur}!: Sequelize.{kind}SetAssociationsMixin<{model}, {model}Id>;"),
        format!("add{sing}!: Sequelize.{kind}AddAssociationMixin<{model}, {model}Id>;"),
        format!("add{plur}!: Sequelize.{kind}AddAssociationsMixin<{model}, {model}Id>;"),
        format!("create{sing}!: Sequelize.{kind}CreateAssociationMixin<{model}>;"),
        format!("remove{sing}!: Sequelize.{kind}RemoveAssociationMixin<{model}, {model}Id>;"),
        format!("remove{plur}!: Sequelize.{kind}RemoveAssociationsMixin<{model}, {model}Id>;"),
        format!("has{sing}!: Sequelize.{kind}HasAssociationMixin<{model}, {model}Id>;"),
        format!("has{plur}!: Sequelize.{kind}HasAssociationsMixin<{model}, {model}Id>;"),
        format!("count{plur}!: Sequelize.{kind}CountAssociationsMixin;"),
    ]
}

/// Rendered mixins of one table plus the imports they require.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociationMixins {
    pub text: String,
    pub needed: NeededImports,
}

impl AssociationMixins {
    fn with(mut self, assoc: Association<'_>, sp: &str) -> Self {
        self.text.push_str(&assoc.render(sp));
        self.needed
            .entry(assoc.other_table().to_string())
            .or_default()
            .extend(assoc.imports());
        self
    }
}

/// Qualify an unqualified `table` so it can be compared with relation
/// tables.
///
/// When no relation names the table as a child as written, the schema of
/// the first relation's child is assumed.
pub fn add_schema_for_relations(table: &str, relations: &[RelationDef]) -> String {
    if table.contains('.') || relations.iter().any(|rel| rel.child_table == table) {
        return table.to_string();
    }
    let schema = relations
        .iter()
        .find(|rel| !rel.child_table.is_empty())
        .and_then(|rel| qname_split(&rel.child_table).0);
    qname_join(schema, table)
}

/// Render the association mixins of `table` and collect what they import.
///
/// The table never imports from itself, even through a self-reference.
pub fn association_mixins(table: &str, relations: &[RelationDef], sp: &str) -> AssociationMixins {
    let table = add_schema_for_relations(table, relations);
    let mut mixins = relations
        .iter()
        .filter_map(|rel| Association::classify(rel, &table))
        .fold(AssociationMixins::default(), |acc, assoc| acc.with(assoc, sp));
    mixins.needed.remove(&table);
    mixins
}
