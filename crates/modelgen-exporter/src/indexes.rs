use modelgen_core::IndexDef;

use crate::context::RenderContext;

/// Index kinds expressed with `type`; anything else is an access method and
/// goes to `using`.
const INDEX_KINDS: &[&str] = &["UNIQUE", "FULLTEXT", "SPATIAL"];

/// Render the `indexes: [...]` table option, or `None` when there are no
/// indexes.
pub fn render_indexes(ctx: &RenderContext<'_>, indexes: &[IndexDef]) -> Option<String> {
    if indexes.is_empty() {
        return None;
    }
    let (sp2, sp3, sp4, sp5) = (ctx.sp(2), ctx.sp(3), ctx.sp(4), ctx.sp(5));

    let mut lines = vec![format!("{sp2}indexes: [")];
    for index in indexes {
        lines.push(format!("{sp3}{{"));
        if let Some(name) = &index.name {
            lines.push(format!("{sp4}name: \"{}\",", name));
        }
        if index.unique {
            lines.push(format!("{sp4}unique: true,"));
        }
        if let Some(kind) = &index.r#type {
            if INDEX_KINDS.contains(&kind.as_str()) {
                lines.push(format!("{sp4}type: \"{}\",", kind));
            } else {
                lines.push(format!("{sp4}using: \"{}\",", kind));
            }
        }
        lines.push(format!("{sp4}fields: ["));
        for field in &index.fields {
            let mut parts = vec![format!("name: \"{}\"", field.attribute)];
            if let Some(collate) = &field.collate {
                parts.push(format!("collate: \"{}\"", collate));
            }
            if let Some(length) = field.length {
                parts.push(format!("length: {}", length));
            }
            if let Some(order) = field.order.as_deref().filter(|o| *o != "ASC") {
                parts.push(format!("order: \"{}\"", order));
            }
            lines.push(format!("{sp5}{{ {} }},", parts.join(", ")));
        }
        lines.push(format!("{sp4}]"));
        lines.push(format!("{sp3}}},"));
    }
    lines.push(format!("{sp2}]"));
    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelgen_config::GeneratorOptions;
    use modelgen_core::{Dialect, IndexField};

    #[test]
    fn test_render_indexes() {
        let options = GeneratorOptions::default();
        let ctx = RenderContext::new(&options, Dialect::Mysql);
        let indexes = vec![
            IndexDef {
                name: Some("PRIMARY".into()),
                unique: true,
                r#type: Some("BTREE".into()),
                fields: vec![IndexField::new("id")],
            },
            IndexDef {
                name: Some("ft_title".into()),
                unique: false,
                r#type: Some("FULLTEXT".into()),
                fields: vec![IndexField {
                    attribute: "title".into(),
                    collate: Some("A".into()),
                    length: Some(20),
                    order: Some("DESC".into()),
                }],
            },
        ];

        let rendered = render_indexes(&ctx, &indexes).expect("indexes");
        let expected = [
            "    indexes: [",
            "      {",
            "        name: \"PRIMARY\",",
            "        unique: true,",
            "        using: \"BTREE\",",
            "        fields: [",
            "          { name: \"id\" },",
            "        ]",
            "      },",
            "      {",
            "        name: \"ft_title\",",
            "        type: \"FULLTEXT\",",
            "        fields: [",
            "          { name: \"title\", collate: \"A\", length: 20, order: \"DESC\" },",
            "        ]",
            "      },",
            "    ]",
        ]
        .join("\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_indexes_empty() {
        let options = GeneratorOptions::default();
        let ctx = RenderContext::new(&options, Dialect::Mysql);
        assert_eq!(render_indexes(&ctx, &[]), None);
    }

    #[test]
    fn ascending_order_is_implicit() {
        let options = GeneratorOptions::default();
        let ctx = RenderContext::new(&options, Dialect::Postgres);
        let mut field = IndexField::new("email");
        field.order = Some("ASC".into());
        let index = IndexDef {
            name: None,
            unique: true,
            r#type: None,
            fields: vec![field],
        };
        let rendered = render_indexes(&ctx, &[index]).expect("indexes");
        assert!(rendered.contains("          { name: \"email\" },"));
        assert!(!rendered.contains("name: \"\""));
    }
}
