//! Column type mapping.
//!
//! Raw type strings are lower-cased and matched against an ordered table of
//! rules; the first rule whose pattern matches decides the result, even when
//! it cannot produce a type (an array without an element type).

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// Type information of one column, borrowed from its field definition.
#[derive(Debug, Clone, Copy)]
pub struct ColumnType<'a> {
    pub raw: &'a str,
    pub element_type: Option<&'a str>,
    pub special: &'a [String],
}

impl<'a> ColumnType<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            element_type: None,
            special: &[],
        }
    }

    pub fn with_element_type(mut self, element_type: Option<&'a str>) -> Self {
        self.element_type = element_type;
        self
    }

    pub fn with_special(mut self, special: &'a [String]) -> Self {
        self.special = special;
        self
    }
}

struct Matched<'a> {
    column: ColumnType<'a>,
    lowered: &'a str,
}

impl Matched<'_> {
    /// `(n)` suffix captured from the type, or empty.
    fn length(&self) -> &str {
        LENGTH.find(self.lowered).map_or("", |m| m.as_str())
    }

    /// `(p,s)` suffix captured from the type, or empty.
    fn precision(&self) -> &str {
        PRECISION.find(self.lowered).map_or("", |m| m.as_str())
    }

    fn sub_type(&self) -> String {
        self.column
            .element_type
            .map(|t| format!("({})", t))
            .unwrap_or_default()
    }
}

struct TypeRule {
    pattern: Regex,
    render: fn(&Matched<'_>) -> Option<String>,
}

fn rule(pattern: &str, render: fn(&Matched<'_>) -> Option<String>) -> TypeRule {
    TypeRule {
        pattern: Regex::new(pattern).expect("type rule patterns are static"),
        render,
    }
}

fn fixed(name: &str) -> Option<String> {
    Some(format!("DataTypes.{}", name))
}

static LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d+\)").expect("static pattern"));
static PRECISION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d+,\d+\)").expect("static pattern"));

static RULES: LazyLock<Vec<TypeRule>> = LazyLock::new(|| {
    vec![
        rule(r"^(boolean|bit\(1\)|bit|tinyint\(1\))$", |_| fixed("BOOLEAN")),
        // postgres range types
        rule(r"^numrange$", |_| fixed("RANGE(DataTypes.DECIMAL)")),
        rule(r"^int4range$", |_| fixed("RANGE(DataTypes.INTEGER)")),
        rule(r"^int8range$", |_| fixed("RANGE(DataTypes.BIGINT)")),
        rule(r"^daterange$", |_| fixed("RANGE(DataTypes.DATEONLY)")),
        rule(r"^(tsrange|tstzrange)$", |_| fixed("RANGE(DataTypes.DATE)")),
        rule(r"^(bigint|smallint|mediumint|tinyint|int)", render_integer),
        rule(r"^n?varchar\(max\)$", |_| fixed("TEXT")),
        rule(r"n?varchar|string|varying", |m| {
            Some(format!("DataTypes.STRING{}", m.length()))
        }),
        rule(r"^n?char", |m| Some(format!("DataTypes.CHAR{}", m.length()))),
        rule(r"^real", |_| fixed("REAL")),
        rule(r"text$", |m| Some(format!("DataTypes.TEXT{}", m.length()))),
        rule(r"^date$", |_| fixed("DATEONLY")),
        rule(r"^(date|timestamp|year)", |m| {
            Some(format!("DataTypes.DATE{}", m.length()))
        }),
        rule(r"^time", |_| fixed("TIME")),
        rule(r"^(float|float4)", |m| {
            Some(format!("DataTypes.FLOAT{}", m.precision()))
        }),
        rule(r"^(decimal|numeric)", |m| {
            Some(format!("DataTypes.DECIMAL{}", m.precision()))
        }),
        rule(r"^money", |_| fixed("DECIMAL(19,4)")),
        rule(r"^smallmoney", |_| fixed("DECIMAL(10,4)")),
        rule(r"^(float8|double)", |m| {
            Some(format!("DataTypes.DOUBLE{}", m.precision()))
        }),
        rule(r"^uuid|uniqueidentifier", |_| fixed("UUID")),
        rule(r"^jsonb", |_| fixed("JSONB")),
        rule(r"^json", |_| fixed("JSON")),
        rule(r"^geometry", |m| {
            Some(format!("DataTypes.GEOMETRY{}", m.sub_type()))
        }),
        rule(r"^geography", |m| {
            Some(format!("DataTypes.GEOGRAPHY{}", m.sub_type()))
        }),
        rule(r"^array", |m| {
            let element = m.column.element_type?;
            let element = ColumnType::new(element).with_special(m.column.special);
            let inner = map_column_type(element)?;
            Some(format!("DataTypes.ARRAY({})", inner))
        }),
        rule(r"binary|image|blob|bytea", |_| fixed("BLOB")),
        rule(r"^hstore", |_| fixed("HSTORE")),
        rule(r"^inet", |_| fixed("INET")),
        rule(r"^cidr", |_| fixed("CIDR")),
        rule(r"^oid", |_| fixed("INTEGER")),
        rule(r"^macaddr", |_| fixed("MACADDR")),
        rule(r"^enum(\(.*\))?$", |m| {
            let values = enum_values(&m.column);
            Some(format!("DataTypes.ENUM({})", values.join(",")))
        }),
    ]
});

fn render_integer(m: &Matched<'_>) -> Option<String> {
    let base = if m.lowered.starts_with("bigint") {
        "BIGINT"
    } else if m.lowered.starts_with("smallint") {
        "SMALLINT"
    } else if m.lowered.starts_with("mediumint") {
        "MEDIUMINT"
    } else if m.lowered.starts_with("tinyint") {
        "TINYINT"
    } else {
        "INTEGER"
    };
    let mut out = format!("DataTypes.{}", base);
    if m.lowered.contains("unsigned") {
        out.push_str(".UNSIGNED");
    }
    if m.lowered.contains("zerofill") {
        out.push_str(".ZEROFILL");
    }
    Some(out)
}

/// Map a raw column type to a `DataTypes` expression.
///
/// Returns `None` for types no rule recognises; callers decide how to
/// substitute.
pub fn map_column_type(column: ColumnType<'_>) -> Option<String> {
    let lowered = column.raw.to_lowercase();
    let rule = RULES.iter().find(|r| r.pattern.is_match(&lowered))?;
    (rule.render)(&Matched {
        column,
        lowered: &lowered,
    })
}

/// Enum labels of a column, quoted for use in generated code.
///
/// Labels reported separately (postgres) are double-quoted; otherwise they
/// are read from an `enum('a','b')` type string as written.
pub fn enum_values(column: &ColumnType<'_>) -> Vec<String> {
    if !column.special.is_empty() {
        return column
            .special
            .iter()
            .map(|v| format!("\"{}\"", v.replace('"', "\\\"")))
            .collect();
    }
    let raw = column.raw;
    let is_enum_list = raw
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("enum("));
    if is_enum_list && raw.len() > 6 && raw.ends_with(')') {
        raw[5..raw.len() - 1]
            .split(',')
            .map(str::to_string)
            .collect()
    } else {
        Vec::new()
    }
}

// ============================================================================
// Type Families
// ============================================================================

fn starts_with_any(field_type: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| field_type.starts_with(p))
}

pub fn is_number(field_type: &str) -> bool {
    starts_with_any(
        field_type,
        &[
            "smallint", "mediumint", "tinyint", "int", "bigint", "float", "money", "smallmoney",
            "double", "decimal", "numeric", "real", "oid",
        ],
    )
}

pub fn is_boolean(field_type: &str) -> bool {
    starts_with_any(field_type, &["boolean", "bit"])
}

pub fn is_date(field_type: &str) -> bool {
    starts_with_any(field_type, &["datetime", "timestamp"])
}

pub fn is_string(field_type: &str) -> bool {
    starts_with_any(
        field_type,
        &[
            "char", "nchar", "string", "varying", "varchar", "nvarchar", "text", "longtext",
            "mediumtext", "tinytext", "ntext", "uuid", "uniqueidentifier", "date", "time", "inet",
            "cidr", "macaddr",
        ],
    )
}

pub fn is_array(field_type: &str) -> bool {
    field_type.starts_with("array") || field_type.ends_with("range")
}

pub fn is_enum(field_type: &str) -> bool {
    field_type.starts_with("enum")
}

pub fn is_json(field_type: &str) -> bool {
    field_type.starts_with("json")
}

/// Map a raw column type to a TypeScript type name.
///
/// Unknown types fall back to `any` with a warning.
pub fn map_language_type(column: ColumnType<'_>) -> String {
    let field_type = column.raw.to_lowercase();
    if is_array(&field_type) {
        let element = ColumnType::new(column.element_type.unwrap_or_default())
            .with_special(column.special);
        format!("{}[]", map_language_type(element))
    } else if is_number(&field_type) {
        "number".into()
    } else if is_boolean(&field_type) {
        "boolean".into()
    } else if is_date(&field_type) {
        "Date".into()
    } else if is_string(&field_type) {
        "string".into()
    } else if is_enum(&field_type) {
        let values = enum_values(&column);
        if values.is_empty() {
            warn!(field_type = %field_type, "enum without values, using any");
            "any".into()
        } else {
            values.join(" | ")
        }
    } else if is_json(&field_type) {
        "object".into()
    } else {
        warn!(field_type = %field_type, "missing TypeScript type, using any");
        "any".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("boolean", "DataTypes.BOOLEAN")]
    #[case("BIT(1)", "DataTypes.BOOLEAN")]
    #[case("tinyint(1)", "DataTypes.BOOLEAN")]
    #[case("int4range", "DataTypes.RANGE(DataTypes.INTEGER)")]
    #[case("tstzrange", "DataTypes.RANGE(DataTypes.DATE)")]
    #[case("int", "DataTypes.INTEGER")]
    #[case("integer", "DataTypes.INTEGER")]
    #[case("bigint(20) unsigned", "DataTypes.BIGINT.UNSIGNED")]
    #[case("int(10) unsigned zerofill", "DataTypes.INTEGER.UNSIGNED.ZEROFILL")]
    #[case("tinyint(4)", "DataTypes.TINYINT")]
    #[case("nvarchar(max)", "DataTypes.TEXT")]
    #[case("varchar(255)", "DataTypes.STRING(255)")]
    #[case("character varying", "DataTypes.STRING")]
    #[case("char(2)", "DataTypes.CHAR(2)")]
    #[case("real", "DataTypes.REAL")]
    #[case("mediumtext", "DataTypes.TEXT")]
    #[case("date", "DataTypes.DATEONLY")]
    #[case("datetime(6)", "DataTypes.DATE(6)")]
    #[case("timestamp with time zone", "DataTypes.DATE")]
    #[case("year", "DataTypes.DATE")]
    #[case("time without time zone", "DataTypes.TIME")]
    #[case("float(8,2)", "DataTypes.FLOAT(8,2)")]
    #[case("decimal(10,2)", "DataTypes.DECIMAL(10,2)")]
    #[case("numeric", "DataTypes.DECIMAL")]
    #[case("money", "DataTypes.DECIMAL(19,4)")]
    #[case("smallmoney", "DataTypes.DECIMAL(10,4)")]
    #[case("double precision", "DataTypes.DOUBLE")]
    #[case("uuid", "DataTypes.UUID")]
    #[case("uniqueidentifier", "DataTypes.UUID")]
    #[case("jsonb", "DataTypes.JSONB")]
    #[case("json", "DataTypes.JSON")]
    #[case("varbinary(16)", "DataTypes.BLOB")]
    #[case("bytea", "DataTypes.BLOB")]
    #[case("hstore", "DataTypes.HSTORE")]
    #[case("inet", "DataTypes.INET")]
    #[case("cidr", "DataTypes.CIDR")]
    #[case("oid", "DataTypes.INTEGER")]
    #[case("macaddr", "DataTypes.MACADDR")]
    fn maps_scalar_types(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(map_column_type(ColumnType::new(raw)).as_deref(), Some(expected));
    }

    #[test]
    fn unknown_type_is_none() {
        assert_eq!(map_column_type(ColumnType::new("tsvector")), None);
        assert_eq!(map_column_type(ColumnType::new("")), None);
    }

    #[test]
    fn spatial_types_carry_sub_type() {
        let point = ColumnType::new("geometry").with_element_type(Some("POINT"));
        assert_eq!(
            map_column_type(point).as_deref(),
            Some("DataTypes.GEOMETRY(POINT)")
        );
        assert_eq!(
            map_column_type(ColumnType::new("geography")).as_deref(),
            Some("DataTypes.GEOGRAPHY")
        );
    }

    #[test]
    fn arrays_recurse_on_element_type() {
        let tags = ColumnType::new("ARRAY").with_element_type(Some("varchar(40)"));
        assert_eq!(
            map_column_type(tags).as_deref(),
            Some("DataTypes.ARRAY(DataTypes.STRING(40))")
        );

        // the array rule claims the type even without an element type
        assert_eq!(map_column_type(ColumnType::new("ARRAY")), None);
    }

    #[rstest]
    #[case("integer", &[], "DataTypes.ARRAY(DataTypes.INTEGER)")]
    #[case("enum", &["sad", "ok"], r#"DataTypes.ARRAY(DataTypes.ENUM("sad","ok"))"#)]
    fn array_elements_keep_enum_labels(
        #[case] element: &str,
        #[case] labels: &[&str],
        #[case] expected: &str,
    ) {
        let special: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
        let column = ColumnType::new("ARRAY")
            .with_element_type(Some(element))
            .with_special(&special);
        assert_eq!(map_column_type(column).as_deref(), Some(expected));
    }

    #[test]
    fn enum_values_from_special_or_type_string() {
        let special = vec!["draft".to_string(), "published".to_string()];
        let pg = ColumnType::new("ENUM").with_special(&special);
        assert_eq!(
            map_column_type(pg).as_deref(),
            Some(r#"DataTypes.ENUM("draft","published")"#)
        );

        let mysql = ColumnType::new("enum('S','M','L')");
        assert_eq!(
            map_column_type(mysql).as_deref(),
            Some("DataTypes.ENUM('S','M','L')")
        );
    }

    #[test]
    fn mapping_is_deterministic() {
        for raw in ["varchar(12)", "decimal(4,1)", "enum('a')", "blob", "unknown"] {
            assert_eq!(
                map_column_type(ColumnType::new(raw)),
                map_column_type(ColumnType::new(raw))
            );
        }
    }

    #[rstest]
    #[case("integer", "number")]
    #[case("decimal(10,2)", "number")]
    #[case("boolean", "boolean")]
    #[case("timestamp with time zone", "Date")]
    #[case("datetime", "Date")]
    #[case("date", "string")]
    #[case("varchar(255)", "string")]
    #[case("uuid", "string")]
    #[case("jsonb", "object")]
    #[case("tsvector", "any")]
    fn maps_language_types(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(map_language_type(ColumnType::new(raw)), expected);
    }

    #[test]
    fn language_type_of_arrays_and_enums() {
        let ints = ColumnType::new("ARRAY").with_element_type(Some("integer"));
        assert_eq!(map_language_type(ints), "number[]");

        assert_eq!(map_language_type(ColumnType::new("int4range")), "any[]");

        let special = vec!["a".to_string(), "b".to_string()];
        let pg = ColumnType::new("ENUM").with_special(&special);
        assert_eq!(map_language_type(pg), r#""a" | "b""#);
        assert_eq!(map_language_type(ColumnType::new("enum('x','y')")), "'x' | 'y'");
    }
}
