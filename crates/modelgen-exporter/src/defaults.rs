//! Column default translation.

use std::fmt;
use std::sync::LazyLock;

use modelgen_core::{AttrValue, Dialect};
use regex::Regex;

use crate::types::{is_array, is_number, is_string};

static TRUTHY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)1|true").expect("static pattern"));
static FN_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+\(\)$").expect("static pattern"));

/// Keywords a date column may default to that must stay unquoted.
const CURRENT_TIME_KEYWORDS: &[&str] = &[
    "current_timestamp",
    "current_date",
    "current_time",
    "localtime",
    "localtimestamp",
];

/// A translated default, rendered as source text with `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultExpr {
    /// Emitted as-is (numbers, JSON, non-string introspected values).
    Raw(String),
    Boolean(bool),
    /// Comma separated elements, already quoted when needed.
    Array(String),
    UuidV4,
    /// Database function called without arguments (`now()`).
    Fn(String),
    /// Raw SQL expression.
    Literal(String),
    /// Plain string value.
    Quoted(String),
}

impl fmt::Display for DefaultExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultExpr::Raw(value) => f.write_str(value),
            DefaultExpr::Boolean(value) => write!(f, "{}", value),
            DefaultExpr::Array(items) => write!(f, "[{}]", items),
            DefaultExpr::UuidV4 => f.write_str("DataTypes.UUIDV4"),
            DefaultExpr::Fn(name) => {
                write!(f, "Sequelize.Sequelize.fn('{}')", name.replace('\'', "\\'"))
            }
            DefaultExpr::Literal(expr) => {
                write!(f, "Sequelize.Sequelize.literal('{}')", expr.replace('\'', "\\'"))
            }
            DefaultExpr::Quoted(value) => write!(f, "\"{}\"", value),
        }
    }
}

/// Escape a string for a double-quoted JavaScript literal.
///
/// # Examples
/// ```
/// use modelgen_exporter::escape_special;
///
/// assert_eq!(escape_special("a\"b\n"), "a\\\"b\\n");
/// assert_eq!(escape_special("/api/v1"), "\\/api\\/v1");
/// ```
pub fn escape_special(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '/' => out.push_str("\\/"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Whether the dialect reports this raw default as "no default".
fn is_sentinel(raw: &AttrValue, dialect: Dialect) -> bool {
    match (dialect, raw) {
        (Dialect::Mssql, AttrValue::Str(s)) => {
            s.eq_ignore_ascii_case("(newid())") || s == "(NULL)" || s == "NULL"
        }
        _ => false,
    }
}

/// Strip redundant wrapping parentheses: `((0))` -> `0`.
fn strip_parens(mut value: &str) -> &str {
    while value.len() >= 2 && value.starts_with('(') && value.ends_with(')') {
        value = &value[1..value.len() - 1];
    }
    value
}

/// Translate an introspected column default into a `defaultValue`
/// expression.
///
/// Returns `None` when the attribute should be omitted: no default, a
/// dialect sentinel, or a serial key whose value the database generates.
pub fn translate_default(
    raw: Option<&AttrValue>,
    field_type: &str,
    element_type: Option<&str>,
    dialect: Dialect,
    is_serial_key: bool,
) -> Option<DefaultExpr> {
    let raw = raw?;
    if is_sentinel(raw, dialect) || is_serial_key {
        return None;
    }
    let AttrValue::Str(value) = raw else {
        return Some(DefaultExpr::Raw(raw.to_string()));
    };

    let field_type = field_type.to_lowercase();
    let escaped = escape_special(value);
    let value = strip_parens(&escaped);

    let expr = if matches!(field_type.as_str(), "bit(1)" | "bit" | "boolean") {
        DefaultExpr::Boolean(TRUTHY.is_match(value))
    } else if is_array(&field_type) {
        let items = value.strip_prefix('{').unwrap_or(value);
        let items = items.strip_suffix('}').unwrap_or(items);
        let element_type = element_type.unwrap_or_default().to_lowercase();
        let items = if !items.is_empty() && is_string(&element_type) {
            items
                .split(',')
                .map(|item| format!("\"{}\"", item))
                .collect::<Vec<_>>()
                .join(",")
        } else {
            items.to_string()
        };
        DefaultExpr::Array(items)
    } else if field_type.starts_with("json") {
        DefaultExpr::Raw(value.to_string())
    } else if field_type == "uuid"
        && (value == "gen_random_uuid()" || value == "uuid_generate_v4()")
    {
        DefaultExpr::UuidV4
    } else if FN_CALL.is_match(value) {
        DefaultExpr::Fn(value.trim_end_matches("()").to_string())
    } else if is_number(&field_type) {
        if value.contains("()") {
            DefaultExpr::Literal(value.to_string())
        } else {
            DefaultExpr::Raw(value.to_string())
        }
    } else if value.contains("()") {
        DefaultExpr::Literal(value.to_string())
    } else if (field_type.starts_with("date") || field_type.starts_with("timestamp"))
        && CURRENT_TIME_KEYWORDS.contains(&value.to_lowercase().as_str())
    {
        DefaultExpr::Literal(value.to_string())
    } else {
        DefaultExpr::Quoted(value.to_string())
    };
    Some(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn translate(raw: &str, field_type: &str) -> Option<String> {
        translate_default(
            Some(&AttrValue::from(raw)),
            field_type,
            None,
            Dialect::Postgres,
            false,
        )
        .map(|expr| expr.to_string())
    }

    #[rstest]
    #[case("1", "bit(1)", "true")]
    #[case("b'0'", "bit", "false")]
    #[case("TRUE", "boolean", "true")]
    #[case("false", "boolean", "false")]
    #[case("'{\"a\":1}'::jsonb", "jsonb", "'{\\\"a\\\":1}'::jsonb")]
    #[case("gen_random_uuid()", "uuid", "DataTypes.UUIDV4")]
    #[case("uuid_generate_v4()", "uuid", "DataTypes.UUIDV4")]
    #[case("now()", "timestamp with time zone", "Sequelize.Sequelize.fn('now')")]
    #[case("getdate()", "datetime", "Sequelize.Sequelize.fn('getdate')")]
    #[case("((0))", "int", "0")]
    #[case("(1.5)", "decimal(4,1)", "1.5")]
    #[case("round(random() * 10)", "integer", "Sequelize.Sequelize.literal('round(random() * 10)')")]
    #[case("lower(now()::text)", "text", "Sequelize.Sequelize.literal('lower(now()::text)')")]
    #[case("CURRENT_TIMESTAMP", "timestamp", "Sequelize.Sequelize.literal('CURRENT_TIMESTAMP')")]
    #[case("current_date", "date", "Sequelize.Sequelize.literal('current_date')")]
    #[case("2020-01-01", "date", "\"2020-01-01\"")]
    #[case("active", "varchar(20)", "\"active\"")]
    #[case("", "varchar(20)", "\"\"")]
    fn translates_string_defaults(
        #[case] raw: &str,
        #[case] field_type: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(translate(raw, field_type).as_deref(), Some(expected));
    }

    #[test]
    fn escapes_quoted_values() {
        assert_eq!(
            translate("say \"hi\"\n", "text").as_deref(),
            Some(r#""say \"hi\"\n""#)
        );
        assert_eq!(
            translate("a\u{1}b", "text").as_deref(),
            Some(r#""a\u0001b""#)
        );
    }

    #[rstest]
    #[case("text")]
    #[case("integer")]
    #[case("jsonb")]
    #[case("timestamp")]
    #[case("boolean")]
    fn never_emits_raw_control_characters(#[case] field_type: &str) {
        for raw in ["a\tb", "line\r\nbreak", "bell\u{7}()", "(\u{1b}[0m)", "{x\n,y}"] {
            if let Some(out) = translate(raw, field_type) {
                assert!(!out.chars().any(char::is_control), "{field_type}: {out:?}");
            }
        }
    }

    #[test]
    fn escapes_single_quotes_in_literals() {
        assert_eq!(
            translate("concat('a', now())", "text").as_deref(),
            Some(r"Sequelize.Sequelize.literal('concat(\'a\', now())')")
        );
    }

    #[test]
    fn array_defaults() {
        let render = |raw: &str, element: &str| {
            translate_default(
                Some(&AttrValue::from(raw)),
                "ARRAY",
                Some(element),
                Dialect::Postgres,
                false,
            )
            .map(|expr| expr.to_string())
        };
        assert_eq!(render("{a,b}", "text").as_deref(), Some(r#"["a","b"]"#));
        assert_eq!(render("{1,2}", "integer").as_deref(), Some("[1,2]"));
        assert_eq!(render("{}", "text").as_deref(), Some("[]"));
        assert_eq!(render("{{1,2},{3,4}}", "integer").as_deref(), Some("[{1,2},{3,4}]"));
    }

    #[test]
    fn non_string_defaults_are_verbatim() {
        let expr = translate_default(
            Some(&AttrValue::Int(42)),
            "integer",
            None,
            Dialect::Sqlite,
            false,
        );
        assert_eq!(expr, Some(DefaultExpr::Raw("42".into())));

        let expr = translate_default(
            Some(&AttrValue::Bool(false)),
            "boolean",
            None,
            Dialect::Mysql,
            false,
        );
        assert_eq!(expr.map(|e| e.to_string()).as_deref(), Some("false"));
    }

    #[rstest]
    #[case("(newid())")]
    #[case("(NEWID())")]
    #[case("(NULL)")]
    #[case("NULL")]
    fn mssql_sentinels_are_omitted(#[case] raw: &str) {
        let expr = translate_default(
            Some(&AttrValue::from(raw)),
            "uniqueidentifier",
            None,
            Dialect::Mssql,
            false,
        );
        assert_eq!(expr, None);
    }

    #[test]
    fn sentinels_only_apply_to_mssql() {
        assert_eq!(translate("NULL", "varchar(10)").as_deref(), Some("\"NULL\""));
    }

    #[test]
    fn serial_keys_and_missing_defaults_are_omitted() {
        let nextval = AttrValue::from("nextval('users_id_seq'::regclass)");
        assert_eq!(
            translate_default(Some(&nextval), "integer", None, Dialect::Postgres, true),
            None
        );
        assert_eq!(
            translate_default(None, "integer", None, Dialect::Postgres, false),
            None
        );
    }
}
