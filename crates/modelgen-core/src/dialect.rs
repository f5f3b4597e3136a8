use serde::{Deserialize, Serialize};

use crate::schema::{AttrValue, FieldDef};

/// Database engine the schema was introspected from.
///
/// Only a handful of generation rules depend on it: schema qualification,
/// serial-key detection, MSSQL default sentinels and postgres identity
/// columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Postgres,
    Mysql,
    Mariadb,
    Mssql,
    Sqlite,
}

impl Dialect {
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::Mysql => "mysql",
            Dialect::Mariadb => "mariadb",
            Dialect::Mssql => "mssql",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Whether tables live in named schemas that models must declare.
    pub fn has_schema(self) -> bool {
        matches!(self, Dialect::Postgres | Dialect::Mssql)
    }

    /// Whether the field's value is generated by the database, judged from
    /// the field alone.
    pub fn is_serial_key(self, field: &FieldDef) -> bool {
        match self {
            Dialect::Postgres => matches!(
                &field.default_value,
                Some(AttrValue::Str(d)) if d.starts_with("nextval(") && d.contains("::regclass")
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Dialect::Postgres, true)]
    #[case(Dialect::Mssql, true)]
    #[case(Dialect::Mysql, false)]
    #[case(Dialect::Mariadb, false)]
    #[case(Dialect::Sqlite, false)]
    fn has_schema(#[case] dialect: Dialect, #[case] expected: bool) {
        assert_eq!(dialect.has_schema(), expected);
    }

    #[test]
    fn postgres_sequence_default_is_serial() {
        let field = FieldDef::new("id", "integer")
            .default_value("nextval('users_id_seq'::regclass)");
        assert!(Dialect::Postgres.is_serial_key(&field));
        assert!(!Dialect::Mysql.is_serial_key(&field));

        let plain = FieldDef::new("id", "integer").default_value("0");
        assert!(!Dialect::Postgres.is_serial_key(&plain));
    }

    #[test]
    fn serde_lowercase() {
        let dialect: Dialect = serde_json::from_str("\"mssql\"").unwrap();
        assert_eq!(dialect, Dialect::Mssql);
        assert_eq!(dialect.name(), "mssql");
    }
}
