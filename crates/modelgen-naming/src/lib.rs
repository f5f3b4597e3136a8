//! Naming conventions and helpers for modelgen.
//!
//! This crate provides the case conversion, inflection and qualified-name
//! helpers the generator uses to turn database identifiers into model,
//! property and file names.

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

// ============================================================================
// Case Conversion
// ============================================================================

/// Convert an identifier to camelCase.
///
/// # Examples
/// ```
/// use modelgen_naming::to_camel_case;
///
/// assert_eq!(to_camel_case("created_at"), "createdAt");
/// assert_eq!(to_camel_case("user_id"), "userId");
/// ```
pub fn to_camel_case(s: &str) -> String {
    s.to_lower_camel_case()
}

/// Convert an identifier to PascalCase.
///
/// # Examples
/// ```
/// use modelgen_naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("order_items"), "OrderItems");
/// assert_eq!(to_pascal_case("user"), "User");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.to_upper_camel_case()
}

/// Convert an identifier to snake_case.
pub fn to_snake_case(s: &str) -> String {
    s.to_snake_case()
}

/// Convert an identifier to UPPER_SNAKE_CASE.
pub fn to_upper_snake_case(s: &str) -> String {
    s.to_shouty_snake_case()
}

/// Convert an identifier to kebab-case.
pub fn to_kebab_case(s: &str) -> String {
    s.to_kebab_case()
}

/// Uppercase the first character and leave the rest untouched.
///
/// # Examples
/// ```
/// use modelgen_naming::upper_first;
///
/// assert_eq!(upper_first("orderItems"), "OrderItems");
/// assert_eq!(upper_first(""), "");
/// ```
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

// ============================================================================
// Inflection
// ============================================================================

/// Singular form of a word (`users` -> `user`).
pub fn singularize(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    pluralizer::pluralize(name, 1, false)
}

/// Plural form of a word (`user` -> `users`).
pub fn pluralize(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    pluralizer::pluralize(name, 2, false)
}

// ============================================================================
// Qualified Names
// ============================================================================

/// Split a possibly schema-qualified table name into `(schema, table)`.
///
/// Only a dot after the first character separates a schema; anything past a
/// second dot is dropped.
///
/// # Examples
/// ```
/// use modelgen_naming::qname_split;
///
/// assert_eq!(qname_split("public.users"), (Some("public"), "users"));
/// assert_eq!(qname_split("users"), (None, "users"));
/// ```
pub fn qname_split(qname: &str) -> (Option<&str>, &str) {
    match qname.find('.') {
        Some(pos) if pos > 0 => {
            let schema = &qname[..pos];
            let rest = &qname[pos + 1..];
            let table = rest.split('.').next().unwrap_or(rest);
            (Some(schema), table)
        }
        _ => (None, qname),
    }
}

/// Join an optional schema and a table name back into a qualified name.
pub fn qname_join(schema: Option<&str>, table: &str) -> String {
    match schema {
        Some(s) if !s.is_empty() => format!("{}.{}", s, table),
        _ => table.to_string(),
    }
}

// ============================================================================
// Identifier Safety
// ============================================================================

const JS_RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

const TS_GLOBAL_TYPES: &[&str] = &[
    "Array", "Boolean", "Date", "Error", "Function", "Map", "Number", "Object", "Omit",
    "Partial", "Pick", "Promise", "Readonly", "Record", "RegExp", "Required", "Set", "String",
    "Symbol",
];

/// Whether `name` is a valid JavaScript identifier that needs no quoting.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Quote a property name when it is not a valid identifier.
///
/// # Examples
/// ```
/// use modelgen_naming::quote_name;
///
/// assert_eq!(quote_name("userId"), "userId");
/// assert_eq!(quote_name("user-id"), "'user-id'");
/// ```
pub fn quote_name(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("'{}'", name)
    }
}

/// Append `_` to names that would collide with a reserved word.
///
/// With `typescript` set, TypeScript global type names (`Date`, `Map`, ...)
/// are escaped as well.
///
/// # Examples
/// ```
/// use modelgen_naming::escape_reserved;
///
/// assert_eq!(escape_reserved("class", false), "class_");
/// assert_eq!(escape_reserved("Map", true), "Map_");
/// assert_eq!(escape_reserved("Map", false), "Map");
/// ```
pub fn escape_reserved(name: &str, typescript: bool) -> String {
    if JS_RESERVED.contains(&name) || (typescript && TS_GLOBAL_TYPES.contains(&name)) {
        format!("{}_", name)
    } else {
        name.to_string()
    }
}
