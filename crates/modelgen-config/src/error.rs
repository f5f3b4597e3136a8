use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown output language: {0} (expected es5, es6, esm or ts)")]
    UnknownLang(String),
    #[error("unknown naming case: {0} (expected one of o, c, l, p, u, k)")]
    UnknownNameCase(String),
}
