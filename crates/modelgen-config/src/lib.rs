pub mod additional;
pub mod config;
pub mod error;
pub mod lang;
pub mod name_case;

pub use additional::{AdditionalOptions, OptionValue};
pub use config::{GeneratorOptions, Indent};
pub use error::ConfigError;
pub use lang::Lang;
pub use name_case::NameCase;
