pub mod config;
pub mod definitions;

pub use config::{from_json, from_toml, CatalogDef};
pub use definitions::{builtin, by_name};
