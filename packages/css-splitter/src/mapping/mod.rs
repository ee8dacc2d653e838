//! Header classification.
//!
//! A [`MappingTable`] maps header patterns to destination files. It can be
//! built in code, loaded from a YAML file, or taken from
//! [`create_default_mapping`].

mod config;
mod table;
mod types;

pub use config::{create_default_mapping, DEFAULT_MAPPINGS};
pub use table::MappingTable;
pub use types::{Classification, MappingRule};
