//! Expectation catalog
//!
//! The catalog declares what a complete build must contain: named groups of
//! artifact paths and manifest declarations. It is loaded from a YAML or
//! TOML file, or assembled in code with the builder API, and is never
//! mutated once built.

mod builder;
mod error;
mod loader;
mod types;
mod validation;


pub use builder::CatalogBuilder;
pub use error::CatalogError;
pub use loader::{
    discover_catalog, load_catalog, parse_catalog_str, CatalogFormat, LoadedCatalog,
    CATALOG_FILE_NAMES,
};
pub use types::{
    BuildSpec, Catalog, CatalogFile, CheckSpec, Expectation, ExpectationKind, Group, GroupSpec,
};
pub use validation::{validate, ValidationError, MAX_LABEL_LENGTH};
