use std::io;
use std::path::PathBuf;

use super::validation::ValidationError;

/// Errors raised while loading a catalog file
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported catalog format for {}: expected .yaml, .yml or .toml", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid catalog:\n  - {}", format_errors(.0))]
    Invalid(Vec<ValidationError>),

    #[error("no catalog found (looked for {})", .0.join(", "))]
    NotFound(Vec<String>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n  - ")
}
