//! Check primitives
//!
//! Two stateless predicates make up every verification:
//! - ARTIFACTS: a path must exist under the base directory
//! - DECLARATIONS: a manifest must contain a substring
//!
//! Neither predicate writes to the filesystem. Outcomes are plain data
//! so a run can fold them without any shared state.

mod artifact;
mod manifest;
mod outcome;

pub use artifact::artifact_exists;
pub use manifest::{manifest_contains, ManifestError};
pub use outcome::{CheckOutcome, CheckStatus};
