//! # specter-core - Core Domain Types
//!
//! Foundation crate for Specter. Provides the shared domain types, error
//! handling, and logging setup used by every other crate.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`SpecDocument`] - A specification document and its server-side path
//! - [`GenerateOutcome`] - Result of one generation attempt (artifacts or error)
//! - [`GeneratedArtifacts`] - The artifact bundle from a successful generation
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use specter_core::prelude::*;
//! ```

pub mod document;
pub mod error;
pub mod generate;
pub mod logging;

/// Prelude for common imports used throughout all Specter crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use document::SpecDocument;
pub use error::{Error, Result, ResultExt};
pub use generate::{GenerateOutcome, GeneratedArtifacts};
