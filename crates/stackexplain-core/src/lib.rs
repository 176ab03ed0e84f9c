//! # stackexplain-core - Core Domain Types
//!
//! Foundation crate for StackExplain. Provides the explanation record
//! exchanged with the backend, the model catalogue, error handling, and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Explanation (`explanation`)
//! - [`ExplanationRecord`] - Structured explanation with four optional fields
//! - [`ExplainRequest`] - Body of the `POST /explain` call
//! - [`FALLBACK_ERROR_TYPE`] and friends - The fixed record shown on failure
//!
//! ### Models (`model`)
//! - [`ModelChoice`] - The fixed set of models offered in the selector
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
//! use stackexplain_core::prelude::*;
//! ```

pub mod error;
pub mod explanation;
pub mod logging;
pub mod model;
pub mod prelude;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use explanation::{
    ExplainRequest, ExplanationRecord, FALLBACK_ERROR_TYPE, FALLBACK_EXPLANATION,
    FALLBACK_SUGGESTED_FIX,
};
pub use model::ModelChoice;
