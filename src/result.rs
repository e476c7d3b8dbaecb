//! Result type used on the fatal paths of the catalog generator.
//!
//! Everything that should abort a run (unreadable plugin directory, failed
//! output write, logger setup) returns this `Result` so errors are reported
//! through `color-eyre` with their full context chain.
//!
//! Per-plugin failures never travel through this type: they are logged and
//! degraded where they happen. See [`crate::error::FetchError`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use color_eyre::eyre::WrapErr;
//! use crate::result::Result;
//!
//! fn read_plugins(path: &Path) -> Result<Vec<PathBuf>> {
//!     let entries = std::fs::read_dir(path)
//!         .wrap_err_with(|| format!("failed to read {}", path.display()))?;
//!     // ...
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout the catalog generator.
///
/// Alias for `color_eyre::eyre::Result<T>`; add context as errors
/// propagate with `.wrap_err()`.
pub type Result<T> = EyreResult<T>;
