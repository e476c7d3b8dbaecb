//! GitHub lookups for plugin repository descriptions.
//!
//! Provides the identifier parsing, the client configuration, and the
//! [`traits::DescriptionSource`] seam the catalog pipeline fetches through.

/// Configuration and authentication for the GitHub API client.
pub mod config;

/// GitHub API client implementation.
pub mod github;

/// Common traits for description lookups.
pub mod traits;

/// Repository identifiers and description helpers.
pub mod types;
