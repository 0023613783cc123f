//! Zotero MCP helpers
//!
//! Shared support code for the Zotero MCP integration: creator-name
//! formatting for display strings, the local-mode environment toggle, and
//! wall-clock deadline enforcement for blocking Zotero calls.
//!
//! # Features
//!
//! - **Creator formatting**: Zotero creator records to a single display string
//! - **Local mode**: `ZOTERO_LOCAL` environment toggle, injectable via [`Config`]
//! - **Deadlines**: bound a blocking call by wall-clock time on the Tokio runtime
//!
//! # Example
//!
//! ```
//! use zotero_mcp::{format_creators, models::Creator};
//!
//! let creators = vec![
//!     Creator::personal("Jane", "Doe"),
//!     Creator::institution("Acme Corp"),
//! ];
//! assert_eq!(format_creators(&creators), "Doe, Jane; Acme Corp");
//! ```

pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod timeout;

pub use config::{Config, is_local_mode};
pub use error::{Error, Result};
pub use formatters::format_creators;
pub use timeout::run_with_deadline;
