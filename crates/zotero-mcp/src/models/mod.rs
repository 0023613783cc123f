//! Data models for Zotero API entities.
//!
//! All models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match API naming.

mod creator;

pub use creator::Creator;
