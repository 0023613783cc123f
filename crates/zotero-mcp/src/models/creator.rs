//! Creator data model matching the Zotero API schema.

use serde::{Deserialize, Serialize};

/// A creator (author, editor, translator, ...) attached to a Zotero item.
///
/// Personal creators carry split `firstName`/`lastName` fields;
/// institutional creators carry a single combined `name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    /// Creator role (e.g. "author", "editor").
    #[serde(default)]
    pub creator_type: Option<String>,

    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,

    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,

    /// Combined name for institutional creators.
    #[serde(default)]
    pub name: Option<String>,
}

impl Creator {
    /// Create a personal creator with split given/family names.
    #[must_use]
    pub fn personal(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }

    /// Create an institutional creator with a single combined name.
    #[must_use]
    pub fn institution(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }

    /// Get the display name for this creator, if it has one.
    ///
    /// Split names render as "Family, Given"; a combined name is used
    /// verbatim. Returns `None` when neither form is present.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{last}, {first}")),
            _ => self.name.clone(),
        }
    }
}
