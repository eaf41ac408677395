//! Node listing rows and content type lookup.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// A listing row that links to a content node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRow {
    /// The anchor's `href`, relative to the site.
    pub link: Option<String>,

    /// Anchor text.
    pub title: String,

    /// Text of the cell following the anchor.
    pub type_label: Option<String>,
}

/// Content type display names mapped to their short internal codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentTypes {
    codes: HashMap<String, String>,
}

impl ContentTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: String, code: String) {
        self.codes.insert(label, code);
    }

    /// Short code for a display name.
    pub fn resolve(&self, label: &str) -> Result<&str> {
        self.codes
            .get(label)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownContentType(label.to_string()))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<L: Into<String>, C: Into<String>> FromIterator<(L, C)> for ContentTypes {
    fn from_iter<I: IntoIterator<Item = (L, C)>>(iter: I) -> Self {
        Self {
            codes: iter
                .into_iter()
                .map(|(label, code)| (label.into(), code.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_label() {
        let types: ContentTypes = [("Article", "article"), ("Page", "page")]
            .into_iter()
            .collect();

        assert_eq!(types.resolve("Article").unwrap(), "article");
        assert_eq!(types.resolve("Page").unwrap(), "page");
        assert_eq!(types.len(), 2);
    }

    #[test]
    fn test_resolve_unknown_label() {
        let types = ContentTypes::new();
        let err = types.resolve("Blog entry").unwrap_err();
        assert!(matches!(err, Error::UnknownContentType(ref label) if label == "Blog entry"));
    }
}
