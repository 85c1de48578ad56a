//! Component catalog and lookup.
//!
//! The catalog is built once and only ever handed out by shared reference.
//! The builtin one is parsed from `data/catalog.json`, which is compiled
//! into the binary.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Embedded catalog source.
const BUILTIN_CATALOG_JSON: &str = include_str!("../data/catalog.json");

#[allow(clippy::expect_used)]
static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json_str(BUILTIN_CATALOG_JSON).expect("embedded catalog is valid")
});

/// One documented component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Unique short identifier.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Path of the documentation page, e.g. `/components/tabs`.
    pub href: String,
    /// Category label.
    pub group: String,
    /// Free-text labels, possibly empty.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Ordered, read-only set of descriptors with unique keys.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ComponentDescriptor>,
    by_key: HashMap<String, usize>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if two descriptors share a key.
    pub fn from_descriptors(items: Vec<ComponentDescriptor>) -> Result<Self> {
        let mut by_key = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            if by_key.insert(item.key.clone(), idx).is_some() {
                return Err(Error::DuplicateKey(item.key.clone()));
            }
        }
        Ok(Self { items, by_key })
    }

    /// Parse a JSON array of descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CatalogParse`] for malformed JSON and
    /// [`Error::DuplicateKey`] for repeated keys.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<ComponentDescriptor> = serde_json::from_str(json)?;
        Self::from_descriptors(items)
    }

    /// Load a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures in addition to the [`Catalog::from_json_str`]
    /// errors.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Exact, case-sensitive match on `key`.
    #[must_use]
    pub fn find_by_key(&self, key: &str) -> Option<&ComponentDescriptor> {
        self.by_key.get(key).and_then(|&idx| self.items.get(idx))
    }

    /// First descriptor whose `href` equals `href` exactly.
    #[must_use]
    pub fn find_by_href(&self, href: &str) -> Option<&ComponentDescriptor> {
        self.items.iter().find(|item| item.href == href)
    }

    /// Resolve a descriptor from an optional key and an optional href.
    ///
    /// The key is tried first; the href only when the key is absent, empty
    /// or unmatched.
    #[must_use]
    pub fn lookup(&self, key: Option<&str>, href: Option<&str>) -> Option<&ComponentDescriptor> {
        key.filter(|k| !k.is_empty())
            .and_then(|k| self.find_by_key(k))
            .or_else(|| href.filter(|h| !h.is_empty()).and_then(|h| self.find_by_href(h)))
    }

    /// Descriptors in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, ComponentDescriptor> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ComponentDescriptor;
    type IntoIter = std::slice::Iter<'a, ComponentDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
