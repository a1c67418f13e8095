// aram-rs/aram/src/catalog/builder.rs

use std::collections::HashMap;

use super::Catalog;
use super::templates::{
    DEFAULT_REFRESH_TAG, EMPTY_ALL_REF_AR_DO, SELECT_RESPONSE_FCI, SELECT_RESPONSE_FCP,
    SELECT_RESPONSE_FMD,
};
use crate::types::{DataTag, Payload, Selector, Template};

/// In-memory catalog backed by a selector map.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    entries: HashMap<Selector, Payload>,
}

impl StaticCatalog {
    /// Start from an empty builder.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Number of selectors with a payload.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no selector has a payload.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        CatalogBuilder::with_defaults().build()
    }
}

impl Catalog for StaticCatalog {
    fn lookup(&self, selector: Selector) -> Option<Payload> {
        self.entries.get(&selector).cloned()
    }
}

/// Helper to assemble a [`StaticCatalog`].
pub struct CatalogBuilder {
    entries: HashMap<Selector, Payload>,
}

impl CatalogBuilder {
    /// Start from an empty catalog.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Start from the built-in templates, an empty rule set and a zero
    /// refresh tag.
    pub fn with_defaults() -> Self {
        Self::new()
            .template(Template::Fci, Payload::from_static(&SELECT_RESPONSE_FCI))
            .template(Template::Fcp, Payload::from_static(&SELECT_RESPONSE_FCP))
            .template(Template::Fmd, Payload::from_static(&SELECT_RESPONSE_FMD))
            .access_rules(Payload::from_static(&EMPTY_ALL_REF_AR_DO))
            .refresh_tag(Payload::from_static(&DEFAULT_REFRESH_TAG))
    }

    /// Payload answered to SELECT with `template`.
    pub fn template(self, template: Template, payload: impl Into<Payload>) -> Self {
        self.entry(Selector::Template(template), payload)
    }

    /// Serialized Response-ALL-REF-AR-DO delivered by GET DATA ALL/NEXT.
    pub fn access_rules(self, payload: impl Into<Payload>) -> Self {
        self.entry(Selector::Tag(DataTag::AllRules), payload)
    }

    /// Refresh tag delivered by GET DATA DF20.
    pub fn refresh_tag(self, payload: impl Into<Payload>) -> Self {
        self.entry(Selector::Tag(DataTag::Refresh), payload)
    }

    /// Store `payload` under `selector`, replacing any previous one.
    pub fn entry(mut self, selector: Selector, payload: impl Into<Payload>) -> Self {
        self.entries.insert(selector, payload.into());
        self
    }

    /// Drop the payload for `selector`; lookups for it will miss.
    pub fn remove(mut self, selector: Selector) -> Self {
        self.entries.remove(&selector);
        self
    }

    /// Finish the catalog.
    pub fn build(self) -> StaticCatalog {
        StaticCatalog {
            entries: self.entries,
        }
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
