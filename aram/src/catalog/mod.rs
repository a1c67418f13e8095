// aram-rs/aram/src/catalog/mod.rs

//! Read-only store of pre-serialized response payloads.
//!
//! The engine never builds or edits catalog content; it only looks payloads
//! up by [`Selector`] and delivers them.

mod builder;
pub mod templates;

pub use builder::{CatalogBuilder, StaticCatalog};

use crate::types::{Payload, Selector};

/// Source of the payloads the applet delivers.
pub trait Catalog {
    /// Return the payload stored under `selector`, if any.
    ///
    /// Implementations should hand out the same [`Payload`] instance for as
    /// long as the underlying content is unchanged: an access-rule
    /// enumeration is only resumed while the catalog keeps returning the
    /// payload it started from.
    fn lookup(&self, selector: Selector) -> Option<Payload>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn lookup(&self, selector: Selector) -> Option<Payload> {
        (**self).lookup(selector)
    }
}

impl<C: Catalog + ?Sized> Catalog for Box<C> {
    fn lookup(&self, selector: Selector) -> Option<Payload> {
        (**self).lookup(selector)
    }
}
