//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common applet/requester setup so tests across
//! the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::applet::Applet;
use crate::catalog::{CatalogBuilder, StaticCatalog};
use crate::client::Requester;
use crate::config::AppletConfig;
use crate::transport::LoopbackChannel;
use crate::Result;

/// Deterministic payload of `len` bytes: `0x00, 0x01, ... 0xFF, 0x00, ...`.
#[doc(hidden)]
pub fn sequential_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i & 0xff) as u8).collect()
}

/// Default catalog whose access-rule payload is `rules`.
#[doc(hidden)]
pub fn catalog_with_rules(rules: Vec<u8>) -> StaticCatalog {
    CatalogBuilder::with_defaults().access_rules(rules).build()
}

/// Applet with the default templates, `rules_len` sequential rule bytes and
/// the given transfer limit.
#[doc(hidden)]
pub fn applet_with_rules(rules_len: usize, transfer_limit: usize) -> Result<Applet> {
    let config = AppletConfig::builder()
        .transfer_limit(transfer_limit)
        .build()?;
    Applet::with_config(config, catalog_with_rules(sequential_bytes(rules_len)))
}

/// Requester wired to `applet` through a loopback channel.
#[doc(hidden)]
pub fn loopback_requester(applet: Applet) -> Requester<LoopbackChannel> {
    Requester::new(LoopbackChannel::new(applet))
}
