// aram-rs/aram/src/prelude.rs

pub use crate::applet::Applet;
pub use crate::catalog::{Catalog, CatalogBuilder, StaticCatalog};
pub use crate::client::Requester;
pub use crate::config::{AppletConfig, AppletConfigBuilder};
pub use crate::protocol::{Command, Response, StatusWord};
pub use crate::session::{Chunker, Delivery, Dispatcher, Route, TransferCursor};
pub use crate::transport::{Channel, LoopbackChannel, MockChannel};
pub use crate::{DataTag, Error, Payload, Result, Selector, Template};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, parse_hex};
