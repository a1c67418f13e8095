// aram-rs/aram/src/applet.rs

use log::{debug, trace};

use crate::catalog::{Catalog, StaticCatalog};
use crate::config::AppletConfig;
use crate::constants::INS_GET_RESPONSE;
use crate::protocol::{Command, Response};
use crate::session::{Dispatcher, TransferCursor};
use crate::utils::bytes_to_hex;
use crate::Result;

/// Access rule application master.
///
/// Owns the configuration, the payload catalog and the transfer cursor, and
/// answers one command per call.
pub struct Applet<C: Catalog = StaticCatalog> {
    config: AppletConfig,
    catalog: C,
    cursor: TransferCursor,
}

impl<C: Catalog> Applet<C> {
    /// Create an applet with the default configuration.
    pub fn new(catalog: C) -> Self {
        Self {
            config: AppletConfig::default(),
            catalog,
            cursor: TransferCursor::new(),
        }
    }

    /// Create an applet with `config`, rejecting it if it does not validate.
    pub fn with_config(config: AppletConfig, catalog: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            catalog,
            cursor: TransferCursor::new(),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &AppletConfig {
        &self.config
    }

    /// Catalog currently served.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Transfer state left by the last command.
    pub fn cursor(&self) -> &TransferCursor {
        &self.cursor
    }

    /// Swap in new catalog content. Any pending transfer or enumeration is
    /// dropped.
    pub fn replace_catalog(&mut self, catalog: C) -> C {
        self.cursor.reset();
        std::mem::replace(&mut self.catalog, catalog)
    }

    /// Answer a parsed command.
    pub fn process(&mut self, cmd: &Command) -> Result<Response> {
        Dispatcher::new(&self.config, &self.catalog)?.dispatch(&mut self.cursor, cmd)
    }

    /// Answer a raw command APDU with raw response bytes. Failures are
    /// reported as a bare status word.
    pub fn process_apdu(&mut self, apdu: &[u8]) -> Vec<u8> {
        trace!("-> {}", bytes_to_hex(apdu));

        let result = match Command::parse(apdu) {
            Ok(cmd) => self.process(&cmd),
            Err(e) => {
                // a malformed command still interrupts a pending transfer
                if apdu.get(1) != Some(&INS_GET_RESPONSE) {
                    self.cursor.clear();
                }
                Err(e)
            }
        };

        let response = result.unwrap_or_else(|e| {
            debug!("command rejected: {}", e);
            Response::status_only(e.status_word())
        });
        let out = response.encode();
        trace!("<- {}", bytes_to_hex(&out));
        out
    }
}

impl Default for Applet<StaticCatalog> {
    fn default() -> Self {
        Self::new(StaticCatalog::default())
    }
}
