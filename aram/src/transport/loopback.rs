// aram-rs/aram/src/transport/loopback.rs

use crate::applet::Applet;
use crate::catalog::{Catalog, StaticCatalog};
use crate::transport::traits::Channel;
use crate::Result;

/// In-process channel wired straight into an [`Applet`].
pub struct LoopbackChannel<C: Catalog = StaticCatalog> {
    applet: Applet<C>,
    exchanges: usize,
}

impl<C: Catalog> LoopbackChannel<C> {
    /// Wrap `applet`; every transmit is answered by it.
    pub fn new(applet: Applet<C>) -> Self {
        Self {
            applet,
            exchanges: 0,
        }
    }

    /// The applet behind the channel.
    pub fn applet(&self) -> &Applet<C> {
        &self.applet
    }

    /// Mutable access, e.g. to replace the catalog between exchanges.
    pub fn applet_mut(&mut self) -> &mut Applet<C> {
        &mut self.applet
    }

    /// Unwrap the applet.
    pub fn into_applet(self) -> Applet<C> {
        self.applet
    }

    /// Number of exchanges carried so far.
    pub fn exchanges(&self) -> usize {
        self.exchanges
    }
}

impl<C: Catalog> Channel for LoopbackChannel<C> {
    fn transmit(&mut self, apdu: &[u8]) -> Result<Vec<u8>> {
        self.exchanges += 1;
        Ok(self.applet.process_apdu(apdu))
    }
}
