// aram-rs/aram/src/transport/traits.rs

use crate::Result;

/// Channel trait abstracts the physical link away from the requester.
///
/// One call is one half-duplex exchange: a command APDU goes out and exactly
/// one response APDU (body plus status word) comes back.
pub trait Channel {
    /// Send a command APDU and return the response APDU
    fn transmit(&mut self, apdu: &[u8]) -> Result<Vec<u8>>;

    /// Perform a link-level reset. Default is a no-op.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Channel + ?Sized> Channel for &mut T {
    fn transmit(&mut self, apdu: &[u8]) -> Result<Vec<u8>> {
        (**self).transmit(apdu)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}

impl<T: Channel + ?Sized> Channel for Box<T> {
    fn transmit(&mut self, apdu: &[u8]) -> Result<Vec<u8>> {
        (**self).transmit(apdu)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}
