// aram-rs/aram/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Channel;
use crate::{Error, Result};

/// Mock channel for unit tests. It records sent APDUs and returns queued responses.
#[derive(Debug, Default)]
pub struct MockChannel {
    /// APDUs passed to `transmit`, oldest first
    pub sent: Vec<Vec<u8>>,
    /// Replies handed out in order
    pub responses: VecDeque<Vec<u8>>,
    /// Testing hook: number of upcoming transmits that should fail
    pub failures: usize,
    /// Number of `reset` calls
    pub resets: usize,
}

impl MockChannel {
    /// Empty mock with no queued replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent transmit calls should fail (for tests).
    pub fn set_failures(&mut self, n: usize) {
        self.failures = n;
    }

    /// Queue a raw response (body plus status word).
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(resp);
    }

    /// Take the most recently sent APDU.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Channel for MockChannel {
    fn transmit(&mut self, apdu: &[u8]) -> Result<Vec<u8>> {
        self.sent.push(apdu.to_vec());
        if self.failures > 0 {
            self.failures -= 1;
            return Err(Error::Channel("injected failure".into()));
        }
        self.responses
            .pop_front()
            .ok_or_else(|| Error::Channel("no response queued".into()))
    }

    fn reset(&mut self) -> Result<()> {
        // Keep queued responses so tests can seed replies before handing
        // the channel over.
        self.sent.clear();
        self.resets += 1;
        Ok(())
    }
}
