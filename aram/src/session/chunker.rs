// aram-rs/aram/src/session/chunker.rs

use log::{debug, trace, warn};

use super::TransferCursor;
use crate::constants::DEFAULT_TRANSFER_LIMIT;
use crate::protocol::status::length_hint;
use crate::protocol::{Response, StatusWord};
use crate::types::Payload;
use crate::{Error, Result};

/// How a delivered chunk affects the transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// GET RESPONSE: the transfer survives while full chunks are taken and
    /// bytes remain.
    Continuation,
    /// Standalone GET DATA: one chunk, then the transfer is dropped.
    Tagged,
    /// GET DATA ALL / NEXT: like `Tagged`, and the sent bytes are counted
    /// against the enumeration.
    Enumerated,
}

/// Splits pending payloads into chunks no larger than the transfer limit.
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    limit: usize,
}

impl Chunker {
    /// Create a chunker for `limit` bytes per exchange.
    ///
    /// The limit must fit a short response, `1..=256`.
    pub fn new(limit: usize) -> Result<Self> {
        if !(1..=DEFAULT_TRANSFER_LIMIT).contains(&limit) {
            return Err(Error::InvalidConfig(format!(
                "transfer limit {} outside 1..={}",
                limit, DEFAULT_TRANSFER_LIMIT
            )));
        }
        Ok(Self { limit })
    }

    /// Maximum number of bytes delivered per exchange.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Le `0x00` asks for as much as the channel allows.
    pub fn resolve_expected(&self, le: u8) -> usize {
        if le == 0 { self.limit } else { le as usize }
    }

    /// Install `payload` as the pending transfer and announce its length.
    /// No bytes are sent; the requester fetches them with GET RESPONSE.
    ///
    /// An empty payload is announced as `61 00` like any other; the
    /// following GET RESPONSE completes it with an empty `90 00`.
    pub fn begin(&self, cursor: &mut TransferCursor, cla: u8, payload: Payload) -> StatusWord {
        let len = payload.len();
        cursor.install(cla, payload);
        StatusWord::bytes_remaining(len, self.limit)
    }

    /// Bytes a request with `le` takes from `remaining` pending bytes.
    ///
    /// Fails with [`Error::IncorrectLength`] carrying the length to retry
    /// with when `le` asks for more than one exchange can deliver.
    pub fn checked_request(&self, remaining: usize, le: u8) -> Result<usize> {
        let available = remaining.min(self.limit);
        let requested = self.resolve_expected(le);
        if requested > available {
            warn!(
                "le {} exceeds {} available bytes; asking for retry",
                requested, available
            );
            return Err(Error::IncorrectLength {
                available: length_hint(available, self.limit),
            });
        }
        Ok(requested)
    }

    /// Send the next chunk of the pending transfer.
    ///
    /// Fails with [`Error::IncorrectLength`] without touching the cursor
    /// when `le` asks for more than can be delivered.
    pub fn send_chunk(
        &self,
        cursor: &mut TransferCursor,
        le: u8,
        delivery: Delivery,
    ) -> Result<Response> {
        let Some(payload) = cursor.payload().cloned() else {
            return Ok(Response::success());
        };
        let offset = cursor.offset();
        let remaining = payload.len() - offset;
        if remaining == 0 {
            cursor.clear();
            return Ok(Response::success());
        }

        let requested = self.checked_request(remaining, le)?;

        let data = payload.as_bytes()[offset..offset + requested].to_vec();
        trace!("chunk {}..{}", offset, offset + requested);
        cursor.advance(requested);

        let status = match delivery {
            Delivery::Continuation => {
                let left = remaining - requested;
                if left > 0 && requested == self.limit {
                    debug!("{} bytes left after chunk", left);
                    StatusWord::bytes_remaining(left, self.limit)
                } else {
                    cursor.clear();
                    StatusWord::SUCCESS
                }
            }
            Delivery::Tagged => {
                cursor.clear();
                StatusWord::SUCCESS
            }
            Delivery::Enumerated => {
                cursor.consume_enumeration(requested);
                cursor.clear();
                StatusWord::SUCCESS
            }
        };

        Ok(Response::new(data, status))
    }
}
