// aram-rs/aram/src/session/mod.rs

//! Transfer state and the engine that drives it.
//!
//! A [`TransferCursor`] is the only mutable state of the applet. It is owned
//! by the caller and lent to the [`Dispatcher`] for the duration of one
//! exchange.

/// Chunked delivery of the pending payload
pub mod chunker;
/// Command routing
pub mod dispatcher;

pub use chunker::{Chunker, Delivery};
pub use dispatcher::{Dispatcher, Route};

use log::debug;

use crate::types::Payload;

#[derive(Debug, Clone)]
struct Transfer {
    owning_class: u8,
    payload: Payload,
    offset: usize,
}

/// Progress of a GET DATA ALL / NEXT walk over the access-rule payload.
///
/// Tracked separately from the per-exchange transfer: the transfer is
/// cleared after every GET DATA response while the enumeration survives
/// until its last byte was handed out.
#[derive(Debug, Clone)]
pub struct Enumeration {
    payload: Payload,
    remaining: usize,
}

impl Enumeration {
    /// Access-rule payload being enumerated.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Bytes not yet enumerated.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Offset of the next byte to enumerate.
    pub fn position(&self) -> usize {
        self.payload.len() - self.remaining
    }
}

/// State of an in-progress multi-exchange delivery.
#[derive(Debug, Clone, Default)]
pub struct TransferCursor {
    transfer: Option<Transfer>,
    enumeration: Option<Enumeration>,
}

impl TransferCursor {
    /// Idle cursor with no enumeration.
    pub fn new() -> Self {
        Self::default()
    }

    /// CLA of the command that started the pending transfer, `0x00` when idle.
    pub fn owning_class(&self) -> u8 {
        self.transfer.as_ref().map_or(0x00, |t| t.owning_class)
    }

    /// True while a transfer waits for GET RESPONSE.
    pub fn is_pending(&self) -> bool {
        self.transfer.is_some()
    }

    /// Payload of the pending transfer.
    pub fn payload(&self) -> Option<&Payload> {
        self.transfer.as_ref().map(|t| &t.payload)
    }

    /// Bytes of the pending payload already delivered.
    pub fn offset(&self) -> usize {
        self.transfer.as_ref().map_or(0, |t| t.offset)
    }

    /// Bytes of the pending payload not yet delivered.
    pub fn remaining(&self) -> usize {
        self.transfer
            .as_ref()
            .map_or(0, |t| t.payload.len() - t.offset)
    }

    /// Access-rule enumeration in progress, if any.
    pub fn enumeration(&self) -> Option<&Enumeration> {
        self.enumeration.as_ref()
    }

    /// Bytes left across the whole access-rule enumeration.
    pub fn remaining_for_enumeration(&self) -> usize {
        self.enumeration.as_ref().map_or(0, |e| e.remaining)
    }

    /// Drop the pending transfer. The enumeration is left alone.
    pub fn clear(&mut self) {
        if let Some(t) = self.transfer.take() {
            debug!(
                "transfer cleared: cla={:#04x} offset={}/{}",
                t.owning_class,
                t.offset,
                t.payload.len()
            );
        }
    }

    /// Drop the pending transfer and any enumeration.
    pub fn reset(&mut self) {
        self.clear();
        self.end_enumeration();
    }

    pub(crate) fn install(&mut self, owning_class: u8, payload: Payload) {
        self.install_at(owning_class, payload, 0);
    }

    pub(crate) fn install_at(&mut self, owning_class: u8, payload: Payload, offset: usize) {
        debug_assert!(offset <= payload.len());
        debug!(
            "transfer started: cla={:#04x} offset={}/{}",
            owning_class,
            offset,
            payload.len()
        );
        self.transfer = Some(Transfer {
            owning_class,
            payload,
            offset,
        });
    }

    pub(crate) fn advance(&mut self, count: usize) {
        if let Some(t) = self.transfer.as_mut() {
            debug_assert!(t.offset + count <= t.payload.len());
            t.offset += count;
        }
    }

    pub(crate) fn start_enumeration(&mut self, payload: Payload) {
        if payload.is_empty() {
            self.enumeration = None;
            return;
        }
        debug!("enumeration started: {} bytes", payload.len());
        self.enumeration = Some(Enumeration {
            remaining: payload.len(),
            payload,
        });
    }

    /// Install the enumeration payload as the pending transfer, positioned
    /// at the next byte to enumerate. Returns false if nothing is left.
    pub(crate) fn resume_enumeration(&mut self, owning_class: u8) -> bool {
        let Some(e) = self.enumeration.as_ref() else {
            return false;
        };
        let (payload, position) = (e.payload.clone(), e.position());
        self.install_at(owning_class, payload, position);
        true
    }

    pub(crate) fn consume_enumeration(&mut self, count: usize) {
        let exhausted = match self.enumeration.as_mut() {
            Some(e) => {
                e.remaining = e.remaining.saturating_sub(count);
                e.remaining == 0
            }
            None => false,
        };
        if exhausted {
            debug!("enumeration exhausted");
            self.enumeration = None;
        }
    }

    pub(crate) fn end_enumeration(&mut self) {
        self.enumeration = None;
    }
}
