// aram-rs/aram/src/client/mod.rs

//! Requester side of the channel: issues commands and reassembles responses
//! that the applet split over several exchanges.

/// Exchange sequences behind the `Requester` methods
pub mod operations;

use log::trace;

use crate::constants::CLA_PROPRIETARY;
use crate::protocol::{Command, Response};
use crate::transport::Channel;
use crate::types::Template;
use crate::utils::bytes_to_hex;
use crate::Result;

/// Host-side driver for an applet reachable over `T`.
pub struct Requester<T: Channel> {
    channel: T,
    get_data_class: u8,
}

impl<T: Channel> Requester<T> {
    /// Wrap `channel`, using CLA `0x80` for GET DATA.
    pub fn new(channel: T) -> Self {
        Self {
            channel,
            get_data_class: CLA_PROPRIETARY,
        }
    }

    /// CLA used for GET DATA commands (default `0x80`).
    pub fn with_get_data_class(mut self, cla: u8) -> Self {
        self.get_data_class = cla;
        self
    }

    /// CLA used for GET DATA.
    pub fn get_data_class(&self) -> u8 {
        self.get_data_class
    }

    /// Borrow the channel.
    pub fn channel(&self) -> &T {
        &self.channel
    }

    /// Mutably borrow the channel.
    pub fn channel_mut(&mut self) -> &mut T {
        &mut self.channel
    }

    /// Give back the channel.
    pub fn into_inner(self) -> T {
        self.channel
    }

    /// Run a single exchange.
    pub fn transmit(&mut self, cmd: &Command) -> Result<Response> {
        let apdu = cmd.encode()?;
        trace!("host -> {}", bytes_to_hex(&apdu));
        let raw = self.channel.transmit(&apdu)?;
        trace!("host <- {}", bytes_to_hex(&raw));
        Response::decode(&raw)
    }

    /// SELECT `aid` asking for `template` and return the full template.
    pub fn select(&mut self, aid: &[u8], template: Template) -> Result<Vec<u8>> {
        operations::select(self, aid, template)
    }

    /// Fetch the whole access-rule payload with GET DATA ALL / NEXT.
    pub fn fetch_access_rules(&mut self) -> Result<Vec<u8>> {
        operations::fetch_access_rules(self)
    }

    /// Fetch the refresh tag with GET DATA DF20.
    pub fn fetch_refresh_tag(&mut self) -> Result<Vec<u8>> {
        operations::fetch_refresh_tag(self)
    }
}
