// aram-rs/aram/src/session/dispatcher.rs

use log::{debug, warn};

use super::{Chunker, Delivery, TransferCursor};
use crate::catalog::Catalog;
use crate::config::AppletConfig;
use crate::constants::{CLA_PROPRIETARY, INS_GET_DATA, INS_GET_RESPONSE};
use crate::protocol::{Command, Response};
use crate::types::{DataTag, Selector, Template};
use crate::{Error, Result};

/// What an incoming command asks for, before any parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// SELECT of this applet's AID
    Select,
    /// GET RESPONSE
    Continue,
    /// GET DATA
    RetrieveByTag,
    /// Anything else
    Unsupported,
}

/// Routes commands to catalog payloads and drives the [`Chunker`].
///
/// The dispatcher holds no state of its own; the transfer cursor is lent
/// to every call.
pub struct Dispatcher<'a, C: Catalog + ?Sized> {
    aid: &'a [u8],
    catalog: &'a C,
    chunker: Chunker,
}

impl<'a, C: Catalog + ?Sized> Dispatcher<'a, C> {
    /// Borrow `config` and `catalog` for one exchange. Fails with
    /// [`Error::InvalidConfig`] if `config` does not validate.
    pub fn new(config: &'a AppletConfig, catalog: &'a C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            aid: &config.aid,
            catalog,
            chunker: Chunker::new(config.transfer_limit)?,
        })
    }

    /// Decide which handler `cmd` goes to.
    pub fn classify(&self, cmd: &Command) -> Route {
        if cmd.is_select_of(self.aid) {
            return Route::Select;
        }
        match cmd.ins {
            INS_GET_RESPONSE => Route::Continue,
            INS_GET_DATA => Route::RetrieveByTag,
            _ => Route::Unsupported,
        }
    }

    /// Answer one command.
    pub fn dispatch(&self, cursor: &mut TransferCursor, cmd: &Command) -> Result<Response> {
        let route = self.classify(cmd);
        debug!(
            "dispatch {:?}: cla={:#04x} ins={:#04x} p1={:#04x} p2={:#04x}",
            route, cmd.cla, cmd.ins, cmd.p1, cmd.p2
        );

        match route {
            Route::Select => self.select(cursor, cmd),
            Route::Continue => self.continue_transfer(cursor, cmd),
            Route::RetrieveByTag => {
                cursor.clear();
                self.retrieve_by_tag(cursor, cmd)
            }
            Route::Unsupported => {
                cursor.clear();
                Err(Error::InstructionNotSupported { ins: cmd.ins })
            }
        }
    }

    fn select(&self, cursor: &mut TransferCursor, cmd: &Command) -> Result<Response> {
        let template = Template::from_p2(cmd.p2)?;
        cursor.reset();

        if template == Template::Proprietary {
            return Ok(Response::success());
        }

        let payload = self
            .catalog
            .lookup(Selector::Template(template))
            .ok_or(Error::ReferencedDataNotFound)?;
        let status = self.chunker.begin(cursor, cmd.cla, payload);
        Ok(Response::status_only(status))
    }

    fn continue_transfer(&self, cursor: &mut TransferCursor, cmd: &Command) -> Result<Response> {
        if cmd.cla != cursor.owning_class() {
            warn!(
                "get response class {:#04x} does not own the transfer ({:#04x})",
                cmd.cla,
                cursor.owning_class()
            );
            cursor.clear();
            return Err(Error::ClassNotSupported { cla: cmd.cla });
        }
        self.chunker
            .send_chunk(cursor, cmd.expected_length(), Delivery::Continuation)
    }

    fn retrieve_by_tag(&self, cursor: &mut TransferCursor, cmd: &Command) -> Result<Response> {
        if cmd.cla & CLA_PROPRIETARY == 0 {
            return Err(Error::ClassNotSupported { cla: cmd.cla });
        }
        let tag = DataTag::new(cmd.p1, cmd.p2).ok_or(Error::WrongParameters {
            p1: cmd.p1,
            p2: cmd.p2,
        })?;

        let delivery = match tag {
            DataTag::AllRules => {
                let rules = self.lookup(DataTag::AllRules)?;
                // a rejected Le must not disturb an enumeration in progress
                if !rules.is_empty() {
                    self.chunker
                        .checked_request(rules.len(), cmd.expected_length())?;
                }
                cursor.start_enumeration(rules.clone());
                cursor.install(cmd.cla, rules);
                Delivery::Enumerated
            }
            DataTag::Next => {
                self.ensure_enumeration_current(cursor)?;
                if !cursor.resume_enumeration(cmd.cla) {
                    return Err(Error::ConditionsNotSatisfied);
                }
                Delivery::Enumerated
            }
            DataTag::Refresh => {
                let marker = self.lookup(DataTag::Refresh)?;
                cursor.install(cmd.cla, marker);
                Delivery::Tagged
            }
        };

        let result = self
            .chunker
            .send_chunk(cursor, cmd.expected_length(), delivery);
        cursor.clear();
        result
    }

    fn lookup(&self, tag: DataTag) -> Result<crate::types::Payload> {
        self.catalog
            .lookup(Selector::Tag(tag))
            .ok_or(Error::ReferencedDataNotFound)
    }

    /// Drop an enumeration whose payload the catalog no longer serves.
    fn ensure_enumeration_current(&self, cursor: &mut TransferCursor) -> Result<()> {
        let Some(enumeration) = cursor.enumeration() else {
            return Err(Error::ConditionsNotSatisfied);
        };
        let current = self.catalog.lookup(Selector::Tag(DataTag::AllRules));
        if current.is_some_and(|p| p.same_as(enumeration.payload())) {
            return Ok(());
        }
        warn!("access rules changed during enumeration; restart with GET DATA ALL");
        cursor.end_enumeration();
        Err(Error::ConditionsNotSatisfied)
    }
}
