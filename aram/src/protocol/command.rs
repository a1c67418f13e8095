// aram-rs/aram/src/protocol/command.rs

use crate::constants::{APDU_HEADER_LEN, INS_GET_DATA, INS_GET_RESPONSE, INS_SELECT, SELECT_BY_NAME};
use crate::protocol::parser::{byte_at, ensure_len, slice_at};
use crate::types::DataTag;
use crate::{Error, Result};

/// Short command APDU.
///
/// Wire format: `CLA INS P1 P2 [Lc data] [Le]`. Extended lengths are not
/// supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Class byte
    pub cla: u8,
    /// Instruction byte
    pub ins: u8,
    /// Parameter 1
    pub p1: u8,
    /// Parameter 2
    pub p2: u8,
    /// Command body, without Lc
    pub data: Vec<u8>,
    /// Expected response length; `None` when absent
    pub le: Option<u8>,
}

impl Command {
    /// Header-only command (case 1).
    pub fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: Vec::new(),
            le: None,
        }
    }

    /// Attach a command body.
    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    /// Set Le; `0x00` asks for the channel maximum.
    pub fn with_le(mut self, le: u8) -> Self {
        self.le = Some(le);
        self
    }

    /// SELECT by DF name, first occurrence, requesting the given template.
    pub fn select(aid: &[u8], p2: u8) -> Self {
        Self::new(0x00, INS_SELECT, SELECT_BY_NAME, p2)
            .with_data(aid)
            .with_le(0x00)
    }

    /// GET RESPONSE for `le` bytes of the pending transfer.
    pub fn get_response(cla: u8, le: u8) -> Self {
        Self::new(cla, INS_GET_RESPONSE, 0x00, 0x00).with_le(le)
    }

    /// GET DATA for `tag`.
    pub fn get_data(cla: u8, tag: DataTag, le: u8) -> Self {
        let [p1, p2] = tag.to_be_bytes();
        Self::new(cla, INS_GET_DATA, p1, p2).with_le(le)
    }

    /// Le as carried on the wire; an absent Le reads as `0x00`.
    pub fn expected_length(&self) -> u8 {
        self.le.unwrap_or(0x00)
    }

    /// True when this command is a SELECT by name of `aid`.
    pub fn is_select_of(&self, aid: &[u8]) -> bool {
        self.ins == INS_SELECT && self.p1 == SELECT_BY_NAME && self.data == aid
    }

    /// Parse a short command APDU (ISO 7816-4 cases 1 to 4).
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        ensure_len(bytes, APDU_HEADER_LEN)?;
        let mut cmd = Self::new(bytes[0], bytes[1], bytes[2], bytes[3]);

        match bytes.len() {
            // case 1
            APDU_HEADER_LEN => {}
            // case 2
            5 => cmd.le = Some(bytes[4]),
            n => {
                let lc = byte_at(bytes, APDU_HEADER_LEN)? as usize;
                if lc == 0 {
                    return Err(Error::CommandFormat("extended length not supported".into()));
                }
                let body = n - APDU_HEADER_LEN - 1;
                if body == lc {
                    // case 3
                } else if body == lc + 1 {
                    // case 4
                    cmd.le = Some(bytes[n - 1]);
                } else {
                    return Err(Error::InvalidLength {
                        expected: APDU_HEADER_LEN + 1 + lc,
                        actual: n,
                    });
                }
                cmd.data = slice_at(bytes, APDU_HEADER_LEN + 1, lc)?.to_vec();
            }
        }

        Ok(cmd)
    }

    /// Encode into wire bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.data.len() > 0xFF {
            return Err(Error::InvalidLength {
                expected: 0xFF,
                actual: self.data.len(),
            });
        }

        let mut out = Vec::with_capacity(APDU_HEADER_LEN + 2 + self.data.len());
        out.extend_from_slice(&[self.cla, self.ins, self.p1, self.p2]);
        if !self.data.is_empty() {
            out.push(self.data.len() as u8);
            out.extend_from_slice(&self.data);
        }
        if let Some(le) = self.le {
            out.push(le);
        }
        Ok(out)
    }
}
