// aram-rs/aram/src/protocol/response.rs

use crate::protocol::parser::split_status;
use crate::protocol::status::StatusWord;
use crate::Result;

/// Response APDU: body bytes followed by the status word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Body bytes, possibly empty
    pub data: Vec<u8>,
    /// Trailing SW1 SW2
    pub status: StatusWord,
}

impl Response {
    /// Response with a body.
    pub fn new(data: Vec<u8>, status: StatusWord) -> Self {
        Self { data, status }
    }

    /// Empty body with `90 00`.
    pub fn success() -> Self {
        Self::status_only(StatusWord::SUCCESS)
    }

    /// Empty body with `status`.
    pub fn status_only(status: StatusWord) -> Self {
        Self {
            data: Vec::new(),
            status,
        }
    }

    /// Wire form: body then SW1 SW2.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() + 2);
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&self.status.to_bytes());
        out
    }

    /// Split raw response bytes. Fails if the status word is missing.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let (body, sw) = split_status(bytes)?;
        Ok(Self {
            data: body.to_vec(),
            status: StatusWord::from_u16(sw),
        })
    }
}
