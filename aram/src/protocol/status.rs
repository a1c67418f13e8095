// aram-rs/aram/src/protocol/status.rs

use derive_more::{Display, From};

use crate::constants::{
    SW1_BYTES_REMAINING, SW1_CORRECT_LENGTH, SW_CLA_NOT_SUPPORTED, SW_CONDITIONS_NOT_SATISFIED,
    SW_INS_NOT_SUPPORTED, SW_REFERENCED_DATA_NOT_FOUND, SW_SUCCESS, SW_WRONG_LENGTH,
    SW_WRONG_P1P2,
};

/// Two-byte completion signal (SW1 SW2) closing every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
#[display(fmt = "{:04X}", _0)]
pub struct StatusWord(u16);

impl StatusWord {
    /// `90 00`
    pub const SUCCESS: Self = Self(SW_SUCCESS);
    /// `67 00`
    pub const WRONG_LENGTH: Self = Self(SW_WRONG_LENGTH);
    /// `69 85`
    pub const CONDITIONS_NOT_SATISFIED: Self = Self(SW_CONDITIONS_NOT_SATISFIED);
    /// `6A 88`
    pub const REFERENCED_DATA_NOT_FOUND: Self = Self(SW_REFERENCED_DATA_NOT_FOUND);
    /// `6B 00`
    pub const WRONG_PARAMETERS: Self = Self(SW_WRONG_P1P2);
    /// `6D 00`
    pub const INSTRUCTION_NOT_SUPPORTED: Self = Self(SW_INS_NOT_SUPPORTED);
    /// `6E 00`
    pub const CLASS_NOT_SUPPORTED: Self = Self(SW_CLA_NOT_SUPPORTED);

    /// Build from SW1 and SW2.
    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self(((sw1 as u16) << 8) | sw2 as u16)
    }

    /// Build from `SW1 << 8 | SW2`.
    pub const fn from_u16(sw: u16) -> Self {
        Self(sw)
    }

    /// `61xx`: more response bytes can be fetched with GET RESPONSE.
    pub fn bytes_remaining(count: usize, limit: usize) -> Self {
        Self::new(SW1_BYTES_REMAINING, length_hint(count, limit))
    }

    /// `6Cxx`: wrong Le, retry with the carried length.
    pub fn correct_length(available: usize, limit: usize) -> Self {
        Self::new(SW1_CORRECT_LENGTH, length_hint(available, limit))
    }

    /// `SW1 << 8 | SW2`.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// High byte.
    pub fn sw1(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Low byte; the length for `61xx` and `6Cxx`.
    pub fn sw2(&self) -> u8 {
        (self.0 & 0xff) as u8
    }

    /// SW1 SW2 as sent on the wire.
    pub fn to_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Build from SW1 SW2 as read off the wire.
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    /// True for `90 00`.
    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }

    /// True for `61xx`.
    pub fn is_bytes_remaining(&self) -> bool {
        self.sw1() == SW1_BYTES_REMAINING
    }

    /// True for `6Cxx`.
    pub fn is_correct_length(&self) -> bool {
        self.sw1() == SW1_CORRECT_LENGTH
    }
}

/// Encode a length into the single byte a status word can carry. Lengths
/// that reach the transfer limit are reported as `0x00`.
pub fn length_hint(len: usize, limit: usize) -> u8 {
    if len < limit { len as u8 } else { 0x00 }
}
