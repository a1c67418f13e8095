// aram-rs/aram/src/error.rs

use thiserror::Error;

use crate::protocol::status::StatusWord;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// CLA not accepted: GET RESPONSE from a class that does not own the
    /// transfer, or GET DATA without the proprietary bit.
    #[error("class not supported: cla={cla:#04x}")]
    ClassNotSupported {
        /// Offending class byte
        cla: u8,
    },

    /// Instruction the applet does not implement.
    #[error("instruction not supported: ins={ins:#04x}")]
    InstructionNotSupported {
        /// Offending instruction byte
        ins: u8,
    },

    /// Unknown SELECT template or GET DATA tag.
    #[error("wrong parameters: p1={p1:#04x}, p2={p2:#04x}")]
    WrongParameters {
        /// P1 as received
        p1: u8,
        /// P2 as received
        p2: u8,
    },

    /// GET DATA NEXT without an enumeration in progress.
    #[error("conditions of use not satisfied")]
    ConditionsNotSatisfied,

    /// Le exceeded what can be delivered; `available` is the value the
    /// requester should retry with (`0` meaning the full transfer limit).
    #[error("incorrect expected length: {available:#04x} bytes available")]
    IncorrectLength {
        /// Le to retry with
        available: u8,
    },

    /// The catalog has no payload for the selector.
    #[error("referenced data not found")]
    ReferencedDataNotFound,

    /// Byte count does not match the framing.
    #[error("invalid command length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Length the framing calls for
        expected: usize,
        /// Length received
        actual: usize,
    },

    /// Framing that cannot be parsed at all.
    #[error("command format error: {0}")]
    CommandFormat(String),

    /// Requester side: the applet answered with a status the exchange
    /// cannot continue from.
    #[error("unexpected status word: {0}")]
    UnexpectedStatus(StatusWord),

    /// Requester side: the channel failed.
    #[error("channel error: {0}")]
    Channel(String),

    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Status word reported to the requester for this error.
    pub fn status_word(&self) -> StatusWord {
        match self {
            Self::ClassNotSupported { .. } => StatusWord::CLASS_NOT_SUPPORTED,
            Self::InstructionNotSupported { .. } => StatusWord::INSTRUCTION_NOT_SUPPORTED,
            Self::WrongParameters { .. } => StatusWord::WRONG_PARAMETERS,
            Self::ConditionsNotSatisfied => StatusWord::CONDITIONS_NOT_SATISFIED,
            Self::IncorrectLength { available } => {
                StatusWord::new(crate::constants::SW1_CORRECT_LENGTH, *available)
            }
            Self::ReferencedDataNotFound => StatusWord::REFERENCED_DATA_NOT_FOUND,
            Self::InvalidLength { .. } | Self::CommandFormat(_) => StatusWord::WRONG_LENGTH,
            Self::UnexpectedStatus(sw) => *sw,
            // Host-side failures never reach the wire; report them as a
            // generic length/format problem if they do.
            Self::Channel(_) | Self::InvalidConfig(_) => StatusWord::WRONG_LENGTH,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
