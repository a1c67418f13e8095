// aram-rs/aram/src/constants.rs
//! Common protocol constants used across the crate

/// GlobalPlatform ARA-M application identifier
pub const ARAM_AID: [u8; 9] = [0xA0, 0x00, 0x00, 0x01, 0x51, 0x41, 0x43, 0x4C, 0x00];

/// Maximum number of response bytes carried by one short APDU exchange
pub const DEFAULT_TRANSFER_LIMIT: usize = 0x100;

/// Accepted AID lengths (ISO 7816-5)
pub const MIN_AID_LEN: usize = 5;
/// Longest accepted AID
pub const MAX_AID_LEN: usize = 16;

/// Command header length: CLA INS P1 P2
pub const APDU_HEADER_LEN: usize = 4;

/// Instruction codes
pub const INS_SELECT: u8 = 0xA4;
/// GET RESPONSE, the continuation instruction
pub const INS_GET_RESPONSE: u8 = 0xC0;
/// GET DATA
pub const INS_GET_DATA: u8 = 0xCA;

/// SELECT P1: select by DF name
pub const SELECT_BY_NAME: u8 = 0x04;

/// SELECT P2 bits carrying the requested response template
pub const SELECT_TEMPLATE_MASK: u8 = 0x0C;

/// CLA bit that marks a GlobalPlatform proprietary command
pub const CLA_PROPRIETARY: u8 = 0x80;

/// GET DATA tags (P1 || P2)
pub const TAG_ALL_REF_AR_DO: u16 = 0xFF40;
/// Next chunk of the access-rule enumeration
pub const TAG_NEXT: u16 = 0xFF60;
/// Refresh tag
pub const TAG_REFRESH: u16 = 0xDF20;

/// Status words
pub const SW_SUCCESS: u16 = 0x9000;
/// SW1 of `61xx`: xx more bytes available
pub const SW1_BYTES_REMAINING: u8 = 0x61;
/// SW1 of `6Cxx`: retry with Le = xx
pub const SW1_CORRECT_LENGTH: u8 = 0x6C;
/// Malformed command length
pub const SW_WRONG_LENGTH: u16 = 0x6700;
/// NEXT without an enumeration in progress
pub const SW_CONDITIONS_NOT_SATISFIED: u16 = 0x6985;
/// No catalog entry for the selector
pub const SW_REFERENCED_DATA_NOT_FOUND: u16 = 0x6A88;
/// Unknown template or tag
pub const SW_WRONG_P1P2: u16 = 0x6B00;
/// Unknown instruction
pub const SW_INS_NOT_SUPPORTED: u16 = 0x6D00;
/// Class not accepted for the instruction
pub const SW_CLA_NOT_SUPPORTED: u16 = 0x6E00;
// aram-rs/aram/src/constants.rs
