//! Hexadecimal helpers used for logging APDUs and writing them in tests.

use std::fmt::Write;

use crate::{Error, Result};

/// Convert a byte slice to an uppercase hex string without separators, the
/// way APDUs are usually written down.
///
/// Example: `&[0x90, 0x00]` -> `"9000"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Parse an APDU written as hex, e.g. `"80 CA FF 40 00"`.
///
/// ASCII whitespace between digits is ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = s.bytes().filter(|c| !c.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(Error::CommandFormat("hex string has odd length".into()));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair)
                .map_err(|_| Error::CommandFormat("non-ascii hex digit".into()))?;
            u8::from_str_radix(text, 16)
                .map_err(|e| Error::CommandFormat(format!("invalid hex pair '{}': {}", text, e)))
        })
        .collect()
}
