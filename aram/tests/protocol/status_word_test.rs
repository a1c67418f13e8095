#[path = "../common/mod.rs"]
mod common;

use aram::protocol::status::length_hint;
use aram::protocol::Response;
use aram::{Error, StatusWord};

#[test]
fn display_is_four_hex_digits() {
    assert_eq!(StatusWord::SUCCESS.to_string(), "9000");
    assert_eq!(StatusWord::new(0x61, 0x0C).to_string(), "610C");
    assert_eq!(StatusWord::from(0x6A88u16), StatusWord::REFERENCED_DATA_NOT_FOUND);
}

#[test]
fn length_hint_wraps_at_limit() {
    assert_eq!(length_hint(44, 256), 44);
    assert_eq!(length_hint(255, 256), 255);
    assert_eq!(length_hint(256, 256), 0);
    assert_eq!(length_hint(1000, 256), 0);
    assert_eq!(length_hint(7, 8), 7);
    assert_eq!(length_hint(8, 8), 0);
}

#[test]
fn remaining_and_correct_length() {
    let sw = StatusWord::bytes_remaining(44, 256);
    assert!(sw.is_bytes_remaining());
    assert_eq!(sw.to_bytes(), [0x61, 0x2C]);

    let sw = StatusWord::correct_length(300, 256);
    assert!(sw.is_correct_length());
    assert_eq!(sw.sw2(), 0x00);
}

#[test]
fn errors_map_to_status_words() {
    let cases = [
        (Error::ClassNotSupported { cla: 0x01 }, 0x6E00),
        (Error::InstructionNotSupported { ins: 0xB0 }, 0x6D00),
        (Error::WrongParameters { p1: 0xFF, p2: 0x50 }, 0x6B00),
        (Error::ConditionsNotSatisfied, 0x6985),
        (Error::IncorrectLength { available: 0xE8 }, 0x6CE8),
        (Error::ReferencedDataNotFound, 0x6A88),
        (Error::CommandFormat("x".into()), 0x6700),
    ];
    for (err, sw) in cases {
        assert_eq!(err.status_word().as_u16(), sw, "{}", err);
    }
}

#[test]
fn response_decode_splits_trailer() -> anyhow::Result<()> {
    let resp = Response::decode(&hex::decode("0102612C")?)?;
    assert_eq!(resp.data, vec![0x01, 0x02]);
    assert_eq!(resp.status, StatusWord::new(0x61, 0x2C));
    Ok(())
}
