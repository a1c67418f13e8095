// aram-rs/aram/src/catalog/templates.rs
//! Built-in payloads used by [`StaticCatalog::default`](super::StaticCatalog).

/// FCI returned on SELECT (P2 b4b3 = 00)
pub const SELECT_RESPONSE_FCI: [u8; 12] = [
    0x6F, 0x0A, 0x64, 0x03, 0x53, 0x01, 0x01, 0x62, 0x03, 0x85, 0x01, 0x01,
];

/// FCP returned on SELECT (P2 b4b3 = 01)
pub const SELECT_RESPONSE_FCP: [u8; 28] = [
    0x62, 0x1A, 0x82, 0x02, 0x38, 0x21, 0x83, 0x02, 0x00, 0x00, 0x8A, 0x01, 0x00, 0x8C, 0x02,
    0x20, 0x00, 0xC6, 0x09, 0x90, 0x01, 0x00, 0x83, 0x01, 0x00, 0x83, 0x01, 0x00,
];

/// FMD returned on SELECT (P2 b4b3 = 10)
pub const SELECT_RESPONSE_FMD: [u8; 9] = [0x64, 0x07, 0x53, 0x05, 0x01, 0x02, 0x03, 0x04, 0x05];

/// Response-ALL-REF-AR-DO with no rules
pub const EMPTY_ALL_REF_AR_DO: [u8; 3] = [0xFF, 0x40, 0x00];

/// Refresh-Tag-DO carrying an all-zero 8 byte tag
pub const DEFAULT_REFRESH_TAG: [u8; 11] = [
    0xDF, 0x20, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];
