// fixtures.rs: commonly used command APDUs and catalogs

use aram::catalog::{CatalogBuilder, StaticCatalog};
use aram::constants::ARAM_AID;
use aram::test_support::sequential_bytes;
use aram::{Applet, Template};

pub fn select_apdu(p2: u8) -> Vec<u8> {
    let mut apdu = vec![0x00, 0xA4, 0x04, p2, ARAM_AID.len() as u8];
    apdu.extend_from_slice(&ARAM_AID);
    apdu.push(0x00);
    apdu
}

pub fn get_response_apdu(cla: u8, le: u8) -> Vec<u8> {
    vec![cla, 0xC0, 0x00, 0x00, le]
}

pub fn get_data_all_apdu(le: u8) -> Vec<u8> {
    vec![0x80, 0xCA, 0xFF, 0x40, le]
}

pub fn get_data_next_apdu(le: u8) -> Vec<u8> {
    vec![0x80, 0xCA, 0xFF, 0x60, le]
}

pub fn get_data_refresh_apdu(le: u8) -> Vec<u8> {
    vec![0x80, 0xCA, 0xDF, 0x20, le]
}

/// Split a raw response into body and status word.
pub fn split(resp: &[u8]) -> (&[u8], u16) {
    let at = resp.len() - 2;
    (&resp[..at], u16::from_be_bytes([resp[at], resp[at + 1]]))
}

pub fn rules_catalog(len: usize) -> StaticCatalog {
    CatalogBuilder::with_defaults()
        .access_rules(sequential_bytes(len))
        .build()
}

/// Default catalog with the FCI template replaced by `len` sequential bytes.
pub fn large_fci_catalog(len: usize) -> StaticCatalog {
    CatalogBuilder::with_defaults()
        .template(Template::Fci, sequential_bytes(len))
        .build()
}

pub fn applet_with_rules(len: usize) -> Applet {
    Applet::new(rules_catalog(len))
}
