#[path = "../common/mod.rs"]
mod common;

use aram::Applet;

use common::fixtures::*;

fn applet_mid_transfer() -> Applet {
    let mut applet = Applet::new(large_fci_catalog(300));
    assert_eq!(applet.process_apdu(&select_apdu(0x00)), vec![0x61, 0x00]);
    assert!(applet.cursor().is_pending());
    applet
}

#[test]
fn unsupported_instruction_drops_transfer() {
    let mut applet = applet_mid_transfer();
    assert_eq!(
        applet.process_apdu(&[0x00, 0xB0, 0x00, 0x00, 0x10]),
        vec![0x6D, 0x00]
    );
    assert!(!applet.cursor().is_pending());
    assert_eq!(
        applet.process_apdu(&get_response_apdu(0x00, 0x00)),
        vec![0x90, 0x00]
    );
}

#[test]
fn get_response_from_other_class_drops_transfer() {
    let mut applet = applet_mid_transfer();
    assert_eq!(
        applet.process_apdu(&get_response_apdu(0x01, 0x00)),
        vec![0x6E, 0x00]
    );
    assert!(!applet.cursor().is_pending());
    assert_eq!(applet.cursor().owning_class(), 0x00);
}

#[test]
fn get_data_replaces_pending_transfer() {
    let mut applet = Applet::new(large_fci_catalog(300));
    applet.process_apdu(&select_apdu(0x00));

    let out = applet.process_apdu(&get_data_all_apdu(0x03));
    let (body, sw) = split(&out);
    assert_eq!(body, &[0xFF, 0x40, 0x00]);
    assert_eq!(sw, 0x9000);
    assert!(!applet.cursor().is_pending());
}

#[test]
fn reselect_restarts_from_the_top() {
    let mut applet = applet_mid_transfer();
    applet.process_apdu(&get_response_apdu(0x00, 0x00));
    assert_eq!(applet.cursor().offset(), 256);

    assert_eq!(applet.process_apdu(&select_apdu(0x00)), vec![0x61, 0x00]);
    assert_eq!(applet.cursor().offset(), 0);
}

#[test]
fn malformed_apdu_drops_transfer() {
    let mut applet = applet_mid_transfer();
    // Lc says 4 bytes follow, only 2 do
    assert_eq!(
        applet.process_apdu(&[0x00, 0xA4, 0x04, 0x00, 0x04, 0xA0, 0x00]),
        vec![0x67, 0x00]
    );
    assert!(!applet.cursor().is_pending());
}

#[test]
fn malformed_get_response_keeps_transfer() {
    let mut applet = applet_mid_transfer();
    assert_eq!(
        applet.process_apdu(&[0x00, 0xC0, 0x00, 0x00, 0x03, 0x01]),
        vec![0x67, 0x00]
    );
    assert!(applet.cursor().is_pending());
}

#[test]
fn select_of_other_aid_is_unsupported() {
    let mut applet = applet_mid_transfer();
    let apdu = [0x00, 0xA4, 0x04, 0x00, 0x05, 0xA0, 0x00, 0x00, 0x00, 0x03, 0x00];
    assert_eq!(applet.process_apdu(&apdu), vec![0x6D, 0x00]);
    assert!(!applet.cursor().is_pending());
}
