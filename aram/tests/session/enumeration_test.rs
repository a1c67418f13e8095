#[path = "../common/mod.rs"]
mod common;

use std::cell::RefCell;

use aram::catalog::templates::DEFAULT_REFRESH_TAG;
use aram::catalog::{Catalog, StaticCatalog};
use aram::test_support::sequential_bytes;
use aram::{Applet, DataTag, Payload, Selector};

use common::fixtures::*;

#[test]
fn thousand_bytes_of_rules() {
    common::init_logging();
    let mut applet = applet_with_rules(1000);
    let expected = sequential_bytes(1000);

    let out = applet.process_apdu(&get_data_all_apdu(0x00));
    let (body, sw) = split(&out);
    assert_eq!(body, &expected[..256]);
    assert_eq!(sw, 0x9000);
    assert_eq!(applet.cursor().remaining_for_enumeration(), 744);

    for start in [256usize, 512] {
        let out = applet.process_apdu(&get_data_next_apdu(0x00));
        let (body, sw) = split(&out);
        assert_eq!(body, &expected[start..start + 256]);
        assert_eq!(sw, 0x9000);
    }

    assert_eq!(
        applet.process_apdu(&get_data_next_apdu(0x00)),
        vec![0x6C, 0xE8]
    );
    let out = applet.process_apdu(&get_data_next_apdu(0xE8));
    let (body, sw) = split(&out);
    assert_eq!(body, &expected[768..]);
    assert_eq!(sw, 0x9000);

    assert_eq!(
        applet.process_apdu(&get_data_next_apdu(0x00)),
        vec![0x69, 0x85]
    );
}

#[test]
fn short_rules_need_exact_le() {
    let mut applet = applet_with_rules(100);
    assert_eq!(applet.process_apdu(&get_data_all_apdu(0x00)), vec![0x6C, 0x64]);

    let out = applet.process_apdu(&get_data_all_apdu(0x64));
    let (body, sw) = split(&out);
    assert_eq!(body.len(), 100);
    assert_eq!(sw, 0x9000);
    assert!(applet.cursor().enumeration().is_none());
}

#[test]
fn next_before_all_is_refused() {
    let mut applet = applet_with_rules(1000);
    assert_eq!(
        applet.process_apdu(&get_data_next_apdu(0x00)),
        vec![0x69, 0x85]
    );
}

#[test]
fn default_rules_are_empty_set() {
    let mut applet = Applet::default();
    let out = applet.process_apdu(&get_data_all_apdu(0x03));
    let (body, sw) = split(&out);
    assert_eq!(body, &[0xFF, 0x40, 0x00]);
    assert_eq!(sw, 0x9000);
}

#[test]
fn refresh_tag_between_chunks() {
    let mut applet = applet_with_rules(600);
    let expected = sequential_bytes(600);
    applet.process_apdu(&get_data_all_apdu(0x00));

    let out = applet.process_apdu(&get_data_refresh_apdu(DEFAULT_REFRESH_TAG.len() as u8));
    let (body, sw) = split(&out);
    assert_eq!(body, DEFAULT_REFRESH_TAG);
    assert_eq!(sw, 0x9000);

    let out = applet.process_apdu(&get_data_next_apdu(0x00));
    let (body, _) = split(&out);
    assert_eq!(body, &expected[256..512]);
}

#[test]
fn get_data_rejects_interindustry_class() {
    let mut applet = applet_with_rules(10);
    assert_eq!(
        applet.process_apdu(&[0x00, 0xCA, 0xFF, 0x40, 0x00]),
        vec![0x6E, 0x00]
    );
}

#[test]
fn get_data_rejects_unknown_tag() {
    let mut applet = applet_with_rules(10);
    assert_eq!(
        applet.process_apdu(&[0x80, 0xCA, 0x9F, 0x7F, 0x00]),
        vec![0x6B, 0x00]
    );
}

#[test]
fn missing_refresh_tag_is_not_found() {
    let catalog = StaticCatalog::builder()
        .access_rules(vec![0xFF, 0x40, 0x00])
        .build();
    let mut applet = Applet::new(catalog);
    assert_eq!(
        applet.process_apdu(&get_data_refresh_apdu(0x00)),
        vec![0x6A, 0x88]
    );
}

/// Catalog whose rules can be swapped behind the applet's back.
struct MutableRules {
    rules: RefCell<Payload>,
}

impl Catalog for MutableRules {
    fn lookup(&self, selector: Selector) -> Option<Payload> {
        match selector {
            Selector::Tag(DataTag::AllRules) => Some(self.rules.borrow().clone()),
            _ => None,
        }
    }
}

#[test]
fn changed_rules_abort_enumeration() {
    let catalog = MutableRules {
        rules: RefCell::new(Payload::new(sequential_bytes(600))),
    };
    let mut applet = Applet::new(catalog);
    applet.process_apdu(&get_data_all_apdu(0x00));
    assert_eq!(applet.cursor().remaining_for_enumeration(), 344);

    // same bytes, new payload instance
    *applet.catalog().rules.borrow_mut() = Payload::new(sequential_bytes(600));

    assert_eq!(
        applet.process_apdu(&get_data_next_apdu(0x00)),
        vec![0x69, 0x85]
    );
    assert!(applet.cursor().enumeration().is_none());

    // a fresh ALL starts over from the new content
    let out = applet.process_apdu(&get_data_all_apdu(0x00));
    let (body, sw) = split(&out);
    assert_eq!(body.len(), 256);
    assert_eq!(sw, 0x9000);
}

#[test]
fn replaced_catalog_drops_enumeration() {
    let mut applet = applet_with_rules(600);
    applet.process_apdu(&get_data_all_apdu(0x00));
    applet.replace_catalog(rules_catalog(600));
    assert_eq!(
        applet.process_apdu(&get_data_next_apdu(0x00)),
        vec![0x69, 0x85]
    );
}

#[test]
fn rejected_all_does_not_rewind_enumeration() {
    let mut applet = applet_with_rules(100);
    let expected = sequential_bytes(100);

    let out = applet.process_apdu(&get_data_all_apdu(0x32));
    let (body, _) = split(&out);
    assert_eq!(body, &expected[..50]);

    assert_eq!(applet.process_apdu(&get_data_all_apdu(0x00)), vec![0x6C, 0x64]);
    assert_eq!(applet.cursor().remaining_for_enumeration(), 50);

    let out = applet.process_apdu(&get_data_next_apdu(0x32));
    let (body, sw) = split(&out);
    assert_eq!(body, &expected[50..]);
    assert_eq!(sw, 0x9000);
}
