#[path = "../common/mod.rs"]
mod common;

use aram::catalog::templates::{DEFAULT_REFRESH_TAG, SELECT_RESPONSE_FCP};
use aram::constants::ARAM_AID;
use aram::test_support::{applet_with_rules, loopback_requester, sequential_bytes};
use aram::{Applet, Error, Requester, StatusWord, Template};

use common::fixtures::large_fci_catalog;

#[test]
fn select_reassembles_template() -> anyhow::Result<()> {
    common::init_logging();
    let mut req = loopback_requester(Applet::default());
    let fcp = req.select(&ARAM_AID, Template::Fcp)?;
    assert_eq!(fcp, SELECT_RESPONSE_FCP);
    Ok(())
}

#[test]
fn select_follows_multi_chunk_chain() -> anyhow::Result<()> {
    let mut req = loopback_requester(Applet::new(large_fci_catalog(700)));
    let fci = req.select(&ARAM_AID, Template::Fci)?;
    assert_eq!(fci, sequential_bytes(700));
    // SELECT, then 256 + 256 + 188
    assert_eq!(req.channel().exchanges(), 4);
    Ok(())
}

#[test]
fn proprietary_select_returns_nothing() -> anyhow::Result<()> {
    let mut req = loopback_requester(Applet::default());
    assert!(req.select(&ARAM_AID, Template::Proprietary)?.is_empty());
    Ok(())
}

#[test]
fn select_of_unknown_aid_fails() {
    let mut req = loopback_requester(Applet::default());
    match req.select(&[0xA0, 0x00, 0x00, 0x00, 0x09], Template::Fci) {
        Err(Error::UnexpectedStatus(sw)) => {
            assert_eq!(sw, StatusWord::INSTRUCTION_NOT_SUPPORTED)
        }
        other => panic!("expected UnexpectedStatus, got: {:?}", other),
    }
}

#[test]
fn fetch_rules_across_enumeration() -> anyhow::Result<()> {
    common::init_logging();
    let mut req = loopback_requester(applet_with_rules(1000, 256)?);
    let rules = req.fetch_access_rules()?;
    assert_eq!(rules, sequential_bytes(1000));
    assert!(req.channel().applet().cursor().enumeration().is_none());
    Ok(())
}

#[test]
fn fetch_rules_of_various_sizes() -> anyhow::Result<()> {
    for len in [1usize, 3, 255, 256, 257, 512, 513] {
        let mut req = loopback_requester(applet_with_rules(len, 256)?);
        assert_eq!(req.fetch_access_rules()?, sequential_bytes(len), "len {}", len);
    }
    Ok(())
}

#[test]
fn fetch_rules_with_small_limit() -> anyhow::Result<()> {
    let mut req = loopback_requester(applet_with_rules(100, 16)?);
    assert_eq!(req.fetch_access_rules()?, sequential_bytes(100));
    Ok(())
}

#[test]
fn fetch_refresh_tag_over_loopback() -> anyhow::Result<()> {
    let mut req = loopback_requester(Applet::default());
    assert_eq!(req.fetch_refresh_tag()?, DEFAULT_REFRESH_TAG);
    Ok(())
}

#[test]
fn wrong_get_data_class_is_reported() {
    let mut req = loopback_requester(Applet::default()).with_get_data_class(0x00);
    match req.fetch_access_rules() {
        Err(Error::UnexpectedStatus(sw)) => assert_eq!(sw, StatusWord::CLASS_NOT_SUPPORTED),
        other => panic!("expected UnexpectedStatus, got: {:?}", other),
    }
}

#[test]
fn requester_hands_back_channel() {
    let req: Requester<_> = loopback_requester(Applet::default());
    let applet = req.into_inner().into_applet();
    assert!(!applet.cursor().is_pending());
}

#[test]
fn empty_template_selects_to_nothing() -> anyhow::Result<()> {
    let catalog = aram::CatalogBuilder::with_defaults()
        .template(Template::Fmd, Vec::<u8>::new())
        .build();
    let mut req = loopback_requester(Applet::new(catalog));
    assert!(req.select(&ARAM_AID, Template::Fmd)?.is_empty());
    // SELECT announces 61 00, one GET RESPONSE closes it
    assert_eq!(req.channel().exchanges(), 2);
    Ok(())
}
