//! Walk a requester through a full session against an in-process applet.
//!
//! Usage:
//!   RUST_LOG=trace cargo run -p aram --example loopback_session -- [RULES_LEN] [TRANSFER_LIMIT]

use aram::constants::ARAM_AID;
use aram::test_support::{applet_with_rules, loopback_requester};
use aram::{Result, Template, utils};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rules_len = args.next().and_then(|s| s.parse().ok()).unwrap_or(1000usize);
    let limit = args.next().and_then(|s| s.parse().ok()).unwrap_or(256usize);

    let applet = applet_with_rules(rules_len, limit)?;
    let mut req = loopback_requester(applet);

    for template in [Template::Fci, Template::Fcp, Template::Fmd] {
        let body = req.select(&ARAM_AID, template)?;
        println!("{:?}: {}", template, utils::bytes_to_hex(&body));
    }

    let rules = req.fetch_access_rules()?;
    println!(
        "access rules: {} bytes (transfer limit {})",
        rules.len(),
        limit
    );
    if rules.len() > 32 {
        println!("  head: {}...", utils::bytes_to_hex(&rules[..32]));
    } else {
        println!("  {}", utils::bytes_to_hex(&rules));
    }

    let refresh = req.fetch_refresh_tag()?;
    println!("refresh tag: {}", utils::bytes_to_hex(&refresh));
    println!("exchanges: {}", req.channel().exchanges());

    Ok(())
}
