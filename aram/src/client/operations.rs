// aram-rs/aram/src/client/operations.rs

use log::debug;

use super::Requester;
use crate::protocol::{Command, Response, StatusWord};
use crate::transport::Channel;
use crate::types::{DataTag, Template};
use crate::{Error, Result};

/// SELECT `aid` and collect the announced template with GET RESPONSE.
pub fn select<T: Channel>(
    requester: &mut Requester<T>,
    aid: &[u8],
    template: Template,
) -> Result<Vec<u8>> {
    let cmd = Command::select(aid, template as u8);
    let resp = requester.transmit(&cmd)?;
    get_response_chain(requester, cmd.cla, resp)
}

/// Follow `61xx` with GET RESPONSE until `90 00`, appending every chunk to
/// the body of `first`. A `6Cxx` answer is retried once with the corrected
/// length.
pub fn get_response_chain<T: Channel>(
    requester: &mut Requester<T>,
    cla: u8,
    first: Response,
) -> Result<Vec<u8>> {
    let mut data = first.data;
    let mut status = first.status;

    while status.is_bytes_remaining() {
        let resp = exchange_with_retry(
            requester,
            |le| Command::get_response(cla, le),
            status.sw2(),
        )?;
        data.extend_from_slice(&resp.data);
        status = resp.status;
    }

    if !status.is_success() {
        return Err(Error::UnexpectedStatus(status));
    }
    debug!("response chain complete: {} bytes", data.len());
    Ok(data)
}

/// GET DATA ALL, then NEXT until the applet reports nothing left.
pub fn fetch_access_rules<T: Channel>(requester: &mut Requester<T>) -> Result<Vec<u8>> {
    let cla = requester.get_data_class();
    let mut rules = Vec::new();
    let mut tag = DataTag::AllRules;

    loop {
        let resp = exchange_with_retry(requester, |le| Command::get_data(cla, tag, le), 0x00)?;
        match resp.status {
            StatusWord::SUCCESS => {
                if resp.data.is_empty() {
                    break;
                }
                rules.extend_from_slice(&resp.data);
                tag = DataTag::Next;
            }
            StatusWord::CONDITIONS_NOT_SATISFIED if tag == DataTag::Next => break,
            other => return Err(Error::UnexpectedStatus(other)),
        }
    }

    debug!("fetched {} bytes of access rules", rules.len());
    Ok(rules)
}

/// GET DATA DF20, retried once on `6Cxx`.
pub fn fetch_refresh_tag<T: Channel>(requester: &mut Requester<T>) -> Result<Vec<u8>> {
    let cla = requester.get_data_class();
    let resp = exchange_with_retry(
        requester,
        |le| Command::get_data(cla, DataTag::Refresh, le),
        0x00,
    )?;
    if !resp.status.is_success() {
        return Err(Error::UnexpectedStatus(resp.status));
    }
    Ok(resp.data)
}

/// Send `build(le)`; on `6Cxx` resend once with Le = xx.
fn exchange_with_retry<T, F>(requester: &mut Requester<T>, build: F, le: u8) -> Result<Response>
where
    T: Channel,
    F: Fn(u8) -> Command,
{
    let resp = requester.transmit(&build(le))?;
    if !resp.status.is_correct_length() {
        return Ok(resp);
    }

    let corrected = resp.status.sw2();
    debug!("retrying with le {:#04x}", corrected);
    let retry = requester.transmit(&build(corrected))?;
    if retry.status.is_correct_length() {
        return Err(Error::UnexpectedStatus(retry.status));
    }
    Ok(retry)
}
