//! IPv4 to compressed hex-pair conversion.
//!
//! Each octet is rendered as unpadded hex; octets one and two form the first
//! group and octets three and four the second. Zero compression is a literal
//! character-run collapse rather than numeric leading-zero stripping:
//!
//! * first group: every run of `0` characters shrinks to a single `0`
//! * second group: a run of `0` directly after the colon is dropped, later
//!   runs shrink to a single `0`
//!
//! The output is therefore not always a faithful hex re-encoding of the
//! address (`192.0.2.1` becomes `c0:21`).

use serde::Serialize;

use super::error::AddressError;
use super::parser::{parse_ipv4, Ipv4Address};

/// Converted address paired with its original text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexPairResult {
    pub input: String,
    pub hex: String,
}

/// Convert IPv4 text into the compressed hex-pair form
pub fn convert(text: &str) -> Result<HexPairResult, AddressError> {
    let addr = parse_ipv4(text)?;
    Ok(convert_address(&addr))
}

/// Convert an already validated address
pub fn convert_address(addr: &Ipv4Address) -> HexPairResult {
    let [a, b, c, d] = addr.octets();
    let first = format!("{:x}{:x}", a, b);
    let second = format!("{:x}{:x}", c, d);

    let hex = format!(
        "{}:{}",
        collapse_zero_runs(&first, false),
        collapse_zero_runs(&second, true)
    );

    HexPairResult {
        input: addr.input().to_string(),
        hex: hex.to_ascii_lowercase(),
    }
}

/// Collapse every maximal run of `'0'` in `group` to a single `'0'`.
///
/// With `drop_leading`, a run at the very start of the group is removed
/// entirely instead.
pub fn collapse_zero_runs(group: &str, drop_leading: bool) -> String {
    let mut out = String::with_capacity(group.len());
    let mut at_start = true;
    let mut in_run = false;

    for byte in group.bytes() {
        if byte == b'0' {
            if at_start && drop_leading {
                continue;
            }
            if !in_run {
                out.push('0');
                in_run = true;
            }
        } else {
            out.push(char::from(byte));
            at_start = false;
            in_run = false;
        }
    }

    out
}
