//! Expansion of IPv6 text into the canonical 8-group form.

use std::fmt;
use std::net::Ipv6Addr;

use serde::{Serialize, Serializer};

use super::error::{AddressError, AddressFamily};
use super::hextet::{Hextet, HEXTETS_PER_ADDRESS};
use super::parser::{parse_ipv6, Ipv6AddressForm};

/// Fully expanded IPv6 address: eight zero-padded lowercase hextets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalIpv6Address {
    hextets: [Hextet; HEXTETS_PER_ADDRESS],
}

impl CanonicalIpv6Address {
    pub fn hextets(&self) -> &[Hextet; HEXTETS_PER_ADDRESS] {
        &self.hextets
    }

    pub fn segments(&self) -> [u16; HEXTETS_PER_ADDRESS] {
        self.hextets.map(|h| h.value())
    }

    /// RFC 5952 compressed rendering of the same address
    pub fn to_compressed(&self) -> String {
        Ipv6Addr::from(self.segments()).to_string()
    }
}

impl From<Ipv6Addr> for CanonicalIpv6Address {
    fn from(addr: Ipv6Addr) -> Self {
        Self {
            hextets: addr.segments().map(Hextet::new),
        }
    }
}

impl fmt::Display for CanonicalIpv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, hextet) in self.hextets.iter().enumerate() {
            if i > 0 {
                write!(f, ":")?;
            }
            write!(f, "{}", hextet)?;
        }
        Ok(())
    }
}

impl Serialize for CanonicalIpv6Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Expand IPv6 text to its canonical form.
///
/// # Examples
/// ```
/// use ipv6kit::address::expand;
///
/// let canonical = expand("2001:db8::1").unwrap();
/// assert_eq!(canonical.to_string(), "2001:0db8:0000:0000:0000:0000:0000:0001");
/// ```
pub fn expand(text: &str) -> Result<CanonicalIpv6Address, AddressError> {
    let form = parse_ipv6(text)?;
    expand_form(&form)
}

/// Expand an already tokenized address.
///
/// The marker, when present, must stand for at least one zero group; without
/// a marker exactly eight hextets are required.
pub fn expand_form(form: &Ipv6AddressForm) -> Result<CanonicalIpv6Address, AddressError> {
    let invalid = || AddressError::invalid_address(form.input(), AddressFamily::V6);
    let explicit = form.hextets();

    let insertion = match form.marker() {
        Some(at) => {
            if explicit.len() >= HEXTETS_PER_ADDRESS || at > explicit.len() {
                return Err(invalid());
            }
            Some((at, HEXTETS_PER_ADDRESS - explicit.len()))
        }
        None => {
            if explicit.len() != HEXTETS_PER_ADDRESS {
                return Err(invalid());
            }
            None
        }
    };

    let mut hextets = [Hextet::ZERO; HEXTETS_PER_ADDRESS];
    let mut slot = 0;
    for (index, hextet) in explicit.iter().enumerate() {
        if let Some((at, implied)) = insertion {
            if index == at {
                slot += implied;
            }
        }
        hextets[slot] = *hextet;
        slot += 1;
    }

    Ok(CanonicalIpv6Address { hextets })
}
