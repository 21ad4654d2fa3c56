//! Random address synthesis under a fixed prefix.
//!
//! A prefix holds 1-4 explicit hextets and is always written `<hextets>::`.
//! Each generated address appends a fresh 64-bit interface identifier drawn
//! from the calling thread's RNG, so parallel generation never shares
//! randomness state.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::Rng;
use rayon::prelude::*;

use super::error::AddressError;
use super::hextet::Hextet;
use super::parser::parse_ipv6;

/// Documentation prefix (RFC 3849) used when none is supplied
pub const DEFAULT_PREFIX: &str = "2001:db8::";

/// Most hextets a prefix may hold; the remaining 64 bits are the identifier
pub const MAX_PREFIX_HEXTETS: usize = 4;

/// Hextets in an interface identifier (64 bits)
pub const IDENTIFIER_HEXTETS: usize = 4;

/// Normalized prefix for generated addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv6Prefix {
    groups: Vec<String>,
    hextets: Vec<Hextet>,
}

impl Ipv6Prefix {
    /// Validate and normalize prefix text.
    ///
    /// Accepted shapes: `2001:db8::` (1-4 groups ending in `::`), and exactly
    /// four groups without the marker (`2001:db8:a:b` or `2001:db8:a:b:`),
    /// which gain a trailing `::`.
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        let trimmed = text.trim();
        let lower = trimmed.to_ascii_lowercase();

        let candidate = if lower.ends_with("::") {
            lower
        } else {
            let body = lower.strip_suffix(':').unwrap_or(&lower);
            if body.split(':').count() != MAX_PREFIX_HEXTETS {
                return Err(AddressError::invalid_prefix(trimmed, "prefix must end with '::'"));
            }
            format!("{}::", body)
        };

        let form = parse_ipv6(&candidate)
            .map_err(|_| AddressError::invalid_prefix(trimmed, "not a valid IPv6 address"))?;

        let hextets = form.hextets().to_vec();
        if form.marker() != Some(hextets.len()) {
            return Err(AddressError::invalid_prefix(trimmed, "'::' must terminate the prefix"));
        }
        if hextets.is_empty() {
            return Err(AddressError::invalid_prefix(trimmed, "at least one hex group is required"));
        }
        if hextets.len() > MAX_PREFIX_HEXTETS {
            return Err(AddressError::invalid_prefix(
                trimmed,
                format!("more than {} hex groups leave no room for a 64-bit identifier", MAX_PREFIX_HEXTETS),
            ));
        }

        let groups = candidate
            .trim_end_matches(':')
            .split(':')
            .map(str::to_string)
            .collect();

        Ok(Self { groups, hextets })
    }

    pub fn hextets(&self) -> &[Hextet] {
        &self.hextets
    }

    /// Combine the prefix with an identifier into a full address.
    ///
    /// A four-group prefix already fills the upper 64 bits, so its `::` is
    /// written as a single `:` to keep the result a valid address.
    pub fn address_with(&self, identifier: &InterfaceIdentifier) -> String {
        let separator = if self.groups.len() == MAX_PREFIX_HEXTETS { ":" } else { "::" };
        format!("{}{}{}", self.groups.join(":"), separator, identifier)
    }
}

impl Default for Ipv6Prefix {
    fn default() -> Self {
        Self {
            groups: vec!["2001".to_string(), "db8".to_string()],
            hextets: vec![Hextet::new(0x2001), Hextet::new(0x0db8)],
        }
    }
}

impl FromStr for Ipv6Prefix {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv6Prefix::parse(s)
    }
}

impl fmt::Display for Ipv6Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::", self.groups.join(":"))
    }
}

/// 64 random bits rendered as four 4-digit hextets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceIdentifier {
    hextets: [Hextet; IDENTIFIER_HEXTETS],
}

impl InterfaceIdentifier {
    /// Draw four uniformly random hextets from `rng`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut hextets = [Hextet::ZERO; IDENTIFIER_HEXTETS];
        for hextet in hextets.iter_mut() {
            *hextet = Hextet::new(rng.gen::<u16>());
        }
        Self { hextets }
    }

    pub fn hextets(&self) -> &[Hextet; IDENTIFIER_HEXTETS] {
        &self.hextets
    }
}

impl fmt::Display for InterfaceIdentifier {
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

/// Generate `count` addresses under `prefix`, in parallel.
///
/// Every address draws its identifier from the worker thread's own RNG.
pub fn generate(prefix: &Ipv6Prefix, count: usize) -> Vec<String> {
    debug!("Generating {} address(es) under {}", count, prefix);
    (0..count)
        .into_par_iter()
        .map(|_| prefix.address_with(&InterfaceIdentifier::random(&mut rand::thread_rng())))
        .collect()
}

/// Generate `count` addresses sequentially from a caller-supplied RNG
pub fn generate_with_rng<R: Rng + ?Sized>(prefix: &Ipv6Prefix, count: usize, rng: &mut R) -> Vec<String> {
    (0..count)
        .map(|_| prefix.address_with(&InterfaceIdentifier::random(rng)))
        .collect()
}

/// Parse `prefix` and generate `count` addresses under it
pub fn generate_addresses(prefix: &str, count: usize) -> Result<Vec<String>, AddressError> {
    let prefix = Ipv6Prefix::parse(prefix)?;
    Ok(generate(&prefix, count))
}
