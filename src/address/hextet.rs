//! The 16-bit group an IPv6 address is built from.

use std::fmt;

/// Number of hextets in a full IPv6 address
pub const HEXTETS_PER_ADDRESS: usize = 8;

/// Maximum hex digits accepted for one hextet in address text
pub const MAX_HEXTET_DIGITS: usize = 4;

/// One 16-bit group of an IPv6 address.
///
/// Accepts 1-4 hex digits of either case on input and always renders as
/// exactly four lowercase digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Hextet(u16);

impl Hextet {
    pub const ZERO: Hextet = Hextet(0);

    pub fn new(value: u16) -> Self {
        Hextet(value)
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    /// Parse a single address token such as `db8` or `FFFF`.
    ///
    /// Returns `None` for empty tokens, tokens longer than four digits, and
    /// anything outside the hex alphabet (including a leading `+`).
    pub fn parse(token: &str) -> Option<Self> {
        if token.is_empty() || token.len() > MAX_HEXTET_DIGITS {
            return None;
        }
        if !token.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u16::from_str_radix(token, 16).ok().map(Hextet)
    }
}

impl From<u16> for Hextet {
    fn from(value: u16) -> Self {
        Hextet(value)
    }
}

impl fmt::Display for Hextet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}", self.0)
    }
}
