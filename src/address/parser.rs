//! Address text validation and tokenization.
//!
//! Validation is delegated to the standard library's address literal parsers
//! so that "valid" means exactly what `std::net` means by it. Any parser
//! failure is folded into [`AddressError::InvalidAddressFormat`]; callers never
//! see an `AddrParseError`.
//!
//! A validated IPv6 string is then tokenized into an [`Ipv6AddressForm`]: the
//! explicit hextets in order, plus the index where the `::` marker (if any)
//! implies the omitted zero groups.

use std::net::{Ipv4Addr, Ipv6Addr};

use log::debug;

use super::error::{AddressError, AddressFamily};
use super::hextet::Hextet;

/// Classification of one `:`-separated token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// Empty token produced by `::`
    Marker,
    Group(Hextet),
}

impl Token {
    fn classify(raw: &str) -> Option<Token> {
        if raw.is_empty() {
            Some(Token::Marker)
        } else {
            Hextet::parse(raw).map(Token::Group)
        }
    }
}

/// A tokenized IPv6 address prior to expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv6AddressForm {
    input: String,
    hextets: Vec<Hextet>,
    marker: Option<usize>,
}

impl Ipv6AddressForm {
    /// Build a form from explicit hextets and an optional marker position.
    ///
    /// The marker index counts explicit hextets preceding `::`.
    pub fn new(input: impl Into<String>, hextets: Vec<Hextet>, marker: Option<usize>) -> Self {
        Self {
            input: input.into(),
            hextets,
            marker,
        }
    }

    /// The text this form was parsed from, trimmed
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Explicit hextets in written order
    pub fn hextets(&self) -> &[Hextet] {
        &self.hextets
    }

    /// Position of the zero-compression marker among the explicit hextets
    pub fn marker(&self) -> Option<usize> {
        self.marker
    }
}

/// A validated dotted-quad IPv4 address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv4Address {
    input: String,
    octets: [u8; 4],
}

impl Ipv4Address {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }
}

/// Check if a string is a valid IPv6 address
pub fn is_valid_ipv6(text: &str) -> bool {
    parse_ipv6(text).is_ok()
}

/// Check if a string is a valid IPv4 address
pub fn is_valid_ipv4(text: &str) -> bool {
    parse_ipv4(text).is_ok()
}

/// Validate and tokenize an IPv6 address.
///
/// IPv4-embedded forms (`::ffff:192.0.2.1`) and zone IDs (`fe80::1%eth0`)
/// are rejected.
pub fn parse_ipv6(text: &str) -> Result<Ipv6AddressForm, AddressError> {
    let trimmed = text.trim();
    let invalid = || AddressError::invalid_address(trimmed, AddressFamily::V6);

    if trimmed.contains('.') || trimmed.contains('%') {
        return Err(invalid());
    }
    trimmed.parse::<Ipv6Addr>().map_err(|_| invalid())?;

    let form = tokenize(trimmed).ok_or_else(invalid)?;
    debug!(
        "Parsed '{}' into {} explicit hextet(s), marker at {:?}",
        trimmed,
        form.hextets.len(),
        form.marker
    );
    Ok(form)
}

/// Validate an IPv4 address and split it into octets
pub fn parse_ipv4(text: &str) -> Result<Ipv4Address, AddressError> {
    let trimmed = text.trim();
    let addr = trimmed
        .parse::<Ipv4Addr>()
        .map_err(|_| AddressError::invalid_address(trimmed, AddressFamily::V4))?;

    Ok(Ipv4Address {
        input: trimmed.to_string(),
        octets: addr.octets(),
    })
}

/// Split on `:` and classify each token.
///
/// Adjacent empty tokens (the two or three that `::` produces depending on
/// where it sits) collapse into a single marker. A second, non-adjacent marker
/// makes the text invalid.
fn tokenize(text: &str) -> Option<Ipv6AddressForm> {
    let mut hextets = Vec::with_capacity(8);
    let mut marker: Option<usize> = None;

    for raw in text.split(':') {
        match Token::classify(raw)? {
            Token::Group(hextet) => hextets.push(hextet),
            Token::Marker => match marker {
                None => marker = Some(hextets.len()),
                Some(at) if at == hextets.len() => {}
                Some(_) => return None,
            },
        }
    }

    Some(Ipv6AddressForm::new(text, hextets, marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(form: &Ipv6AddressForm) -> Vec<u16> {
        form.hextets().iter().map(|h| h.value()).collect()
    }

    #[test]
    fn test_marker_positions() {
        let leading = parse_ipv6("::1").unwrap();
        assert_eq!(values(&leading), vec![1]);
        assert_eq!(leading.marker(), Some(0));

        let trailing = parse_ipv6("2001:db8::").unwrap();
        assert_eq!(values(&trailing), vec![0x2001, 0xdb8]);
        assert_eq!(trailing.marker(), Some(2));

        let sole = parse_ipv6("::").unwrap();
        assert!(sole.hextets().is_empty());
        assert_eq!(sole.marker(), Some(0));

        let interior = parse_ipv6("2001:db8::8:800:200c:417a").unwrap();
        assert_eq!(interior.marker(), Some(2));
        assert_eq!(interior.hextets().len(), 6);
    }

    #[test]
    fn test_uncompressed_has_no_marker() {
        let form = parse_ipv6("2001:db8:0:0:1:0:0:1").unwrap();
        assert_eq!(form.marker(), None);
        assert_eq!(form.hextets().len(), 8);
    }

    #[test]
    fn test_rejects_invalid_ipv6() {
        let invalid = vec![
            "not-an-address",
            "2001:db8:::1",
            "2001::db8::1",
            "1:2:3:4:5:6:7:8:9",
            "1:2:3:4:5:6:7",
            "12345::1",
            ":1:2:3:4:5:6:7",
            "",
            "::ffff:192.0.2.1",
            "fe80::1%eth0",
        ];

        for text in invalid {
            match parse_ipv6(text) {
                Err(AddressError::InvalidAddressFormat { family, .. }) => {
                    assert_eq!(family, AddressFamily::V6, "{}", text)
                }
                other => panic!("expected InvalidAddressFormat for '{}', got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_trims_whitespace() {
        let form = parse_ipv6("  ::1\n").unwrap();
        assert_eq!(form.input(), "::1");
    }

    #[test]
    fn test_parse_ipv4() {
        let addr = parse_ipv4("192.0.2.1").unwrap();
        assert_eq!(addr.octets(), [192, 0, 2, 1]);
        assert_eq!(addr.input(), "192.0.2.1");

        for text in ["256.0.0.1", "1.2.3", "1.2.3.4.5", "a.b.c.d", "::1"] {
            assert!(
                matches!(
                    parse_ipv4(text),
                    Err(AddressError::InvalidAddressFormat { family: AddressFamily::V4, .. })
                ),
                "{} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_validity_predicates() {
        assert!(is_valid_ipv6("2001:db8::1"));
        assert!(!is_valid_ipv6("192.0.2.1"));
        assert!(is_valid_ipv4("10.0.0.1"));
        assert!(!is_valid_ipv4("2001:db8::1"));
    }
}
