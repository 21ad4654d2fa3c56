//! Textual IPv6/IPv4 address engine.
//!
//! Four stateless components share the types in this module:
//!
//! - `parser`: validation and tokenization
//! - `expander`: canonical 8-group expansion
//! - `generator`: random addresses under a prefix
//! - `hex`: IPv4 to compressed hex-pair conversion

pub mod error;
pub mod expander;
pub mod generator;
pub mod hex;
pub mod hextet;
pub mod parser;

// Re-export commonly used types
pub use error::{AddressError, AddressFamily, ErrorKind};
pub use expander::{expand, expand_form, CanonicalIpv6Address};
pub use generator::{generate, generate_addresses, generate_with_rng, InterfaceIdentifier, Ipv6Prefix, DEFAULT_PREFIX};
pub use hex::{convert, convert_address, HexPairResult};
pub use hextet::Hextet;
pub use parser::{is_valid_ipv4, is_valid_ipv6, parse_ipv4, parse_ipv6, Ipv4Address, Ipv6AddressForm};
