//! # ipv6kit - Canonical and synthetic textual IP addresses
//!
//! This library canonicalizes and synthesizes textual representations of
//! IPv6 addresses, and converts IPv4 addresses into a compact hexadecimal
//! pair notation. It is aimed at keeping address records (documentation,
//! inventories) consistent instead of carrying the many equivalent
//! compressed spellings IPv6 allows.
//!
//! ## Architecture
//!
//! - `address`: the text engine (parser/validator, expander, generator,
//!   IPv4 hex converter)
//! - `batch`: order-preserving parallel batch processing with per-item
//!   success or failure
//! - `config`: YAML configuration loading and validation
//! - `report`: text and JSON rendering of batch results
//!
//! ## Example Usage
//!
//! ```rust
//! use ipv6kit::address;
//! use ipv6kit::batch;
//!
//! let canonical = address::expand("::1")?;
//! assert_eq!(canonical.to_string(), "0000:0000:0000:0000:0000:0000:0000:0001");
//!
//! let report = batch::expand_batch(&["2001:db8::1", "not-an-address"]);
//! assert_eq!(report.succeeded(), 1);
//! assert_eq!(report.failed(), 1);
//!
//! let hex = address::convert("192.0.2.1")?;
//! assert_eq!(hex.hex, "c0:21");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Address validation failures are `address::AddressError` values and stay
//! local to the item that caused them. File and serialization plumbing
//! returns `color_eyre` results with context.

pub mod address;
pub mod batch;
pub mod config;
pub mod report;
