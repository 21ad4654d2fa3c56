//! Error types shared by the address components.

use serde::Serialize;
use std::fmt;

/// Address family a parse was attempted against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddressFamily {
    #[serde(rename = "IPv4")]
    V4,
    #[serde(rename = "IPv6")]
    V6,
}

impl AddressFamily {
    /// Example of the text format expected for this family
    pub fn expected_format(&self) -> &'static str {
        match self {
            AddressFamily::V4 => "four decimal octets, e.g. 192.0.2.1",
            AddressFamily::V6 => "up to eight hex groups with at most one '::', e.g. 2001:db8::1",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "IPv4"),
            AddressFamily::V6 => write!(f, "IPv6"),
        }
    }
}

/// Machine-readable error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    InvalidAddressFormat,
    InvalidPrefixFormat,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidAddressFormat => write!(f, "InvalidAddressFormat"),
            ErrorKind::InvalidPrefixFormat => write!(f, "InvalidPrefixFormat"),
        }
    }
}

/// Errors produced while validating or transforming address text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("'{input}' is not a valid {family} address (expected {})", .family.expected_format())]
    InvalidAddressFormat { input: String, family: AddressFamily },

    #[error("'{input}' is not a valid IPv6 prefix: {reason} (expected 1-4 hex groups ending in '::', e.g. 2001:db8::)")]
    InvalidPrefixFormat { input: String, reason: String },
}

impl AddressError {
    pub(crate) fn invalid_address(input: &str, family: AddressFamily) -> Self {
        AddressError::InvalidAddressFormat {
            input: input.to_string(),
            family,
        }
    }

    pub(crate) fn invalid_prefix(input: &str, reason: impl Into<String>) -> Self {
        AddressError::InvalidPrefixFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AddressError::InvalidAddressFormat { .. } => ErrorKind::InvalidAddressFormat,
            AddressError::InvalidPrefixFormat { .. } => ErrorKind::InvalidPrefixFormat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_input_and_family() {
        let err = AddressError::invalid_address("not-an-address", AddressFamily::V6);
        let msg = err.to_string();
        assert!(msg.contains("not-an-address"));
        assert!(msg.contains("IPv6"));
        assert_eq!(err.kind(), ErrorKind::InvalidAddressFormat);
    }

    #[test]
    fn test_prefix_error_kind() {
        let err = AddressError::invalid_prefix("2001::1", "interior '::'");
        assert_eq!(err.kind(), ErrorKind::InvalidPrefixFormat);
        assert!(err.to_string().contains("interior '::'"));
    }
}
