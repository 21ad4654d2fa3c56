//! Per-item batch processing.
//!
//! A batch never aborts on a bad item: every input produces exactly one
//! [`Outcome`], in input order, and the caller decides what to do with the
//! failures. Items are processed in parallel with rayon.

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::address::{self, AddressError, CanonicalIpv6Address, ErrorKind, HexPairResult, Ipv6Prefix};

/// Which batch operation produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Expand,
    Generate,
    Convert,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Expand => write!(f, "expand"),
            Operation::Generate => write!(f, "generate"),
            Operation::Convert => write!(f, "convert"),
        }
    }
}

/// Result of expanding one address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandRecord {
    pub input: String,
    pub canonical: CanonicalIpv6Address,
}

/// One generated address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRecord {
    pub address: String,
}

/// Result of converting one IPv4 address
pub type ConvertRecord = HexPairResult;

/// A rejected item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFailure {
    pub input: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl ItemFailure {
    fn new(input: &str, error: &AddressError) -> Self {
        Self {
            input: input.to_string(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// Outcome of a single batch item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome<T> {
    Ok(T),
    Error(ItemFailure),
}

impl<T> Outcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }
}

/// Ordered outcomes of one batch operation
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport<T> {
    pub operation: Operation,
    pub items: Vec<Outcome<T>>,
}

impl<T> BatchReport<T> {
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|item| item.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn has_failures(&self) -> bool {
        self.items.iter().any(|item| !item.is_ok())
    }

    pub fn successes(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter_map(|item| match item {
            Outcome::Ok(record) => Some(record),
            Outcome::Error(_) => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &ItemFailure> {
        self.items.iter().filter_map(|item| match item {
            Outcome::Ok(_) => None,
            Outcome::Error(failure) => Some(failure),
        })
    }

    fn log_summary(&self) {
        info!(
            "{}: {} item(s), {} succeeded, {} failed",
            self.operation,
            self.total(),
            self.succeeded(),
            self.failed()
        );
    }
}

/// Apply `op` to every input in parallel, keeping input order
fn run_batch<S, T, F>(operation: Operation, inputs: &[S], op: F) -> BatchReport<T>
where
    S: AsRef<str> + Sync,
    T: Send,
    F: Fn(&str) -> Result<T, AddressError> + Sync + Send,
{
    let items = inputs
        .par_iter()
        .map(|input| {
            let input = input.as_ref();
            match op(input) {
                Ok(record) => {
                    debug!("{} '{}' succeeded", operation, input);
                    Outcome::Ok(record)
                }
                Err(e) => {
                    warn!("Skipping '{}': {}", input, e);
                    Outcome::Error(ItemFailure::new(input, &e))
                }
            }
        })
        .collect();

    let report = BatchReport { operation, items };
    report.log_summary();
    report
}

/// Expand every IPv6 address in `inputs`
pub fn expand_batch<S: AsRef<str> + Sync>(inputs: &[S]) -> BatchReport<ExpandRecord> {
    run_batch(Operation::Expand, inputs, |input| {
        Ok(ExpandRecord {
            input: input.to_string(),
            canonical: address::expand(input)?,
        })
    })
}

/// Convert every IPv4 address in `inputs`
pub fn convert_batch<S: AsRef<str> + Sync>(inputs: &[S]) -> BatchReport<ConvertRecord> {
    run_batch(Operation::Convert, inputs, |input| {
        let mut result = address::convert(input)?;
        result.input = input.to_string();
        Ok(result)
    })
}

/// Generate `count` addresses under `prefix`.
///
/// An invalid prefix yields a report holding a single failed item.
pub fn generate_batch(prefix: &str, count: usize) -> BatchReport<GenerateRecord> {
    let items = match Ipv6Prefix::parse(prefix) {
        Ok(parsed) => address::generate(&parsed, count)
            .into_iter()
            .map(|address| Outcome::Ok(GenerateRecord { address }))
            .collect(),
        Err(e) => {
            warn!("Rejected prefix '{}': {}", prefix, e);
            vec![Outcome::Error(ItemFailure::new(prefix, &e))]
        }
    };

    let report = BatchReport {
        operation: Operation::Generate,
        items,
    };
    report.log_summary();
    report
}
