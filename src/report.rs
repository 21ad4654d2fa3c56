//! Text and JSON rendering of batch results.

use color_eyre::eyre::{Context, Result};
use serde::Serialize;

use crate::batch::{BatchReport, ConvertRecord, ExpandRecord, GenerateRecord, Operation, Outcome};

/// Report metadata included in JSON output
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub operation: Operation,
    pub generated_at: String,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

#[derive(Serialize)]
struct JsonReport<'a, T> {
    metadata: ReportMetadata,
    items: &'a [Outcome<T>],
}

/// Render a record as the text shown after `->`
pub trait TextRecord {
    /// Left-hand column; `None` for records without an input
    fn input(&self) -> Option<&str>;
    fn output(&self) -> String;
}

impl TextRecord for ExpandRecord {
    fn input(&self) -> Option<&str> {
        Some(&self.input)
    }

    fn output(&self) -> String {
        self.canonical.to_string()
    }
}

impl TextRecord for ConvertRecord {
    fn input(&self) -> Option<&str> {
        Some(&self.input)
    }

    fn output(&self) -> String {
        self.hex.clone()
    }
}

impl TextRecord for GenerateRecord {
    fn input(&self) -> Option<&str> {
        None
    }

    fn output(&self) -> String {
        self.address.clone()
    }
}

pub fn metadata<T>(report: &BatchReport<T>) -> ReportMetadata {
    ReportMetadata {
        operation: report.operation,
        generated_at: chrono::Utc::now().to_rfc3339(),
        total: report.total(),
        succeeded: report.succeeded(),
        failed: report.failed(),
    }
}

/// Generate JSON report
pub fn render_json<T: Serialize>(report: &BatchReport<T>, pretty: bool) -> Result<String> {
    let document = JsonReport {
        metadata: metadata(report),
        items: &report.items,
    };

    let json = if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    };
    json.context("Failed to serialize report to JSON")
}

/// Generate one line per item: `input -> output`, or `input -> error: message`
pub fn render_text<T: TextRecord>(report: &BatchReport<T>) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(report.items.len());

    for item in &report.items {
        let line = match item {
            Outcome::Ok(record) => match record.input() {
                Some(input) => format!("{} -> {}", input, record.output()),
                None => record.output(),
            },
            Outcome::Error(failure) => format!("{} -> error: {}", failure.input, failure.message),
        };
        lines.push(line);
    }

    lines.join("\n")
}

/// One-line summary, e.g. `3 processed, 2 succeeded, 1 failed`
pub fn summary_line<T>(report: &BatchReport<T>) -> String {
    format!(
        "{} processed, {} succeeded, {} failed",
        report.total(),
        report.succeeded(),
        report.failed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{convert_batch, expand_batch, generate_batch};

    #[test]
    fn test_render_text_mixed() {
        let report = expand_batch(&["::1", "nope"]);
        let text = render_text(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "::1 -> 0000:0000:0000:0000:0000:0000:0000:0001");
        assert!(lines[1].starts_with("nope -> error: 'nope' is not a valid IPv6 address"));
    }

    #[test]
    fn test_render_text_generate_has_no_input_column() {
        let report = generate_batch("2001:db8::", 2);
        for line in render_text(&report).lines() {
            assert!(line.starts_with("2001:db8::"));
            assert!(!line.contains("->"));
        }
    }

    #[test]
    fn test_render_json() {
        let report = convert_batch(&["192.0.2.1", "1.2.3"]);
        let json = render_json(&report, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["operation"], "convert");
        assert_eq!(value["metadata"]["total"], 2);
        assert_eq!(value["metadata"]["succeeded"], 1);
        assert_eq!(value["metadata"]["failed"], 1);
        assert!(value["metadata"]["generated_at"].is_string());
        assert_eq!(value["items"][0]["hex"], "c0:21");
        assert_eq!(value["items"][1]["status"], "error");
    }

    #[test]
    fn test_summary_line() {
        let report = expand_batch(&["::1", "::2", "bad"]);
        assert_eq!(summary_line(&report), "3 processed, 2 succeeded, 1 failed");
    }
}
