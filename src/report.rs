//! Text and JSON rendering of analysis reports
//!
//! Pure rendering sinks: they consume computed summaries and produce
//! strings, nothing else. Chart rendering is out of scope; the tables
//! here expose the raw numbers a plotting frontend would draw from.

use crate::analysis::{CorrelationMatrix, DescribeStats};
use crate::dataset::{Category, Field, Record};
use crate::pipeline::AnalysisReport;
use std::fmt::Write;

fn render_head(out: &mut String, head: &[Record]) {
    let _ = writeln!(out, "First {} rows:", head.len());
    let _ = writeln!(
        out,
        "{:<14}  {:>6}  {:>6}  {:>8}",
        "CATEGORY", "LIKES", "SHARES", "COMMENTS"
    );
    for record in head {
        let _ = writeln!(
            out,
            "{:<14}  {:>6}  {:>6}  {:>8}",
            record.category, record.likes, record.shares, record.comments
        );
    }
}

fn render_describe(out: &mut String, describe: &[(Field, DescribeStats)]) {
    let _ = writeln!(out, "Descriptive statistics:");
    let _ = writeln!(
        out,
        "{:<12}  {:>6}  {:>8}  {:>8}  {:>7}  {:>7}  {:>7}  {:>7}  {:>7}",
        "FIELD", "COUNT", "MEAN", "STD", "MIN", "25%", "50%", "75%", "MAX"
    );
    for (field, s) in describe {
        let _ = writeln!(
            out,
            "{:<12}  {:>6}  {:>8.2}  {:>8.2}  {:>7.1}  {:>7.1}  {:>7.1}  {:>7.1}  {:>7.1}",
            field, s.count, s.mean, s.std, s.min, s.q25, s.q50, s.q75, s.max
        );
    }
}

fn render_null_counts(out: &mut String, nulls: &[(Field, usize)]) {
    let _ = writeln!(out, "Null counts:");
    for (field, count) in nulls {
        let _ = writeln!(out, "{:<12}  {:>6}", field, count);
    }
}

fn render_aggregation(out: &mut String, title: &str, rows: &[(Category, f64)]) {
    let _ = writeln!(out, "{}:", title);
    for (category, mean) in rows {
        let _ = writeln!(out, "{:<14}  {:>8.2}", category, mean);
    }
}

fn render_correlation(out: &mut String, matrix: &CorrelationMatrix) {
    let _ = writeln!(out, "Correlation matrix:");
    let _ = write!(out, "{:<12}", "");
    for field in &matrix.fields {
        let _ = write!(out, "  {:>10}", field);
    }
    let _ = writeln!(out);
    for (field, row) in matrix.fields.iter().zip(&matrix.values) {
        let _ = write!(out, "{:<12}", field);
        for v in row {
            let _ = write!(out, "  {:>10.4}", v);
        }
        let _ = writeln!(out);
    }
}

/// Render the full report as plain text tables
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Engagement analysis — {} records, seed {}",
        report.record_count, report.seed
    );
    let _ = writeln!(out);
    render_head(&mut out, &report.head);
    let _ = writeln!(out);
    render_describe(&mut out, &report.describe);
    let _ = writeln!(out);
    render_null_counts(&mut out, &report.null_counts);
    let _ = writeln!(out);
    render_correlation(&mut out, &report.correlation);
    let _ = writeln!(out);
    render_aggregation(&mut out, "Average likes by category", &report.likes_by_category);
    let _ = writeln!(out);
    render_aggregation(
        &mut out,
        "Average engagement by category",
        &report.engagement_by_category,
    );
    out
}

/// Render the full report as pretty-printed JSON
pub fn render_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Render a single aggregation listing as plain text
pub fn render_means(title: &str, rows: &[(Category, f64)]) -> String {
    let mut out = String::new();
    render_aggregation(&mut out, title, rows);
    out
}

/// Render a describe table plus null counts as plain text
pub fn render_summary(describe: &[(Field, DescribeStats)], nulls: &[(Field, usize)]) -> String {
    let mut out = String::new();
    render_describe(&mut out, describe);
    let _ = writeln!(out);
    render_null_counts(&mut out, nulls);
    out
}

/// Render a correlation matrix as plain text
pub fn render_matrix(matrix: &CorrelationMatrix) -> String {
    let mut out = String::new();
    render_correlation(&mut out, matrix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{run, RunOptions};

    fn report() -> AnalysisReport {
        run(&RunOptions::new().with_records(100).with_seed(42)).unwrap()
    }

    #[test]
    fn test_text_report_sections() {
        let text = render_text(&report());
        assert!(text.contains("First 5 rows:"));
        assert!(text.contains("Descriptive statistics:"));
        assert!(text.contains("Null counts:"));
        assert!(text.contains("Correlation matrix:"));
        assert!(text.contains("Average likes by category:"));
        assert!(text.contains("Average engagement by category:"));
    }

    #[test]
    fn test_text_report_lists_all_categories() {
        let text = render_text(&report());
        for category in crate::dataset::Category::ALL {
            assert!(text.contains(category.as_str()));
        }
    }

    #[test]
    fn test_json_report_roundtrips() {
        let report = report();
        let json = render_json(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.record_count, report.record_count);
        assert_eq!(parsed.likes_by_category, report.likes_by_category);
    }

    #[test]
    fn test_render_means_formats_rows() {
        let rows = vec![(crate::dataset::Category::Tech, 123.456)];
        let text = render_means("Average likes by category", &rows);
        assert!(text.contains("Tech"));
        assert!(text.contains("123.46"));
    }
}
