//! Output formatter trait

use refinery_domain::{ComparisonResult, OutputFormat, RefinementReport};

/// Trait for formatting refinement and comparison results
pub trait OutputFormatter {
    /// Format the complete refinement report
    fn format(&self, report: &RefinementReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &RefinementReport) -> String;

    /// Format the refined prompt only (concise output)
    fn format_refined_only(&self, report: &RefinementReport) -> String;

    /// Format a variant comparison in the given format
    fn format_comparison(&self, result: &ComparisonResult, format: OutputFormat) -> String;

    /// Dispatch on `format`
    fn render(&self, report: &RefinementReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(report),
            OutputFormat::Refined => self.format_refined_only(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
