use crate::form::error::FormError;
use crate::form::response::ResponseMap;
use crate::report::report_model::ValidationReport;

/// Pretty-printed JSON for a validation report.
pub fn format_json_report(report: &ValidationReport) -> Result<String, FormError> {
    serde_json::to_string_pretty(report).map_err(|source| FormError::Json {
        context: format!("report for '{}'", report.form_name),
        source,
    })
}

/// Pretty-printed JSON for a response snapshot, keys in sorted order.
pub fn format_snapshot(responses: &ResponseMap) -> Result<String, FormError> {
    serde_json::to_string_pretty(responses).map_err(|source| FormError::Json {
        context: "response snapshot".to_string(),
        source,
    })
}
