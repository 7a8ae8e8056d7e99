use crate::report::report_model::{FieldIssue, ValidationReport};

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a validation report for terminal output.
///
/// Produces output like:
/// ```text
/// === Form: Summer picnic RSVP ===
///
/// ✗ INVALID  (2 of 4 answered, 3 required)
///     [ERROR] #0 field_0 "Name" — required field incomplete
///     [WARN]  #2 field_2 "Notes" — text is 3 characters, shorter than minimum 10
/// ```
pub fn format_console_report(report: &ValidationReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Form: {} ===\n\n", report.form_name));

    let marker = if report.valid {
        "\u{2713} VALID"
    } else {
        "\u{2717} INVALID"
    };
    out.push_str(&format!(
        "{}  ({} of {} answered, {} required)\n",
        marker, report.answered_count, report.field_count, report.required_count
    ));

    for issue in &report.errors {
        out.push_str(&format_issue("[ERROR]", issue));
    }
    for issue in &report.shape_mismatches {
        out.push_str(&format_issue("[SHAPE]", issue));
    }
    for issue in &report.constraint_warnings {
        out.push_str(&format_issue("[WARN] ", issue));
    }

    if let Some(first) = report.first_invalid() {
        out.push_str(&format!("\nFirst invalid field: #{}\n", first));
    }

    out
}

fn format_issue(tag: &str, issue: &FieldIssue) -> String {
    format!(
        "    {} #{} {} \"{}\" \u{2014} {}\n",
        tag, issue.index, issue.field_id, issue.title, issue.message
    )
}
