use crate::validation::{Severity, ValidationIssue};
use itertools::Itertools;

/// Formats validation issues into human-readable reports
pub struct IssueFormatter;

impl IssueFormatter {
    /// Format a single issue as a one-line entry.
    pub fn format_issue(issue: &ValidationIssue) -> String {
        match &issue.node_id {
            Some(node_id) => format!("[{}] {} (node {})", issue.severity, issue.message, node_id),
            None => format!("[{}] {}", issue.severity, issue.message),
        }
    }

    /// Format a full issue list, one entry per line, followed by a severity
    /// tally. Issues are printed in the order the engine produced them.
    pub fn format_report(issues: &[ValidationIssue]) -> String {
        if issues.is_empty() {
            return "No issues found.".to_string();
        }

        let mut result = String::new();
        for issue in issues {
            result.push_str(&Self::format_issue(issue));
            result.push('\n');
        }

        let tally = issues.iter().counts_by(|issue| issue.severity);
        let errors = tally.get(&Severity::Error).copied().unwrap_or(0);
        let warnings = tally.get(&Severity::Warning).copied().unwrap_or(0);
        result.push_str(&format!("{} error(s), {} warning(s)", errors, warnings));
        result
    }
}
