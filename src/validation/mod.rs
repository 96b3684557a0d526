use crate::funnel::{Connection, PageNode};
use serde::{Deserialize, Serialize};

mod engine;

use engine::RuleEngine;

/// How serious a validation finding is.
///
/// `Error` marks a structurally invalid graph (violates a hard rule the
/// legality checker would have refused, so it can only arise from imported
/// data). `Warning` marks a structurally suspicious but permitted graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// One structural finding, derived fresh from the graph on every run and
/// never stored across graph changes.
///
/// Issue ids are deterministic (a fixed per-rule prefix plus the node id for
/// node-tagged rules), so repeated runs over the same graph produce stable,
/// de-duplicable ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub id: String,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
}

impl ValidationIssue {
    pub(crate) fn error(id: String, message: String, node_id: Option<String>) -> Self {
        Self {
            id,
            severity: Severity::Error,
            message,
            node_id,
        }
    }

    pub(crate) fn warning(id: String, message: String, node_id: Option<String>) -> Self {
        Self {
            id,
            severity: Severity::Warning,
            message,
            node_id,
        }
    }
}

/// Validates a funnel graph and returns its issues in deterministic order.
///
/// Pure function of `(nodes, edges)`: the same graph always yields the same
/// issue list in the same order, and the graph is never mutated. Callable
/// with any snapshot, including one that is not currently loaded in a store
/// (e.g. to inspect a file before committing an import).
pub fn validate(nodes: &[PageNode], edges: &[Connection]) -> Vec<ValidationIssue> {
    RuleEngine::new(nodes, edges).run()
}
