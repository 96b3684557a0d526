use super::{Severity, ValidationIssue};
use crate::funnel::{Connection, PageNode, PageType};
use ahash::AHashMap;

/// The core rule pass over a single funnel graph.
///
/// Degree lookups are built once from a single pass over the edge list, then
/// every rule reads them. Edge endpoints that reference no live node still
/// count toward the maps; they key entries no node pass ever looks up, so a
/// partially corrupted import degrades to silence instead of a crash.
pub(super) struct RuleEngine<'a> {
    nodes: &'a [PageNode],
    outgoing: AHashMap<&'a str, u32>,
    incoming: AHashMap<&'a str, u32>,
}

impl<'a> RuleEngine<'a> {
    pub(super) fn new(nodes: &'a [PageNode], edges: &'a [Connection]) -> Self {
        let mut outgoing: AHashMap<&'a str, u32> = AHashMap::new();
        let mut incoming: AHashMap<&'a str, u32> = AHashMap::new();
        for edge in edges {
            *outgoing.entry(edge.source.as_str()).or_insert(0) += 1;
            *incoming.entry(edge.target.as_str()).or_insert(0) += 1;
        }
        Self {
            nodes,
            outgoing,
            incoming,
        }
    }

    /// Runs every rule and returns the issues in their deterministic order:
    /// per-node rules in node iteration order, then the graph-level
    /// entry-point rule.
    pub(super) fn run(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for node in self.nodes {
            self.check_terminal_source(node, &mut issues);
            self.check_sales_page_flow(node, &mut issues);
            self.check_orphan(node, &mut issues);
        }
        self.check_entry_points(&mut issues);

        issues
    }

    fn out_degree(&self, id: &str) -> u32 {
        self.outgoing.get(id).copied().unwrap_or(0)
    }

    fn in_degree(&self, id: &str) -> u32 {
        self.incoming.get(id).copied().unwrap_or(0)
    }

    /// A Thank You page is a terminal: any outgoing connection is a hard
    /// structural error. Not constructible through the legality checker, but
    /// imported data may bypass it.
    fn check_terminal_source(&self, node: &PageNode, issues: &mut Vec<ValidationIssue>) {
        if node.page_type() == PageType::ThankYou && self.out_degree(&node.id) > 0 {
            issues.push(ValidationIssue::error(
                format!("terminal-outgoing:{}", node.id),
                format!("\"{}\" should not have outgoing connections", node.label),
                Some(node.id.clone()),
            ));
        }
    }

    /// A sales page should lead to exactly one next step. Zero and many are
    /// mutually exclusive per node, so at most one of these fires.
    fn check_sales_page_flow(&self, node: &PageNode, issues: &mut Vec<ValidationIssue>) {
        if node.page_type() != PageType::SalesPage {
            return;
        }
        match self.out_degree(&node.id) {
            0 => issues.push(ValidationIssue::warning(
                format!("sales-unlinked:{}", node.id),
                format!("\"{}\" should connect to an Order Page", node.label),
                Some(node.id.clone()),
            )),
            1 => {}
            _ => issues.push(ValidationIssue::warning(
                format!("sales-fanout:{}", node.id),
                format!(
                    "\"{}\" has multiple outgoing connections (typically should have one)",
                    node.label
                ),
                Some(node.id.clone()),
            )),
        }
    }

    /// Fires for any node with zero degree on both sides, in a graph that has
    /// more than one node. Applies to every page type and may fire alongside
    /// the type-specific rules; a terminal with one incoming edge and no
    /// outgoing edges is correct, not orphaned.
    fn check_orphan(&self, node: &PageNode, issues: &mut Vec<ValidationIssue>) {
        if self.nodes.len() > 1
            && self.out_degree(&node.id) == 0
            && self.in_degree(&node.id) == 0
        {
            issues.push(ValidationIssue::warning(
                format!("orphan:{}", node.id),
                format!("\"{}\" is not connected to any other node", node.label),
                Some(node.id.clone()),
            ));
        }
    }

    /// Graph-level rule, emitted at most once: more than one sales page, of
    /// which at least one has no incoming edges.
    fn check_entry_points(&self, issues: &mut Vec<ValidationIssue>) {
        let sales_pages: Vec<&PageNode> = self
            .nodes
            .iter()
            .filter(|n| n.page_type() == PageType::SalesPage)
            .collect();

        if sales_pages.len() > 1 && sales_pages.iter().any(|n| self.in_degree(&n.id) == 0) {
            issues.push(ValidationIssue {
                id: "multiple-entry-points".to_string(),
                severity: Severity::Warning,
                message: "Multiple starting points detected. Consider having only one Sales Page as entry."
                    .to_string(),
                node_id: None,
            });
        }
    }
}
