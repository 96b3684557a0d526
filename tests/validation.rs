//! Tests for the validation engine: rule matrix, ordering and tolerance.
mod common;
use common::*;
use jougo::prelude::*;

#[test]
fn test_valid_linear_funnel_has_no_issues() {
    let funnel = create_linear_funnel();
    let issues = validate(&funnel.nodes, &funnel.edges);
    assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
}

#[test]
fn test_terminal_with_outgoing_edge_is_an_error() {
    let mut funnel = create_linear_funnel();
    funnel.edges.push(edge("e3", "T1", "S1"));

    let issues = validate(&funnel.nodes, &funnel.edges);
    assert_eq!(issues.len(), 1, "expected exactly one issue: {:?}", issues);

    let issue = &issues[0];
    assert_eq!(issue.severity, Severity::Error);
    assert_eq!(
        issue.message,
        "\"Thank You\" should not have outgoing connections"
    );
    assert_eq!(issue.node_id.as_deref(), Some("T1"));
}

#[test]
fn test_issue_ids_are_stable_and_derived_from_node_ids() {
    let mut funnel = create_linear_funnel();
    funnel.edges.push(edge("e3", "T1", "S1"));

    let first = validate(&funnel.nodes, &funnel.edges);
    let second = validate(&funnel.nodes, &funnel.edges);
    assert_eq!(first, second);
    assert!(first[0].id.ends_with("T1"), "got id: {}", first[0].id);
}

#[test]
fn test_orphan_pair_warns_per_node() {
    let funnel = FunnelDefinition {
        nodes: vec![
            node("S1", PageKind::SalesPage),
            node("O1", PageKind::OrderPage),
        ],
        edges: vec![],
    };

    let issues = validate(&funnel.nodes, &funnel.edges);
    let orphans: Vec<_> = issues
        .iter()
        .filter(|i| i.message.contains("is not connected to any other node"))
        .collect();

    assert_eq!(orphans.len(), 2);
    assert_eq!(orphans[0].node_id.as_deref(), Some("S1"));
    assert_eq!(orphans[1].node_id.as_deref(), Some("O1"));
    assert!(orphans.iter().all(|i| i.severity == Severity::Warning));

    // The edgeless sales page additionally trips its own flow rule; the
    // orphan rule fires alongside type-specific rules, not instead of them.
    assert_eq!(issues.len(), 3);
    assert_eq!(
        issues[0].message,
        "\"Sales Page\" should connect to an Order Page"
    );
}

#[test]
fn test_single_node_is_never_an_orphan() {
    let funnel = FunnelDefinition {
        nodes: vec![node("O1", PageKind::OrderPage)],
        edges: vec![],
    };
    let issues = validate(&funnel.nodes, &funnel.edges);
    assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
}

#[test]
fn test_terminal_with_only_incoming_edges_is_clean() {
    // Zero outgoing alone is not an orphan; a fed thank-you page is correct.
    let funnel = create_linear_funnel();
    let issues = validate(&funnel.nodes, &funnel.edges);
    assert!(issues.iter().all(|i| i.node_id.as_deref() != Some("T1")));
}

#[test]
fn test_sales_page_fanout_warns_once() {
    let mut funnel = create_linear_funnel();
    funnel.nodes.push(node("U1", PageKind::Upsell { index: 1 }));
    funnel.edges.push(edge("e3", "S1", "U1"));

    let issues = validate(&funnel.nodes, &funnel.edges);
    assert_eq!(issues.len(), 1, "expected exactly one issue: {:?}", issues);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert_eq!(
        issues[0].message,
        "\"Sales Page\" has multiple outgoing connections (typically should have one)"
    );
}

#[test]
fn test_multiple_entry_points_emitted_once_globally() {
    let funnel = FunnelDefinition {
        nodes: vec![
            node("S1", PageKind::SalesPage),
            node("S2", PageKind::SalesPage),
            node("S3", PageKind::SalesPage),
            node("O1", PageKind::OrderPage),
        ],
        edges: vec![
            edge("e1", "S1", "O1"),
            edge("e2", "S2", "O1"),
            edge("e3", "S3", "O1"),
        ],
    };

    let issues = validate(&funnel.nodes, &funnel.edges);
    let entry_warnings: Vec<_> = issues
        .iter()
        .filter(|i| i.message.contains("Multiple starting points"))
        .collect();

    // Three qualifying sales pages still produce a single graph-level issue.
    assert_eq!(entry_warnings.len(), 1);
    assert_eq!(entry_warnings[0].node_id, None);
    assert_eq!(entry_warnings[0].id, "multiple-entry-points");
    assert_eq!(
        entry_warnings[0].message,
        "Multiple starting points detected. Consider having only one Sales Page as entry."
    );
}

#[test]
fn test_no_entry_point_warning_when_all_sales_pages_are_fed() {
    let funnel = FunnelDefinition {
        nodes: vec![
            node("S1", PageKind::SalesPage),
            node("S2", PageKind::SalesPage),
            node("O1", PageKind::OrderPage),
            node("O2", PageKind::OrderPage),
        ],
        edges: vec![
            edge("e1", "O1", "S1"),
            edge("e2", "O2", "S2"),
            edge("e3", "S1", "O2"),
            edge("e4", "S2", "O1"),
        ],
    };

    let issues = validate(&funnel.nodes, &funnel.edges);
    assert!(
        issues
            .iter()
            .all(|i| !i.message.contains("Multiple starting points")),
        "unexpected entry-point warning: {:?}",
        issues
    );
}

#[test]
fn test_single_sales_page_never_triggers_entry_point_warning() {
    let funnel = FunnelDefinition {
        nodes: vec![
            node("S1", PageKind::SalesPage),
            node("O1", PageKind::OrderPage),
        ],
        edges: vec![edge("e1", "S1", "O1")],
    };
    let issues = validate(&funnel.nodes, &funnel.edges);
    assert!(
        issues
            .iter()
            .all(|i| !i.message.contains("Multiple starting points"))
    );
}

#[test]
fn test_dangling_edges_are_tolerated() {
    // Edges referencing node ids absent from the node list must not crash
    // validation or surface issues for nonexistent nodes.
    let funnel = FunnelDefinition {
        nodes: vec![node("S1", PageKind::SalesPage)],
        edges: vec![
            edge("e1", "S1", "ghost-a"),
            edge("e2", "ghost-b", "ghost-c"),
        ],
    };

    let issues = validate(&funnel.nodes, &funnel.edges);
    // S1's outgoing edge counts even though its target is dead, so the
    // sales-flow rule stays quiet; the ghosts report nothing.
    assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
}

#[test]
fn test_validation_is_idempotent() {
    let mut funnel = create_linear_funnel();
    funnel.nodes.push(node("U1", PageKind::Upsell { index: 1 }));
    funnel.edges.push(edge("e3", "T1", "U1"));

    let first = validate(&funnel.nodes, &funnel.edges);
    let second = validate(&funnel.nodes, &funnel.edges);
    assert_eq!(first, second);
}

#[test]
fn test_validation_does_not_mutate_the_graph() {
    let funnel = create_linear_funnel();
    let before = funnel.clone();
    let _ = validate(&funnel.nodes, &funnel.edges);
    assert_eq!(funnel, before);
}

#[test]
fn test_custom_labels_flow_into_messages() {
    let mut funnel = FunnelDefinition {
        nodes: vec![
            node("S1", PageKind::SalesPage),
            node("O1", PageKind::OrderPage),
        ],
        edges: vec![edge("e1", "O1", "S1")],
    };
    funnel.nodes[0].label = "Spring Promo".to_string();

    let issues = validate(&funnel.nodes, &funnel.edges);
    assert!(
        issues
            .iter()
            .any(|i| i.message == "\"Spring Promo\" should connect to an Order Page"),
        "got: {:?}",
        issues
    );
}
