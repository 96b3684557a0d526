//! Common test utilities for building funnel definitions and stores.
use jougo::prelude::*;

/// Creates a node with default labels for its kind and a zeroed position.
#[allow(dead_code)]
pub fn node(id: &str, kind: PageKind) -> PageNode {
    PageNode {
        id: id.to_string(),
        label: kind.default_label(),
        button_label: kind.page_type().default_button_label().to_string(),
        position: Position::default(),
        kind,
    }
}

#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> Connection {
    Connection {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
    }
}

/// Creates the canonical clean funnel: S1 -> O1 -> T1.
#[allow(dead_code)]
pub fn create_linear_funnel() -> FunnelDefinition {
    FunnelDefinition {
        nodes: vec![
            node("S1", PageKind::SalesPage),
            node("O1", PageKind::OrderPage),
            node("T1", PageKind::ThankYou),
        ],
        edges: vec![edge("e1", "S1", "O1"), edge("e2", "O1", "T1")],
    }
}

/// Builds the same linear funnel through the live store API.
/// Returns the store plus the three created nodes.
#[allow(dead_code)]
pub fn create_linear_store() -> (FunnelStore, PageNode, PageNode, PageNode) {
    let mut store = FunnelStore::new();
    let sales = store.add_node(PageType::SalesPage, Position::new(0.0, 0.0));
    let order = store.add_node(PageType::OrderPage, Position::new(250.0, 0.0));
    let thanks = store.add_node(PageType::ThankYou, Position::new(500.0, 0.0));
    store
        .connect(&sales.id, &order.id)
        .expect("sales -> order should be legal");
    store
        .connect(&order.id, &thanks.id)
        .expect("order -> thanks should be legal");
    (store, sales, order, thanks)
}
