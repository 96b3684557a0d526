use crate::error::ConnectError;
use crate::funnel::{Connection, FunnelDefinition, PageKind, PageNode, PageType, Position};
use crate::rules::check_connection;
use crate::validation::{self, ValidationIssue};
use tracing::{debug, info};
use uuid::Uuid;

mod history;

pub use history::{History, MAX_HISTORY};

/// Per-type label counters for the auto-incrementing page kinds.
///
/// Counters are monotonic for the life of the store: a retired index is never
/// handed out again, even after the node carrying it is deleted. They reset
/// only on `clear`, and `load_graph` recomputes them from the highest index
/// present in the incoming nodes.
#[derive(Debug, Default, Clone)]
struct LabelCounters {
    upsell: u32,
    downsell: u32,
}

impl LabelCounters {
    fn next_kind(&mut self, page_type: PageType) -> PageKind {
        match page_type {
            PageType::SalesPage => PageKind::SalesPage,
            PageType::OrderPage => PageKind::OrderPage,
            PageType::Upsell => {
                self.upsell += 1;
                PageKind::Upsell { index: self.upsell }
            }
            PageType::Downsell => {
                self.downsell += 1;
                PageKind::Downsell {
                    index: self.downsell,
                }
            }
            PageType::ThankYou => PageKind::ThankYou,
        }
    }

    fn recompute(funnel: &FunnelDefinition) -> Self {
        let max_index = |page_type: PageType| {
            funnel
                .nodes
                .iter()
                .filter(|n| n.page_type() == page_type)
                .filter_map(|n| n.kind.index())
                .max()
                .unwrap_or(0)
        };
        Self {
            upsell: max_index(PageType::Upsell),
            downsell: max_index(PageType::Downsell),
        }
    }
}

/// The exclusive owner of live funnel state and its mutation surface.
///
/// One store instance backs one editor canvas. Every committed mutation
/// pushes a snapshot to the history after it is fully applied; undo/redo
/// replay loads a snapshot back without recording, so replaying never grows
/// the history itself.
///
/// All reads (`nodes`, `edges`, `validate`, `export_graph`) observe a fully
/// applied state: no operation here yields mid-mutation.
#[derive(Debug)]
pub struct FunnelStore {
    funnel: FunnelDefinition,
    counters: LabelCounters,
    history: History,
}

impl FunnelStore {
    /// Creates an empty store. The initial empty graph is seeded into the
    /// history so a full undo chain lands back on it.
    pub fn new() -> Self {
        let funnel = FunnelDefinition::default();
        let mut history = History::new();
        history.record(funnel.clone());
        Self {
            funnel,
            counters: LabelCounters::default(),
            history,
        }
    }

    /// The live graph.
    pub fn funnel(&self) -> &FunnelDefinition {
        &self.funnel
    }

    /// The live node sequence, in insertion order.
    pub fn nodes(&self) -> &[PageNode] {
        &self.funnel.nodes
    }

    /// The live edge sequence, in insertion order.
    pub fn edges(&self) -> &[Connection] {
        &self.funnel.edges
    }

    /// Adds a new page of the given type at the given canvas position.
    ///
    /// Generates a fresh id and the per-type default labels, applying the
    /// auto-increment rule for upsell/downsell pages. Always succeeds.
    pub fn add_node(&mut self, page_type: PageType, position: Position) -> PageNode {
        let kind = self.counters.next_kind(page_type);
        let node = PageNode {
            id: Uuid::new_v4().to_string(),
            label: kind.default_label(),
            button_label: page_type.default_button_label().to_string(),
            position,
            kind,
        };
        // Ids are generated here, never supplied by callers. A collision is
        // a programming invariant violation, not a runtime condition.
        debug_assert!(
            !self.funnel.nodes.iter().any(|n| n.id == node.id),
            "generated node id collides with a live node"
        );
        debug!(id = %node.id, page_type = %page_type, label = %node.label, "add_node");
        self.funnel.nodes.push(node.clone());
        self.commit();
        node
    }

    /// Attempts to create a connection between two live nodes.
    ///
    /// Delegates the decision to the legality checker; on rejection the store
    /// is untouched and the reason is returned to the caller, never silently
    /// swallowed.
    pub fn connect(&mut self, source_id: &str, target_id: &str) -> Result<Connection, ConnectError> {
        check_connection(
            self.funnel.node(source_id),
            self.funnel.node(target_id),
            &self.funnel.edges,
        )?;

        let edge = Connection {
            id: Uuid::new_v4().to_string(),
            source: source_id.to_string(),
            target: target_id.to_string(),
        };
        debug!(id = %edge.id, source = %source_id, target = %target_id, "connect");
        self.funnel.edges.push(edge.clone());
        self.commit();
        Ok(edge)
    }

    /// Deletes a node, cascading to every edge that touches it.
    ///
    /// Returns `false` (and records nothing) when the id matches no live
    /// node.
    pub fn delete_node(&mut self, id: &str) -> bool {
        let before = self.funnel.nodes.len();
        self.funnel.nodes.retain(|n| n.id != id);
        if self.funnel.nodes.len() == before {
            return false;
        }

        let edges_before = self.funnel.edges.len();
        self.funnel
            .edges
            .retain(|e| e.source != id && e.target != id);
        debug!(id = %id, cascaded_edges = edges_before - self.funnel.edges.len(), "delete_node");
        self.commit();
        true
    }

    /// Deletes a single edge. Returns `false` when the id matches no live
    /// edge.
    pub fn delete_edge(&mut self, id: &str) -> bool {
        let before = self.funnel.edges.len();
        self.funnel.edges.retain(|e| e.id != id);
        if self.funnel.edges.len() == before {
            return false;
        }
        debug!(id = %id, "delete_edge");
        self.commit();
        true
    }

    /// Moves a node to a new canvas position (a committed drag).
    ///
    /// Returns `false` when the id matches no live node.
    pub fn move_node(&mut self, id: &str, position: Position) -> bool {
        let Some(node) = self.funnel.nodes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        node.position = position;
        self.commit();
        true
    }

    /// Replaces a node's display label. Returns `false` when the id matches
    /// no live node.
    pub fn set_label(&mut self, id: &str, label: &str) -> bool {
        let Some(node) = self.funnel.nodes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        node.label = label.to_string();
        self.commit();
        true
    }

    /// Replaces a node's button label. Returns `false` when the id matches
    /// no live node.
    pub fn set_button_label(&mut self, id: &str, button_label: &str) -> bool {
        let Some(node) = self.funnel.nodes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        node.button_label = button_label.to_string();
        self.commit();
        true
    }

    /// Empties the canvas and resets the label counters.
    pub fn clear(&mut self) {
        info!(
            nodes = self.funnel.nodes.len(),
            edges = self.funnel.edges.len(),
            "clear"
        );
        self.funnel = FunnelDefinition::default();
        self.counters = LabelCounters::default();
        self.commit();
    }

    /// Replaces the live state wholesale (import path).
    ///
    /// Label counters are recomputed from the maximum existing index per
    /// auto-incrementing type, so subsequently added pages continue the
    /// sequence instead of restarting or colliding. The store trusts its
    /// caller to have shape-validated the payload; dangling edge references
    /// are tolerated throughout.
    pub fn load_graph(&mut self, funnel: FunnelDefinition) {
        info!(nodes = funnel.nodes.len(), edges = funnel.edges.len(), "load_graph");
        self.counters = LabelCounters::recompute(&funnel);
        self.funnel = funnel;
        self.commit();
    }

    /// Returns an owned snapshot of the current state.
    pub fn export_graph(&self) -> FunnelDefinition {
        self.funnel.clone()
    }

    /// Validates the current state. Equivalent to calling the free
    /// `validation::validate` with the live node and edge sequences.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validation::validate(&self.funnel.nodes, &self.funnel.edges)
    }

    /// Steps back one snapshot. Returns `false` at the start of history.
    ///
    /// Replaying a snapshot fully replaces the live state before any
    /// subsequent read, and is itself never recorded.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.funnel = snapshot.clone();
        self.counters = LabelCounters::recompute(&self.funnel);
        debug!("undo");
        true
    }

    /// Steps forward one snapshot. Returns `false` at the end of history.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.funnel = snapshot.clone();
        self.counters = LabelCounters::recompute(&self.funnel);
        debug!("redo");
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Snapshot capture happens strictly after a mutation is fully applied.
    fn commit(&mut self) {
        self.history.record(self.funnel.clone());
    }
}

impl Default for FunnelStore {
    fn default() -> Self {
        Self::new()
    }
}
