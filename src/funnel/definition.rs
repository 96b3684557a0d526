use serde::{Deserialize, Serialize};

/// The five page types a funnel can be built from.
///
/// The serialized names (`"salesPage"`, `"upsell"`, ...) are the wire names
/// used by the editor JSON format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageType {
    SalesPage,
    OrderPage,
    Upsell,
    Downsell,
    ThankYou,
}

impl PageType {
    /// All page types, in palette order.
    pub const ALL: [PageType; 5] = [
        PageType::SalesPage,
        PageType::OrderPage,
        PageType::Upsell,
        PageType::Downsell,
        PageType::ThankYou,
    ];

    /// The wire name of this page type, as used in the editor JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::SalesPage => "salesPage",
            PageType::OrderPage => "orderPage",
            PageType::Upsell => "upsell",
            PageType::Downsell => "downsell",
            PageType::ThankYou => "thankYou",
        }
    }

    /// The default call-to-action button label for new pages of this type.
    pub fn default_button_label(&self) -> &'static str {
        match self {
            PageType::SalesPage => "Buy Now",
            PageType::OrderPage => "Complete Order",
            PageType::Upsell => "Yes, Add To My Order",
            PageType::Downsell => "No Thanks, I'll Take This Instead",
            PageType::ThankYou => "Continue",
        }
    }

    /// Whether new pages of this type receive an auto-incrementing label index.
    pub fn auto_increments(&self) -> bool {
        matches!(self, PageType::Upsell | PageType::Downsell)
    }
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of a live page node. Upsell and downsell pages carry the
/// auto-increment index their default label was minted from; the other
/// variants need no extra data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageKind {
    SalesPage,
    OrderPage,
    Upsell { index: u32 },
    Downsell { index: u32 },
    ThankYou,
}

impl PageKind {
    /// The page type this kind belongs to.
    pub fn page_type(&self) -> PageType {
        match self {
            PageKind::SalesPage => PageType::SalesPage,
            PageKind::OrderPage => PageType::OrderPage,
            PageKind::Upsell { .. } => PageType::Upsell,
            PageKind::Downsell { .. } => PageType::Downsell,
            PageKind::ThankYou => PageType::ThankYou,
        }
    }

    /// The default display label for a page of this kind.
    pub fn default_label(&self) -> String {
        match self {
            PageKind::SalesPage => "Sales Page".to_string(),
            PageKind::OrderPage => "Order Page".to_string(),
            PageKind::Upsell { index } => format!("Upsell {}", index),
            PageKind::Downsell { index } => format!("Downsell {}", index),
            PageKind::ThankYou => "Thank You".to_string(),
        }
    }

    /// The auto-increment index, for the kinds that carry one.
    pub fn index(&self) -> Option<u32> {
        match self {
            PageKind::Upsell { index } | PageKind::Downsell { index } => Some(*index),
            _ => None,
        }
    }
}

/// A 2D canvas coordinate. Mutated by drag operations; irrelevant to
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single funnel page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageNode {
    /// Opaque unique id, assigned at creation and stable for the node lifetime.
    pub id: String,
    pub kind: PageKind,
    /// Human-readable display label; defaults per kind, independently editable.
    pub label: String,
    /// Call-to-action label shown on the page's button.
    pub button_label: String,
    pub position: Position,
}

impl PageNode {
    /// The page type of this node.
    pub fn page_type(&self) -> PageType {
        self.kind.page_type()
    }
}

/// A directed connection from one page's output to another page's input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// The complete, canonical definition of a funnel graph.
///
/// Insertion order of both sequences is preserved for stable iteration and
/// export; it carries no semantic meaning.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunnelDefinition {
    pub nodes: Vec<PageNode>,
    pub edges: Vec<Connection>,
}

impl FunnelDefinition {
    /// Looks up a live node by id.
    pub fn node(&self, id: &str) -> Option<&PageNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Looks up a live edge by id.
    pub fn edge(&self, id: &str) -> Option<&Connection> {
        self.edges.iter().find(|e| e.id == id)
    }
}
