use crate::error::FunnelConversionError;
use crate::funnel::{
    Connection, FunnelDefinition, IntoFunnel, PageKind, PageNode, PageType, Position,
};
use serde::{Deserialize, Serialize};

/// UI node payload: display labels plus the duplicated page type the editor
/// keeps inside `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiNodeData {
    pub label: String,
    #[serde(rename = "nodeType")]
    pub node_type: PageType,
    #[serde(rename = "buttonLabel")]
    pub button_label: String,
    /// Auto-increment index; present only for upsell/downsell pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

/// UI node with id, page type, canvas position and data payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: PageType,
    pub position: Position,
    pub data: UiNodeData,
}

/// UI edge connecting two nodes by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Complete UI funnel structure, matching the editor JSON exactly for
/// round-tripping between the store and persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiFunnel {
    pub nodes: Vec<UiNode>,
    pub edges: Vec<UiEdge>,
}

impl UiFunnel {
    /// Parses an editor JSON payload.
    ///
    /// Rejects any payload where `nodes` or `edges` is missing or not a
    /// sequence; the rejection is a returned error, never a panic, and the
    /// caller's existing state is untouched.
    pub fn from_json(json: &str) -> Result<Self, FunnelConversionError> {
        serde_json::from_str(json).map_err(|e| FunnelConversionError::JsonParseError(e.to_string()))
    }

    /// Serializes back to the editor JSON shape.
    pub fn to_json(&self) -> Result<String, FunnelConversionError> {
        serde_json::to_string(self)
            .map_err(|e| FunnelConversionError::JsonSerializeError(e.to_string()))
    }

    /// Serializes back to the editor JSON shape, pretty-printed.
    pub fn to_json_pretty(&self) -> Result<String, FunnelConversionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FunnelConversionError::JsonSerializeError(e.to_string()))
    }
}

impl IntoFunnel for UiFunnel {
    fn into_funnel(self) -> Result<FunnelDefinition, FunnelConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|ui_node| {
                // The top-level `type` is authoritative; `data.nodeType` is a
                // display-layer duplicate. A missing index on an imported
                // upsell/downsell is tolerated as 0.
                let kind = match ui_node.node_type {
                    PageType::SalesPage => PageKind::SalesPage,
                    PageType::OrderPage => PageKind::OrderPage,
                    PageType::Upsell => PageKind::Upsell {
                        index: ui_node.data.index.unwrap_or(0),
                    },
                    PageType::Downsell => PageKind::Downsell {
                        index: ui_node.data.index.unwrap_or(0),
                    },
                    PageType::ThankYou => PageKind::ThankYou,
                };
                PageNode {
                    id: ui_node.id,
                    kind,
                    label: ui_node.data.label,
                    button_label: ui_node.data.button_label,
                    position: ui_node.position,
                }
            })
            .collect();

        let edges = self
            .edges
            .into_iter()
            .map(|ui_edge| Connection {
                id: ui_edge.id,
                source: ui_edge.source,
                target: ui_edge.target,
            })
            .collect();

        Ok(FunnelDefinition { nodes, edges })
    }
}

impl From<&FunnelDefinition> for UiFunnel {
    fn from(funnel: &FunnelDefinition) -> Self {
        let nodes = funnel
            .nodes
            .iter()
            .map(|node| UiNode {
                id: node.id.clone(),
                node_type: node.page_type(),
                position: node.position,
                data: UiNodeData {
                    label: node.label.clone(),
                    node_type: node.page_type(),
                    button_label: node.button_label.clone(),
                    index: node.kind.index(),
                },
            })
            .collect();

        let edges = funnel
            .edges
            .iter()
            .map(|edge| UiEdge {
                id: edge.id.clone(),
                source: edge.source.clone(),
                target: edge.target.clone(),
            })
            .collect();

        Self { nodes, edges }
    }
}
