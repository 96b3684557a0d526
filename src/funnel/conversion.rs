use super::definition::FunnelDefinition;
use crate::error::FunnelConversionError;

/// A trait for editor data models that can be converted into a canonical
/// `FunnelDefinition`.
///
/// This is the extension point that keeps the core format-agnostic: the
/// bundled `ui::UiFunnel` implements it for the stock editor JSON, and a
/// custom frontend can implement it for its own payload shape without the
/// core knowing about either.
///
/// # Example
///
/// ```rust,no_run
/// use jougo::prelude::*;
/// use jougo::error::FunnelConversionError;
///
/// struct MyPage { id: String }
/// struct MyFunnel { pages: Vec<MyPage> }
///
/// impl IntoFunnel for MyFunnel {
///     fn into_funnel(self) -> std::result::Result<FunnelDefinition, FunnelConversionError> {
///         let nodes = self
///             .pages
///             .into_iter()
///             .map(|page| PageNode {
///                 id: page.id,
///                 kind: PageKind::SalesPage,
///                 label: "Sales Page".to_string(),
///                 button_label: "Buy Now".to_string(),
///                 position: Position::default(),
///             })
///             .collect();
///
///         Ok(FunnelDefinition { nodes, edges: vec![] })
///     }
/// }
/// ```
pub trait IntoFunnel {
    /// Consumes the object and converts it into a canonical funnel graph.
    fn into_funnel(self) -> Result<FunnelDefinition, FunnelConversionError>;
}
