//! # Jougo - Funnel Graph Modeling and Validation Engine
//!
//! **Jougo** is the headless core of a visual funnel editor: a canonical
//! graph model of e-commerce page flows (sales page, order page, upsell,
//! downsell, thank-you) wired together by directed connections, plus the
//! pure rule engines that keep that graph honest. Structural problems are
//! surfaced as issues, never enforced by blocking the user.
//!
//! ## Core Workflow
//!
//! The engine is designed to be frontend-agnostic. It operates on a
//! canonical `FunnelDefinition`; the bundled `ui` module speaks the stock
//! editor JSON, and any other frontend can plug in via the `IntoFunnel`
//! trait. The primary workflow is:
//!
//! 1.  **Own state in a `FunnelStore`**: one store instance per canvas. All
//!     mutations (add, connect, delete, clear, import) go through it, and
//!     every committed mutation lands a snapshot in the undo/redo history.
//! 2.  **Let the legality checker arbitrate connections**: `connect` runs the
//!     candidate edge through `rules::check_connection` and hands rejected
//!     attempts back to the caller with the user-facing reason.
//! 3.  **Validate on demand**: `validation::validate` is a pure function of
//!     `(nodes, edges)` — call it whenever current issues are needed; nothing
//!     is cached or tracked behind the scenes.
//!
//! ## Quick Start
//!
//! ```rust
//! use jougo::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let mut store = FunnelStore::new();
//!
//!     let sales = store.add_node(PageType::SalesPage, Position::new(0.0, 0.0));
//!     let order = store.add_node(PageType::OrderPage, Position::new(250.0, 0.0));
//!     let thanks = store.add_node(PageType::ThankYou, Position::new(500.0, 0.0));
//!
//!     store.connect(&sales.id, &order.id)?;
//!     store.connect(&order.id, &thanks.id)?;
//!
//!     // A linear sales -> order -> thank-you funnel is structurally clean.
//!     let issues = store.validate();
//!     println!("{}", IssueFormatter::format_report(&issues));
//!     assert!(issues.is_empty());
//!
//!     // Connections are arbitrated, not enforced by panics.
//!     let rejected = store.connect(&thanks.id, &sales.id);
//!     assert_eq!(rejected, Err(ConnectError::TerminalSource));
//!
//!     store.undo();
//!     assert!(store.can_redo());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod funnel;
pub mod prelude;
pub mod report;
pub mod rules;
pub mod store;
pub mod ui;
pub mod validation;
