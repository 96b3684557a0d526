//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! jougo crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use jougo::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load an editor payload and validate it before committing the import.
//! let json = std::fs::read_to_string("path/to/funnel.json")?;
//! let funnel = UiFunnel::from_json(&json)?.into_funnel()?;
//!
//! let issues = validate(&funnel.nodes, &funnel.edges);
//! println!("{}", IssueFormatter::format_report(&issues));
//!
//! let mut store = FunnelStore::new();
//! store.load_graph(funnel);
//! # Ok(())
//! # }
//! ```

// State ownership and mutation surface
pub use crate::store::{FunnelStore, History, MAX_HISTORY};

// Canonical graph model
pub use crate::funnel::{
    Connection, FunnelArchive, FunnelDefinition, IntoFunnel, PageKind, PageNode, PageType,
    Position,
};

// Rule engines
pub use crate::rules::check_connection;
pub use crate::validation::{Severity, ValidationIssue, validate};

// Editor wire types
pub use crate::ui::{UiEdge, UiFunnel, UiNode, UiNodeData};

// Report formatting
pub use crate::report::IssueFormatter;

// Error types
pub use crate::error::{ArchiveError, ConnectError, FunnelConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
