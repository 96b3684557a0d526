use thiserror::Error;

/// Reasons a candidate connection can be rejected by the legality checker.
///
/// The `Display` text of each variant is the user-facing reason string the
/// editor surfaces (e.g. in a transient toast); callers propagate it rather
/// than discard it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectError {
    #[error("Invalid nodes")]
    InvalidNodes,

    #[error("Cannot connect a node to itself")]
    SelfLoop,

    #[error("Connection already exists")]
    DuplicateConnection,

    #[error("Thank You pages cannot have outgoing connections")]
    TerminalSource,
}

/// Errors that can occur when converting an editor payload into a canonical
/// `FunnelDefinition`.
#[derive(Error, Debug, Clone)]
pub enum FunnelConversionError {
    #[error("Failed to parse funnel JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to serialize funnel JSON: {0}")]
    JsonSerializeError(String),

    #[error("Invalid funnel payload: {0}")]
    ValidationError(String),
}

/// Errors that can occur while reading or writing a binary funnel archive.
#[derive(Error, Debug, Clone)]
pub enum ArchiveError {
    #[error("Archive error: {0}")]
    Generic(String),
}
