use crate::error::ConnectError;
use crate::funnel::{Connection, PageNode, PageType};

/// Decides whether a candidate connection may be created.
///
/// Pure decision function: it never mutates anything, and the caller owns
/// both the edge creation on `Ok` and any user-facing notification built
/// from the returned reason on `Err`.
///
/// Checks run in a fixed order and the first failing check wins:
/// 1. either node missing
/// 2. self-loop
/// 3. duplicate `(source, target)` pair
/// 4. Thank You page as source
///
/// The ordering is observable: a self-loop on a Thank You page reports
/// `SelfLoop`, not `TerminalSource`.
pub fn check_connection(
    source: Option<&PageNode>,
    target: Option<&PageNode>,
    edges: &[Connection],
) -> Result<(), ConnectError> {
    let (Some(source), Some(target)) = (source, target) else {
        return Err(ConnectError::InvalidNodes);
    };

    if source.id == target.id {
        return Err(ConnectError::SelfLoop);
    }

    if edges
        .iter()
        .any(|e| e.source == source.id && e.target == target.id)
    {
        return Err(ConnectError::DuplicateConnection);
    }

    if source.page_type() == PageType::ThankYou {
        return Err(ConnectError::TerminalSource);
    }

    Ok(())
}
