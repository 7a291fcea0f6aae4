//! Error types for the corner resizer

use crate::handle::HandleId;

/// Errors raised while resolving handles, reading styles or configuring
/// the resizer.
///
/// Pointer handlers never return these to the caller; they collapse them
/// into `InputResult::Ignored` so the element keeps its last valid size.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ResizeError {
    /// The pressed region is not a registered handle.
    #[error("unknown resize handle: {0}")]
    UnknownHandle(HandleId),

    /// A drag session is already in progress.
    #[error("a resize session is already active")]
    SessionActive,

    /// A CSS length could not be parsed as pixels.
    #[error("invalid CSS length: {0:?}")]
    InvalidLength(String),

    /// No element matched a selector.
    #[error("no element matches selector {0:?}")]
    ElementNotFound(String),

    /// Configuration JSON was rejected.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
