//! Configuration-time failures.
//!
//! Everything reachable through ordinary scrolling (overscroll, empty lists, rapid
//! reconfiguration) is clamped instead of reported. Only malformed configuration fails, and it
//! fails when it is handed to the engine, never on a later scroll.

use thiserror::Error;

/// Result alias used throughout this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Top-level error returned by [`crate::InfiniteWindow::configure`] and friends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid height spec: {0}")]
    InvalidHeightSpec(#[from] InvalidHeightSpec),
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] InvalidConfig),
}

/// Reasons a [`crate::HeightSpec`] cannot describe the list it was paired with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidHeightSpec {
    /// A per-item height sequence whose length differs from the item count.
    #[error("{heights} heights were provided for {items} items")]
    LengthMismatch { heights: usize, items: usize },
    /// A constant height of zero; no offset could address any item.
    #[error("constant item height must be non-zero")]
    ZeroConstantHeight,
    /// The host requires more items than it was given.
    #[error("at least {min} items are required, got {items}")]
    TooFewItems { items: usize, min: usize },
}

/// Reasons a [`crate::WindowConfig`] is unusable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidConfig {
    #[error("container extent must be non-zero")]
    ZeroContainerExtent,
    #[error("preload batch size must be non-zero")]
    ZeroPreloadBatchSize,
}
