use crate::{LoadState, WindowDescriptor};

/// A lightweight, serializable snapshot of the current scroll state.
///
/// `offset` is the raw offset reported by the host, overscroll included.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
    pub is_scrolling: bool,
}

/// A combined snapshot of scroll state, load state and the last emitted window.
///
/// This is useful for hosts that render from a copy of the state instead of borrowing the
/// engine across their render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub scroll: ScrollState,
    pub load: LoadState,
    pub window: WindowDescriptor,
}
