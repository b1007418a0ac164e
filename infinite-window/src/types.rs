use alloc::vec::Vec;
use core::ops::Range;

/// How tall the items of a list are.
///
/// Replaced wholesale whenever the host reconfigures; the engine never patches it in place.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeightSpec {
    /// Every item has the same height.
    Constant(u32),
    /// One height per item, in item order.
    Variable(Vec<u32>),
}

impl From<u32> for HeightSpec {
    fn from(height: u32) -> Self {
        Self::Constant(height)
    }
}

impl From<Vec<u32>> for HeightSpec {
    fn from(heights: Vec<u32>) -> Self {
        Self::Variable(heights)
    }
}

impl From<&[u32]> for HeightSpec {
    fn from(heights: &[u32]) -> Self {
        Self::Variable(heights.to_vec())
    }
}

/// The slice of the list a host must materialize, plus the space reserved around it.
///
/// Invariant: `top_spacer + extent(start_index..end_index) + bottom_spacer == total height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowDescriptor {
    pub start_index: usize,
    /// One past the last materialized item; the window is `start_index..end_index`.
    pub end_index: usize,
    /// Height of the unmaterialized items above the window.
    pub top_spacer: u64,
    /// Height of the unmaterialized items below the window.
    pub bottom_spacer: u64,
}

impl WindowDescriptor {
    /// The window of an empty list.
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
        top_spacer: 0,
        bottom_spacer: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }

    /// Inclusive index of the last materialized item.
    pub fn last_index(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end_index - 1)
        }
    }
}

/// Whether an infinite load is outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
}

impl LoadState {
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// A quiet timer the host should schedule after a scroll event.
///
/// When `deadline_ms` is reached, hand `generation` back to
/// [`crate::ScrollStateTracker::on_timer`]. Firings for an older generation are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuietTimer {
    pub generation: u64,
    pub deadline_ms: u64,
}

impl QuietTimer {
    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.deadline_ms
    }
}

/// Everything a host needs after feeding one scroll offset into [`crate::InfiniteWindow`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollUpdate {
    pub window: WindowDescriptor,
    /// `true` when this event landed in a new block and the window was recomputed.
    pub recomputed: bool,
    pub is_scrolling: bool,
    /// `true` exactly once per approach to the end of the list.
    pub load_requested: bool,
    pub load_state: LoadState,
    pub quiet_timer: QuietTimer,
}
