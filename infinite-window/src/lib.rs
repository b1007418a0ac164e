//! A headless windowing engine for very large scrollable lists.
//!
//! For host-facing options, callbacks and a timer-owning controller, see the
//! `infinite-window-adapter` crate.
//!
//! Given a scroll offset, the engine computes the minimal contiguous range of items a host must
//! materialize plus two spacer extents reserving the space of everything above and below it.
//! The pieces:
//! - [`HeightModel`]: constant or per-item heights, prefix sums, offset → index lookup
//!   (`O(log n)` for variable heights via [`search::index_at_offset`])
//! - [`WindowEngine`]: block-quantized window computation; recomputes only when the scroll
//!   offset crosses into another block
//! - [`InfiniteLoadTrigger`]: requests more content once per approach to the end
//! - [`ScrollStateTracker`]: debounced `is_scrolling` flag
//! - [`InfiniteWindow`]: ties the above together behind `configure` / `on_scroll` /
//!   `notify_load_complete`
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - container extent and item heights
//! - scroll offsets and timestamps
//! - a way to schedule (or poll) the quiet timer
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod error;
mod height;
mod options;
pub mod search;
mod state;
mod tracker;
mod trigger;
mod types;
mod window;


pub use engine::{WindowEngine, compute_window};
pub use error::{Error, InvalidConfig, InvalidHeightSpec, Result};
pub use height::HeightModel;
pub use options::{DEFAULT_SCROLL_QUIET_MS, WindowConfig};
pub use state::{FrameState, ScrollState};
pub use tracker::ScrollStateTracker;
pub use trigger::InfiniteLoadTrigger;
pub use types::{HeightSpec, LoadState, QuietTimer, ScrollUpdate, WindowDescriptor};
pub use window::InfiniteWindow;
