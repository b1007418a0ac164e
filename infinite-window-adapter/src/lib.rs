//! Host-facing utilities for the `infinite-window` crate.
//!
//! The `infinite-window` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides the small, framework-neutral layer a host component sits on:
//!
//! - [`InfiniteOptions`]: the option surface (`element_height`, `container_height`,
//!   `preload_batch_size`, ...) with defaults resolved from the container height
//! - host callbacks for infinite loading, raw scroll events and `is_scrolling` changes
//! - [`Controller`]: owns the pending quiet timer and produces a [`RenderPlan`]
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod options;

#[cfg(test)]
mod tests;

pub use controller::{Controller, RenderPlan};
pub use options::{
    DEFAULT_MIN_ITEM_COUNT, InfiniteLoadCallback, InfiniteOptions, ScrollCallback,
    ScrollingChangeCallback,
};
