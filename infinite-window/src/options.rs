use crate::error::InvalidConfig;

/// Default time `is_scrolling` stays raised after the last scroll event.
pub const DEFAULT_SCROLL_QUIET_MS: u64 = 150;

/// Configuration for [`crate::WindowEngine`] and [`crate::InfiniteWindow`].
///
/// All extents are in the same unit as item heights (logical pixels, or rows for TUIs).
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfig {
    /// Visible extent of the scroll container. Must be non-zero.
    pub container_extent: u32,

    /// Size of the blocks the scroll axis is partitioned into. Must be non-zero.
    ///
    /// The window is only recomputed when the scroll offset crosses into another block.
    pub preload_batch_size: u32,

    /// Extra extent materialized above and below the current block.
    pub preload_additional_extent: u32,

    /// Distance from the end of the content at which an infinite load is requested.
    ///
    /// `None` disables the load trigger.
    pub infinite_load_begin_offset: Option<u64>,

    /// How long `is_scrolling` stays raised after the last scroll event.
    pub scroll_quiet_ms: u64,
}

impl WindowConfig {
    /// Creates a config for a container of `container_extent`, with every other field at its
    /// default (see [`Self::default_preload_batch_size`] and
    /// [`Self::default_preload_additional_extent`]).
    pub fn new(container_extent: u32) -> Self {
        Self {
            container_extent,
            preload_batch_size: Self::default_preload_batch_size(container_extent),
            preload_additional_extent: Self::default_preload_additional_extent(container_extent),
            infinite_load_begin_offset: None,
            scroll_quiet_ms: DEFAULT_SCROLL_QUIET_MS,
        }
    }

    /// Half the container extent, and never zero.
    pub fn default_preload_batch_size(container_extent: u32) -> u32 {
        (container_extent / 2).max(1)
    }

    /// One full container extent.
    pub fn default_preload_additional_extent(container_extent: u32) -> u32 {
        container_extent
    }

    pub fn with_preload_batch_size(mut self, preload_batch_size: u32) -> Self {
        self.preload_batch_size = preload_batch_size;
        self
    }

    pub fn with_preload_additional_extent(mut self, preload_additional_extent: u32) -> Self {
        self.preload_additional_extent = preload_additional_extent;
        self
    }

    pub fn with_infinite_load_begin_offset(mut self, offset: Option<u64>) -> Self {
        self.infinite_load_begin_offset = offset;
        self
    }

    pub fn with_scroll_quiet_ms(mut self, quiet_ms: u64) -> Self {
        self.scroll_quiet_ms = quiet_ms;
        self
    }

    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.container_extent == 0 {
            return Err(InvalidConfig::ZeroContainerExtent);
        }
        if self.preload_batch_size == 0 {
            return Err(InvalidConfig::ZeroPreloadBatchSize);
        }
        Ok(())
    }
}
