use alloc::sync::Arc;

use infinite_window::{
    DEFAULT_SCROLL_QUIET_MS, HeightSpec, InvalidConfig, InvalidHeightSpec, WindowConfig,
};

/// Fired once per approach to the end of the list.
pub type InfiniteLoadCallback = Arc<dyn Fn() + Send + Sync>;

/// Fired for every scroll event with the raw offset, before the window is advanced.
pub type ScrollCallback = Arc<dyn Fn(u64) + Send + Sync>;

/// Fired when the debounced `is_scrolling` flag changes. The argument is the new value.
pub type ScrollingChangeCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Fewest items a list accepts unless overridden.
pub const DEFAULT_MIN_ITEM_COUNT: usize = 2;

/// Host-facing options for [`crate::Controller`].
///
/// Unset optional sizes fall back to defaults derived from `container_height`; see
/// [`Self::to_window_config`]. The type is cheap to clone: callbacks are stored in `Arc`s.
#[derive(Clone)]
pub struct InfiniteOptions {
    /// A constant item height, or one height per item.
    pub element_height: HeightSpec,
    pub container_height: u32,

    /// Defaults to half of `container_height`.
    pub preload_batch_size: Option<u32>,
    /// Defaults to `container_height`.
    pub preload_additional_height: Option<u32>,

    /// Distance from the bottom at which `on_infinite_load` fires. `None` disables it.
    pub infinite_load_begin_bottom_offset: Option<u64>,

    /// Quiet period after the last scroll event before `is_scrolling` drops.
    pub time_scroll_state_lasts_for_after_user_scrolls_ms: u64,

    /// Lists with fewer items are rejected with [`InvalidHeightSpec::TooFewItems`].
    pub min_item_count: usize,

    /// When set, overrides the load state on every (re)configuration.
    pub is_infinite_loading: Option<bool>,

    pub on_infinite_load: Option<InfiniteLoadCallback>,
    pub handle_scroll: Option<ScrollCallback>,
    pub on_scrolling_change: Option<ScrollingChangeCallback>,
}

impl InfiniteOptions {
    pub fn new(element_height: impl Into<HeightSpec>, container_height: u32) -> Self {
        Self {
            element_height: element_height.into(),
            container_height,
            preload_batch_size: None,
            preload_additional_height: None,
            infinite_load_begin_bottom_offset: None,
            time_scroll_state_lasts_for_after_user_scrolls_ms: DEFAULT_SCROLL_QUIET_MS,
            min_item_count: DEFAULT_MIN_ITEM_COUNT,
            is_infinite_loading: None,
            on_infinite_load: None,
            handle_scroll: None,
            on_scrolling_change: None,
        }
    }

    pub fn with_element_height(mut self, element_height: impl Into<HeightSpec>) -> Self {
        self.element_height = element_height.into();
        self
    }

    pub fn with_container_height(mut self, container_height: u32) -> Self {
        self.container_height = container_height;
        self
    }

    pub fn with_preload_batch_size(mut self, preload_batch_size: u32) -> Self {
        self.preload_batch_size = Some(preload_batch_size);
        self
    }

    pub fn with_preload_additional_height(mut self, preload_additional_height: u32) -> Self {
        self.preload_additional_height = Some(preload_additional_height);
        self
    }

    pub fn with_infinite_load_begin_bottom_offset(mut self, offset: u64) -> Self {
        self.infinite_load_begin_bottom_offset = Some(offset);
        self
    }

    pub fn with_time_scroll_state_lasts_for_after_user_scrolls_ms(mut self, ms: u64) -> Self {
        self.time_scroll_state_lasts_for_after_user_scrolls_ms = ms;
        self
    }

    pub fn with_min_item_count(mut self, min_item_count: usize) -> Self {
        self.min_item_count = min_item_count;
        self
    }

    pub fn with_is_infinite_loading(mut self, is_infinite_loading: Option<bool>) -> Self {
        self.is_infinite_loading = is_infinite_loading;
        self
    }

    pub fn with_on_infinite_load(
        mut self,
        on_infinite_load: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_infinite_load = on_infinite_load.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_handle_scroll(
        mut self,
        handle_scroll: Option<impl Fn(u64) + Send + Sync + 'static>,
    ) -> Self {
        self.handle_scroll = handle_scroll.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scrolling_change(
        mut self,
        on_scrolling_change: Option<impl Fn(bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scrolling_change = on_scrolling_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Resolves defaults into a validated [`WindowConfig`].
    pub fn to_window_config(&self) -> Result<WindowConfig, InvalidConfig> {
        let container = self.container_height;
        let config = WindowConfig::new(container)
            .with_preload_batch_size(
                self.preload_batch_size
                    .unwrap_or_else(|| WindowConfig::default_preload_batch_size(container)),
            )
            .with_preload_additional_extent(
                self.preload_additional_height
                    .unwrap_or_else(|| WindowConfig::default_preload_additional_extent(container)),
            )
            .with_infinite_load_begin_offset(self.infinite_load_begin_bottom_offset)
            .with_scroll_quiet_ms(self.time_scroll_state_lasts_for_after_user_scrolls_ms);
        config.validate()?;
        Ok(config)
    }

    pub fn validate_item_count(&self, item_count: usize) -> Result<(), InvalidHeightSpec> {
        if item_count < self.min_item_count {
            return Err(InvalidHeightSpec::TooFewItems {
                items: item_count,
                min: self.min_item_count,
            });
        }
        Ok(())
    }
}

impl core::fmt::Debug for InfiniteOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InfiniteOptions")
            .field("element_height", &self.element_height)
            .field("container_height", &self.container_height)
            .field("preload_batch_size", &self.preload_batch_size)
            .field("preload_additional_height", &self.preload_additional_height)
            .field(
                "infinite_load_begin_bottom_offset",
                &self.infinite_load_begin_bottom_offset,
            )
            .field(
                "time_scroll_state_lasts_for_after_user_scrolls_ms",
                &self.time_scroll_state_lasts_for_after_user_scrolls_ms,
            )
            .field("min_item_count", &self.min_item_count)
            .field("is_infinite_loading", &self.is_infinite_loading)
            .finish_non_exhaustive()
    }
}
