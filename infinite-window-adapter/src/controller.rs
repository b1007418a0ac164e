use infinite_window::{InfiniteWindow, QuietTimer, Result, WindowDescriptor};

use crate::InfiniteOptions;

/// What the host should render for the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderPlan {
    /// Items to materialize and the spacer extents around them.
    pub window: WindowDescriptor,
    pub container_height: u32,
    /// `true` while an infinite load is outstanding.
    pub show_loading_indicator: bool,
    /// `true` while the user is actively scrolling; hosts typically stop hover/pointer
    /// handling on the content until it drops.
    pub suppress_pointer_events: bool,
}

/// A framework-neutral controller that wraps an [`InfiniteWindow`] and runs host callbacks.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `on_scroll` when the scroll container reports a new offset
/// - `tick(now_ms)` each frame/timer tick, which fires the pending quiet timer
/// - `set_item_count` / `set_options` when the content or options change
#[derive(Clone, Debug)]
pub struct Controller {
    w: InfiniteWindow,
    options: InfiniteOptions,
    pending_timer: Option<QuietTimer>,
}

impl Controller {
    /// Validates `options` against `item_count` and builds the window at offset `0`.
    pub fn new(options: InfiniteOptions, item_count: usize) -> Result<Self> {
        options.validate_item_count(item_count)?;
        let config = options.to_window_config()?;
        let mut w = InfiniteWindow::new(&options.element_height, item_count, config)?;
        if let Some(loading) = options.is_infinite_loading {
            w.set_loading(loading);
        }
        adebug!(item_count, "Controller::new");
        Ok(Self {
            w,
            options,
            pending_timer: None,
        })
    }

    pub fn window(&self) -> &InfiniteWindow {
        &self.w
    }

    pub fn into_window(self) -> InfiniteWindow {
        self.w
    }

    pub fn options(&self) -> &InfiniteOptions {
        &self.options
    }

    pub fn item_count(&self) -> usize {
        self.w.item_count()
    }

    /// Replaces the options, keeping the item count. The window is recomputed at the current
    /// scroll offset before this returns.
    ///
    /// On error the previous options and window are kept.
    pub fn set_options(&mut self, options: InfiniteOptions) -> Result<()> {
        let item_count = self.w.item_count();
        self.reconfigure(options, item_count)
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut InfiniteOptions)) -> Result<()> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    /// Call this when items were added or removed.
    ///
    /// With per-item heights, the height sequence must already match `item_count`; use
    /// [`Self::set_content`] to replace both at once.
    pub fn set_item_count(&mut self, item_count: usize) -> Result<()> {
        let options = self.options.clone();
        self.reconfigure(options, item_count)
    }

    /// Replaces options and item count together.
    pub fn set_content(&mut self, options: InfiniteOptions, item_count: usize) -> Result<()> {
        self.reconfigure(options, item_count)
    }

    /// Lets the host assert whether a load is outstanding.
    pub fn set_is_infinite_loading(&mut self, loading: bool) {
        self.w.set_loading(loading);
    }

    /// Call this once the content requested by `on_infinite_load` has arrived.
    pub fn notify_load_complete(&mut self) {
        self.w.notify_load_complete();
    }

    /// Call this when the UI reports a scroll offset change.
    pub fn on_scroll(&mut self, scroll_offset: u64, now_ms: u64) -> RenderPlan {
        atrace!(scroll_offset, now_ms, "Controller::on_scroll");
        if let Some(handle_scroll) = &self.options.handle_scroll {
            handle_scroll(scroll_offset);
        }

        let was_scrolling = self.w.is_scrolling();
        let update = self.w.on_scroll(scroll_offset, now_ms);
        self.pending_timer = Some(update.quiet_timer);

        if !was_scrolling {
            self.notify_scrolling_change(true);
        }
        if update.load_requested {
            adebug!(scroll_offset, item_count = self.w.item_count(), "on_infinite_load");
            if let Some(on_infinite_load) = &self.options.on_infinite_load {
                on_infinite_load();
            }
        }

        self.render_plan()
    }

    /// Advances the controller: fires the pending quiet timer once it is due.
    ///
    /// Returns `true` if `is_scrolling` dropped.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(timer) = self.pending_timer else {
            return false;
        };
        if !timer.is_due(now_ms) {
            return false;
        }
        self.pending_timer = None;
        if !self.w.on_quiet_timer(timer.generation) {
            return false;
        }
        atrace!(now_ms, "Controller::tick scrolling settled");
        self.notify_scrolling_change(false);
        true
    }

    /// The quiet timer the host should schedule, if any.
    pub fn pending_timer(&self) -> Option<QuietTimer> {
        self.pending_timer
    }

    pub fn render_plan(&self) -> RenderPlan {
        RenderPlan {
            window: self.w.window(),
            container_height: self.options.container_height,
            show_loading_indicator: self.w.is_loading(),
            suppress_pointer_events: self.w.is_scrolling(),
        }
    }

    fn reconfigure(&mut self, options: InfiniteOptions, item_count: usize) -> Result<()> {
        options.validate_item_count(item_count)?;
        let config = options.to_window_config()?;
        self.w.configure(&options.element_height, item_count, config)?;
        if let Some(loading) = options.is_infinite_loading {
            self.w.set_loading(loading);
        }
        adebug!(item_count, "Controller::reconfigure");
        self.options = options;
        Ok(())
    }

    fn notify_scrolling_change(&self, is_scrolling: bool) {
        if let Some(on_scrolling_change) = &self.options.on_scrolling_change {
            on_scrolling_change(is_scrolling);
        }
    }
}
