use crate::engine::WindowEngine;
use crate::error::{Error, Result};
use crate::{
    FrameState, HeightModel, HeightSpec, InfiniteLoadTrigger, LoadState, ScrollState,
    ScrollStateTracker, ScrollUpdate, WindowConfig, WindowDescriptor,
};

/// A headless windowing engine for one list.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your host drives it with scroll offsets, timestamps and configuration.
/// - It answers with a [`WindowDescriptor`] naming which items to materialize and how much
///   space to reserve above and below them.
///
/// Scroll events also feed the infinite-load trigger and the debounced `is_scrolling` flag.
#[derive(Clone, Debug)]
pub struct InfiniteWindow {
    model: HeightModel,
    engine: WindowEngine,
    trigger: InfiniteLoadTrigger,
    tracker: ScrollStateTracker,
    scroll_offset: u64,
    window: WindowDescriptor,
}

impl InfiniteWindow {
    /// Builds the height model and computes the window at offset `0`.
    pub fn new(height_spec: &HeightSpec, item_count: usize, config: WindowConfig) -> Result<Self> {
        let model = build_model(height_spec, item_count, &config)?;
        let engine = WindowEngine::new(config)?;
        wdebug!(
            item_count,
            container_extent = config.container_extent,
            preload_batch_size = config.preload_batch_size,
            preload_additional_extent = config.preload_additional_extent,
            "InfiniteWindow::new"
        );
        let mut w = Self {
            model,
            engine,
            trigger: InfiniteLoadTrigger::new(config.infinite_load_begin_offset),
            tracker: ScrollStateTracker::new(config.scroll_quiet_ms),
            scroll_offset: 0,
            window: WindowDescriptor::EMPTY,
        };
        w.recompute();
        Ok(w)
    }

    /// Replaces the height spec, item count and config, then recomputes the window at the
    /// current scroll offset.
    ///
    /// Everything is validated before anything changes: on error the previous state is kept.
    /// Scroll offset, `is_scrolling` and load state carry over.
    pub fn configure(
        &mut self,
        height_spec: &HeightSpec,
        item_count: usize,
        config: WindowConfig,
    ) -> Result<()> {
        let model = build_model(height_spec, item_count, &config)?;
        self.engine.set_config(config)?;
        self.trigger.set_begin_offset(config.infinite_load_begin_offset);
        self.tracker.set_quiet_ms(config.scroll_quiet_ms);
        self.model = model;
        wdebug!(item_count, "InfiniteWindow::configure");
        self.recompute();
        Ok(())
    }

    /// Replaces only the height spec and item count (e.g. after items were appended).
    pub fn set_height_spec(&mut self, height_spec: &HeightSpec, item_count: usize) -> Result<()> {
        let config = *self.engine.config();
        self.configure(height_spec, item_count, config)
    }

    /// Replaces only the config.
    pub fn set_config(&mut self, config: WindowConfig) -> Result<()> {
        self.engine.set_config(config).map_err(|err| {
            wwarn!(error = ?err, "InfiniteWindow::set_config rejected");
            Error::from(err)
        })?;
        self.trigger.set_begin_offset(config.infinite_load_begin_offset);
        self.tracker.set_quiet_ms(config.scroll_quiet_ms);
        self.recompute();
        Ok(())
    }

    /// Feeds one scroll event from the host.
    ///
    /// The raw offset is kept (and seen by the load trigger, so overscroll counts); the window
    /// math clamps it to the scrollable range. Offsets within the current block reuse the
    /// cached window.
    pub fn on_scroll(&mut self, scroll_offset: u64, now_ms: u64) -> ScrollUpdate {
        wtrace!(scroll_offset, now_ms, "on_scroll");
        self.scroll_offset = scroll_offset;

        let quiet_timer = self.tracker.on_scroll(now_ms);
        let (window, recomputed) = self.engine.window(scroll_offset, &self.model);
        self.window = window;

        let load_requested = self.trigger.on_scroll(
            scroll_offset,
            self.engine.config().container_extent,
            self.model.total_height(),
        );

        ScrollUpdate {
            window,
            recomputed,
            is_scrolling: self.tracker.is_scrolling(),
            load_requested,
            load_state: self.trigger.state(),
            quiet_timer,
        }
    }

    /// Re-arms the infinite-load trigger.
    pub fn notify_load_complete(&mut self) {
        self.trigger.notify_load_complete();
    }

    /// Lets the host assert the loading state directly (see [`InfiniteLoadTrigger::set_loading`]).
    pub fn set_loading(&mut self, loading: bool) {
        self.trigger.set_loading(loading);
    }

    /// Handles a fired quiet timer. Returns `true` if `is_scrolling` dropped.
    pub fn on_quiet_timer(&mut self, generation: u64) -> bool {
        self.tracker.on_timer(generation)
    }

    /// Polls the quiet timer. Returns `true` if `is_scrolling` dropped.
    pub fn update_scrolling(&mut self, now_ms: u64) -> bool {
        self.tracker.update(now_ms)
    }

    /// Drops the cached block and recomputes the window at the current scroll offset.
    pub fn invalidate(&mut self) {
        self.recompute();
    }

    pub fn window(&self) -> WindowDescriptor {
        self.window
    }

    pub fn model(&self) -> &HeightModel {
        &self.model
    }

    pub fn config(&self) -> &WindowConfig {
        self.engine.config()
    }

    pub fn item_count(&self) -> usize {
        self.model.count()
    }

    pub fn total_height(&self) -> u64 {
        self.model.total_height()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// Largest offset the window math uses; larger offsets are clamped to it.
    pub fn max_scroll_offset(&self) -> u64 {
        self.model
            .total_height()
            .saturating_sub(self.engine.config().container_extent as u64)
    }

    pub fn is_scrolling(&self) -> bool {
        self.tracker.is_scrolling()
    }

    pub fn load_state(&self) -> LoadState {
        self.trigger.state()
    }

    pub fn is_loading(&self) -> bool {
        self.trigger.is_loading()
    }

    pub fn tracker(&self) -> &ScrollStateTracker {
        &self.tracker
    }

    pub fn trigger(&self) -> &InfiniteLoadTrigger {
        &self.trigger
    }

    /// Returns a lightweight snapshot of the current scroll state.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            is_scrolling: self.tracker.is_scrolling(),
        }
    }

    /// Returns a combined snapshot of scroll state, load state and window.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            scroll: self.scroll_state(),
            load: self.trigger.state(),
            window: self.window,
        }
    }

    fn recompute(&mut self) {
        self.engine.invalidate();
        let (window, _) = self.engine.window(self.scroll_offset, &self.model);
        self.window = window;
    }
}

fn build_model(
    height_spec: &HeightSpec,
    item_count: usize,
    config: &WindowConfig,
) -> Result<HeightModel> {
    config.validate().map_err(|err| {
        wwarn!(error = ?err, "configuration rejected");
        Error::from(err)
    })?;
    HeightModel::new(height_spec, item_count).map_err(|err| {
        wwarn!(error = ?err, item_count, "height spec rejected");
        Error::from(err)
    })
}
