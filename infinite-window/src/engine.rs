use crate::error::InvalidConfig;
use crate::{HeightModel, WindowConfig, WindowDescriptor};

/// Computes the window for `scroll_offset` without any caching.
///
/// The scroll axis is split into blocks of `preload_batch_size`. The window covers the block
/// containing the (clamped) offset, widened by `preload_additional_extent` on both sides and
/// clamped to `[0, total_height]`:
///
/// ```text
/// window_top    = max(0, block_start - preload_additional_extent)
/// window_bottom = min(total_height, block_end + preload_additional_extent)
/// ```
///
/// `start_index` is the item containing `window_top`; the window ends after the last item that
/// starts before `window_bottom`.
pub fn compute_window(
    scroll_offset: u64,
    model: &HeightModel,
    config: &WindowConfig,
) -> WindowDescriptor {
    let block = block_number(scroll_offset, model.total_height(), config);
    window_for_block(block, model, config)
}

/// Block the offset falls into, after clamping it to `[0, total - container]`.
pub(crate) fn block_number(scroll_offset: u64, total_height: u64, config: &WindowConfig) -> u64 {
    let max_offset = total_height.saturating_sub(config.container_extent as u64);
    let offset = scroll_offset.min(max_offset);
    offset / batch_size(config)
}

fn batch_size(config: &WindowConfig) -> u64 {
    config.preload_batch_size.max(1) as u64
}

fn window_for_block(block: u64, model: &HeightModel, config: &WindowConfig) -> WindowDescriptor {
    let total = model.total_height();
    let batch = batch_size(config);
    let additional = config.preload_additional_extent as u64;

    let block_start = block.saturating_mul(batch);
    let block_end = block_start.saturating_add(batch);
    let window_top = block_start.saturating_sub(additional);
    let window_bottom = block_end.saturating_add(additional).min(total);

    let Some(start) = model.index_at_offset(window_top) else {
        return WindowDescriptor::EMPTY;
    };
    let end = model
        .last_index_before(window_bottom)
        .map_or(start, |end| end.max(start));

    wtrace!(
        block,
        window_top,
        window_bottom,
        start,
        end,
        "window_for_block"
    );

    WindowDescriptor {
        start_index: start,
        end_index: end + 1,
        top_spacer: model.cumulative_before(start),
        bottom_spacer: total.saturating_sub(model.cumulative_before(end + 1)),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CachedBlock {
    block: u64,
    window: WindowDescriptor,
}

/// Block-quantized window computation.
///
/// Each engine owns its config and the last computed block. Scroll offsets that stay inside the
/// cached block reuse the cached [`WindowDescriptor`]; crossing into another block, changing
/// the config, or calling [`Self::invalidate`] forces a full computation.
///
/// Engines never share their cache; independent lists need independent engines.
#[derive(Clone, Debug)]
pub struct WindowEngine {
    config: WindowConfig,
    cached: Option<CachedBlock>,
}

impl WindowEngine {
    pub fn new(config: WindowConfig) -> Result<Self, InvalidConfig> {
        config.validate()?;
        Ok(Self {
            config,
            cached: None,
        })
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Replaces the config and drops the cached block.
    ///
    /// On error the previous config and cache are kept.
    pub fn set_config(&mut self, config: WindowConfig) -> Result<(), InvalidConfig> {
        config.validate()?;
        self.config = config;
        self.invalidate();
        Ok(())
    }

    /// Drops the cached block so the next [`Self::window`] call recomputes.
    ///
    /// Call this whenever the height model the engine is queried with changes.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Block number of the cached window, if any.
    pub fn cached_block(&self) -> Option<u64> {
        self.cached.map(|c| c.block)
    }

    /// The most recently computed window, if the cache is valid.
    pub fn last_window(&self) -> Option<WindowDescriptor> {
        self.cached.map(|c| c.window)
    }

    /// Returns the window for `scroll_offset`, and whether it had to be recomputed.
    pub fn window(&mut self, scroll_offset: u64, model: &HeightModel) -> (WindowDescriptor, bool) {
        let block = block_number(scroll_offset, model.total_height(), &self.config);
        if let Some(cached) = self.cached {
            if cached.block == block {
                return (cached.window, false);
            }
        }

        let window = window_for_block(block, model, &self.config);
        self.cached = Some(CachedBlock { block, window });
        (window, true)
    }
}
