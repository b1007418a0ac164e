use crate::LoadState;

/// Requests more content when the scroll position approaches the end of the list.
///
/// Fires at most once per approach: after firing the trigger stays [`LoadState::Loading`] until
/// the host reports completion with [`Self::notify_load_complete`]. The trigger never resets
/// itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfiniteLoadTrigger {
    begin_offset: Option<u64>,
    state: LoadState,
}

impl InfiniteLoadTrigger {
    /// `begin_offset` is the distance from the end of the content at which loading begins.
    /// `None` disables the trigger.
    pub fn new(begin_offset: Option<u64>) -> Self {
        Self {
            begin_offset,
            state: LoadState::Idle,
        }
    }

    pub fn begin_offset(&self) -> Option<u64> {
        self.begin_offset
    }

    /// Changes the threshold. An outstanding load stays outstanding.
    pub fn set_begin_offset(&mut self, begin_offset: Option<u64>) {
        self.begin_offset = begin_offset;
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Feeds one raw scroll offset (overscroll included). Returns `true` if a load should be
    /// requested now.
    pub fn on_scroll(
        &mut self,
        scroll_offset: u64,
        container_extent: u32,
        total_height: u64,
    ) -> bool {
        let Some(begin_offset) = self.begin_offset else {
            return false;
        };
        if self.state.is_loading() {
            return false;
        }

        let viewport_bottom = scroll_offset.saturating_add(container_extent as u64);
        let threshold = total_height.saturating_sub(begin_offset);
        if viewport_bottom < threshold {
            return false;
        }

        wdebug!(scroll_offset, total_height, begin_offset, "infinite load requested");
        self.state = LoadState::Loading;
        true
    }

    /// Re-arms the trigger after the host finished loading.
    pub fn notify_load_complete(&mut self) {
        if self.state.is_loading() {
            wdebug!("infinite load complete");
        }
        self.state = LoadState::Idle;
    }

    /// Lets the host assert the loading state directly.
    ///
    /// `true` suppresses firing exactly like an outstanding load; `false` is the same as
    /// [`Self::notify_load_complete`].
    pub fn set_loading(&mut self, loading: bool) {
        if loading {
            self.state = LoadState::Loading;
        } else {
            self.notify_load_complete();
        }
    }
}

impl Default for InfiniteLoadTrigger {
    fn default() -> Self {
        Self::new(None)
    }
}
