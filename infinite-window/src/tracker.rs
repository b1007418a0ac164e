use crate::QuietTimer;
use crate::options::DEFAULT_SCROLL_QUIET_MS;

/// Debounced "the user is actively scrolling" flag.
///
/// Every scroll event raises the flag and re-arms a single quiet timer; the flag drops only
/// once `quiet_ms` has elapsed since the *last* event. Hosts either schedule the returned
/// [`QuietTimer`] and hand its generation back to [`Self::on_timer`], or poll
/// [`Self::update`] from their frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollStateTracker {
    quiet_ms: u64,
    is_scrolling: bool,
    generation: u64,
    last_event_ms: Option<u64>,
}

impl ScrollStateTracker {
    pub fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            is_scrolling: false,
            generation: 0,
            last_event_ms: None,
        }
    }

    pub fn quiet_ms(&self) -> u64 {
        self.quiet_ms
    }

    /// Applies to timers armed from now on.
    pub fn set_quiet_ms(&mut self, quiet_ms: u64) {
        self.quiet_ms = quiet_ms;
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    /// Generation of the most recently armed timer.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The currently armed timer, if the flag is raised.
    pub fn pending_timer(&self) -> Option<QuietTimer> {
        let last = self.last_event_ms?;
        self.is_scrolling.then(|| QuietTimer {
            generation: self.generation,
            deadline_ms: last.saturating_add(self.quiet_ms),
        })
    }

    /// Raises the flag and re-arms the quiet timer, superseding any earlier one.
    pub fn on_scroll(&mut self, now_ms: u64) -> QuietTimer {
        self.generation = self.generation.wrapping_add(1);
        self.last_event_ms = Some(now_ms);
        self.is_scrolling = true;
        QuietTimer {
            generation: self.generation,
            deadline_ms: now_ms.saturating_add(self.quiet_ms),
        }
    }

    /// Handles a fired quiet timer. Returns `true` if the flag dropped.
    ///
    /// Firings from superseded timers are ignored.
    pub fn on_timer(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.is_scrolling {
            wtrace!(generation, current = self.generation, "stale quiet timer ignored");
            return false;
        }
        self.settle();
        true
    }

    /// Polling alternative to [`Self::on_timer`]. Returns `true` if the flag dropped.
    pub fn update(&mut self, now_ms: u64) -> bool {
        if !self.is_scrolling {
            return false;
        }
        let Some(last) = self.last_event_ms else {
            return false;
        };
        if now_ms.saturating_sub(last) < self.quiet_ms {
            return false;
        }
        self.settle();
        true
    }

    fn settle(&mut self) {
        self.is_scrolling = false;
        self.last_event_ms = None;
    }
}

impl Default for ScrollStateTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_QUIET_MS)
    }
}
