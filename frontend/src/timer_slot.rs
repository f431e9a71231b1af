/// Holds at most one pending timer handle. Handles cancel themselves on drop
/// (`gloo_timers::callback::Timeout` clears its timeout), so replacing or
/// clearing the slot is what cancels a scheduled transition.
#[derive(Debug)]
pub struct TimerSlot<H> {
    pending: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> TimerSlot<H> {
    /// Store `handle`, dropping whatever was pending before it. Returns
    /// whether an earlier handle got replaced.
    pub fn arm(&mut self, handle: H) -> bool {
        self.pending.replace(handle).is_some()
    }

    /// Drop the pending handle, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
