//! Browser tick source backed by `setInterval`.

use gloo_timers::callback::Interval;
use stopwatch_widget::{TickId, TickSource};
use yew::Callback;

/// Emits the installed [`TickId`] on every interval.
///
/// The returned [`Interval`] clears itself when dropped, which is how the
/// engine cancels a running schedule.
pub struct IntervalTicks {
    on_tick: Callback<TickId>,
}

impl IntervalTicks {
    pub fn new(on_tick: Callback<TickId>) -> Self {
        Self { on_tick }
    }
}

impl TickSource for IntervalTicks {
    type Handle = Interval;

    fn start(&mut self, period_ms: u32, id: TickId) -> Interval {
        log::debug!("setInterval({}) for tick source {}", period_ms, id.value());
        let on_tick = self.on_tick.clone();
        Interval::new(period_ms, move || on_tick.emit(id))
    }
}
