use std::cell::RefCell;
use std::rc::{Rc, Weak};
use stopwatch_widget::config::TICK_PERIOD_MS;
use stopwatch_widget::{LapRecord, RunState, Stopwatch, TickId};
use yew::prelude::*;

use crate::audio::AudioCues;
use crate::ticker::IntervalTicks;

type Engine = Rc<RefCell<Stopwatch<IntervalTicks>>>;

/// Render snapshot of the stopwatch together with its command callbacks.
#[derive(Clone)]
pub struct StopwatchHandle {
    /// Elapsed milliseconds at the time of this render.
    pub elapsed_ms: u64,
    pub state: RunState,
    /// Laps, most recent first.
    pub laps: Rc<Vec<LapRecord>>,
    /// Start when stopped, pause when running.
    pub on_toggle: Callback<()>,
    /// Record a lap (ignored while stopped).
    pub on_lap: Callback<()>,
    pub on_reset: Callback<()>,
}

/// Build the engine whose interval callback holds only a weak reference back
/// to it, so dropping the component state drops the engine and its interval.
fn new_engine(update: UseForceUpdateHandle) -> Engine {
    Rc::new_cyclic(|weak: &Weak<RefCell<Stopwatch<IntervalTicks>>>| {
        let weak = weak.clone();
        let on_tick = Callback::from(move |id: TickId| {
            let Some(engine) = weak.upgrade() else {
                return;
            };
            let advanced = engine.borrow_mut().tick(id);
            if advanced {
                update.force_update();
            }
        });

        let mut stopwatch = Stopwatch::new(IntervalTicks::new(on_tick), TICK_PERIOD_MS);
        stopwatch.subscribe(AudioCues::new());
        RefCell::new(stopwatch)
    })
}

/// Wrap an engine command in a callback that re-renders afterwards.
fn command(
    engine: &Engine,
    update: &UseForceUpdateHandle,
    apply: fn(&mut Stopwatch<IntervalTicks>),
) -> Callback<()> {
    let engine = engine.clone();
    let update = update.clone();
    Callback::from(move |_| {
        apply(&mut engine.borrow_mut());
        update.force_update();
    })
}

/// Custom hook owning one stopwatch engine for the lifetime of the component.
#[hook]
pub fn use_stopwatch() -> StopwatchHandle {
    let update = use_force_update();
    let engine = {
        let update = update.clone();
        use_state(move || new_engine(update))
    };

    let on_toggle = command(&engine, &update, |sw| {
        sw.toggle_run();
    });
    let on_lap = command(&engine, &update, |sw| {
        sw.lap();
    });
    let on_reset = command(&engine, &update, |sw| sw.reset());

    let sw = engine.borrow();
    StopwatchHandle {
        elapsed_ms: sw.elapsed_ms(),
        state: sw.state(),
        laps: Rc::new(sw.laps().copied().collect()),
        on_toggle,
        on_lap,
        on_reset,
    }
}
