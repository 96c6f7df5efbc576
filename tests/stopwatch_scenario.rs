// Stopwatch engine driven by a simulated clock

use std::cell::RefCell;
use std::rc::Rc;
use stopwatch_widget::{Cue, CueError, RunState, Stopwatch, TickId, TickSource};

/// One scheduled interval on the simulated clock.
struct Schedule {
    id: TickId,
    period_ms: u32,
    next_due: u64,
}

#[derive(Default)]
struct ClockState {
    now: u64,
    schedules: Vec<Schedule>,
    installed: usize,
}

/// Tick source whose handles remove their schedule when dropped.
#[derive(Clone, Default)]
struct SimClock {
    state: Rc<RefCell<ClockState>>,
}

struct SimHandle {
    id: TickId,
    state: Rc<RefCell<ClockState>>,
}

impl Drop for SimHandle {
    fn drop(&mut self) {
        self.state.borrow_mut().schedules.retain(|s| s.id != self.id);
    }
}

impl TickSource for SimClock {
    type Handle = SimHandle;

    fn start(&mut self, period_ms: u32, id: TickId) -> SimHandle {
        let mut state = self.state.borrow_mut();
        let next_due = state.now + u64::from(period_ms);
        state.schedules.push(Schedule {
            id,
            period_ms,
            next_due,
        });
        state.installed += 1;
        SimHandle {
            id,
            state: self.state.clone(),
        }
    }
}

impl SimClock {
    fn active(&self) -> usize {
        self.state.borrow().schedules.len()
    }

    /// Advance time 1 ms at a time, delivering every due tick.
    /// Returns the number of ticks the engine accepted.
    fn advance(&self, sw: &mut Stopwatch<SimClock>, ms: u64) -> usize {
        let mut accepted = 0;
        for _ in 0..ms {
            let due: Vec<TickId> = {
                let mut state = self.state.borrow_mut();
                state.now += 1;
                let now = state.now;
                let due = state
                    .schedules
                    .iter_mut()
                    .filter(|s| s.next_due == now)
                    .map(|s| {
                        s.next_due += u64::from(s.period_ms);
                        s.id
                    })
                    .collect();
                due
            };
            for id in due {
                if sw.tick(id) {
                    accepted += 1;
                }
            }
            assert!(self.active() <= 1, "more than one tick source active");
        }
        accepted
    }
}

fn stopwatch() -> (Stopwatch<SimClock>, SimClock) {
    let clock = SimClock::default();
    (Stopwatch::new(clock.clone(), 10), clock)
}

fn laps(sw: &Stopwatch<SimClock>) -> Vec<u64> {
    sw.laps().map(|lap| lap.elapsed_ms).collect()
}

#[test]
fn start_pause_lap_resume_reset() {
    let (mut sw, clock) = stopwatch();

    sw.toggle_run();
    assert_eq!(clock.advance(&mut sw, 1000), 100);
    sw.toggle_run();
    assert_eq!(sw.elapsed_ms(), 1000);

    assert!(sw.lap().is_none());
    assert!(laps(&sw).is_empty());

    clock.advance(&mut sw, 250);
    assert_eq!(sw.elapsed_ms(), 1000);

    sw.toggle_run();
    clock.advance(&mut sw, 500);
    sw.lap();
    assert_eq!(laps(&sw), vec![1500]);

    sw.reset();
    assert_eq!(sw.elapsed_ms(), 0);
    assert_eq!(sw.state(), RunState::Stopped);
    assert!(laps(&sw).is_empty());
    assert_eq!(clock.active(), 0);
}

#[test]
fn rapid_toggling_keeps_a_single_source() {
    let (mut sw, clock) = stopwatch();

    sw.toggle_run();
    sw.toggle_run();
    sw.toggle_run();
    assert_eq!(clock.active(), 1);
    assert_eq!(clock.state.borrow().installed, 2);

    assert_eq!(clock.advance(&mut sw, 1000), 100);
    assert_eq!(sw.elapsed_ms(), 1000);
}

#[test]
fn toggling_inside_one_period_never_double_counts() {
    let (mut sw, clock) = stopwatch();

    sw.toggle_run();
    for _ in 0..20 {
        clock.advance(&mut sw, 3);
        sw.toggle_run();
        sw.toggle_run();
    }
    // Every restart reschedules a full period, so no tick ever fired.
    assert_eq!(sw.elapsed_ms(), 0);

    assert_eq!(clock.advance(&mut sw, 200), 20);
    assert_eq!(sw.elapsed_ms(), 200);
}

#[test]
fn elapsed_is_monotonic_across_commands() {
    let (mut sw, clock) = stopwatch();
    let mut last = 0;

    for step in 0..30u64 {
        match step % 4 {
            0 | 2 => {
                sw.toggle_run();
            }
            1 => {
                sw.lap();
            }
            _ => {}
        }
        let before = sw.elapsed_ms();
        let running = sw.is_running();
        clock.advance(&mut sw, 37);
        if !running {
            assert_eq!(sw.elapsed_ms(), before);
        }
        assert!(sw.elapsed_ms() >= last);
        last = sw.elapsed_ms();
    }
}

#[test]
fn lap_records_are_prepended_with_current_time() {
    let (mut sw, clock) = stopwatch();
    let cues = Rc::new(RefCell::new(Vec::new()));
    let sink = cues.clone();
    sw.subscribe(move |cue: Cue| -> Result<(), CueError> {
        sink.borrow_mut().push(cue);
        Ok(())
    });

    sw.toggle_run();
    for expected_len in 1..=3 {
        clock.advance(&mut sw, 120);
        let now = sw.elapsed_ms();
        let record = sw.lap().unwrap();
        assert_eq!(record.elapsed_ms, now);
        assert_eq!(record.number, expected_len);
        assert_eq!(sw.laps().len(), expected_len);
    }
    assert_eq!(laps(&sw), vec![360, 240, 120]);
    assert_eq!(cues.borrow().iter().filter(|c| **c == Cue::Lap).count(), 3);
}
