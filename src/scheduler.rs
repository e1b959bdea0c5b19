//! Repeating timers driven by elapsed frame time.
//!
//! Nothing here reads a clock. The main loop feeds each frame's duration into
//! [`Scheduler::advance`], which makes every timer fully deterministic under test.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

pub trait Scheduler {
    /// Start a timer that fires every `period`, first after one full period.
    fn schedule_repeating(&mut self, period: Duration) -> TimerId;

    /// Stop a timer. Unknown or already cancelled ids are ignored.
    fn cancel(&mut self, id: TimerId);

    /// Let `elapsed` time pass. Returns one entry per firing, in firing order.
    fn advance(&mut self, elapsed: Duration) -> Vec<TimerId>;
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        (**self).schedule_repeating(period)
    }

    fn cancel(&mut self, id: TimerId) {
        (**self).cancel(id)
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<TimerId> {
        (**self).advance(elapsed)
    }
}

#[derive(Debug)]
struct RepeatingTimer {
    id: TimerId,
    period: Duration,
    // Time left until the next firing
    remaining: Duration,
}

#[derive(Debug, Default)]
pub struct FrameScheduler {
    timers: Vec<RepeatingTimer>,
    next_id: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_timers(&self) -> usize {
        self.timers.len()
    }
}

impl Scheduler for FrameScheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        // A zero period would fire forever inside one advance()
        let period = period.max(Duration::from_millis(1));
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(RepeatingTimer { id, period, remaining: period });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<TimerId> {
        // (time of firing, timer) so that firings of different timers interleave correctly
        let mut fired: Vec<(Duration, TimerId)> = Vec::new();

        for timer in self.timers.iter_mut() {
            let mut at = timer.remaining;
            let mut left = elapsed;
            while left >= timer.remaining {
                left -= timer.remaining;
                fired.push((at, timer.id));
                timer.remaining = timer.period;
                at += timer.period;
            }
            timer.remaining -= left;
        }

        fired.sort_by_key(|(at, _)| *at);
        fired.into_iter().map(|(_, id)| id).collect()
    }
}
