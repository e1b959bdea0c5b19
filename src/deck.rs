//! Slide deck controller: the cursor over a fixed list of slides, the
//! autoplay timer and the requested fullscreen mode.

use std::time::Duration;
use tracing::debug;

use crate::error::DeckError;
use crate::scheduler::{Scheduler, TimerId};
use crate::slide::Slide;
use crate::state::{AutoPlayState, PresentationState};
use crate::surface::DisplaySurface;

pub struct Deck<S: Scheduler> {
    slides: Vec<Slide>,
    state: PresentationState,
    scheduler: S,
    interval: Duration,
    // Some(_) exactly while autoplay is Running
    autoplay_timer: Option<TimerId>,
}

impl<S: Scheduler> Deck<S> {
    pub fn new(slides: Vec<Slide>, scheduler: S, interval: Duration) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        let state = PresentationState::new(slides.len());
        Ok(Self {
            slides,
            state,
            scheduler,
            interval,
            autoplay_timer: None,
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.state.current_index]
    }

    pub fn state(&self) -> PresentationState {
        self.state
    }

    pub fn auto_play_state(&self) -> AutoPlayState {
        self.state.auto_play_state()
    }

    pub fn next(&mut self) {
        self.state.current_index = (self.state.current_index + 1) % self.len();
        debug!(index = self.state.current_index, "next slide");
    }

    pub fn previous(&mut self) {
        let n = self.len();
        self.state.current_index = (self.state.current_index + n - 1) % n;
        debug!(index = self.state.current_index, "previous slide");
    }

    /// Jump straight to `index`. Indices past the end wrap around.
    pub fn go_to(&mut self, index: usize) {
        self.state.current_index = index % self.len();
        debug!(index = self.state.current_index, "go to slide");
    }

    pub fn toggle_auto_play(&mut self) {
        let enabled = !self.state.auto_play;
        self.set_auto_play(enabled);
    }

    pub fn set_auto_play(&mut self, enabled: bool) {
        if enabled {
            if self.autoplay_timer.is_none() {
                self.autoplay_timer = Some(self.scheduler.schedule_repeating(self.interval));
                debug!(interval_ms = self.interval.as_millis() as u64, "autoplay started");
            }
        } else if let Some(timer) = self.autoplay_timer.take() {
            self.scheduler.cancel(timer);
            debug!("autoplay stopped");
        }
        self.state.auto_play = enabled;
    }

    /// Ask the host to switch display mode and assume it complied.
    pub fn toggle_fullscreen(&mut self, surface: &mut impl DisplaySurface) {
        let requested = !self.state.fullscreen;
        let result = if requested {
            surface.enter_fullscreen()
        } else {
            surface.exit_fullscreen()
        };
        if let Err(e) = result {
            debug!(requested, error = %e, "fullscreen request not honoured");
        }
        self.state.fullscreen = requested;
    }

    /// Let one frame's worth of time pass. Returns how many slides autoplay advanced.
    ///
    /// Manual navigation never touches the timer, so its phase is kept: a
    /// `next()` just before a firing is followed by a second advance right away.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        let fired = self.scheduler.advance(elapsed);
        let mut advanced = 0;
        for id in fired {
            if Some(id) == self.autoplay_timer {
                self.next();
                advanced += 1;
            }
        }
        advanced
    }
}

impl<S: Scheduler> Drop for Deck<S> {
    fn drop(&mut self) {
        if let Some(timer) = self.autoplay_timer.take() {
            self.scheduler.cancel(timer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::AUTOPLAY_INTERVAL;
    use crate::scheduler::FrameScheduler;
    use crate::surface::testing::RecordingSurface;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::bullets(&format!("s{i}"), &format!("Slide {i}"), None, &[]))
            .collect()
    }

    fn deck(n: usize, scheduler: &mut FrameScheduler) -> Deck<&mut FrameScheduler> {
        Deck::new(slides(n), scheduler, AUTOPLAY_INTERVAL).unwrap()
    }

    #[test]
    fn empty_deck_is_rejected() {
        let result = Deck::new(Vec::new(), FrameScheduler::new(), AUTOPLAY_INTERVAL);
        assert!(matches!(result, Err(DeckError::Empty)));
    }

    #[test]
    fn navigation_walkthrough_on_ten_slides() {
        let mut scheduler = FrameScheduler::new();
        let mut deck = deck(10, &mut scheduler);

        for _ in 0..3 {
            deck.next();
        }
        assert_eq!(deck.current_index(), 3);
        deck.previous();
        assert_eq!(deck.current_index(), 2);
        deck.go_to(9);
        assert_eq!(deck.current_index(), 9);
        deck.next();
        assert_eq!(deck.current_index(), 0);
    }

    #[test]
    fn previous_from_first_slide_wraps_to_last() {
        let mut scheduler = FrameScheduler::new();
        let mut deck = deck(4, &mut scheduler);
        deck.previous();
        assert_eq!(deck.current_index(), 3);
        assert_eq!(deck.current_slide().id, "s3");
    }

    #[test]
    fn single_slide_deck_stays_put() {
        let mut scheduler = FrameScheduler::new();
        let mut deck = deck(1, &mut scheduler);
        deck.next();
        deck.previous();
        assert_eq!(deck.current_index(), 0);
    }

    #[test]
    fn go_to_past_the_end_wraps() {
        let mut scheduler = FrameScheduler::new();
        let mut deck = deck(10, &mut scheduler);
        deck.go_to(12);
        assert_eq!(deck.current_index(), 2);
    }

    #[test]
    fn autoplay_fires_once_after_one_interval() {
        let mut scheduler = FrameScheduler::new();
        let mut deck = deck(10, &mut scheduler);
        deck.toggle_auto_play();

        assert_eq!(deck.tick(Duration::from_millis(5000)), 1);
        assert_eq!(deck.current_index(), 1);
    }

    #[test]
    fn autoplay_fires_floor_of_elapsed_over_interval() {
        let mut scheduler = FrameScheduler::new();
        let mut deck = deck(10, &mut scheduler);
        deck.toggle_auto_play();

        assert_eq!(deck.tick(Duration::from_millis(12000)), 2);
        assert_eq!(deck.current_index(), 2);
    }

    #[test]
    fn autoplay_disabled_before_first_tick_never_advances() {
        let mut deck = Deck::new(slides(10), FrameScheduler::new(), AUTOPLAY_INTERVAL).unwrap();
        deck.toggle_auto_play();
        deck.tick(Duration::from_millis(4000));
        deck.toggle_auto_play();

        assert_eq!(deck.auto_play_state(), AutoPlayState::Stopped);
        assert_eq!(deck.scheduler.active_timers(), 0);
        assert_eq!(deck.tick(Duration::from_secs(60)), 0);
        assert_eq!(deck.current_index(), 0);
    }

    #[test]
    fn enabling_twice_keeps_a_single_timer() {
        let mut scheduler = FrameScheduler::new();
        {
            let mut deck = deck(10, &mut scheduler);
            deck.set_auto_play(true);
            deck.set_auto_play(true);
            assert_eq!(deck.tick(Duration::from_millis(5000)), 1);
        }
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn repeated_toggling_leaks_no_timers() {
        let mut scheduler = FrameScheduler::new();
        {
            let mut deck = deck(3, &mut scheduler);
            for _ in 0..7 {
                deck.toggle_auto_play();
            }
            assert_eq!(deck.auto_play_state(), AutoPlayState::Running);
        }
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn running_deck_holds_exactly_one_timer() {
        let mut deck = Deck::new(slides(3), FrameScheduler::new(), AUTOPLAY_INTERVAL).unwrap();
        for _ in 0..3 {
            deck.toggle_auto_play();
        }
        assert_eq!(deck.auto_play_state(), AutoPlayState::Running);
        assert_eq!(deck.scheduler.active_timers(), 1);

        deck.toggle_auto_play();
        assert_eq!(deck.scheduler.active_timers(), 0);
    }

    #[test]
    fn dropping_a_running_deck_cancels_its_timer() {
        let mut scheduler = FrameScheduler::new();
        let mut deck = deck(5, &mut scheduler);
        deck.toggle_auto_play();
        drop(deck);
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn manual_navigation_keeps_autoplay_phase() {
        let mut scheduler = FrameScheduler::new();
        let mut deck = deck(10, &mut scheduler);
        deck.toggle_auto_play();

        assert_eq!(deck.tick(Duration::from_millis(4900)), 0);
        deck.next();
        // Only 100 ms later the original schedule fires again
        assert_eq!(deck.tick(Duration::from_millis(100)), 1);
        assert_eq!(deck.current_index(), 2);
    }

    #[test]
    fn foreign_timers_do_not_advance_the_deck() {
        let mut scheduler = FrameScheduler::new();
        scheduler.schedule_repeating(Duration::from_millis(10));
        let mut deck = deck(4, &mut scheduler);
        assert_eq!(deck.tick(Duration::from_millis(100)), 0);
        assert_eq!(deck.current_index(), 0);
    }

    #[test]
    fn fullscreen_flag_follows_requests() {
        let mut scheduler = FrameScheduler::new();
        let mut surface = RecordingSurface::default();
        let mut deck = deck(2, &mut scheduler);

        deck.toggle_fullscreen(&mut surface);
        assert!(deck.state().fullscreen);
        deck.toggle_fullscreen(&mut surface);
        assert!(!deck.state().fullscreen);
        assert_eq!(surface.requests, vec![true, false]);
    }

    #[test]
    fn refused_fullscreen_still_flips_the_flag() {
        let mut scheduler = FrameScheduler::new();
        let mut surface = RecordingSurface { refuse: true, ..Default::default() };
        let mut deck = deck(2, &mut scheduler);

        deck.toggle_fullscreen(&mut surface);
        assert!(deck.state().fullscreen);
        assert!(!surface.fullscreen);
        assert_eq!(surface.requests, vec![true]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: N calls to next() come back to the starting slide
            #[test]
            fn next_n_times_is_identity(n in 1usize..64, start in 0usize..64) {
                let mut deck = Deck::new(slides(n), FrameScheduler::new(), AUTOPLAY_INTERVAL).unwrap();
                deck.go_to(start);
                let origin = deck.current_index();
                for _ in 0..n {
                    deck.next();
                }
                prop_assert_eq!(deck.current_index(), origin);
            }

            /// Property: previous() undoes next()
            #[test]
            fn previous_inverts_next(n in 1usize..64, start in 0usize..64) {
                let mut deck = Deck::new(slides(n), FrameScheduler::new(), AUTOPLAY_INTERVAL).unwrap();
                deck.go_to(start);
                let origin = deck.current_index();
                deck.next();
                deck.previous();
                prop_assert_eq!(deck.current_index(), origin);
            }

            /// Property: go_to(k) lands exactly on k for every valid k
            #[test]
            fn go_to_valid_index_is_exact(n in 1usize..64, k in 0usize..64) {
                let k = k % n;
                let mut deck = Deck::new(slides(n), FrameScheduler::new(), AUTOPLAY_INTERVAL).unwrap();
                deck.go_to(k);
                prop_assert_eq!(deck.current_index(), k);
            }

            /// Property: the cursor is always a valid index
            #[test]
            fn index_stays_in_range(n in 1usize..16, moves in prop::collection::vec(0u8..3, 0..100)) {
                let mut deck = Deck::new(slides(n), FrameScheduler::new(), AUTOPLAY_INTERVAL).unwrap();
                for m in moves {
                    match m {
                        0 => deck.next(),
                        1 => deck.previous(),
                        _ => deck.go_to(n - 1),
                    }
                    prop_assert!(deck.current_index() < n);
                }
            }
        }
    }
}
