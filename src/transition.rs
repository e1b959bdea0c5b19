use raylib::prelude::*;
use crate::constants::*;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,  // New slide comes in from the right
    Backward, // New slide comes in from the left
}

impl Direction {
    /// Which way the deck moved from `from` to `to` in a deck of `count` slides.
    /// Wrapping from the last slide to the first still counts as forward.
    pub fn between(from: usize, to: usize, count: usize) -> Self {
        if count == 0 {
            return Direction::Forward;
        }
        let one_forward = to == (from + 1) % count;
        let one_back = to == (from + count - 1) % count;
        if !one_forward && (one_back || to < from) {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}

/// Horizontal slide-in of the current slide after the cursor moved.
pub struct SlideTransition {
    tween: ease::Tween,
    timer: f32,
    offset: f32,
}

impl SlideTransition {
    pub fn new(direction: Direction) -> Self {
        let start = match direction {
            Direction::Forward => RENDER_WIDTH as f32,
            Direction::Backward => -(RENDER_WIDTH as f32),
        };
        Self {
            tween: ease::Tween::new(ease::cubic_out, start, 0.0, TRANSITION_DURATION),
            timer: 0.0,
            offset: start,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.timer += dt;
        if self.is_finished() {
            self.offset = 0.0;
        } else {
            self.offset = self.tween.apply(dt);
        }
    }

    /// Horizontal displacement of the slide, in render pixels.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_finished(&self) -> bool {
        self.timer >= TRANSITION_DURATION
    }
}
