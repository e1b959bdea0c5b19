/// Autoplay state machine of a deck.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AutoPlayState {
    Stopped, // No timer scheduled
    Running, // Exactly one repeating timer scheduled
}

/// Snapshot of everything the renderer needs to know about a deck.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PresentationState {
    pub current_index: usize,
    pub slide_count: usize,
    pub auto_play: bool,
    /// Last requested fullscreen mode; the host may have refused it.
    pub fullscreen: bool,
}

impl PresentationState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            current_index: 0,
            slide_count,
            auto_play: false,
            fullscreen: false,
        }
    }

    pub fn auto_play_state(&self) -> AutoPlayState {
        if self.auto_play {
            AutoPlayState::Running
        } else {
            AutoPlayState::Stopped
        }
    }

    /// Human readable `3 / 10` position, counted from one.
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.slide_count)
    }
}
