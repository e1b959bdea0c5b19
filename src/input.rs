use raylib::prelude::*;
use crate::constants::*;

/// Everything a user can ask the presenter to do.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Next,
    Previous,
    GoTo(usize),
    ToggleAutoPlay,
    ToggleFullscreen,
    Quit,
}

pub fn command_for_key(key: KeyboardKey, slide_count: usize) -> Option<Command> {
    use KeyboardKey::*;

    let digit = match key {
        KEY_ONE => Some(0),
        KEY_TWO => Some(1),
        KEY_THREE => Some(2),
        KEY_FOUR => Some(3),
        KEY_FIVE => Some(4),
        KEY_SIX => Some(5),
        KEY_SEVEN => Some(6),
        KEY_EIGHT => Some(7),
        KEY_NINE => Some(8),
        KEY_ZERO => Some(9),
        _ => None,
    };
    if let Some(index) = digit {
        // Digits only address slides that exist
        return (index < slide_count).then_some(Command::GoTo(index));
    }

    match key {
        KEY_RIGHT | KEY_DOWN | KEY_PAGE_DOWN | KEY_SPACE => Some(Command::Next),
        KEY_LEFT | KEY_UP | KEY_PAGE_UP | KEY_BACKSPACE => Some(Command::Previous),
        KEY_HOME => Some(Command::GoTo(0)),
        KEY_END => Some(Command::GoTo(slide_count.saturating_sub(1))),
        KEY_P => Some(Command::ToggleAutoPlay),
        KEY_F => Some(Command::ToggleFullscreen),
        KEY_Q => Some(Command::Quit),
        _ => None,
    }
}

/// Centers of the slide indicator dots in render-target coordinates.
pub fn indicator_centers(slide_count: usize) -> Vec<Vector2> {
    let row_width = INDICATOR_SPACING * slide_count.saturating_sub(1) as f32;
    let first_x = RENDER_WIDTH as f32 * 0.5 - row_width * 0.5;
    (0..slide_count)
        .map(|i| Vector2::new(first_x + i as f32 * INDICATOR_SPACING, INDICATOR_Y))
        .collect()
}

/// Slide indicator under `point` (render-target coordinates), if any.
/// The hit area is a bit larger than the drawn dot.
pub fn indicator_at(point: Vector2, slide_count: usize) -> Option<usize> {
    let hit_radius = INDICATOR_SPACING * 0.5;
    indicator_centers(slide_count).iter().position(|center| {
        let dx = point.x - center.x;
        let dy = point.y - center.y;
        dx * dx + dy * dy <= hit_radius * hit_radius
    })
}

/// Map a window position to render-target coordinates.
pub fn to_render_space(point: Vector2, screen_width: f32, screen_height: f32) -> Vector2 {
    if screen_width <= 0.0 || screen_height <= 0.0 {
        return point;
    }
    Vector2::new(
        point.x * RENDER_WIDTH as f32 / screen_width,
        point.y * RENDER_HEIGHT as f32 / screen_height,
    )
}
