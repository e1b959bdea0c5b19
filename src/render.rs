use raylib::prelude::*;
use crate::constants::*;
use crate::input::indicator_centers;
use crate::slide::{Slide, SlideContent};
use crate::state::{AutoPlayState, PresentationState};

const BACKGROUND: Color = Color::new(16, 32, 24, 255);
const ACCENT: Color = Color::new(92, 214, 120, 255);
const TEXT: Color = Color::new(236, 244, 238, 255);
const MUTED: Color = Color::new(140, 164, 150, 255);

pub fn clear(d: &mut impl RaylibDraw) {
    d.clear_background(BACKGROUND);
}

/// Draw the title and body of `slide`, shifted horizontally by `offset_x` render pixels.
pub fn draw_slide(d: &mut impl RaylibDraw, slide: &Slide, texture: Option<&Texture2D>, offset_x: f32) {
    let x = MARGIN + offset_x as i32;
    d.draw_text(&slide.title, x, TITLE_Y, TITLE_SIZE, ACCENT);
    d.draw_rectangle(x, TITLE_Y + TITLE_SIZE + 16, 160, 6, ACCENT);

    let mut y = TITLE_Y + TITLE_SIZE + 80;
    match &slide.content {
        SlideContent::Bullets { subtitle, items } => {
            if let Some(subtitle) = subtitle {
                d.draw_text(subtitle, x, y, SUBTITLE_SIZE, TEXT);
                y += LINE_SPACING + 24;
            }
            for item in items {
                d.draw_circle(x + 12, y + BODY_SIZE / 2, 6.0, ACCENT);
                d.draw_text(item, x + 40, y, BODY_SIZE, TEXT);
                y += LINE_SPACING;
            }
        }
        SlideContent::Stats { items } => {
            // Two columns of big numbers with their label underneath
            let column_width = (RENDER_WIDTH - 2 * MARGIN) / 2;
            for (i, stat) in items.iter().enumerate() {
                let cx = x + (i as i32 % 2) * column_width;
                let cy = y + (i as i32 / 2) * (LINE_SPACING * 3);
                d.draw_text(&stat.value, cx, cy, TITLE_SIZE, ACCENT);
                d.draw_text(&stat.label, cx, cy + TITLE_SIZE + 12, BODY_SIZE, MUTED);
            }
        }
        SlideContent::Endpoints { base_url, routes } => {
            if let Some(base_url) = base_url {
                d.draw_text(base_url, x, y, SUBTITLE_SIZE, MUTED);
                y += LINE_SPACING + 24;
            }
            for route in routes {
                d.draw_rectangle(x, y - 8, RENDER_WIDTH - 2 * MARGIN, BODY_SIZE + 16, Color::new(0, 0, 0, 80));
                d.draw_text(route, x + 24, y, BODY_SIZE, TEXT);
                y += LINE_SPACING + 8;
            }
        }
        SlideContent::Image { caption, .. } => {
            if let Some(texture) = texture {
                draw_fitted(d, texture, offset_x, y as f32);
            }
            if let Some(caption) = caption {
                d.draw_text(caption, x, INDICATOR_Y as i32 - 100, BODY_SIZE, MUTED);
            }
        }
    }
}

// Scale a picture to fit the body area, centered horizontally
fn draw_fitted(d: &mut impl RaylibDraw, texture: &Texture2D, offset_x: f32, top: f32) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return;
    }

    let max_width = (RENDER_WIDTH - 2 * MARGIN) as f32;
    let max_height = INDICATOR_Y - 140.0 - top;
    let scale = (max_width / tex_width).min(max_height / tex_height).min(1.0);

    let scaled_width = tex_width * scale;
    let scaled_height = tex_height * scale;
    let left = (RENDER_WIDTH as f32 - scaled_width) * 0.5 + offset_x;

    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        Rectangle::new(left, top, scaled_width, scaled_height),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

/// Slide indicators and the status line. Drawn on top of the slide, never animated.
pub fn draw_chrome(d: &mut impl RaylibDraw, state: &PresentationState) {
    for (i, center) in indicator_centers(state.slide_count).iter().enumerate() {
        if i == state.current_index {
            d.draw_circle_v(*center, INDICATOR_RADIUS * 1.4, ACCENT);
        } else {
            d.draw_circle_v(*center, INDICATOR_RADIUS, MUTED);
        }
    }

    let autoplay = match state.auto_play_state() {
        AutoPlayState::Running => "autoplay on  [P]",
        AutoPlayState::Stopped => "autoplay off [P]",
    };
    let fullscreen = if state.fullscreen { "fullscreen [F]" } else { "windowed [F]" };
    let status = format!("{}    {}    {}", state.position_label(), autoplay, fullscreen);
    d.draw_text(&status, MARGIN, RENDER_HEIGHT - 48, STATUS_SIZE, MUTED);
}
