use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Default frames per second

pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000); // Time between automatic advances
pub const TRANSITION_DURATION: f32 = 0.35;    // Slide-in animation length (seconds)

pub const MARGIN: i32 = 120;                  // Left/right page margin
pub const TITLE_Y: i32 = 110;                 // Baseline of the slide title
pub const TITLE_SIZE: i32 = 72;
pub const SUBTITLE_SIZE: i32 = 40;
pub const BODY_SIZE: i32 = 36;
pub const LINE_SPACING: i32 = 64;             // Vertical distance between body lines

pub const INDICATOR_Y: f32 = 1000.0;          // Center line of the slide indicator dots
pub const INDICATOR_RADIUS: f32 = 10.0;
pub const INDICATOR_SPACING: f32 = 40.0;      // Distance between dot centers
pub const STATUS_SIZE: i32 = 24;
