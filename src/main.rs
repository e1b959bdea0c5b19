use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod constants;
mod deck;
mod deck_file;
mod error;
mod input;
mod render;
mod scheduler;
mod slide;
mod state;
mod surface;
mod texture_loader;
mod transition;

use crate::constants::*;
use crate::deck::Deck;
use crate::deck_file::{builtin_deck, load_deck};
use crate::input::{Command, command_for_key, indicator_at, to_render_space};
use crate::scheduler::FrameScheduler;
use crate::texture_loader::load_slide_textures;
use crate::transition::{Direction, SlideTransition};

/// Present a pitch deck in a window, with keyboard navigation and autoplay.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON deck file; the built-in EcoSort pitch is shown when omitted
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Start with autoplay running
    #[arg(long)]
    autoplay: bool,

    /// Time between automatic advances, in milliseconds
    #[arg(long, default_value_t = AUTOPLAY_INTERVAL.as_millis() as u64, value_parser = clap::value_parser!(u64).range(1..))]
    interval_ms: u64,

    /// Start in fullscreen mode
    #[arg(long)]
    fullscreen: bool,

    /// Initial window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    width: i32,

    /// Initial window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    height: i32,

    /// Target frame rate
    #[arg(long, default_value_t = FPS)]
    fps: u32,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    // --- Load Slides ---
    let source = match &args.deck {
        Some(path) => load_deck(path).with_context(|| format!("cannot open deck {}", path.display()))?,
        None => builtin_deck(),
    };
    info!(title = %source.title, slides = source.slides.len(), "starting presentation");

    let interval = Duration::from_millis(args.interval_ms);
    let mut deck = Deck::new(source.slides, FrameScheduler::new(), interval)
        .context("cannot build deck")?;

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(&source.title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let textures = load_slide_textures(&mut rl, &thread, deck.slides());

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow::anyhow!("failed to create render texture: {e}"))?;

    if args.autoplay {
        deck.set_auto_play(true);
    }
    if args.fullscreen {
        deck.toggle_fullscreen(&mut rl);
    }

    let mut shown_index = deck.current_index();
    let mut transition: Option<SlideTransition> = None;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // 1. Input
        let mut commands = Vec::new();
        while let Some(key) = rl.get_key_pressed() {
            commands.extend(command_for_key(key, deck.len()));
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let sw = rl.get_screen_width() as f32;
            let sh = rl.get_screen_height() as f32;
            let point = to_render_space(rl.get_mouse_position(), sw, sh);
            commands.extend(indicator_at(point, deck.len()).map(Command::GoTo));
        }

        let mut quit = false;
        for command in commands {
            match command {
                Command::Next => deck.next(),
                Command::Previous => deck.previous(),
                Command::GoTo(index) => deck.go_to(index),
                Command::ToggleAutoPlay => {
                    deck.toggle_auto_play();
                    info!(autoplay = ?deck.auto_play_state(), "autoplay toggled");
                }
                Command::ToggleFullscreen => deck.toggle_fullscreen(&mut rl),
                Command::Quit => quit = true,
            }
        }
        if quit {
            break;
        }

        // 2. Autoplay
        deck.tick(Duration::from_secs_f32(dt.max(0.0)));

        // 3. Slide change animation
        if deck.current_index() != shown_index {
            let direction = Direction::between(shown_index, deck.current_index(), deck.len());
            transition = Some(SlideTransition::new(direction));
            shown_index = deck.current_index();
        }
        if let Some(t) = transition.as_mut() {
            t.update(dt);
            if t.is_finished() {
                transition = None;
            }
        }
        let offset = transition.as_ref().map_or(0.0, |t| t.offset());

        // --- Render into fixed size "framebuffer" ---
        let state = deck.state();
        let slide = deck.current_slide();
        let texture = textures.get(&state.current_index);

        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            render::clear(&mut d);
            render::draw_slide(&mut d, slide, texture, offset);
            render::draw_chrome(&mut d, &state);
        });

        // Framebuffer is stored upside down, flip it while scaling to the window
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    info!("presentation closed");
    Ok(())
}
