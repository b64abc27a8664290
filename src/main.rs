use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod carousel;
mod constants;
mod effects;
mod error;
mod gate;
mod gesture;
mod input;
mod layout;
mod lightbox;
mod nav;
mod page;
mod state;
mod texture_loader;
mod track;
mod zoomable;

use crate::app::App;
use crate::constants::*;
use crate::gate::PasscodeGate;
use crate::input::FrameInput;
use crate::page::Page;
use crate::texture_loader::TextureCache;

/// Browse a portfolio directory: hero, project images, wireframe carousels
/// and a full-screen lightbox.
#[derive(Parser, Debug)]
#[command(name = "portfolio")]
struct Args {
    /// Portfolio directory (sub-directories become sections)
    page_dir: PathBuf,

    /// Sub-directories shown as carousels
    #[arg(long = "carousel", default_values_t = DEFAULT_CAROUSELS.map(String::from))]
    carousels: Vec<String>,

    /// SHA-256 hex digest of the passcode
    #[arg(long, default_value = DEFAULT_PASSCODE_HASH)]
    passcode_hash: String,

    /// Skip the passcode screen
    #[arg(long)]
    no_lock: bool,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = FPS)]
    fps: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let page = Page::scan(&args.page_dir, &args.carousels)
        .with_context(|| format!("Error loading portfolio from {:?}", args.page_dir))?;
    let gate = if args.no_lock {
        PasscodeGate::unlocked()
    } else {
        PasscodeGate::new(&args.passcode_hash)?
    };
    info!(root = ?page.root, sections = page.sections.len(), "scanned portfolio");

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Portfolio")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape belongs to the lightbox
    rl.set_exit_key(None);

    let mut app = App::new(page, &args.carousels, gate, args.width as f32, args.height as f32);
    let mut textures = TextureCache::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        app.resize(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        let input = FrameInput::poll(&mut rl);
        app.update(&input, dt);

        for image in app.wanted_images() {
            textures.ensure(&mut rl, &thread, &image);
        }

        let mut d = rl.begin_drawing(&thread);
        app.draw(&mut d, &textures);
    }

    info!(textures = textures.len(), "closing portfolio");
    Ok(())
}
