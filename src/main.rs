use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use raylib::prelude::*;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod carousel;
mod constants;
mod media_loader;
mod slide;
mod state;
mod swipe;
mod video;

use crate::carousel::Carousel;
use crate::constants::*;
use crate::media_loader::{is_video_path, load_sorted_media_paths, load_texture_with_exif_rotation};
use crate::slide::Slide;
use crate::video::Video;

/// Image and video carousel: autoplay, arrow-key navigation, drag to swipe,
/// clickable indicator dots, hover to pause.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing the slide images and videos
    directory: PathBuf,

    /// Seconds between automatic slide advances
    #[arg(long, default_value_t = AUTOPLAY_INTERVAL)]
    interval: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if args.interval <= 0.0 {
        bail!("--interval must be positive");
    }

    let media_paths = load_sorted_media_paths(&args.directory)?;

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // Files that fail to load are skipped, not fatal.
    let mut slides: Vec<Slide> = Vec::new();
    for path in media_paths {
        let loaded = if is_video_path(&path) {
            Video::new(&mut rl, &thread, &path).map(Slide::video)
        } else {
            load_texture_with_exif_rotation(&mut rl, &thread, &path).map(Slide::image)
        };
        match loaded {
            Ok(slide) => slides.push(slide),
            Err(e) => warn!("skipping {:?}: {e:#}", path),
        }
    }
    if slides.is_empty() {
        bail!("no slides could be loaded from {:?}", args.directory);
    }

    let mut carousel = Carousel::new(slides, args.interval);

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        carousel.handle_input(&rl);
        carousel.update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        carousel.draw(&mut d);
    }

    Ok(())
}
