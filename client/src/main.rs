use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use bevy::prelude::*;
use clap::Parser;

use corridor_client::{
    WindowSettings,
    config::{asset_root, discover_frames, frame_pool, headless_settings, resolve_theme},
    constants::{
        DEFAULT_ASSETS_DIR, DEFAULT_FRAMES_DIR, DEFAULT_HEADLESS_TICKS, DEFAULT_TICK_HZ, DEFAULT_WINDOW_HEIGHT,
        DEFAULT_WINDOW_WIDTH, LOG_FILTER,
    },
    headless_app,
    layout::{layout_json, write_layout},
    run_headless, windowed_app,
};
use corridor_common::{
    camera::LoopMode,
    constants::{NUM_SEGMENTS, SEGMENT_LENGTH},
    corridor::CorridorModel,
    scene::SceneAssembler,
    theme::ThemeKind,
};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "Endless corridor walkthrough", long_about = None)]
struct Args {
    // Built-in theme preset
    #[arg(short, long, default_value_t = ThemeKind::Sinister)]
    theme: ThemeKind,

    // JSON theme file, overrides --theme
    #[arg(long)]
    theme_file: Option<PathBuf>,

    // Asset directory, relative to the executable's base path
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    assets_dir: String,

    // Frame image directory, relative to the asset directory
    #[arg(long, default_value = DEFAULT_FRAMES_DIR)]
    frames_dir: String,

    // Number of corridor segments
    #[arg(long, default_value_t = NUM_SEGMENTS)]
    segments: usize,

    // Length of one segment
    #[arg(long, default_value_t = SEGMENT_LENGTH)]
    segment_length: f32,

    // How the camera returns to the start (fixed or wrap)
    #[arg(long, default_value_t = LoopMode::FixedOffset)]
    loop_mode: LoopMode,

    // Window width
    #[arg(long, default_value_t = DEFAULT_WINDOW_WIDTH)]
    window_width: u32,

    // Window height
    #[arg(long, default_value_t = DEFAULT_WINDOW_HEIGHT)]
    window_height: u32,

    // Run without a window
    #[arg(long, default_value_t = false)]
    headless: bool,

    // Number of ticks for a headless run
    #[arg(long, default_value_t = DEFAULT_HEADLESS_TICKS)]
    ticks: u64,

    // Tick rate for a headless run
    #[arg(long, default_value_t = DEFAULT_TICK_HZ)]
    tick_hz: f64,

    // Write the initial layout as JSON to this path and exit
    #[arg(long)]
    dump_layout: Option<PathBuf>,
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    let theme = resolve_theme(args.theme, args.theme_file.as_deref())?;
    let frames = discover_frames(&asset_root(&args.assets_dir), &args.frames_dir)?;
    let frames = frame_pool(frames)?;
    let corridor = CorridorModel::build(args.segments, args.segment_length, &theme, &frames)
        .context("failed to build corridor")?;
    let scene = SceneAssembler::new(corridor, &theme, args.loop_mode);

    if let Some(path) = &args.dump_layout {
        let json = layout_json(&theme, &frames, &scene)?;
        write_layout(path, &json)?;
        println!("wrote layout to {}", path.display());
        return Ok(());
    }

    if args.headless {
        // Only a headless run cares about the tick budget and rate
        let (run, step) = headless_settings(args.ticks, args.tick_hz)?;
        let mut app = headless_app(scene, run, step);
        app.add_plugins(bevy::log::LogPlugin {
            level: bevy::log::Level::INFO,
            filter: LOG_FILTER.to_string(),
            ..default()
        });
        info!("running headless with theme {} for {} ticks", theme.name, args.ticks);
        let exit = run_headless(&mut app);
        ensure!(exit.is_success(), "headless run failed: {exit:?}");
        return Ok(());
    }

    windowed_app(
        scene,
        frames,
        WindowSettings {
            width: args.window_width,
            height: args.window_height,
            assets_dir: args.assets_dir,
        },
    )
    .run();

    Ok(())
}
