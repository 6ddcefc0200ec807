use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use macroquad::prelude::*;
use polygon_cut_viz::{CutSession, Scene};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "polygon-cut-viz")]
#[command(about = "Drag a line across a polygon to split it in two")]
struct Args {
    /// JSON scene file with the polygon to cut
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Intersection tolerance, overrides the scene's value
    #[arg(long)]
    epsilon: Option<f32>,

    /// Log every crossing found by the splitter
    #[arg(short, long)]
    verbose: bool,
}

fn load_session(args: &Args) -> Result<CutSession> {
    let scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::default(),
    };
    let epsilon = args.epsilon.unwrap_or(scene.epsilon);
    anyhow::ensure!(
        epsilon.is_finite() && epsilon >= 0.0,
        "epsilon must be a non-negative number, got {epsilon}"
    );

    let polygon = scene.polygon()?;
    tracing::info!(vertices = polygon.len(), epsilon, "scene loaded");
    Ok(CutSession::new(polygon).with_epsilon(epsilon))
}

#[macroquad::main("Polygon Cut")]
async fn main() {
    let args = Args::parse();
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();

    let mut session = match load_session(&args) {
        Ok(session) => session,
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    };

    loop {
        session.update();

        clear_background(WHITE);
        session.draw();

        session.draw_status(10.0, screen_height() - 30.0);
        draw_text(
            "Drag with the left mouse button to cut, R to reset",
            10.0,
            screen_height() - 10.0,
            16.0,
            GRAY,
        );

        next_frame().await
    }
}
