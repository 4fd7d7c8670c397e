use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use mandelbrot_zoom::{
    CliController, DEFAULT_MAX_ITERATIONS, ExplorerSession, PpmFilePresenter, SelectionRect,
    ViewBounds,
};

/// Renders the Mandelbrot set to a PPM image, optionally zooming in first.
#[derive(Parser, Debug)]
#[command(name = "mandelbrot-zoom", version, about)]
struct Args {
    /// Output width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Output height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Escape-time iteration budget per pixel
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,

    /// Where to write the final frame
    #[arg(long, short, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,

    /// Square selection `X,Y,SIZE` in pixels of the previous frame; repeatable
    #[arg(long = "zoom", value_parser = parse_selection)]
    zooms: Vec<SelectionRect>,

    /// Undo this many zooms after applying them
    #[arg(long, default_value_t = 0)]
    zoom_out: usize,

    /// Also write one frame per zoom level into this directory
    #[arg(long)]
    frames_dir: Option<PathBuf>,
}

fn parse_selection(value: &str) -> Result<SelectionRect, String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("invalid number in '{}': {}", value, err))?;

    match parts.as_slice() {
        [x, y, size] => Ok(SelectionRect::new(*x, *y, *size)),
        _ => Err(format!("expected X,Y,SIZE, got '{}'", value)),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();

    let session = ExplorerSession::new(ViewBounds::DEFAULT, args.max_iterations)?;
    let mut controller =
        CliController::new(PpmFilePresenter::new(), session, args.width, args.height)?;

    controller.generate()?;

    for selection in args.zooms {
        controller.zoom_in(selection)?;
        controller.generate()?;
    }

    if args.zoom_out > 0 {
        for _ in 0..args.zoom_out {
            controller.zoom_out();
        }
        controller.generate()?;
    }

    controller.write(&args.output)?;

    if let Some(frames_dir) = args.frames_dir {
        let written = controller.write_history_frames(&frames_dir)?;
        info!("wrote {} frames to {}", written, frames_dir.display());
    }

    Ok(())
}
