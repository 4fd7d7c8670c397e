mod controllers;
mod core;
mod input;
mod presenters;

pub use controllers::cli::cli_controller::CliController;
pub use controllers::interactive::{
    FrameData, FramePresenterPort, RenderEvent, RenderFailure, RenderWorker,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::session::{ExplorerSession, SessionError};

pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::render::{RenderError, render, render_batch, render_view};

pub use crate::core::data::buffer_placement::BufferPlacement;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_request::{
    DEFAULT_MAX_ITERATIONS, InvalidArgumentError, RenderRequest,
};
pub use crate::core::data::selection_rect::{InvalidSelectionError, SelectionRect};
pub use crate::core::data::view_bounds::{ViewBounds, ViewBoundsError};

pub use crate::core::fractals::mandelbrot::algorithm::{
    ESCAPE_RADIUS_SQUARED, MandelbrotAlgorithm, escape_time,
};
pub use crate::core::fractals::mandelbrot::colour_map::{
    HslColourMap, HslColourMapError, hsl_to_rgb,
};

pub use crate::core::util::aspect_ratio::adjust_bounds_to_aspect;
pub use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

pub use crate::core::viewport::controller::ViewportController;
pub use crate::core::viewport::errors::ZoomError;
pub use crate::core::viewport::history::ZoomHistory;

pub use input::selection::SelectionDrag;

pub use presenters::file::ppm::PpmFilePresenter;
