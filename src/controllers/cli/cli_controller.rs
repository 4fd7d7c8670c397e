use std::error::Error;
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::session::{ExplorerSession, SessionError};
use crate::core::actions::render::{render, render_batch};
use crate::core::data::buffer_placement::BufferPlacement;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::{InvalidArgumentError, RenderRequest};
use crate::core::data::selection_rect::SelectionRect;
use crate::core::data::view_bounds::ViewBounds;

/// Headless shell: renders frames of a session and hands them to a file presenter.
///
/// Every frame is "displayed" with its top-left corner at the screen origin,
/// so selections are given in buffer pixels.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    session: ExplorerSession,
    placement: BufferPlacement,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(
        presenter: P,
        session: ExplorerSession,
        width: u32,
        height: u32,
    ) -> Result<Self, InvalidArgumentError> {
        Ok(Self {
            presenter,
            session,
            placement: BufferPlacement::at_origin(width, height)?,
            buffer: None,
        })
    }

    #[must_use]
    pub fn session(&self) -> &ExplorerSession {
        &self.session
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    fn request_for(&self, bounds: ViewBounds) -> Result<RenderRequest, InvalidArgumentError> {
        RenderRequest::new(
            self.placement.width_pixels(),
            self.placement.height_pixels(),
            self.session.max_iterations(),
            bounds,
        )
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn Error>> {
        let request = self
            .session
            .render_request(self.placement.width_pixels(), self.placement.height_pixels())?;

        info!(
            "rendering {}x{} at {} iterations, view {}",
            request.pixel_width(),
            request.pixel_height(),
            request.max_iterations(),
            request.bounds()
        );

        let start = Instant::now();
        let buffer = render(&request)?;
        info!("rendered in {:?}", start.elapsed());

        self.buffer = Some(buffer);
        self.session.frame_displayed(self.placement);

        Ok(())
    }

    pub fn zoom_in(&mut self, selection: SelectionRect) -> Result<ViewBounds, SessionError> {
        let bounds = self.session.zoom_in(selection)?;
        info!("zoomed in to {}", bounds);

        Ok(bounds)
    }

    pub fn zoom_out(&mut self) -> ViewBounds {
        self.session.zoom_out()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, &filepath)?;
            info!("saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }

    /// Renders every level of the zoom history plus the current view, in
    /// parallel, and writes them as `frame_000.ppm`, `frame_001.ppm`, ...
    /// from the outermost view inwards. Returns the number of frames written.
    pub fn write_history_frames(
        &self,
        directory: impl AsRef<Path>,
    ) -> Result<usize, Box<dyn Error>> {
        let viewport = self.session.viewport();
        let requests = viewport
            .history()
            .iter()
            .copied()
            .chain(std::iter::once(viewport.current_bounds()))
            .map(|bounds| self.request_for(bounds))
            .collect::<Result<Vec<_>, _>>()?;

        std::fs::create_dir_all(&directory)?;

        let start = Instant::now();
        let frames = render_batch(&requests);
        info!("rendered {} frames in {:?}", frames.len(), start.elapsed());

        for (index, frame) in frames.into_iter().enumerate() {
            let path = directory.as_ref().join(format!("frame_{:03}.ppm", index));
            self.presenter.present(&frame?, &path)?;
        }

        Ok(requests.len())
    }
}
