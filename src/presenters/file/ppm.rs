use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes frames as binary PPM (P6). Alpha is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn encode(buffer: &PixelBuffer, out: &mut impl Write) -> std::io::Result<()> {
        // P6 header: magic, width height, max colour value
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", buffer.width(), buffer.height())?;
        writeln!(out, "255")?;
        out.write_all(&buffer.rgb_bytes())?;

        Ok(())
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(parent) = filepath.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = BufWriter::new(File::create(filepath)?);
        Self::encode(buffer, &mut file)?;
        file.flush()
    }
}
