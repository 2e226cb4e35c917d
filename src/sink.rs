//! The presentation end of the pipeline: something that accepts a
//! finished RGB buffer and gets it in front of the user.  The core
//! neither knows nor cares about file formats; it hands the buffer to
//! an ImageSink and reports whatever the sink reports.

extern crate image;

use failure::Error;
use image::pnm::{PNMEncoder, PNMSubtype, SampleEncoding};
use image::ColorType;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Consumes a completed width x height RGB buffer, three bytes per
/// pixel in row-major order.  Implementations display it or write it
/// to disk; failures are surfaced to the caller, never swallowed.
pub trait ImageSink {
    /// Present the buffer.  `bounds` is (width, height) in pixels.
    fn present(&mut self, pixels: &[u8], bounds: (usize, usize)) -> Result<(), Error>;
}

/// Writes the buffer to a binary portable pixmap on disk.
pub struct PnmSink {
    path: PathBuf,
}

impl PnmSink {
    /// A sink that will write to the given path when presented with a
    /// buffer.
    pub fn new<P: AsRef<Path>>(path: P) -> PnmSink {
        PnmSink {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ImageSink for PnmSink {
    fn present(&mut self, pixels: &[u8], bounds: (usize, usize)) -> Result<(), Error> {
        let output = File::create(&self.path)?;
        let mut encoder =
            PNMEncoder::new(output).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
        encoder.encode(pixels, bounds.0 as u32, bounds.1 as u32, ColorType::RGB(8))?;
        Ok(())
    }
}
