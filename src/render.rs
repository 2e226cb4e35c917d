// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The driver.  Walks every pixel of the viewport, runs the
//! map-count-color pipeline on it, and writes the result into an RGB
//! buffer, three bytes per pixel in row-major order.  Every pixel is
//! independent of every other pixel and the configuration is
//! immutable, so the threaded variant just hands disjoint bands of
//! rows to scoped threads and joins; no locking, no shared mutable
//! state beyond each band's exclusive slice.

extern crate crossbeam;

use itertools::iproduct;

use color::escape_color;
use errors::ConfigError;
use escape::escape_count;
use viewport::Viewport;

/// Bytes per pixel in the output buffer.
const CHANNELS: usize = 3;

/// Takes a viewport and a limit (the number of orbit steps to allow
/// per point) and renders the Mandelbrot set visible through that
/// viewport.  The buffer it produces is only meaningful once the
/// render call returns; there is no partial-results contract.
#[derive(Debug)]
pub struct Renderer {
    viewport: Viewport,
    limit: usize,
}

impl Renderer {
    /// Constructor.  The viewport has already validated its own
    /// shape; the limit must allow at least one orbit step.
    pub fn new(viewport: Viewport, limit: usize) -> Result<Renderer, ConfigError> {
        if limit == 0 {
            return Err(ConfigError::ZeroIterationLimit);
        }
        Ok(Renderer { viewport, limit })
    }

    /// The viewport this renderer draws through.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Run the pipeline for one pixel.
    fn pixel_color(&self, x: usize, y: usize) -> [u8; 3] {
        escape_color(escape_count(self.viewport.to_plane(x, y), self.limit))
    }

    /// Fill a band of complete rows, the first of which is row `top`
    /// of the full image.
    fn render_band(&self, band: &mut [u8], top: usize) {
        let stride = self.viewport.width * CHANNELS;
        for (i, row) in band.chunks_mut(stride).enumerate() {
            let y = top + i;
            for x in 0..self.viewport.width {
                let color = self.pixel_color(x, y);
                row[x * CHANNELS..(x + 1) * CHANNELS].copy_from_slice(&color);
            }
        }
    }

    /// The main function for single-threaded rendering.  Walks the
    /// grid in row-major order and returns the finished buffer.
    pub fn render_single(&self) -> Vec<u8> {
        let mut buffer = vec![0 as u8; self.viewport.len() * CHANNELS];
        for (y, x) in iproduct!(0..self.viewport.height, 0..self.viewport.width) {
            let color = self.pixel_color(x, y);
            let offset = (y * self.viewport.width + x) * CHANNELS;
            buffer[offset..offset + CHANNELS].copy_from_slice(&color);
        }
        buffer
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count as an option.  The buffer is split into disjoint
    /// row bands, one scoped thread per band; the scope join is the
    /// only synchronization.
    pub fn render(&self, threads: usize) -> Vec<u8> {
        let mut buffer = vec![0 as u8; self.viewport.len() * CHANNELS];
        let threads = if threads == 0 { 1 } else { threads };
        let rows_per_band = self.viewport.height / threads + 1;
        let stride = self.viewport.width * CHANNELS;
        {
            let bands: Vec<&mut [u8]> = buffer.chunks_mut(rows_per_band * stride).collect();
            crossbeam::scope(|spawner| {
                for (i, band) in bands.into_iter().enumerate() {
                    let top = rows_per_band * i;
                    spawner.spawn(move |_| {
                        self.render_band(band, top);
                    });
                }
            })
            .unwrap();
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;

    fn small_renderer(width: usize, height: usize, limit: usize) -> Renderer {
        let vp = Viewport::new(width, height, Complex::new(0.0, 0.0), 2.0).unwrap();
        Renderer::new(vp, limit).unwrap()
    }

    #[test]
    fn renderer_rejects_zero_limit() {
        let vp = Viewport::new(4, 4, Complex::new(0.0, 0.0), 2.0).unwrap();
        assert_eq!(
            Renderer::new(vp, 0).unwrap_err(),
            ConfigError::ZeroIterationLimit
        );
    }

    #[test]
    fn buffer_is_three_bytes_per_pixel() {
        let r = small_renderer(7, 5, 50);
        assert_eq!(r.render_single().len(), 7 * 5 * 3);
        assert_eq!(r.render(3).len(), 7 * 5 * 3);
    }

    #[test]
    fn rendering_is_deterministic() {
        let r = small_renderer(4, 4, 50);
        assert_eq!(r.render_single(), r.render_single());
        assert_eq!(r.render(2), r.render(2));
    }

    #[test]
    fn threaded_render_matches_single() {
        let r = small_renderer(16, 16, 100);
        let single = r.render_single();
        for threads in &[1, 2, 3, 5, 32] {
            assert_eq!(r.render(*threads), single);
        }
    }

    #[test]
    fn center_of_the_default_view_is_black() {
        // Pixel (4, 4) of an 8x8 grid lands exactly on the origin,
        // which is interior.
        let r = small_renderer(8, 8, 50);
        let buffer = r.render_single();
        let offset = (4 * 8 + 4) * 3;
        assert_eq!(&buffer[offset..offset + 3], &[0, 0, 0]);
    }

    #[test]
    fn corners_of_a_wide_view_escape() {
        // At scale 2 the corners of a square grid sit outside the
        // set, so they must be colored, not black.
        let r = small_renderer(16, 16, 1000);
        let buffer = r.render_single();
        assert_ne!(&buffer[0..3], &[0, 0, 0]);
    }
}
