//! Contains the Viewport struct, which describes the relationship
//! between the integral pixel grid of the output image, with its
//! origin at 0,0, and a square-pixel window onto the complex plane
//! described by a center point and a scale.

use num::Complex;

use errors::ConfigError;

/// A window onto the complex plane, aligned with the pixel grid of
/// the output image.  The scale is the half-width of the window along
/// the shorter grid dimension, in plane units, so the shorter side
/// always spans 2 * scale and the longer side gets proportionally
/// more plane.  Distance-per-pixel is the same on both axes; the
/// image is never stretched.
#[derive(Copy, Clone, Debug)]
pub struct Viewport {
    /// Width of the pixel grid.
    pub width: usize,
    /// Height of the pixel grid.
    pub height: usize,
    /// The point at the center of the window.
    pub center: Complex<f64>,
    /// Half-width of the shorter grid dimension, in plane units.
    pub scale: f64,
    // Precomputed at construction so the per-pixel mapping is a
    // single multiply-add per axis, and so every pixel derives from
    // the same closed-form origin.
    dist_per_pixel: f64,
    left: f64,
    top: f64,
}

impl Viewport {
    /// Constructor.  Takes the pixel resolution of the output image,
    /// the plane point at its center, and the scale.  Rejects empty
    /// resolutions and non-positive or non-finite scales.
    pub fn new(
        width: usize,
        height: usize,
        center: Complex<f64>,
        scale: f64,
    ) -> Result<Viewport, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyResolution { width, height });
        }

        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::InvalidScale { scale });
        }

        let smaller_side = if width < height { width } else { height };
        let dist_per_pixel = scale / (smaller_side as f64 / 2.0);
        let left = center.re - (width as f64 / 2.0) * dist_per_pixel;
        let top = center.im - (height as f64 / 2.0) * dist_per_pixel;

        Ok(Viewport {
            width,
            height,
            center,
            scale,
            dist_per_pixel,
            left,
            top,
        })
    }

    /// Given the column and row of a pixel on the grid, return the
    /// complex number at the equivalent location on the plane.  The
    /// caller is expected to stay inside the grid.
    pub fn to_plane(&self, x: usize, y: usize) -> Complex<f64> {
        Complex::new(
            self.left + (x as f64) * self.dist_per_pixel,
            self.top + (y as f64) * self.dist_per_pixel,
        )
    }

    /// The plane distance covered by one pixel, identical on both
    /// axes.
    pub fn dist_per_pixel(&self) -> f64 {
        self.dist_per_pixel
    }

    /// The total number of pixels in the grid.  Used to calculate
    /// memory needs.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// A constructed viewport is never empty; this exists to pair
    /// with `len`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_fails_on_zero_axis() {
        assert!(Viewport::new(0, 1080, Complex::new(0.0, 0.0), 2.0).is_err());
        assert!(Viewport::new(1080, 0, Complex::new(0.0, 0.0), 2.0).is_err());
    }

    #[test]
    fn viewport_fails_on_bad_scale() {
        assert!(Viewport::new(4, 4, Complex::new(0.0, 0.0), 0.0).is_err());
        assert!(Viewport::new(4, 4, Complex::new(0.0, 0.0), -2.0).is_err());
        assert!(Viewport::new(4, 4, Complex::new(0.0, 0.0), ::std::f64::NAN).is_err());
    }

    #[test]
    fn viewport_passes_on_good_shape() {
        assert!(Viewport::new(1080, 1080, Complex::new(0.0, 0.0), 2.0).is_ok());
    }

    #[test]
    fn center_pixel_lands_on_center() {
        let vp = Viewport::new(8, 8, Complex::new(-0.5, 0.25), 2.0).unwrap();
        let p = vp.to_plane(4, 4);
        assert_eq!(p, Complex::new(-0.5, 0.25));
    }

    #[test]
    fn center_pixel_is_within_one_step_of_center() {
        let vp = Viewport::new(1080, 1080, Complex::new(0.0, 0.0), 2.0).unwrap();
        let p = vp.to_plane(540, 540);
        assert!((p.re - vp.center.re).abs() <= vp.dist_per_pixel());
        assert!((p.im - vp.center.im).abs() <= vp.dist_per_pixel());
    }

    #[test]
    fn shorter_side_defines_the_scale() {
        let vp = Viewport::new(8, 4, Complex::new(0.0, 0.0), 2.0).unwrap();
        assert_eq!(vp.dist_per_pixel(), 1.0);
        assert_eq!(vp.to_plane(0, 0), Complex::new(-4.0, -2.0));
        assert_eq!(vp.to_plane(8, 4), Complex::new(4.0, 2.0));
    }

    #[test]
    fn pixels_are_square_on_oblong_grids() {
        let vp = Viewport::new(1920, 1080, Complex::new(0.0, 0.0), 2.0).unwrap();
        let origin = vp.to_plane(0, 0);
        let dx = vp.to_plane(1, 0).re - origin.re;
        let dy = vp.to_plane(0, 1).im - origin.im;
        assert!((dx - dy).abs() < 1e-12);
        assert!((dx - vp.dist_per_pixel()).abs() < 1e-12);
    }
}
