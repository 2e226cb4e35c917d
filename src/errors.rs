//! Configuration validation errors.  A bad viewport or iteration
//! limit is caught here, before any pixel is computed, rather than
//! producing an empty or stretched image downstream.

/// The ways a render configuration can be rejected.  Every variant is
/// raised at construction time; nothing in the hot loop can fail.
#[derive(Debug, Fail, PartialEq)]
pub enum ConfigError {
    /// The output grid has a zero-length axis.
    #[fail(
        display = "image resolution must be positive on both axes, got {}x{}",
        width, height
    )]
    EmptyResolution {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// The scale does not describe a usable region of the plane.
    #[fail(display = "scale must be a positive finite number, got {}", scale)]
    InvalidScale {
        /// The rejected scale value.
        scale: f64,
    },

    /// The orbit must be allowed at least one step.
    #[fail(display = "iteration limit must be at least 1")]
    ZeroIterationLimit,
}
