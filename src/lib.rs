#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set lives on the complex plane.  Take a point c,
//! start an orbit there, and repeatedly square it and add c back in.
//! Points inside the set orbit forever in a bounded region; points
//! outside fly off to infinity, and the number of steps it takes them
//! to get going is the "velocity" of that point.  This crate maps
//! every pixel of an output image to a point on the plane, measures
//! that velocity, and turns it into a color: a hue wheel for the
//! escapees and black for the interior.
//!
//! The pipeline is three pure pieces with a driver in front: the
//! viewport maps pixels to points, the escape counter measures the
//! velocity, the color mapper picks the color, and the renderer
//! walks the pixels and fills the buffer, optionally spreading rows
//! across threads.  The finished buffer goes to an image sink to be
//! written out.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
extern crate num;

pub mod color;
pub mod errors;
pub mod escape;
pub mod render;
pub mod sink;
pub mod viewport;

pub use color::escape_color;
pub use errors::ConfigError;
pub use escape::escape_count;
pub use render::Renderer;
pub use sink::{ImageSink, PnmSink};
pub use viewport::Viewport;
