#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot raster with an interactive orbit overlay
//!
//! The Mandelbrot set takes a point on the complex plane and
//! repeatedly multiplies it by itself, measuring how quickly that
//! number goes to infinity.  This "velocity" gives every pixel of a
//! fixed region a brightness, and the resulting raster is computed
//! once, in parallel, row by row.
//!
//! The second half of this crate retraces that same iteration from
//! any single point a user touches: each iterate of the orbit is
//! mapped back onto the pixel grid, and consecutive iterates become
//! line segments with a fade color, newest brightest, so the path of
//! the recurrence can be drawn over the static image.  Both halves
//! share one coordinate mapping, and the windowing layer that
//! actually displays them lives outside this crate entirely.

extern crate crossbeam;
extern crate num;

pub mod controls;
pub mod escape;
pub mod orbit;
pub mod planes;
pub mod raster;

pub use controls::Controls;
pub use orbit::{segments, trace, OrbitPoint, Segment};
pub use planes::{Pixel, PlaneMapper};
pub use raster::{PixelBuffer, PixelRow, Renderer};
