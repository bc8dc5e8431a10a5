// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The raster engine.  Renders the whole complex region once, as a
//! grayscale image, one row at a time.
//!
//! Rows are the parallelization boundary: a row depends on nothing
//! but its own index, so a fixed pool of workers drains a shared
//! queue of row indices and each returns its finished rows, tagged
//! by index, through its join handle.  Assembly places rows by index,
//! which makes the output independent of worker count and completion
//! order.  This render happens once at startup and blocks until the
//! full buffer is assembled; there is no partial-result policy, and
//! a worker failure is fatal.
use crossbeam::thread::ScopedJoinHandle;
use num::Complex;
use std::ops::Range;
use std::sync::{Arc, Mutex};

use escape::{evaluate, grayscale};
use planes::{Pixel, PlaneMapper};

type RowQueue = Arc<Mutex<Range<usize>>>;

/// A single finished row of 8-bit RGB triples, `width` entries long.
pub type PixelRow = Vec<[u8; 3]>;

/// The fully assembled image: one PixelRow per row index.  Populated
/// completely before it is handed out and immutable afterwards; the
/// static background never changes once rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    rows: Vec<PixelRow>,
}

impl PixelBuffer {
    fn assemble(width: usize, height: usize, mut finished: Vec<(usize, PixelRow)>) -> PixelBuffer {
        let mut rows = vec![PixelRow::new(); height];
        for (y, row) in finished.drain(..) {
            rows[y] = row;
        }
        PixelBuffer { width, rows }
    }

    /// The width of the image in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of the image in pixels.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The finished row at index `y`.
    pub fn row(&self, y: usize) -> &[[u8; 3]] {
        &self.rows[y]
    }
}

/// Renders the escape-time raster for a plane at a fixed iteration
/// limit.  The plane is validated at construction; by the time a
/// Renderer exists there is no failure path left in rendering.
pub struct Renderer {
    /// The mapping between the pixel grid and the complex region.
    pub plane: PlaneMapper,
    limit: usize,
}

impl Renderer {
    /// Requires the pixel width of the image, the left-lower and
    /// right-upper corners of the complex plane, and the iteration
    /// limit for the escape test.  The pixel height is derived from
    /// the region's aspect ratio.
    pub fn new(
        width: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
        limit: usize,
    ) -> Result<Self, String> {
        if limit == 0 {
            return Err("The iteration limit must be at least one.".to_string());
        }
        match PlaneMapper::new(width, leftlower, rightupper) {
            Ok(plane) => Ok(Renderer { plane, limit }),
            Err(u) => Err(u),
        }
    }

    /// Computes the complete row at index `y`: every pixel in the row
    /// is mapped to its complex point, evaluated, and shaded.
    fn compute_row(&self, y: usize) -> PixelRow {
        let mut row = PixelRow::with_capacity(self.plane.width());
        for x in 0..self.plane.width() {
            let c = self.plane.pixel_to_point(&Pixel(x, y));
            let (_, b) = evaluate(c, self.limit);
            row.push(grayscale(b));
        }
        row
    }

    /// The single-threaded render.  This is the reference the
    /// threaded version must agree with byte for byte.
    pub fn render_single(&self) -> PixelBuffer {
        let finished = (0..self.plane.height())
            .map(|y| (y, self.compute_row(y)))
            .collect();
        PixelBuffer::assemble(self.plane.width(), self.plane.height(), finished)
    }

    /// The multi-threaded render.  `threads` workers share a queue of
    /// row indices; each drains the queue and carries its finished
    /// rows back through its join handle.  Row computation is pure
    /// and rows are keyed by index, so the assembled buffer is
    /// identical for any worker count.  A pool of zero is treated as
    /// a pool of one; the buffer must come back fully populated.
    pub fn render(&self, threads: usize) -> PixelBuffer {
        let threads = if threads == 0 { 1 } else { threads };
        let queue: RowQueue = Arc::new(Mutex::new(0..self.plane.height()));
        let mut finished: Vec<(usize, PixelRow)> = vec![];
        crossbeam::scope(|spawner| {
            let handles: Vec<ScopedJoinHandle<Vec<(usize, PixelRow)>>> = (0..threads)
                .map(|_| {
                    let queue = queue.clone();
                    spawner.spawn(move |_| {
                        let mut done: Vec<(usize, PixelRow)> = vec![];
                        loop {
                            let y = { queue.lock().unwrap().next() };
                            match y {
                                Some(y) => done.push((y, self.compute_row(y))),
                                None => {
                                    break;
                                }
                            }
                        }
                        done
                    })
                })
                .collect();

            finished = handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .flatten()
                .collect()
        })
        .unwrap();
        PixelBuffer::assemble(self.plane.width(), self.plane.height(), finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_renderer() -> Renderer {
        Renderer::new(30, Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0), 40).unwrap()
    }

    #[test]
    fn renderer_rejects_bad_plane() {
        let r = Renderer::new(30, Complex::new(1.0, 1.0), Complex::new(-2.0, -1.0), 40);
        assert!(r.is_err());
    }

    #[test]
    fn renderer_rejects_zero_limit() {
        let r = Renderer::new(30, Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0), 0);
        assert!(r.is_err());
    }

    #[test]
    fn buffer_is_fully_populated() {
        let r = small_renderer();
        let buffer = r.render_single();
        assert_eq!(buffer.width(), 30);
        assert_eq!(buffer.height(), 20);
        for y in 0..buffer.height() {
            assert_eq!(buffer.row(y).len(), 30);
        }
    }

    #[test]
    fn render_is_invariant_under_worker_count() {
        let r = small_renderer();
        let reference = r.render_single();
        assert_eq!(reference, r.render(1));
        assert_eq!(reference, r.render(4));
        assert_eq!(reference, r.render(7));
    }

    #[test]
    fn interior_is_dark_and_exterior_is_bright() {
        let r = small_renderer();
        let buffer = r.render_single();
        // Pixel (20, 10) maps to the origin, a bound member.
        assert_eq!(buffer.row(10)[20], [0, 0, 0]);
        // The top-left corner maps to -2 - i, which escapes at once.
        assert_eq!(buffer.row(0)[0], [255, 255, 255]);
    }
}
