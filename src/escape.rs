//! The escape evaluator: how quickly does a point of the complex
//! plane flee to infinity under `z = z * z + c`?
//!
//! The iteration here is seeded at `z = c` rather than the textbook
//! `z = 0`.  The two forms differ by exactly one iteration for every
//! point, and the rendered image depends on this choice, so it is
//! preserved exactly rather than "fixed".  Squared components are
//! tracked incrementally so the escape test needs no square root.
use num::Complex;

/// The escape radius, squared.  A point whose squared magnitude
/// reaches this value can never return.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts the iterations of `z = z * z + c`, starting from `z = c`,
/// before the squared magnitude reaches 4, up to `limit`.  A return
/// value of `limit` means the point never escaped and is presumed a
/// member of the set.  Always terminates within `limit` steps.
pub fn escape_time(c: Complex<f64>, limit: usize) -> usize {
    let mut n = 0;
    let (mut re, mut im) = (c.re, c.im);
    let (mut re2, mut im2) = (re * re, im * im);
    while n < limit && re2 + im2 < ESCAPE_RADIUS_SQUARED {
        im = 2.0 * re * im + c.im;
        re = re2 - im2 + c.re;
        re2 = re * re;
        im2 = im * im;
        n += 1;
    }
    n
}

/// Maps an iteration count to a brightness in [0, 1] with a cubic
/// falloff: immediate escape is near-white, a bound member is black.
pub fn brightness(n: usize, limit: usize) -> f64 {
    (1.0 - (n as f64) / (limit as f64)).powi(3)
}

/// Iteration count and brightness for a single point.
pub fn evaluate(c: Complex<f64>, limit: usize) -> (usize, f64) {
    let n = escape_time(c, limit);
    (n, brightness(n, limit))
}

/// A brightness scaled to an 8-bit grayscale triple.
pub fn grayscale(brightness: f64) -> [u8; 3] {
    let v = (brightness * 255.0).round() as u8;
    [v, v, v]
}
