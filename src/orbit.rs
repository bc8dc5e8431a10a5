//! The orbit tracer.  Re-runs the same `z = z * z + c` recurrence the
//! raster uses, from an arbitrary seed screen point, and projects
//! each iterate back to screen space so the path can be drawn over
//! the static image.
//!
//! The tracer is stateless and synchronous: every interaction event
//! produces a fresh trace that wholly supersedes the previous one.
//! Its divergence threshold is 10, deliberately looser than the
//! raster's escape radius of 4, so the drawn path visibly overshoots
//! the set boundary before it stops.  The two thresholds are not
//! interchangeable; unifying them changes both images.
use planes::PlaneMapper;

/// How far (squared) an iterate may wander before the trace stops.
/// Checked strictly-greater, after the point has been recorded, so
/// the escaping point is the last one drawn.
const DIVERGENCE_THRESHOLD: f64 = 10.0;

/// One iterate of the orbit, projected to screen space.  Divergent
/// orbits leave the canvas, so coordinates are signed and unclipped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrbitPoint {
    /// Horizontal screen coordinate, possibly off-canvas.
    pub x: i64,
    /// Vertical screen coordinate, possibly off-canvas.
    pub y: i64,
}

/// One drawable line of the orbit path, with its fade color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    /// The end of the segment closer to the seed.
    pub start: OrbitPoint,
    /// The end of the segment closer to the newest iterate.
    pub end: OrbitPoint,
    /// Red-channel-only fade color: near-opaque at the newest
    /// segment, darkening toward the seed.
    pub color: [u8; 3],
}

/// Traces the orbit of the seed point for up to `budget` iterations.
///
/// The seed's own screen position is point 0.  Each step applies the
/// simultaneous update (the imaginary part is computed from the
/// pre-update real part), projects the new iterate to the screen,
/// and records it; once the squared magnitude exceeds the divergence
/// threshold the trace stops, with that iterate as the final point.
/// The result holds at most `budget + 1` points and always at least
/// the seed.
pub fn trace(seed: (i64, i64), budget: usize, plane: &PlaneMapper) -> Vec<OrbitPoint> {
    let c = plane.screen_to_point(seed.0, seed.1);
    let (mut re, mut im) = (c.re, c.im);

    let mut points = Vec::with_capacity(budget + 1);
    points.push(OrbitPoint {
        x: seed.0,
        y: seed.1,
    });

    for _ in 0..budget {
        let re_old = re;
        re = re * re - im * im + c.re;
        im = 2.0 * re_old * im + c.im;

        let (x, y) = plane.point_to_screen(&num::Complex::new(re, im));
        points.push(OrbitPoint { x, y });

        if re * re + im * im > DIVERGENCE_THRESHOLD {
            break;
        }
    }
    points
}

/// Converts a traced orbit into drawable segments, newest first.
///
/// Walking from the newest iterate back toward the seed matches the
/// display order; the fade is a function of each segment's end
/// point's distance from the end of the sequence, so the newest
/// segment is full red (255) and the one touching the seed has faded
/// to roughly half.  A trace of fewer than two points yields no
/// segments.
pub fn segments(points: &[OrbitPoint]) -> Vec<Segment> {
    let total = points.len();
    let mut out = Vec::with_capacity(total.saturating_sub(1));
    for i in (1..total).rev() {
        let fade = fade_level(total - 1 - i, total);
        out.push(Segment {
            start: points[i - 1],
            end: points[i],
            color: [fade, 0, 0],
        });
    }
    out
}

// 255 * (1 - 0.5 * index_from_end / total), truncated; always in
// (127, 255] for a nonempty trace.
fn fade_level(index_from_end: usize, total: usize) -> u8 {
    (255.0 * (1.0 - 0.5 * (index_from_end as f64) / (total as f64))) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;

    fn plane() -> PlaneMapper {
        PlaneMapper::new(1500, Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).unwrap()
    }

    #[test]
    fn zero_budget_yields_only_the_seed() {
        let pm = plane();
        let points = trace((750, 500), 0, &pm);
        assert_eq!(points, vec![OrbitPoint { x: 750, y: 500 }]);
        assert!(segments(&points).is_empty());
    }

    #[test]
    fn bounded_seed_uses_the_whole_budget() {
        let pm = plane();
        // Screen (1000, 500) maps to the origin, which never diverges.
        let points = trace((1000, 500), 30, &pm);
        assert_eq!(points.len(), 31);
        for p in &points {
            assert_eq!(*p, OrbitPoint { x: 1000, y: 500 });
        }
    }

    #[test]
    fn divergent_seed_stops_well_before_the_cap() {
        let pm = plane();
        // Screen (2000, 500) maps to c = 2 + 0i, which blows up at once.
        let points = trace((2000, 500), 100, &pm);
        assert!(points.len() < 10, "trace ran {} points", points.len());
        assert_eq!(points[0], OrbitPoint { x: 2000, y: 500 });
    }

    #[test]
    fn escaping_point_is_recorded_before_the_trace_stops() {
        let pm = plane();
        let points = trace((2000, 500), 100, &pm);
        // c = 2: the first iterate is 2*2 + 2 = 6, past the threshold
        // but still part of the visible path.
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], OrbitPoint { x: 4000, y: 500 });
    }

    #[test]
    fn segments_run_newest_first_and_fade_toward_the_seed() {
        let pm = plane();
        let points = trace((1000, 500), 8, &pm);
        let segs = segments(&points);
        assert_eq!(segs.len(), points.len() - 1);
        assert_eq!(segs[0].end, *points.last().unwrap());
        assert_eq!(segs.last().unwrap().start, points[0]);

        assert_eq!(segs[0].color, [255, 0, 0]);
        let mut previous = 255u8;
        for seg in &segs {
            assert_eq!(seg.color[1], 0);
            assert_eq!(seg.color[2], 0);
            assert!(seg.color[0] <= previous, "fade rose mid-path");
            assert!(seg.color[0] > 127, "fade dropped below half");
            previous = seg.color[0];
        }
    }
}
