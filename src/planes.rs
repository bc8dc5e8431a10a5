//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral pixel plane with an origin at
//! 0,0, and a rectangle on the complex plane with an arbitrary pair
//! of corners defining the leftlower and rightupper corners.
//!
//! The pixel plane's height is not chosen independently; it is
//! derived once from the requested width and the aspect ratio of the
//! complex region, and is fixed thereafter.
use num::Complex;

/// Describes the width and height of an integral plane that is
/// assumed to start at 0,0 and all values are assumed to be
/// non-negative integers.
#[derive(Copy, Clone, Debug)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// Describes the x, y of a point in the pixel plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian
/// plane, and a complex cartesian plane.  Maps points from one to
/// the other.  Mapping is pure and total for finite input; mapping a
/// point back to the screen is *not* bounds-checked, since a
/// divergent orbit legitimately leaves the canvas, so screen
/// coordinates are signed and callers must tolerate or clip
/// out-of-range values.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The right-upper hand corner of the integral pixel plane.
    /// The left-lower is assumed to be at 0,0.
    pub integral_plane: IntegralPlane,
    /// The two coordinates defining the complex cartesian plane,
    /// left-lower and right-upper.
    pub complex_plane: ComplexPlane,
    // The ratio mapping the width and height, respectively, of the
    // two different planes.
    grid_factors: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the pixel width and two points describing
    /// the complex plane; the pixel height is derived from the width
    /// and the region's aspect ratio.  Degenerate regions and zero
    /// sizes are configuration errors and are rejected here, before
    /// any rendering can begin.
    pub fn new(
        width: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper, String> {
        if rightupper.re <= leftlower.re {
            return Err(
                "The left lower corner is not to the left of the right upper corner.".to_string(),
            );
        }

        if rightupper.im <= leftlower.im {
            return Err(
                "The left lower corner is not lower than the right upper corner.".to_string(),
            );
        }

        if width == 0 {
            return Err("The image width must be at least one pixel.".to_string());
        }

        // The total size of the region.
        let region_width = rightupper.re - leftlower.re;
        let region_height = rightupper.im - leftlower.im;

        // The height preserving the region's aspect ratio, truncated.
        let height = ((width as f64) / region_width * region_height) as usize;
        if height == 0 {
            return Err("The derived image height is zero pixels.".to_string());
        }

        // these are the multipliers of the complex plane to the pixel plane.
        let grid_factors = (
            (width as f64) / region_width,
            (height as f64) / region_height,
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(leftlower, rightupper),
            grid_factors,
        })
    }

    /// The width of the pixel plane.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// The derived height of the pixel plane.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a pixel on the integral cartesian plane, map that as
    /// closely as possible to a point on the complex cartesian plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        self.screen_to_point(pixel.0 as i64, pixel.1 as i64)
    }

    /// Given any screen coordinate, including one outside the canvas,
    /// map it to a point on the complex cartesian plane.  Seed points
    /// arrive from pointer events as signed coordinates, so this is
    /// the form the orbit tracer uses.
    pub fn screen_to_point(&self, x: i64, y: i64) -> Complex<f64> {
        Complex::new(
            ((x as f64) / self.grid_factors.0) + self.complex_plane.0.re,
            ((y as f64) / self.grid_factors.1) + self.complex_plane.0.im,
        )
    }

    /// Given a complex number corresponding to a location on the
    /// complex cartesian plane, map that as closely as possible to a
    /// screen coordinate, truncated toward zero.  The result may lie
    /// outside the canvas when the point lies outside the complex
    /// region.
    pub fn point_to_screen(&self, point: &Complex<f64>) -> (i64, i64) {
        let left = (point.re - self.complex_plane.0.re) * self.grid_factors.0;
        let top = (point.im - self.complex_plane.0.im) * self.grid_factors.1;
        (left as i64, top as i64)
    }
}
