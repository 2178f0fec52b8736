extern crate ndarray;

use ndarray::*;
use num_complex::Complex64;
use serde::{Serialize, Deserialize};
use crate::error::*;
use crate::params::*;
use crate::sample_set::*;

///Samples the region `K` inside the square `S` with lower-left corner `corner`
///and side `width`, keeping the grid points where `condition` holds:
///
///```text
///  (corner + i*width) ------------- (corner + (1+i)*width)
///                     |    __   S |
///                     |   /  \    |
///                     |  / K  )   |
///                     | |    (    |
///                     |  \___/    |
///            (corner) ------------- (corner + width)
///```
///
///The grid has `resolution + 1` points per side, edges included, and every kept
///point stands for an area of `(width / resolution)^2`. Points are listed with
///the imaginary part varying slowest.
pub fn sample_region<F>(corner : Complex64, width : f64, condition : F, resolution : usize) -> Result<SampleSet>
    where F : Fn(Complex64) -> bool {
    if (!width.is_finite() || width <= 0.0) {
        error!("Region width must be positive and finite, got {}", width);
        return Err(invalid_region("width must be positive and finite"));
    }
    if (resolution == 0) {
        error!("Region resolution must be positive");
        return Err(invalid_region("resolution must be positive"));
    }

    let xx = Array1::linspace(corner.re, corner.re + width, resolution + 1);
    let yy = Array1::linspace(corner.im, corner.im + width, resolution + 1);

    let mut points = Vec::<Complex64>::new();
    for y in yy.iter() {
        for x in xx.iter() {
            let z = Complex64::new(*x, *y);
            if (condition(z)) {
                points.push(z);
            }
        }
    }

    let step = width / (resolution as f64);
    let area_weight = step * step;

    info!("Sampled {} of {} grid points with area weight {}", points.len(),
          (resolution + 1) * (resolution + 1), area_weight);

    SampleSet::new(Array::from(points), area_weight)
}

///Samples the real segment `[start, start + length)` at `resolution` equally
///spaced points (right end excluded), each carrying weight `length / resolution`.
///Sums over these samples are left Riemann sums of `integral dx` over the segment.
pub fn sample_interval(start : f64, length : f64, resolution : usize) -> Result<SampleSet> {
    if (!length.is_finite() || length <= 0.0) {
        error!("Interval length must be positive and finite, got {}", length);
        return Err(invalid_region("interval length must be positive and finite"));
    }
    if (resolution == 0) {
        error!("Interval resolution must be positive");
        return Err(invalid_region("resolution must be positive"));
    }

    let dx = length / (resolution as f64);
    let points = Array::from_shape_fn((resolution,), |k| Complex64::new(start + (k as f64) * dx, 0.0));
    SampleSet::new(points, dx)
}

///The square a region is cut out of, along with how finely to sample it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionSpec {
    pub corner : Complex64,
    pub width : f64,
    pub resolution : usize
}

impl Default for RegionSpec {
    ///The unit square `[0, 1] x [0, 1]`
    fn default() -> RegionSpec {
        RegionSpec {
            corner : Complex64::new(0.0, 0.0),
            width : 1.0,
            resolution : DEFAULT_RESOLUTION
        }
    }
}

impl RegionSpec {
    ///Samples the part of the square where `condition` holds.
    pub fn sample<F>(&self, condition : F) -> Result<SampleSet>
        where F : Fn(Complex64) -> bool {
        sample_region(self.corner, self.width, condition, self.resolution)
    }

    ///Samples the whole square.
    pub fn sample_all(&self) -> Result<SampleSet> {
        self.sample(|_| true)
    }
}
