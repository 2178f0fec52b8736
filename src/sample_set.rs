extern crate ndarray;

use ndarray::*;
use num_complex::Complex64;
use serde::{Serialize, Deserialize};
use crate::error::*;

///A discretized region of the complex plane: a finite set of sample points,
///each standing for the same patch of area `area_weight`.
///Sums over the points, scaled by `area_weight`, approximate area integrals
///over the region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    points : Array1<Complex64>,
    area_weight : f64
}

impl SampleSet {
    pub fn new(points : Array1<Complex64>, area_weight : f64) -> Result<SampleSet> {
        if (!area_weight.is_finite() || area_weight <= 0.0) {
            error!("Sample area weight must be positive and finite, got {}", area_weight);
            return Err(invalid_region("area weight must be positive and finite"));
        }
        Ok(SampleSet {
            points,
            area_weight
        })
    }

    pub fn get_points(&self) -> ArrayView1<Complex64> {
        self.points.view()
    }

    pub fn get_area_weight(&self) -> f64 {
        self.area_weight
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.len() == 0
    }

    ///Total area represented by the samples.
    pub fn area(&self) -> f64 {
        self.area_weight * (self.len() as f64)
    }

    ///Smallest axis-aligned box `(min_re, max_re, min_im, max_im)` containing every point.
    pub fn bounding_box(&self) -> Result<(f64, f64, f64, f64)> {
        if (self.is_empty()) {
            return Err(GreenError::EmptySampleSet);
        }
        let mut min_re = f64::INFINITY;
        let mut max_re = f64::NEG_INFINITY;
        let mut min_im = f64::INFINITY;
        let mut max_im = f64::NEG_INFINITY;
        for z in self.points.iter() {
            min_re = min_re.min(z.re);
            max_re = max_re.max(z.re);
            min_im = min_im.min(z.im);
            max_im = max_im.max(z.im);
        }
        Ok((min_re, max_re, min_im, max_im))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn nonpositive_weights_are_rejected() {
        let points = array![Complex64::new(0.0, 0.0)];
        assert!(SampleSet::new(points.clone(), 0.0).is_err());
        assert!(SampleSet::new(points.clone(), -1.0).is_err());
        assert!(SampleSet::new(points, f64::NAN).is_err());
    }

    #[test]
    fn area_is_weight_times_count() {
        let samples = SampleSet::new(random_complex_vector(8), 0.25).unwrap();
        assert_eq!(samples.len(), 8);
        assert_eps_equals(samples.area(), 2.0);
    }

    #[test]
    fn bounding_box_spans_points() {
        let points = array![Complex64::new(-1.0, 2.0), Complex64::new(3.0, -4.0), Complex64::new(0.0, 0.5)];
        let samples = SampleSet::new(points, 1.0).unwrap();
        assert_eq!(samples.bounding_box().unwrap(), (-1.0, 3.0, -4.0, 2.0));
    }

    #[test]
    fn empty_set_has_no_bounding_box() {
        let samples = SampleSet::new(Array::zeros((0,)), 1.0).unwrap();
        assert!(samples.is_empty());
        assert_eq!(samples.bounding_box(), Err(GreenError::EmptySampleSet));
    }
}
