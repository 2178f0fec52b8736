extern crate ndarray;

use ndarray::*;
use num_complex::Complex64;
use crate::error::*;
use crate::green::*;
use crate::params::*;
use crate::sample_set::*;

///A rectangular grid of query points laid out for surface plots: entry `[i, j]`
///has real part `re[[i, j]]` (varying along `j`) and imaginary part
///`im[[i, j]]` (varying along `i`).
#[derive(Clone, Debug)]
pub struct EvaluationGrid {
    pub re : Array2<f64>,
    pub im : Array2<f64>,
    pub points : Array2<Complex64>
}

impl EvaluationGrid {
    ///Builds a grid over the bounding box of `samples`, widened on every side by
    ///`margin_multiplier` times the box's extent along that axis, with
    ///`resolution + 1` points per axis.
    pub fn around(samples : &SampleSet, margin_multiplier : f64, resolution : usize) -> Result<EvaluationGrid> {
        if (resolution == 0) {
            error!("Evaluation grid resolution must be positive");
            return Err(invalid_region("grid resolution must be positive"));
        }
        let (mut min_re, mut max_re, mut min_im, mut max_im) = samples.bounding_box()?;

        let re_margin = (max_re - min_re) * margin_multiplier;
        let im_margin = (max_im - min_im) * margin_multiplier;
        min_re -= re_margin;
        max_re += re_margin;
        min_im -= im_margin;
        max_im += im_margin;

        let xx = Array1::linspace(min_re, max_re, resolution + 1);
        let yy = Array1::linspace(min_im, max_im, resolution + 1);
        let shape = (resolution + 1, resolution + 1);

        let re = Array::from_shape_fn(shape, |(_, j)| xx[[j,]]);
        let im = Array::from_shape_fn(shape, |(i, _)| yy[[i,]]);
        let points = Array::from_shape_fn(shape, |(i, j)| Complex64::new(xx[[j,]], yy[[i,]]));

        debug!("Evaluation grid spans [{}, {}] x [{}, {}]", min_re, max_re, min_im, max_im);

        Ok(EvaluationGrid {
            re,
            im,
            points
        })
    }

    ///[`Self::around`] with the default margin and resolution.
    pub fn around_default(samples : &SampleSet) -> Result<EvaluationGrid> {
        EvaluationGrid::around(samples, GRID_MARGIN_MULTIPLIER, GRID_RESOLUTION)
    }

    ///Values of the approximant at every grid point, in the grid's layout.
    pub fn evaluate(&self, approximant : &GreenApproximant) -> Array2<f64> {
        approximant.evaluate(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region_sampler::*;
    use crate::test_utils::*;
    use crate::weight_function::*;

    #[test]
    fn unit_square_grid_spans_margins() {
        let samples = RegionSpec::default().sample_all().unwrap();
        let grid = EvaluationGrid::around_default(&samples).unwrap();
        assert_eq!(grid.points.shape(), &[GRID_RESOLUTION + 1, GRID_RESOLUTION + 1]);
        assert_eps_equals(grid.re[[0, 0]], -1.5);
        assert_eps_equals(grid.re[[0, GRID_RESOLUTION]], 2.5);
        assert_eps_equals(grid.im[[0, 0]], -1.5);
        assert_eps_equals(grid.im[[GRID_RESOLUTION, 0]], 2.5);
    }

    #[test]
    fn points_agree_with_coordinates() {
        let samples = unit_disk_samples(10);
        let grid = EvaluationGrid::around(&samples, 0.5, 8).unwrap();
        for ((i, j), z) in grid.points.indexed_iter() {
            assert_eq!(z.re, grid.re[[i, j]]);
            assert_eq!(z.im, grid.im[[i, j]]);
        }
    }

    #[test]
    fn empty_samples_have_no_grid() {
        let samples = SampleSet::new(Array::zeros((0,)), 1.0).unwrap();
        assert!(matches!(EvaluationGrid::around_default(&samples), Err(GreenError::EmptySampleSet)));
    }

    #[test]
    fn surface_is_smallest_near_region() {
        let samples = unit_disk_samples(30);
        let grid = EvaluationGrid::around(&samples, 1.5, 20).unwrap();
        let approximant = GreenApproximant::new(6, &ZeroWeight, &samples).unwrap();
        let values = grid.evaluate(&approximant);
        assert_eq!(values.shape(), &[21, 21]);
        //The sampled disk is symmetric, so the middle of the grid is the origin
        let center = values[[10, 10]];
        let corner = values[[0, 0]];
        assert!(corner > center);
        assert!(corner > 1.0);
    }
}
