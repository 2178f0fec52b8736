extern crate ndarray;

use ndarray::*;
use num_complex::Complex64;

///A real-valued weight `Q` on the complex plane, applied pointwise. The weighted
///extremal problem bounds admissible functions by `Q` on the region, and the
///discretized inner product damps each sample by `exp(-2 n Q)`.
pub trait WeightFunction {
    fn weight(&self, z : Complex64) -> f64;

    fn weights(&self, points : ArrayView1<Complex64>) -> Array1<f64> {
        points.mapv(|z| self.weight(z))
    }
}

///`Q = 0`, the unweighted case.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroWeight;

impl WeightFunction for ZeroWeight {
    fn weight(&self, _z : Complex64) -> f64 {
        0.0
    }
}

///`Q(z) = scale * |z|^2`
#[derive(Clone, Copy, Debug)]
pub struct QuadraticWeight {
    pub scale : f64
}

impl WeightFunction for QuadraticWeight {
    fn weight(&self, z : Complex64) -> f64 {
        self.scale * z.norm_sqr()
    }
}

impl<F> WeightFunction for F where F : Fn(Complex64) -> f64 {
    fn weight(&self, z : Complex64) -> f64 {
        self(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn zero_weight_vanishes_everywhere() {
        let points = random_complex_vector(10);
        let weights = ZeroWeight.weights(points.view());
        for i in 0..10 {
            assert_eq!(weights[[i,]], 0.0);
        }
    }

    #[test]
    fn quadratic_weight_scales_modulus() {
        let q = QuadraticWeight { scale : 0.5 };
        assert_eps_equals(q.weight(Complex64::new(3.0, 4.0)), 12.5);
    }

    #[test]
    fn closures_are_weights() {
        let q = |z : Complex64| z.re.abs();
        let points = array![Complex64::new(-2.0, 1.0), Complex64::new(0.5, 7.0)];
        let weights = q.weights(points.view());
        assert_eq!(weights, array![2.0, 0.5]);
    }
}
