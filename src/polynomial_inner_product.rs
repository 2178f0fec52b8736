extern crate ndarray;

use ndarray::*;
use num_complex::Complex64;
use crate::inner_product::*;
use crate::polynomial::*;
use crate::sample_set::*;
use crate::weight_function::*;

///The weighted `L^2` inner product on polynomials of degree below `degree`,
///discretized over a [`SampleSet`] `K`:
///
///`<u, v> = sum_{p in K} area_weight * p_u(p) * conj(p_v(p)) * exp(-2 * degree * Q(p))`
///
///where `p_u(z) = sum_j u[j] z^j`. This is a Riemann sum for
///`integral_K p_u conj(p_v) exp(-2 n Q) dm`.
pub struct WeightedPolynomialIntegral<'a> {
    degree : usize,
    samples : &'a SampleSet,
    ///`exp(-2 * degree * Q(p))` for each sample point `p`
    damping : Array1<f64>
}

impl<'a> WeightedPolynomialIntegral<'a> {
    pub fn new<W : WeightFunction + ?Sized>(degree : usize, weight : &W, samples : &'a SampleSet) -> WeightedPolynomialIntegral<'a> {
        let exponent_scale = -2.0 * (degree as f64);
        let damping = weight.weights(samples.get_points()).mapv(|q| (exponent_scale * q).exp());
        WeightedPolynomialIntegral {
            degree,
            samples,
            damping
        }
    }

    ///The unweighted (`Q = 0`) inner product over `samples`.
    pub fn unweighted(degree : usize, samples : &'a SampleSet) -> WeightedPolynomialIntegral<'a> {
        WeightedPolynomialIntegral::new(degree, &ZeroWeight, samples)
    }

    pub fn get_degree(&self) -> usize {
        self.degree
    }

    pub fn get_samples(&self) -> &SampleSet {
        self.samples
    }
}

impl<'a> InnerProduct for WeightedPolynomialIntegral<'a> {
    fn evaluate(&self, u : ArrayView1<Complex64>, v : ArrayView1<Complex64>) -> Complex64 {
        let area_weight = self.samples.get_area_weight();
        let mut result = Complex64::new(0.0, 0.0);
        for (k, point) in self.samples.get_points().iter().enumerate() {
            let p = polyval(u, *point);
            let q = polyval(v, *point);
            result += (p * q.conj() * self.damping[[k,]]) * area_weight;
        }
        result
    }
}
