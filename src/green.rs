extern crate ndarray;

use ndarray::*;
use num_complex::Complex64;
use crate::bergman::*;
use crate::error::*;
use crate::inner_product_space::*;
use crate::orthonormal_basis::*;
use crate::polynomial_inner_product::*;
use crate::sample_set::*;
use crate::weight_function::*;

///The `n`-th approximation of the weighted pluricomplex Green function
///
///`G_{K,Q}(z) = sup{ u(z) : u plurisubharmonic of logarithmic growth, u <= Q on K }`
///
///given by `log(S_n(z)) / (2n)`, where `S_n` is the Bergman kernel of an
///orthonormal basis for polynomials of degree below `n` under the
///`exp(-2nQ)`-weighted inner product on `K`.
///
///Holds the orthonormal basis so that it can be evaluated at any number of
///query batches without redoing the Gram-Schmidt process.
#[derive(Clone, Debug)]
pub struct GreenApproximant {
    degree : usize,
    basis : OrthonormalBasis
}

impl GreenApproximant {
    pub fn new<W : WeightFunction + ?Sized>(degree : usize, weight : &W, samples : &SampleSet) -> Result<GreenApproximant> {
        if (degree == 0) {
            error!("Green approximant requested for degree 0");
            return Err(GreenError::InvalidDegree);
        }
        info!("Building degree {} Green approximant over {} samples", degree, samples.len());

        let inner_product = WeightedPolynomialIntegral::new(degree, weight, samples);
        let space = InnerProductSpace::new(degree, inner_product)?;
        let basis = space.gram_schmidt()?;

        Ok(GreenApproximant {
            degree,
            basis
        })
    }

    pub fn get_degree(&self) -> usize {
        self.degree
    }

    pub fn get_basis(&self) -> &OrthonormalBasis {
        &self.basis
    }

    pub fn evaluate<S, D>(&self, z : &ArrayBase<S, D>) -> Array<f64, D>
        where S : Data<Elem = Complex64>, D : Dimension {
        let scale = 2.0 * (self.degree as f64);
        bergman_kernel(z, &self.basis).mapv(|s| s.ln() / scale)
    }

    pub fn evaluate_at(&self, z : Complex64) -> f64 {
        let scale = 2.0 * (self.degree as f64);
        bergman_kernel_at(z, &self.basis).ln() / scale
    }
}

///Evaluates the degree-`degree` Green approximant for weight `weight` on the
///region sampled by `samples` at every entry of `z`.
pub fn green<S, D, W>(z : &ArrayBase<S, D>, degree : usize, weight : &W, samples : &SampleSet) -> Result<Array<f64, D>>
    where S : Data<Elem = Complex64>, D : Dimension, W : WeightFunction + ?Sized {
    let approximant = GreenApproximant::new(degree, weight, samples)?;
    Ok(approximant.evaluate(z))
}

pub fn green_at<W : WeightFunction + ?Sized>(z : Complex64, degree : usize, weight : &W, samples : &SampleSet) -> Result<f64> {
    let approximant = GreenApproximant::new(degree, weight, samples)?;
    Ok(approximant.evaluate_at(z))
}
