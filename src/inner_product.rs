extern crate ndarray;

use ndarray::*;
use num_complex::Complex64;
use crate::linalg_utils::*;

///An inner product `<u, v>` on coordinate vectors of a fixed-dimensional complex
///space. Implementors are assumed (not checked) to be linear in `u`,
///conjugate-symmetric, and positive-definite.
pub trait InnerProduct {
    ///Evaluates `<u, v>`. Callers guarantee `u` and `v` have the dimension of
    ///the owning space.
    fn evaluate(&self, u : ArrayView1<Complex64>, v : ArrayView1<Complex64>) -> Complex64;
}

///The standard Hermitian inner product on `C^n`: `<u, v> = sum_j u[j] * conj(v[j])`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DotProduct;

impl InnerProduct for DotProduct {
    fn evaluate(&self, u : ArrayView1<Complex64>, v : ArrayView1<Complex64>) -> Complex64 {
        conj_dot(u, v)
    }
}

impl<'a, P : InnerProduct + ?Sized> InnerProduct for &'a P {
    fn evaluate(&self, u : ArrayView1<Complex64>, v : ArrayView1<Complex64>) -> Complex64 {
        (**self).evaluate(u, v)
    }
}
