extern crate ndarray;

use ndarray::*;
use num_complex::Complex64;
use crate::linalg_utils::*;
use crate::orthonormal_basis::*;
use crate::polynomial::*;

///Evaluates the Bergman kernel on the diagonal, `S(z) = sum_b |p_b(z)|^2`, where
///`p_b` is the polynomial whose coefficients are the basis vector `b`.
///Every entry of `z` is treated as a separate query point and the result has
///the shape of `z`. Only the real part is kept; the sum has no imaginary part.
pub fn bergman_kernel<S, D>(z : &ArrayBase<S, D>, basis : &OrthonormalBasis) -> Array<f64, D>
    where S : Data<Elem = Complex64>, D : Dimension {
    let mut result : Array<f64, D> = Array::zeros(z.raw_dim());
    for coefficients in basis.iter() {
        let p_b = polyval_array(coefficients, z);
        result += &sq_magnitudes(&p_b);
    }
    result
}

pub fn bergman_kernel_at(z : Complex64, basis : &OrthonormalBasis) -> f64 {
    let mut result = 0.0f64;
    for coefficients in basis.iter() {
        result += polyval(coefficients, z).norm_sqr();
    }
    result
}
