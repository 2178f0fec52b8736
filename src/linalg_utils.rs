extern crate ndarray;

use ndarray::*;
use num_complex::Complex64;

///Computes the Hermitian dot product `sum_j u[j] * conj(v[j])`, which is
///linear in `u` and conjugate-linear in `v`.
pub fn conj_dot(u : ArrayView1<Complex64>, v : ArrayView1<Complex64>) -> Complex64 {
    let mut result = Complex64::new(0.0, 0.0);
    for (u_j, v_j) in u.iter().zip(v.iter()) {
        result += u_j * v_j.conj();
    }
    result
}

///Computes `p * conj(p)` elementwise and keeps the real part, which is
///all there is up to rounding.
pub fn sq_magnitudes<S, D>(values : &ArrayBase<S, D>) -> Array<f64, D>
    where S : Data<Elem = Complex64>, D : Dimension {
    values.mapv(|p| (p * p.conj()).re)
}

///The `index`-th standard basis vector of `C^dimension`.
pub fn standard_basis_vector(dimension : usize, index : usize) -> Array1<Complex64> {
    let mut result = Array::zeros((dimension,));
    result[[index,]] = Complex64::new(1.0, 0.0);
    result
}

///The complex identity matrix, whose rows are the standard basis.
pub fn complex_eye(dimension : usize) -> Array2<Complex64> {
    Array::from_shape_fn((dimension, dimension), |(i, j)| {
        if (i == j) {
            Complex64::new(1.0, 0.0)
        } else {
            Complex64::new(0.0, 0.0)
        }
    })
}
