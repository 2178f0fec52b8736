extern crate ndarray;

use ndarray::*;
use num_complex::Complex64;

///Evaluates `p(z) = sum_j coefficients[j] * z^j` using Horner's rule.
pub fn polyval(coefficients : ArrayView1<Complex64>, z : Complex64) -> Complex64 {
    let mut result = Complex64::new(0.0, 0.0);
    for coefficient in coefficients.iter().rev() {
        result = result * z + coefficient;
    }
    result
}

///Evaluates the polynomial with the given coefficients at every entry of `points`,
///preserving the shape of `points`.
pub fn polyval_array<S, D>(coefficients : ArrayView1<Complex64>, points : &ArrayBase<S, D>) -> Array<Complex64, D>
    where S : Data<Elem = Complex64>, D : Dimension {
    points.mapv(|z| polyval(coefficients, z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn empty_polynomial_is_zero() {
        let coefficients : Array1<Complex64> = Array::zeros((0,));
        assert_eq!(polyval(coefficients.view(), Complex64::new(3.0, 1.0)), Complex64::new(0.0, 0.0));
    }

    #[test]
    fn horner_matches_power_sum() {
        let coefficients = random_complex_vector(7);
        let z = Complex64::new(0.3, -0.8);
        let mut expected = Complex64::new(0.0, 0.0);
        let mut z_power = Complex64::new(1.0, 0.0);
        for j in 0..coefficients.len() {
            expected += coefficients[[j,]] * z_power;
            z_power = z_power * z;
        }
        assert_complex_eps_equals(polyval(coefficients.view(), z), expected);
    }

    #[test]
    fn array_evaluation_keeps_shape() {
        //p(z) = 1 + 2z
        let coefficients = array![Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)];
        let points = array![[Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
                            [Complex64::new(0.0, 1.0), Complex64::new(-1.0, 0.0)]];
        let values = polyval_array(coefficients.view(), &points);
        assert_eq!(values.shape(), &[2, 2]);
        assert_complex_eps_equals(values[[0, 0]], Complex64::new(1.0, 0.0));
        assert_complex_eps_equals(values[[0, 1]], Complex64::new(3.0, 0.0));
        assert_complex_eps_equals(values[[1, 0]], Complex64::new(1.0, 2.0));
        assert_complex_eps_equals(values[[1, 1]], Complex64::new(-1.0, 0.0));
    }
}
