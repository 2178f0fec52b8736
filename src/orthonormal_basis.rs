extern crate ndarray;

use ndarray::*;
use num_complex::Complex64;
use serde::{Serialize, Deserialize};
use crate::inner_product::*;

///An ordered basis of a `dimension`-dimensional space, stored as the rows of a
///square matrix. Row `i` holds the coordinates (polynomial coefficients, when the
///space is a polynomial space) of the `i`-th basis vector. Produced by
///[`crate::inner_product_space::InnerProductSpace::gram_schmidt`] and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrthonormalBasis {
    vectors : Array2<Complex64>
}

impl OrthonormalBasis {
    pub(crate) fn from_rows(vectors : Array2<Complex64>) -> OrthonormalBasis {
        OrthonormalBasis {
            vectors
        }
    }

    ///Number of basis vectors, which is also the length of each one.
    pub fn get_dimension(&self) -> usize {
        self.vectors.shape()[0]
    }

    pub fn vector(&self, index : usize) -> ArrayView1<Complex64> {
        self.vectors.row(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = ArrayView1<'_, Complex64>> + '_ {
        self.vectors.outer_iter()
    }

    pub fn as_matrix(&self) -> ArrayView2<Complex64> {
        self.vectors.view()
    }

    ///Computes the matrix of pairwise inner products `G[i][j] = <B_i, B_j>`,
    ///which is the identity up to rounding for an orthonormal basis.
    pub fn gram_matrix<P : InnerProduct>(&self, inner_product : &P) -> Array2<Complex64> {
        let n = self.get_dimension();
        let mut result = Array::zeros((n, n));
        for i in 0..n {
            for j in 0..n {
                result[[i, j]] = inner_product.evaluate(self.vector(i), self.vector(j));
            }
        }
        result
    }

    ///Largest entrywise deviation of the Gram matrix from the identity.
    pub fn orthonormality_error<P : InnerProduct>(&self, inner_product : &P) -> f64 {
        let gram = self.gram_matrix(inner_product);
        let mut result = 0.0f64;
        for ((i, j), value) in gram.indexed_iter() {
            let expected = if (i == j) { 1.0 } else { 0.0 };
            let deviation = (value - Complex64::new(expected, 0.0)).norm();
            result = result.max(deviation);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg_utils::*;
    use crate::test_utils::*;

    #[test]
    fn identity_is_orthonormal_under_dot_product() {
        let basis = OrthonormalBasis::from_rows(complex_eye(5));
        assert_eq!(basis.get_dimension(), 5);
        assert_eps_equals(basis.orthonormality_error(&DotProduct), 0.0);
    }

    #[test]
    fn scaled_identity_is_not_orthonormal() {
        let basis = OrthonormalBasis::from_rows(complex_eye(3).mapv(|x| x * 2.0));
        assert_eps_equals(basis.orthonormality_error(&DotProduct), 3.0);
    }

    #[test]
    fn iter_visits_rows_in_order() {
        let basis = OrthonormalBasis::from_rows(complex_eye(3));
        for (i, row) in basis.iter().enumerate() {
            assert_equal_complex_vectors(&row.to_owned(), &standard_basis_vector(3, i));
        }
    }
}
