extern crate ndarray;

use ndarray::*;
use num_complex::Complex64;
use crate::error::*;
use crate::inner_product::*;
use crate::linalg_utils::*;
use crate::orthonormal_basis::*;
use crate::vector_validation::*;

///A finite-dimensional inner product space over `C`. Vectors are represented
///by their coordinate vectors, complex arrays of length `dimension`.
///
///The space holds no vectors of its own; it pairs a dimension with an
///[`InnerProduct`] and derives norms, distances, projections and an
///orthonormal basis from it. Every operation validates the length of its
///arguments before handing them to the inner product.
pub struct InnerProductSpace<P : InnerProduct = DotProduct> {
    dimension : usize,
    inner_product : P
}

impl InnerProductSpace<DotProduct> {
    ///Creates `C^dimension` with the standard [`DotProduct`].
    pub fn new_dot(dimension : usize) -> Result<InnerProductSpace<DotProduct>> {
        InnerProductSpace::new(dimension, DotProduct)
    }
}

impl<P : InnerProduct> InnerProductSpace<P> {
    pub fn new(dimension : usize, inner_product : P) -> Result<InnerProductSpace<P>> {
        if (dimension == 0) {
            error!("Refusing to build a zero-dimensional inner product space");
            return Err(GreenError::InvalidDimension);
        }
        Ok(InnerProductSpace {
            dimension,
            inner_product
        })
    }

    pub fn get_dimension(&self) -> usize {
        self.dimension
    }

    pub fn get_inner_product(&self) -> &P {
        &self.inner_product
    }

    ///True iff `u` is a coordinate vector of this space.
    pub fn contains<S>(&self, u : &ArrayBase<S, Ix1>) -> bool
        where S : Data<Elem = Complex64> {
        has_dimension(u, self.dimension)
    }

    ///Converts an array of any shape with entries convertible to `Complex64`
    ///into a coordinate vector of this space, flattening it first.
    pub fn cast<A, S, D>(&self, u : &ArrayBase<S, D>) -> Result<Array1<Complex64>>
        where A : Clone + Into<Complex64>, S : Data<Elem = A>, D : Dimension {
        cast_to_dimension(u, self.dimension)
    }

    fn ensure_contains(&self, u : &ArrayView1<Complex64>) -> Result<()> {
        if (self.contains(u)) {
            Ok(())
        } else {
            self.cast(u).map(|_| ())
        }
    }

    ///Computes `<u, v>` after checking that both arguments belong to this space.
    pub fn inner(&self, u : ArrayView1<Complex64>, v : ArrayView1<Complex64>) -> Result<Complex64> {
        self.ensure_contains(&u)?;
        self.ensure_contains(&v)?;
        Ok(self.inner_product.evaluate(u, v))
    }

    ///`||u|| = sqrt(Re <u, u>)`. The imaginary part of `<u, u>` vanishes for a
    ///positive-definite inner product and is dropped.
    pub fn norm(&self, u : ArrayView1<Complex64>) -> Result<f64> {
        let sq_norm = self.inner(u, u)?;
        Ok(sq_norm.re.sqrt())
    }

    pub fn dist(&self, u : ArrayView1<Complex64>, v : ArrayView1<Complex64>) -> Result<f64> {
        self.ensure_contains(&u)?;
        self.ensure_contains(&v)?;
        let diff = &u - &v;
        self.norm(diff.view())
    }

    ///Orthogonal projection of `v` onto the line spanned by `u`:
    ///`(<v, u> / <u, u>) u`.
    pub fn proj(&self, u : ArrayView1<Complex64>, v : ArrayView1<Complex64>) -> Result<Array1<Complex64>> {
        let scale = self.inner(u, u)?;
        if (scale == Complex64::new(0.0, 0.0)) {
            error!("Cannot project onto zero vector");
            return Err(GreenError::ZeroVectorProjection);
        }
        let v_dot_u = self.inner(v, u)?;
        Ok(u.mapv(|u_j| v_dot_u * u_j / scale))
    }

    ///Runs the Gram-Schmidt process on the standard basis `e_0, ..., e_{n-1}`.
    ///
    ///Row `i` starts as `e_i`; the projections of `e_i` onto the already
    ///normalized rows `0..i` are subtracted in increasing order, and then row `i`
    ///is normalized. The processing order is fixed so results are reproducible
    ///to the last bit.
    pub fn gram_schmidt(&self) -> Result<OrthonormalBasis> {
        let n = self.dimension;
        debug!("Orthogonalizing the standard basis of a {}-dimensional space", n);

        //Old basis
        let standard = complex_eye(n);
        //New basis, updated in place
        let mut basis = standard.clone();

        for i in 0..n {
            for j in 0..i {
                let projection = self.proj(basis.row(j), standard.row(i))?;
                let mut row = basis.row_mut(i);
                row -= &projection;
            }

            let norm = self.norm(basis.row(i))?;
            trace!("Basis vector {} had norm {} before normalization", i, norm);
            if (!(norm > 0.0)) {
                error!("Gram-Schmidt collapsed basis vector {} (norm {})", i, norm);
                return Err(GreenError::DegenerateBasis { index : i });
            }
            basis.row_mut(i).mapv_inplace(|x| x / norm);
        }

        Ok(OrthonormalBasis::from_rows(basis))
    }
}
