extern crate ndarray;

use ndarray::*;
use num_complex::Complex64;
use crate::error::*;

///Returns true iff `u` is a coordinate vector of exactly `dimension` entries.
pub fn has_dimension<S>(u : &ArrayBase<S, Ix1>, dimension : usize) -> bool
    where S : Data<Elem = Complex64> {
    u.len() == dimension
}

///Flattens `u` (in logical, row-major order) into a complex coordinate vector,
///converting each entry into a `Complex64`. Fails if the flattened length is
///not `dimension`.
pub fn cast_to_dimension<A, S, D>(u : &ArrayBase<S, D>, dimension : usize) -> Result<Array1<Complex64>>
    where A : Clone + Into<Complex64>, S : Data<Elem = A>, D : Dimension {
    let found = u.len();
    if (found != dimension) {
        error!("Wrong vector dimension! Space dim: {}, Input dim: {}", dimension, found);
        return Err(GreenError::DimensionMismatch { expected : dimension, found });
    }
    let flattened : Vec<Complex64> = u.iter().cloned().map(Into::into).collect();
    Ok(Array::from(flattened))
}
