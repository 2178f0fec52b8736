//! Numerical approximation of weighted pluricomplex Green functions of planar regions.
//!
//! Given a compact region `K` of the complex plane, discretized as a [`sample_set::SampleSet`],
//! and a weight `Q`, the `n`-th approximant is
//!
//! `G_n(z) = log( sum_j |p_j(z)|^2 ) / (2n)`
//!
//! where `p_0, ..., p_{n-1}` are orthonormal polynomials with respect to the
//! `exp(-2nQ)`-weighted inner product on `K`. The orthonormal polynomials come from
//! running Gram-Schmidt on the monomials in an [`inner_product_space::InnerProductSpace`].
//!
//! For starting points, see [`green::GreenApproximant`] and [`region_sampler::sample_region`].

#![allow(unused_imports)]
#![allow(unused_parens)]

#[macro_use] extern crate log;
pub mod params;
pub mod error;
pub mod linalg_utils;
pub mod vector_validation;
pub mod polynomial;
pub mod inner_product;
pub mod orthonormal_basis;
pub mod inner_product_space;
pub mod weight_function;
pub mod sample_set;
pub mod region_sampler;
pub mod polynomial_inner_product;
pub mod bergman;
pub mod green;
pub mod evaluation_grid;
#[cfg(test)]
pub mod test_utils;
