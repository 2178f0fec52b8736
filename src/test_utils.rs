extern crate ndarray;

use ndarray::*;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::StandardNormal;
use num_complex::Complex64;
use crate::params::*;
use crate::region_sampler::*;
use crate::sample_set::*;

pub fn random_vector(t : usize) -> Array1<f64> {
    Array::random((t,), StandardNormal)
}

pub fn random_complex_vector(t : usize) -> Array1<Complex64> {
    let re = random_vector(t);
    let im = random_vector(t);
    let mut result = Array::zeros((t,));
    for i in 0..t {
        result[[i,]] = Complex64::new(re[[i,]], im[[i,]]);
    }
    result
}

pub fn unit_disk_samples(resolution : usize) -> SampleSet {
    sample_region(Complex64::new(-1.0, -1.0), 2.0, |z : Complex64| z.norm_sqr() < 1.0, resolution)
        .unwrap()
}

pub fn assert_eps_equals_to_within(one : f64, two : f64, epsilon : f64) {
    let diff = (one - two).abs();
    if (diff > epsilon) {
        panic!("{} and {} differ by {}, which exceeds {}", one, two, diff, epsilon);
    }
}

pub fn assert_eps_equals(one : f64, two : f64) {
    assert_eps_equals_to_within(one, two, DEFAULT_TEST_THRESH);
}

pub fn assert_complex_eps_equals(one : Complex64, two : Complex64) {
    let diff = (one - two).norm();
    if (diff > DEFAULT_TEST_THRESH) {
        panic!("{} and {} differ by {}", one, two, diff);
    }
}

pub fn assert_equal_complex_vectors_to_within(one : &Array1<Complex64>, two : &Array1<Complex64>,
                                              epsilon : f64) {
    assert_eq!(one.len(), two.len());
    let mut sq_dist = 0.0f64;
    for i in 0..one.len() {
        sq_dist += (one[[i,]] - two[[i,]]).norm_sqr();
    }
    let dist = sq_dist.sqrt();
    if (dist > epsilon) {
        panic!("Vectors {} and {} are {} apart", one, two, dist);
    }
}

pub fn assert_equal_complex_vectors(one : &Array1<Complex64>, two : &Array1<Complex64>) {
    assert_equal_complex_vectors_to_within(one, two, DEFAULT_TEST_THRESH);
}
