#![allow(unused_parens)]

extern crate pretty_env_logger;
#[macro_use] extern crate log;

use num_complex::Complex64;
use std::process;

use pluri_green::error::*;
use pluri_green::evaluation_grid::*;
use pluri_green::green::*;
use pluri_green::params::*;
use pluri_green::region_sampler::*;
use pluri_green::weight_function::*;

fn run() -> Result<()> {
    let a = DEMO_SEMI_AXIS_RE;
    let b = DEMO_SEMI_AXIS_IM;
    let in_ellipse = |z : Complex64| (z.re / a).powi(2) + (z.im / b).powi(2) < 1.0;

    let region = RegionSpec {
        corner : Complex64::new(DEMO_CORNER_RE, DEMO_CORNER_IM),
        width : DEMO_WIDTH,
        resolution : DEFAULT_RESOLUTION
    };

    info!("Sampling ellipse with semi-axes {} and {}", a, b);
    let samples = region.sample(in_ellipse)?;

    info!("Orthogonalizing polynomials up to degree {}", DEMO_DEGREE);
    let approximant = GreenApproximant::new(DEMO_DEGREE, &ZeroWeight, &samples)?;

    let grid = EvaluationGrid::around(&samples, GRID_MARGIN_MULTIPLIER, DEMO_GRID_RESOLUTION)?;
    let values = grid.evaluate(&approximant);

    println!("re,im,green");
    for ((i, j), value) in values.indexed_iter() {
        println!("{},{},{}", grid.re[[i, j]], grid.im[[i, j]], value);
    }
    Ok(())
}

fn main() {
    pretty_env_logger::init();

    if let Err(err) = run() {
        error!("{}", err);
        process::exit(1);
    }
}
