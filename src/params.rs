//Region sampling
pub const DEFAULT_RESOLUTION : usize = 100;

//Evaluation grid around a sampled region
//Each side of the bounding box is pushed out by this multiple of the box extent
pub const GRID_MARGIN_MULTIPLIER : f64 = 1.5;
pub const GRID_RESOLUTION : usize = 100;

//Demo run: ellipse (x/a)^2 + (y/b)^2 < 1 inside a square
pub const DEMO_DEGREE : usize = 12;
pub const DEMO_SEMI_AXIS_RE : f64 = 1.0;
pub const DEMO_SEMI_AXIS_IM : f64 = 1.5;
pub const DEMO_CORNER_RE : f64 = -5.0;
pub const DEMO_CORNER_IM : f64 = -5.0;
pub const DEMO_WIDTH : f64 = 10.0;
pub const DEMO_GRID_RESOLUTION : usize = 40;

//Numerical test tolerances
pub const DEFAULT_TEST_THRESH : f64 = 0.000001;

pub const LOOSE_TEST_THRESH : f64 = 0.05;
