pub use nalgebra as na;

pub type Scalar = f64;

pub type Vec3 = na::Vector3<Scalar>;

pub const PI: Scalar = std::f64::consts::PI;
/// Mass of the sun in units where the gravitational constant is 1.
pub const SOLAR_MASS: Scalar = 4.0 * PI * PI;
pub const DAYS_PER_YEAR: Scalar = 365.24;

pub const DEFAULT_STEPS: i64 = 50_000;
pub const DEFAULT_DT: Scalar = 0.01;

pub use crate::{
    System,
    body::{Body},
};
