//! Simple factory: creation moved out of the product into its own type.
//!
//! `Point::new` has to stay public for the factory to reach it, which is
//! the trade-off the inner factory removes.

use crate::catalog::RunContext;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub struct PointFactory;

impl PointFactory {
    pub fn new_cartesian_point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    pub fn new_polar_point(rho: f64, theta: f64) -> Point {
        Point::new(rho * theta.cos(), rho * theta.sin())
    }
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    let cartesian = PointFactory::new_cartesian_point(2.0, 5.0);
    let polar = PointFactory::new_polar_point(1.0, std::f64::consts::FRAC_PI_2);

    writeln!(ctx.out, "Cartesian: {cartesian:?}")?;
    writeln!(ctx.out, "Polar: ({:.2}, {:.2})", polar.x, polar.y)?;
    Ok(())
}
