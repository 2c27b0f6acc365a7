//! Inner factory: the factory sits in a child module of the product.
//!
//! Child modules see their parent's private items, so `factory` can call
//! the private `Point::new` while code outside this file cannot.

use crate::catalog::RunContext;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

pub mod factory {
    use super::Point;

    pub fn new_cartesian_point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    pub fn new_polar_point(rho: f64, theta: f64) -> Point {
        Point::new(rho * theta.cos(), rho * theta.sin())
    }
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    let cartesian = factory::new_cartesian_point(2.0, 5.0);
    let polar = factory::new_polar_point(1.0, std::f64::consts::FRAC_PI_2);

    writeln!(ctx.out, "Cartesian: ({}, {})", cartesian.x(), cartesian.y())?;
    writeln!(ctx.out, "Polar: ({:.2}, {:.2})", polar.x(), polar.y())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_factory_builds_points() {
        let p = factory::new_cartesian_point(2.0, 5.0);
        assert_eq!((p.x(), p.y()), (2.0, 5.0));

        let q = factory::new_polar_point(2.0, 0.0);
        assert_eq!((q.x(), q.y()), (2.0, 0.0));
    }
}
