//! Without factories: both coordinate systems need a `(f64, f64)`
//! constructor, so a flag decides how `a` and `b` are read.

use std::fmt;

use crate::catalog::RunContext;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateSystem {
    #[default]
    Cartesian,
    Polar,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// `a`/`b` are x/y for [`CoordinateSystem::Cartesian`] and rho/theta for
    /// [`CoordinateSystem::Polar`]. Nothing at the call site says which.
    pub fn new(a: f64, b: f64, system: CoordinateSystem) -> Self {
        match system {
            CoordinateSystem::Cartesian => Self { x: a, y: b },
            CoordinateSystem::Polar => Self {
                x: a * b.cos(),
                y: a * b.sin(),
            },
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point: (x={}, y={})", self.x, self.y)
    }
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    let p1 = Point::new(3.0, 4.0, CoordinateSystem::default());
    // What are 5 and PI/2 here? Only the trailing flag tells.
    let p2 = Point::new(5.0, std::f64::consts::FRAC_PI_2, CoordinateSystem::Polar);

    writeln!(ctx.out, "{p1}")?;
    writeln!(ctx.out, "Point: (x={:.0}, y={:.0})", p2.x(), p2.y())?;
    Ok(())
}
