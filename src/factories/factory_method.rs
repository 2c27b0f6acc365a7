//! Factory methods: named constructors on the type itself.
//!
//! The plain constructor is private, so `new_cartesian_point` and
//! `new_polar_point` are the only ways in and each name states how its
//! arguments are read. A factory method can also be `async`, which a
//! constructor never can.

use std::time::Duration;

use tracing::debug;

use crate::catalog::RunContext;
use crate::error::Result;

/// Simulated initialization work for [`Point::new_cartesian_point_async`].
pub const ASYNC_INIT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn new_cartesian_point(x: f64, y: f64) -> Self {
        Self::new(x, y)
    }

    pub fn new_polar_point(rho: f64, theta: f64) -> Self {
        Self::new(rho * theta.cos(), rho * theta.sin())
    }

    /// Awaits `delay` (standing in for I/O or a slow computation) before
    /// handing out the point.
    pub async fn new_cartesian_point_async(x: f64, y: f64, delay: Duration) -> Self {
        debug!(?delay, "initializing point asynchronously");
        tokio::time::sleep(delay).await;
        Self::new(x, y)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    let point = Point::new_cartesian_point(3.0, 6.0);
    let polar = Point::new_polar_point(1.0, std::f64::consts::FRAC_PI_2);
    writeln!(ctx.out, "Cartesian: ({}, {})", point.x(), point.y())?;
    writeln!(ctx.out, "Polar: ({:.2}, {:.2})", polar.x(), polar.y())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let delayed = runtime.block_on(Point::new_cartesian_point_async(
        2.0,
        5.0,
        ASYNC_INIT_DELAY,
    ));
    writeln!(ctx.out, "Async: ({}, {})", delayed.x(), delayed.y())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_cartesian_keeps_coordinates() {
        let p = Point::new_cartesian_point(3.0, 6.0);
        assert_eq!((p.x(), p.y()), (3.0, 6.0));
    }

    #[test]
    fn test_polar_converts_to_cartesian() {
        let p = Point::new_polar_point(2.0, PI);
        assert!((p.x() + 2.0).abs() < 1e-9);
        assert!(p.y().abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_async_factory_method() {
        let p = Point::new_cartesian_point_async(1.5, -2.0, Duration::from_millis(5)).await;
        assert_eq!(p, Point::new_cartesian_point(1.5, -2.0));
    }
}
