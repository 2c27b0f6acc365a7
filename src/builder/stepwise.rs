//! Stepwise builder (typestate).
//!
//! Each step is a different type that only exposes the next step, so the
//! call order `of_type` -> `with_wheels` -> `build` is checked by the
//! compiler. Skipping a step or calling one twice does not compile:
//!
//! ```compile_fail
//! use design_patterns::builder::stepwise::StepwiseCarBuilder;
//!
//! // `with_wheels` is not available before a car type is chosen.
//! let car = StepwiseCarBuilder::create().with_wheels(18);
//! ```

use std::fmt;
use std::ops::RangeInclusive;

use tracing::debug;

use crate::catalog::RunContext;
use crate::error::{PatternError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarType {
    Sedan,
    Crossover,
}

impl CarType {
    /// Wheel sizes (inches) the car type accepts.
    pub fn wheel_range(self) -> RangeInclusive<u32> {
        match self {
            CarType::Sedan => 17..=20,
            CarType::Crossover => 15..=17,
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarType::Sedan => write!(f, "Sedan"),
            CarType::Crossover => write!(f, "Crossover"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    car_type: CarType,
    wheel_size: u32,
}

impl Car {
    pub fn car_type(&self) -> CarType {
        self.car_type
    }

    pub fn wheel_size(&self) -> u32 {
        self.wheel_size
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {}, WheelSize: {}", self.car_type, self.wheel_size)
    }
}

// Builder states. Each one carries exactly what is known so far.
#[derive(Debug)]
pub struct SpecifyCarType;

#[derive(Debug)]
pub struct SpecifyWheelSize {
    car_type: CarType,
}

#[derive(Debug)]
pub struct BuildCar {
    car: Car,
}

#[derive(Debug)]
pub struct StepwiseCarBuilder<S> {
    state: S,
}

impl StepwiseCarBuilder<SpecifyCarType> {
    /// Entry point; the first available step is choosing the car type.
    pub fn create() -> Self {
        Self {
            state: SpecifyCarType,
        }
    }

    pub fn of_type(self, car_type: CarType) -> StepwiseCarBuilder<SpecifyWheelSize> {
        StepwiseCarBuilder {
            state: SpecifyWheelSize { car_type },
        }
    }
}

impl StepwiseCarBuilder<SpecifyWheelSize> {
    pub fn with_wheels(self, size: u32) -> Result<StepwiseCarBuilder<BuildCar>> {
        let car_type = self.state.car_type;
        if !car_type.wheel_range().contains(&size) {
            return Err(PatternError::InvalidWheelSize { size, car_type });
        }

        Ok(StepwiseCarBuilder {
            state: BuildCar {
                car: Car {
                    car_type,
                    wheel_size: size,
                },
            },
        })
    }
}

impl StepwiseCarBuilder<BuildCar> {
    pub fn build(self) -> Car {
        debug!(car = %self.state.car, "stepwise build finished");
        self.state.car
    }
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    let car = StepwiseCarBuilder::create()
        .of_type(CarType::Sedan)
        .with_wheels(18)?
        .build();
    writeln!(ctx.out, "{car}")?;

    match StepwiseCarBuilder::create()
        .of_type(CarType::Crossover)
        .with_wheels(19)
    {
        Ok(builder) => writeln!(ctx.out, "{}", builder.build())?,
        Err(err) => writeln!(ctx.out, "Rejected: {err}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_sedan() {
        let car = StepwiseCarBuilder::create()
            .of_type(CarType::Sedan)
            .with_wheels(18)
            .unwrap()
            .build();

        assert_eq!(car.car_type(), CarType::Sedan);
        assert_eq!(car.wheel_size(), 18);
        assert_eq!(car.to_string(), "Type: Sedan, WheelSize: 18");
    }

    #[test]
    fn test_crossover_rejects_sedan_wheels() {
        let err = StepwiseCarBuilder::create()
            .of_type(CarType::Crossover)
            .with_wheels(19)
            .unwrap_err();

        assert!(matches!(
            err,
            PatternError::InvalidWheelSize {
                size: 19,
                car_type: CarType::Crossover
            }
        ));
        assert_eq!(err.to_string(), "Invalid wheel size 19 for car type Crossover");
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        for (car_type, size) in [
            (CarType::Sedan, 17),
            (CarType::Sedan, 20),
            (CarType::Crossover, 15),
            (CarType::Crossover, 17),
        ] {
            let builder = StepwiseCarBuilder::create().of_type(car_type);
            assert!(builder.with_wheels(size).is_ok(), "{car_type} {size}");
        }

        assert!(StepwiseCarBuilder::create()
            .of_type(CarType::Sedan)
            .with_wheels(16)
            .is_err());
        assert!(StepwiseCarBuilder::create()
            .of_type(CarType::Crossover)
            .with_wheels(18)
            .is_err());
    }

    proptest! {
        #[test]
        fn prop_accepts_exactly_the_type_range(size in 0u32..40, sedan in any::<bool>()) {
            let car_type = if sedan { CarType::Sedan } else { CarType::Crossover };
            let result = StepwiseCarBuilder::create().of_type(car_type).with_wheels(size);

            prop_assert_eq!(result.is_ok(), car_type.wheel_range().contains(&size));
            if let Ok(builder) = result {
                let car = builder.build();
                prop_assert_eq!(car.car_type(), car_type);
                prop_assert_eq!(car.wheel_size(), size);
            }
        }
    }
}
