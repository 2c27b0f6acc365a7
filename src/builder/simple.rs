//! Fluent builder and director.
//!
//! `CarBuilder` methods take `&mut self` and return `&mut Self` so calls can
//! be chained; `build()` borrows, so one builder can produce several cars.
//! The director stores reusable configurations ("templates") of the builder.

use std::fmt;

use tracing::debug;

use crate::catalog::RunContext;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    id: u32,
    brand: String,
    model: String,
    color: String,
}

impl Car {
    // Only the builder constructs cars.
    pub(crate) fn new(id: u32, brand: String, model: String, color: String) -> Self {
        Self {
            id,
            brand,
            model,
            color,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {}, Brand: {}, Model: {}, Color: {}",
            self.id, self.brand, self.model, self.color
        )
    }
}

#[derive(Debug, Default, Clone)]
pub struct CarBuilder {
    id: u32,
    brand: String,
    model: String,
    color: String,
}

impl CarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&mut self, id: u32) -> &mut Self {
        self.id = id;
        self
    }

    pub fn brand(&mut self, brand: impl Into<String>) -> &mut Self {
        self.brand = brand.into();
        self
    }

    pub fn model(&mut self, model: impl Into<String>) -> &mut Self {
        self.model = model.into();
        self
    }

    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = color.into();
        self
    }

    pub fn build(&self) -> Car {
        debug!(id = self.id, brand = %self.brand, "building car");
        Car::new(
            self.id,
            self.brand.clone(),
            self.model.clone(),
            self.color.clone(),
        )
    }
}

/// Knows the order of construction steps for a few preset cars.
///
/// The director only configures the builder; the caller still decides when
/// to call [`CarBuilder::build`] and may tweak fields in between.
#[derive(Debug, Default)]
pub struct Director;

impl Director {
    pub fn build_bugatti(&self, builder: &mut CarBuilder) {
        builder.brand("Bugatti").color("Blue").model("Divo").id(2215);
    }

    pub fn build_lambo(&self, builder: &mut CarBuilder) {
        builder
            .brand("Lamborghini")
            .color("Yellow")
            .model("Aventador")
            .id(5313);
    }
}

pub fn run_builder(ctx: &mut RunContext<'_>) -> Result<()> {
    let mut builder = CarBuilder::new();
    builder.id(1).brand("Audi").model("A6").color("Black");

    let car = builder.build();
    writeln!(ctx.out, "{car}")?;
    Ok(())
}

pub fn run_director(ctx: &mut RunContext<'_>) -> Result<()> {
    let director = Director;
    let mut builder = CarBuilder::new();

    director.build_bugatti(&mut builder);
    // Template first, then override a single field.
    builder.color("Dark Orange");
    writeln!(ctx.out, "{}", builder.build())?;

    director.build_lambo(&mut builder);
    writeln!(ctx.out, "{}", builder.build())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluent_builder_sets_all_fields() {
        let car = CarBuilder::new()
            .id(1)
            .brand("Audi")
            .model("A6")
            .color("Black")
            .build();

        let text = car.to_string();
        assert!(text.contains("Id: 1"));
        assert!(text.contains("Brand: Audi"));
        assert!(text.contains("Model: A6"));
        assert!(text.contains("Color: Black"));
    }

    #[test]
    fn test_builder_is_reusable() {
        let mut builder = CarBuilder::new();
        builder.brand("Audi").model("A6");

        let first = builder.build();
        builder.model("A8");
        let second = builder.build();

        assert_eq!(first.model(), "A6");
        assert_eq!(second.model(), "A8");
        assert_eq!(second.brand(), "Audi");
    }

    #[test]
    fn test_director_template_can_be_overridden() {
        let mut builder = CarBuilder::new();
        Director.build_bugatti(&mut builder);
        builder.color("Dark Orange");

        let car = builder.build();
        assert_eq!(car.id(), 2215);
        assert_eq!(car.brand(), "Bugatti");
        assert_eq!(car.model(), "Divo");
        assert_eq!(car.color(), "Dark Orange");
    }

    #[test]
    fn test_director_lambo_template() {
        let mut builder = CarBuilder::new();
        Director.build_lambo(&mut builder);

        assert_eq!(
            builder.build().to_string(),
            "Id: 5313, Brand: Lamborghini, Model: Aventador, Color: Yellow"
        );
    }
}
