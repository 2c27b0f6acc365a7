//! Why builders exist: a constructor with many parameters, some of them
//! optional, is hard to call correctly and harder to read at the call site.

#[derive(Debug, Clone, PartialEq)]
pub struct ProblematicCar {
    brand: String,
    model: String,
    color: String,
    number_of_doors: u8,
    screen_type: Option<String>,
    weight: f64,
    height: Option<f64>,
}

impl ProblematicCar {
    // Every caller has to supply all seven arguments in the right order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
        number_of_doors: u8,
        screen_type: Option<String>,
        weight: f64,
        height: Option<f64>,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            color: color.into(),
            number_of_doors,
            screen_type,
            weight,
            height,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn screen_type(&self) -> Option<&str> {
        self.screen_type.as_deref()
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }
}
