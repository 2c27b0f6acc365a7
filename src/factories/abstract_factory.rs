//! Abstract factory: families of related products.
//!
//! A computer-parts maker ships GPUs and monitors under two brands. Parts of
//! one brand belong together. Each brand gets a factory, and a client that
//! holds one factory can only ever receive parts of one brand.

use std::fmt;

use tracing::debug;

use crate::catalog::RunContext;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brand {
    Msi,
    Asus,
}

impl Brand {
    /// Picks the concrete factory for a family.
    pub fn factory(self) -> Box<dyn HardwareFactory> {
        match self {
            Brand::Msi => Box::new(MsiFactory),
            Brand::Asus => Box::new(AsusFactory),
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brand::Msi => write!(f, "MSI"),
            Brand::Asus => write!(f, "ASUS"),
        }
    }
}

pub trait Gpu {
    fn brand(&self) -> Brand;
    fn assemble(&self) -> String;
}

pub trait Monitor {
    fn brand(&self) -> Brand;
    fn assemble(&self) -> String;
}

pub struct MsiGpu;
pub struct MsiMonitor;
pub struct AsusGpu;
pub struct AsusMonitor;

impl Gpu for MsiGpu {
    fn brand(&self) -> Brand {
        Brand::Msi
    }

    fn assemble(&self) -> String {
        "MSI GPU assembled".to_string()
    }
}

impl Monitor for MsiMonitor {
    fn brand(&self) -> Brand {
        Brand::Msi
    }

    fn assemble(&self) -> String {
        "MSI monitor assembled".to_string()
    }
}

impl Gpu for AsusGpu {
    fn brand(&self) -> Brand {
        Brand::Asus
    }

    fn assemble(&self) -> String {
        "ASUS GPU assembled".to_string()
    }
}

impl Monitor for AsusMonitor {
    fn brand(&self) -> Brand {
        Brand::Asus
    }

    fn assemble(&self) -> String {
        "ASUS monitor assembled".to_string()
    }
}

/// One creation method per product kind.
pub trait HardwareFactory {
    fn create_gpu(&self) -> Box<dyn Gpu>;
    fn create_monitor(&self) -> Box<dyn Monitor>;
}

pub struct MsiFactory;

impl HardwareFactory for MsiFactory {
    fn create_gpu(&self) -> Box<dyn Gpu> {
        Box::new(MsiGpu)
    }

    fn create_monitor(&self) -> Box<dyn Monitor> {
        Box::new(MsiMonitor)
    }
}

pub struct AsusFactory;

impl HardwareFactory for AsusFactory {
    fn create_gpu(&self) -> Box<dyn Gpu> {
        Box::new(AsusGpu)
    }

    fn create_monitor(&self) -> Box<dyn Monitor> {
        Box::new(AsusMonitor)
    }
}

/// The setup without an abstract factory: one product trait and a
/// string-typed creation method per manufacturer.
pub mod problem {
    use super::Brand;

    pub trait Component {
        fn brand(&self) -> Brand;
        fn kind(&self) -> &'static str;
    }

    struct Part {
        brand: Brand,
        kind: &'static str,
    }

    impl Component for Part {
        fn brand(&self) -> Brand {
            self.brand
        }

        fn kind(&self) -> &'static str {
            self.kind
        }
    }

    pub trait Company {
        fn create_component(&self, kind: &str) -> Box<dyn Component>;
    }

    pub struct MsiManufacturer;
    pub struct AsusManufacturer;

    // Anything that is not exactly "GPU" silently becomes a monitor, and a
    // new part kind means editing every manufacturer.
    fn by_name(brand: Brand, kind: &str) -> Box<dyn Component> {
        let kind = if kind == "GPU" { "GPU" } else { "Monitor" };
        Box::new(Part { brand, kind })
    }

    impl Company for MsiManufacturer {
        fn create_component(&self, kind: &str) -> Box<dyn Component> {
            by_name(Brand::Msi, kind)
        }
    }

    impl Company for AsusManufacturer {
        fn create_component(&self, kind: &str) -> Box<dyn Component> {
            by_name(Brand::Asus, kind)
        }
    }
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    for brand in [Brand::Msi, Brand::Asus] {
        let factory = brand.factory();
        debug!(%brand, "selected hardware family");

        let gpu = factory.create_gpu();
        let monitor = factory.create_monitor();
        writeln!(ctx.out, "{}", gpu.assemble())?;
        writeln!(ctx.out, "{}", monitor.assemble())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::problem::{AsusManufacturer, Company};
    use super::*;

    #[test]
    fn test_products_never_mix_families() {
        for brand in [Brand::Msi, Brand::Asus] {
            let factory = brand.factory();
            let gpu = factory.create_gpu();
            let monitor = factory.create_monitor();

            assert_eq!(gpu.brand(), brand);
            assert_eq!(monitor.brand(), brand);
            assert_eq!(gpu.brand(), monitor.brand());
        }
    }

    #[test]
    fn test_assemble_output() {
        let factory = AsusFactory;
        assert_eq!(factory.create_gpu().assemble(), "ASUS GPU assembled");
        assert_eq!(factory.create_monitor().assemble(), "ASUS monitor assembled");
    }

    #[test]
    fn test_string_typed_creation_is_fragile() {
        let company = AsusManufacturer;
        assert_eq!(company.create_component("GPU").kind(), "GPU");
        // A typo is not an error; it quietly yields a monitor.
        assert_eq!(company.create_component("gpu").kind(), "Monitor");
        assert_eq!(company.create_component("GPU").brand(), Brand::Asus);
    }
}
