//! Open/closed principle.
//!
//! `ProductFilter` grows a method per new requirement. `BetterFilter`
//! never changes; new requirements are new [`Specification`]s, and
//! specifications compose.

use tracing::debug;

use crate::catalog::RunContext;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
    Huge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

/// The closed-for-extension version: every combination is another method.
pub struct ProductFilter;

impl ProductFilter {
    pub fn filter_by_size<'a>(
        &self,
        products: &'a [Product],
        size: Size,
    ) -> impl Iterator<Item = &'a Product> {
        products.iter().filter(move |p| p.size == size)
    }

    pub fn filter_by_color<'a>(
        &self,
        products: &'a [Product],
        color: Color,
    ) -> impl Iterator<Item = &'a Product> {
        products.iter().filter(move |p| p.color == color)
    }

    pub fn filter_by_size_and_color<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> impl Iterator<Item = &'a Product> {
        products
            .iter()
            .filter(move |p| p.size == size && p.color == color)
    }
}

/// A single reusable condition over `T`.
pub trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;

    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        AndSpecification::new(self, other)
    }
}

// Any predicate closure is already a specification.
impl<T, F> Specification<T> for F
where
    F: Fn(&T) -> bool,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self(item)
    }
}

pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}

/// Satisfied when both parts are.
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Specification<T> for AndSpecification<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

pub trait Filter<T> {
    fn filter<'a>(
        &self,
        items: &'a [T],
        spec: &'a dyn Specification<T>,
    ) -> Box<dyn Iterator<Item = &'a T> + 'a>;
}

/// Applies whatever specification it is given.
pub struct BetterFilter;

impl<T> Filter<T> for BetterFilter {
    fn filter<'a>(
        &self,
        items: &'a [T],
        spec: &'a dyn Specification<T>,
    ) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        Box::new(items.iter().filter(move |item| spec.is_satisfied(item)))
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ]
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    let products = sample_products();
    let filter = BetterFilter;

    writeln!(ctx.out, "Green Products:")?;
    let green = ColorSpecification::new(Color::Green);
    for product in filter.filter(&products, &green) {
        writeln!(ctx.out, " - {} is green", product.name)?;
    }

    writeln!(ctx.out, "\nLarge Products:")?;
    let large = SizeSpecification::new(Size::Large);
    for product in filter.filter(&products, &large) {
        writeln!(ctx.out, " - {} is large", product.name)?;
    }

    writeln!(ctx.out, "\nLarge Green Products:")?;
    let large_green = green.and(large);
    let matches: Vec<_> = filter.filter(&products, &large_green).collect();
    debug!(count = matches.len(), "combined specification matched");
    for product in matches {
        writeln!(ctx.out, " - {} is large and green", product.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(items: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        items.map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_old_filter_methods() {
        let products = sample_products();
        let filter = ProductFilter;

        assert_eq!(names(filter.filter_by_size(&products, Size::Large)), ["Tree", "House"]);
        assert_eq!(names(filter.filter_by_color(&products, Color::Green)), ["Apple", "Tree"]);
        assert_eq!(
            names(filter.filter_by_size_and_color(&products, Size::Large, Color::Green)),
            ["Tree"]
        );
    }

    #[test]
    fn test_better_filter_matches_old_filter() {
        let products = sample_products();
        let spec = ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));

        assert_eq!(
            names(BetterFilter.filter(&products, &spec)),
            names(ProductFilter.filter_by_size_and_color(&products, Size::Large, Color::Green))
        );
    }

    #[test]
    fn test_new_rule_without_touching_filter() {
        let products = sample_products();
        let short_name = |p: &Product| p.name.len() <= 4;
        let spec = short_name.and(ColorSpecification::new(Color::Green));

        assert_eq!(names(BetterFilter.filter(&products, &spec)), ["Tree"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let products = sample_products();
        let spec = ColorSpecification::new(Color::Red);
        assert_eq!(BetterFilter.filter(&products, &spec).count(), 0);
    }
}
