//! Faceted builder.
//!
//! A `Person` has two groups of fields: where they live and where they
//! work. Instead of one builder with every setter, `PersonBuilder` hands out
//! a sub-builder per facet. All facets wrap the same target, so switching
//! facets mid-chain keeps what was already set.

use std::fmt;

use tracing::debug;

use crate::catalog::RunContext;
use crate::error::Result;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    // address
    pub street_address: String,
    pub post_code: String,
    pub city: String,

    // employment
    pub company_name: String,
    pub position: String,
    pub annual_income: u32,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StreetAddress: {}, PostCode: {}, City: {}, CompanyName: {}, Position: {}, AnnualIncome: {}",
            self.street_address,
            self.post_code,
            self.city,
            self.company_name,
            self.position,
            self.annual_income
        )
    }
}

/// Shared navigation between facets.
///
/// Every facet can jump to any other facet or finish the build; the only
/// thing an implementor supplies is how to get the root builder back.
pub trait PersonFacet: Sized {
    fn into_builder(self) -> PersonBuilder;

    fn works(self) -> PersonJobBuilder {
        PersonJobBuilder {
            builder: self.into_builder(),
        }
    }

    fn lives(self) -> PersonAddressBuilder {
        PersonAddressBuilder {
            builder: self.into_builder(),
        }
    }

    fn build(self) -> Person {
        let person = self.into_builder().person;
        debug!(company = %person.company_name, city = %person.city, "built person");
        person
    }
}

#[derive(Debug, Default)]
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersonFacet for PersonBuilder {
    fn into_builder(self) -> PersonBuilder {
        self
    }
}

/// Address facet: touches only street, post code and city.
#[derive(Debug)]
pub struct PersonAddressBuilder {
    builder: PersonBuilder,
}

impl PersonAddressBuilder {
    pub fn at(mut self, street_address: impl Into<String>) -> Self {
        self.builder.person.street_address = street_address.into();
        self
    }

    pub fn with_postcode(mut self, post_code: impl Into<String>) -> Self {
        self.builder.person.post_code = post_code.into();
        self
    }

    pub fn in_city(mut self, city: impl Into<String>) -> Self {
        self.builder.person.city = city.into();
        self
    }
}

impl PersonFacet for PersonAddressBuilder {
    fn into_builder(self) -> PersonBuilder {
        self.builder
    }
}

/// Job facet: touches only company, position and income.
#[derive(Debug)]
pub struct PersonJobBuilder {
    builder: PersonBuilder,
}

impl PersonJobBuilder {
    pub fn at(mut self, company_name: impl Into<String>) -> Self {
        self.builder.person.company_name = company_name.into();
        self
    }

    pub fn as_a(mut self, position: impl Into<String>) -> Self {
        self.builder.person.position = position.into();
        self
    }

    pub fn earning(mut self, annual_income: u32) -> Self {
        self.builder.person.annual_income = annual_income;
        self
    }
}

impl PersonFacet for PersonJobBuilder {
    fn into_builder(self) -> PersonBuilder {
        self.builder
    }
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    let person = PersonBuilder::new()
        .works()
        .at("Fabrikam")
        .as_a("Engineer")
        .earning(123_000)
        .lives()
        .at("123 London Road")
        .in_city("London")
        .with_postcode("SW12AC")
        .build();

    writeln!(ctx.out, "{person}")?;
    Ok(())
}
