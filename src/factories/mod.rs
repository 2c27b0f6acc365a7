//! Factory pattern variations.
//!
//! Factories encapsulate object creation behind named entry points. A
//! constructor can only be overloaded by parameter types; a factory can
//! describe intent (`new_polar_point`), hide conversion logic, pick a
//! concrete type, or keep track of what it created.
//!
//! - [`problem`]: one constructor reinterpreting its arguments by a flag
//! - [`factory_method`]: named constructors on the type itself
//! - [`simple_factory`]: named constructors on a separate type
//! - [`inner_factory`]: a factory nested next to a private constructor
//! - [`abstract_factory`]: families of related products
//! - [`bulk_replacement`]: a factory that can retarget everything it made

pub mod abstract_factory;
pub mod bulk_replacement;
pub mod factory_method;
pub mod inner_factory;
pub mod problem;
pub mod simple_factory;
