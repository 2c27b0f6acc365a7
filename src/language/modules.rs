//! Modules: one nested module exports functions, a type, a type with an
//! associated function and a "default" greeting; the code below imports
//! them with `use`.

use crate::catalog::RunContext;
use crate::error::Result;

pub mod math_utils {
    pub fn add(x: i64, y: i64) -> i64 {
        x + y
    }

    pub fn identity<T>(item: T) -> T {
        item
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Person {
        pub name: String,
        pub age: u32,
    }

    pub struct Calculator;

    impl Calculator {
        pub fn multiply(a: i64, b: i64) -> i64 {
            a * b
        }
    }

    pub fn greet() -> &'static str {
        "Hello from the default export!"
    }
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    use math_utils::{add, greet, identity, Calculator, Person};

    writeln!(ctx.out, "Add: {}", add(2, 5))?;
    writeln!(ctx.out, "Identity: {}", identity("Walter"))?;

    let user = Person {
        name: "Jesse Pinkman".into(),
        age: 26,
    };
    writeln!(ctx.out, "User: {user:?}")?;
    writeln!(ctx.out, "Multiply: {}", Calculator::multiply(3, 7))?;
    writeln!(ctx.out, "{}", greet())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::math_utils::*;

    #[test]
    fn test_exports() {
        assert_eq!(add(2, 5), 7);
        assert_eq!(identity("Walter"), "Walter");
        assert_eq!(Calculator::multiply(3, 7), 21);
        assert_eq!(greet(), "Hello from the default export!");
    }
}
