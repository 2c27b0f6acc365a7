//! Types: annotations, inference, functions, unions, arrays, tuples,
//! struct types, composition and enums.

use std::fmt;

use crate::catalog::RunContext;
use crate::error::Result;

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

pub fn cook(purity: f64) -> f64 {
    purity * purity
}

/// No default arguments in Rust; `Option` plus a fallback plays that role.
pub fn introduce_character(character: Option<&str>) -> String {
    format!("Say hello to {}", character.unwrap_or("Walter"))
}

pub fn nickname() -> &'static str {
    "Heisenberg"
}

/// Never returns normally; the `!` type.
pub fn surrender() -> ! {
    panic!("Say my name!")
}

// ----------------------------------------------------------------------------
// Unions and literal types
// ----------------------------------------------------------------------------

/// A value that is either a number or a name.
#[derive(Debug, Clone, PartialEq)]
pub enum MoneyOrName {
    Money(u64),
    Name(String),
}

/// Only two values are allowed, like a string literal union.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Heisenberg,
    Pinkman,
}

/// Directions carried as fixed strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RvDirection {
    Up,
    Down,
    Left,
    Right,
}

impl RvDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            RvDirection::Up => "UP",
            RvDirection::Down => "DOWN",
            RvDirection::Left => "LEFT",
            RvDirection::Right => "RIGHT",
        }
    }
}

// ----------------------------------------------------------------------------
// Objects
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SafeHouse {
    pub street: String,
    pub money: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesertLabCoordinates {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chemist {
    pub skill_level: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boss {
    pub reputation: String,
}

/// Composition in place of a type intersection.
#[derive(Debug, Clone, PartialEq)]
pub struct ChemistBoss {
    pub chemist: Chemist,
    pub boss: Boss,
    pub age: u8,
}

pub trait CrewMember {
    fn id(&self) -> u32;
    fn name(&self) -> &str;
    fn nickname(&self) -> Option<&str> {
        None
    }
    fn introduce(&self) -> String {
        match self.nickname() {
            Some(nick) => format!("#{} {} aka {nick}", self.id(), self.name()),
            None => format!("#{} {}", self.id(), self.name()),
        }
    }
}

pub struct Cook {
    id: u32,
    name: String,
}

impl Cook {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl CrewMember for Cook {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn nickname(&self) -> Option<&str> {
        Some("Cap'n Cook")
    }
}

impl fmt::Display for SafeHouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${})", self.street, self.money)
    }
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    let patient: &str = "Jessy";
    let address = "9809 Margo Street, Albuquerque, New Mexico"; // inferred &str
    writeln!(ctx.out, "{patient} lives at {address}")?;

    writeln!(ctx.out, "cook(0.9) = {:.2}", cook(0.9))?;
    writeln!(ctx.out, "{}", introduce_character(None))?;
    writeln!(ctx.out, "nickname: {}", nickname())?;

    let cartel_colors = ["blue", "white", "pink"];
    let lengths: Vec<usize> = cartel_colors.iter().map(|color| color.len()).collect();
    writeln!(ctx.out, "color lengths: {lengths:?}")?;

    let values = [MoneyOrName::Name("Heisenberg".into()), MoneyOrName::Money(2_000_000)];
    writeln!(ctx.out, "union values: {values:?}")?;
    writeln!(ctx.out, "mood: {:?}", Mood::Heisenberg)?;

    let lab_grid: [[&str; 3]; 2] = [
        ["Chemistry", "Extraction", "Cooking"],
        ["Packing", "Storage", "Security"],
    ];
    writeln!(ctx.out, "grid[1][2] = {}", lab_grid[1][2])?;

    let vehicle: (&str, u32) = ("RV", 10_000);
    writeln!(ctx.out, "vehicle: {} costs {}", vehicle.0, vehicle.1)?;

    let meet_place = SafeHouse {
        street: "456 Another Criminal Street".into(),
        money: 2_500,
    };
    writeln!(ctx.out, "safe house: {meet_place}")?;
    writeln!(ctx.out, "direction: {}", RvDirection::Up.as_str())?;
    writeln!(ctx.out, "{}", Cook::new(1, "Walter").introduce())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_functions() {
        assert_eq!(cook(3.0), 9.0);
        assert_eq!(introduce_character(None), "Say hello to Walter");
        assert_eq!(introduce_character(Some("Jesse")), "Say hello to Jesse");
        assert_eq!(nickname(), "Heisenberg");
    }

    #[test]
    #[should_panic(expected = "Say my name!")]
    fn test_never_returns() {
        surrender();
    }

    #[test]
    fn test_optional_field() {
        let flat = DesertLabCoordinates { x: 1.0, y: 2.0, z: None };
        assert!(flat.z.is_none());
    }

    #[test]
    fn test_composed_struct() {
        let boss = ChemistBoss {
            chemist: Chemist { skill_level: 10 },
            boss: Boss {
                reputation: "feared".into(),
            },
            age: 50,
        };
        assert_eq!(boss.chemist.skill_level, 10);
        assert_eq!(boss.boss.reputation, "feared");
    }

    #[test]
    fn test_default_trait_method() {
        assert_eq!(Cook::new(7, "Walter").introduce(), "#7 Walter aka Cap'n Cook");
        assert_eq!(RvDirection::Left.as_str(), "LEFT");
    }
}
