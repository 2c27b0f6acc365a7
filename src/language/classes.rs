//! Classes: structs with private state, validated setters, "protected"
//! access through module privacy, traits standing in for interfaces and
//! abstract base classes.

use crate::catalog::RunContext;
use crate::error::{PatternError, Result};

#[derive(Debug, Clone)]
pub struct Player {
    first_name: String,
    last_name: String,
    score: u64,
}

impl Player {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            score: 0,
        }
    }

    // Names have getters only, so they are read-only after construction.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn set_score(&mut self, score: i64) -> Result<()> {
        if score < 0 {
            return Err(PatternError::InvalidScore { score });
        }
        self.score = score.unsigned_abs();
        Ok(())
    }
}

/// Extends a player the way a subclass would: through composition, with
/// access to the player's private field because it lives in the same module.
pub struct PlayerAdmin {
    player: Player,
}

impl PlayerAdmin {
    pub fn new(player: Player) -> Self {
        Self { player }
    }

    pub fn max_score(&mut self) {
        self.player.score = 1000;
    }

    pub fn player(&self) -> &Player {
        &self.player
    }
}

pub trait Colorful {
    fn color(&self) -> &str;
}

pub trait Printable {
    fn print(&self) -> String;
}

pub struct Jacket {
    color: String,
}

impl Jacket {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

impl Colorful for Jacket {
    fn color(&self) -> &str {
        &self.color
    }
}

impl Printable for Jacket {
    fn print(&self) -> String {
        format!("This jacket is {}.", self.color)
    }
}

/// Abstract base class: required `get_pay`, shared `say_hi`.
pub trait BaseEmployee {
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
    fn get_pay(&self) -> u32;

    fn say_hi(&self) -> String {
        format!("\"{} {}\" says \"Hi!\"", self.first_name(), self.last_name())
    }
}

pub struct FullTimeEmployee {
    first_name: String,
    last_name: String,
    salary: u32,
}

impl FullTimeEmployee {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, salary: u32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
        }
    }
}

impl BaseEmployee for FullTimeEmployee {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn get_pay(&self) -> u32 {
        self.salary
    }
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    let mut player = Player::new("Jesse", "Pinkman");
    player.set_score(42)?;
    writeln!(
        ctx.out,
        "{} {} scored {}",
        player.first_name(),
        player.last_name(),
        player.score()
    )?;

    if let Err(err) = player.set_score(-1) {
        writeln!(ctx.out, "Rejected: {err}")?;
    }

    let mut admin = PlayerAdmin::new(player);
    admin.max_score();
    writeln!(ctx.out, "Admin maxed score: {}", admin.player().score())?;

    let jacket = Jacket::new("yellow");
    writeln!(ctx.out, "{} ({})", jacket.print(), jacket.color())?;

    let employee = FullTimeEmployee::new("Walter", "White", 999_999);
    writeln!(ctx.out, "{} Pay: {}", employee.say_hi(), employee.get_pay())?;
    Ok(())
}
