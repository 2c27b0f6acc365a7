//! Narrowing: every "which shape is this?" question is answered by an enum
//! discriminant fixed at construction, and `match` is checked for
//! exhaustiveness by the compiler.

use crate::catalog::RunContext;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum NumberOrString {
    Number(f64),
    Text(String),
}

pub fn triple(value: &NumberOrString) -> NumberOrString {
    match value {
        NumberOrString::Number(n) => NumberOrString::Number(n * 3.0),
        NumberOrString::Text(s) => NumberOrString::Text(s.repeat(3)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TvShow {
    pub title: String,
    pub num_episodes: u32,
    pub episode_duration: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Media {
    Movie(Movie),
    TvShow(TvShow),
}

/// Total runtime in minutes.
pub fn runtime(media: &Media) -> u64 {
    match media {
        Media::Movie(movie) => u64::from(movie.duration),
        Media::TvShow(show) => u64::from(show.num_episodes) * u64::from(show.episode_duration),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Pet {
    Cat { name: String, num_lives: u8 },
    Dog { name: String, breed: String },
}

impl Pet {
    pub fn is_cat(&self) -> bool {
        matches!(self, Pet::Cat { .. })
    }

    pub fn make_noise(&self) -> &'static str {
        if self.is_cat() {
            "Meow"
        } else {
            "Woof"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarmAnimalKind {
    Rooster,
    Cow,
    Pig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FarmAnimal {
    pub kind: FarmAnimalKind,
    pub name: String,
    pub weight: u32,
    pub age: u32,
}

impl FarmAnimal {
    pub fn new(kind: FarmAnimalKind, name: impl Into<String>, weight: u32, age: u32) -> Self {
        Self {
            kind,
            name: name.into(),
            weight,
            age,
        }
    }

    // No wildcard arm: a new kind fails to compile until it has a sound.
    pub fn sound(&self) -> &'static str {
        match self.kind {
            FarmAnimalKind::Pig => "Oink!",
            FarmAnimalKind::Cow => "Moo!",
            FarmAnimalKind::Rooster => "Cockadoodledoo!",
        }
    }
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    for value in [
        NumberOrString::Number(7.0),
        NumberOrString::Text("ha".into()),
    ] {
        writeln!(ctx.out, "triple({value:?}) = {:?}", triple(&value))?;
    }

    let shows = [
        Media::Movie(Movie {
            title: "El Camino".into(),
            duration: 122,
        }),
        Media::TvShow(TvShow {
            title: "Breaking Bad".into(),
            num_episodes: 62,
            episode_duration: 47,
        }),
    ];
    for media in &shows {
        writeln!(ctx.out, "runtime: {} minutes", runtime(media))?;
    }

    let pets = [
        Pet::Cat {
            name: "Whiskers".into(),
            num_lives: 9,
        },
        Pet::Dog {
            name: "Rex".into(),
            breed: "Shepherd".into(),
        },
    ];
    for pet in &pets {
        writeln!(ctx.out, "{}", pet.make_noise())?;
    }

    let barn = [
        FarmAnimal::new(FarmAnimalKind::Pig, "Wilbur", 120, 2),
        FarmAnimal::new(FarmAnimalKind::Cow, "Daisy", 600, 5),
        FarmAnimal::new(FarmAnimalKind::Rooster, "Foghorn", 4, 1),
    ];
    for animal in &barn {
        writeln!(ctx.out, "{} says {}", animal.name, animal.sound())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple() {
        assert_eq!(triple(&NumberOrString::Number(2.5)), NumberOrString::Number(7.5));
        assert_eq!(
            triple(&NumberOrString::Text("ab".into())),
            NumberOrString::Text("ababab".into())
        );
    }

    #[test]
    fn test_runtime() {
        let show = Media::TvShow(TvShow {
            title: "x".into(),
            num_episodes: 10,
            episode_duration: 30,
        });
        let movie = Media::Movie(Movie {
            title: "y".into(),
            duration: 95,
        });

        assert_eq!(runtime(&show), 300);
        assert_eq!(runtime(&movie), 95);
    }

    #[test]
    fn test_runtime_of_huge_show_does_not_overflow() {
        let show = Media::TvShow(TvShow {
            title: "Endless".into(),
            num_episodes: u32::MAX,
            episode_duration: 60,
        });
        assert_eq!(runtime(&show), u64::from(u32::MAX) * 60);
    }

    #[test]
    fn test_pet_predicate() {
        let cat = Pet::Cat {
            name: "Tom".into(),
            num_lives: 9,
        };
        let dog = Pet::Dog {
            name: "Spike".into(),
            breed: "Bulldog".into(),
        };

        assert!(cat.is_cat());
        assert_eq!(cat.make_noise(), "Meow");
        assert!(!dog.is_cat());
        assert_eq!(dog.make_noise(), "Woof");
    }

    #[test]
    fn test_farm_animal_sounds() {
        assert_eq!(FarmAnimal::new(FarmAnimalKind::Pig, "p", 1, 1).sound(), "Oink!");
        assert_eq!(FarmAnimal::new(FarmAnimalKind::Cow, "c", 1, 1).sound(), "Moo!");
        assert_eq!(
            FarmAnimal::new(FarmAnimalKind::Rooster, "r", 1, 1).sound(),
            "Cockadoodledoo!"
        );
    }
}
