//! Functional builder.
//!
//! Nothing is set while the chain runs. Each call records a step (a closure
//! that mutates the subject) and `build()` folds the steps, in registration
//! order, over a freshly defaulted subject.

use tracing::debug;

use crate::catalog::RunContext;
use crate::error::Result;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub position: String,
}

/// A recorded construction step.
pub type Step<T> = Box<dyn FnOnce(T) -> T>;

/// An ordered list of deferred mutations for `T`.
pub struct Steps<T> {
    steps: Vec<Step<T>>,
}

impl<T> Steps<T> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn push(&mut self, action: impl FnOnce(&mut T) + 'static)
    where
        T: 'static,
    {
        self.steps.push(Box::new(move |mut subject: T| {
            action(&mut subject);
            subject
        }));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn apply(self, initial: T) -> T {
        self.steps.into_iter().fold(initial, |subject, step| step(subject))
    }
}

impl<T> Default for Steps<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reusable step recording for any builder.
///
/// An implementor only exposes its step list; `step` and `build` come for
/// free and return the concrete builder type, so chains stay fluent.
pub trait FunctionalBuilder: Sized {
    type Subject: Default + 'static;

    fn steps_mut(&mut self) -> &mut Steps<Self::Subject>;

    fn into_steps(self) -> Steps<Self::Subject>;

    fn step(mut self, action: impl FnOnce(&mut Self::Subject) + 'static) -> Self {
        self.steps_mut().push(action);
        self
    }

    fn build(self) -> Self::Subject {
        let steps = self.into_steps();
        debug!(steps = steps.len(), "applying builder steps");
        steps.apply(Self::Subject::default())
    }
}

/// Builder for [`Person`] with its own semantic methods.
#[derive(Default)]
pub struct PersonBuilder {
    steps: Steps<Person>,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn called(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.step(move |p| p.name = name)
    }
}

impl FunctionalBuilder for PersonBuilder {
    type Subject = Person;

    fn steps_mut(&mut self) -> &mut Steps<Person> {
        &mut self.steps
    }

    fn into_steps(self) -> Steps<Person> {
        self.steps
    }
}

/// Adds steps to [`PersonBuilder`] without touching its definition.
pub trait PersonBuilderExt {
    fn works_as(self, position: impl Into<String>) -> Self;
}

impl PersonBuilderExt for PersonBuilder {
    fn works_as(self, position: impl Into<String>) -> Self {
        let position = position.into();
        self.step(move |p| p.position = position)
    }
}

/// Second builder over the same subject, getting everything from
/// [`FunctionalBuilder`] and declaring only its vocabulary.
#[derive(Default)]
pub struct InheritedPersonBuilder {
    steps: Steps<Person>,
}

impl InheritedPersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn called(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.step(move |p| p.name = name)
    }

    pub fn works_as(self, position: impl Into<String>) -> Self {
        let position = position.into();
        self.step(move |p| p.position = position)
    }
}

impl FunctionalBuilder for InheritedPersonBuilder {
    type Subject = Person;

    fn steps_mut(&mut self) -> &mut Steps<Person> {
        &mut self.steps
    }

    fn into_steps(self) -> Steps<Person> {
        self.steps
    }
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    let person = PersonBuilder::new()
        .called("Sarah")
        .works_as("Developer")
        .build();
    writeln!(ctx.out, "Name: {}, Job: {}", person.name, person.position)?;

    let person = InheritedPersonBuilder::new()
        .works_as("Tester")
        .called("Dmitri")
        .build();
    writeln!(ctx.out, "Name: {}, Job: {}", person.name, person.position)?;
    Ok(())
}
