//! The list of runnable examples.
//!
//! Every example is a plain function taking a [`RunContext`]. The catalog
//! only names them; examples never call each other.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;
use tracing::{debug, info_span};

use crate::builder::{faceted, functional, simple, stepwise};
use crate::config::RunnerConfig;
use crate::error::{PatternError, Result};
use crate::factories::{
    abstract_factory, bulk_replacement, factory_method, inner_factory, problem, simple_factory,
};
use crate::language::{classes, generics, modules, narrowing, types};
use crate::solid::{dip, isp, lsp, ocp, srp};

/// Runs when neither the command line nor the configuration picks one.
pub const DEFAULT_EXAMPLE: &str = "bulk-replacement";

pub const DEFAULT_JOURNAL_PATH: &str = "journal.txt";

/// Where an example writes its demonstration text, plus the few knobs an
/// example may need.
pub struct RunContext<'a> {
    pub out: &'a mut dyn Write,
    pub journal_path: PathBuf,
}

impl<'a> RunContext<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self {
            out,
            journal_path: PathBuf::from(DEFAULT_JOURNAL_PATH),
        }
    }

    pub fn with_journal_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.journal_path = path.into();
        self
    }
}

pub type RunFn = fn(&mut RunContext<'_>) -> Result<()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Builder,
    Factory,
    Solid,
    Language,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::Builder => "builder",
            Topic::Factory => "factory",
            Topic::Solid => "solid",
            Topic::Language => "language",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Copy, Serialize)]
pub struct Example {
    pub name: &'static str,
    pub topic: Topic,
    pub summary: &'static str,
    #[serde(skip)]
    run: RunFn,
}

impl Example {
    const fn new(name: &'static str, topic: Topic, summary: &'static str, run: RunFn) -> Self {
        Self {
            name,
            topic,
            summary,
            run,
        }
    }

    pub fn run(&self, ctx: &mut RunContext<'_>) -> Result<()> {
        let _span = info_span!("example", name = self.name).entered();
        debug!("running example");
        (self.run)(ctx)
    }
}

impl fmt::Debug for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Example")
            .field("name", &self.name)
            .field("topic", &self.topic)
            .finish_non_exhaustive()
    }
}

static EXAMPLES: &[Example] = &[
    Example::new("simple-builder", Topic::Builder, "Fluent builder with chained setters", simple::run_builder),
    Example::new("director", Topic::Builder, "Director applying preset builder configurations", simple::run_director),
    Example::new("faceted-builder", Topic::Builder, "Sub-builders for disjoint field groups", faceted::run),
    Example::new("functional-builder", Topic::Builder, "Deferred steps folded over a fresh value", functional::run),
    Example::new("stepwise-builder", Topic::Builder, "Typestate builder with a validated step", stepwise::run),
    Example::new("no-factory", Topic::Factory, "Constructor reinterpreting arguments by a flag", problem::run),
    Example::new("factory-method", Topic::Factory, "Named constructors, including an async one", factory_method::run),
    Example::new("simple-factory", Topic::Factory, "Creation moved into a separate factory type", simple_factory::run),
    Example::new("inner-factory", Topic::Factory, "Factory nested next to a private constructor", inner_factory::run),
    Example::new("abstract-factory", Topic::Factory, "Families of related products", abstract_factory::run),
    Example::new("bulk-replacement", Topic::Factory, "Factory that retargets every handle it created", bulk_replacement::run),
    Example::new("srp", Topic::Solid, "Journal entries vs. persistence", srp::run),
    Example::new("ocp", Topic::Solid, "Composable specifications instead of filter methods", ocp::run),
    Example::new("lsp-violation", Topic::Solid, "A subtype that cannot honor the base contract", lsp::run_violation),
    Example::new("lsp", Topic::Solid, "Bonus as a separate capability", lsp::run),
    Example::new("isp", Topic::Solid, "Small printer traits instead of one wide one", isp::run),
    Example::new("dip", Topic::Solid, "Data access layer with an injected logger", dip::run),
    Example::new("types", Topic::Language, "Annotations, unions, tuples and struct types", types::run),
    Example::new("classes", Topic::Language, "Privacy, validated setters and default methods", classes::run),
    Example::new("generics", Topic::Language, "Identity, bounds, default type parameters", generics::run),
    Example::new("narrowing", Topic::Language, "Enums and exhaustive matching", narrowing::run),
    Example::new("modules", Topic::Language, "Exports and imports", modules::run),
];

pub fn catalog() -> &'static [Example] {
    EXAMPLES
}

pub fn find(name: &str) -> Result<&'static Example> {
    EXAMPLES
        .iter()
        .find(|example| example.name == name)
        .ok_or_else(|| PatternError::unknown_example(name))
}

/// Picks the examples to run: everything with `all`, otherwise the names
/// given, otherwise the configured list, otherwise [`DEFAULT_EXAMPLE`].
pub fn select(
    names: &[String],
    all: bool,
    config: &RunnerConfig,
) -> Result<Vec<&'static Example>> {
    if all {
        return Ok(EXAMPLES.iter().collect());
    }

    let chosen: Vec<&str> = if !names.is_empty() {
        names.iter().map(String::as_str).collect()
    } else if !config.examples.is_empty() {
        config.examples.iter().map(String::as_str).collect()
    } else {
        vec![DEFAULT_EXAMPLE]
    };

    chosen.into_iter().map(find).collect()
}

/// Runs each example under a header line, stopping at the first failure.
pub fn run_examples(examples: &[&Example], ctx: &mut RunContext<'_>) -> Result<()> {
    for (index, example) in examples.iter().enumerate() {
        if index > 0 {
            writeln!(ctx.out)?;
        }
        let header = format!("=== {} ({}) ===", example.name, example.topic);
        writeln!(ctx.out, "{}", header.bold().cyan())?;
        example.run(ctx)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_names_are_unique() {
        assert!(catalog().iter().map(|example| example.name).all_unique());
    }

    #[test]
    fn test_default_example_exists() {
        assert_eq!(find(DEFAULT_EXAMPLE).unwrap().topic, Topic::Factory);
    }

    #[test]
    fn test_unknown_example() {
        let err = find("singleton").unwrap_err();
        assert!(matches!(err, PatternError::UnknownExample { ref name } if name == "singleton"));
    }

    #[test]
    fn test_select_precedence() {
        let config = RunnerConfig {
            examples: vec!["ocp".into(), "dip".into()],
            ..RunnerConfig::default()
        };

        let from_args = select(&["srp".to_string()], false, &config).unwrap();
        assert_eq!(from_args.iter().map(|e| e.name).collect_vec(), ["srp"]);

        let from_config = select(&[], false, &config).unwrap();
        assert_eq!(from_config.iter().map(|e| e.name).collect_vec(), ["ocp", "dip"]);

        let fallback = select(&[], false, &RunnerConfig::default()).unwrap();
        assert_eq!(fallback.iter().map(|e| e.name).collect_vec(), [DEFAULT_EXAMPLE]);

        let everything = select(&["srp".to_string()], true, &config).unwrap();
        assert_eq!(everything.len(), catalog().len());
    }

    #[test]
    fn test_select_rejects_unknown_names() {
        let result = select(&["ocp".into(), "nope".into()], false, &RunnerConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_run_examples_writes_headers() {
        let mut out = Vec::new();
        let examples = [find("stepwise-builder").unwrap(), find("lsp").unwrap()];
        {
            let mut ctx = RunContext::new(&mut out);
            run_examples(&examples, &mut ctx).unwrap();
        }

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("=== stepwise-builder (builder) ==="));
        assert!(text.contains("Type: Sedan, WheelSize: 18"));
        assert!(text.contains("=== lsp (solid) ==="));
        assert!(text.contains("Bonus: Not eligible"));
    }
}
