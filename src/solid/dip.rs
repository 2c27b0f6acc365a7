//! Dependency inversion.
//!
//! `DataAccessLayer` creates its own `ConsoleLogger`, so it can never log
//! anywhere else. `BetterDataAccessLayer` depends on the [`Logger`]
//! abstraction and receives an implementation from the caller.

use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::PathBuf;

use tracing::info;

use crate::catalog::RunContext;
use crate::error::Result;

pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn log(&self, message: &str) {
        println!("{message}");
    }
}

/// High-level module welded to a low-level one.
pub struct DataAccessLayer;

impl DataAccessLayer {
    pub fn add_customer(&self, name: &str) {
        let logger = ConsoleLogger;
        logger.log(&format!("Customer added: {name}"));
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Logger {
    fn log(&self, message: &str) -> Result<()>;
}

/// Writes to stdout.
pub struct BetterConsoleLogger;

impl Logger for BetterConsoleLogger {
    fn log(&self, message: &str) -> Result<()> {
        println!("{message}");
        Ok(())
    }
}

/// Appends `[FileLog] {message}` lines to a file.
pub struct BetterFileLogger {
    path: PathBuf,
}

impl BetterFileLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Logger for BetterFileLogger {
    fn log(&self, message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "[FileLog] {message}")?;
        Ok(())
    }
}

/// Forwards to the `tracing` subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) -> Result<()> {
        info!(target: "dip", "{message}");
        Ok(())
    }
}

/// Keeps messages in memory.
#[derive(Default)]
pub struct BufferLogger {
    lines: RefCell<Vec<String>>,
}

impl BufferLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl Logger for BufferLogger {
    fn log(&self, message: &str) -> Result<()> {
        self.lines.borrow_mut().push(message.to_string());
        Ok(())
    }
}

pub struct BetterDataAccessLayer<'a> {
    logger: &'a dyn Logger,
}

impl<'a> BetterDataAccessLayer<'a> {
    pub fn new(logger: &'a dyn Logger) -> Self {
        Self { logger }
    }

    pub fn add_customer(&self, name: &str) -> Result<()> {
        self.logger.log(&format!("Customer added: {name}"))
    }
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    let buffer = BufferLogger::new();
    let data_access = BetterDataAccessLayer::new(&buffer);
    data_access.add_customer("John Doe")?;
    data_access.add_customer("Jane Roe")?;

    for line in buffer.lines() {
        writeln!(ctx.out, "{line}")?;
    }

    // Same layer, different logger, no change to the layer.
    BetterDataAccessLayer::new(&TracingLogger).add_customer("John Doe")?;
    Ok(())
}
