//! Single responsibility.
//!
//! `Journal` manages entries and nothing else. Writing it to disk is a
//! separate reason to change, so it lives in `Persistence`.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write as _};
use std::path::Path;

use itertools::Itertools;
use tracing::{debug, info};

use crate::catalog::RunContext;
use crate::error::Result;

#[derive(Debug, Default, Clone)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `"{n}: {text}"` and returns `n`. Numbers keep increasing even
    /// after removals.
    pub fn add_entry(&mut self, text: impl AsRef<str>) -> usize {
        self.count += 1;
        self.entries.push(format!("{}: {}", self.count, text.as_ref()));
        self.count
    }

    /// Removes the entry at `index`; an out-of-range index is ignored.
    pub fn remove_entry(&mut self, index: usize) -> Option<String> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.iter().join("\n"))
    }
}

#[derive(Debug, Default)]
pub struct Persistence;

impl Persistence {
    /// Writes the journal to `path` unless the file exists and `overwrite`
    /// is false. Returns whether the file was written.
    pub fn save_to_file(&self, journal: &Journal, path: &Path, overwrite: bool) -> Result<bool> {
        if overwrite {
            fs::write(path, journal.to_string())?;
        } else {
            // `create_new` fails atomically if the file is already there.
            let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
                Ok(file) => file,
                Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                    debug!(path = %path.display(), "journal file exists, not overwriting");
                    return Ok(false);
                }
                Err(err) => return Err(err.into()),
            };
            file.write_all(journal.to_string().as_bytes())?;
        }
        info!(path = %path.display(), entries = journal.entries().len(), "journal saved");
        Ok(true)
    }
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    let mut journal = Journal::new();
    journal.add_entry("I cried today.");
    journal.add_entry("I ate a bug.");

    writeln!(ctx.out, "Journal entries:")?;
    writeln!(ctx.out, "{journal}")?;

    Persistence.save_to_file(&journal, &ctx.journal_path, true)?;
    writeln!(ctx.out, "\nJournal saved to {}", ctx.journal_path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;

    #[test]
    fn test_entries_are_numbered() {
        let mut journal = Journal::new();
        assert_eq!(journal.add_entry("first"), 1);
        assert_eq!(journal.add_entry("second"), 2);
        assert_eq!(journal.to_string(), "1: first\n2: second");
    }

    #[test]
    fn test_remove_entry() {
        let mut journal = Journal::new();
        journal.add_entry("a");
        journal.add_entry("b");

        assert_eq!(journal.remove_entry(0), Some("1: a".to_string()));
        assert_eq!(journal.remove_entry(5), None);
        assert_eq!(journal.entries(), ["2: b".to_string()]);

        // The counter does not reuse numbers.
        assert_eq!(journal.add_entry("c"), 3);
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.txt");
        let mut journal = Journal::new();
        journal.add_entry("hello");

        assert!(Persistence.save_to_file(&journal, &path, false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "1: hello");
    }

    #[test]
    fn test_save_respects_overwrite_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.txt");
        fs::write(&path, "existing").unwrap();

        let mut journal = Journal::new();
        journal.add_entry("new");

        assert!(!Persistence.save_to_file(&journal, &path, false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing");

        assert!(Persistence.save_to_file(&journal, &path, true).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "1: new");
    }

    #[test]
    fn test_save_keeps_empty_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.txt");
        fs::File::create(&path).unwrap();

        let mut journal = Journal::new();
        journal.add_entry("new");

        assert!(!Persistence.save_to_file(&journal, &path, false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_save_reports_other_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("journal.txt");

        let result = Persistence.save_to_file(&Journal::new(), &path, false);
        assert!(matches!(result, Err(PatternError::Io(_))));
    }
}
