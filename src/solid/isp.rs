//! Interface segregation.
//!
//! One wide printer trait forces a print-only device to "implement" fax
//! and scan with errors. Small traits let each device declare exactly what
//! it does; a composite trait is still available for devices that do
//! everything.

use std::fmt;

use crate::catalog::RunContext;
use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    name: String,
    extension: String,
}

impl Document {
    pub fn new(name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Extension: {}", self.name, self.extension)
    }
}

/// The wide interface. Each operation returns the line the device reports.
pub trait MultiPrinter {
    fn print(&self, document: &Document) -> Result<String>;
    fn scan(&self, document: &Document) -> Result<String>;
    fn fax(&self, document: &Document) -> Result<String>;
}

pub struct MultiFunctionalPrinter;

impl MultiPrinter for MultiFunctionalPrinter {
    fn print(&self, document: &Document) -> Result<String> {
        Ok(format!("Print: {document}"))
    }

    fn scan(&self, document: &Document) -> Result<String> {
        Ok(format!("Scan: {document}"))
    }

    fn fax(&self, document: &Document) -> Result<String> {
        Ok(format!("Fax: {document}"))
    }
}

/// Can only print, yet has to provide scan and fax.
pub struct OldPrinter;

impl MultiPrinter for OldPrinter {
    fn print(&self, document: &Document) -> Result<String> {
        Ok(format!("Print: {document}"))
    }

    fn scan(&self, _document: &Document) -> Result<String> {
        Err(PatternError::not_implemented("OldPrinter::scan"))
    }

    fn fax(&self, _document: &Document) -> Result<String> {
        Err(PatternError::not_implemented("OldPrinter::fax"))
    }
}

pub trait Printable {
    fn print(&self, document: &Document) -> String;
}

pub trait Scannable {
    fn scan(&self, document: &Document) -> String;
}

pub trait Faxable {
    fn fax(&self, document: &Document) -> String;
}

/// Composite for devices that do everything.
pub trait MultiFunctionalDevice: Printable + Scannable + Faxable {}

impl<T: Printable + Scannable + Faxable> MultiFunctionalDevice for T {}

pub struct SimplePrinter;

impl Printable for SimplePrinter {
    fn print(&self, document: &Document) -> String {
        format!("Print: {document}")
    }
}

pub struct ModernPrinter;

impl Printable for ModernPrinter {
    fn print(&self, document: &Document) -> String {
        format!("Print: {document}")
    }
}

impl Scannable for ModernPrinter {
    fn scan(&self, document: &Document) -> String {
        format!("Scan: {document}")
    }
}

impl Faxable for ModernPrinter {
    fn fax(&self, document: &Document) -> String {
        format!("Fax: {document}")
    }
}

/// Office routine that needs the full device.
pub fn process(device: &dyn MultiFunctionalDevice, document: &Document) -> Vec<String> {
    vec![device.print(document), device.scan(document), device.fax(document)]
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    let document = Document::new("report", "pdf");

    writeln!(ctx.out, "Wide interface:")?;
    let old = OldPrinter;
    writeln!(ctx.out, "{}", old.print(&document)?)?;
    if let Err(err) = old.fax(&document) {
        writeln!(ctx.out, "OldPrinter cannot fax: {err}")?;
    }

    writeln!(ctx.out, "\nSegregated interfaces:")?;
    writeln!(ctx.out, "{}", SimplePrinter.print(&document))?;
    for line in process(&ModernPrinter, &document) {
        writeln!(ctx.out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::new("cv", "docx")
    }

    #[test]
    fn test_old_printer_fails_unneeded_operations() {
        let printer = OldPrinter;
        assert_eq!(printer.print(&doc()).unwrap(), "Print: Name: cv, Extension: docx");
        assert!(matches!(printer.scan(&doc()), Err(PatternError::NotImplemented { .. })));
        assert!(matches!(printer.fax(&doc()), Err(PatternError::NotImplemented { .. })));
    }

    #[test]
    fn test_multifunctional_printer_supports_everything() {
        let printer = MultiFunctionalPrinter;
        assert!(printer.scan(&doc()).is_ok());
        assert_eq!(printer.fax(&doc()).unwrap(), "Fax: Name: cv, Extension: docx");
    }

    #[test]
    fn test_modern_printer_is_a_multifunctional_device() {
        let lines = process(&ModernPrinter, &doc());
        assert_eq!(
            lines,
            [
                "Print: Name: cv, Extension: docx",
                "Scan: Name: cv, Extension: docx",
                "Fax: Name: cv, Extension: docx",
            ]
        );
    }

    #[test]
    fn test_simple_printer_only_prints() {
        assert_eq!(SimplePrinter.print(&doc()), "Print: Name: cv, Extension: docx");
    }
}
