//! Liskov substitution.
//!
//! If every employee must answer "what is your bonus?", a contractor can
//! only answer with an error, and code written against the base behavior
//! breaks when handed a contractor. The fix moves the bonus into its own
//! capability that only eligible employees expose.

use crate::catalog::RunContext;
use crate::error::{PatternError, Result};

const BONUS: u32 = 1000;
const CONTRACT_TAX: f64 = 0.33;

fn after_contract_tax(salary: u32) -> u32 {
    let salary = f64::from(salary);
    (salary - salary * CONTRACT_TAX) as u32
}

/// Base behavior every employee is forced to provide.
pub trait Employee {
    fn name(&self) -> &str;
    fn calculate_salary(&self) -> u32;
    fn bonus(&self) -> Result<u32>;
}

pub struct RegularEmployee {
    name: String,
    salary: u32,
}

impl RegularEmployee {
    pub fn new(name: impl Into<String>, salary: u32) -> Self {
        Self {
            name: name.into(),
            salary,
        }
    }
}

impl Employee for RegularEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn calculate_salary(&self) -> u32 {
        self.salary
    }

    fn bonus(&self) -> Result<u32> {
        Ok(BONUS)
    }
}

pub struct ContractualEmployee {
    name: String,
    salary: u32,
}

impl ContractualEmployee {
    pub fn new(name: impl Into<String>, salary: u32) -> Self {
        Self {
            name: name.into(),
            salary,
        }
    }
}

impl Employee for ContractualEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn calculate_salary(&self) -> u32 {
        after_contract_tax(self.salary)
    }

    // The substitution breaks here.
    fn bonus(&self) -> Result<u32> {
        Err(PatternError::not_implemented("bonus for contractual employees"))
    }
}

/// Bonus as a separate capability.
pub trait BonusEligible {
    fn bonus(&self) -> u32;
}

/// What every employee can honestly do.
pub trait Salaried {
    fn name(&self) -> &str;
    fn calculate_salary(&self) -> u32;

    /// `Some` only for employees that are [`BonusEligible`].
    fn as_bonus_eligible(&self) -> Option<&dyn BonusEligible> {
        None
    }
}

pub struct ImprovedRegularEmployee {
    name: String,
    salary: u32,
}

impl ImprovedRegularEmployee {
    pub fn new(name: impl Into<String>, salary: u32) -> Self {
        Self {
            name: name.into(),
            salary,
        }
    }
}

impl Salaried for ImprovedRegularEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn calculate_salary(&self) -> u32 {
        self.salary
    }

    fn as_bonus_eligible(&self) -> Option<&dyn BonusEligible> {
        Some(self)
    }
}

impl BonusEligible for ImprovedRegularEmployee {
    fn bonus(&self) -> u32 {
        BONUS
    }
}

pub struct ImprovedContractualEmployee {
    name: String,
    salary: u32,
}

impl ImprovedContractualEmployee {
    pub fn new(name: impl Into<String>, salary: u32) -> Self {
        Self {
            name: name.into(),
            salary,
        }
    }
}

impl Salaried for ImprovedContractualEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn calculate_salary(&self) -> u32 {
        after_contract_tax(self.salary)
    }
}

/// Runs the broken hierarchy; stops at the first employee that cannot
/// answer, the way an unhandled exception would.
pub fn run_violation(ctx: &mut RunContext<'_>) -> Result<()> {
    let employees: Vec<Box<dyn Employee>> = vec![
        Box::new(RegularEmployee::new("John", 5000)),
        Box::new(ContractualEmployee::new("Alex", 5000)),
    ];

    for employee in &employees {
        match employee.bonus() {
            Ok(bonus) => writeln!(ctx.out, "{} bonus: {bonus}", employee.name())?,
            Err(err) => {
                writeln!(ctx.out, "{} bonus failed: {err}", employee.name())?;
                break;
            }
        }
    }
    Ok(())
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    let employees: Vec<Box<dyn Salaried>> = vec![
        Box::new(ImprovedRegularEmployee::new("John", 5000)),
        Box::new(ImprovedContractualEmployee::new("Alex", 5000)),
    ];

    for employee in &employees {
        writeln!(ctx.out, "{} salary: {}", employee.name(), employee.calculate_salary())?;
        match employee.as_bonus_eligible() {
            Some(eligible) => writeln!(ctx.out, "Bonus: {}", eligible.bonus())?,
            None => writeln!(ctx.out, "Bonus: Not eligible")?,
        }
        writeln!(ctx.out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_salary_deducts_tax() {
        assert_eq!(ContractualEmployee::new("Alex", 5000).calculate_salary(), 3350);
        assert_eq!(ImprovedContractualEmployee::new("Alex", 5000).calculate_salary(), 3350);
        assert_eq!(after_contract_tax(0), 0);
    }

    #[test]
    fn test_base_contract_is_violated() {
        let employees: Vec<Box<dyn Employee>> = vec![
            Box::new(RegularEmployee::new("John", 5000)),
            Box::new(ContractualEmployee::new("Alex", 5000)),
        ];

        assert_eq!(employees[0].bonus().unwrap(), 1000);
        assert!(matches!(
            employees[1].bonus(),
            Err(PatternError::NotImplemented { .. })
        ));
    }

    #[test]
    fn test_bonus_only_through_capability() {
        let regular = ImprovedRegularEmployee::new("John", 5000);
        let contractor = ImprovedContractualEmployee::new("Alex", 5000);

        assert_eq!(regular.as_bonus_eligible().map(|e| e.bonus()), Some(1000));
        assert!(contractor.as_bonus_eligible().is_none());
    }

    #[test]
    fn test_solution_substitutes_cleanly() {
        let employees: Vec<Box<dyn Salaried>> = vec![
            Box::new(ImprovedRegularEmployee::new("John", 5000)),
            Box::new(ImprovedContractualEmployee::new("Alex", 5000)),
        ];

        let total: u32 = employees.iter().map(|e| e.calculate_salary()).sum();
        assert_eq!(total, 8350);
    }
}
