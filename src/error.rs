use crate::funding::validate::ProfileViolation;
use crate::policy::PolicyError;

/// Error raised by the calculator.
#[derive(Debug, thiserror::Error)]
pub enum CalculatorError {
    #[error(transparent)]
    Validation(#[from] ProfileViolation),
    #[error(transparent)]
    Configuration(#[from] PolicyError),
}
