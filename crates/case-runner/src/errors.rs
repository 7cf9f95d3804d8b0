//! Errores del lado del runner.

use case_core::CaseError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RunnerError {
    #[error("test '{0}' registered more than once")] DuplicateRegistration(String),
    #[error(transparent)] Case(#[from] CaseError),
}
