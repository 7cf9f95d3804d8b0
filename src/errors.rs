use case_core::CaseError;
use case_runner::RunnerError;
use thiserror::Error;

/// Errores de la fachada: declaración de casos o entrega al runner.
#[derive(Debug, Error)]
pub enum CaseStackError {
    #[error("Error de declaración: {0}")]
    Case(#[from] CaseError),
    #[error("Error del runner: {0}")]
    Runner(#[from] RunnerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_variant_format() {
        let err: CaseStackError = CaseError::NoParameters { function: "test_x".into() }.into();
        assert_eq!(err.to_string(), "Error de declaración: test 'test_x' declares no parameters a case could supply");
    }

    #[test]
    fn test_runner_variant_format() {
        let err: CaseStackError = RunnerError::DuplicateRegistration("test_x".into()).into();
        assert_eq!(err.to_string(), "Error del runner: test 'test_x' registered more than once");
    }
}
