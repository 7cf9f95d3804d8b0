//! Errores del motor de casos.
//!
//! Todos se producen en tiempo de declaración (al aplicar un `case`), nunca
//! durante la ejecución del test. Se propagan con `?` sin reintentos.

use thiserror::Error;

/// Violaciones de las invariantes de `Signature` detectadas al construirla.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SignatureError {
    #[error("parameter '{0}' declared more than once")] DuplicateParameter(String),
    #[error("required parameter '{0}' follows a parameter with a default value")] RequiredAfterOptional(String),
    #[error("more than one variadic parameter declared ('{0}')")] MultipleVariadic(String),
    #[error("parameter '{0}' cannot carry a default value (fixture or variadic)")] DefaultOnNonPositional(String),
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CaseError {
    #[error("'{name}' is not callable and cannot be decorated with a case")]
    NotCallable { name: String },

    #[error("test '{function}' declares no parameters a case could supply")]
    NoParameters { function: String },

    #[error("test '{function}' expected {expected} params but case got {got}")]
    TooManyArguments { function: String, expected: usize, got: usize },

    #[error("test '{function}' declares parameter '{name}', which is reserved for case marks")]
    ReservedName { function: String, name: String },

    #[error("case '{case}' of test '{function}' supplies no value for parameter '{name}'")]
    UnresolvedParameter { function: String, case: String, name: String },

    #[error("test '{function}' carries no case table")]
    NotACase { function: String },

    #[error("case of test '{function}' passes unknown keyword '{name}'")]
    UnknownKeyword { function: String, name: String },

    #[error("invalid case name template '{template}': {reason}")]
    Template { template: String, reason: String },

    #[error(transparent)]
    Signature(#[from] SignatureError),
}

pub type CaseResult<T> = Result<T, CaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_arguments_names_function_and_counts() {
        let err = CaseError::TooManyArguments { function: "test_add".into(),
                                                expected: 1,
                                                got: 2 };
        assert_eq!(err.to_string(), "test 'test_add' expected 1 params but case got 2");
    }

    #[test]
    fn signature_error_is_transparent() {
        let err: CaseError = SignatureError::DuplicateParameter("a".into()).into();
        assert_eq!(err.to_string(), "parameter 'a' declared more than once");
    }
}
