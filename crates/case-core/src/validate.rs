//! Input Validator: rechaza declaraciones de caso mal formadas antes de
//! resolver ningún valor.

use indexmap::IndexMap;
use log::warn;
use serde_json::Value;

use crate::config::CaseConfig;
use crate::constants::RESERVED_MARKS_KEYWORD;
use crate::errors::{CaseError, CaseResult};
use crate::model::{Target, TestFunction};

/// El objetivo debe ser invocable.
pub fn ensure_callable(target: Target) -> CaseResult<TestFunction> {
    match target {
        Target::Callable(func) => Ok(func),
        Target::Object { name } => Err(CaseError::NotCallable { name }),
    }
}

/// Al menos un parámetro suministrable.
pub fn validate_signature(func: &TestFunction) -> CaseResult<()> {
    if !func.signature.params().iter().any(|p| p.is_case_eligible()) {
        return Err(CaseError::NoParameters { function: func.name.clone() });
    }
    Ok(())
}

/// Ningún parámetro declarado (de cualquier tipo) puede llamarse `marks`.
/// Se comprueba después de la cantidad de argumentos.
pub fn reject_reserved(func: &TestFunction) -> CaseResult<()> {
    if let Some(p) = func.signature.params().iter().find(|p| p.name == RESERVED_MARKS_KEYWORD) {
        return Err(CaseError::ReservedName { function: func.name.clone(),
                                             name: p.name.clone() });
    }
    Ok(())
}

/// Cantidad de argumentos y keywords conocidos contra `argnames`.
pub fn validate_arguments(function: &str,
                          argnames: &[String],
                          args: &[Value],
                          kwargs: &IndexMap<String, Value>,
                          config: &CaseConfig)
                          -> CaseResult<()> {
    let got = args.len() + kwargs.len();
    if got > argnames.len() {
        return Err(CaseError::TooManyArguments { function: function.to_string(),
                                                 expected: argnames.len(),
                                                 got });
    }
    for key in kwargs.keys() {
        if argnames.iter().any(|n| n == key) {
            continue;
        }
        if config.reject_unknown_keywords {
            return Err(CaseError::UnknownKeyword { function: function.to_string(),
                                                   name: key.clone() });
        }
        warn!("case keyword '{key}' ignored: test '{function}' has no such parameter");
    }
    Ok(())
}
