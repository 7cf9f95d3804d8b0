//! Signature Inspector: nombres de parámetros y defaults de una función.
//!
//! Sólo lectura. Fixtures y el slot variádico quedan fuera: los primeros los
//! resuelve el runner y el segundo no tiene nombre fijo en la tabla.

use indexmap::IndexMap;
use serde_json::Value;

use crate::model::TestFunction;

#[derive(Debug, Clone, PartialEq)]
pub struct InspectedSignature {
    /// Parámetros que un caso puede suministrar, en orden de declaración.
    pub names: Vec<String>,
    /// Sufijo de `names` con default -> valor, mismo orden.
    pub defaults: IndexMap<String, Value>,
}

pub fn inspect(func: &TestFunction) -> InspectedSignature {
    let eligible: Vec<_> = func.signature
                               .params()
                               .iter()
                               .filter(|p| p.is_case_eligible())
                               .collect();
    let names = eligible.iter().map(|p| p.name.clone()).collect();
    let defaults = eligible.iter()
                           .filter_map(|p| p.default.clone().map(|d| (p.name.clone(), d)))
                           .collect();
    InspectedSignature { names, defaults }
}
