//! casestack
//!
//! Fachada del workspace:
//! - Re-exporta `case_core` (declaración y apilado de casos).
//! - Re-exporta `case_runner` (entrega de tablas al runner).
//! - `collect` une ambos pasos para un conjunto de funciones decoradas.

pub mod errors;

pub use case_core::*;
pub use case_runner::{handoff, handoff_all, CollectedItem, InMemoryRegistry, ParametrizeRegistry, Registration,
                      RunnerError};
pub use errors::CaseStackError;

use log::debug;

/// Entrega las funciones a un registro en memoria y devuelve los items
/// resultantes en orden.
pub fn collect<'a, I>(funcs: I) -> Result<Vec<CollectedItem>, CaseStackError>
    where I: IntoIterator<Item = &'a TestFunction>
{
    let mut registry = InMemoryRegistry::new();
    handoff_all(funcs, &mut registry)?;
    let items = registry.collect();
    debug!("collect:done items={}", items.len());
    Ok(items)
}
