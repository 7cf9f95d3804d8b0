//! Entrega de una función decorada al runner.
//!
//! Lee la tabla adjunta una única vez y la registra. Las marcas ajenas a la
//! tabla viajan como marcas de función y las parametrizaciones externas se
//! registran junto a ella sin modificar.

use case_core::{case_table, is_case, CaseError, TestFunction};
use log::debug;

use crate::errors::RunnerError;
use crate::registry::{ParametrizeRegistry, Registration};

pub fn handoff<R>(func: &TestFunction, registry: &mut R) -> Result<(), RunnerError>
    where R: ParametrizeRegistry
{
    let (argnames, entries) = if is_case(func) {
        let table = case_table(func).ok_or_else(|| CaseError::NotACase { function: func.name.clone() })?;
        (table.argnames().to_vec(), table.cases().to_vec())
    } else {
        (Vec::new(), Vec::new())
    };
    let registration = Registration { function: func.name.clone(),
                                      argnames,
                                      entries,
                                      external: func.external_parametrizations().cloned().collect(),
                                      marks: func.marks().cloned().collect() };
    debug!("handoff:register function={} entries={} external={}",
           registration.function,
           registration.entries.len(),
           registration.external.len());
    registry.register(registration)
}

/// Entrega varias funciones en orden; se detiene en el primer error.
pub fn handoff_all<'a, R, I>(funcs: I, registry: &mut R) -> Result<(), RunnerError>
    where R: ParametrizeRegistry,
          I: IntoIterator<Item = &'a TestFunction>
{
    for func in funcs {
        handoff(func, registry)?;
    }
    Ok(())
}
