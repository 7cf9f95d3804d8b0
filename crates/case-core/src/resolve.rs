//! Argument Resolver: fusiona las tres fuentes de valores de un caso.
//!
//! Orden de merge fijo (de menor a mayor precedencia):
//! default -> argumento posicional en el mismo índice -> keyword.

use indexmap::IndexMap;
use serde_json::Value;

use crate::errors::{CaseError, CaseResult};

/// Devuelve un valor por cada nombre de `argnames`, en el mismo orden.
///
/// `function` y `case_id` sólo se usan para el mensaje de error cuando un
/// nombre no recibe valor de ninguna fuente.
pub fn resolve_values(function: &str,
                      case_id: &str,
                      argnames: &[String],
                      defaults: &IndexMap<String, Value>,
                      args: &[Value],
                      kwargs: &IndexMap<String, Value>)
                      -> CaseResult<Vec<Value>> {
    argnames.iter()
            .enumerate()
            .map(|(index, name)| {
                kwargs.get(name)
                      .or_else(|| args.get(index))
                      .or_else(|| defaults.get(name))
                      .cloned()
                      .ok_or_else(|| CaseError::UnresolvedParameter { function: function.to_string(),
                                                                      case: case_id.to_string(),
                                                                      name: name.clone() })
            })
            .collect()
}
