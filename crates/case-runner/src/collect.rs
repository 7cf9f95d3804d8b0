//! Items individuales que el runner ejecutaría, uno por combinación de
//! entradas.

use case_core::{Case, Mark};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::Registration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectedItem {
    /// `func[id]`; sin parametrización sólo `func`.
    pub node_id: String,
    pub function: String,
    pub case_id: Option<String>,
    pub args: IndexMap<String, Value>,
    /// Marcas de la función seguidas de las del caso.
    pub marks: Vec<Mark>,
}

impl CollectedItem {
    pub(crate) fn from_case(registration: &Registration, index: usize, case: &Case) -> Self {
        // un id vacío cae en el índice posicional
        let case_id = if case.id.is_empty() { index.to_string() } else { case.id.clone() };
        let args = registration.argnames
                               .iter()
                               .cloned()
                               .zip(case.values.iter().cloned())
                               .collect();
        let marks = registration.marks
                                .iter()
                                .chain(case.marks.iter())
                                .cloned()
                                .collect();
        Self { node_id: format!("{}[{}]", registration.function, case_id),
               function: registration.function.clone(),
               case_id: Some(case_id),
               args,
               marks }
    }

    /// Combina el item con una entrada de otra parametrización: ids unidos
    /// con `-`, argumentos y marcas añadidos a continuación.
    pub(crate) fn crossed(&self, argnames: &[String], index: usize, entry: &Case) -> Self {
        let entry_id = if entry.id.is_empty() { index.to_string() } else { entry.id.clone() };
        let case_id = match &self.case_id {
            Some(id) => format!("{id}-{entry_id}"),
            None => entry_id,
        };
        let mut args = self.args.clone();
        args.extend(argnames.iter().cloned().zip(entry.values.iter().cloned()));
        let mut marks = self.marks.clone();
        marks.extend(entry.marks.iter().cloned());
        Self { node_id: format!("{}[{}]", self.function, case_id),
               function: self.function.clone(),
               case_id: Some(case_id),
               args,
               marks }
    }

    pub fn has_mark(&self, name: &str) -> bool {
        self.marks.iter().any(|m| m.is_named(name))
    }

    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }
}
