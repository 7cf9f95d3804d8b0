//! Tabla de casos (Metadata Carrier) y los registros que la transportan.
//!
//! Sobre la función la tabla no existe como tal: se guarda como dos
//! anotaciones independientes, una `Parametrization` con origen `CaseTable`
//! (lo que el runner lee para multiplicar invocaciones) y un `CaseMarker`
//! (bandera de "cased" + mapa de defaults). `CaseTable` es la vista unida que
//! usa el acumulador entre `unwrap` y `rewrap`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::mark::Mark;

/// Un caso resuelto: identificador, un valor por argname y sus marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub values: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParametrizeOrigin {
    /// Producida por `apply_case`; forma parte de una tabla de casos.
    CaseTable,
    /// Declarada por terceros; el acumulador no la toca.
    External,
}

/// Registro de parametrización tal como lo consume el runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parametrization {
    pub argnames: Vec<String>,
    pub entries: Vec<Case>,
    pub origin: ParametrizeOrigin,
}

impl Parametrization {
    pub fn external(argnames: Vec<String>, entries: Vec<Case>) -> Self {
        Self { argnames,
               entries,
               origin: ParametrizeOrigin::External }
    }
}

/// Marca la función como "cased" y conserva los defaults originales.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseMarker {
    pub defaults: IndexMap<String, Value>,
}

/// Vista unida de los dos registros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseTable {
    argnames: Vec<String>,
    cases: Vec<Case>,
    defaults: IndexMap<String, Value>,
}

impl CaseTable {
    pub fn new(argnames: Vec<String>, defaults: IndexMap<String, Value>) -> Self {
        Self { argnames,
               cases: Vec::new(),
               defaults }
    }

    pub fn argnames(&self) -> &[String] {
        &self.argnames
    }

    /// Casos en orden de declaración (índice 0 = decoración más externa).
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn defaults(&self) -> &IndexMap<String, Value> {
        &self.defaults
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.cases.iter().map(|c| c.id.as_str()).collect()
    }

    /// Valores de un caso emparejados con sus argnames.
    pub fn row(&self, index: usize) -> Option<IndexMap<&str, &Value>> {
        let case = self.cases.get(index)?;
        Some(self.argnames.iter().map(String::as_str).zip(case.values.iter()).collect())
    }

    pub(crate) fn prepend(&mut self, cases: Vec<Case>) {
        debug_assert!(cases.iter().all(|c| c.values.len() == self.argnames.len()),
                      "every case needs one value per argname");
        self.cases.splice(0..0, cases);
    }

    /// Separa la tabla en los dos registros que se adjuntan a la función.
    pub fn into_records(self) -> (Parametrization, CaseMarker) {
        (Parametrization { argnames: self.argnames,
                           entries: self.cases,
                           origin: ParametrizeOrigin::CaseTable },
         CaseMarker { defaults: self.defaults })
    }

    pub fn from_records(parametrization: Parametrization, marker: CaseMarker) -> Self {
        Self { argnames: parametrization.argnames,
               cases: parametrization.entries,
               defaults: marker.defaults }
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
