//! Primitiva "register parameterization" del runner.

use case_core::{Case, Mark, Parametrization};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::collect::CollectedItem;
use crate::errors::RunnerError;

/// Una función entregada al runner: la tabla de casos (argnames y entradas),
/// las parametrizaciones externas y las marcas a nivel de función.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub function: String,
    pub argnames: Vec<String>,
    pub entries: Vec<Case>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external: Vec<Parametrization>,
    pub marks: Vec<Mark>,
}

impl Registration {
    pub fn is_parametrized(&self) -> bool {
        !self.entries.is_empty() || self.external.iter().any(|p| !p.entries.is_empty())
    }

    /// Una invocación por entrada de la tabla, cruzada con cada
    /// parametrización externa en orden; una sola si no hay ninguna.
    pub fn items(&self) -> Vec<CollectedItem> {
        let base = if self.entries.is_empty() {
            vec![CollectedItem { node_id: self.function.clone(),
                                 function: self.function.clone(),
                                 case_id: None,
                                 args: IndexMap::new(),
                                 marks: self.marks.clone() }]
        } else {
            self.entries
                .iter()
                .enumerate()
                .map(|(index, case)| CollectedItem::from_case(self, index, case))
                .collect()
        };
        self.external
            .iter()
            .filter(|p| !p.entries.is_empty())
            .fold(base, |items, p| {
                items.into_iter()
                     .flat_map(move |item| {
                         p.entries
                          .iter()
                          .enumerate()
                          .map(move |(index, entry)| item.crossed(&p.argnames, index, entry))
                     })
                     .collect()
            })
    }
}

/// Almacenamiento de registros que alimenta la ejecución parametrizada.
pub trait ParametrizeRegistry {
    fn register(&mut self, registration: Registration) -> Result<(), RunnerError>;

    fn get(&self, function: &str) -> Option<&Registration>;

    /// Registros en orden de entrega.
    fn registrations(&self) -> Vec<&Registration>;
}

#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    pub inner: IndexMap<String, Registration>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Todos los items de todos los registros, en orden.
    pub fn collect(&self) -> Vec<CollectedItem> {
        self.inner.values().flat_map(Registration::items).collect()
    }
}

impl ParametrizeRegistry for InMemoryRegistry {
    fn register(&mut self, registration: Registration) -> Result<(), RunnerError> {
        if self.inner.contains_key(&registration.function) {
            return Err(RunnerError::DuplicateRegistration(registration.function));
        }
        self.inner.insert(registration.function.clone(), registration);
        Ok(())
    }

    fn get(&self, function: &str) -> Option<&Registration> {
        self.inner.get(function)
    }

    fn registrations(&self) -> Vec<&Registration> {
        self.inner.values().collect()
    }
}
