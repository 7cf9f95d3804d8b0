//! Declaraciones de caso tal como las escribe el usuario, antes de resolver.

use indexmap::IndexMap;
use serde_json::Value;

use crate::model::Mark;

/// Un caso escrito a mano: identificador, posicionales, keywords y marks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaseSpec {
    pub id: String,
    pub args: Vec<Value>,
    pub kwargs: IndexMap<String, Value>,
    pub marks: Vec<Mark>,
}

impl CaseSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(),
               ..Self::default() }
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn args<I, V>(mut self, values: I) -> Self
        where I: IntoIterator<Item = V>,
              V: Into<Value>
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(name.into(), value.into());
        self
    }

    pub fn mark(mut self, mark: Mark) -> Self {
        self.marks.push(mark);
        self
    }

    /// Número de valores suministrados (posicionales + keywords).
    pub fn supplied(&self) -> usize {
        self.args.len() + self.kwargs.len()
    }
}

/// Filas generadas: cada fila se convierte en un caso con nombre derivado de
/// la plantilla `name`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneratedCases {
    pub rows: Vec<Vec<Value>>,
    /// Plantilla de nombre; `None` usa la de la configuración (`{index}`).
    pub name: Option<String>,
    /// Marks aplicadas a cada caso generado.
    pub marks: Vec<Mark>,
}

impl GeneratedCases {
    pub fn new<I, R, V>(rows: I) -> Self
        where I: IntoIterator<Item = R>,
              R: IntoIterator<Item = V>,
              V: Into<Value>
    {
        let rows = rows.into_iter()
                       .map(|r| r.into_iter().map(Into::into).collect())
                       .collect();
        Self { rows,
               ..Self::default() }
    }

    /// Filas desde valores JSON: un array es una fila posicional, cualquier
    /// otro valor es una fila de un solo elemento.
    pub fn from_json_rows<I>(rows: I) -> Self
        where I: IntoIterator<Item = Value>
    {
        let rows = rows.into_iter()
                       .map(|v| match v {
                           Value::Array(items) => items,
                           other => vec![other],
                       })
                       .collect();
        Self { rows,
               ..Self::default() }
    }

    pub fn name(mut self, template: impl Into<String>) -> Self {
        self.name = Some(template.into());
        self
    }

    pub fn mark(mut self, mark: Mark) -> Self {
        self.marks.push(mark);
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Primer argumento de `case(...)`: un identificador con sus valores o una
/// secuencia de filas.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseDecl {
    Single(CaseSpec),
    Generated(GeneratedCases),
}

impl From<CaseSpec> for CaseDecl {
    fn from(spec: CaseSpec) -> Self {
        CaseDecl::Single(spec)
    }
}

impl From<GeneratedCases> for CaseDecl {
    fn from(g: GeneratedCases) -> Self {
        CaseDecl::Generated(g)
    }
}
