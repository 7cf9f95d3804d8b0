use serde::{Deserialize, Serialize};

use super::mark::Mark;
use super::signature::Signature;
use super::table::{CaseMarker, Parametrization, ParametrizeOrigin};

/// Registro adjunto a una función de test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Annotation {
    Mark(Mark),
    Parametrize(Parametrization),
    CaseMarker(CaseMarker),
}

impl Annotation {
    pub fn is_case_record(&self) -> bool {
        match self {
            Annotation::CaseMarker(_) => true,
            Annotation::Parametrize(p) => p.origin == ParametrizeOrigin::CaseTable,
            Annotation::Mark(_) => false,
        }
    }
}

impl From<Mark> for Annotation {
    fn from(m: Mark) -> Self {
        Annotation::Mark(m)
    }
}

/// Primitivas genéricas de anotación que ofrece el runner.
pub trait AnnotationHost {
    fn annotations(&self) -> &[Annotation];

    fn attach(&mut self, annotation: Annotation);

    /// Quita y devuelve (en orden) las anotaciones que cumplen `pred`.
    fn remove_where<F>(&mut self, pred: F) -> Vec<Annotation>
        where F: FnMut(&Annotation) -> bool;
}

/// La función de test que se decora.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestFunction {
    pub name: String,
    pub signature: Signature,
    annotations: Vec<Annotation>,
}

impl TestFunction {
    pub fn new(name: impl Into<String>, signature: Signature) -> Self {
        Self { name: name.into(),
               signature,
               annotations: Vec::new() }
    }

    /// Añade una marca externa (equivalente a decorar con `mark.skip`, etc.).
    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.attach(Annotation::Mark(mark));
        self
    }

    /// Marcas ajenas a la tabla de casos, en orden.
    pub fn marks(&self) -> impl Iterator<Item = &Mark> {
        self.annotations.iter().filter_map(|a| match a {
                                   Annotation::Mark(m) => Some(m),
                                   _ => None,
                               })
    }

    /// Parametrizaciones declaradas por terceros, en orden de adjunción.
    pub fn external_parametrizations(&self) -> impl Iterator<Item = &Parametrization> {
        self.annotations.iter().filter_map(|a| match a {
                                   Annotation::Parametrize(p) if p.origin == ParametrizeOrigin::External => Some(p),
                                   _ => None,
                               })
    }

    pub fn clear_defaults(&mut self) {
        self.signature.clear_defaults();
    }
}

impl AnnotationHost for TestFunction {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn attach(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    fn remove_where<F>(&mut self, mut pred: F) -> Vec<Annotation>
        where F: FnMut(&Annotation) -> bool
    {
        let (removed, kept): (Vec<Annotation>, Vec<Annotation>) =
            std::mem::take(&mut self.annotations).into_iter()
                                                 .partition(|a| pred(a));
        self.annotations = kept;
        removed
    }
}

/// Lo que recibe un decorador: una función o cualquier otro objeto.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Callable(TestFunction),
    Object { name: String },
}

impl Target {
    pub fn object(name: impl Into<String>) -> Self {
        Target::Object { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            Target::Callable(f) => &f.name,
            Target::Object { name } => name,
        }
    }
}

impl From<TestFunction> for Target {
    fn from(f: TestFunction) -> Self {
        Target::Callable(f)
    }
}
