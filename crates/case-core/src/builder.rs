//! Builder encadenado para declarar los casos de un test.
//!
//! Sustituye el apilado implícito de decoradores por una composición
//! explícita: los casos se escriben en orden de lectura y `build` los aplica
//! del último al primero, igual que se evaluarían decoradores apilados. La
//! tabla resultante queda en el mismo orden en que se encadenaron.
//!
//! ```ignore
//! let test = Cases::for_fn(func)
//!     .case(case!("first case", 1, 2, 3))
//!     .case(case!("second case", 2, 2, 4))
//!     .generated(GeneratedCases::new(rows))
//!     .build()?;
//! ```

use crate::config::{CaseConfig, CONFIG};
use crate::decl::{CaseDecl, CaseSpec, GeneratedCases};
use crate::decorator::case;
use crate::errors::CaseResult;
use crate::model::{Target, TestFunction};

#[derive(Debug)]
pub struct Cases {
    target: Target,
    decls: Vec<CaseDecl>,
    config: Option<CaseConfig>,
}

impl Cases {
    pub fn for_fn(target: impl Into<Target>) -> Self {
        Self { target: target.into(),
               decls: Vec::new(),
               config: None }
    }

    pub fn case(self, spec: CaseSpec) -> Self {
        self.decl(spec)
    }

    pub fn generated(self, generated: GeneratedCases) -> Self {
        self.decl(generated)
    }

    pub fn decl(mut self, decl: impl Into<CaseDecl>) -> Self {
        self.decls.push(decl.into());
        self
    }

    /// Configuración propia en lugar de la global.
    pub fn config(mut self, config: CaseConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Aplica las declaraciones de la más interna (última) a la más externa.
    pub fn build(self) -> CaseResult<TestFunction> {
        let config = self.config.as_ref().unwrap_or(&CONFIG);
        let mut decls = self.decls.into_iter().rev();
        let Some(innermost) = decls.next() else {
            return crate::validate::ensure_callable(self.target);
        };
        let mut func = case(innermost).apply_with(self.target, config)?;
        for decl in decls {
            func = case(decl).apply_with(func, config)?;
        }
        Ok(func)
    }
}
