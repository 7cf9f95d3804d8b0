//! Punto de entrada público: `case(...)` devuelve un decorador que se aplica
//! sobre el objetivo.
//!
//! ```ignore
//! let f = case(case!("first case", 1, 2, 3)).apply(f)?;
//! let f = case(GeneratedCases::new(rows).name("{} ** 2 == {}")).apply(f)?;
//! ```

use crate::accumulate::apply_case_with;
use crate::config::{CaseConfig, CONFIG};
use crate::decl::CaseDecl;
use crate::errors::CaseResult;
use crate::generate::apply_generated_with;
use crate::model::{Target, TestFunction};

#[derive(Debug, Clone, PartialEq)]
pub struct CaseDecorator {
    decl: CaseDecl,
}

pub fn case(decl: impl Into<CaseDecl>) -> CaseDecorator {
    CaseDecorator { decl: decl.into() }
}

impl CaseDecorator {
    pub fn apply(self, target: impl Into<Target>) -> CaseResult<TestFunction> {
        self.apply_with(target, &CONFIG)
    }

    pub fn apply_with(self, target: impl Into<Target>, config: &CaseConfig) -> CaseResult<TestFunction> {
        match self.decl {
            CaseDecl::Single(spec) => apply_case_with(target, spec, config),
            CaseDecl::Generated(generated) => apply_generated_with(target, generated, config),
        }
    }
}
