//! case-core: motor de apilado de casos y resolución de parámetros.
//!
//! Convierte declaraciones `case(...)` sobre una función de test en una tabla
//! ordenada (argnames, casos, defaults) que se adjunta a la función como
//! anotaciones y que el runner externo lee para multiplicar invocaciones.
pub mod accumulate;
pub mod builder;
pub mod config;
pub mod constants;
pub mod decl;
pub mod decorator;
pub mod errors;
pub mod generate;
pub mod inspect;
pub mod macros; // macro case!
pub mod model;
pub mod resolve;
pub mod validate;

pub use accumulate::{apply_case, apply_case_with, case_table, is_case, rewrap, unwrap, Unwrapped};
pub use builder::Cases;
pub use config::{CaseConfig, CONFIG};
pub use decl::{CaseDecl, CaseSpec, GeneratedCases};
pub use decorator::{case, CaseDecorator};
pub use errors::{CaseError, CaseResult, SignatureError};
pub use generate::{apply_generated, apply_generated_with, expand, format_name};
pub use inspect::{inspect, InspectedSignature};
pub use model::{Annotation, AnnotationHost, Case, CaseMarker, CaseTable, Mark, Param, ParamKind, Parametrization,
                ParametrizeOrigin, Signature, Target, TestFunction};

// usado por la macro `case!`
pub use serde_json;
