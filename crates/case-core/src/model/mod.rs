//! Modelos neutrales (Signature, Mark, Case, CaseTable, TestFunction,...)

pub mod function;
pub mod mark;
pub mod signature;
pub mod table;

pub use function::{Annotation, AnnotationHost, Target, TestFunction};
pub use mark::Mark;
pub use signature::{Param, ParamKind, Signature, SignatureBuilder};
pub use table::{Case, CaseMarker, CaseTable, Parametrization, ParametrizeOrigin};
