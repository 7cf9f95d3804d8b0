//! case-runner: frontera con el runner externo.
//!
//! - `ParametrizeRegistry`: la primitiva "register parameterization".
//! - `InMemoryRegistry`: implementación en memoria para tests y herramientas.
//! - `handoff`: lee la tabla de casos de una función y la registra.
pub mod collect;
pub mod errors;
pub mod handoff;
pub mod registry;

pub use collect::CollectedItem;
pub use errors::RunnerError;
pub use handoff::{handoff, handoff_all};
pub use registry::{InMemoryRegistry, ParametrizeRegistry, Registration};
