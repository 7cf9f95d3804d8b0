//! Expansión de casos a partir de secuencias de filas.

pub mod expand;
pub mod template;

pub use expand::{apply_generated, apply_generated_with, expand};
pub use template::format_name;
