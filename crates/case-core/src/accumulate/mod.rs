//! Acumulación de casos sobre una función (unwrap -> merge -> rewrap).

pub mod accumulator;
pub mod unwrap;

pub use accumulator::{apply_case, apply_case_with};
pub use unwrap::{case_table, is_case, rewrap, unwrap, Unwrapped};
