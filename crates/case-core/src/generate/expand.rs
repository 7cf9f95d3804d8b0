//! Generator Expansion: filas -> casos individuales con nombre.

use log::debug;

use super::template::format_name;
use crate::accumulate::accumulator::apply_block;
use crate::config::{CaseConfig, CONFIG};
use crate::decl::{CaseSpec, GeneratedCases};
use crate::errors::CaseResult;
use crate::model::{Target, TestFunction};

/// Convierte cada fila en un `CaseSpec` posicional, en orden de origen.
pub fn expand(generated: &GeneratedCases, config: &CaseConfig) -> CaseResult<Vec<CaseSpec>> {
    let template = generated.name
                            .as_deref()
                            .unwrap_or(&config.default_name_template);
    generated.rows
             .iter()
             .enumerate()
             .map(|(index, row)| {
                 let id = format_name(template, row, index)?;
                 Ok(CaseSpec { id,
                               args: row.clone(),
                               kwargs: Default::default(),
                               marks: generated.marks.clone() })
             })
             .collect()
}

pub fn apply_generated(target: impl Into<Target>, generated: GeneratedCases) -> CaseResult<TestFunction> {
    apply_generated_with(target, generated, &CONFIG)
}

/// Expande y aplica las filas como un bloque: dentro de la tabla final los
/// casos generados conservan el orden de origen.
pub fn apply_generated_with(target: impl Into<Target>,
                            generated: GeneratedCases,
                            config: &CaseConfig)
                            -> CaseResult<TestFunction> {
    let specs = expand(&generated, config)?;
    debug!("expand:done rows={} template={:?}", specs.len(), generated.name);
    apply_block(target.into(), specs, config)
}
