//! Protocolo unwrap / rewrap.
//!
//! `unwrap` separa de la función los dos registros de la tabla de casos
//! (`Parametrization` con origen `CaseTable` y `CaseMarker`) y deja en su
//! sitio cualquier otra anotación. `rewrap` los vuelve a adjuntar al final.

use log::debug;

use crate::errors::{CaseError, CaseResult};
use crate::model::{Annotation, AnnotationHost, CaseMarker, CaseTable, Parametrization, TestFunction};

/// Función sin sus registros de caso + la tabla extraída.
#[derive(Debug, Clone, PartialEq)]
pub struct Unwrapped {
    pub func: TestFunction,
    pub table: CaseTable,
}

pub fn is_case(func: &impl AnnotationHost) -> bool {
    func.annotations()
        .iter()
        .any(|a| matches!(a, Annotation::CaseMarker(_)))
}

/// Vista de sólo lectura de la tabla adjunta, si existe.
pub fn case_table(func: &impl AnnotationHost) -> Option<CaseTable> {
    let (parametrization, marker) = find_records(func.annotations())?;
    Some(CaseTable::from_records(parametrization.clone(), marker.clone()))
}

pub fn unwrap(mut func: TestFunction) -> CaseResult<Unwrapped> {
    if find_records(func.annotations()).is_none() {
        return Err(CaseError::NotACase { function: func.name.clone() });
    }
    let mut parametrization = None;
    let mut marker = None;
    for record in func.remove_where(Annotation::is_case_record) {
        match record {
            Annotation::Parametrize(p) if parametrization.is_none() => parametrization = Some(p),
            Annotation::CaseMarker(m) if marker.is_none() => marker = Some(m),
            _ => {}
        }
    }
    let (Some(parametrization), Some(marker)) = (parametrization, marker) else {
        return Err(CaseError::NotACase { function: func.name.clone() });
    };
    let table = CaseTable::from_records(parametrization, marker);
    debug!("unwrap:done function={} cases={} kept_annotations={}",
           func.name,
           table.len(),
           func.annotations().len());
    Ok(Unwrapped { func, table })
}

pub fn rewrap(unwrapped: Unwrapped) -> TestFunction {
    let Unwrapped { mut func, table } = unwrapped;
    debug!("rewrap:start function={} cases={}", func.name, table.len());
    let (parametrization, marker) = table.into_records();
    func.attach(Annotation::Parametrize(parametrization));
    func.attach(Annotation::CaseMarker(marker));
    func
}

fn find_records(annotations: &[Annotation]) -> Option<(&Parametrization, &CaseMarker)> {
    let parametrization = annotations.iter().find_map(|a| match a {
                                                 Annotation::Parametrize(p) if a.is_case_record() => Some(p),
                                                 _ => None,
                                             })?;
    let marker = annotations.iter().find_map(|a| match a {
                                        Annotation::CaseMarker(m) => Some(m),
                                        _ => None,
                                    })?;
    Some((parametrization, marker))
}
