//! Case Accumulator: la máquina de estados uncased -> cased.
//!
//! Cada aplicación sigue el ciclo unwrap -> resolver -> anteponer -> rewrap.
//! El caso nuevo se antepone a los anteriores, de modo que la decoración más
//! externa queda en el índice 0 y la tabla final lee en orden de declaración.

use log::debug;

use super::unwrap::{is_case, rewrap, unwrap, Unwrapped};
use crate::config::{CaseConfig, CONFIG};
use crate::decl::CaseSpec;
use crate::errors::CaseResult;
use crate::inspect::inspect;
use crate::model::{Case, CaseTable, Target, TestFunction};
use crate::resolve::resolve_values;
use crate::validate::{ensure_callable, reject_reserved, validate_arguments, validate_signature};

/// Aplica un caso con la configuración global.
pub fn apply_case(target: impl Into<Target>, spec: CaseSpec) -> CaseResult<TestFunction> {
    apply_case_with(target, spec, &CONFIG)
}

pub fn apply_case_with(target: impl Into<Target>, spec: CaseSpec, config: &CaseConfig) -> CaseResult<TestFunction> {
    apply_block(target.into(), vec![spec], config)
}

/// Aplica un bloque de casos como una sola decoración.
///
/// Los casos se resuelven en el orden recibido (el primero establece la tabla
/// si el objetivo no tenía casos) y el bloque completo se antepone conservando
/// ese orden. Un bloque vacío devuelve la función sin tocar.
pub(crate) fn apply_block(target: Target, specs: Vec<CaseSpec>, config: &CaseConfig) -> CaseResult<TestFunction> {
    let func = ensure_callable(target)?;
    validate_signature(&func)?;
    if specs.is_empty() {
        reject_reserved(&func)?;
        return Ok(func);
    }

    let cased = is_case(&func);
    debug!("apply_case:start function={} cased={} incoming={}", func.name, cased, specs.len());
    let Unwrapped { func, mut table } = if cased {
        unwrap(func)?
    } else {
        let inspected = inspect(&func);
        let mut func = func;
        func.clear_defaults();
        Unwrapped { func,
                    table: CaseTable::new(inspected.names, inspected.defaults) }
    };

    // cantidad y keywords primero, luego el nombre reservado
    for spec in &specs {
        validate_arguments(&func.name, table.argnames(), &spec.args, &spec.kwargs, config)?;
    }
    reject_reserved(&func)?;

    let mut block = Vec::with_capacity(specs.len());
    for spec in specs {
        block.push(resolve_case(&func.name, &table, spec)?);
    }
    table.prepend(block);

    debug!("apply_case:done function={} cases={}", func.name, table.len());
    Ok(rewrap(Unwrapped { func, table }))
}

fn resolve_case(function: &str, table: &CaseTable, spec: CaseSpec) -> CaseResult<Case> {
    let values = resolve_values(function,
                                &spec.id,
                                table.argnames(),
                                table.defaults(),
                                &spec.args,
                                &spec.kwargs)?;
    Ok(Case { id: spec.id,
              values,
              marks: spec.marks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CaseError;
    use crate::model::{Annotation, AnnotationHost, Mark, Signature};
    use crate::accumulate::case_table;
    use serde_json::json;

    fn add() -> TestFunction {
        TestFunction::new("test_add", Signature::positional(["a", "b", "expected"]).expect("valid"))
    }

    fn with_optional() -> TestFunction {
        let sig = Signature::builder().param("a")
                                      .param("b")
                                      .optional("expected", 5)
                                      .build()
                                      .expect("valid");
        TestFunction::new("test_add_opt", sig)
    }

    #[test]
    fn first_case_creates_table_and_clears_native_defaults() {
        let f = apply_case(with_optional(), CaseSpec::new("implicit").args([2, 3])).expect("applies");
        assert!(f.signature.params().iter().all(|p| p.default.is_none()));
        let t = case_table(&f).expect("table");
        assert_eq!(t.argnames(), ["a", "b", "expected"]);
        assert_eq!(t.cases()[0].values, vec![json!(2), json!(3), json!(5)]);
        assert_eq!(t.defaults().get("expected"), Some(&json!(5)));
    }

    #[test]
    fn later_cases_read_defaults_from_table() {
        let f = apply_case(with_optional(), CaseSpec::new("implicit").args([2, 3])).expect("first");
        let f = apply_case(f, CaseSpec::new("explicit").args([2, 4, 6])).expect("second");
        let f = apply_case(f, CaseSpec::new("another").args([1, 4])).expect("third");
        let t = case_table(&f).expect("table");
        assert_eq!(t.ids(), vec!["another", "explicit", "implicit"]);
        assert_eq!(t.cases()[0].values, vec![json!(1), json!(4), json!(5)]);
    }

    #[test]
    fn later_case_missing_required_value_fails() {
        let f = apply_case(add(), CaseSpec::new("full").args([1, 2, 3])).expect("first");
        let err = apply_case(f, CaseSpec::new("short").args([1, 2])).unwrap_err();
        assert_eq!(err,
                   CaseError::UnresolvedParameter { function: "test_add".into(),
                                                    case: "short".into(),
                                                    name: "expected".into() });
    }

    #[test]
    fn unrelated_marks_stay_in_place() {
        let f = add().with_mark(Mark::new("slow"));
        let f = apply_case(f, CaseSpec::new("one").args([1, 1, 2])).expect("first");
        let f = apply_case(f, CaseSpec::new("two").args([2, 2, 4])).expect("second");
        assert!(matches!(&f.annotations()[0], Annotation::Mark(m) if m.name == "slow"));
        assert_eq!(f.annotations().len(), 3);
    }

    #[test]
    fn objects_cannot_be_cased() {
        let err = apply_case(Target::object("DATA"), CaseSpec::new("x").arg(1)).unwrap_err();
        assert!(matches!(err, CaseError::NotCallable { .. }));
    }

    #[test]
    fn failed_validation_names_function_and_counts() {
        let f = TestFunction::new("func", Signature::positional(["a"]).expect("valid"));
        let err = apply_case(f, CaseSpec::new("name").args([1, 2])).unwrap_err();
        assert_eq!(err.to_string(), "test 'func' expected 1 params but case got 2");
    }

    #[test]
    fn argument_count_is_checked_before_reserved_name() {
        let reserved = || TestFunction::new("func", Signature::positional(["marks"]).expect("valid"));
        let err = apply_case(reserved(), CaseSpec::new("n").args([1, 2])).unwrap_err();
        assert_eq!(err,
                   CaseError::TooManyArguments { function: "func".into(),
                                                 expected: 1,
                                                 got: 2 });
        let err = apply_case(reserved(), CaseSpec::new("n").arg(1)).unwrap_err();
        assert!(matches!(err, CaseError::ReservedName { .. }));
    }

    #[test]
    fn lenient_config_ignores_unknown_keyword() {
        let lenient = CaseConfig { reject_unknown_keywords: false,
                                   ..CaseConfig::default() };
        let spec = || CaseSpec::new("extra").args([1, 2]).kwarg("zzz", 9);
        let f = apply_case_with(with_optional(), spec(), &lenient).expect("applies");
        let t = case_table(&f).expect("table");
        assert_eq!(t.argnames(), ["a", "b", "expected"]);
        assert_eq!(t.cases()[0].values, vec![json!(1), json!(2), json!(5)]);

        let strict = apply_case_with(with_optional(), spec(), &CaseConfig::default());
        assert_eq!(strict.unwrap_err(),
                   CaseError::UnknownKeyword { function: "test_add_opt".into(),
                                               name: "zzz".into() });
    }
}
