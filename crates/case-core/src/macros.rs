//! Macro utilitaria para declarar un `CaseSpec` con sintaxis de llamada.
//!
//! Exportada en la raíz del crate:
//!   use case_core::case;
//!
//! Formas soportadas (en cualquier combinación, posicionales primero):
//! - case!("id", 1, 2, 3)
//! - case!("id", a = 1, b = 2)
//! - case!("id", 3, b = 4, marks = [Mark::skip()])

#[macro_export]
macro_rules! case {
    // ---------------- fin de la lista ----------------
    (@acc $spec:expr ;) => {
        $spec
    };
    // ---------------- marks = [...] ----------------
    (@acc $spec:expr ; marks = [$($m:expr),* $(,)?] $(, $($rest:tt)*)?) => {
        $crate::case!(@acc $spec $(.mark($m))* ; $($($rest)*)?)
    };
    // ---------------- keyword ----------------
    (@acc $spec:expr ; $k:ident = $v:expr $(, $($rest:tt)*)?) => {
        $crate::case!(@acc $spec.kwarg(stringify!($k), $crate::serde_json::json!($v)) ; $($($rest)*)?)
    };
    // ---------------- posicional ----------------
    (@acc $spec:expr ; $v:expr $(, $($rest:tt)*)?) => {
        $crate::case!(@acc $spec.arg($crate::serde_json::json!($v)) ; $($($rest)*)?)
    };
    ($id:expr $(, $($rest:tt)*)?) => {
        $crate::case!(@acc $crate::CaseSpec::new($id) ; $($($rest)*)?)
    };
}
