//! Plantillas de nombre para casos generados.
//!
//! Subconjunto de `str.format`: `{}` numeración automática, `{N}` explícita,
//! `{index}` (índice de la fila) y los escapes `{{` / `}}`. No se admiten
//! format specs ni conversiones.

use serde_json::Value;

use crate::constants::INDEX_SLOT;
use crate::errors::{CaseError, CaseResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Numbering {
    Unset,
    Auto,
    Manual,
}

/// Formatea `template` con los valores de una fila y su índice.
pub fn format_name(template: &str, values: &[Value], index: usize) -> CaseResult<String> {
    let fail = |reason: String| CaseError::Template { template: template.to_string(),
                                                      reason };
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut numbering = Numbering::Unset;
    let mut next_auto = 0usize;

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(fail("single '}' encountered".into())),
            '{' => {
                let mut field = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') | None => return Err(fail("unclosed '{'".into())),
                        Some(ch) => field.push(ch),
                    }
                }
                let slot = field.trim();
                if slot == INDEX_SLOT {
                    out.push_str(&index.to_string());
                    continue;
                }
                let position = if slot.is_empty() {
                    if numbering == Numbering::Manual {
                        return Err(fail("cannot switch from manual to automatic field numbering".into()));
                    }
                    numbering = Numbering::Auto;
                    next_auto += 1;
                    next_auto - 1
                } else if let Ok(n) = slot.parse::<usize>() {
                    if numbering == Numbering::Auto {
                        return Err(fail("cannot switch from automatic to manual field numbering".into()));
                    }
                    numbering = Numbering::Manual;
                    n
                } else {
                    return Err(fail(format!("unknown slot '{{{slot}}}'")));
                };
                let value = values.get(position)
                                  .ok_or_else(|| fail(format!("slot {position} out of range for a row of {} values", values.len())))?;
                out.push_str(&render(value));
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

/// Strings sin comillas; cualquier otro valor como JSON compacto.
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
