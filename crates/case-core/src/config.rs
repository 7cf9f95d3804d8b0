//! Configuración del motor desde variables de entorno.
//!
//! Convención `CASESTACK_*`. El archivo `.env` se carga perezosamente una sola
//! vez antes de leer cualquier variable.

use std::env;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::constants::DEFAULT_NAME_TEMPLATE;

pub const NAME_TEMPLATE_VAR: &str = "CASESTACK_NAME_TEMPLATE";
pub const STRICT_KWARGS_VAR: &str = "CASESTACK_STRICT_KWARGS";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Configuración global, evaluada una sola vez.
pub static CONFIG: Lazy<CaseConfig> = Lazy::new(CaseConfig::from_env);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseConfig {
    /// Plantilla usada por los casos generados cuando no se indica `name`.
    pub default_name_template: String,
    /// Si es `true`, un keyword que no nombra ningún parámetro es un error;
    /// si es `false` se registra con `warn!` y se ignora.
    pub reject_unknown_keywords: bool,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self { default_name_template: DEFAULT_NAME_TEMPLATE.to_string(),
               reject_unknown_keywords: true }
    }
}

impl CaseConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración leyendo cada clave con `lookup`. Valores
    /// ausentes, vacíos o no reconocidos caen en el default.
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let default_name_template = lookup(NAME_TEMPLATE_VAR).filter(|v| !v.is_empty())
                                                             .unwrap_or(defaults.default_name_template);
        let reject_unknown_keywords = lookup(STRICT_KWARGS_VAR).and_then(|v| parse_flag(&v))
                                                               .unwrap_or(defaults.reject_unknown_keywords);
        Self { default_name_template,
               reject_unknown_keywords }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
