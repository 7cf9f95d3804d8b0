//! Esquema explícito de parámetros de un test.
//!
//! No hay reflexión en tiempo de ejecución: quien declara el test describe sus
//! parámetros (nombre, tipo de slot y default opcional) con
//! `Signature::builder()`. El builder valida las invariantes al construir.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::SignatureError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamKind {
    /// Parámetro ordinario que un caso puede suministrar.
    Positional,
    /// Lo resuelve el mecanismo de inyección del runner; nunca entra en la tabla.
    Fixture,
    /// Slot catch-all (`*args`); nunca entra en la tabla.
    Variadic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub kind: ParamKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl Param {
    pub fn is_case_eligible(&self) -> bool {
        matches!(self.kind, ParamKind::Positional)
    }
}

/// Lista ordenada de parámetros declarados.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    params: Vec<Param>,
}

impl Signature {
    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::default()
    }

    /// Firma sin defaults a partir de nombres posicionales.
    pub fn positional<I, S>(names: I) -> Result<Self, SignatureError>
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        names.into_iter()
             .fold(Self::builder(), |b, n| b.param(n))
             .build()
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Elimina los defaults nativos. Tras aplicar el primer caso los defaults
    /// viven en la tabla y el runner no debe volver a aplicarlos.
    pub fn clear_defaults(&mut self) {
        for p in self.params.iter_mut() {
            p.default = None;
        }
    }
}

#[derive(Debug, Default)]
pub struct SignatureBuilder {
    params: Vec<Param>,
}

impl SignatureBuilder {
    /// Parámetro requerido.
    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(Param { name: name.into(),
                                 kind: ParamKind::Positional,
                                 default: None });
        self
    }

    /// Parámetro con valor por defecto.
    pub fn optional(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.params.push(Param { name: name.into(),
                                 kind: ParamKind::Positional,
                                 default: Some(default.into()) });
        self
    }

    pub fn fixture(mut self, name: impl Into<String>) -> Self {
        self.params.push(Param { name: name.into(),
                                 kind: ParamKind::Fixture,
                                 default: None });
        self
    }

    pub fn variadic(mut self, name: impl Into<String>) -> Self {
        self.params.push(Param { name: name.into(),
                                 kind: ParamKind::Variadic,
                                 default: None });
        self
    }

    pub fn build(self) -> Result<Signature, SignatureError> {
        let mut seen_default = false;
        let mut seen_variadic = false;
        for (i, p) in self.params.iter().enumerate() {
            if self.params[..i].iter().any(|prev| prev.name == p.name) {
                return Err(SignatureError::DuplicateParameter(p.name.clone()));
            }
            match p.kind {
                ParamKind::Positional => {
                    if p.default.is_some() {
                        seen_default = true;
                    } else if seen_default {
                        return Err(SignatureError::RequiredAfterOptional(p.name.clone()));
                    }
                }
                ParamKind::Fixture | ParamKind::Variadic if p.default.is_some() => {
                    return Err(SignatureError::DefaultOnNonPositional(p.name.clone()));
                }
                ParamKind::Variadic => {
                    if seen_variadic {
                        return Err(SignatureError::MultipleVariadic(p.name.clone()));
                    }
                    seen_variadic = true;
                }
                ParamKind::Fixture => {}
            }
        }
        Ok(Signature { params: self.params })
    }
}
