//! Constantes del motor de casos.
//!
//! Nombres reservados y plantillas por defecto compartidos entre el validador,
//! la expansión generada y el runner externo.

/// Keyword reservado para pasar anotaciones por caso. Ningún parámetro del
/// test puede llamarse así.
pub const RESERVED_MARKS_KEYWORD: &str = "marks";

/// Nombre del marcador que identifica a un test con tabla de casos.
pub const CASE_MARKER: &str = "case";

/// Nombre con el que el runner reconoce una parametrización.
pub const PARAMETRIZE_MARKER: &str = "parametrize";

/// Slot reservado de la plantilla de nombres que recibe el índice de la fila.
pub const INDEX_SLOT: &str = "index";

/// Plantilla por defecto para casos generados: el índice de la fila.
pub const DEFAULT_NAME_TEMPLATE: &str = "{index}";
