use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tipo de columna de un modelo de paso. Determina el widget del formulario
/// sintetizado y la coerción de valores al guardar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Texto,
    TextoLargo,
    Entero,
    Decimal,
    Booleano,
    Fecha,
}

/// Valor de un campo de instancia.
///
/// `Nulo` y el texto vacío cuentan como "no llenado" para la completitud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Texto(String),
    Entero(i64),
    Decimal(f64),
    Booleano(bool),
    Fecha(DateTime<Utc>),
    Nulo,
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Nulo => true,
            FieldValue::Texto(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Decimal(v) => Some(*v),
            FieldValue::Entero(v) => Some(*v as f64),
            FieldValue::Texto(s) => s.parse().ok(),
            _ => None,
        }
    }


    /// Representación JSON del valor, para serializar filas de tabla.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Texto(s) => serde_json::Value::String(s.clone()),
            FieldValue::Entero(v) => serde_json::json!(v),
            FieldValue::Decimal(v) => serde_json::json!(v),
            FieldValue::Booleano(b) => serde_json::Value::Bool(*b),
            FieldValue::Fecha(f) => serde_json::Value::String(f.to_rfc3339()),
            FieldValue::Nulo => serde_json::Value::Null,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Nulo
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Texto(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Decimal(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Entero(v)
    }
}

/// Descriptor de una columna de datos de un modelo de paso.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub nombre: String,
    pub etiqueta: String,
    pub kind: FieldKind,
    /// Derivado de la nulabilidad de la columna: un campo no nulo es
    /// requerido en el formulario y cuenta para la completitud.
    pub requerido: bool,
}

impl FieldDescriptor {
    pub fn requerido(nombre: &str, etiqueta: &str, kind: FieldKind) -> Self {
        FieldDescriptor {
            nombre: nombre.to_string(),
            etiqueta: etiqueta.to_string(),
            kind,
            requerido: true,
        }
    }

    pub fn opcional(nombre: &str, etiqueta: &str, kind: FieldKind) -> Self {
        FieldDescriptor {
            nombre: nombre.to_string(),
            etiqueta: etiqueta.to_string(),
            kind,
            requerido: false,
        }
    }
}
