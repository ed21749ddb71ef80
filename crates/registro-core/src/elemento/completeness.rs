//! Completitud de un paso: fracción de campos llenos sobre la instancia
//! persistida, mapeada a un color de cuatro estados.

use serde::{Deserialize, Serialize};

use crate::config::ElementoConfig;
use crate::model::RecordInstance;

/// Color de estado de un paso o sub-elemento.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoColor {
    /// Sin instancia persistida.
    Gray,
    /// Instancia sin ningún campo lleno (o requisito incumplido).
    Error,
    /// Parcialmente llenado.
    Warning,
    /// Todos los campos llenos.
    Success,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completeness {
    pub color: EstadoColor,
    pub is_complete: bool,
    pub total_fields: usize,
    pub filled_fields: usize,
    pub missing_fields: Vec<String>,
    pub percentage: f64,
}

impl Completeness {
    /// Completitud de un paso sin instancia (o con instancia borrada).
    pub fn sin_instancia() -> Self {
        Completeness {
            color: EstadoColor::Gray,
            is_complete: false,
            total_fields: 0,
            filled_fields: 0,
            missing_fields: Vec::new(),
            percentage: 0.0,
        }
    }
}

/// Evalúa la completitud de un elemento contra su instancia persistida.
///
/// Solo los campos requeridos cuentan: con N requeridos y K llenos,
/// `success` sii K == N > 0, `error` sii K == 0, `warning` en el resto;
/// `gray` cuando no hay instancia. Una instancia borrada lógicamente se
/// trata como inexistente.
pub fn evaluar(config: &ElementoConfig, instancia: Option<&RecordInstance>) -> Completeness {
    let instancia = match instancia {
        Some(i) if !i.is_deleted => i,
        _ => return Completeness::sin_instancia(),
    };

    let campos = config.campos_completitud();
    let total_fields = campos.len();
    let mut filled_fields = 0usize;
    let mut missing_fields = Vec::new();

    for nombre in &campos {
        if instancia.tiene_valor(nombre) {
            filled_fields += 1;
        } else {
            missing_fields.push(nombre.clone());
        }
    }

    let percentage = if total_fields > 0 {
        (filled_fields as f64 / total_fields as f64 * 1000.0).round() / 10.0
    } else {
        0.0
    };

    let color = if total_fields == 0 || filled_fields == 0 {
        EstadoColor::Error
    } else if filled_fields < total_fields {
        EstadoColor::Warning
    } else {
        EstadoColor::Success
    };

    Completeness {
        color,
        is_complete: color == EstadoColor::Success,
        total_fields,
        filled_fields,
        missing_fields,
        percentage,
    }
}
