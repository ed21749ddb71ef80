//! Agregación para el dashboard: conteos de registros por estado y por
//! sitio, derivados de la misma completitud que colorea los pasos.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use registro_domain::Registro;

use crate::config::RegistroConfig;
use crate::elemento::{evaluar_completeness, EstadoColor};
use crate::errors::CoreError;
use crate::repo::RecordStore;

/// Estado agregado de un registro completo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoRegistro {
    /// Todos los pasos completos.
    Completo,
    /// Al menos un paso con datos.
    Parcial,
    /// Ningún paso con datos.
    Vacio,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConteoSitio {
    pub total: usize,
    pub completos: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResumen {
    pub total_registros: usize,
    pub completos: usize,
    pub parciales: usize,
    pub vacios: usize,
    pub por_sitio: IndexMap<Uuid, ConteoSitio>,
}

/// Estado de un registro: recorre sus pasos y agrega la completitud.
pub fn estado_registro(
    config: &RegistroConfig,
    registro: &Registro,
    records: &dyn RecordStore,
) -> EstadoRegistro {
    let mut algun_dato = false;
    let mut todo_completo = true;

    for paso_config in config.pasos.values() {
        let elemento_config = &paso_config.elemento;
        let instancia = records.find(registro.id, &elemento_config.schema.nombre);
        let completeness = evaluar_completeness(elemento_config, instancia.as_ref());
        if completeness.filled_fields > 0 {
            algun_dato = true;
        }
        if completeness.color != EstadoColor::Success {
            todo_completo = false;
        }
    }

    if todo_completo && !config.pasos.is_empty() {
        EstadoRegistro::Completo
    } else if algun_dato {
        EstadoRegistro::Parcial
    } else {
        EstadoRegistro::Vacio
    }
}

/// Resumen de dashboard sobre los registros activos (no borrados).
pub fn resumen(
    config: &RegistroConfig,
    registros: &[Registro],
    records: &dyn RecordStore,
) -> Result<DashboardResumen, CoreError> {
    let mut resumen = DashboardResumen {
        total_registros: 0,
        completos: 0,
        parciales: 0,
        vacios: 0,
        por_sitio: IndexMap::new(),
    };

    for registro in registros.iter().filter(|r| r.is_active && !r.is_deleted) {
        let estado = estado_registro(config, registro, records);
        resumen.total_registros += 1;
        match estado {
            EstadoRegistro::Completo => resumen.completos += 1,
            EstadoRegistro::Parcial => resumen.parciales += 1,
            EstadoRegistro::Vacio => resumen.vacios += 1,
        }
        let conteo = resumen.por_sitio.entry(registro.sitio_id).or_default();
        conteo.total += 1;
        if estado == EstadoRegistro::Completo {
            conteo.completos += 1;
        }
    }

    Ok(resumen)
}
