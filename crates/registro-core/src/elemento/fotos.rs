//! Sub-elemento de fotos: conteo por (registro, etapa, app) y color según
//! el mínimo configurado.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::FotosConfig;
use crate::repo::FotoStore;

use super::EstadoColor;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FotosContext {
    pub enabled: bool,
    pub count: usize,
    pub min_count: usize,
    pub color: EstadoColor,
}

impl FotosContext {
    pub fn deshabilitado() -> Self {
        FotosContext { enabled: false, count: 0, min_count: 0, color: EstadoColor::Error }
    }
}

pub fn resolver_fotos(
    cfg: &FotosConfig,
    registro_id: Uuid,
    etapa: &str,
    app: &str,
    fotos: &dyn FotoStore,
) -> FotosContext {
    let count = fotos.contar(registro_id, etapa, app);
    let color = if count >= cfg.min_count {
        EstadoColor::Success
    } else if count > 0 {
        EstadoColor::Warning
    } else {
        EstadoColor::Error
    };
    FotosContext { enabled: true, count, min_count: cfg.min_count, color }
}
