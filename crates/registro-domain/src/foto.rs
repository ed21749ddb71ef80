use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadatos de una foto adjunta a un paso de registro.
///
/// Las fotos se etiquetan por (registro, etapa, app); el conteo por etapa
/// alimenta el estado del sub-elemento de fotos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Foto {
    pub id: Uuid,
    pub registro_id: Uuid,
    pub etapa: String,
    pub app: String,
    pub filename: String,
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl Foto {
    pub fn nueva(
        registro_id: Uuid,
        etapa: impl Into<String>,
        app: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Foto {
            id: Uuid::new_v4(),
            registro_id,
            etapa: etapa.into(),
            app: app.into(),
            filename: filename.into(),
            created_at: Utc::now(),
            is_deleted: false,
        }
    }
}
