use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registro padre de una visita de inspección a un sitio.
///
/// Los pasos (sitio, acceso, empalme, ...) cuelgan de este registro por
/// clave foránea; el registro en sí solo lleva identificación y estado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registro {
    pub id: Uuid,
    pub sitio_id: Uuid,
    pub user: String,
    pub title: String,
    pub description: String,
    pub fecha: DateTime<Utc>,
    pub is_active: bool,
    pub is_deleted: bool,
}

impl Registro {
    /// Activa un registro nuevo para un sitio, fechado ahora.
    pub fn activar(sitio_id: Uuid, user: impl Into<String>, title: impl Into<String>) -> Self {
        Registro {
            id: Uuid::new_v4(),
            sitio_id,
            user: user.into(),
            title: title.into(),
            description: String::new(),
            fecha: Utc::now(),
            is_active: true,
            is_deleted: false,
        }
    }

    pub fn con_descripcion(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
