use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::FieldValue;

/// Instancia persistida de un modelo de paso, ligada a un registro padre.
///
/// El acceso a campos degrada a `Nulo` cuando el atributo no existe: los
/// tipos de registro parcialmente migrados no deben romper el render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordInstance {
    pub id: Uuid,
    pub registro_id: Uuid,
    pub modelo: String,
    valores: IndexMap<String, FieldValue>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecordInstance {
    pub fn nueva(registro_id: Uuid, modelo: &str) -> Self {
        let ahora = Utc::now();
        RecordInstance {
            id: Uuid::new_v4(),
            registro_id,
            modelo: modelo.to_string(),
            valores: IndexMap::new(),
            is_deleted: false,
            created_at: ahora,
            updated_at: ahora,
        }
    }

    /// Valor del campo, o `Nulo` si no existe.
    pub fn get(&self, nombre: &str) -> FieldValue {
        self.valores.get(nombre).cloned().unwrap_or(FieldValue::Nulo)
    }

    pub fn set(&mut self, nombre: &str, valor: FieldValue) {
        self.valores.insert(nombre.to_string(), valor);
        self.updated_at = Utc::now();
    }

    pub fn tiene_valor(&self, nombre: &str) -> bool {
        !self.get(nombre).is_empty()
    }
}
