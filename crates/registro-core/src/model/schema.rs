use serde::{Deserialize, Serialize};

use crate::constants::CAMPOS_AUDITORIA;
use crate::errors::CoreError;

use super::FieldDescriptor;

/// Esquema de un modelo de paso: solo columnas de datos, en orden de
/// declaración. Las columnas de auditoría no se describen aquí.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSchema {
    pub nombre: String,
    pub campos: Vec<FieldDescriptor>,
}

impl ModelSchema {
    pub fn new(nombre: &str, campos: Vec<FieldDescriptor>) -> Result<Self, CoreError> {
        if let Some(c) = campos.iter().find(|c| CAMPOS_AUDITORIA.contains(&c.nombre.as_str())) {
            return Err(CoreError::ConfigInvalida(format!(
                "el esquema {nombre} declara la columna de auditoría '{}'",
                c.nombre
            )));
        }
        Ok(ModelSchema { nombre: nombre.to_string(), campos })
    }

    pub fn campo(&self, nombre: &str) -> Option<&FieldDescriptor> {
        self.campos.iter().find(|c| c.nombre == nombre)
    }

    pub fn nombres_campos(&self) -> Vec<String> {
        self.campos.iter().map(|c| c.nombre.clone()).collect()
    }
}
