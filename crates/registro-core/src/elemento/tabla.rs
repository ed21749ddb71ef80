//! Tabla editable: alta, edición y borrado lógico de filas de un modelo
//! configurado, con serialización por columna a JSON.

use serde_json::{json, Map, Value};
use uuid::Uuid;

use registro_domain::Registro;

use crate::config::TablaConfig;
use crate::errors::CoreError;
use crate::model::{FieldValue, ModelSchema, RecordInstance};
use crate::repo::RecordStore;

pub struct TablaElemento<'a> {
    registro: &'a Registro,
    config: &'a TablaConfig,
    schema: &'a ModelSchema,
}

impl<'a> TablaElemento<'a> {
    pub fn new(registro: &'a Registro, config: &'a TablaConfig, schema: &'a ModelSchema) -> Self {
        TablaElemento { registro, config, schema }
    }

    /// Filas no borradas del registro, serializadas por columna.
    pub fn filas(&self, records: &dyn RecordStore) -> Vec<Value> {
        records
            .list(self.registro.id, &self.config.modelo)
            .iter()
            .map(|r| self.serializar_fila(r))
            .collect()
    }

    pub fn crear(
        &self,
        datos: &Map<String, Value>,
        records: &mut dyn RecordStore,
    ) -> Result<Value, CoreError> {
        if !self.config.allow_create {
            return Err(CoreError::OperacionNoPermitida(format!(
                "la tabla '{}' no permite crear filas",
                self.config.modelo
            )));
        }
        let mut fila = RecordInstance::nueva(self.registro.id, &self.config.modelo);
        self.aplicar_columnas(&mut fila, datos);
        let guardada = records.save(fila)?;
        Ok(self.serializar_fila(&guardada))
    }

    pub fn actualizar(
        &self,
        id: Uuid,
        datos: &Map<String, Value>,
        records: &mut dyn RecordStore,
    ) -> Result<Value, CoreError> {
        if !self.config.allow_edit {
            return Err(CoreError::OperacionNoPermitida(format!(
                "la tabla '{}' no permite editar filas",
                self.config.modelo
            )));
        }
        let mut fila = records.get(id).ok_or(CoreError::InstanciaNoEncontrada(id))?;
        if fila.is_deleted {
            return Err(CoreError::InstanciaNoEncontrada(id));
        }
        self.aplicar_columnas(&mut fila, datos);
        let guardada = records.save(fila)?;
        Ok(self.serializar_fila(&guardada))
    }

    /// Borrado lógico: la fila deja de listarse pero se conserva.
    pub fn eliminar(&self, id: Uuid, records: &mut dyn RecordStore) -> Result<(), CoreError> {
        if !self.config.allow_delete {
            return Err(CoreError::OperacionNoPermitida(format!(
                "la tabla '{}' no permite eliminar filas",
                self.config.modelo
            )));
        }
        records.soft_delete(id)
    }

    fn aplicar_columnas(&self, fila: &mut RecordInstance, datos: &Map<String, Value>) {
        for columna in &self.config.columns {
            let Some(valor) = datos.get(&columna.key) else { continue };
            if valor.is_null() {
                continue;
            }
            let kind = self.schema.campo(&columna.key).map(|c| c.kind);
            if let Some(fv) = json_a_field_value(valor, kind) {
                fila.set(&columna.key, fv);
            }
        }
    }

    fn serializar_fila(&self, fila: &RecordInstance) -> Value {
        let mut out = Map::new();
        out.insert("id".to_string(), json!(fila.id));
        for columna in &self.config.columns {
            out.insert(columna.key.clone(), fila.get(&columna.key).to_json());
        }
        Value::Object(out)
    }
}

fn json_a_field_value(valor: &Value, kind: Option<crate::model::FieldKind>) -> Option<FieldValue> {
    use crate::model::FieldKind;
    match valor {
        Value::String(s) => match kind {
            Some(FieldKind::Decimal) => s.parse().ok().map(FieldValue::Decimal),
            Some(FieldKind::Entero) => s.parse().ok().map(FieldValue::Entero),
            _ => Some(FieldValue::Texto(s.clone())),
        },
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                match kind {
                    Some(FieldKind::Decimal) => Some(FieldValue::Decimal(i as f64)),
                    _ => Some(FieldValue::Entero(i)),
                }
            } else {
                n.as_f64().map(FieldValue::Decimal)
            }
        }
        Value::Bool(b) => Some(FieldValue::Booleano(*b)),
        _ => None,
    }
}
