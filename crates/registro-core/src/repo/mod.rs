//! Almacenes del motor: instancias de paso, fotos y capturas de mapa.
//!
//! El motor se escribe contra estos traits; las implementaciones en memoria
//! sirven para tests y para la demo. El esquema de persistencia real queda
//! fuera del alcance del motor.

use std::collections::HashMap;
use uuid::Uuid;

use registro_domain::Foto;

use crate::errors::CoreError;
use crate::model::{ModelSchema, RecordInstance};

/// Almacén de instancias de paso, con borrado lógico.
pub trait RecordStore {
    /// Devuelve la única instancia (no borrada) del modelo para el registro,
    /// creándola vacía si no existe. Idempotente: llamadas repetidas para el
    /// mismo registro devuelven la misma identidad.
    fn get_or_create(
        &mut self,
        registro_id: Uuid,
        schema: &ModelSchema,
    ) -> Result<RecordInstance, CoreError>;

    /// Primera instancia no borrada del modelo para el registro.
    fn find(&self, registro_id: Uuid, modelo: &str) -> Option<RecordInstance>;

    /// Instancia por id, incluso borrada (para auditoría).
    fn get(&self, id: Uuid) -> Option<RecordInstance>;

    fn save(&mut self, instancia: RecordInstance) -> Result<RecordInstance, CoreError>;

    /// Borrado lógico: la instancia deja de aparecer en `find`/`list`.
    fn soft_delete(&mut self, id: Uuid) -> Result<(), CoreError>;

    /// Instancias no borradas del modelo para el registro, en orden de alta.
    fn list(&self, registro_id: Uuid, modelo: &str) -> Vec<RecordInstance>;
}

/// Almacén de fotos etiquetadas por (registro, etapa, app).
pub trait FotoStore {
    fn agregar(&mut self, foto: Foto);
    fn contar(&self, registro_id: Uuid, etapa: &str, app: &str) -> usize;
    fn listar(&self, registro_id: Uuid, etapa: &str, app: &str) -> Vec<Foto>;
}

/// Capturas de mapa guardadas, una por (registro, etapa). El valor es el
/// hash canónico de las coordenadas con que se tomó la captura.
pub trait SnapshotStore {
    fn guardar(&mut self, registro_id: Uuid, etapa: &str, hash_coordenadas: String);
    fn buscar(&self, registro_id: Uuid, etapa: &str) -> Option<String>;
}

#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    inner: Vec<RecordInstance>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn get_or_create(
        &mut self,
        registro_id: Uuid,
        schema: &ModelSchema,
    ) -> Result<RecordInstance, CoreError> {
        if let Some(existente) = self.find(registro_id, &schema.nombre) {
            return Ok(existente);
        }
        let nueva = RecordInstance::nueva(registro_id, &schema.nombre);
        self.inner.push(nueva.clone());
        Ok(nueva)
    }

    fn find(&self, registro_id: Uuid, modelo: &str) -> Option<RecordInstance> {
        self.inner
            .iter()
            .find(|r| r.registro_id == registro_id && r.modelo == modelo && !r.is_deleted)
            .cloned()
    }

    fn get(&self, id: Uuid) -> Option<RecordInstance> {
        self.inner.iter().find(|r| r.id == id).cloned()
    }

    fn save(&mut self, instancia: RecordInstance) -> Result<RecordInstance, CoreError> {
        match self.inner.iter_mut().find(|r| r.id == instancia.id) {
            Some(slot) => *slot = instancia.clone(),
            None => self.inner.push(instancia.clone()),
        }
        Ok(instancia)
    }

    fn soft_delete(&mut self, id: Uuid) -> Result<(), CoreError> {
        let slot = self
            .inner
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CoreError::InstanciaNoEncontrada(id))?;
        slot.is_deleted = true;
        Ok(())
    }

    fn list(&self, registro_id: Uuid, modelo: &str) -> Vec<RecordInstance> {
        self.inner
            .iter()
            .filter(|r| r.registro_id == registro_id && r.modelo == modelo && !r.is_deleted)
            .cloned()
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryFotoStore {
    inner: Vec<Foto>,
}

impl InMemoryFotoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FotoStore for InMemoryFotoStore {
    fn agregar(&mut self, foto: Foto) {
        self.inner.push(foto);
    }

    fn contar(&self, registro_id: Uuid, etapa: &str, app: &str) -> usize {
        self.listar(registro_id, etapa, app).len()
    }

    fn listar(&self, registro_id: Uuid, etapa: &str, app: &str) -> Vec<Foto> {
        self.inner
            .iter()
            .filter(|f| {
                f.registro_id == registro_id && f.etapa == etapa && f.app == app && !f.is_deleted
            })
            .cloned()
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    inner: HashMap<(Uuid, String), String>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn guardar(&mut self, registro_id: Uuid, etapa: &str, hash_coordenadas: String) {
        self.inner.insert((registro_id, etapa.to_string()), hash_coordenadas);
    }

    fn buscar(&self, registro_id: Uuid, etapa: &str) -> Option<String> {
        self.inner.get(&(registro_id, etapa.to_string())).cloned()
    }
}
