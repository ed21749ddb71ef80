//! Runtime de elementos: liga la configuración de un paso a la instancia
//! persistida, el formulario y sus sub-elementos.
pub mod completeness;
pub mod form;
pub mod fotos;
pub mod mapa;
pub mod tabla;

use indexmap::IndexMap;

use registro_domain::Registro;

use crate::config::ElementoConfig;
use crate::errors::CoreError;
use crate::model::{FieldValue, RecordInstance};
use crate::repo::RecordStore;

pub use completeness::{evaluar as evaluar_completeness, Completeness, EstadoColor};
pub use form::{CampoForm, FormSpec, Widget};
pub use fotos::{resolver_fotos, FotosContext};
pub use mapa::{hash_coordenadas, resolver_mapa, CoordenadaResuelta, MapaContext, MapaStatus};
pub use tabla::TablaElemento;

/// Elemento en tiempo de ejecución: configuración + registro padre +
/// instancia persistida (si existe).
pub struct Elemento<'a> {
    pub registro: &'a Registro,
    pub config: &'a ElementoConfig,
    pub instancia: Option<RecordInstance>,
}

impl<'a> Elemento<'a> {
    /// Resuelve (o crea) la instancia del paso y arma el elemento.
    pub fn cargar(
        registro: &'a Registro,
        config: &'a ElementoConfig,
        records: &mut dyn RecordStore,
    ) -> Result<Self, CoreError> {
        let instancia = records.get_or_create(registro.id, &config.schema)?;
        Ok(Elemento { registro, config, instancia: Some(instancia) })
    }

    /// Formulario del paso: el explícito si está configurado, si no uno
    /// sintetizado desde el esquema; con iniciales de la instancia.
    pub fn form(&self) -> FormSpec {
        let spec = match &self.config.form {
            Some(form) => form.clone(),
            None => FormSpec::sintetizar(self.config),
        };
        match &self.instancia {
            Some(instancia) => spec.con_iniciales(instancia),
            None => spec,
        }
    }

    pub fn completeness(&self) -> Completeness {
        completeness::evaluar(self.config, self.instancia.as_ref())
    }

    /// Valida los datos contra el formulario y persiste la instancia.
    pub fn guardar(
        &mut self,
        datos: &IndexMap<String, FieldValue>,
        records: &mut dyn RecordStore,
    ) -> Result<RecordInstance, CoreError> {
        let form = self.form();
        let limpios = form.validar(datos)?;

        let mut instancia = match self.instancia.take() {
            Some(i) => i,
            None => records.get_or_create(self.registro.id, &self.config.schema)?,
        };
        for (nombre, valor) in limpios {
            instancia.set(&nombre, valor);
        }
        let guardada = records.save(instancia)?;
        self.instancia = Some(guardada.clone());
        Ok(guardada)
    }
}
