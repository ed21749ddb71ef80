//! Generación del contexto de pasos: por cada paso de la configuración arma
//! formulario, fotos, mapa y completitud listos para render.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use registro_domain::{Registro, Site};

use crate::config::RegistroConfig;
use crate::elemento::{
    evaluar_completeness, resolver_fotos, resolver_mapa, Completeness, Elemento, EstadoColor,
    FotosContext, MapaContext,
};
use crate::errors::CoreError;
use crate::repo::{FotoStore, RecordStore, SnapshotStore};

/// Botón de formulario de un paso.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormContext {
    pub url: String,
    pub color: EstadoColor,
}

/// Contexto de un paso, en la forma que esperan los templates de pasos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepContext {
    pub title: String,
    pub step_name: String,
    pub registro_id: Uuid,
    pub is_table: bool,
    pub form: Option<FormContext>,
    pub photos: FotosContext,
    pub map: MapaContext,
    pub completeness: Completeness,
}

/// Arma el contexto de todos los pasos de un registro, en orden.
pub fn generar_contexto_pasos(
    config: &RegistroConfig,
    registro: &Registro,
    sitio: Option<&Site>,
    records: &mut dyn RecordStore,
    fotos: &dyn FotoStore,
    snapshots: &dyn SnapshotStore,
) -> Result<Vec<(String, StepContext)>, CoreError> {
    let mut pasos = Vec::with_capacity(config.pasos.len());

    for (step_name, paso_config) in &config.pasos {
        let elemento_config = &paso_config.elemento;
        let elemento = Elemento::cargar(registro, elemento_config, records)?;
        let instancia = elemento.instancia.clone();

        let completeness = evaluar_completeness(elemento_config, instancia.as_ref());
        let form_color = color_formulario(&completeness);

        let photos = match elemento_config.sub_elemento_fotos() {
            Some(cfg) => resolver_fotos(cfg, registro.id, step_name, &config.app_namespace, fotos),
            None => FotosContext::deshabilitado(),
        };

        let map = match elemento_config.sub_elemento_mapa() {
            Some(cfg) => resolver_mapa(
                cfg,
                step_name,
                registro,
                sitio,
                instancia.as_ref(),
                &*records,
                snapshots,
            ),
            None => MapaContext::deshabilitado(step_name),
        };

        let is_table = elemento_config.sub_elemento_tabla().is_some();

        let step = StepContext {
            title: paso_config.title.clone(),
            step_name: step_name.clone(),
            registro_id: registro.id,
            is_table,
            form: Some(FormContext {
                url: format!("/{}/{}/{}/", config.app_namespace, registro.id, step_name),
                color: form_color,
            }),
            photos,
            map,
            completeness,
        };
        pasos.push((step_name.clone(), step));
    }

    Ok(pasos)
}

/// Color del botón de formulario: error sin campos llenos, warning parcial,
/// success completo.
fn color_formulario(completeness: &Completeness) -> EstadoColor {
    if completeness.total_fields == 0 || completeness.filled_fields == 0 {
        EstadoColor::Error
    } else if completeness.filled_fields < completeness.total_fields {
        EstadoColor::Warning
    } else {
        EstadoColor::Success
    }
}
