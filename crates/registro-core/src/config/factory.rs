//! Factorías de configuración: el armado repetitivo de pasos queda aquí para
//! que cada aplicación de registro declare solo lo suyo.

use indexmap::IndexMap;

use crate::elemento::form::FormSpec;
use crate::errors::CoreError;
use crate::model::ModelSchema;

use super::{
    ElementoConfig, FotosConfig, FuenteCoordenada, MapaConfig, PasoConfig, RegistroConfig,
    SubElementoConfig, SubElementoTipo, TablaConfig,
};

/// Paso simple: solo formulario, sin sub-elementos.
pub fn create_simple_config(
    nombre: &str,
    schema: ModelSchema,
    form: Option<FormSpec>,
    title: &str,
    description: &str,
) -> Result<PasoConfig, CoreError> {
    let fields = if form.is_some() { Vec::new() } else { schema.nombres_campos() };
    let elemento = ElementoConfig::new(nombre, schema, form, fields)?
        .con_titulo(title, description);
    Ok(PasoConfig::new(elemento, title, description))
}

/// Paso con sub-elementos arbitrarios (mapas, fotos, tablas, info).
pub fn create_custom_config(
    nombre: &str,
    schema: ModelSchema,
    form: Option<FormSpec>,
    title: &str,
    description: &str,
    sub_elementos: Vec<SubElementoConfig>,
) -> Result<PasoConfig, CoreError> {
    let fields = if form.is_some() { Vec::new() } else { schema.nombres_campos() };
    let elemento = ElementoConfig::new(nombre, schema, form, fields)?
        .con_titulo(title, description)
        .con_sub_elementos(sub_elementos);
    Ok(PasoConfig::new(elemento, title, description))
}

/// Sub-elemento de galería de fotos con mínimo requerido.
pub fn create_photos_config(photo_min: usize, photos_template: &str) -> SubElementoConfig {
    SubElementoConfig::new(SubElementoTipo::Fotos(FotosConfig::new(photo_min)))
        .con_template(photos_template)
        .con_css("fotos-container")
}

/// Sub-elemento de mapa multi-punto con cálculo de desfase entre las dos
/// primeras fuentes. La tercera fuente, si viene, es siempre opcional.
pub fn create_multi_point_map_config(
    fuentes: Vec<FuenteCoordenada>,
    zoom: u8,
    descripcion_distancia: &str,
    template_name: &str,
) -> Result<SubElementoConfig, CoreError> {
    let mapa = MapaConfig::new(fuentes)?
        .con_zoom(zoom)
        .con_distancia(descripcion_distancia)?;
    Ok(SubElementoConfig::new(SubElementoTipo::Mapa(mapa))
        .con_template(template_name)
        .con_css("mapa-container"))
}

/// Sub-elemento de tabla editable.
pub fn create_table_config(tabla: TablaConfig, template_name: &str) -> SubElementoConfig {
    SubElementoConfig::new(SubElementoTipo::Tabla(tabla)).con_template(template_name)
}

/// Configuración completa de un tipo de registro, con breadcrumbs estándar.
pub fn create_registro_config(
    registro_model: &str,
    pasos: IndexMap<String, PasoConfig>,
    title: &str,
    app_namespace: &str,
    list_template: &str,
    steps_template: &str,
) -> RegistroConfig {
    RegistroConfig {
        registro_model: registro_model.to_string(),
        pasos,
        title: title.to_string(),
        app_namespace: app_namespace.to_string(),
        list_template: list_template.to_string(),
        steps_template: steps_template.to_string(),
        header_title: None,
        breadcrumbs: vec!["Inicio".to_string(), title.to_string()],
    }
}
