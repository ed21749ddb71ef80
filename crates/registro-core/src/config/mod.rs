//! Configuración declarativa de tipos de registro.
//!
//! `RegistroConfig` describe un tipo completo; cada paso (`PasoConfig`)
//! lleva una `ElementoConfig` y sus sub-elementos. Las factorías de
//! `factory` evitan repetir el armado en cada aplicación de registro.
mod factory;
mod mapa;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::elemento::form::{FormSpec, Widget};
use crate::errors::CoreError;
use crate::model::ModelSchema;

pub use factory::{
    create_custom_config, create_multi_point_map_config, create_photos_config,
    create_registro_config, create_simple_config, create_table_config,
};
pub use mapa::{FuenteCoordenada, IconoConfig, MapaConfig, OrigenCoordenada};

/// Configuración de un sub-elemento de paso.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubElementoConfig {
    pub tipo: SubElementoTipo,
    pub template_name: Option<String>,
    pub css_classes: String,
}

impl SubElementoConfig {
    pub fn new(tipo: SubElementoTipo) -> Self {
        SubElementoConfig { tipo, template_name: None, css_classes: String::new() }
    }

    pub fn con_template(mut self, template_name: &str) -> Self {
        self.template_name = Some(template_name.to_string());
        self
    }

    pub fn con_css(mut self, css_classes: &str) -> Self {
        self.css_classes = css_classes.to_string();
        self
    }

    pub fn mapa(&self) -> Option<&MapaConfig> {
        match &self.tipo {
            SubElementoTipo::Mapa(cfg) => Some(cfg),
            _ => None,
        }
    }

    pub fn fotos(&self) -> Option<&FotosConfig> {
        match &self.tipo {
            SubElementoTipo::Fotos(cfg) => Some(cfg),
            _ => None,
        }
    }

    pub fn tabla(&self) -> Option<&TablaConfig> {
        match &self.tipo {
            SubElementoTipo::Tabla(cfg) => Some(cfg),
            _ => None,
        }
    }
}

/// Capacidad auxiliar de un paso, etiquetada por tipo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "tipo", rename_all = "snake_case")]
pub enum SubElementoTipo {
    Mapa(MapaConfig),
    Fotos(FotosConfig),
    Tabla(TablaConfig),
    Info { payload: serde_json::Value },
    Custom { payload: serde_json::Value },
}

/// Configuración de galería de fotos de un paso.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FotosConfig {
    pub min_count: usize,
    pub allowed_types: Vec<String>,
}

impl FotosConfig {
    pub fn new(min_count: usize) -> Self {
        FotosConfig {
            min_count,
            allowed_types: vec!["image/jpeg".to_string(), "image/png".to_string()],
        }
    }
}

/// Columna expuesta por una tabla editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnaTabla {
    pub key: String,
    pub titulo: String,
}

impl ColumnaTabla {
    pub fn new(key: &str, titulo: &str) -> Self {
        ColumnaTabla { key: key.to_string(), titulo: titulo.to_string() }
    }
}

/// Configuración de tabla editable (alta/edición/borrado lógico vía AJAX).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablaConfig {
    pub modelo: String,
    pub columns: Vec<ColumnaTabla>,
    pub allow_create: bool,
    pub allow_edit: bool,
    pub allow_delete: bool,
    pub page_length: usize,
}

impl TablaConfig {
    pub fn new(modelo: &str, columns: Vec<ColumnaTabla>) -> Self {
        TablaConfig {
            modelo: modelo.to_string(),
            columns,
            allow_create: true,
            allow_edit: true,
            allow_delete: true,
            page_length: 10,
        }
    }
}

/// Configuración del elemento principal de un paso: el modelo destino y su
/// formulario (explícito o sintetizado campo a campo).
#[derive(Debug, Clone)]
pub struct ElementoConfig {
    pub nombre: String,
    pub schema: ModelSchema,
    /// Formulario explícito; si falta, se sintetiza desde `fields`.
    pub form: Option<FormSpec>,
    /// Lista de campos a exponer cuando no hay formulario explícito.
    pub fields: Vec<String>,
    pub widgets: HashMap<String, Widget>,
    pub css_classes: HashMap<String, String>,
    pub sub_elementos: Vec<SubElementoConfig>,
    pub title: String,
    pub description: String,
    pub template_name: String,
    pub success_message: String,
    pub error_message: String,
}

impl ElementoConfig {
    /// Invariante: debe existir `form` o una lista de campos, nunca ninguno.
    pub fn new(
        nombre: &str,
        schema: ModelSchema,
        form: Option<FormSpec>,
        fields: Vec<String>,
    ) -> Result<Self, CoreError> {
        if form.is_none() && fields.is_empty() {
            return Err(CoreError::ConfigInvalida(format!(
                "el elemento '{nombre}' debe proporcionar 'fields' o un formulario"
            )));
        }
        Ok(ElementoConfig {
            nombre: nombre.to_string(),
            schema,
            form,
            fields,
            widgets: HashMap::new(),
            css_classes: HashMap::new(),
            sub_elementos: Vec::new(),
            title: String::new(),
            description: String::new(),
            template_name: "components/elemento_form.html".to_string(),
            success_message: "Datos guardados exitosamente.".to_string(),
            error_message: "Error al guardar los datos.".to_string(),
        })
    }

    pub fn con_titulo(mut self, title: &str, description: &str) -> Self {
        self.title = title.to_string();
        self.description = description.to_string();
        self
    }

    pub fn con_sub_elementos(mut self, sub_elementos: Vec<SubElementoConfig>) -> Self {
        self.sub_elementos = sub_elementos;
        self
    }

    pub fn con_widget(mut self, campo: &str, widget: Widget) -> Self {
        self.widgets.insert(campo.to_string(), widget);
        self
    }

    pub fn con_css(mut self, campo: &str, css: &str) -> Self {
        self.css_classes.insert(campo.to_string(), css.to_string());
        self
    }

    /// Campos que participan del formulario: los del formulario explícito
    /// si existe, si no la lista configurada.
    pub fn campos_formulario(&self) -> Vec<String> {
        match &self.form {
            Some(form) => form.nombres(),
            None => self.fields.clone(),
        }
    }

    /// Campos que cuentan para la completitud: solo los requeridos. Los
    /// opcionales pueden quedar vacíos sin impedir el estado completo.
    pub fn campos_completitud(&self) -> Vec<String> {
        match &self.form {
            Some(form) => form
                .campos
                .iter()
                .filter(|c| c.requerido)
                .map(|c| c.nombre.clone())
                .collect(),
            None => self
                .fields
                .iter()
                .filter(|n| self.schema.campo(n).map(|c| c.requerido).unwrap_or(false))
                .cloned()
                .collect(),
        }
    }

    pub fn sub_elemento_mapa(&self) -> Option<&MapaConfig> {
        self.sub_elementos.iter().find_map(|s| s.mapa())
    }

    pub fn sub_elemento_fotos(&self) -> Option<&FotosConfig> {
        self.sub_elementos.iter().find_map(|s| s.fotos())
    }

    pub fn sub_elemento_tabla(&self) -> Option<&TablaConfig> {
        self.sub_elementos.iter().find_map(|s| s.tabla())
    }
}

/// Configuración de un paso: un elemento más los textos del paso.
#[derive(Debug, Clone)]
pub struct PasoConfig {
    pub elemento: ElementoConfig,
    pub title: String,
    pub description: String,
    pub template_name: String,
    pub success_message: String,
    pub error_message: String,
}

impl PasoConfig {
    pub fn new(elemento: ElementoConfig, title: &str, description: &str) -> Self {
        PasoConfig {
            elemento,
            title: title.to_string(),
            description: description.to_string(),
            template_name: "components/paso_form.html".to_string(),
            success_message: "Paso completado exitosamente.".to_string(),
            error_message: "Error al completar el paso.".to_string(),
        }
    }
}

/// Configuración completa de un tipo de registro.
#[derive(Debug, Clone)]
pub struct RegistroConfig {
    pub registro_model: String,
    /// Pasos en orden de recorrido.
    pub pasos: IndexMap<String, PasoConfig>,
    pub title: String,
    pub app_namespace: String,
    pub list_template: String,
    pub steps_template: String,
    pub header_title: Option<String>,
    pub breadcrumbs: Vec<String>,
}

impl RegistroConfig {
    pub fn paso(&self, nombre: &str) -> Result<&PasoConfig, CoreError> {
        self.pasos
            .get(nombre)
            .ok_or_else(|| CoreError::PasoDesconocido(nombre.to_string()))
    }
}
