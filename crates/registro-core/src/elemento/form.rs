//! Síntesis y validación de formularios.
//!
//! Cuando la configuración no trae un formulario explícito, se sintetiza uno
//! campo a campo eligiendo widget según el tipo de columna y marcando
//! requerido según la nulabilidad.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::ElementoConfig;
use crate::errors::CoreError;
use crate::model::{FieldKind, FieldValue, RecordInstance};

const CSS_INPUT: &str = "input input-success sombra";
const CSS_TEXTAREA: &str = "textarea textarea-warning sombra rows-2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    TextInput,
    Textarea,
    NumberInput,
    CheckboxInput,
    DateInput,
}

impl Widget {
    /// Widget por defecto para un tipo de columna.
    pub fn por_kind(kind: FieldKind) -> Widget {
        match kind {
            FieldKind::TextoLargo => Widget::Textarea,
            FieldKind::Entero | FieldKind::Decimal => Widget::NumberInput,
            FieldKind::Booleano => Widget::CheckboxInput,
            FieldKind::Fecha => Widget::DateInput,
            FieldKind::Texto => Widget::TextInput,
        }
    }

    fn css_por_defecto(&self) -> &'static str {
        match self {
            Widget::Textarea => CSS_TEXTAREA,
            _ => CSS_INPUT,
        }
    }
}

/// Un campo del formulario renderizable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampoForm {
    pub nombre: String,
    pub etiqueta: String,
    pub kind: FieldKind,
    pub widget: Widget,
    pub css_class: String,
    pub requerido: bool,
    pub valor_inicial: FieldValue,
}

/// Especificación de formulario: explícita o sintetizada.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormSpec {
    pub campos: Vec<CampoForm>,
}

impl FormSpec {
    pub fn new(campos: Vec<CampoForm>) -> Self {
        FormSpec { campos }
    }

    /// Formulario explícito construido directamente desde descriptores.
    pub fn explicito(campos: Vec<(&str, &str, FieldKind, bool)>) -> Self {
        let campos = campos
            .into_iter()
            .map(|(nombre, etiqueta, kind, requerido)| {
                let widget = Widget::por_kind(kind);
                CampoForm {
                    nombre: nombre.to_string(),
                    etiqueta: etiqueta.to_string(),
                    kind,
                    widget,
                    css_class: widget.css_por_defecto().to_string(),
                    requerido,
                    valor_inicial: FieldValue::Nulo,
                }
            })
            .collect();
        FormSpec { campos }
    }

    /// Sintetiza el formulario de un elemento desde su esquema: widget por
    /// tipo de columna, requerido por nulabilidad, overrides de la config.
    pub fn sintetizar(config: &ElementoConfig) -> Self {
        let mut campos = Vec::with_capacity(config.fields.len());
        for nombre in &config.fields {
            let Some(descriptor) = config.schema.campo(nombre) else {
                // Campo configurado que el esquema no declara: se omite sin
                // romper el render (tipos parcialmente migrados).
                log::debug!(
                    "campo '{nombre}' no existe en el esquema {}; omitido del formulario",
                    config.schema.nombre
                );
                continue;
            };
            let widget = config
                .widgets
                .get(nombre)
                .copied()
                .unwrap_or_else(|| Widget::por_kind(descriptor.kind));
            let css_class = config
                .css_classes
                .get(nombre)
                .cloned()
                .unwrap_or_else(|| widget.css_por_defecto().to_string());
            campos.push(CampoForm {
                nombre: descriptor.nombre.clone(),
                etiqueta: descriptor.etiqueta.clone(),
                kind: descriptor.kind,
                widget,
                css_class,
                requerido: descriptor.requerido,
                valor_inicial: FieldValue::Nulo,
            });
        }
        FormSpec { campos }
    }

    /// Carga valores iniciales desde una instancia. Campos ausentes quedan
    /// en `Nulo`, nunca fallan.
    pub fn con_iniciales(mut self, instancia: &RecordInstance) -> Self {
        for campo in &mut self.campos {
            campo.valor_inicial = instancia.get(&campo.nombre);
        }
        self
    }

    pub fn nombres(&self) -> Vec<String> {
        self.campos.iter().map(|c| c.nombre.clone()).collect()
    }

    /// Valida y coerce los datos recibidos: requeridos presentes y tipos
    /// compatibles con la columna destino.
    pub fn validar(
        &self,
        datos: &IndexMap<String, FieldValue>,
    ) -> Result<IndexMap<String, FieldValue>, CoreError> {
        let mut limpios = IndexMap::new();
        let mut errores: Vec<String> = Vec::new();

        for campo in &self.campos {
            let valor = datos.get(&campo.nombre).cloned().unwrap_or(FieldValue::Nulo);
            if valor.is_empty() {
                if campo.requerido {
                    errores.push(format!("'{}' es requerido", campo.etiqueta));
                }
                continue;
            }
            match coercionar(&valor, campo.kind) {
                Some(v) => {
                    limpios.insert(campo.nombre.clone(), v);
                }
                None => errores.push(format!(
                    "'{}' tiene un valor incompatible con la columna",
                    campo.etiqueta
                )),
            }
        }

        if errores.is_empty() {
            Ok(limpios)
        } else {
            Err(CoreError::ValidacionFormulario(errores.join("; ")))
        }
    }
}

fn coercionar(valor: &FieldValue, kind: FieldKind) -> Option<FieldValue> {
    match kind {
        FieldKind::Texto | FieldKind::TextoLargo => match valor {
            FieldValue::Texto(_) => Some(valor.clone()),
            FieldValue::Entero(v) => Some(FieldValue::Texto(v.to_string())),
            FieldValue::Decimal(v) => Some(FieldValue::Texto(v.to_string())),
            _ => None,
        },
        FieldKind::Entero => match valor {
            FieldValue::Entero(_) => Some(valor.clone()),
            FieldValue::Texto(s) => s.trim().parse().ok().map(FieldValue::Entero),
            _ => None,
        },
        FieldKind::Decimal => valor.as_f64().map(FieldValue::Decimal),
        FieldKind::Booleano => match valor {
            FieldValue::Booleano(_) => Some(valor.clone()),
            _ => None,
        },
        FieldKind::Fecha => match valor {
            FieldValue::Fecha(_) => Some(valor.clone()),
            FieldValue::Texto(s) => s
                .parse::<chrono::DateTime<chrono::Utc>>()
                .ok()
                .map(FieldValue::Fecha),
            _ => None,
        },
    }
}
