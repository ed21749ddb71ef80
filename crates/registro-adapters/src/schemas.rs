//! Esquemas de los modelos de paso.
//!
//! Cada función devuelve el `ModelSchema` de un modelo concreto; la
//! nulabilidad de cada columna decide si el campo sintetizado es requerido.

use registro_core::{CoreError, FieldDescriptor, FieldKind, ModelSchema};

/// Datos del emplazamiento relevados en terreno.
pub fn schema_r_sitio() -> Result<ModelSchema, CoreError> {
    ModelSchema::new(
        "r_sitio",
        vec![
            FieldDescriptor::requerido("lat", "Latitud Inspección", FieldKind::Decimal),
            FieldDescriptor::requerido("lon", "Longitud Inspección", FieldKind::Decimal),
            FieldDescriptor::requerido("altura", "Altura Torre", FieldKind::Texto),
            FieldDescriptor::requerido("dimensiones", "Dimensiones Sitio", FieldKind::Texto),
            FieldDescriptor::requerido("deslindes", "Deslindes", FieldKind::Texto),
            FieldDescriptor::opcional("comentarios", "Comentarios", FieldKind::TextoLargo),
        ],
    )
}

/// Condiciones de acceso al sitio.
pub fn schema_r_acceso() -> Result<ModelSchema, CoreError> {
    ModelSchema::new(
        "r_acceso",
        vec![
            FieldDescriptor::requerido("tipo_suelo", "Tipo de Suelo", FieldKind::Texto),
            FieldDescriptor::requerido("distancia", "Distancia Acceso", FieldKind::Texto),
            FieldDescriptor::opcional("comentarios", "Comentarios", FieldKind::TextoLargo),
        ],
    )
}

/// Punto de empalme eléctrico.
pub fn schema_r_empalme() -> Result<ModelSchema, CoreError> {
    ModelSchema::new(
        "r_empalme",
        vec![
            FieldDescriptor::requerido("proveedor", "Proveedor", FieldKind::Texto),
            FieldDescriptor::requerido("capacidad", "Capacidad", FieldKind::Texto),
            FieldDescriptor::opcional("comentarios", "Comentarios", FieldKind::TextoLargo),
        ],
    )
}

/// Cabecera del inventario de antenas. El detalle vive en `r_antena`,
/// una fila por antena; el modelo de paso y el de la tabla deben ser
/// distintos para que la instancia del paso no aparezca como fila.
pub fn schema_r_inventario() -> Result<ModelSchema, CoreError> {
    ModelSchema::new(
        "r_inventario",
        vec![
            FieldDescriptor::requerido("responsable", "Responsable", FieldKind::Texto),
            FieldDescriptor::opcional("comentarios", "Comentarios", FieldKind::TextoLargo),
        ],
    )
}

/// Antena inventariada en mantenimiento, una fila por antena.
pub fn schema_r_antena() -> Result<ModelSchema, CoreError> {
    ModelSchema::new(
        "r_antena",
        vec![
            FieldDescriptor::requerido("marca", "Marca", FieldKind::Texto),
            FieldDescriptor::requerido("modelo", "Modelo", FieldKind::Texto),
            FieldDescriptor::requerido("azimut", "Azimut", FieldKind::Entero),
            FieldDescriptor::opcional("altura", "Altura Montaje", FieldKind::Decimal),
        ],
    )
}

/// Estado general relevado durante el mantenimiento.
pub fn schema_r_estado() -> Result<ModelSchema, CoreError> {
    ModelSchema::new(
        "r_estado",
        vec![
            FieldDescriptor::requerido("estado_torre", "Estado Torre", FieldKind::Texto),
            FieldDescriptor::requerido("estado_energia", "Estado Energía", FieldKind::Texto),
            FieldDescriptor::requerido("requiere_visita", "Requiere Visita", FieldKind::Booleano),
            FieldDescriptor::opcional("observaciones", "Observaciones", FieldKind::TextoLargo),
        ],
    )
}
