//! Errores del motor de pasos.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CoreError {
    #[error("configuración inválida: {0}")]
    ConfigInvalida(String),
    #[error("paso desconocido: {0}")]
    PasoDesconocido(String),
    #[error("instancia no encontrada: {0}")]
    InstanciaNoEncontrada(Uuid),
    #[error("operación no permitida: {0}")]
    OperacionNoPermitida(String),
    #[error("validación de formulario fallida: {0}")]
    ValidacionFormulario(String),
}
