//! Carga de configuración de la aplicación desde variables de entorno.
//! Usa convención `REGISTROS_*` y defaults de `constants`.

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

use crate::constants::{DEFAULT_PHOTO_MIN, DEFAULT_ZOOM};

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_zoom: u8,
    pub photo_min: usize,
    pub maps_api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let default_zoom = env::var("REGISTROS_DEFAULT_ZOOM")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ZOOM);
        let photo_min = env::var("REGISTROS_PHOTO_MIN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PHOTO_MIN);
        let maps_api_key = env::var("REGISTROS_MAPS_API_KEY").ok().filter(|v| !v.is_empty());
        Self { default_zoom, photo_min, maps_api_key }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_zoom: DEFAULT_ZOOM,
            photo_min: DEFAULT_PHOTO_MIN,
            maps_api_key: None,
        }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
