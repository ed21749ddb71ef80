use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ZOOM;
use crate::errors::CoreError;

/// Apariencia del marcador de una fuente de coordenadas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconoConfig {
    pub color: String,
    pub size: String,
    pub tipo: String,
}

impl Default for IconoConfig {
    fn default() -> Self {
        IconoConfig {
            color: "#F59E0B".to_string(),
            size: "mid".to_string(),
            tipo: "marker".to_string(),
        }
    }
}

impl IconoConfig {
    pub fn new(color: &str, size: &str) -> Self {
        IconoConfig { color: color.to_string(), size: size.to_string(), tipo: "marker".to_string() }
    }
}

/// De dónde sale una coordenada del mapa.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "origen", rename_all = "snake_case")]
pub enum OrigenCoordenada {
    /// La instancia del paso actual.
    Actual,
    /// La coordenada base del sitio enlazado al registro.
    Sitio,
    /// Otro modelo de paso del mismo registro, ubicado por nombre de modelo.
    Relacionado { modelo: String },
}

/// Una fuente de coordenadas del mapa: origen + nombres de campos + marcador.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuenteCoordenada {
    pub origen: OrigenCoordenada,
    pub lat_field: String,
    pub lon_field: String,
    pub etiqueta: String,
    pub icono: IconoConfig,
}

impl FuenteCoordenada {
    pub fn actual(lat_field: &str, lon_field: &str, etiqueta: &str) -> Self {
        FuenteCoordenada {
            origen: OrigenCoordenada::Actual,
            lat_field: lat_field.to_string(),
            lon_field: lon_field.to_string(),
            etiqueta: etiqueta.to_string(),
            icono: IconoConfig::default(),
        }
    }

    /// Fuente sobre la coordenada base del sitio. Los nombres de campo se
    /// conservan solo como metadato de presentación.
    pub fn sitio(etiqueta: &str) -> Self {
        FuenteCoordenada {
            origen: OrigenCoordenada::Sitio,
            lat_field: "lat_base".to_string(),
            lon_field: "lon_base".to_string(),
            etiqueta: etiqueta.to_string(),
            icono: IconoConfig::default(),
        }
    }

    pub fn relacionada(modelo: &str, lat_field: &str, lon_field: &str, etiqueta: &str) -> Self {
        FuenteCoordenada {
            origen: OrigenCoordenada::Relacionado { modelo: modelo.to_string() },
            lat_field: lat_field.to_string(),
            lon_field: lon_field.to_string(),
            etiqueta: etiqueta.to_string(),
            icono: IconoConfig::default(),
        }
    }

    pub fn con_icono(mut self, icono: IconoConfig) -> Self {
        self.icono = icono;
        self
    }
}

/// Configuración de un mapa de paso con 1 a 3 fuentes de coordenadas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapaConfig {
    pub fuentes: Vec<FuenteCoordenada>,
    pub zoom: u8,
    pub calcular_distancia: bool,
    pub descripcion_distancia: Option<String>,
}

impl MapaConfig {
    /// Invariantes: entre 1 y 3 fuentes; `calcular_distancia` exige al menos
    /// dos (la tercera fuente siempre es opcional).
    pub fn new(fuentes: Vec<FuenteCoordenada>) -> Result<Self, CoreError> {
        if fuentes.is_empty() || fuentes.len() > 3 {
            return Err(CoreError::ConfigInvalida(format!(
                "un mapa requiere entre 1 y 3 fuentes de coordenadas, no {}",
                fuentes.len()
            )));
        }
        Ok(MapaConfig {
            fuentes,
            zoom: DEFAULT_ZOOM,
            calcular_distancia: false,
            descripcion_distancia: None,
        })
    }

    pub fn con_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn con_distancia(mut self, descripcion: &str) -> Result<Self, CoreError> {
        if self.fuentes.len() < 2 {
            return Err(CoreError::ConfigInvalida(
                "el cálculo de distancia requiere al menos dos fuentes de coordenadas".to_string(),
            ));
        }
        self.calcular_distancia = true;
        self.descripcion_distancia = Some(descripcion.to_string());
        Ok(self)
    }

    /// Cantidad de coordenadas que el mapa considera completas. La tercera
    /// fuente nunca cuenta como requerida.
    pub fn coordenadas_requeridas(&self) -> usize {
        self.fuentes.len().min(2)
    }

    pub fn es_multipunto(&self) -> bool {
        self.fuentes.len() > 1
    }
}
