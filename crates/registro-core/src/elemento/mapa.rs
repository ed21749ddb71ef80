//! Resolución de mapas de paso: junta las coordenadas de hasta tres fuentes
//! relacionales, calcula el desfase entre las dos primeras y determina el
//! estado del mapa contra la captura guardada.

use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use registro_domain::{Coordenada, Registro, Site};

use crate::config::{MapaConfig, OrigenCoordenada};
use crate::hashing::hash_value;
use crate::model::RecordInstance;
use crate::repo::{RecordStore, SnapshotStore};

/// Estado del mapa de un paso.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapaStatus {
    /// Mapa multipunto al que le faltan coordenadas.
    Disabled,
    /// Mapa de un punto sin coordenada aún.
    Warning,
    /// Coordenadas completas pero sin captura vigente.
    Error,
    /// Coordenadas completas y captura al día.
    Success,
}

/// Una coordenada resuelta con su marcador.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordenadaResuelta {
    pub lat: f64,
    pub lon: f64,
    pub label: String,
    pub color: String,
    pub size: String,
}

/// Contexto de mapa listo para el template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapaContext {
    pub enabled: bool,
    pub status: MapaStatus,
    pub coordinates: Vec<CoordenadaResuelta>,
    pub etapa: String,
    pub zoom: u8,
    /// Desfase en metros enteros entre las dos primeras coordenadas;
    /// ausente si el cálculo no aplica o falta alguna coordenada.
    pub distancia: Option<i64>,
    pub descripcion_distancia: Option<String>,
}

impl MapaContext {
    /// Contexto para un paso sin mapa configurado.
    pub fn deshabilitado(etapa: &str) -> Self {
        MapaContext {
            enabled: false,
            status: MapaStatus::Warning,
            coordinates: Vec::new(),
            etapa: etapa.to_string(),
            zoom: crate::constants::DEFAULT_ZOOM,
            distancia: None,
            descripcion_distancia: None,
        }
    }
}

/// Hash canónico de una lista de coordenadas; clave de vigencia de capturas.
pub fn hash_coordenadas(coordinates: &[CoordenadaResuelta]) -> String {
    let puntos: Vec<serde_json::Value> = coordinates
        .iter()
        .map(|c| json!({ "lat": c.lat, "lon": c.lon, "label": c.label }))
        .collect();
    hash_value(&json!(puntos))
}

/// Resuelve el mapa de un paso.
///
/// Cada fuente se resuelve de forma independiente; una fuente que no
/// resuelve (instancia relacionada ausente, campos vacíos) se omite sin
/// error. La distancia solo se calcula con al menos dos coordenadas.
pub fn resolver_mapa(
    cfg: &MapaConfig,
    etapa: &str,
    registro: &Registro,
    sitio: Option<&Site>,
    instancia: Option<&RecordInstance>,
    records: &dyn RecordStore,
    snapshots: &dyn SnapshotStore,
) -> MapaContext {
    let mut coordinates = Vec::new();
    for fuente in &cfg.fuentes {
        let resuelta = match &fuente.origen {
            OrigenCoordenada::Actual => instancia.and_then(|i| extraer_coordenada(i, fuente)),
            OrigenCoordenada::Sitio => sitio.and_then(|s| coordenada_de_sitio(s, fuente)),
            OrigenCoordenada::Relacionado { modelo } => {
                match records.find(registro.id, modelo) {
                    Some(rel) => extraer_coordenada(&rel, fuente),
                    None => {
                        log::debug!(
                            "mapa '{etapa}': instancia relacionada '{modelo}' ausente; fuente omitida"
                        );
                        None
                    }
                }
            }
        };
        if let Some(c) = resuelta {
            coordinates.push(c);
        }
    }

    let distancia = if cfg.calcular_distancia && coordinates.len() >= 2 {
        distancia_entre(&coordinates[0], &coordinates[1])
    } else {
        None
    };

    let status = determinar_status(cfg, &coordinates, registro.id, etapa, snapshots);

    // Los mapas multipunto quedan siempre habilitados; el estado comunica
    // la falta de coordenadas.
    let enabled = cfg.es_multipunto() || coordinates.len() >= cfg.coordenadas_requeridas();

    MapaContext {
        enabled,
        status,
        coordinates,
        etapa: etapa.to_string(),
        zoom: cfg.zoom,
        distancia,
        descripcion_distancia: cfg.descripcion_distancia.clone(),
    }
}

fn extraer_coordenada(
    instancia: &RecordInstance,
    fuente: &crate::config::FuenteCoordenada,
) -> Option<CoordenadaResuelta> {
    let lat = instancia.get(&fuente.lat_field).as_f64()?;
    let lon = instancia.get(&fuente.lon_field).as_f64()?;
    // Coordenadas fuera de rango se omiten igual que las ausentes.
    let coordenada = Coordenada::new(lat, lon).ok()?;
    Some(resuelta(coordenada, fuente))
}

fn coordenada_de_sitio(
    sitio: &Site,
    fuente: &crate::config::FuenteCoordenada,
) -> Option<CoordenadaResuelta> {
    sitio.coordenada_base.map(|c| resuelta(c, fuente))
}

fn resuelta(c: Coordenada, fuente: &crate::config::FuenteCoordenada) -> CoordenadaResuelta {
    CoordenadaResuelta {
        lat: c.lat(),
        lon: c.lon(),
        label: fuente.etiqueta.clone(),
        color: fuente.icono.color.clone(),
        size: fuente.icono.size.clone(),
    }
}

fn distancia_entre(a: &CoordenadaResuelta, b: &CoordenadaResuelta) -> Option<i64> {
    let ca = Coordenada::new(a.lat, a.lon).ok()?;
    let cb = Coordenada::new(b.lat, b.lon).ok()?;
    Some(ca.distancia_hasta(&cb).round() as i64)
}

fn determinar_status(
    cfg: &MapaConfig,
    coordinates: &[CoordenadaResuelta],
    registro_id: Uuid,
    etapa: &str,
    snapshots: &dyn SnapshotStore,
) -> MapaStatus {
    let completo = coordinates.len() >= cfg.coordenadas_requeridas();
    if !completo {
        return if cfg.es_multipunto() { MapaStatus::Disabled } else { MapaStatus::Warning };
    }

    // Con coordenadas completas, la captura manda: debe existir y haberse
    // tomado con exactamente estas coordenadas.
    let vigente = snapshots
        .buscar(registro_id, etapa)
        .map(|h| h == hash_coordenadas(coordinates))
        .unwrap_or(false);
    if vigente {
        MapaStatus::Success
    } else {
        MapaStatus::Error
    }
}
