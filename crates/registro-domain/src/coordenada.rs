use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Radio medio terrestre en metros, usado por la fórmula de haversine.
const RADIO_TIERRA_M: f64 = 6_371_000.0;

/// Par latitud/longitud validado.
///
/// La latitud debe estar en [-90, 90] y la longitud en [-180, 180]; el
/// constructor rechaza valores fuera de rango o no finitos.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordenada {
    lat: f64,
    lon: f64,
}

impl Coordenada {
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::ValidationError(format!(
                "latitud fuera de rango: {lat}"
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::ValidationError(format!(
                "longitud fuera de rango: {lon}"
            )));
        }
        Ok(Coordenada { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Distancia de círculo máximo (haversine) hasta `otra`, en metros.
    pub fn distancia_hasta(&self, otra: &Coordenada) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = otra.lat.to_radians();
        let dlat = (otra.lat - self.lat).to_radians();
        let dlon = (otra.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        RADIO_TIERRA_M * c
    }
}

impl fmt::Display for Coordenada {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}
