use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Coordenada;

/// Sitio de torre: datos maestros contra los que se inspecciona.
///
/// La coordenada base (`coordenada_base`) es la posición de mandato; puede
/// faltar en sitios recién cargados y los mapas la omiten en ese caso.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: Uuid,
    pub pti_cell_id: Option<String>,
    pub operator_id: Option<String>,
    pub name: String,
    pub coordenada_base: Option<Coordenada>,
    pub alt: Option<String>,
    pub region: Option<String>,
    pub comuna: Option<String>,
    pub is_deleted: bool,
}

impl Site {
    pub fn nuevo(name: impl Into<String>) -> Self {
        Site {
            id: Uuid::new_v4(),
            pti_cell_id: None,
            operator_id: None,
            name: name.into(),
            coordenada_base: None,
            alt: None,
            region: None,
            comuna: None,
            is_deleted: false,
        }
    }

    pub fn con_coordenada_base(mut self, coordenada: Coordenada) -> Self {
        self.coordenada_base = Some(coordenada);
        self
    }
}
