//! Configuración del registro TX/TSS: inspección técnica de sitio en tres
//! pasos (sitio, acceso, empalme).
//!
//! El paso de sitio lleva el mapa multipunto que contrasta la coordenada
//! relevada en terreno contra la coordenada de mandato del sitio, con el
//! desfase entre ambas.

use indexmap::IndexMap;

use registro_core::{
    create_custom_config, create_multi_point_map_config, create_photos_config,
    create_registro_config, create_simple_config, CoreError, FuenteCoordenada, IconoConfig,
    RegistroConfig,
};

use crate::schemas::{schema_r_acceso, schema_r_empalme, schema_r_sitio};

const ZOOM_SITIO: u8 = 15;
const FOTOS_MIN_SITIO: usize = 4;
const FOTOS_MIN_EMPALME: usize = 2;

/// Fuentes del mapa del paso de sitio: la coordenada de inspección sale de
/// la instancia del paso, la de mandato de la coordenada base del sitio.
fn fuentes_mapa_sitio() -> Vec<FuenteCoordenada> {
    vec![
        FuenteCoordenada::actual("lat", "lon", "Inspección")
            .con_icono(IconoConfig::new("red", "large")),
        FuenteCoordenada::sitio("Mandato").con_icono(IconoConfig::new("blue", "normal")),
    ]
}

pub fn registro_config_txtss() -> Result<RegistroConfig, CoreError> {
    let mapa = create_multi_point_map_config(
        fuentes_mapa_sitio(),
        ZOOM_SITIO,
        "Desfase Mandato-Inspección",
        "components/mapa_modal.html",
    )?;
    let fotos_sitio = create_photos_config(FOTOS_MIN_SITIO, "components/fotos_sitio.html");

    let paso_sitio = create_custom_config(
        "sitio",
        schema_r_sitio()?,
        None,
        "Sitio",
        "Información del emplazamiento",
        vec![mapa, fotos_sitio],
    )?;

    let paso_acceso = create_simple_config(
        "acceso",
        schema_r_acceso()?,
        None,
        "Acceso",
        "Condiciones de acceso al sitio",
    )?;

    let fotos_empalme = create_photos_config(FOTOS_MIN_EMPALME, "components/fotos_empalme.html");
    let paso_empalme = create_custom_config(
        "empalme",
        schema_r_empalme()?,
        None,
        "Empalme",
        "Punto de empalme eléctrico",
        vec![fotos_empalme],
    )?;

    let mut pasos = IndexMap::new();
    pasos.insert("sitio".to_string(), paso_sitio);
    pasos.insert("acceso".to_string(), paso_acceso);
    pasos.insert("empalme".to_string(), paso_empalme);

    Ok(create_registro_config(
        "RegTxtss",
        pasos,
        "TX/TSS",
        "reg_txtss",
        "pages/main_txtss.html",
        "pages/steps_txtss.html",
    ))
}
