//! Demo del motor de registros: recorre un registro TX/TSS completo con los
//! almacenes en memoria e imprime el contexto de pasos y el resumen del
//! dashboard en cada etapa.

use indexmap::IndexMap;
use serde_json::to_string_pretty;

use registro_adapters::{registro_config_mantenimiento, registro_config_txtss};
use registro_core::elemento::hash_coordenadas;
use registro_core::{
    estado_registro, generar_contexto_pasos, resumen, AppConfig, Elemento, FieldValue,
    FotoStore, InMemoryFotoStore, InMemoryRecordStore, InMemorySnapshotStore, SnapshotStore,
};
use registro_domain::{Coordenada, Foto, Registro, Site};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app_config = AppConfig::from_env();
    println!(
        "Config: zoom={} fotos_min={} maps_api_key={}",
        app_config.default_zoom,
        app_config.photo_min,
        if app_config.maps_api_key.is_some() { "sí" } else { "no" }
    );

    let config = registro_config_txtss()?;
    println!("Tipo de registro: {} ({} pasos)", config.title, config.pasos.len());

    let sitio = Site::nuevo("CL-RM-0042")
        .con_coordenada_base(Coordenada::new(-33.4489, -70.6693)?);
    let registro = Registro::activar(sitio.id, "tecnico1", "TX/TSS CL-RM-0042");

    let mut records = InMemoryRecordStore::new();
    let mut fotos = InMemoryFotoStore::new();
    let mut snapshots = InMemorySnapshotStore::new();

    // Contexto inicial: todos los pasos vacíos.
    let pasos = generar_contexto_pasos(
        &config, &registro, Some(&sitio), &mut records, &fotos, &snapshots,
    )?;
    println!("\n--- Estado inicial ---");
    for (nombre, paso) in &pasos {
        println!(
            "paso={nombre} completitud={:?} fotos={:?} mapa={:?}",
            paso.completeness.color, paso.photos.color, paso.map.status
        );
    }

    // El técnico completa el paso de sitio a través del elemento.
    let paso_sitio = config.paso("sitio")?;
    let mut elemento = Elemento::cargar(&registro, &paso_sitio.elemento, &mut records)?;
    let mut datos = IndexMap::new();
    datos.insert("lat".to_string(), FieldValue::Decimal(-33.4492));
    datos.insert("lon".to_string(), FieldValue::Decimal(-70.6690));
    datos.insert("altura".to_string(), FieldValue::Texto("45m".into()));
    datos.insert("dimensiones".to_string(), FieldValue::Texto("10x10".into()));
    datos.insert("deslindes".to_string(), FieldValue::Texto("cierre perimetral".into()));
    elemento.guardar(&datos, &mut records)?;

    for n in 0..4 {
        fotos.agregar(Foto::nueva(registro.id, "sitio", "reg_txtss", format!("sitio_{n}.jpg")));
    }

    let pasos = generar_contexto_pasos(
        &config, &registro, Some(&sitio), &mut records, &fotos, &snapshots,
    )?;
    println!("\n--- Tras completar el paso de sitio ---");
    let (_, paso) = &pasos[0];
    println!("{}", to_string_pretty(paso)?);
    if let Some(desfase) = paso.map.distancia {
        println!("Desfase Mandato-Inspección: {desfase} m");
    }

    // Captura del mapa con las coordenadas actuales.
    snapshots.guardar(registro.id, "sitio", hash_coordenadas(&paso.map.coordinates));
    let pasos = generar_contexto_pasos(
        &config, &registro, Some(&sitio), &mut records, &fotos, &snapshots,
    )?;
    println!("\nMapa tras la captura: {:?}", pasos[0].1.map.status);

    // Dashboard sobre el conjunto de registros.
    let registros = vec![registro.clone()];
    println!(
        "\nEstado del registro: {:?}",
        estado_registro(&config, &registro, &records)
    );
    let dashboard = resumen(&config, &registros, &records)?;
    println!("Dashboard: {}", to_string_pretty(&dashboard)?);

    // El segundo tipo de registro comparte el mismo motor.
    let mantenimiento = registro_config_mantenimiento()?;
    println!(
        "\nTipo de registro: {} ({} pasos, tabla en '{}')",
        mantenimiento.title,
        mantenimiento.pasos.len(),
        mantenimiento
            .paso("antenas")?
            .elemento
            .sub_elemento_tabla()
            .map(|t| t.modelo.as_str())
            .unwrap_or("-")
    );

    Ok(())
}
