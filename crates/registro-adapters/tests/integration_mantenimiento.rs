//! Registro de mantenimiento: paso de estado más inventario en tabla.

use serde_json::{json, Map, Value};

use registro_adapters::registro_config_mantenimiento;
use registro_adapters::schemas::schema_r_antena;
use registro_core::{
    generar_contexto_pasos, InMemoryFotoStore, InMemoryRecordStore, InMemorySnapshotStore,
    TablaElemento,
};
use registro_domain::{Registro, Site};

fn fila(datos: &[(&str, Value)]) -> Map<String, Value> {
    datos.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

#[test]
fn el_paso_de_antenas_es_tabla_y_el_de_estado_no() {
    let sitio = Site::nuevo("CL-RM-0042");
    let registro = Registro::activar(sitio.id, "tecnico1", "Mantenimiento CL-RM-0042");
    let config = registro_config_mantenimiento().unwrap();
    let mut records = InMemoryRecordStore::new();
    let fotos = InMemoryFotoStore::new();
    let snapshots = InMemorySnapshotStore::new();

    let pasos = generar_contexto_pasos(
        &config, &registro, Some(&sitio), &mut records, &fotos, &snapshots,
    )
    .unwrap();
    assert_eq!(pasos.len(), 2);
    assert!(!pasos[0].1.is_table);
    assert!(pasos[1].1.is_table);
    // Sin fotos ni mapa configurados en este tipo de registro.
    assert!(!pasos[0].1.photos.enabled);
    assert!(!pasos[1].1.map.enabled);
}

#[test]
fn el_inventario_de_antenas_se_gestiona_por_tabla() {
    let sitio = Site::nuevo("CL-RM-0042");
    let registro = Registro::activar(sitio.id, "tecnico1", "Mantenimiento CL-RM-0042");
    let config = registro_config_mantenimiento().unwrap();
    let mut records = InMemoryRecordStore::new();

    let paso = config.paso("antenas").unwrap();
    let tabla_config = paso.elemento.sub_elemento_tabla().expect("tabla de antenas");
    let schema = schema_r_antena().unwrap();
    let tabla = TablaElemento::new(&registro, tabla_config, &schema);

    tabla
        .crear(
            &fila(&[("marca", json!("Kathrein")), ("modelo", json!("80010306")), ("azimut", json!(120))]),
            &mut records,
        )
        .unwrap();
    tabla
        .crear(
            &fila(&[("marca", json!("Huawei")), ("modelo", json!("AQU4518R0")), ("azimut", json!(240))]),
            &mut records,
        )
        .unwrap();

    let filas = tabla.filas(&records);
    assert_eq!(filas.len(), 2);
    assert_eq!(filas[0]["marca"], json!("Kathrein"));

    // La instancia del paso no aparece como fila del inventario: el modelo
    // del paso y el de la tabla son distintos.
    let fotos = InMemoryFotoStore::new();
    let snapshots = InMemorySnapshotStore::new();
    generar_contexto_pasos(&config, &registro, Some(&sitio), &mut records, &fotos, &snapshots)
        .unwrap();
    assert_eq!(tabla.filas(&records).len(), 2);
}
