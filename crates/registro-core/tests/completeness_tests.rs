
use registro_core::elemento::evaluar_completeness;
use registro_core::{ElementoConfig, EstadoColor, FieldValue, InMemoryRecordStore, RecordStore};
use test_support::{registro_para, schema_r_sitio, sitio_con_base};

fn elemento_sitio() -> ElementoConfig {
    let schema = schema_r_sitio();
    let fields = schema.nombres_campos();
    ElementoConfig::new("sitio", schema, None, fields).unwrap()
}

#[test]
fn sin_instancia_es_gray() {
    let config = elemento_sitio();
    let c = evaluar_completeness(&config, None);
    assert_eq!(c.color, EstadoColor::Gray);
    assert!(!c.is_complete);
    assert_eq!(c.total_fields, 0);
    assert_eq!(c.filled_fields, 0);
}

#[test]
fn instancia_vacia_es_error() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let mut store = InMemoryRecordStore::new();
    let config = elemento_sitio();

    let instancia = store.get_or_create(registro.id, &config.schema).unwrap();
    let c = evaluar_completeness(&config, Some(&instancia));
    assert_eq!(c.color, EstadoColor::Error);
    assert_eq!(c.filled_fields, 0);
    assert_eq!(c.total_fields, 4);
    assert_eq!(c.missing_fields.len(), 4);
}

#[test]
fn parcial_es_warning_y_reporta_exactamente_k_de_n() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let mut store = InMemoryRecordStore::new();
    let config = elemento_sitio();

    let mut instancia = store.get_or_create(registro.id, &config.schema).unwrap();
    instancia.set("lat", FieldValue::Decimal(-33.451));
    instancia.set("altura", FieldValue::Texto("45m".into()));
    store.save(instancia.clone()).unwrap();

    let c = evaluar_completeness(&config, Some(&instancia));
    assert_eq!(c.color, EstadoColor::Warning);
    assert_eq!(c.filled_fields, 2);
    assert_eq!(c.total_fields, 4);
    assert_eq!(c.percentage, 50.0);
    assert_eq!(c.missing_fields, vec!["lon".to_string(), "dimensiones".to_string()]);
}

#[test]
fn completo_es_success_solo_con_todos_llenos() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let mut store = InMemoryRecordStore::new();
    let config = elemento_sitio();

    let mut instancia = store.get_or_create(registro.id, &config.schema).unwrap();
    instancia.set("lat", FieldValue::Decimal(-33.451));
    instancia.set("lon", FieldValue::Decimal(-70.662));
    instancia.set("altura", FieldValue::Texto("45m".into()));
    instancia.set("dimensiones", FieldValue::Texto("10x10".into()));

    let c = evaluar_completeness(&config, Some(&instancia));
    assert_eq!(c.color, EstadoColor::Success);
    assert!(c.is_complete);
    assert_eq!(c.percentage, 100.0);
    assert!(c.missing_fields.is_empty());
}

#[test]
fn texto_vacio_no_cuenta_como_llenado() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let mut store = InMemoryRecordStore::new();
    let config = elemento_sitio();

    let mut instancia = store.get_or_create(registro.id, &config.schema).unwrap();
    instancia.set("altura", FieldValue::Texto(String::new()));

    let c = evaluar_completeness(&config, Some(&instancia));
    assert_eq!(c.filled_fields, 0);
    assert_eq!(c.color, EstadoColor::Error);
}

#[test]
fn los_campos_opcionales_no_cuentan_para_la_completitud() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let mut store = InMemoryRecordStore::new();

    // r_acceso: tipo_suelo y distancia requeridos, comentarios opcional.
    let schema = test_support::schema_r_acceso();
    let fields = schema.nombres_campos();
    let config = ElementoConfig::new("acceso", schema, None, fields).unwrap();

    let mut instancia = store.get_or_create(registro.id, &config.schema).unwrap();
    instancia.set("tipo_suelo", FieldValue::Texto("ripio".into()));
    instancia.set("distancia", FieldValue::Texto("2km".into()));

    // Con los requeridos llenos el paso está completo aunque el opcional
    // siga vacío.
    let c = evaluar_completeness(&config, Some(&instancia));
    assert_eq!(c.color, EstadoColor::Success);
    assert!(c.is_complete);
    assert_eq!(c.total_fields, 2);
    assert_eq!(c.filled_fields, 2);
    assert!(c.missing_fields.is_empty());

    // Y con un solo requerido lleno sigue en warning, sin listar el
    // opcional entre los faltantes.
    let mut parcial = store.get_or_create(registro.id, &config.schema).unwrap();
    parcial.set("tipo_suelo", FieldValue::Texto("ripio".into()));
    parcial.set("comentarios", FieldValue::Texto("sin novedad".into()));
    let c = evaluar_completeness(&config, Some(&parcial));
    assert_eq!(c.color, EstadoColor::Warning);
    assert_eq!(c.missing_fields, vec!["distancia".to_string()]);
}

#[test]
fn instancia_borrada_se_trata_como_inexistente() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let mut store = InMemoryRecordStore::new();
    let config = elemento_sitio();

    let mut instancia = store.get_or_create(registro.id, &config.schema).unwrap();
    instancia.set("lat", FieldValue::Decimal(-33.451));
    instancia.is_deleted = true;

    let c = evaluar_completeness(&config, Some(&instancia));
    assert_eq!(c.color, EstadoColor::Gray);
    assert_eq!(c.filled_fields, 0);
}
