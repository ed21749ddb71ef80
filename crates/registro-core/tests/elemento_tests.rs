
use indexmap::IndexMap;
use registro_core::{
    CoreError, Elemento, ElementoConfig, FieldValue, InMemoryRecordStore, RecordStore,
};
use test_support::{registro_para, schema_r_acceso, schema_r_sitio, sitio_con_base};

fn config_sitio() -> ElementoConfig {
    let schema = schema_r_sitio();
    let fields = schema.nombres_campos();
    ElementoConfig::new("sitio", schema, None, fields).unwrap()
}

#[test]
fn get_or_create_es_idempotente() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let mut store = InMemoryRecordStore::new();

    let primera = store.get_or_create(registro.id, &schema_r_sitio()).unwrap();
    let segunda = store.get_or_create(registro.id, &schema_r_sitio()).unwrap();
    assert_eq!(primera.id, segunda.id, "la segunda llamada devuelve la misma instancia");

    assert_eq!(store.list(registro.id, "r_sitio").len(), 1);
}

#[test]
fn get_or_create_separa_por_modelo_y_por_registro() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro_a = registro_para(&sitio);
    let registro_b = registro_para(&sitio);
    let mut store = InMemoryRecordStore::new();

    let sitio_a = store.get_or_create(registro_a.id, &schema_r_sitio()).unwrap();
    let acceso_a = store.get_or_create(registro_a.id, &schema_r_acceso()).unwrap();
    let sitio_b = store.get_or_create(registro_b.id, &schema_r_sitio()).unwrap();

    assert_ne!(sitio_a.id, acceso_a.id);
    assert_ne!(sitio_a.id, sitio_b.id);
    assert_eq!(store.find(registro_a.id, "r_sitio").unwrap().id, sitio_a.id);
}

#[test]
fn instancia_borrada_queda_fuera_de_find_y_se_crea_una_nueva() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let mut store = InMemoryRecordStore::new();

    let primera = store.get_or_create(registro.id, &schema_r_sitio()).unwrap();
    store.soft_delete(primera.id).unwrap();

    assert!(store.find(registro.id, "r_sitio").is_none());
    // La instancia sigue recuperable por id para auditoría.
    assert!(store.get(primera.id).map(|r| r.is_deleted).unwrap_or(false));

    let segunda = store.get_or_create(registro.id, &schema_r_sitio()).unwrap();
    assert_ne!(primera.id, segunda.id, "el borrado lógico no revive la instancia");
}

#[test]
fn guardar_valida_y_persiste() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let config = config_sitio();
    let mut store = InMemoryRecordStore::new();

    let mut elemento = Elemento::cargar(&registro, &config, &mut store).unwrap();

    let mut datos = IndexMap::new();
    datos.insert("lat".to_string(), FieldValue::Texto("-33.451".to_string()));
    datos.insert("lon".to_string(), FieldValue::Decimal(-70.662));
    datos.insert("altura".to_string(), FieldValue::Texto("45m".to_string()));
    datos.insert("dimensiones".to_string(), FieldValue::Texto("10x10".to_string()));

    let guardada = elemento.guardar(&datos, &mut store).unwrap();
    // La coerción convierte el texto numérico a la columna decimal.
    assert_eq!(guardada.get("lat"), FieldValue::Decimal(-33.451));

    let releida = store.find(registro.id, "r_sitio").unwrap();
    assert_eq!(releida.id, guardada.id);
    assert_eq!(releida.get("altura"), FieldValue::Texto("45m".to_string()));
}

#[test]
fn guardar_rechaza_requeridos_ausentes() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let config = config_sitio();
    let mut store = InMemoryRecordStore::new();

    let mut elemento = Elemento::cargar(&registro, &config, &mut store).unwrap();

    let mut datos = IndexMap::new();
    datos.insert("lat".to_string(), FieldValue::Decimal(-33.451));

    let err = elemento.guardar(&datos, &mut store).unwrap_err();
    assert!(matches!(err, CoreError::ValidacionFormulario(_)));
}

#[test]
fn guardar_rechaza_tipos_incompatibles() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let config = config_sitio();
    let mut store = InMemoryRecordStore::new();

    let mut elemento = Elemento::cargar(&registro, &config, &mut store).unwrap();

    let mut datos = IndexMap::new();
    datos.insert("lat".to_string(), FieldValue::Texto("no-numerico".to_string()));
    datos.insert("lon".to_string(), FieldValue::Decimal(-70.662));
    datos.insert("altura".to_string(), FieldValue::Texto("45m".to_string()));
    datos.insert("dimensiones".to_string(), FieldValue::Texto("10x10".to_string()));

    let err = elemento.guardar(&datos, &mut store).unwrap_err();
    assert!(matches!(err, CoreError::ValidacionFormulario(_)));
}

#[test]
fn opcionales_vacios_no_bloquean_el_guardado() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let schema = schema_r_acceso();
    let fields = schema.nombres_campos();
    let config = ElementoConfig::new("acceso", schema, None, fields).unwrap();
    let mut store = InMemoryRecordStore::new();

    let mut elemento = Elemento::cargar(&registro, &config, &mut store).unwrap();

    let mut datos = IndexMap::new();
    datos.insert("tipo_suelo".to_string(), FieldValue::Texto("ripio".to_string()));
    datos.insert("distancia".to_string(), FieldValue::Texto("2km".to_string()));
    // comentarios es opcional y no viene.

    let guardada = elemento.guardar(&datos, &mut store).unwrap();
    assert_eq!(guardada.get("comentarios"), FieldValue::Nulo);
}
