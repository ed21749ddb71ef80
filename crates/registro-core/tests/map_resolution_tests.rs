
use registro_core::elemento::{hash_coordenadas, resolver_mapa};
use registro_core::{
    FieldValue, FuenteCoordenada, IconoConfig, InMemoryRecordStore, InMemorySnapshotStore,
    MapaConfig, MapaStatus, RecordStore, SnapshotStore,
};
use registro_domain::Site;
use test_support::{registro_para, schema_r_sitio, sitio_con_base};

fn mapa_dos_puntos() -> MapaConfig {
    MapaConfig::new(vec![
        FuenteCoordenada::actual("lat", "lon", "Inspección")
            .con_icono(IconoConfig::new("red", "large")),
        FuenteCoordenada::sitio("Mandato").con_icono(IconoConfig::new("blue", "normal")),
    ])
    .unwrap()
    .con_distancia("Desfase Mandato-Inspección")
    .unwrap()
}

#[test]
fn dos_fuentes_resueltas_producen_exactamente_dos_coordenadas() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let mut records = InMemoryRecordStore::new();
    let snapshots = InMemorySnapshotStore::new();

    let mut instancia = records.get_or_create(registro.id, &schema_r_sitio()).unwrap();
    instancia.set("lat", FieldValue::Decimal(-33.4501));
    instancia.set("lon", FieldValue::Decimal(-70.6601));
    records.save(instancia.clone()).unwrap();

    let ctx = resolver_mapa(
        &mapa_dos_puntos(),
        "sitio",
        &registro,
        Some(&sitio),
        Some(&instancia),
        &records,
        &snapshots,
    );

    assert_eq!(ctx.coordinates.len(), 2);
    assert_eq!(ctx.coordinates[0].label, "Inspección");
    assert_eq!(ctx.coordinates[1].label, "Mandato");
    assert!(ctx.enabled);
    let d = ctx.distancia.expect("distancia con dos coordenadas");
    assert!(d > 0 && d < 100, "desfase inesperado: {d}");
}

#[test]
fn una_sola_fuente_resuelta_omite_la_distancia() {
    // Sitio sin coordenada base: la segunda fuente no resuelve.
    let sitio = Site::nuevo("TORRE-SIN-BASE");
    let registro = registro_para(&sitio);
    let mut records = InMemoryRecordStore::new();
    let snapshots = InMemorySnapshotStore::new();

    let mut instancia = records.get_or_create(registro.id, &schema_r_sitio()).unwrap();
    instancia.set("lat", FieldValue::Decimal(-33.4501));
    instancia.set("lon", FieldValue::Decimal(-70.6601));
    records.save(instancia.clone()).unwrap();

    let ctx = resolver_mapa(
        &mapa_dos_puntos(),
        "sitio",
        &registro,
        Some(&sitio),
        Some(&instancia),
        &records,
        &snapshots,
    );

    assert_eq!(ctx.coordinates.len(), 1);
    assert_eq!(ctx.distancia, None, "la distancia nunca se calcula contra un punto ausente");
    assert_eq!(ctx.status, MapaStatus::Disabled);
    assert!(ctx.enabled, "los mapas multipunto quedan habilitados aunque falten coordenadas");
}

#[test]
fn instancia_sin_coordenadas_omite_la_fuente_actual() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let mut records = InMemoryRecordStore::new();
    let snapshots = InMemorySnapshotStore::new();

    let instancia = records.get_or_create(registro.id, &schema_r_sitio()).unwrap();

    let ctx = resolver_mapa(
        &mapa_dos_puntos(),
        "sitio",
        &registro,
        Some(&sitio),
        Some(&instancia),
        &records,
        &snapshots,
    );

    assert_eq!(ctx.coordinates.len(), 1);
    assert_eq!(ctx.coordinates[0].label, "Mandato");
    assert_eq!(ctx.distancia, None);
}

#[test]
fn coordenadas_fuera_de_rango_se_omiten() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let mut records = InMemoryRecordStore::new();
    let snapshots = InMemorySnapshotStore::new();

    let mut instancia = records.get_or_create(registro.id, &schema_r_sitio()).unwrap();
    instancia.set("lat", FieldValue::Decimal(120.0));
    instancia.set("lon", FieldValue::Decimal(-70.6601));
    records.save(instancia.clone()).unwrap();

    let ctx = resolver_mapa(
        &mapa_dos_puntos(),
        "sitio",
        &registro,
        Some(&sitio),
        Some(&instancia),
        &records,
        &snapshots,
    );

    assert_eq!(ctx.coordinates.len(), 1);
    assert_eq!(ctx.distancia, None);
}

#[test]
fn fuente_relacionada_ausente_se_omite_sin_error() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let records = InMemoryRecordStore::new();
    let snapshots = InMemorySnapshotStore::new();

    let mapa = MapaConfig::new(vec![
        FuenteCoordenada::sitio("Mandato"),
        FuenteCoordenada::relacionada("r_empalme", "lat", "lon", "Empalme"),
    ])
    .unwrap();

    let ctx = resolver_mapa(&mapa, "sitio", &registro, Some(&sitio), None, &records, &snapshots);
    assert_eq!(ctx.coordinates.len(), 1);
    assert_eq!(ctx.coordinates[0].label, "Mandato");
}

#[test]
fn estado_error_sin_captura_y_success_con_captura_vigente() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let mut records = InMemoryRecordStore::new();
    let mut snapshots = InMemorySnapshotStore::new();

    let mut instancia = records.get_or_create(registro.id, &schema_r_sitio()).unwrap();
    instancia.set("lat", FieldValue::Decimal(-33.4501));
    instancia.set("lon", FieldValue::Decimal(-70.6601));
    records.save(instancia.clone()).unwrap();

    let cfg = mapa_dos_puntos();
    let ctx = resolver_mapa(
        &cfg,
        "sitio",
        &registro,
        Some(&sitio),
        Some(&instancia),
        &records,
        &snapshots,
    );
    assert_eq!(ctx.status, MapaStatus::Error, "coordenadas completas sin captura");

    // Guardar la captura con el hash de las coordenadas actuales.
    snapshots.guardar(registro.id, "sitio", hash_coordenadas(&ctx.coordinates));
    let ctx = resolver_mapa(
        &cfg,
        "sitio",
        &registro,
        Some(&sitio),
        Some(&instancia),
        &records,
        &snapshots,
    );
    assert_eq!(ctx.status, MapaStatus::Success);

    // Si la coordenada de inspección cambia, la captura queda obsoleta.
    let mut instancia = records.find(registro.id, "r_sitio").unwrap();
    instancia.set("lat", FieldValue::Decimal(-33.46));
    records.save(instancia.clone()).unwrap();
    let ctx = resolver_mapa(
        &cfg,
        "sitio",
        &registro,
        Some(&sitio),
        Some(&instancia),
        &records,
        &snapshots,
    );
    assert_eq!(ctx.status, MapaStatus::Error);
}

#[test]
fn mapa_de_un_punto_sin_coordenada_queda_en_warning() {
    let sitio = Site::nuevo("TORRE-SIN-BASE");
    let registro = registro_para(&sitio);
    let mut records = InMemoryRecordStore::new();
    let snapshots = InMemorySnapshotStore::new();

    let mapa = MapaConfig::new(vec![FuenteCoordenada::actual("lat", "lon", "Inspección")]).unwrap();
    let instancia = records.get_or_create(registro.id, &schema_r_sitio()).unwrap();

    let ctx = resolver_mapa(
        &mapa,
        "sitio",
        &registro,
        Some(&sitio),
        Some(&instancia),
        &records,
        &snapshots,
    );
    assert!(ctx.coordinates.is_empty());
    assert_eq!(ctx.status, MapaStatus::Warning);
    assert!(!ctx.enabled, "un mapa de un punto sin coordenada no se muestra");
}

#[test]
fn distancia_exige_al_menos_dos_fuentes_en_configuracion() {
    let solo_una = MapaConfig::new(vec![FuenteCoordenada::actual("lat", "lon", "Inspección")])
        .unwrap()
        .con_distancia("Desfase");
    assert!(solo_una.is_err());
}

#[test]
fn mapa_sin_fuentes_o_con_mas_de_tres_es_invalido() {
    assert!(MapaConfig::new(vec![]).is_err());
    let cuatro = vec![
        FuenteCoordenada::actual("lat", "lon", "a"),
        FuenteCoordenada::sitio("b"),
        FuenteCoordenada::relacionada("m", "lat", "lon", "c"),
        FuenteCoordenada::sitio("d"),
    ];
    assert!(MapaConfig::new(cuatro).is_err());
}

#[test]
fn tercera_fuente_resuelta_aparece_en_el_contexto() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let mut records = InMemoryRecordStore::new();
    let snapshots = InMemorySnapshotStore::new();

    let schema_empalme = registro_core::ModelSchema::new(
        "r_empalme",
        vec![
            registro_core::FieldDescriptor::requerido(
                "lat",
                "Latitud",
                registro_core::FieldKind::Decimal,
            ),
            registro_core::FieldDescriptor::requerido(
                "lon",
                "Longitud",
                registro_core::FieldKind::Decimal,
            ),
        ],
    )
    .unwrap();
    let mut empalme = records.get_or_create(registro.id, &schema_empalme).unwrap();
    empalme.set("lat", FieldValue::Decimal(-33.4490));
    empalme.set("lon", FieldValue::Decimal(-70.6590));
    records.save(empalme).unwrap();

    let mut instancia = records.get_or_create(registro.id, &schema_r_sitio()).unwrap();
    instancia.set("lat", FieldValue::Decimal(-33.4501));
    instancia.set("lon", FieldValue::Decimal(-70.6601));
    records.save(instancia.clone()).unwrap();

    let mapa = MapaConfig::new(vec![
        FuenteCoordenada::actual("lat", "lon", "Inspección"),
        FuenteCoordenada::sitio("Mandato"),
        FuenteCoordenada::relacionada("r_empalme", "lat", "lon", "Empalme"),
    ])
    .unwrap()
    .con_distancia("Desfase Mandato-Inspección")
    .unwrap();

    let ctx = resolver_mapa(
        &mapa,
        "sitio",
        &registro,
        Some(&sitio),
        Some(&instancia),
        &records,
        &snapshots,
    );
    assert_eq!(ctx.coordinates.len(), 3);
    // La distancia se calcula solo entre las dos primeras fuentes.
    assert!(ctx.distancia.is_some());
}

#[test]
fn la_tercera_fuente_no_es_requerida_para_completar_el_mapa() {
    let sitio = sitio_con_base(-33.45, -70.66);
    let registro = registro_para(&sitio);
    let mut records = InMemoryRecordStore::new();
    let snapshots = InMemorySnapshotStore::new();

    let mut instancia = records.get_or_create(registro.id, &schema_r_sitio()).unwrap();
    instancia.set("lat", FieldValue::Decimal(-33.4501));
    instancia.set("lon", FieldValue::Decimal(-70.6601));
    records.save(instancia.clone()).unwrap();

    // La fuente relacionada no existe en el almacén.
    let mapa = MapaConfig::new(vec![
        FuenteCoordenada::actual("lat", "lon", "Inspección"),
        FuenteCoordenada::sitio("Mandato"),
        FuenteCoordenada::relacionada("r_empalme", "lat", "lon", "Empalme"),
    ])
    .unwrap();

    let ctx = resolver_mapa(
        &mapa,
        "sitio",
        &registro,
        Some(&sitio),
        Some(&instancia),
        &records,
        &snapshots,
    );
    assert_eq!(ctx.coordinates.len(), 2);
    // Con las dos fuentes requeridas resueltas el mapa está completo; solo
    // falta la captura.
    assert_eq!(ctx.status, MapaStatus::Error);
}
