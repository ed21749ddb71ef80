//! Configuración del registro de mantenimiento: estado general más un
//! inventario de antenas en tabla editable.

use indexmap::IndexMap;
use serde_json::json;

use registro_core::{
    create_custom_config, create_registro_config, create_simple_config, create_table_config,
    ColumnaTabla, CoreError, RegistroConfig, SubElementoConfig, SubElementoTipo, TablaConfig,
};

use crate::schemas::{schema_r_estado, schema_r_inventario};

pub fn registro_config_mantenimiento() -> Result<RegistroConfig, CoreError> {
    let paso_estado = create_simple_config(
        "estado",
        schema_r_estado()?,
        None,
        "Estado General",
        "Estado de torre y energía",
    )?;

    let tabla_antenas = create_table_config(
        TablaConfig::new(
            "r_antena",
            vec![
                ColumnaTabla::new("marca", "Marca"),
                ColumnaTabla::new("modelo", "Modelo"),
                ColumnaTabla::new("azimut", "Azimut"),
                ColumnaTabla::new("altura", "Altura Montaje"),
            ],
        ),
        "components/tabla_antenas.html",
    );
    let nota_antenas = SubElementoConfig::new(SubElementoTipo::Info {
        payload: json!({
            "texto": "Registrar todas las antenas instaladas, incluidas las fuera de servicio.",
        }),
    });
    let paso_antenas = create_custom_config(
        "antenas",
        schema_r_inventario()?,
        None,
        "Antenas",
        "Inventario de antenas instaladas",
        vec![tabla_antenas, nota_antenas],
    )?;

    let mut pasos = IndexMap::new();
    pasos.insert("estado".to_string(), paso_estado);
    pasos.insert("antenas".to_string(), paso_antenas);

    Ok(create_registro_config(
        "RegMantenimiento",
        pasos,
        "Mantenimiento",
        "reg_mantenimiento",
        "pages/main_mantenimiento.html",
        "pages/steps_mantenimiento.html",
    ))
}
