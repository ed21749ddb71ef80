//! registro-core: motor declarativo de pasos para registros de inspección.
//!
//! Una `RegistroConfig` describe un tipo de registro como un mapa ordenado de
//! pasos; cada paso lleva una `ElementoConfig` (modelo + formulario) y
//! sub-elementos opcionales (mapa, fotos, tabla). El runtime resuelve las
//! instancias persistidas, sintetiza formularios, arma los contextos de mapa
//! y calcula la completitud de cada paso.
pub mod app_config;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod elemento;
pub mod errors;
pub mod hashing;
pub mod model;
pub mod repo;
pub mod steps;

pub use app_config::AppConfig;
pub use config::{
    create_custom_config, create_multi_point_map_config, create_photos_config,
    create_registro_config, create_simple_config, create_table_config, ColumnaTabla,
    ElementoConfig, FotosConfig, FuenteCoordenada, IconoConfig, MapaConfig, OrigenCoordenada,
    PasoConfig, RegistroConfig, SubElementoConfig, SubElementoTipo, TablaConfig,
};
pub use elemento::{
    Completeness, CoordenadaResuelta, Elemento, EstadoColor, FormSpec, FotosContext,
    MapaContext, MapaStatus, TablaElemento, Widget,
};
pub use dashboard::{estado_registro, resumen, DashboardResumen, EstadoRegistro};
pub use errors::CoreError;
pub use model::{FieldDescriptor, FieldKind, FieldValue, ModelSchema, RecordInstance};
pub use repo::{
    FotoStore, InMemoryFotoStore, InMemoryRecordStore, InMemorySnapshotStore, RecordStore,
    SnapshotStore,
};
pub use steps::{generar_contexto_pasos, FormContext, StepContext};
