//! registro-adapters: configuraciones concretas de tipos de registro.
//!
//! Este crate declara, sobre el motor de registro-core:
//! - Los esquemas de los modelos de paso (`schemas`).
//! - La configuración del registro TX/TSS (`txtss`): sitio con mapa
//!   multipunto y fotos, acceso simple, empalme con fotos.
//! - La configuración de mantenimiento (`mantenimiento`): inventario en
//!   tabla editable más un paso informativo.
//!
//! El motor solo conoce `RegistroConfig`; aquí vive todo lo específico de
//! cada tipo de inspección.

pub mod mantenimiento;
pub mod schemas;
pub mod txtss;

pub use mantenimiento::registro_config_mantenimiento;
pub use txtss::registro_config_txtss;
