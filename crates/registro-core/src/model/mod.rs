//! Abstracción de modelos de paso: descriptores de campos, esquemas y la
//! instancia persistida genérica sobre la que trabaja el motor.
mod field;
mod record;
mod schema;

pub use field::{FieldDescriptor, FieldKind, FieldValue};
pub use record::RecordInstance;
pub use schema::ModelSchema;
