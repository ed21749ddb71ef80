//! Hash de valores JSON canónicos. Se usa para detectar capturas de mapa
//! desactualizadas: la clave de una captura es el hash de sus coordenadas.
mod canonical_json;
mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::{hash_str, hash_value};
