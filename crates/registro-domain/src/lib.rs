//! registro-domain: entidades de dominio para registros de inspección de sitios.
pub mod coordenada;
pub mod errors;
pub mod foto;
pub mod registro;
pub mod sitio;

pub use coordenada::Coordenada;
pub use errors::DomainError;
pub use foto::Foto;
pub use registro::Registro;
pub use sitio::Site;
