/// Zoom por defecto de los mapas de paso.
pub const DEFAULT_ZOOM: u8 = 15;

/// Mínimo de fotos por defecto cuando la configuración no lo fija.
pub const DEFAULT_PHOTO_MIN: usize = 4;

/// Columnas de auditoría que nunca participan en formularios ni completitud.
pub const CAMPOS_AUDITORIA: [&str; 4] = ["id", "created_at", "updated_at", "is_deleted"];
