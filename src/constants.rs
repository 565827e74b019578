/// KLV header size: FourCC + type, size, repeat.
pub const KLV_HEADER_SIZE: usize = 8;
/// Structures are padded to 32-bit alignment.
pub const KLV_ALIGNMENT: usize = 4;
/// Bytes reserved by an `EMPT` entry.
pub const EMPT_PAYLOAD_SIZE: usize = 4;
/// Byte length of a `GPSU` value, `YYMMDDhhmmss.fff`.
pub const GPSU_LENGTH: usize = 16;
/// Minimum 2D speed (m/s) for a bearing to be trusted as heading.
/// Below this the position drifts enough to make bearings meaningless.
pub const HEADING_MIN_SPEED: f64 = 1.0;
/// Starting point for heading derivation, `(latitude, longitude)`.
pub const HEADING_SEED_POINT: (f64, f64) = (10.0, 10.0);
/// Heading reported until the first bearing above `HEADING_MIN_SPEED`.
pub const HEADING_DEFAULT: f64 = 0.0;
