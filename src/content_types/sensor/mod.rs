//! Accelerometer, gyroscope and magnetometer samples.

mod sensor_field;
mod sensor_type;

pub use sensor_field::SensorField;
pub use sensor_type::SensorType;
