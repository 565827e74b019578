//! GPMF stream structure: KLV framing, scale state and the interval decoder.

mod container;
mod decoder;
mod fourcc;
mod klv;
mod scale;
mod timestamp;
mod tokenizer;
mod value_type;

pub use decoder::Decoder;
pub use fourcc::FourCC;
pub use klv::Token;
pub use scale::ScaleRegistry;
pub use timestamp::{parse_gpsu, sample_offset_ms, unix_micros};
pub use tokenizer::Tokenizer;
pub use value_type::ValueType;
