pub mod color;
pub mod converter;
pub mod encoder;
pub mod grid;
pub mod serializer;
pub mod source;
