pub mod expander;
pub mod extractor;
pub mod parser;

pub use expander::{expand, PixelGrid, BACKGROUND};
pub use extractor::load_lore_file;
pub use parser::parse_rows;
