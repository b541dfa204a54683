pub mod image;
pub mod word_entry;

pub use image::*;
pub use word_entry::*;
