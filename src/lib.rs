pub mod assets;
pub mod config;
pub mod deck;
pub mod export;
pub mod model;

pub use assets::AssetCache;
pub use config::*;
pub use deck::*;
pub use model::*;
