pub mod config;
pub mod game;
pub mod traits;
pub mod util;
