pub mod assets;
pub mod config;
pub mod hero;
pub mod layout;
pub mod motion;
