pub mod resources;
pub mod scroll_controller;
