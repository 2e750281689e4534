pub mod align;
pub mod app;
pub mod client;
pub mod config;
pub mod icon;
pub mod model;
pub mod render;
