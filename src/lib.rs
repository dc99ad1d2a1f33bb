pub mod client;
pub mod env_config;
pub mod panel;
pub mod prediction;
pub mod render;
pub mod surface;
pub mod view;
