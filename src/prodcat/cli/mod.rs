pub mod browse;
pub mod render;
pub mod styles;
