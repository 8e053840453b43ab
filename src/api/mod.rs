pub mod openapi;
pub mod render;

pub use render::ErrorRenderer;
