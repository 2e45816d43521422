pub mod blend;
pub mod cli;
pub mod color;
pub mod image;
pub mod math;
pub mod rasterizer;
pub mod scene;
pub mod sprite;

pub use blend::BlendMode;
pub use color::Color;
pub use image::Image;
pub use math::{Aabb, Viewport};
pub use rasterizer::Rasterizer;
pub use sprite::Sprite;
