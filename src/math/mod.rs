mod aabb;
mod viewport;

pub use aabb::Aabb;
pub use viewport::Viewport;
