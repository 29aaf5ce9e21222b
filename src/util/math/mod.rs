mod vec2;
mod mat33;

pub use vec2::Vec2;
pub use mat33::Mat33;
