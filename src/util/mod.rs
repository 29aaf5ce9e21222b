pub mod image;
pub(crate) mod geom;
pub mod math;
mod timeprofile;

pub use self::image::{ImageBuffer, ImageDimensions, ImageRefY8, ImageY8};
pub use timeprofile::{TimeProfile, TimeProfileStatistics};
