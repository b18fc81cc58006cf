mod image;
mod usage;

pub use image::Image;
pub use usage::ImageUsage;
