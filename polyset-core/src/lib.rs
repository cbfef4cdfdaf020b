pub mod geometry;
pub mod util;
