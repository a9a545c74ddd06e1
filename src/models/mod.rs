pub mod captured_image;
pub mod config;
pub mod recognition;
pub mod rect;
