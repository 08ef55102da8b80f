pub mod render;
pub mod vis3d;
