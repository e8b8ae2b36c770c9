pub mod controller;
pub mod gesture;

pub use controller::{TransformController, ZoomDirection};
