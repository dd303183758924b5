pub mod camera;

pub use camera::{CameraPlugin, GameCamera};
