pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use app::game::{HeliosPlugin, Launch};
pub use app::state::AppState;
pub use core::config::{config::GameConfig, config::WindowConfig};
