pub mod collision;
pub mod components;
pub mod config;
pub mod mask;
pub mod playfield;
pub mod rng;
pub mod system;
