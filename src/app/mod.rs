pub mod cli;
pub mod game;
pub mod intro;
pub mod music;
pub mod state;
