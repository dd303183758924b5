use bevy::app::AppExit;
use clap::Parser;

use helios::app::cli::LevelArgs;
use helios::app::game::{run, Launch};
use helios::AppState;

fn main() -> AppExit {
    let args = LevelArgs::parse();
    run(Launch::Level(AppState::SatelliteRepair), args.common)
}
