use bevy::app::AppExit;
use clap::Parser;

use helios::app::cli::LaunchArgs;
use helios::app::game::{run, Launch};

fn main() -> AppExit {
    let args = LaunchArgs::parse();
    let launch = match args.level {
        Some(level) => Launch::Level(level.into()),
        None => Launch::Campaign,
    };
    run(launch, args.common)
}
