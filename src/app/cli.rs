use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

use super::state::AppState;

/// Flags every binary understands.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonArgs {
    /// Extra RON file merged over assets/config/game.ron
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Seed for plasma / particle spawns
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelArg {
    SunDodge,
    SatelliteRepair,
}

impl From<LevelArg> for AppState {
    fn from(l: LevelArg) -> Self {
        match l {
            LevelArg::SunDodge => AppState::SunDodge,
            LevelArg::SatelliteRepair => AppState::SatelliteRepair,
        }
    }
}

/// `helios` launcher.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "helios", about = "HELIOS: The Space Weather Game")]
pub struct LaunchArgs {
    /// Skip the intro and play a single level
    #[arg(long, value_enum)]
    pub level: Option<LevelArg>,
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Single-level binaries.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct LevelArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_campaign() {
        let args = LaunchArgs::try_parse_from(["helios"]).unwrap();
        assert_eq!(args.level, None);
        assert_eq!(args.common, CommonArgs::default());
    }

    #[test]
    fn level_and_seed_parse() {
        let args = LaunchArgs::try_parse_from(["helios", "--level", "satellite-repair", "--seed", "42"]).unwrap();
        assert_eq!(args.level.map(AppState::from), Some(AppState::SatelliteRepair));
        assert_eq!(args.common.seed, Some(42));
    }

    #[test]
    fn level_binaries_reject_level_flag() {
        assert!(LevelArgs::try_parse_from(["sun_dodge", "--level", "sun-dodge"]).is_err());
        let ok = LevelArgs::try_parse_from(["sun_dodge", "--config", "x.ron"]).unwrap();
        assert_eq!(ok.common.config, Some(PathBuf::from("x.ron")));
    }
}
