pub mod config;

pub use config::{
    AstronautConfig, DifficultyConfig, FlareConfig, GameConfig, IntroConfig, MinigameConfig,
    PanelConfig, ParticleConfig, PlasmaConfig, PlasmaSpawnConfig, SatelliteConfig,
    SatelliteRepairConfig, SpawnRange, SunConfig, SunDodgeConfig, WindowConfig,
};
