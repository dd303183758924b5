use bevy::prelude::*;

use crate::core::config::SunDodgeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DodgePhase {
    #[default]
    Charging,
    /// Flare sequence running; `ticks` since it was released.
    Flare { ticks: u32 },
    /// Summary screen; `ticks` since it appeared.
    GameOver { ticks: u32 },
}

/// Per-run state of the Sun Dodge level.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DodgeSession {
    pub phase: DodgePhase,
    /// Charging ticks played; drives the difficulty ramp and the survival time.
    pub game_ticks: u32,
    pub spawn_meter: u32,
    pub spawn_interval: u32,
    /// Added to every new plasma's fall speed.
    pub speed_bonus: f32,
    pub spawn_acceleration: u32,
    pub flare_cycles: u32,
}

impl DodgeSession {
    pub fn new(cfg: &SunDodgeConfig) -> Self {
        Self {
            phase: DodgePhase::Charging,
            game_ticks: 0,
            spawn_meter: 0,
            spawn_interval: cfg.spawn.base_interval,
            speed_bonus: 0.0,
            spawn_acceleration: 0,
            flare_cycles: 0,
        }
    }

    pub fn is_charging(&self) -> bool {
        self.phase == DodgePhase::Charging
    }

    /// Whole seconds survived at `tick_hz`.
    pub fn elapsed_secs(&self, tick_hz: f64) -> u32 {
        if tick_hz <= 0.0 {
            return 0;
        }
        (self.game_ticks as f64 / tick_hz).floor() as u32
    }

    /// Apply one difficulty step: faster plasmas, shorter spawn interval.
    pub fn ramp(&mut self, cfg: &SunDodgeConfig) {
        self.speed_bonus += cfg.difficulty.speed_step;
        self.spawn_acceleration += cfg.difficulty.interval_step;
        self.spawn_interval = cfg
            .spawn
            .base_interval
            .saturating_sub(self.spawn_acceleration)
            .max(cfg.spawn.min_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_floors_interval() {
        let cfg = SunDodgeConfig::default();
        let mut s = DodgeSession::new(&cfg);
        s.ramp(&cfg);
        assert_eq!(s.spawn_interval, 58);
        assert!((s.speed_bonus - 0.8).abs() < 1e-6);
        for _ in 0..40 {
            s.ramp(&cfg);
        }
        assert_eq!(s.spawn_interval, 15);
        assert_eq!(s.spawn_acceleration, 82);
    }

    #[test]
    fn elapsed_counts_whole_seconds() {
        let mut s = DodgeSession::new(&SunDodgeConfig::default());
        s.game_ticks = 119;
        assert_eq!(s.elapsed_secs(60.0), 1);
        s.game_ticks = 120;
        assert_eq!(s.elapsed_secs(60.0), 2);
    }
}
