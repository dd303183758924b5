use bevy::prelude::*;

use crate::core::config::SunConfig;

/// The player-controlled sun. Position lives in `FieldPos`.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct Sun {
    pub charge: u32,
    /// Set when the flare is released; the sun no longer steers.
    pub flaring: bool,
}

impl Sun {
    pub fn radius(&self, cfg: &SunConfig) -> f32 {
        cfg.base_radius + self.charge as f32 * cfg.growth_per_charge
    }

    /// Horizontal speed per tick: the base speed plus one percent per charge,
    /// capped at `max_speed_boost` percent.
    pub fn speed(&self, cfg: &SunConfig) -> f32 {
        let boost = (self.charge as f32).min(cfg.max_speed_boost);
        cfg.base_speed + cfg.base_speed * boost / 100.0
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Plasma {
    pub radius: f32,
    /// Fall speed in pixels per tick.
    pub speed: f32,
}

/// Everything spawned for the level; despawned on exit.
#[derive(Component, Default)]
pub struct DodgeScoped;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_grows_with_charge() {
        let cfg = SunConfig::default();
        assert_eq!(Sun::default().radius(&cfg), 30.0);
        assert_eq!(Sun { charge: 6, flaring: false }.radius(&cfg), 42.0);
    }

    #[test]
    fn speed_boost_caps_at_double() {
        let cfg = SunConfig::default();
        assert_eq!(Sun::default().speed(&cfg), 7.0);
        assert!((Sun { charge: 50, flaring: false }.speed(&cfg) - 10.5).abs() < 1e-5);
        assert_eq!(Sun { charge: 500, flaring: false }.speed(&cfg), 14.0);
    }
}
