use bevy::prelude::*;

use crate::core::mask::CollisionMask;

/// Player avatar. Position is its centre (`FieldPos`), movement in `Velocity`.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Astronaut {
    pub lives: u32,
    /// Ticks of red damage tint left.
    pub damage_timer: u32,
}

impl Astronaut {
    pub fn new(lives: u32) -> Self {
        Self { lives, damage_timer: 0 }
    }

    pub fn is_flashing(&self) -> bool {
        self.damage_timer > 0
    }
}

/// Drifting hazard; `variant` picks one of the particle images.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SolarParticle {
    pub size: f32,
    pub variant: usize,
}

/// Opaque pixels of the particle's scaled art, used for the hit test.
#[derive(Component, Debug, Clone)]
pub struct ParticleMask(pub CollisionMask);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DamagedPanel {
    pub repaired: bool,
}

/// Satellite backdrop (scenery only).
#[derive(Component, Debug, Clone, Copy)]
pub struct SatelliteBody {
    pub size: Vec2,
}

/// Everything spawned for the level; despawned on exit.
#[derive(Component, Default)]
pub struct RepairScoped;
