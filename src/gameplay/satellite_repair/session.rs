use bevy::prelude::*;
use image::RgbaImage;

use crate::core::mask::{load_rgba, CollisionMask};
use crate::rendering::art::paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionOutcome {
    Accomplished,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepairPhase {
    #[default]
    Flying,
    /// Button mashing on `panel`; the world is frozen meanwhile.
    Minigame { panel: Entity, progress: u32 },
    GameOver(MissionOutcome),
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct RepairSession {
    pub phase: RepairPhase,
    /// Flying ticks since the last particle spawned.
    pub particle_timer: u32,
}

impl RepairSession {
    pub fn is_flying(&self) -> bool {
        self.phase == RepairPhase::Flying
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, RepairPhase::GameOver(_))
    }
}

/// Fired by the "Try Again" button; resets the mission when it is over.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RetryMission;

/// CPU copies of the art the hit test needs. Missing images fall back to
/// fully solid masks, matching the solid placeholder they are drawn as.
#[derive(Resource, Debug, Clone)]
pub struct MaskLibrary {
    pub astronaut: CollisionMask,
    pub particle_sources: Vec<Option<RgbaImage>>,
}

impl MaskLibrary {
    pub fn load(astronaut_size: u32) -> Self {
        let astronaut = match load_rgba(paths::ASTRONAUT) {
            Ok(img) => CollisionMask::from_image_scaled(&img, astronaut_size, astronaut_size),
            Err(e) => {
                warn!(target: "satellite_repair", "{e:#}; astronaut uses a solid mask");
                CollisionMask::solid(astronaut_size, astronaut_size)
            }
        };
        let particle_sources = paths::PARTICLES
            .iter()
            .map(|path| match load_rgba(path) {
                Ok(img) => Some(img),
                Err(e) => {
                    warn!(target: "satellite_repair", "{e:#}; particle uses a solid mask");
                    None
                }
            })
            .collect();
        Self {
            astronaut,
            particle_sources,
        }
    }

    /// Masks that are solid everywhere; no file access.
    pub fn solid(astronaut_size: u32) -> Self {
        Self {
            astronaut: CollisionMask::solid(astronaut_size, astronaut_size),
            particle_sources: vec![None; paths::PARTICLES.len()],
        }
    }

    pub fn variants(&self) -> usize {
        self.particle_sources.len()
    }

    pub fn particle_mask(&self, variant: usize, size: u32) -> CollisionMask {
        match self.particle_sources.get(variant) {
            Some(Some(img)) => CollisionMask::from_image_scaled(img, size, size),
            _ => CollisionMask::solid(size, size),
        }
    }
}
