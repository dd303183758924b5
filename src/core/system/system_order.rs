//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. PreUpdate: device state -> `PlayerIntent` (InputActionUpdateSet)
//! 2. FixedUpdate: level simulation at the configured tick rate (LevelSimSet)
//! 3. Update: simulation state -> transforms / sprites / HUD (PresentationSet)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct LevelSimSet; // fixed-tick gameplay of the active level

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PresentationSet; // visuals follow simulation state
